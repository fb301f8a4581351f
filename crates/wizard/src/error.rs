//! Wizard error type.

use thiserror::Error;

use crate::WizardStep;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// `complete` was called before the last step.
    #[error("project can only be created from the final step (currently at {0})")]
    NotAtFinalStep(WizardStep),

    /// A required draft field is blank.
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),

    #[error("unknown integration '{0}'")]
    UnknownIntegration(String),

    /// Required integrations cannot be deselected.
    #[error("integration '{0}' is required")]
    RequiredIntegration(String),

    #[error(transparent)]
    Store(#[from] store::StoreError),
}
