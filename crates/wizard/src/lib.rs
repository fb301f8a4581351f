//! `wizard` crate: the four-step "new project" flow.
//!
//! A linear step cursor over a single draft record. Steps never validate
//! each other; each only checks that its own required fields are present
//! before the caller moves on. Finishing packages the draft into a project
//! and appends it to the repository.

pub mod error;
pub mod step;
pub mod recommend;
pub mod integrations;
pub mod flow;

pub use error::WizardError;
pub use step::WizardStep;
pub use recommend::{recommend, Recommendation};
pub use integrations::{IntegrationOption, INTEGRATION_CATALOGUE};
pub use flow::{ProjectDraft, Wizard, WizardConfig};
