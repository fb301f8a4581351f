//! Typed error type for the store crate.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Lookup by ID found nothing; the repository is unchanged.
    #[error("{entity} '{id}' not found")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// No credential matches the given email/password pair.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A record with this ID is already present.
    #[error("{entity} '{id}' already exists")]
    Duplicate {
        entity: &'static str,
        id: String,
    },
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { entity, id: id.into() }
    }
}
