//! Demo error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("no demo scene with id '{0}'")]
    UnknownScene(String),

    /// A scene document did not parse.
    #[error("invalid scene document: {0}")]
    Parse(#[from] serde_json::Error),
}
