//! Agent-level error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The backend could not produce a response.
    #[error("agent backend failed: {0}")]
    Backend(String),

    /// The run was given a prompt with nothing in it and the tool has no
    /// default prompt to fall back on.
    #[error("no prompt supplied for tool '{0}'")]
    EmptyPrompt(String),
}
