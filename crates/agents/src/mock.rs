//! `MockAgent`: a test double for `AgentBackend`.
//!
//! Records every `(tool_id, prompt)` pair it is asked about and returns a
//! programmer-specified result.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use store::models::Tool;

use crate::{AgentBackend, AgentError};

/// Behaviour injected into `MockAgent` at construction time.
pub enum MockBehaviour {
    /// Answer with this text.
    Respond(String),
    /// Fail with `AgentError::Backend`.
    Fail(String),
}

pub struct MockAgent {
    pub behaviour: MockBehaviour,
    /// All `(tool_id, prompt)` pairs seen, in call order.
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAgent {
    pub fn responding(text: impl Into<String>) -> Self {
        Self {
            behaviour: MockBehaviour::Respond(text.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(msg: impl Into<String>) -> Self {
        Self {
            behaviour: MockBehaviour::Fail(msg.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times this agent has been asked to respond.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl AgentBackend for MockAgent {
    async fn respond(&self, tool: &Tool, prompt: &str) -> Result<String, AgentError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((tool.tool_id.clone(), prompt.to_owned()));
        }

        match &self.behaviour {
            MockBehaviour::Respond(text) => Ok(text.clone()),
            MockBehaviour::Fail(msg)     => Err(AgentError::Backend(msg.clone())),
        }
    }
}
