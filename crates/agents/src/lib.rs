//! `agents` crate: simulated AI agents and the timed tasks that drive them.
//!
//! Every agent is reached through the [`AgentBackend`] trait. Latency is
//! simulated with tokio timers and every timed task stops promptly when its
//! `CancellationToken` fires, so nothing keeps running after its owner is gone.

pub mod error;
pub mod backend;
pub mod mock;
pub mod task;
pub mod run;
pub mod scheduling;

pub use error::AgentError;
pub use backend::{AgentBackend, CannedAgent};
pub use task::{PhasedTask, TaskOutcome};
pub use run::{AgentRun, RunConfig, RunOutcome, RunOutput};
pub use scheduling::{MeetingSuggester, MeetingSuggestion, PendingSuggestion, SuggestionConfig, SuggestionPhase};
