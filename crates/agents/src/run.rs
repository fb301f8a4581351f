//! A single agent run with simulated thinking time.
//!
//! The run sleeps `steps + 1` times for `total / steps` each, publishing
//! progress `i / steps * 100` after the i-th sleep, and only then asks the
//! backend for its answer. Cancelling the token at any point ends the run
//! with the progress reached so far.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use store::models::Tool;

use crate::backend::output_file_name;
use crate::{AgentBackend, AgentError};

/// Timing for the simulated thinking phase.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Nominal length of the thinking phase.
    pub total: Duration,
    /// Number of progress increments; must be at least 1.
    pub steps: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            total: Duration::from_secs(4),
            steps: 20,
        }
    }
}

impl RunConfig {
    fn step_duration(&self) -> Duration {
        self.total / self.steps.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutput {
    pub run_id: Uuid,
    pub tool_id: String,
    /// Markdown produced by the backend.
    pub output: String,
    /// Suggested file name for saving `output`.
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(RunOutput),
    /// Progress in percent at the moment of cancellation.
    Cancelled { progress: f64 },
}

pub struct AgentRun {
    backend: Arc<dyn AgentBackend>,
    config: RunConfig,
    progress: watch::Sender<f64>,
}

impl AgentRun {
    pub fn new(backend: Arc<dyn AgentBackend>, config: RunConfig) -> Self {
        let (progress, _rx) = watch::channel(0.0);
        Self { backend, config, progress }
    }

    /// Observe progress in percent, 0 to 100.
    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.progress.subscribe()
    }

    pub fn progress(&self) -> f64 {
        *self.progress.borrow()
    }

    /// The prompt a run actually uses: `prompt` if given, else the tool's
    /// own default. Blank prompts are rejected.
    pub fn resolve_prompt<'a>(tool: &'a Tool, prompt: Option<&'a str>) -> Result<&'a str, AgentError> {
        prompt
            .or(tool.prompt.as_deref())
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| AgentError::EmptyPrompt(tool.tool_id.clone()))
    }

    #[instrument(skip(self, tool, prompt, cancel), fields(tool_id = %tool.tool_id))]
    pub async fn execute(
        &self,
        tool: &Tool,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<RunOutcome, AgentError> {
        if prompt.trim().is_empty() {
            return Err(AgentError::EmptyPrompt(tool.tool_id.clone()));
        }

        let steps = self.config.steps.max(1);
        let step = self.config.step_duration();
        self.progress.send_replace(0.0);
        info!(steps, ?step, "agent run started");

        for i in 0..=steps {
            tokio::select! {
                biased;

                () = cancel.cancelled() => return Ok(self.cancelled()),

                () = tokio::time::sleep(step) => {
                    self.progress.send_replace(f64::from(i) / f64::from(steps) * 100.0);
                }
            }
        }

        let output = tokio::select! {
            biased;

            () = cancel.cancelled() => return Ok(self.cancelled()),

            result = self.backend.respond(tool, prompt) => result?,
        };

        info!(chars = output.len(), "agent run completed");
        Ok(RunOutcome::Completed(RunOutput {
            run_id: Uuid::new_v4(),
            tool_id: tool.tool_id.clone(),
            output,
            file_name: output_file_name(tool),
        }))
    }

    fn cancelled(&self) -> RunOutcome {
        let progress = self.progress();
        warn!(progress, "agent run cancelled");
        RunOutcome::Cancelled { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockAgent;
    use crate::CannedAgent;
    use store::Repository;
    use tokio::time::Instant;

    fn tool(id: &str) -> Tool {
        Repository::seeded().get_tool(id).unwrap().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn full_run_takes_steps_plus_one_sleeps() {
        let run = AgentRun::new(Arc::new(CannedAgent), RunConfig::default());
        let start = Instant::now();

        let outcome = run.execute(&tool("tool023"), "research", &CancellationToken::new()).await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(4200));
        assert_eq!(run.progress(), 100.0);
        match outcome {
            RunOutcome::Completed(out) => {
                assert_eq!(out.tool_id, "tool023");
                assert_eq!(out.file_name, "Desk_Research_Agent_output.md");
                assert!(out.output.starts_with("# Market Research Report"));
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn progress_reports_each_step() {
        let config = RunConfig { total: Duration::from_millis(400), steps: 4 };
        let run = AgentRun::new(Arc::new(CannedAgent), config);
        let mut rx = run.subscribe();

        let seen = tokio::spawn(async move {
            let mut values = Vec::new();
            while rx.changed().await.is_ok() {
                values.push(*rx.borrow());
            }
            values
        });

        run.execute(&tool("tool001"), "go", &CancellationToken::new()).await.unwrap();
        drop(run);

        let mut values = seen.await.unwrap();
        values.dedup();
        assert_eq!(values, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_mid_run_skips_the_backend() {
        let mock = Arc::new(MockAgent::responding("never"));
        let run = Arc::new(AgentRun::new(mock.clone(), RunConfig::default()));
        let mut rx = run.subscribe();
        let cancel = CancellationToken::new();

        let handle = {
            let run = Arc::clone(&run);
            let cancel = cancel.clone();
            tokio::spawn(async move { run.execute(&tool("tool007"), "review", &cancel).await })
        };

        while *rx.borrow_and_update() < 25.0 {
            rx.changed().await.unwrap();
        }
        cancel.cancel();

        match handle.await.unwrap().unwrap() {
            RunOutcome::Cancelled { progress } => assert!((25.0..100.0).contains(&progress)),
            other => panic!("expected cancellation, got {other:?}"),
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn backend_failure_is_propagated() {
        let run = AgentRun::new(Arc::new(MockAgent::failing("quota")), RunConfig::default());
        let err = run.execute(&tool("tool009"), "hi", &CancellationToken::new()).await.unwrap_err();
        assert_eq!(err, AgentError::Backend("quota".into()));
    }

    #[test]
    fn prompt_falls_back_to_the_tools_default() {
        let research = tool("tool023");
        assert_eq!(AgentRun::resolve_prompt(&research, None).unwrap(), research.prompt.as_deref().unwrap());
        assert_eq!(AgentRun::resolve_prompt(&research, Some("custom")).unwrap(), "custom");

        let github = tool("tool012");
        assert_eq!(AgentRun::resolve_prompt(&github, None), Err(AgentError::EmptyPrompt("tool012".into())));
        assert!(AgentRun::resolve_prompt(&research, Some("   ")).is_err());
    }
}
