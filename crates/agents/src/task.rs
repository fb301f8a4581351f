//! Cancellable phase schedules.
//!
//! A `PhasedTask` is an explicit list of `(delay, phase)` transitions. Running
//! it sleeps through each delay in turn, publishes the new phase on a `watch`
//! channel, and stops early if the cancellation token fires. Nothing is left
//! pending after `run` returns, whichever way it ends.

use std::fmt;
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// How a phased task ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome<P> {
    /// Every transition ran; carries the final phase.
    Completed(P),
    /// The token fired first; carries the phase reached before that.
    Cancelled { last_phase: P },
}

#[derive(Debug, Clone)]
struct Transition<P> {
    delay: Duration,
    phase: P,
}

#[derive(Debug)]
pub struct PhasedTask<P> {
    transitions: Vec<Transition<P>>,
    tx: watch::Sender<P>,
}

impl<P> PhasedTask<P>
where
    P: Clone + fmt::Debug + Send + Sync,
{
    /// A task sitting in `initial` with no transitions yet.
    pub fn new(initial: P) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { transitions: Vec::new(), tx }
    }

    /// Append a transition to `phase` after `delay`.
    pub fn then(mut self, delay: Duration, phase: P) -> Self {
        self.transitions.push(Transition { delay, phase });
        self
    }

    /// Observe phase changes.
    pub fn subscribe(&self) -> watch::Receiver<P> {
        self.tx.subscribe()
    }

    pub fn phase(&self) -> P {
        self.tx.borrow().clone()
    }

    /// Total scheduled time if never cancelled.
    pub fn duration(&self) -> Duration {
        self.transitions.iter().map(|t| t.delay).sum()
    }

    pub async fn run(&self, cancel: &CancellationToken) -> TaskOutcome<P> {
        for transition in &self.transitions {
            tokio::select! {
                biased;

                () = cancel.cancelled() => {
                    let last_phase = self.phase();
                    info!(?last_phase, "phased task cancelled");
                    return TaskOutcome::Cancelled { last_phase };
                }

                () = tokio::time::sleep(transition.delay) => {
                    debug!(phase = ?transition.phase, "phase reached");
                    self.tx.send_replace(transition.phase.clone());
                }
            }
        }
        TaskOutcome::Completed(self.phase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn schedule() -> PhasedTask<&'static str> {
        PhasedTask::new("idle")
            .then(Duration::from_millis(500), "one")
            .then(Duration::from_millis(1000), "two")
            .then(Duration::from_millis(1000), "three")
    }

    #[tokio::test(start_paused = true)]
    async fn runs_every_transition_in_order() {
        let task = schedule();
        let mut rx = task.subscribe();
        let start = Instant::now();

        let seen = tokio::spawn(async move {
            let mut phases = Vec::new();
            while rx.changed().await.is_ok() {
                phases.push(*rx.borrow());
            }
            phases
        });

        let outcome = task.run(&CancellationToken::new()).await;
        assert_eq!(outcome, TaskOutcome::Completed("three"));
        assert_eq!(start.elapsed(), Duration::from_millis(2500));

        drop(task);
        assert_eq!(seen.await.unwrap(), vec!["one", "two", "three"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_before_the_next_phase() {
        let task = schedule();
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(900)).await;
            trigger.cancel();
        });

        let outcome = task.run(&cancel).await;
        assert_eq!(outcome, TaskOutcome::Cancelled { last_phase: "one" });
        assert_eq!(task.phase(), "one");
    }

    #[tokio::test(start_paused = true)]
    async fn already_cancelled_token_changes_nothing() {
        let task = schedule();
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert_eq!(task.run(&cancel).await, TaskOutcome::Cancelled { last_phase: "idle" });
    }
}
