//! Timer-driven auto-advance.

use std::time::Duration;

use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::{DemoAction, DemoPlayer, PlayerConfig, TooltipPosition};

/// Side effects a scene can ask for.
pub trait DemoHost {
    fn navigate(&mut self, route: &str);

    /// Outline the element matching `selector`. Returns `false` if no such
    /// element exists, in which case nothing is shown.
    fn highlight(&mut self, selector: &str, message: Option<&str>) -> bool;

    fn clear_highlight(&mut self);

    fn show_tooltip(&mut self, message: &str, position: Option<TooltipPosition>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Every action ran and the player is idle.
    Finished,
    /// Cancelled part-way; the player has been stopped.
    Stopped { at_index: usize },
}

/// Play the player's current scene to the end.
///
/// Each action waits `lead_in`, applies its side effect, then stays current
/// for [`PlayerConfig::hold_for`] before the cursor moves on. A permit on
/// `next` advances at once: during the hold it clears any highlight and moves
/// to the following action, during the lead-in the pending side effect is
/// dropped. Cancelling stops the player and removes any highlight left on
/// screen.
#[instrument(skip_all, fields(scene = player.scene().map(|s| s.id.as_str()).unwrap_or("")))]
pub async fn play<H: DemoHost>(
    player: &mut DemoPlayer,
    host: &mut H,
    config: &PlayerConfig,
    next: &Notify,
    cancel: &CancellationToken,
) -> PlaybackOutcome {
    while let Some(action) = player.current_action().cloned() {
        let index = player.index();

        match wait(config.lead_in, next, cancel).await {
            Wake::Cancelled => return stop(player, host, false, index),
            Wake::Next => {
                debug!(index, "advanced before side effect");
                player.next();
                continue;
            }
            Wake::Elapsed => {}
        }

        let highlighted = apply(host, &action);

        match wait(config.hold_for(&action), next, cancel).await {
            Wake::Cancelled => return stop(player, host, highlighted, index),
            Wake::Next => debug!(index, "advanced early"),
            Wake::Elapsed => {}
        }
        if highlighted {
            host.clear_highlight();
        }
        player.next();
    }

    info!("demo playback finished");
    PlaybackOutcome::Finished
}

/// Returns whether a highlight is now on screen.
fn apply<H: DemoHost>(host: &mut H, action: &DemoAction) -> bool {
    match action {
        DemoAction::Navigate { target, .. } => {
            host.navigate(target);
            false
        }
        DemoAction::Highlight { target, message, .. } => {
            let found = host.highlight(target, message.as_deref());
            if !found {
                debug!(selector = %target, "highlight target absent, skipping");
            }
            found
        }
        DemoAction::Tooltip { message, position, .. } => {
            host.show_tooltip(message, *position);
            false
        }
        DemoAction::Wait { .. } | DemoAction::Click { .. } | DemoAction::Type { .. } => false,
    }
}

enum Wake {
    Elapsed,
    Next,
    Cancelled,
}

async fn wait(duration: Duration, next: &Notify, cancel: &CancellationToken) -> Wake {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Wake::Cancelled,
        () = next.notified() => Wake::Next,
        () = tokio::time::sleep(duration) => Wake::Elapsed,
    }
}

fn stop<H: DemoHost>(player: &mut DemoPlayer, host: &mut H, highlighted: bool, index: usize) -> PlaybackOutcome {
    if highlighted {
        host.clear_highlight();
    }
    player.skip();
    PlaybackOutcome::Stopped { at_index: index }
}
