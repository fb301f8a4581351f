//! Scene and action records, plus the timing rules that apply to them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tooltip anchor in percent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPosition {
    pub x: f64,
    pub y: f64,
}

/// One scripted step. Durations are in milliseconds; an absent or zero
/// duration falls back to the per-kind default in [`PlayerConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DemoAction {
    /// Switch to a route.
    Navigate {
        target: String,
        #[serde(default)]
        duration_ms: Option<u64>,
    },
    /// Outline the element matching a CSS-style selector.
    Highlight {
        target: String,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        duration_ms: Option<u64>,
    },
    Tooltip {
        message: String,
        #[serde(default)]
        position: Option<TooltipPosition>,
        #[serde(default)]
        duration_ms: Option<u64>,
    },
    Wait {
        #[serde(default)]
        duration_ms: Option<u64>,
    },
    Click {
        target: String,
    },
    Type {
        target: String,
        value: String,
    },
}

impl DemoAction {
    /// Caption shown while the action is current.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Highlight { message, .. } => message.as_deref(),
            Self::Tooltip { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Navigate { .. }  => "navigate",
            Self::Highlight { .. } => "highlight",
            Self::Tooltip { .. }   => "tooltip",
            Self::Wait { .. }      => "wait",
            Self::Click { .. }     => "click",
            Self::Type { .. }      => "type",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoScene {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Advertised running time, for display only.
    pub duration_ms: u64,
    pub actions: Vec<DemoAction>,
}

/// Timing used by the auto-advancing player.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Pause between an action becoming current and its side effect.
    pub lead_in: Duration,
    pub navigate: Duration,
    pub highlight: Duration,
    /// Used by both tooltip and wait actions.
    pub tooltip: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            lead_in: Duration::from_millis(500),
            navigate: Duration::from_millis(1000),
            highlight: Duration::from_millis(3000),
            tooltip: Duration::from_millis(2000),
        }
    }
}

impl PlayerConfig {
    /// How long `action` stays current after its side effect.
    /// Click and type actions advance immediately.
    pub fn hold_for(&self, action: &DemoAction) -> Duration {
        let explicit = |ms: &Option<u64>, fallback: Duration| {
            ms.filter(|ms| *ms > 0).map_or(fallback, Duration::from_millis)
        };
        match action {
            DemoAction::Navigate { duration_ms, .. } => explicit(duration_ms, self.navigate),
            DemoAction::Highlight { duration_ms, .. } => explicit(duration_ms, self.highlight),
            DemoAction::Tooltip { duration_ms, .. } | DemoAction::Wait { duration_ms } => {
                explicit(duration_ms, self.tooltip)
            }
            DemoAction::Click { .. } | DemoAction::Type { .. } => Duration::ZERO,
        }
    }

    /// Lead-in plus hold for every action of `scene`.
    pub fn scene_length(&self, scene: &DemoScene) -> Duration {
        scene.actions.iter().map(|a| self.lead_in + self.hold_for(a)).sum()
    }
}
