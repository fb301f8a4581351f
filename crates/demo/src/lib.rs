//! `demo` crate: scripted walkthroughs of the platform.
//!
//! A scene is a flat list of actions. [`DemoPlayer`] is the index cursor over
//! it; [`play`] advances that cursor on timers and applies each action's side
//! effect through a [`DemoHost`]. No branching, no retries: a highlight whose
//! target is absent is skipped and playback carries on.

pub mod error;
pub mod action;
pub mod scenes;
pub mod player;
pub mod playback;

pub use error::DemoError;
pub use action::{DemoAction, DemoScene, PlayerConfig, TooltipPosition};
pub use scenes::{builtin_scenes, find_scene};
pub use player::DemoPlayer;
pub use playback::{play, DemoHost, PlaybackOutcome};
