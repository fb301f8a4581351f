//! The playback cursor.

use tracing::{debug, info};

use crate::{DemoAction, DemoScene};

/// Index cursor over a scene. Idle when no scene is loaded.
#[derive(Debug, Clone, Default)]
pub struct DemoPlayer {
    scene: Option<DemoScene>,
    index: usize,
}

impl DemoPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `scene` and point at its first action. An empty scene leaves
    /// the player idle.
    pub fn start(&mut self, scene: DemoScene) {
        info!(scene = %scene.id, actions = scene.actions.len(), "demo started");
        self.index = 0;
        self.scene = (!scene.actions.is_empty()).then_some(scene);
    }

    /// Move to the following action; past the last one the player goes idle.
    pub fn next(&mut self) -> Option<&DemoAction> {
        let len = self.scene.as_ref()?.actions.len();
        if self.index + 1 < len {
            self.index += 1;
            debug!(index = self.index, "demo advanced");
        } else {
            info!("demo finished");
            self.stop();
        }
        self.current_action()
    }

    /// Leave the demo from wherever it is.
    pub fn skip(&mut self) {
        if self.is_active() {
            info!(index = self.index, "demo skipped");
        }
        self.stop();
    }

    pub fn stop(&mut self) {
        self.scene = None;
        self.index = 0;
    }

    pub fn is_active(&self) -> bool {
        self.scene.is_some()
    }

    pub fn scene(&self) -> Option<&DemoScene> {
        self.scene.as_ref()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_action(&self) -> Option<&DemoAction> {
        self.scene.as_ref()?.actions.get(self.index)
    }
}
