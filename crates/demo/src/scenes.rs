//! Scenes bundled with the platform.

use crate::{DemoError, DemoScene};

const BUILTIN: &str = include_str!("../scenes/builtin.json");

/// Parse the bundled scene document.
pub fn builtin_scenes() -> Result<Vec<DemoScene>, DemoError> {
    Ok(serde_json::from_str(BUILTIN)?)
}

pub fn find_scene(id: &str) -> Result<DemoScene, DemoError> {
    builtin_scenes()?
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| DemoError::UnknownScene(id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DemoAction;

    #[test]
    fn bundled_scenes_parse() {
        let ids: Vec<String> = builtin_scenes().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["platform-tour", "quick-start", "agent-orchestrator"]);
    }

    #[test]
    fn quick_start_walks_the_nav() {
        let scene = find_scene("quick-start").unwrap();
        let targets: Vec<&str> = scene
            .actions
            .iter()
            .filter_map(|a| match a {
                DemoAction::Highlight { target, .. } => Some(target.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(targets, vec![".nav-projects", ".nav-toolbox", ".nav-calendar"]);
    }

    #[test]
    fn unknown_scene_is_an_error() {
        assert!(matches!(find_scene("nope"), Err(DemoError::UnknownScene(id)) if id == "nope"));
    }
}
