//! Project operations.

use std::collections::HashMap;

use tracing::{debug, info};

use super::Repository;
use crate::models::{Project, ProjectPatch, ProjectStatus, Tool};
use crate::StoreError;

/// Filter used by the projects page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSearch {
    /// Case-insensitive substring of the project name or client.
    pub text: String,
    /// `None` matches every status.
    pub status: Option<ProjectStatus>,
}

impl ProjectSearch {
    fn matches(&self, project: &Project) -> bool {
        let needle = self.text.to_lowercase();
        let matches_text = project.name.to_lowercase().contains(&needle)
            || project.client.to_lowercase().contains(&needle);
        let matches_status = self.status.map_or(true, |s| s == project.status);
        matches_text && matches_status
    }
}

impl Repository {
    /// All projects in insertion order.
    pub fn list_projects(&self) -> &[Project] {
        &self.projects
    }

    /// Fetch a single project by ID.
    pub fn get_project(&self, id: &str) -> Result<&Project, StoreError> {
        self.projects
            .iter()
            .find(|p| p.project_id == id)
            .ok_or_else(|| StoreError::not_found("project", id))
    }

    /// Append a project.
    ///
    /// Returns `StoreError::Duplicate` if the ID is taken.
    pub fn add_project(&mut self, project: Project) -> Result<(), StoreError> {
        if self.projects.iter().any(|p| p.project_id == project.project_id) {
            return Err(StoreError::Duplicate { entity: "project", id: project.project_id });
        }
        info!(project_id = %project.project_id, name = %project.name, "project added");
        self.projects.push(project);
        Ok(())
    }

    /// Merge `patch` into an existing project.
    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> Result<&Project, StoreError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.project_id == id)
            .ok_or_else(|| StoreError::not_found("project", id))?;

        let ProjectPatch { name, client, description, status, team, metrics, last_activity } = patch;
        if let Some(v) = name {
            project.name = v;
        }
        if let Some(v) = client {
            project.client = v;
        }
        if let Some(v) = description {
            project.description = v;
        }
        if let Some(v) = status {
            project.status = v;
        }
        if let Some(v) = team {
            project.team = v;
        }
        if let Some(v) = metrics {
            project.metrics = v;
        }
        if let Some(v) = last_activity {
            project.last_activity = v;
        }

        debug!(project_id = %id, "project updated");
        Ok(project)
    }

    /// Attach a tool to a project's workbench.
    pub fn add_tool_to_project(&mut self, project_id: &str, tool: Tool) -> Result<(), StoreError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.project_id == project_id)
            .ok_or_else(|| StoreError::not_found("project", project_id))?;

        debug!(%project_id, tool_id = %tool.tool_id, "tool attached");
        project.workbench.active_tools.push(tool);
        Ok(())
    }

    pub fn search_projects(&self, search: &ProjectSearch) -> Vec<&Project> {
        self.projects.iter().filter(|p| search.matches(p)).collect()
    }

    /// Number of projects per status. Statuses with no projects map to 0.
    pub fn status_counts(&self) -> HashMap<ProjectStatus, usize> {
        let mut counts: HashMap<ProjectStatus, usize> = [
            (ProjectStatus::Planning, 0),
            (ProjectStatus::Active, 0),
            (ProjectStatus::Completed, 0),
        ]
        .into_iter()
        .collect();
        for project in &self.projects {
            *counts.entry(project.status).or_insert(0) += 1;
        }
        counts
    }

    /// Projects listed in a user's `active_projects`.
    pub fn projects_for_user(&self, user_id: &str) -> Result<Vec<&Project>, StoreError> {
        let user = self.get_user(user_id)?;
        Ok(self
            .projects
            .iter()
            .filter(|p| user.active_projects.contains(&p.project_id))
            .collect())
    }

    // -----------------------------------------------------------------------
    // current project
    // -----------------------------------------------------------------------

    /// Open a project in the workbench; `None` closes it.
    pub fn set_current_project(&mut self, id: Option<&str>) -> Result<(), StoreError> {
        if let Some(id) = id {
            self.get_project(id)?;
        }
        self.current_project = id.map(str::to_owned);
        Ok(())
    }

    pub fn current_project(&self) -> Option<&Project> {
        let id = self.current_project.as_deref()?;
        self.get_project(id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_unknown_project_is_not_found() {
        let repo = Repository::seeded();
        assert_eq!(
            repo.get_project("proj999"),
            Err(StoreError::NotFound { entity: "project", id: "proj999".into() })
        );
    }

    #[test]
    fn update_is_visible_through_current_project() {
        let mut repo = Repository::seeded();
        repo.set_current_project(Some("proj001")).unwrap();

        let patch = ProjectPatch { status: Some(ProjectStatus::Completed), ..Default::default() };
        repo.update_project("proj001", patch).unwrap();

        assert_eq!(repo.current_project().unwrap().status, ProjectStatus::Completed);
    }

    #[test]
    fn failed_update_leaves_projects_untouched() {
        let mut repo = Repository::seeded();
        let before = repo.list_projects().to_vec();
        let patch = ProjectPatch { name: Some("x".into()), ..Default::default() };
        assert!(repo.update_project("nope", patch).is_err());
        assert_eq!(repo.list_projects(), before.as_slice());
    }

    #[test]
    fn search_matches_name_or_client_case_insensitively() {
        let repo = Repository::seeded();
        let by_client = repo.search_projects(&ProjectSearch { text: "GLOBAL retail".into(), status: None });
        assert_eq!(by_client.len(), 1);
        assert_eq!(by_client[0].project_id, "proj001");

        let none = repo.search_projects(&ProjectSearch {
            text: "e-commerce".into(),
            status: Some(ProjectStatus::Planning),
        });
        assert!(none.is_empty());
    }

    #[test]
    fn status_counts_cover_every_project() {
        let repo = Repository::seeded();
        let counts = repo.status_counts();
        assert_eq!(counts.values().sum::<usize>(), repo.list_projects().len());
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn tool_is_appended_to_workbench() {
        let mut repo = Repository::seeded();
        let tool = repo.get_tool("tool009").unwrap().clone();
        let before = repo.get_project("proj002").unwrap().workbench.active_tools.len();

        repo.add_tool_to_project("proj002", tool).unwrap();

        let tools = &repo.get_project("proj002").unwrap().workbench.active_tools;
        assert_eq!(tools.len(), before + 1);
        assert_eq!(tools.last().unwrap().tool_id, "tool009");
    }

    #[test]
    fn dashboard_lists_only_the_users_projects() {
        let repo = Repository::seeded();
        let ids: Vec<&str> = repo
            .projects_for_user("dev001")
            .unwrap()
            .iter()
            .map(|p| p.project_id.as_str())
            .collect();
        assert_eq!(ids, vec!["proj001", "proj003"]);
    }
}
