//! The in-memory repository: one struct, one module per record type.
//!
//! A `Repository` is built once at session start (usually from
//! [`crate::fixtures::Fixtures::demo`]) and handed by reference to whatever
//! needs it. Lookups return `StoreError::NotFound`; a failed write leaves
//! every collection untouched.

pub mod projects;
pub mod tools;
pub mod users;
pub mod calendar;

use tracing::debug;

use crate::fixtures::Fixtures;
use crate::models::{CalendarEvent, Credential, Project, Tool, User};

pub use projects::ProjectSearch;
pub use tools::{ToolQuery, ToolSort};

#[derive(Debug, Clone, Default)]
pub struct Repository {
    users: Vec<User>,
    credentials: Vec<Credential>,
    projects: Vec<Project>,
    tools: Vec<Tool>,
    events: Vec<CalendarEvent>,
    /// Project currently open in the workbench, tracked by ID so updates
    /// are always visible through it.
    current_project: Option<String>,
}

impl Repository {
    pub fn new(fixtures: Fixtures) -> Self {
        let Fixtures { users, credentials, projects, tools, events } = fixtures;
        debug!(
            users = users.len(),
            projects = projects.len(),
            tools = tools.len(),
            events = events.len(),
            "repository seeded"
        );
        Self { users, credentials, projects, tools, events, current_project: None }
    }

    /// Repository loaded with the bundled demo dataset.
    pub fn seeded() -> Self {
        Self::new(Fixtures::demo())
    }
}
