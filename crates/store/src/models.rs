//! Record types held by the in-memory repository.
//!
//! These are plain data records: behaviour lives on [`crate::Repository`]
//! and in the crates that consume it.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    ProjectManager,
    Developer,
    BusinessAnalyst,
    Designer,
    Architect,
    QaEngineer,
    ProductOwner,
    Strategist,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectManager  => write!(f, "Project Manager"),
            Self::Developer       => write!(f, "Developer"),
            Self::BusinessAnalyst => write!(f, "Business Analyst"),
            Self::Designer        => write!(f, "Designer"),
            Self::Architect       => write!(f, "Architect"),
            Self::QaEngineer      => write!(f, "QA Engineer"),
            Self::ProductOwner    => write!(f, "Product Owner"),
            Self::Strategist      => write!(f, "Strategist"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub theme: Theme,
    pub notifications: bool,
    pub email_digest: bool,
}

/// A signed-in identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
    pub avatar: String,
    pub permissions: Vec<String>,
    /// IDs of the projects this user works on.
    pub active_projects: Vec<String>,
    pub preferences: UserPreferences,
}

/// Demo login pair; passwords are plain text by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    Away,
}

/// A user as they appear on a project team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user_id: String,
    pub name: String,
    pub role: UserRole,
    pub avatar: String,
    pub availability: Availability,
}

// ---------------------------------------------------------------------------
// tools
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    AiAgents,
    Integrations,
    Collaboration,
    Analytics,
    AgentOrchestrator,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 5] = [
        ToolCategory::AgentOrchestrator,
        ToolCategory::AiAgents,
        ToolCategory::Integrations,
        ToolCategory::Collaboration,
        ToolCategory::Analytics,
    ];
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AiAgents          => write!(f, "ai_agents"),
            Self::Integrations      => write!(f, "integrations"),
            Self::Collaboration     => write!(f, "collaboration"),
            Self::Analytics         => write!(f, "analytics"),
            Self::AgentOrchestrator => write!(f, "agent_orchestrator"),
        }
    }
}

impl std::str::FromStr for ToolCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai_agents"          => Ok(Self::AiAgents),
            "integrations"       => Ok(Self::Integrations),
            "collaboration"      => Ok(Self::Collaboration),
            "analytics"          => Ok(Self::Analytics),
            "agent_orchestrator" => Ok(Self::AgentOrchestrator),
            other                => Err(format!("unknown tool category: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Select,
    Checkbox,
}

/// One input on an integration's setup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigField {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// A toolbox entry: AI agent, integration, or collaboration tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub tool_id: String,
    pub name: String,
    pub category: ToolCategory,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub configuration: Map<String, Value>,
    pub permissions: Vec<String>,
    pub integrations: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    /// System prompt for AI agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub config_fields: Vec<ConfigField>,
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    Active,
    Completed,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planning  => write!(f, "planning"),
            Self::Active    => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning"  => Ok(Self::Planning),
            "active"    => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other       => Err(format!("unknown project status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationStatus {
    Connected,
    Disconnected,
    Error,
}

/// An external system wired into a project workbench.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    pub integration_id: String,
    pub name: String,
    /// Free-form category, e.g. `version_control`.
    pub kind: String,
    pub status: IntegrationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<NaiveDateTime>,
    #[serde(default)]
    pub config: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryKind {
    Git,
    Sharepoint,
    Confluence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRepository {
    pub repo_id: String,
    pub name: String,
    pub kind: RepositoryKind,
    pub url: String,
}

/// Everything attached to a project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workbench {
    pub active_tools: Vec<Tool>,
    pub integrations: Vec<Integration>,
    pub repositories: Vec<SourceRepository>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectMetrics {
    /// Percent, 0–100.
    pub completion: u8,
    pub velocity: u32,
    /// Percent, 0–100.
    pub ai_utilization: u8,
    pub tasks_completed: u32,
    pub total_tasks: u32,
    pub issues_open: u32,
    pub commits: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    pub client: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub target_end_date: NaiveDate,
    pub team: Vec<TeamMember>,
    pub workbench: Workbench,
    pub metrics: ProjectMetrics,
    pub last_activity: String,
}

/// Partial update for a project. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub client: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub team: Option<Vec<TeamMember>>,
    pub metrics: Option<ProjectMetrics>,
    pub last_activity: Option<String>,
}

// ---------------------------------------------------------------------------
// calendar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Meeting,
    Deadline,
    Milestone,
    Review,
}

impl std::str::FromStr for EventType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meeting"   => Ok(Self::Meeting),
            "deadline"  => Ok(Self::Deadline),
            "milestone" => Ok(Self::Milestone),
            "review"    => Ok(Self::Review),
            other       => Err(format!("unknown event type: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// User IDs.
    pub attendees: Vec<String>,
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// An event before the repository assigns its ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub attendees: Vec<String>,
    pub event_type: EventType,
    pub project_id: Option<String>,
    pub location: Option<String>,
}
