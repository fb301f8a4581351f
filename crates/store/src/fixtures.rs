//! Bundled demo dataset.
//!
//! Built fresh on every call so each repository (and each test) owns its
//! own copy; nothing here is shared mutable state.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use serde_json::Map;

use crate::models::{
    Availability, CalendarEvent, ConfigField, Credential, EventType, FieldType, Integration,
    IntegrationStatus, Project, ProjectMetrics, ProjectStatus, RepositoryKind, SourceRepository,
    TeamMember, Theme, Tool, ToolCategory, User, UserPreferences, UserRole, Workbench,
};

/// Everything a [`crate::Repository`] is seeded with.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub credentials: Vec<Credential>,
    pub projects: Vec<Project>,
    pub tools: Vec<Tool>,
    pub events: Vec<CalendarEvent>,
}

impl Fixtures {
    /// The demo dataset: seven users, four projects, the toolbox catalogue
    /// and a generated team calendar.
    pub fn demo() -> Self {
        let users = users();
        let tools = tools();
        let projects = projects(&users, &tools);
        Self {
            credentials: credentials(),
            events: calendar_events(),
            users,
            projects,
            tools,
        }
    }
}

// ---------------------------------------------------------------------------
// helpers
// ---------------------------------------------------------------------------

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(date: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
    date.and_hms_opt(h, min, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    role: UserRole,
    department: &str,
    permissions: &[&str],
    projects: &[&str],
    theme: Theme,
) -> User {
    let seed = name.split_whitespace().next().unwrap_or(name);
    User {
        user_id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        role,
        department: department.to_owned(),
        avatar: avatar(seed),
        permissions: strings(permissions),
        active_projects: strings(projects),
        preferences: UserPreferences {
            theme,
            notifications: true,
            email_digest: theme == Theme::Light,
        },
    }
}

fn users() -> Vec<User> {
    use UserRole::*;
    vec![
        user("pm001", "Sarah Chen", "pm@merkle.com", ProjectManager, "Project Management",
             &["create_project", "manage_team", "view_analytics"], &["proj001", "proj002", "proj004"], Theme::Light),
        user("dev001", "Marcus Rodriguez", "dev@merkle.com", Developer, "Engineering",
             &["code_commit", "code_review", "deploy"], &["proj001", "proj003"], Theme::Dark),
        user("ba001", "Emma Thompson", "ba@merkle.com", BusinessAnalyst, "Business Analysis",
             &["create_requirements", "manage_backlog"], &["proj001", "proj002"], Theme::Light),
        user("des001", "David Kim", "david.kim@merkle.com", Designer, "UX/UI Design",
             &["design_review", "prototype"], &["proj001", "proj003"], Theme::Light),
        user("arch001", "Priya Patel", "priya.patel@merkle.com", Architect, "Architecture",
             &["architecture_review", "tech_decisions"], &["proj002", "proj004"], Theme::Dark),
        user("qa001", "James Wilson", "james.wilson@merkle.com", QaEngineer, "Quality Assurance",
             &["test_execution", "bug_tracking"], &["proj001", "proj003"], Theme::Light),
        user("strat001", "Alexandra Morgan", "alexandra.morgan@merkle.com", Strategist, "Strategy & Consulting",
             &["create_project", "view_analytics", "client_access"], &["proj004"], Theme::Light),
    ]
}

fn credentials() -> Vec<Credential> {
    [
        ("pm@merkle.com", "pm001"),
        ("dev@merkle.com", "dev001"),
        ("ba@merkle.com", "ba001"),
        ("alexandra.morgan@merkle.com", "strat001"),
    ]
    .into_iter()
    .map(|(email, user_id)| Credential {
        email: email.to_owned(),
        password: "demo123".to_owned(),
        user_id: user_id.to_owned(),
    })
    .collect()
}

/// Team-roster view of a user.
pub fn team_member(user: &User, availability: Availability) -> TeamMember {
    TeamMember {
        user_id: user.user_id.clone(),
        name: user.name.clone(),
        role: user.role,
        avatar: user.avatar.clone(),
        availability,
    }
}

/// The six delivery-team members that can be staffed onto projects.
pub fn team_roster(users: &[User]) -> Vec<TeamMember> {
    [
        ("pm001", Availability::Available),
        ("dev001", Availability::Available),
        ("ba001", Availability::Busy),
        ("des001", Availability::Available),
        ("arch001", Availability::Available),
        ("qa001", Availability::Away),
    ]
    .into_iter()
    .filter_map(|(id, availability)| {
        users.iter().find(|u| u.user_id == id).map(|u| team_member(u, availability))
    })
    .collect()
}

// ---------------------------------------------------------------------------
// tools
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn tool(
    id: &str,
    name: &str,
    category: ToolCategory,
    description: &str,
    icon: &str,
    permissions: &[&str],
    integrations: &[&str],
    featured: bool,
) -> Tool {
    Tool {
        tool_id: id.to_owned(),
        name: name.to_owned(),
        category,
        description: description.to_owned(),
        icon: icon.to_owned(),
        configuration: Map::new(),
        permissions: strings(permissions),
        integrations: strings(integrations),
        featured,
        prompt: None,
        config_fields: Vec::new(),
    }
}

fn text_field(name: &str, label: &str, placeholder: &str) -> ConfigField {
    ConfigField {
        name: name.to_owned(),
        label: label.to_owned(),
        field_type: FieldType::Text,
        placeholder: Some(placeholder.to_owned()),
        options: Vec::new(),
    }
}

fn tools() -> Vec<Tool> {
    use ToolCategory::*;

    let mut scheduler = tool("tool001", "Meeting Scheduler Agent", AiAgents,
        "Automatically schedule meetings across time zones with optimal time recommendations",
        "Calendar", &["calendar_access"], &["microsoft_teams", "google_calendar"], true);
    scheduler.prompt = Some(
        "You are an intelligent meeting scheduling assistant. Analyze participant calendars \
         across time zones, identify optimal meeting times that minimize conflicts, respect \
         working hours, and draft professional invitations with a clear agenda."
            .to_owned(),
    );

    let mut docs = tool("tool002", "Documentation Generator", AiAgents,
        "Generate comprehensive documentation from codebase, API specs, and technical artifacts",
        "FileText", &["repo_access"], &["github", "confluence"], true);
    docs.prompt = Some(
        "You are a technical writer. Produce clear, structured documentation from source code, \
         API specifications and architecture notes, with examples for every public interface."
            .to_owned(),
    );

    let mut claude = tool("tool009", "Claude.ai Integration", Integrations,
        "Direct integration with Claude AI for advanced reasoning and code generation",
        "Bot", &["ai_access"], &[], true);
    claude.config_fields = vec![
        text_field("apiKey", "Anthropic API Key", "sk-ant-xxxxx"),
        ConfigField {
            name: "model".to_owned(),
            label: "Model Version".to_owned(),
            field_type: FieldType::Select,
            placeholder: None,
            options: strings(&["claude-3-opus", "claude-3-sonnet", "claude-3-haiku"]),
        },
    ];

    let mut jira = tool("tool010", "Jira Suite", Integrations,
        "Full Atlassian Jira integration for project management and issue tracking",
        "Trello", &["jira_access"], &[], false);
    jira.config_fields = vec![
        text_field("instanceUrl", "Jira Instance URL", "https://yourcompany.atlassian.net"),
        text_field("apiToken", "API Token", "Enter your Jira API token"),
        text_field("projectKey", "Default Project Key", "PROJ"),
    ];

    let mut research = tool("tool023", "Desk Research Agent", AiAgents,
        "Conduct comprehensive desk research including market analysis, competitive intelligence, \
         industry trends, and strategic insights gathering",
        "Search", &["web_access"], &["sharepoint"], true);
    research.prompt = Some(
        "You are a research analyst. Gather market data, profile competitors and summarise \
         industry trends into an executive-ready report with cited sources."
            .to_owned(),
    );

    let mut use_cases = tool("tool024", "Use Case Development Agent", AiAgents,
        "Develop comprehensive use cases for technology implementations, business processes, \
         and strategic initiatives with detailed scenarios and requirements",
        "Target", &["content_creation"], &["confluence"], true);
    use_cases.prompt = Some(
        "You are a business analyst. Turn the initiative described by the user into a complete \
         use case: actors, preconditions, basic and alternative flows, business rules and \
         success metrics."
            .to_owned(),
    );

    vec![
        scheduler,
        docs,
        tool("tool003", "Status Report Creator", AiAgents,
             "Create executive status reports in web, PowerPoint, or PDF format",
             "PieChart", &["report_generation"], &["jira", "github"], true),
        tool("tool004", "Visual QA Agent", AiAgents,
             "Automated visual regression testing and UI consistency checks",
             "Eye", &["test_execution"], &["figma", "github"], false),
        tool("tool005", "Use Case Documenter", AiAgents,
             "Generate detailed use case documentation from requirements and user stories",
             "BookOpen", &["content_creation"], &["jira", "confluence"], false),
        tool("tool006", "Training Material Generator", AiAgents,
             "Create training materials, user guides, and onboarding documentation",
             "GraduationCap", &["content_creation"], &["sharepoint", "confluence"], false),
        tool("tool007", "Code Review Assistant", AiAgents,
             "AI-powered code review with security, performance, and best practice recommendations",
             "Code", &["repo_access", "code_review"], &["github"], true),
        tool("tool008", "Sprint Planning Assistant", AiAgents,
             "Optimize sprint planning with capacity analysis and task recommendations",
             "Zap", &["jira_access"], &["jira"], false),
        claude,
        jira,
        tool("tool012", "GitHub", Integrations,
             "Version control and CI/CD integration with GitHub",
             "Github", &["repo_access"], &[], false),
        tool("tool013", "Figma", Integrations,
             "Design collaboration and prototyping with Figma integration",
             "Figma", &["design_access"], &[], false),
        tool("tool014", "Real-time Whiteboard", Collaboration,
             "Collaborative digital whiteboard for brainstorming and planning",
             "PenTool", &["collaboration"], &["microsoft_teams"], false),
        tool("tool015", "Shared Documentation", Collaboration,
             "Real-time collaborative document editing and version control",
             "FileText", &["collaboration"], &["sharepoint"], false),
        tool("tool017", "Project Analytics Dashboard", Analytics,
             "Comprehensive project metrics, KPIs, and performance analytics",
             "BarChart", &["view_analytics"], &["jira", "github"], false),
        tool("tool020", "AI Usage Analytics", Analytics,
             "Monitor AI tool adoption, usage patterns, and ROI metrics",
             "Activity", &["view_analytics"], &[], false),
        tool("tool022", "Agentic Component Creator", AgentOrchestrator,
             "Design-to-code workflow that transforms Figma designs into tested React components \
              using orchestrated AI agents",
             "Workflow", &["ai_access", "design_access"], &["figma", "github"], true),
        research,
        use_cases,
    ]
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

fn connected(id: &str, name: &str, kind: &str) -> Integration {
    Integration {
        integration_id: id.to_owned(),
        name: name.to_owned(),
        kind: kind.to_owned(),
        status: IntegrationStatus::Connected,
        last_sync: None,
        config: Map::new(),
    }
}

fn pick_tools(tools: &[Tool], ids: &[&str]) -> Vec<Tool> {
    ids.iter()
        .filter_map(|id| tools.iter().find(|t| t.tool_id == *id).cloned())
        .collect()
}

fn pick_team(roster: &[TeamMember], ids: &[&str]) -> Vec<TeamMember> {
    ids.iter()
        .filter_map(|id| roster.iter().find(|m| m.user_id == *id).cloned())
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    client: &str,
    description: &str,
    dates: (NaiveDate, NaiveDate),
    team: Vec<TeamMember>,
    workbench: Workbench,
    metrics: ProjectMetrics,
    last_activity: &str,
) -> Project {
    Project {
        project_id: id.to_owned(),
        name: name.to_owned(),
        client: client.to_owned(),
        description: description.to_owned(),
        status: ProjectStatus::Active,
        start_date: dates.0,
        target_end_date: dates.1,
        team,
        workbench,
        metrics,
        last_activity: last_activity.to_owned(),
    }
}

fn metrics(completion: u8, velocity: u32, ai: u8, done: u32, total: u32, issues: u32, commits: u32) -> ProjectMetrics {
    ProjectMetrics {
        completion,
        velocity,
        ai_utilization: ai,
        tasks_completed: done,
        total_tasks: total,
        issues_open: issues,
        commits,
    }
}

fn projects(users: &[User], tools: &[Tool]) -> Vec<Project> {
    let roster = team_roster(users);

    vec![
        project(
            "proj001",
            "E-commerce Transformation",
            "Global Retail Corp",
            "Complete digital transformation of e-commerce platform with AI-powered personalization and advanced analytics",
            (day(2024, 1, 15), day(2024, 6, 30)),
            pick_team(&roster, &["pm001", "dev001", "ba001", "des001"]),
            Workbench {
                active_tools: pick_tools(tools, &["tool001", "tool002", "tool004", "tool006"]),
                integrations: vec![
                    connected("int001", "Jira", "project_management"),
                    connected("int002", "GitHub", "version_control"),
                ],
                repositories: vec![SourceRepository {
                    repo_id: "repo001".to_owned(),
                    name: "ecommerce-platform".to_owned(),
                    kind: RepositoryKind::Git,
                    url: "https://github.com/merkle/ecommerce-platform".to_owned(),
                }],
            },
            metrics(65, 42, 78, 156, 240, 12, 342),
            "2 hours ago",
        ),
        project(
            "proj002",
            "Data Platform Migration",
            "Premier Financial Services",
            "Migrate legacy data warehouse to a modern cloud data platform with real-time analytics",
            (day(2024, 2, 1), day(2024, 8, 31)),
            pick_team(&roster, &["pm001", "ba001", "arch001"]),
            Workbench {
                active_tools: pick_tools(tools, &["tool002", "tool003", "tool017"]),
                integrations: vec![connected("int003", "Confluence", "documentation")],
                repositories: Vec::new(),
            },
            metrics(30, 35, 65, 72, 240, 8, 187),
            "5 hours ago",
        ),
        project(
            "proj003",
            "Customer Experience Redesign",
            "HealthTech Solutions",
            "Redesign patient-facing portal with a focus on accessibility and mobile-first journeys",
            (day(2023, 10, 1), day(2024, 2, 28)),
            pick_team(&roster, &["dev001", "des001", "qa001"]),
            Workbench {
                active_tools: pick_tools(tools, &["tool004", "tool013", "tool014"]),
                integrations: vec![connected("int004", "Figma", "design")],
                repositories: Vec::new(),
            },
            metrics(85, 48, 82, 204, 240, 4, 521),
            "30 minutes ago",
        ),
        project(
            "proj004",
            "AI Implementation Strategy",
            "Industrial Dynamics Inc",
            "Define and pilot an enterprise AI adoption roadmap across operations and customer service",
            (day(2024, 3, 1), day(2024, 9, 30)),
            pick_team(&roster, &["pm001", "arch001"]),
            Workbench {
                active_tools: pick_tools(tools, &["tool009", "tool020", "tool022"]),
                integrations: vec![connected("int005", "Microsoft Teams", "communication")],
                repositories: Vec::new(),
            },
            metrics(45, 38, 91, 108, 240, 15, 245),
            "1 day ago",
        ),
    ]
}

// ---------------------------------------------------------------------------
// calendar
// ---------------------------------------------------------------------------

const DELIVERY_TEAM: [&str; 6] = ["pm001", "dev001", "ba001", "des001", "arch001", "qa001"];

#[allow(clippy::too_many_arguments)]
fn recurring(
    id: String,
    title: &str,
    description: &str,
    date: NaiveDate,
    start: (u32, u32),
    end: (u32, u32),
    event_type: EventType,
    location: &str,
) -> CalendarEvent {
    CalendarEvent {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        start_time: at(date, start.0, start.1),
        end_time: at(date, end.0, end.1),
        attendees: strings(&DELIVERY_TEAM),
        event_type,
        project_id: None,
        location: Some(location.to_owned()),
    }
}

/// Weekday stand-ups for the fourteen days from `from`.
pub fn daily_standups(from: NaiveDate) -> Vec<CalendarEvent> {
    (0..14u64)
        .filter_map(|i| {
            let date = from + Days::new(i);
            if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                return None;
            }
            Some(recurring(
                format!("standup-{i}"),
                "Daily Standup - All Teams",
                "Daily sync across all active projects",
                date,
                (9, 15),
                (9, 30),
                EventType::Meeting,
                "MS Teams",
            ))
        })
        .collect()
}

/// Sprint reviews on every Wednesday in the 21 days from `from`.
pub fn sprint_reviews(from: NaiveDate) -> Vec<CalendarEvent> {
    (0..21u64)
        .filter_map(|i| {
            let date = from + Days::new(i);
            (date.weekday() == Weekday::Wed).then(|| {
                recurring(
                    format!("sprint-review-{i}"),
                    "Sprint Review",
                    "Demo completed features and gather feedback",
                    date,
                    (15, 0),
                    (16, 30),
                    EventType::Review,
                    "Conference Room A / Teams",
                )
            })
        })
        .collect()
}

/// Three fortnightly sprint kick-offs starting on `from`.
pub fn sprint_kickoffs(from: NaiveDate) -> Vec<CalendarEvent> {
    (0..3u64)
        .map(|i| {
            recurring(
                format!("sprint-kickoff-{i}"),
                "Sprint Kick-Off",
                "Plan and kick off new sprint cycle",
                from + Days::new(i * 14),
                (10, 0),
                (11, 30),
                EventType::Meeting,
                "Conference Room B",
            )
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn one_off(
    id: &str,
    title: &str,
    description: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
    attendees: &[&str],
    event_type: EventType,
    project_id: Option<&str>,
    location: Option<&str>,
) -> CalendarEvent {
    CalendarEvent {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        start_time: start,
        end_time: end,
        attendees: strings(attendees),
        event_type,
        project_id: project_id.map(str::to_owned),
        location: location.map(str::to_owned),
    }
}

fn calendar_events() -> Vec<CalendarEvent> {
    let mut events = daily_standups(day(2025, 11, 23));
    events.extend(sprint_reviews(day(2025, 11, 23)));
    events.extend(sprint_kickoffs(day(2025, 11, 27)));

    let nov = |d, h, m| at(day(2025, 11, d), h, m);
    let dec = |d, h, m| at(day(2025, 12, d), h, m);
    events.extend([
        one_off("event001", "Client Presentation - E-commerce", "Present progress and next phase planning",
                nov(25, 10, 0), nov(25, 11, 30), &["pm001", "dev001", "ba001", "des001"],
                EventType::Meeting, Some("proj001"), Some("Client Office / Zoom")),
        one_off("event003", "Design Review - Customer Experience", "Review new UX mockups and prototypes",
                nov(25, 14, 0), nov(25, 15, 30), &["pm001", "des001", "dev001", "qa001"],
                EventType::Review, Some("proj003"), Some("Design Studio")),
        one_off("event006", "Release Deadline - Customer Experience", "Production release of the redesigned portal",
                dec(1, 17, 0), dec(1, 17, 0), &["pm001", "dev001", "qa001"],
                EventType::Deadline, Some("proj003"), None),
        one_off("event007", "Architecture Review", "Review system architecture and scalability",
                nov(26, 10, 0), nov(26, 12, 0), &["pm001", "arch001", "dev001"],
                EventType::Review, Some("proj002"), Some("Conference Room B")),
        one_off("event009", "Milestone: MVP Complete", "AI Implementation MVP completion",
                dec(15, 17, 0), dec(15, 17, 0), &["pm001", "arch001"],
                EventType::Milestone, Some("proj004"), None),
        one_off("event010", "Code Review Session", "Peer code review for recent pull requests",
                nov(25, 16, 0), nov(25, 17, 0), &["dev001", "arch001"],
                EventType::Review, Some("proj001"), Some("Teams")),
    ]);
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standups_skip_weekends() {
        // 2025-11-23 is a Sunday; the fortnight holds ten weekdays.
        let standups = daily_standups(day(2025, 11, 23));
        assert_eq!(standups.len(), 10);
        assert_eq!(standups[0].id, "standup-1");
        assert!(standups.iter().all(|e| !matches!(e.start_time.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn reviews_land_on_wednesdays() {
        let reviews = sprint_reviews(day(2025, 11, 23));
        assert_eq!(reviews.len(), 3);
        assert!(reviews.iter().all(|e| e.start_time.weekday() == Weekday::Wed));
    }

    #[test]
    fn kickoffs_are_two_weeks_apart() {
        let kickoffs = sprint_kickoffs(day(2025, 11, 27));
        let dates: Vec<NaiveDate> = kickoffs.iter().map(|e| e.start_time.date()).collect();
        assert_eq!(dates, vec![day(2025, 11, 27), day(2025, 12, 11), day(2025, 12, 25)]);
    }

    #[test]
    fn project_teams_resolve_from_roster() {
        let fixtures = Fixtures::demo();
        let proj001 = &fixtures.projects[0];
        assert_eq!(proj001.team.len(), 4);
        assert_eq!(proj001.workbench.active_tools.len(), 4);
    }
}
