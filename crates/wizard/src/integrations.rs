//! Integrations offered on the last wizard step.

/// One selectable integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Recorded as the integration's kind on the created project.
    pub category: &'static str,
    /// Always selected; cannot be toggled off.
    pub required: bool,
}

pub static INTEGRATION_CATALOGUE: [IntegrationOption; 5] = [
    IntegrationOption {
        id: "jira",
        name: "Jira",
        description: "Project management and issue tracking",
        category: "project_management",
        required: true,
    },
    IntegrationOption {
        id: "github",
        name: "GitHub",
        description: "Version control and code collaboration",
        category: "version_control",
        required: true,
    },
    IntegrationOption {
        id: "teams",
        name: "Microsoft Teams",
        description: "Team communication and collaboration",
        category: "communication",
        required: true,
    },
    IntegrationOption {
        id: "confluence",
        name: "Confluence",
        description: "Documentation and knowledge base",
        category: "documentation",
        required: false,
    },
    IntegrationOption {
        id: "figma",
        name: "Figma",
        description: "Design collaboration and prototyping",
        category: "design",
        required: false,
    },
];

pub fn find(id: &str) -> Option<&'static IntegrationOption> {
    INTEGRATION_CATALOGUE.iter().find(|i| i.id == id)
}

/// IDs every draft starts with.
pub fn required_ids() -> Vec<String> {
    INTEGRATION_CATALOGUE
        .iter()
        .filter(|i| i.required)
        .map(|i| i.id.to_owned())
        .collect()
}
