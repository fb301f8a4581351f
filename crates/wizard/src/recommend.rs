//! Keyword-driven project recommendations.
//!
//! Matching is plain case-insensitive substring search over the prompt, so
//! short keywords such as `ai` or `ui` also match inside longer words.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub project_name: String,
    pub roles: Vec<String>,
    pub team_size: u32,
    /// Tool names, duplicates removed, first occurrence kept.
    pub tools: Vec<String>,
    pub integrations: Vec<String>,
    pub timeline: String,
    pub resources: Vec<String>,
}

/// Build recommendations for a free-text project description.
pub fn recommend(prompt: &str) -> Recommendation {
    let text = prompt.to_lowercase();
    Recommendation {
        project_name: project_name(&text).to_owned(),
        roles: roles(&text),
        team_size: 6,
        tools: tools(&text),
        integrations: owned(&["Jira", "GitHub", "Microsoft Teams", "Confluence"]),
        timeline: "6 months".to_owned(),
        resources: resources(&text),
    }
}

fn mentions(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// First matching rule wins.
fn project_name(text: &str) -> &'static str {
    const RULES: &[(&[&str], &str)] = &[
        (&["ecommerce", "e-commerce"], "E-commerce Platform Transformation"),
        (&["data", "migration"], "Data Platform Modernization"),
        (&["mobile", "app"], "Mobile Application Development"),
        (&["ai", "machine learning"], "AI/ML Implementation Initiative"),
        (&["customer", "experience"], "Customer Experience Enhancement"),
    ];
    RULES
        .iter()
        .find(|(keywords, _)| mentions(text, keywords))
        .map_or("Digital Transformation Project", |(_, name)| *name)
}

fn roles(text: &str) -> Vec<String> {
    let mut roles = vec!["Product Owner", "Technical Lead", "Developer"];
    if mentions(text, &["design", "ux", "ui"]) {
        roles.push("UX/UI Designer");
    }
    if mentions(text, &["data", "analytics"]) {
        roles.extend(["Data Architect", "Data Analyst"]);
    }
    if mentions(text, &["security", "compliance"]) {
        roles.push("Security Engineer");
    }
    // Every team gets QA.
    roles.extend(["QA Engineer", "Business Analyst", "Scrum Master"]);
    owned(&roles)
}

fn tools(text: &str) -> Vec<String> {
    let mut tools = vec!["Meeting Scheduler Agent", "Documentation Generator", "Status Report Creator"];
    if mentions(text, &["code", "development"]) {
        tools.extend(["Code Review Assistant", "Claude Code Integration"]);
    }
    if mentions(text, &["design"]) {
        tools.extend(["Visual QA Agent", "Figma Integration"]);
    }
    if mentions(text, &["test"]) {
        tools.push("Visual QA Agent");
    }
    if mentions(text, &["document", "knowledge"]) {
        tools.extend(["Use Case Documenter", "Training Material Generator"]);
    }
    tools.extend(["Sprint Planning Assistant", "Real-time Whiteboard"]);

    let mut unique: Vec<String> = Vec::with_capacity(tools.len());
    for tool in tools {
        if !unique.iter().any(|t| t == tool) {
            unique.push(tool.to_owned());
        }
    }
    unique
}

fn resources(text: &str) -> Vec<String> {
    let mut resources = vec![
        "Development environment setup",
        "Project documentation repository",
        "Communication channels",
        "Access to required tools and platforms",
    ];
    if mentions(text, &["cloud", "aws", "azure"]) {
        resources.push("Cloud infrastructure provisioning");
    }
    if mentions(text, &["data"]) {
        resources.push("Data storage and warehouse setup");
    }
    if mentions(text, &["security"]) {
        resources.push("Security and compliance tools");
    }
    owned(&resources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecommerce_takes_precedence_over_data() {
        let rec = recommend("E-commerce DATA migration for a retailer");
        assert_eq!(rec.project_name, "E-commerce Platform Transformation");
        assert!(rec.roles.contains(&"Data Analyst".to_owned()));
        assert!(rec.resources.contains(&"Data storage and warehouse setup".to_owned()));
    }

    #[test]
    fn fallback_name_and_fixed_fields() {
        let rec = recommend("Rebrand the intranet");
        assert_eq!(rec.project_name, "Digital Transformation Project");
        assert_eq!(rec.team_size, 6);
        assert_eq!(rec.timeline, "6 months");
        assert_eq!(rec.integrations, vec!["Jira", "GitHub", "Microsoft Teams", "Confluence"]);
        assert_eq!(
            rec.roles,
            vec!["Product Owner", "Technical Lead", "Developer", "QA Engineer", "Business Analyst", "Scrum Master"]
        );
    }

    #[test]
    fn tools_are_deduplicated_in_order() {
        let rec = recommend("design and test the checkout");
        let visual_qa = rec.tools.iter().filter(|t| *t == "Visual QA Agent").count();
        assert_eq!(visual_qa, 1);
        assert_eq!(
            rec.tools,
            vec![
                "Meeting Scheduler Agent",
                "Documentation Generator",
                "Status Report Creator",
                "Visual QA Agent",
                "Figma Integration",
                "Sprint Planning Assistant",
                "Real-time Whiteboard",
            ]
        );
    }

    #[test]
    fn short_keywords_match_inside_words() {
        // "maintain" contains "ai".
        assert_eq!(recommend("maintain the website").project_name, "AI/ML Implementation Initiative");
    }

    #[test]
    fn cloud_and_security_add_resources() {
        let rec = recommend("Azure landing zone with security review");
        assert!(rec.resources.contains(&"Cloud infrastructure provisioning".to_owned()));
        assert!(rec.resources.contains(&"Security and compliance tools".to_owned()));
        assert!(rec.roles.contains(&"Security Engineer".to_owned()));
    }
}
