//! Toolbox catalogue queries.

use std::collections::HashMap;

use super::Repository;
use crate::models::{Tool, ToolCategory};
use crate::StoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToolSort {
    /// Alphabetical by name.
    Name,
    /// Featured tools first; otherwise catalogue order.
    #[default]
    Popular,
    /// Catalogue order.
    Recent,
}

impl std::str::FromStr for ToolSort {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name"    => Ok(Self::Name),
            "popular" => Ok(Self::Popular),
            "recent"  => Ok(Self::Recent),
            other     => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Toolbox filter: free text, category, and the featured toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolQuery {
    /// Case-insensitive substring of name or description.
    pub text: String,
    pub category: Option<ToolCategory>,
    pub featured_only: bool,
    pub sort: ToolSort,
}

impl ToolQuery {
    fn matches(&self, tool: &Tool) -> bool {
        let needle = self.text.to_lowercase();
        let matches_text = tool.name.to_lowercase().contains(&needle)
            || tool.description.to_lowercase().contains(&needle);
        let matches_category = self.category.map_or(true, |c| c == tool.category);
        matches_text && matches_category && (!self.featured_only || tool.featured)
    }
}

impl Repository {
    pub fn list_tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get_tool(&self, id: &str) -> Result<&Tool, StoreError> {
        self.tools
            .iter()
            .find(|t| t.tool_id == id)
            .ok_or_else(|| StoreError::not_found("tool", id))
    }

    /// Filter then sort the catalogue. Sorting is stable.
    pub fn search_tools(&self, query: &ToolQuery) -> Vec<&Tool> {
        let mut hits: Vec<&Tool> = self.tools.iter().filter(|t| query.matches(t)).collect();
        match query.sort {
            ToolSort::Name => hits.sort_by(|a, b| a.name.cmp(&b.name)),
            ToolSort::Popular => hits.sort_by_key(|t| !t.featured),
            ToolSort::Recent => {}
        }
        hits
    }

    /// Tool count per category; empty categories map to 0.
    pub fn category_counts(&self) -> HashMap<ToolCategory, usize> {
        let mut counts: HashMap<ToolCategory, usize> =
            ToolCategory::ALL.into_iter().map(|c| (c, 0)).collect();
        for tool in &self.tools {
            *counts.entry(tool.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn featured_tools(&self) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.featured).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_is_not_found() {
        let repo = Repository::seeded();
        let err = repo.get_tool("tool999").unwrap_err();
        assert_eq!(err.to_string(), "tool 'tool999' not found");
    }

    #[test]
    fn popular_sort_puts_featured_first_and_keeps_order() {
        let repo = Repository::seeded();
        let hits = repo.search_tools(&ToolQuery::default());
        assert_eq!(hits.len(), repo.list_tools().len());

        let first_plain = hits.iter().position(|t| !t.featured).unwrap();
        assert!(hits[first_plain..].iter().all(|t| !t.featured));
        // Stable: the first featured tool in the catalogue stays first.
        assert_eq!(hits[0].tool_id, "tool001");
    }

    #[test]
    fn name_sort_is_alphabetical() {
        let repo = Repository::seeded();
        let query = ToolQuery { sort: ToolSort::Name, ..Default::default() };
        let names: Vec<&str> = repo.search_tools(&query).iter().map(|t| t.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn category_and_text_filters_combine() {
        let repo = Repository::seeded();
        let query = ToolQuery {
            text: "JIRA".into(),
            category: Some(ToolCategory::Integrations),
            ..Default::default()
        };
        let ids: Vec<&str> = repo.search_tools(&query).iter().map(|t| t.tool_id.as_str()).collect();
        assert_eq!(ids, vec!["tool010"]);
    }

    #[test]
    fn featured_only_excludes_the_rest() {
        let repo = Repository::seeded();
        let query = ToolQuery { featured_only: true, ..Default::default() };
        assert_eq!(repo.search_tools(&query).len(), repo.featured_tools().len());
    }

    #[test]
    fn category_counts_include_every_category() {
        let repo = Repository::seeded();
        let counts = repo.category_counts();
        assert_eq!(counts.len(), ToolCategory::ALL.len());
        assert_eq!(counts.values().sum::<usize>(), repo.list_tools().len());
        assert_eq!(counts[&ToolCategory::AgentOrchestrator], 1);
    }
}
