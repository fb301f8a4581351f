//! The step cursor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Describe the project in free text.
    #[default]
    Prompt,
    /// Review recommendations, name the project and client.
    Recommendations,
    /// Pick team members.
    Team,
    /// Choose integrations and create the project.
    Integrations,
}

impl WizardStep {
    pub const FIRST: Self = Self::Prompt;
    pub const LAST: Self = Self::Integrations;

    /// 1-based position.
    pub fn number(self) -> u8 {
        match self {
            Self::Prompt          => 1,
            Self::Recommendations => 2,
            Self::Team            => 3,
            Self::Integrations    => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Prompt),
            2 => Some(Self::Recommendations),
            3 => Some(Self::Team),
            4 => Some(Self::Integrations),
            _ => None,
        }
    }

    /// The following step; stays put on the last one.
    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(self)
    }

    /// The preceding step; stays put on the first one.
    pub fn previous(self) -> Self {
        Self::from_number(self.number() - 1).unwrap_or(self)
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = match self {
            Self::Prompt          => "AI Prompt",
            Self::Recommendations => "Recommendations",
            Self::Team            => "Team Configuration",
            Self::Integrations    => "Integration Setup",
        };
        write!(f, "step {} ({title})", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_at_both_ends() {
        assert_eq!(WizardStep::FIRST.previous(), WizardStep::FIRST);
        assert_eq!(WizardStep::LAST.next(), WizardStep::LAST);
        assert_eq!(WizardStep::Prompt.next().next(), WizardStep::Team);
    }

    #[test]
    fn numbers_round_trip() {
        for n in 1..=4 {
            assert_eq!(WizardStep::from_number(n).map(WizardStep::number), Some(n));
        }
        assert!(WizardStep::from_number(0).is_none());
        assert!(WizardStep::from_number(5).is_none());
    }
}
