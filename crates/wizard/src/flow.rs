//! The wizard state machine and its draft record.

use std::time::Duration;

use chrono::{Days, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Map;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use store::models::{
    Integration, IntegrationStatus, Project, ProjectMetrics, ProjectStatus, TeamMember, UserRole,
    Workbench,
};
use store::Repository;

use crate::integrations::{self, required_ids};
use crate::{recommend, Recommendation, WizardError, WizardStep};

/// Everything entered so far. Survives back/forward navigation untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub prompt: String,
    pub recommendation: Option<Recommendation>,
    pub team: Vec<TeamMember>,
    /// Integration IDs from the catalogue; required ones are always present.
    pub integrations: Vec<String>,
    pub project_name: String,
    pub client_name: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            recommendation: None,
            team: Vec::new(),
            integrations: required_ids(),
            project_name: String::new(),
            client_name: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Simulated thinking time before recommendations appear.
    pub generation_delay: Duration,
    /// Simulated setup time between submitting step 4 and the project existing.
    pub creation_delay: Duration,
    /// Target end date offset from the start date.
    pub project_length_days: u64,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            generation_delay: Duration::from_secs(2),
            creation_delay: Duration::from_secs(2),
            project_length_days: 180,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: WizardStep,
    draft: ProjectDraft,
    config: WizardConfig,
}

impl Wizard {
    pub fn new(config: WizardConfig) -> Self {
        Self { step: WizardStep::FIRST, draft: ProjectDraft::default(), config }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    // -----------------------------------------------------------------------
    // navigation
    // -----------------------------------------------------------------------

    pub fn next(&mut self) -> WizardStep {
        self.step = self.step.next();
        self.step
    }

    pub fn previous(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    /// Presence check for the current step's required fields.
    pub fn can_advance(&self) -> bool {
        let d = &self.draft;
        match self.step {
            WizardStep::Prompt => !d.prompt.trim().is_empty() && d.recommendation.is_some(),
            WizardStep::Recommendations => !d.project_name.trim().is_empty(),
            WizardStep::Team => !d.team.is_empty(),
            WizardStep::Integrations => true,
        }
    }

    // -----------------------------------------------------------------------
    // draft edits
    // -----------------------------------------------------------------------

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.draft.prompt = prompt.into();
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.draft.project_name = name.into();
    }

    pub fn set_client_name(&mut self, name: impl Into<String>) {
        self.draft.client_name = name.into();
    }

    /// Add `member` to the team, or remove them if already there.
    /// Returns whether they are selected afterwards.
    pub fn toggle_team_member(&mut self, member: TeamMember) -> bool {
        let team = &mut self.draft.team;
        match team.iter().position(|m| m.user_id == member.user_id) {
            Some(idx) => {
                team.remove(idx);
                false
            }
            None => {
                team.push(member);
                true
            }
        }
    }

    /// Flip an optional integration. Returns whether it is selected afterwards.
    pub fn toggle_integration(&mut self, id: &str) -> Result<bool, WizardError> {
        let option = integrations::find(id).ok_or_else(|| WizardError::UnknownIntegration(id.to_owned()))?;
        if option.required {
            warn!(integration = id, "required integration cannot be toggled");
            return Err(WizardError::RequiredIntegration(id.to_owned()));
        }

        let selected = &mut self.draft.integrations;
        match selected.iter().position(|i| i == id) {
            Some(idx) => {
                selected.remove(idx);
                Ok(false)
            }
            None => {
                selected.push(id.to_owned());
                Ok(true)
            }
        }
    }

    /// Candidates for the team step: every known user, shown as available,
    /// filtered by a case-insensitive name/role substring and optional role.
    pub fn available_members(repo: &Repository, search: &str, role: Option<UserRole>) -> Vec<TeamMember> {
        let needle = search.to_lowercase();
        repo.list_users()
            .iter()
            .filter(|u| role.map_or(true, |r| r == u.role))
            .filter(|u| {
                u.name.to_lowercase().contains(&needle)
                    || u.role.to_string().to_lowercase().contains(&needle)
            })
            .map(|u| store::fixtures::team_member(u, store::models::Availability::Available))
            .collect()
    }

    // -----------------------------------------------------------------------
    // recommendations
    // -----------------------------------------------------------------------

    /// Store `prompt`, wait the configured delay, then derive recommendations
    /// and prefill the project name. Cancelling leaves any earlier
    /// recommendation in place and returns `None`.
    pub async fn generate_recommendations(
        &mut self,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Option<&Recommendation> {
        self.draft.prompt = prompt.to_owned();

        tokio::select! {
            biased;

            () = cancel.cancelled() => {
                debug!("recommendation generation cancelled");
                return None;
            }

            () = tokio::time::sleep(self.config.generation_delay) => {}
        }

        let rec = recommend(prompt);
        debug!(project_name = %rec.project_name, tools = rec.tools.len(), "recommendations ready");
        self.draft.project_name = rec.project_name.clone();
        Some(&*self.draft.recommendation.insert(rec))
    }

    // -----------------------------------------------------------------------
    // completion
    // -----------------------------------------------------------------------

    /// Turn the draft into an active project, append it to `repo`, and reset.
    ///
    /// On error nothing is written and the draft is kept.
    pub fn complete(&mut self, repo: &mut Repository, now: NaiveDateTime) -> Result<Project, WizardError> {
        self.ensure_completable()?;

        let project = self.build_project(now);
        repo.add_project(project.clone())?;
        info!(project_id = %project.project_id, name = %project.name, "project created from wizard");

        self.reset();
        Ok(project)
    }

    /// [`complete`](Self::complete) after the configured setup delay.
    ///
    /// Draft errors are reported before waiting. Cancelling during the delay
    /// returns `Ok(None)` with nothing written and the draft kept.
    pub async fn submit(
        &mut self,
        repo: &mut Repository,
        now: NaiveDateTime,
        cancel: &CancellationToken,
    ) -> Result<Option<Project>, WizardError> {
        self.ensure_completable()?;

        tokio::select! {
            biased;

            () = cancel.cancelled() => {
                debug!("project creation cancelled");
                return Ok(None);
            }

            () = tokio::time::sleep(self.config.creation_delay) => {}
        }

        self.complete(repo, now).map(Some)
    }

    fn ensure_completable(&self) -> Result<(), WizardError> {
        if self.step != WizardStep::LAST {
            return Err(WizardError::NotAtFinalStep(self.step));
        }
        if self.draft.project_name.trim().is_empty() {
            return Err(WizardError::MissingField("project_name"));
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.step = WizardStep::FIRST;
        self.draft = ProjectDraft::default();
    }

    fn build_project(&self, now: NaiveDateTime) -> Project {
        let d = &self.draft;
        let start = now.date();
        let integrations = d
            .integrations
            .iter()
            .filter_map(|id| integrations::find(id))
            .map(|option| Integration {
                integration_id: option.id.to_owned(),
                name: option.name.to_owned(),
                kind: option.category.to_owned(),
                status: IntegrationStatus::Connected,
                last_sync: Some(now),
                config: Map::new(),
            })
            .collect();

        Project {
            project_id: format!("proj-{}", Uuid::new_v4()),
            name: d.project_name.trim().to_owned(),
            client: d.client_name.trim().to_owned(),
            description: d.prompt.clone(),
            status: ProjectStatus::Active,
            start_date: start,
            target_end_date: start
                .checked_add_days(Days::new(self.config.project_length_days))
                .unwrap_or(start),
            team: d.team.clone(),
            workbench: Workbench { integrations, ..Default::default() },
            metrics: ProjectMetrics::default(),
            last_activity: "Just created".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 24).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    fn at_final_step(wizard: &mut Wizard) {
        while wizard.step() != WizardStep::LAST {
            wizard.next();
        }
    }

    #[test]
    fn required_integrations_are_preselected_and_locked() {
        let mut wizard = Wizard::default();
        assert_eq!(wizard.draft().integrations, vec!["jira", "github", "teams"]);

        assert_eq!(wizard.toggle_integration("github"), Err(WizardError::RequiredIntegration("github".into())));
        assert_eq!(wizard.toggle_integration("figma"), Ok(true));
        assert_eq!(wizard.toggle_integration("figma"), Ok(false));
        assert!(matches!(wizard.toggle_integration("slack"), Err(WizardError::UnknownIntegration(_))));
    }

    #[test]
    fn can_advance_checks_only_the_current_step() {
        let repo = Repository::seeded();
        let mut wizard = Wizard::default();
        wizard.set_prompt("A mobile app");
        assert!(!wizard.can_advance(), "recommendations not generated yet");

        wizard.next();
        assert!(!wizard.can_advance());
        wizard.set_project_name("Mobile");
        assert!(wizard.can_advance());

        wizard.next();
        assert!(!wizard.can_advance());
        let member = Wizard::available_members(&repo, "marcus", None).remove(0);
        assert!(wizard.toggle_team_member(member.clone()));
        assert!(wizard.can_advance());
        assert!(!wizard.toggle_team_member(member));
        assert!(!wizard.can_advance());

        wizard.next();
        assert!(wizard.can_advance());
    }

    #[test]
    fn going_back_keeps_the_draft() {
        let mut wizard = Wizard::default();
        wizard.next();
        wizard.set_project_name("Kept");
        wizard.set_client_name("Acme");
        wizard.previous();
        wizard.previous();
        assert_eq!(wizard.step(), WizardStep::Prompt);
        assert_eq!(wizard.draft().project_name, "Kept");
        assert_eq!(wizard.draft().client_name, "Acme");
    }

    #[test]
    fn completing_early_is_rejected() {
        let mut repo = Repository::seeded();
        let mut wizard = Wizard::default();
        wizard.set_project_name("Too soon");
        let before = repo.list_projects().len();

        assert_eq!(wizard.complete(&mut repo, now()), Err(WizardError::NotAtFinalStep(WizardStep::Prompt)));
        assert_eq!(repo.list_projects().len(), before);
        assert_eq!(wizard.draft().project_name, "Too soon");
    }

    #[test]
    fn blank_name_is_a_missing_field() {
        let mut repo = Repository::seeded();
        let mut wizard = Wizard::default();
        at_final_step(&mut wizard);
        wizard.set_project_name("   ");
        assert_eq!(wizard.complete(&mut repo, now()), Err(WizardError::MissingField("project_name")));
    }

    #[test]
    fn completion_appends_an_active_project_and_resets() {
        let mut repo = Repository::seeded();
        let mut wizard = Wizard::default();
        wizard.set_prompt("Loyalty programme relaunch");
        wizard.set_project_name("Loyalty Relaunch");
        wizard.set_client_name("Acme");
        wizard.toggle_integration("confluence").unwrap();
        at_final_step(&mut wizard);

        let project = wizard.complete(&mut repo, now()).unwrap();

        assert!(project.project_id.starts_with("proj-"));
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.target_end_date, NaiveDate::from_ymd_opt(2026, 5, 23).unwrap());
        assert_eq!(project.metrics, ProjectMetrics::default());
        assert_eq!(project.last_activity, "Just created");
        let kinds: Vec<&str> = project.workbench.integrations.iter().map(|i| i.kind.as_str()).collect();
        assert_eq!(kinds, vec!["project_management", "version_control", "communication", "documentation"]);

        assert_eq!(repo.list_projects().last(), Some(&project));
        assert_eq!(wizard.step(), WizardStep::Prompt);
        assert_eq!(wizard.draft(), &ProjectDraft::default());
    }

    #[tokio::test(start_paused = true)]
    async fn recommendations_arrive_after_the_delay() {
        let mut wizard = Wizard::default();
        let start = tokio::time::Instant::now();

        let name = wizard
            .generate_recommendations("Customer data migration", &CancellationToken::new())
            .await
            .map(|r| r.project_name.clone());

        assert_eq!(start.elapsed(), Duration::from_secs(2));
        assert_eq!(name.as_deref(), Some("Data Platform Modernization"));
        assert_eq!(wizard.draft().project_name, "Data Platform Modernization");
        assert!(wizard.can_advance());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_generation_keeps_previous_recommendation() {
        let mut wizard = Wizard::default();
        wizard.generate_recommendations("mobile banking app", &CancellationToken::new()).await;

        let cancel = CancellationToken::new();
        cancel.cancel();
        assert!(wizard.generate_recommendations("data lake", &cancel).await.is_none());

        assert_eq!(wizard.draft().prompt, "data lake");
        assert_eq!(
            wizard.draft().recommendation.as_ref().map(|r| r.project_name.as_str()),
            Some("Mobile Application Development")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn submit_creates_the_project_after_the_setup_delay() {
        let mut repo = Repository::seeded();
        let before = repo.list_projects().len();
        let mut wizard = Wizard::default();
        wizard.set_project_name("Loyalty Relaunch");
        at_final_step(&mut wizard);
        let start = tokio::time::Instant::now();

        let project = wizard.submit(&mut repo, now(), &CancellationToken::new()).await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(2));
        assert_eq!(project.map(|p| p.name), Some("Loyalty Relaunch".to_owned()));
        assert_eq!(repo.list_projects().len(), before + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_submit_writes_nothing_and_keeps_the_draft() {
        let mut repo = Repository::seeded();
        let before = repo.list_projects().len();
        let mut wizard = Wizard::default();
        wizard.set_project_name("Loyalty Relaunch");
        at_final_step(&mut wizard);

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            trigger.cancel();
        });

        assert_eq!(wizard.submit(&mut repo, now(), &cancel).await, Ok(None));
        assert_eq!(repo.list_projects().len(), before);
        assert_eq!(wizard.step(), WizardStep::LAST);
        assert_eq!(wizard.draft().project_name, "Loyalty Relaunch");
    }

    #[tokio::test(start_paused = true)]
    async fn submit_reports_draft_errors_without_waiting() {
        let mut repo = Repository::seeded();
        let mut wizard = Wizard::default();
        let start = tokio::time::Instant::now();

        let result = wizard.submit(&mut repo, now(), &CancellationToken::new()).await;

        assert_eq!(result, Err(WizardError::NotAtFinalStep(WizardStep::Prompt)));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
