//! AI helpers behind the new-event dialog.
//!
//! Both flows walk `analyzing → scanning → generating → complete` on timers
//! and only hand over their answer once the last phase is reached. Closing
//! the dialog (cancelling the token) discards the answer.

use std::time::Duration;

use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use store::models::{EventType, NewEvent, TeamMember};

use crate::task::{PhasedTask, TaskOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionPhase {
    Idle,
    Analyzing,
    Scanning,
    Generating,
    Complete,
}

impl std::fmt::Display for SuggestionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle       => write!(f, "idle"),
            Self::Analyzing  => write!(f, "analyzing calendars"),
            Self::Scanning   => write!(f, "scanning availability"),
            Self::Generating => write!(f, "generating suggestion"),
            Self::Complete   => write!(f, "complete"),
        }
    }
}

/// Phase timings for the two flows.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// Delays before analyzing, scanning, generating and complete.
    pub find_time: [Duration; 4],
    /// Delays before scanning, generating and complete; analyzing is immediate.
    pub suggest_meeting: [Duration; 3],
    /// Hour of the day offered by "find best time".
    pub best_time_hour: u32,
    /// Hour of the day a suggested meeting starts.
    pub meeting_hour: u32,
    pub meeting_minutes: u32,
    /// How many team members are invited to a suggested meeting.
    pub max_attendees: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            find_time: [
                Duration::from_millis(500),
                Duration::from_millis(1000),
                Duration::from_millis(1000),
                Duration::from_millis(1000),
            ],
            suggest_meeting: [
                Duration::from_millis(800),
                Duration::from_millis(1000),
                Duration::from_millis(1200),
            ],
            best_time_hour: 14,
            meeting_hour: 15,
            meeting_minutes: 90,
            max_attendees: 4,
        }
    }
}

/// A proposed meeting the user can accept into the calendar form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingSuggestion {
    pub title: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    pub duration_minutes: u32,
    pub location: String,
    /// User IDs.
    pub attendees: Vec<String>,
}

impl MeetingSuggestion {
    pub fn end_time(&self) -> NaiveDateTime {
        self.start_time + TimeDelta::minutes(i64::from(self.duration_minutes))
    }

    pub fn into_new_event(self, project_id: Option<String>) -> NewEvent {
        let end_time = self.end_time();
        NewEvent {
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            end_time,
            attendees: self.attendees,
            event_type: EventType::Meeting,
            project_id,
            location: Some(self.location),
        }
    }
}

/// An answer held back until its phase schedule completes.
#[derive(Debug)]
pub struct PendingSuggestion<T> {
    task: PhasedTask<SuggestionPhase>,
    answer: T,
}

impl<T> PendingSuggestion<T> {
    pub fn subscribe(&self) -> watch::Receiver<SuggestionPhase> {
        self.task.subscribe()
    }

    pub fn phase(&self) -> SuggestionPhase {
        self.task.phase()
    }

    /// Run the schedule. `None` if cancelled first.
    pub async fn resolve(self, cancel: &CancellationToken) -> Option<T> {
        match self.task.run(cancel).await {
            TaskOutcome::Completed(_) => Some(self.answer),
            TaskOutcome::Cancelled { last_phase } => {
                debug!(%last_phase, "suggestion discarded");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MeetingSuggester {
    config: SuggestionConfig,
}

impl MeetingSuggester {
    pub fn new(config: SuggestionConfig) -> Self {
        Self { config }
    }

    /// Offer tomorrow at the configured hour.
    pub fn find_best_time(&self, today: NaiveDate) -> PendingSuggestion<NaiveDateTime> {
        let [analyzing, scanning, generating, complete] = self.config.find_time;
        let task = PhasedTask::new(SuggestionPhase::Idle)
            .then(analyzing, SuggestionPhase::Analyzing)
            .then(scanning, SuggestionPhase::Scanning)
            .then(generating, SuggestionPhase::Generating)
            .then(complete, SuggestionPhase::Complete);

        PendingSuggestion { task, answer: at_hour(tomorrow(today), self.config.best_time_hour) }
    }

    /// Propose a sprint planning session for `project_name` with the first
    /// few members of `team`.
    pub fn suggest_meeting(
        &self,
        project_name: Option<&str>,
        team: &[TeamMember],
        today: NaiveDate,
    ) -> PendingSuggestion<MeetingSuggestion> {
        let [scanning, generating, complete] = self.config.suggest_meeting;
        let task = PhasedTask::new(SuggestionPhase::Analyzing)
            .then(scanning, SuggestionPhase::Scanning)
            .then(generating, SuggestionPhase::Generating)
            .then(complete, SuggestionPhase::Complete);

        let answer = MeetingSuggestion {
            title: format!("{} Sprint Planning Session", project_name.unwrap_or("Project")),
            description: "Review backlog items and plan upcoming sprint deliverables. Discuss \
                          technical architecture decisions and resolve any blockers from the \
                          previous sprint."
                .to_owned(),
            start_time: at_hour(tomorrow(today), self.config.meeting_hour),
            duration_minutes: self.config.meeting_minutes,
            location: "Conference Room B / MS Teams".to_owned(),
            attendees: team
                .iter()
                .take(self.config.max_attendees)
                .map(|m| m.user_id.clone())
                .collect(),
        };

        PendingSuggestion { task, answer }
    }
}

fn tomorrow(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, 0, 0).unwrap_or_else(|| date.and_time(chrono::NaiveTime::default()))
}
