//! Calendar event operations.

use chrono::NaiveDate;
use tracing::info;

use super::Repository;
use crate::models::{CalendarEvent, EventType, NewEvent};

impl Repository {
    pub fn list_events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Events starting on `date`, earliest first.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        let mut events: Vec<&CalendarEvent> =
            self.events.iter().filter(|e| e.start_time.date() == date).collect();
        events.sort_by_key(|e| e.start_time);
        events
    }

    pub fn events_of_type(&self, event_type: EventType) -> Vec<&CalendarEvent> {
        self.events.iter().filter(|e| e.event_type == event_type).collect()
    }

    /// Store a new event under `event<N+1>`, where N is the current count.
    /// If that ID is already taken the counter moves forward until it is free.
    pub fn add_event(&mut self, event: NewEvent) -> &CalendarEvent {
        let mut n = self.events.len() + 1;
        let id = loop {
            let candidate = format!("event{n}");
            if self.events.iter().all(|e| e.id != candidate) {
                break candidate;
            }
            n += 1;
        };

        let NewEvent { title, description, start_time, end_time, attendees, event_type, project_id, location } = event;
        info!(event_id = %id, %title, "event added");
        self.events.push(CalendarEvent {
            id,
            title,
            description,
            start_time,
            end_time,
            attendees,
            event_type,
            project_id,
            location,
        });
        &self.events[self.events.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn new_event(date: NaiveDate) -> NewEvent {
        NewEvent {
            title: "Planning".into(),
            description: String::new(),
            start_time: date.and_hms_opt(9, 0, 0).unwrap(),
            end_time: date.and_hms_opt(10, 0, 0).unwrap(),
            attendees: vec!["pm001".into()],
            event_type: EventType::Meeting,
            project_id: None,
            location: None,
        }
    }

    #[test]
    fn added_event_gets_next_sequential_id() {
        let mut repo = Repository::new(Fixtures::default());
        let date = NaiveDate::from_ymd_opt(2025, 12, 2).unwrap();
        assert_eq!(repo.add_event(new_event(date)).id, "event1");
        assert_eq!(repo.add_event(new_event(date)).id, "event2");
    }

    #[test]
    fn id_skips_forward_past_taken_ids() {
        let mut repo = Repository::seeded();
        let date = NaiveDate::from_ymd_opt(2025, 12, 2).unwrap();
        let taken: Vec<String> = repo.list_events().iter().map(|e| e.id.clone()).collect();
        let id = repo.add_event(new_event(date)).id.clone();
        assert!(!taken.contains(&id));
    }

    #[test]
    fn events_on_a_day_are_time_ordered() {
        let repo = Repository::seeded();
        let day = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
        let titles: Vec<&str> = repo.events_on(day).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Daily Standup - All Teams",
                "Client Presentation - E-commerce",
                "Design Review - Customer Experience",
                "Code Review Session",
            ]
        );
    }

    #[test]
    fn deadlines_filter_by_type() {
        let repo = Repository::seeded();
        let deadlines = repo.events_of_type(EventType::Deadline);
        assert_eq!(deadlines.len(), 1);
        assert_eq!(deadlines[0].id, "event006");
    }
}
