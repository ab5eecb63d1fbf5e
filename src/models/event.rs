use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The fixed set of categories an event can be filed under.
pub const EVENT_CATEGORIES: [&str; 4] = [
    "Online Workshop",
    "Hackathon",
    "Conference",
    "One-day Workshop",
];

/// An administrator-defined event available for public registration
/// within a date window. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventConfig {
    pub id: i32,
    pub event_name: String,
    pub event_category: String,
    pub event_date: NaiveDate,
    pub registration_start_date: NaiveDate,
    pub registration_end_date: NaiveDate,
    pub created: DateTime<Utc>,
}

impl EventConfig {
    /// An event accepts registrations while `today` falls inside the
    /// inclusive [registration_start_date, registration_end_date] window.
    pub fn is_open_for_registration(&self, today: NaiveDate) -> bool {
        self.registration_start_date <= today && today <= self.registration_end_date
    }
}

/// Field values for a new event configuration, validated by the admin
/// config form before insertion.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub event_name: String,
    pub event_category: String,
    pub event_date: NaiveDate,
    pub registration_start_date: NaiveDate,
    pub registration_end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: &str, end: &str) -> EventConfig {
        EventConfig {
            id: 1,
            event_name: "Hack Day".to_string(),
            event_category: "Hackathon".to_string(),
            event_date: "2024-06-01".parse().unwrap(),
            registration_start_date: start.parse().unwrap(),
            registration_end_date: end.parse().unwrap(),
            created: Utc::now(),
        }
    }

    #[test]
    fn open_inside_window() {
        let e = event("2024-01-01", "2024-12-31");
        for day in ["2024-01-01", "2024-06-15", "2024-12-31"] {
            assert!(e.is_open_for_registration(day.parse().unwrap()), "{day}");
        }
    }

    #[test]
    fn closed_outside_window() {
        let e = event("2024-01-01", "2024-12-31");
        for day in ["2023-12-31", "2025-01-01"] {
            assert!(!e.is_open_for_registration(day.parse().unwrap()), "{day}");
        }
    }

    #[test]
    fn single_day_window() {
        let e = event("2024-03-10", "2024-03-10");
        assert!(e.is_open_for_registration("2024-03-10".parse().unwrap()));
        assert!(!e.is_open_for_registration("2024-03-09".parse().unwrap()));
        assert!(!e.is_open_for_registration("2024-03-11".parse().unwrap()));
    }
}
