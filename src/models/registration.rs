use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A submission joined with the event it belongs to, the shape the
/// admin listing, live filter and CSV export all consume. Submissions
/// are immutable and never deleted by this module.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RegistrationDetail {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub college_name: String,
    pub department: String,
    pub event_category: String,
    pub event_config_id: i32,
    pub created: DateTime<Utc>,
    pub event_name: String,
    pub event_date: NaiveDate,
}

impl RegistrationDetail {
    /// Submission timestamp in the `YYYY-MM-DD HH:MM:SS` form used by the
    /// listing table, the live-filter JSON and the CSV export.
    pub fn submission_date(&self) -> String {
        self.created.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Validated field values for a new registration. `event_category` is the
/// submitted value, denormalized onto the row at insert time rather than
/// re-derived from the event configuration.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub full_name: String,
    pub email: String,
    pub college_name: String,
    pub department: String,
    pub event_category: String,
    pub event_config_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn submission_date_format() {
        let detail = RegistrationDetail {
            id: 1,
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            college_name: "MIT".to_string(),
            department: "CS".to_string(),
            event_category: "Hackathon".to_string(),
            event_config_id: 7,
            created: Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 5).unwrap(),
            event_name: "Hack Day".to_string(),
            event_date: "2024-06-01".parse().unwrap(),
        };
        assert_eq!(detail.submission_date(), "2024-06-01 09:30:05");
    }
}
