use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::RegistrationFilter;
use crate::utils::error::AppError;

pub mod admin;
pub mod ajax;
pub mod assets;
pub mod export;
pub mod public;

/// Registration filter parameters as they arrive on the query string.
/// `event_name` carries the event's id; the name mirrors the dropdown it
/// is populated from. Empty strings mean "not selected".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub event_name: String,
}

impl FilterParams {
    /// Parse into a typed filter. Non-empty values that do not parse are
    /// rejected rather than silently treated as "no filter".
    pub fn to_filter(&self) -> Result<RegistrationFilter, AppError> {
        let event_id = match self.event_name.as_str() {
            "" => None,
            raw => Some(raw.parse::<i32>().map_err(|_| {
                AppError::Validation("event_name must be a numeric event id".to_string())
            })?),
        };

        let event_date = match self.event_date.as_str() {
            "" => None,
            raw => Some(raw.parse::<NaiveDate>().map_err(|_| {
                AppError::Validation("event_date must be a date in YYYY-MM-DD format".to_string())
            })?),
        };

        Ok(RegistrationFilter::new(event_id, event_date))
    }
}

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "event-registration",
    };

    axum::Json(payload).into_response()
}
