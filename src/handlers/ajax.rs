//! JSON endpoints behind the cascading dropdowns and the live listing
//! filter. Responses are keyed maps so the scripts can rebuild a
//! dropdown from `value: label` pairs directly.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::forms::registration::{options_for, CascadeSelection, SelectStage};
use crate::models::RegistrationDetail;
use crate::state::AppState;
use crate::utils::error::AppError;

use super::FilterParams;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatesParams {
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamesParams {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminNamesParams {
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct DatesResponse {
    pub dates: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct NamesResponse {
    pub events: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub registrations: Vec<RegistrationRow>,
    pub count: usize,
}

/// One registration as the admin listing script renders it.
#[derive(Debug, Serialize)]
pub struct RegistrationRow {
    pub full_name: String,
    pub email: String,
    pub event_date: String,
    pub college_name: String,
    pub department: String,
    pub submission_date: String,
}

impl From<&RegistrationDetail> for RegistrationRow {
    fn from(detail: &RegistrationDetail) -> Self {
        Self {
            full_name: detail.full_name.clone(),
            email: detail.email.clone(),
            event_date: detail.event_date.to_string(),
            college_name: detail.college_name.clone(),
            department: detail.department.clone(),
            submission_date: detail.submission_date(),
        }
    }
}

/// GET /event-registration/ajax/event-dates
///
/// Dates with an open event in the given category. No category selected
/// means an empty map, not an error.
pub async fn event_dates(
    State(state): State<AppState>,
    Query(params): Query<DatesParams>,
) -> Result<Json<DatesResponse>, AppError> {
    let today = Utc::now().date_naive();
    let selection = CascadeSelection {
        category: non_empty(&params.category),
        event_date: None,
    };

    let dates = options_for(&state.events, today, SelectStage::EventDate, &selection).await?;

    Ok(Json(DatesResponse {
        dates: dates.into_iter().collect(),
    }))
}

/// GET /event-registration/ajax/event-names
pub async fn event_names(
    State(state): State<AppState>,
    Query(params): Query<NamesParams>,
) -> Result<Json<NamesResponse>, AppError> {
    let today = Utc::now().date_naive();
    let selection = CascadeSelection {
        category: non_empty(&params.category),
        event_date: parse_optional_date(&params.date)?,
    };

    let events = options_for(&state.events, today, SelectStage::EventName, &selection).await?;

    Ok(Json(NamesResponse {
        events: events.into_iter().collect(),
    }))
}

/// GET /admin/event-registration/ajax/get-event-names
///
/// Unlike the public cascade this is not limited to open registration
/// windows; the admin filter covers past events too.
pub async fn admin_event_names(
    State(state): State<AppState>,
    Query(params): Query<AdminNamesParams>,
) -> Result<Json<NamesResponse>, AppError> {
    let events = match parse_optional_date(&params.date)? {
        Some(date) => state.events.names_by_date(date).await?,
        None => Vec::new(),
    };

    Ok(Json(NamesResponse {
        events: events
            .into_iter()
            .map(|(id, name)| (id.to_string(), name))
            .collect(),
    }))
}

/// GET /admin/event-registration/ajax/filter-registrations
pub async fn filter_registrations(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<FilterResponse>, AppError> {
    let filter = params.to_filter()?;
    let rows = state.registrations.filtered(filter).await?;
    let registrations: Vec<RegistrationRow> = rows.iter().map(RegistrationRow::from).collect();
    let count = registrations.len();

    Ok(Json(FilterResponse {
        registrations,
        count,
    }))
}

fn non_empty(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, AppError> {
    if raw.is_empty() {
        return Ok(None);
    }

    raw.parse().map(Some).map_err(|_| {
        AppError::Validation("date must be a date in YYYY-MM-DD format".to_string())
    })
}
