use axum::extract::{Query, State};
use axum::response::Response;
use chrono::Utc;

use crate::models::RegistrationDetail;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response;

use super::FilterParams;

const CSV_HEADER: [&str; 8] = [
    "Full Name",
    "Email",
    "College Name",
    "Department",
    "Event Category",
    "Event Name",
    "Event Date",
    "Submission Date",
];

/// GET /admin/event-registration/export-csv
///
/// Same filter semantics as the listing and the live filter endpoint;
/// the download always reflects what the listing shows.
pub async fn export_csv(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Response, AppError> {
    let filter = params.to_filter()?;
    let rows = state.registrations.filtered(filter).await?;
    let content = render_csv(&rows)?;

    let filename = format!(
        "event_registrations_{}.csv",
        Utc::now().format("%Y-%m-%d_%H-%M-%S")
    );

    Ok(response::csv_attachment(&filename, content))
}

fn render_csv(rows: &[RegistrationDetail]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| AppError::Internal(format!("CSV write failed: {e}")))?;

    for row in rows {
        let event_date = row.event_date.to_string();
        let submission_date = row.submission_date();
        writer
            .write_record([
                row.full_name.as_str(),
                row.email.as_str(),
                row.college_name.as_str(),
                row.department.as_str(),
                row.event_category.as_str(),
                row.event_name.as_str(),
                event_date.as_str(),
                submission_date.as_str(),
            ])
            .map_err(|e| AppError::Internal(format!("CSV write failed: {e}")))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV flush failed: {e}")))
}
