use axum::extract::{Query, State};
use axum::response::Response;
use axum::Form;

use crate::forms::event_config::EventConfigFormInput;
use crate::forms::settings::SettingsFormInput;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response;
use crate::views::admin::{config_page, listing_page, settings_page, ListingView};
use crate::views::Flash;

use super::FilterParams;

/// GET /admin/event-registration
///
/// Initial filter state can arrive on the query string; after that the
/// page script refines the table through the ajax endpoints.
pub async fn registration_listing(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Response, AppError> {
    let filter = params.to_filter()?;
    let rows = state.registrations.filtered(filter).await?;
    let date_options = state.events.all_event_dates().await?;
    let name_options = match filter.event_date {
        Some(date) => state.events.names_by_date(date).await?,
        None => Vec::new(),
    };

    let view = ListingView {
        rows,
        date_options,
        name_options,
        selected_date: filter.event_date,
        selected_event: filter.event_id,
    };

    Ok(response::page(listing_page(&view)))
}

/// GET /admin/event-registration/config
pub async fn config_form(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = state.events.all().await?;

    Ok(response::page(config_page(
        &EventConfigFormInput::default(),
        &[],
        &events,
        &[],
    )))
}

/// POST /admin/event-registration/config
pub async fn save_config(
    State(state): State<AppState>,
    Form(input): Form<EventConfigFormInput>,
) -> Result<Response, AppError> {
    match input.validate() {
        Ok(new_event) => match state.events.create(&new_event).await {
            Ok(id) => {
                tracing::info!(event_id = id, "Event configuration stored");
                let events = state.events.all().await?;
                let flashes = [Flash::status(
                    "Event configuration has been saved successfully.",
                )];
                Ok(response::page(config_page(
                    &EventConfigFormInput::default(),
                    &[],
                    &events,
                    &flashes,
                )))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to store event configuration");
                let events = state.events.all().await?;
                let flashes = [Flash::error(
                    "An error occurred while saving the event configuration.",
                )];
                Ok(response::page(config_page(&input, &[], &events, &flashes)))
            }
        },
        Err(errors) => {
            let events = state.events.all().await?;
            Ok(response::page(config_page(&input, &errors, &events, &[])))
        }
    }
}

/// GET /admin/event-registration/settings
pub async fn settings_form(State(state): State<AppState>) -> Result<Response, AppError> {
    let settings = state.settings.load().await?;
    let input = SettingsFormInput::from_settings(&settings);

    Ok(response::page(settings_page(&input, &[], &[])))
}

/// POST /admin/event-registration/settings
pub async fn save_settings(
    State(state): State<AppState>,
    Form(input): Form<SettingsFormInput>,
) -> Result<Response, AppError> {
    match input.validate() {
        Ok(settings) => {
            state.settings.save(&settings).await?;
            tracing::info!("Notification settings stored");
            let input = SettingsFormInput::from_settings(&settings);
            let flashes = [Flash::status("The configuration options have been saved.")];
            Ok(response::page(settings_page(&input, &[], &flashes)))
        }
        Err(errors) => Ok(response::page(settings_page(&input, &errors, &[]))),
    }
}
