use axum::extract::State;
use axum::response::Response;
use axum::Form;
use chrono::Utc;

use crate::forms::registration::{validate_fields, RegistrationFormInput, RegistrationFormView};
use crate::forms::FieldError;
use crate::mailer::EmailParams;
use crate::models::{NewRegistration, NotificationSettings};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response;
use crate::views::registration::registration_page;
use crate::views::Flash;

/// GET /register
pub async fn registration_form(State(state): State<AppState>) -> Result<Response, AppError> {
    let today = Utc::now().date_naive();
    let view = RegistrationFormView::build(
        &state.events,
        today,
        RegistrationFormInput::default(),
        Vec::new(),
    )
    .await?;

    Ok(response::page(registration_page(&view, &[])))
}

/// POST /register
///
/// Field-format failures, a duplicate submission and a closed or vanished
/// event are all collected before the form is re-rendered, so the user
/// sees everything that is wrong at once. Only a clean submission is
/// stored; the two notification emails follow and never fail the request.
pub async fn submit_registration(
    State(state): State<AppState>,
    Form(input): Form<RegistrationFormInput>,
) -> Result<Response, AppError> {
    let today = Utc::now().date_naive();
    let mut errors = validate_fields(&input);

    let mut event = None;
    if !input.event_name.is_empty() {
        match input.event_config_id() {
            Some(event_config_id) => {
                if !input.email.is_empty()
                    && state
                        .registrations
                        .is_duplicate(&input.email, event_config_id)
                        .await?
                {
                    errors.push(FieldError::new(
                        "email",
                        "You have already registered for this event with this email address.",
                    ));
                }

                event = state.events.by_id(event_config_id).await?;
                let open = event
                    .as_ref()
                    .is_some_and(|e| e.is_open_for_registration(today));
                if !open {
                    errors.push(FieldError::new(
                        "event_name",
                        "The selected event is no longer open for registration.",
                    ));
                }
            }
            // A tampered, non-numeric id cannot match an event.
            None => {
                errors.push(FieldError::new(
                    "event_name",
                    "The selected event is no longer open for registration.",
                ));
            }
        }
    }

    if !errors.is_empty() {
        let view = RegistrationFormView::build(&state.events, today, input, errors).await?;
        return Ok(response::page(registration_page(&view, &[])));
    }

    let Some(event) = event else {
        let flashes = [Flash::error(
            "An error occurred. The selected event could not be found.",
        )];
        let view = RegistrationFormView::build(&state.events, today, input, Vec::new()).await?;
        return Ok(response::page(registration_page(&view, &flashes)));
    };

    let registration = NewRegistration {
        full_name: input.full_name.clone(),
        email: input.email.clone(),
        college_name: input.college_name.clone(),
        department: input.department.clone(),
        event_category: input.event_category.clone(),
        event_config_id: event.id,
    };

    match state.registrations.create(&registration).await {
        Ok(id) => {
            tracing::info!(registration_id = id, event_id = event.id, "Registration stored");

            let params = EmailParams {
                full_name: input.full_name.clone(),
                email: input.email.clone(),
                college_name: input.college_name.clone(),
                department: input.department.clone(),
                event_name: event.event_name.clone(),
                event_date: event.event_date,
                event_category: input.event_category.clone(),
            };

            // A settings read failure must not fail a stored registration;
            // the default record has notifications disabled.
            let settings = match state.settings.load().await {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load notification settings");
                    NotificationSettings::default()
                }
            };

            state.mailer.send_user_confirmation(&input.email, &params).await;
            state.mailer.send_admin_notification(&settings, &params).await;

            let flashes = [Flash::status(format!(
                "Thank you for registering! A confirmation email has been sent to {}.",
                input.email
            ))];
            let view = RegistrationFormView::build(
                &state.events,
                today,
                RegistrationFormInput::default(),
                Vec::new(),
            )
            .await?;
            Ok(response::page(registration_page(&view, &flashes)))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store registration");
            let flashes = [Flash::error(
                "An error occurred while processing your registration. Please try again.",
            )];
            let view = RegistrationFormView::build(&state.events, today, input, Vec::new()).await?;
            Ok(response::page(registration_page(&view, &flashes)))
        }
    }
}
