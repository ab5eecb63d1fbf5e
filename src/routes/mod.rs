use axum::{routing::get, Router};

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{admin, ajax, assets, export, health_check, public};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/register",
            get(public::registration_form).post(public::submit_registration),
        )
        .route(
            "/event-registration/ajax/event-dates",
            get(ajax::event_dates),
        )
        .route(
            "/event-registration/ajax/event-names",
            get(ajax::event_names),
        )
        .route("/admin/event-registration", get(admin::registration_listing))
        .route(
            "/admin/event-registration/config",
            get(admin::config_form).post(admin::save_config),
        )
        .route(
            "/admin/event-registration/settings",
            get(admin::settings_form).post(admin::save_settings),
        )
        .route(
            "/admin/event-registration/ajax/get-event-names",
            get(ajax::admin_event_names),
        )
        .route(
            "/admin/event-registration/ajax/filter-registrations",
            get(ajax::filter_registrations),
        )
        .route(
            "/admin/event-registration/export-csv",
            get(export::export_csv),
        )
        .route(
            "/static/registration-form.js",
            get(assets::registration_form_js),
        )
        .route("/static/admin-listing.js", get(assets::admin_listing_js))
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .with_state(state)
}
