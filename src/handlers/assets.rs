//! The two page scripts, embedded at compile time.

use axum::response::Response;

use crate::utils::response;

const REGISTRATION_FORM_JS: &str = include_str!("../../static/registration-form.js");
const ADMIN_LISTING_JS: &str = include_str!("../../static/admin-listing.js");

/// GET /static/registration-form.js
pub async fn registration_form_js() -> Response {
    response::javascript(REGISTRATION_FORM_JS)
}

/// GET /static/admin-listing.js
pub async fn admin_listing_js() -> Response {
    response::javascript(ADMIN_LISTING_JS)
}
