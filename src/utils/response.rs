use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: ApiErrorBody,
}

pub fn error(code: &str, message: impl Into<String>, status: StatusCode) -> Response {
    let body = ApiErrorResponse {
        success: false,
        error: ApiErrorBody {
            code: code.to_string(),
            message: message.into(),
        },
    };

    (status, Json(body)).into_response()
}

/// A rendered HTML page.
pub fn page(markup: String) -> Response {
    Html(markup).into_response()
}

/// A CSV download with the given attachment filename.
pub fn csv_attachment(filename: &str, content: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        content,
    )
        .into_response()
}

/// A JavaScript asset served from a compiled-in source string.
pub fn javascript(source: &'static str) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        source,
    )
        .into_response()
}
