//! Response construction.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::locator::{CandidateMatch, Request};

pub const X_MOCK_PATH: &str = "x-mock-path";

/// Serve a resolved leaf's content.
pub fn leaf(candidate: &CandidateMatch, content: Vec<u8>, default_content_type: &str) -> Response {
    let content_type = mime_guess::from_path(&candidate.path)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| default_content_type.to_string());

    let mut response = Response::new(Body::from(content));
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&content_type) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    if let Ok(value) = HeaderValue::from_str(&candidate.path) {
        headers.insert(X_MOCK_PATH, value);
    }
    response
}

/// No catalog entry matched.
pub fn not_found(request: &Request) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "no matching mock entry",
            "method": request.method,
            "path": request.path_segments,
        })),
    )
        .into_response()
}

/// The catalog could not be read or is inconsistent.
pub fn lookup_failed(error: &impl std::fmt::Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": error.to_string() })),
    )
        .into_response()
}
