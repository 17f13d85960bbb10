use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Upstream(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(e) => write!(f, "bad request: {}", e),
            Self::NotFound(e) => write!(f, "not found: {}", e),
            Self::Upstream(e) => write!(f, "upstream: {}", e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream failures surface as 500, matching the proxy contract.
        let (status, msg) = match &self {
            Self::BadRequest(e) => (StatusCode::BAD_REQUEST, e.as_str()),
            Self::NotFound(e) => (StatusCode::NOT_FOUND, e.as_str()),
            Self::Upstream(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.as_str()),
        };
        let body = serde_json::json!({ "error": msg });
        (status, axum::Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        Self::Upstream(e.to_string())
    }
}
