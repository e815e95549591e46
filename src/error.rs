use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failure of a single scrape step: one page fetch, one parse, one clip lookup.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("timed out fetching {url}")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unparseable page: {reason}")]
    Parse { reason: &'static str },

    #[error("no video clip found on page")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error("not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Scrape(ScrapeError::NotFound) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Scrape(ScrapeError::Timeout { .. }) => {
                tracing::warn!("Upstream timeout: {self}");
                (StatusCode::GATEWAY_TIMEOUT, self.to_string())
            }
            AppError::Scrape(e) => {
                tracing::error!("Upstream error: {e}");
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
