use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Failures that abort a statistics request
#[derive(Debug, Error)]
pub enum AppError {
    /// Network failure, non-success status, or an unexpected provider payload
    #[error("Upstream request failed for {url}: {message}")]
    Upstream { url: String, message: String },

    /// A fixture record is missing a field needed for normalization
    #[error("Malformed match in tournament {tournament_id}: {field}")]
    MalformedMatch { tournament_id: i64, field: String },
}

impl AppError {
    pub fn upstream(url: &str, message: impl Into<String>) -> Self {
        Self::Upstream {
            url: url.to_string(),
            message: message.into(),
        }
    }

    pub fn malformed_match(tournament_id: i64, field: impl Into<String>) -> Self {
        Self::MalformedMatch {
            tournament_id,
            field: field.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream { .. } | Self::MalformedMatch { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else {
            err.to_string()
        };
        Self::Upstream { url, message }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("Request failed: {}", self);
        let body = match &self {
            Self::Upstream { .. } => "Upstream provider error",
            Self::MalformedMatch { .. } => "Malformed upstream match data",
        };
        (self.status_code(), body).into_response()
    }
}
