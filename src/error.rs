use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures that happen before the analysis engine gets to run.
/// The `Display` text is what API clients see in the `message` field.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("URL parameter is required")]
    MissingUrl,

    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Failed to fetch URL: {reason}")]
    Upstream { status: u16, reason: String },

    #[error("Error fetching or parsing the webpage: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Internal server error")]
    Internal,
}

impl ResponseError for AnalyzeError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::MissingUrl | AnalyzeError::InvalidUrl => StatusCode::BAD_REQUEST,
            AnalyzeError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AnalyzeError::Fetch(_) | AnalyzeError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AnalyzeError::Fetch(e) = self {
            tracing::error!(error = ?e, "Fetch failed");
        }
        HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() }))
    }
}
