use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Only PDF, TXT, and MD files are allowed (got {0})")]
    UnsupportedMediaType(String),

    #[error("Failed to extract text from document: {0}")]
    ExtractionFailed(String),

    #[error("Completion API key not configured")]
    MissingCredential,

    #[error("{0}")]
    UpstreamError(String),

    /// The raw reply is kept for logging only and never rendered.
    #[error("Failed to parse AI response")]
    MalformedModelOutput { raw: String },

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            AppError::ExtractionFailed(_) => "EXTRACTION_FAILED",
            AppError::MissingCredential => "MISSING_CREDENTIAL",
            AppError::UpstreamError(_) => "UPSTREAM_ERROR",
            AppError::MalformedModelOutput { .. } => "MALFORMED_MODEL_OUTPUT",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Text shown to the caller. Internal details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::InternalError(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_)
            | AppError::UnsupportedMediaType(_)
            | AppError::ExtractionFailed(_) => StatusCode::BAD_REQUEST,
            AppError::MissingCredential
            | AppError::UpstreamError(_)
            | AppError::MalformedModelOutput { .. }
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("[{}] {}", self.error_code(), self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
