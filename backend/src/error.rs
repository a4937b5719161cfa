use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

/// Failures of the CSV generation endpoint.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("records must be a non-negative integer, got '{0}'")]
    InvalidRecords(String),

    #[error("fileName '{0}' cannot be used as a download name")]
    InvalidFileName(String),

    #[error("failed to write CSV row: {0}")]
    Generation(#[from] std::fmt::Error),
}

impl ResponseError for ExportError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExportError::InvalidRecords(_) | ExportError::InvalidFileName(_) => {
                StatusCode::BAD_REQUEST
            }
            ExportError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Validation errors explain themselves; generation errors answer with an
    /// empty body and are only reported in the server log.
    fn error_response(&self) -> HttpResponse {
        match self.status_code() {
            StatusCode::BAD_REQUEST => HttpResponse::BadRequest().body(self.to_string()),
            status => {
                error!("CSV export failed: {}", self);
                HttpResponse::build(status).finish()
            }
        }
    }
}
