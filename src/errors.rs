use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub timestamp: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        log::warn!("[{}] {} {}", self.error_code(), status.as_u16(), self);

        HttpResponse::build(status).json(ErrorResponse {
            error: ErrorBody {
                message: self.to_string(),
                status: status.as_u16(),
            },
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

/// Reports the first failing field (by name) as `Invalid or missing <field>`.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        match err.field_errors().keys().min() {
            Some(field) => AppError::ValidationError(format!("Invalid or missing {}", field)),
            None => AppError::ValidationError(err.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
