pub mod health_handler;
pub mod study_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use health_handler::health_check;
pub use study_handler::create_study_pack;

pub const JSON_BODY_LIMIT: usize = 1024 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_study_pack).service(health_check);
}

/// JSON extractor settings; body errors use the same envelope as every other error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            let message = match &err {
                JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                    "Request body too large".to_string()
                }
                JsonPayloadError::ContentType => "Expected a JSON request body".to_string(),
                _ => format!("Invalid JSON body: {}", err),
            };
            AppError::ValidationError(message).into()
        })
}

pub async fn not_found() -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::NotFound("Route not found".to_string()))
}
