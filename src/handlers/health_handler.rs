use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::{
    app_state::AppState,
    models::dto::response::{AiHealthDto, HealthResponseDto},
};

pub const SERVICE_NAME: &str = "smart-study-assistant";

#[get("/api/health")]
async fn health_check(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponseDto {
        ok: true,
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        time: Utc::now().to_rfc3339(),
        ai: AiHealthDto {
            configured: state.study_service.ai_configured(),
            stats: state.ai_stats.snapshot(),
        },
    })
}
