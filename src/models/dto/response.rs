use serde::Serialize;

use crate::services::ai_stats::AiStatsSnapshot;

#[derive(Debug, Serialize)]
pub struct AiHealthDto {
    pub configured: bool,
    #[serde(flatten)]
    pub stats: AiStatsSnapshot,
}

#[derive(Debug, Serialize)]
pub struct HealthResponseDto {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
    pub time: String,
    pub ai: AiHealthDto,
}
