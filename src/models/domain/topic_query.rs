use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::StudyMode, dto::request::StudyRequestDto},
};

pub const MAX_TOPIC_CHARS: usize = 200;

/// Normalized study request: trimmed, length-bounded topic plus resolved mode.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct TopicQuery {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,
    pub mode: StudyMode,
}

impl TopicQuery {
    pub fn from_request(request: &StudyRequestDto) -> AppResult<Self> {
        let raw_topic = request
            .topic
            .as_ref()
            .and_then(|v| v.as_str())
            .ok_or_else(invalid_topic)?;

        let query = Self {
            topic: sanitize_topic(raw_topic),
            mode: StudyMode::from_raw(request.mode.as_ref()),
        };
        query.validate()?;

        Ok(query)
    }
}

fn invalid_topic() -> AppError {
    AppError::ValidationError("Invalid or missing topic".to_string())
}

fn sanitize_topic(raw: &str) -> String {
    raw.trim().chars().take(MAX_TOPIC_CHARS).collect::<String>().trim_end().to_string()
}
