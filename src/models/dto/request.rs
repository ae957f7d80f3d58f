use serde::Deserialize;

/// Raw body of `POST /api/study`. Fields stay untyped so that a missing or
/// non-string topic is reported as an invalid topic rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudyRequestDto {
    #[serde(default)]
    pub topic: Option<serde_json::Value>,
    #[serde(default)]
    pub mode: Option<serde_json::Value>,
}
