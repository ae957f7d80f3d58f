pub mod gemini_client;
pub mod wikipedia_client;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::domain::EncyclopediaResult;

pub use gemini_client::GeminiClient;
pub use wikipedia_client::WikipediaClient;

#[derive(Debug, Error)]
pub enum EncyclopediaError {
    #[error("encyclopedia request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("encyclopedia returned status {0}")]
    Status(u16),

    #[error("invalid encyclopedia url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid model response: {0}")]
    InvalidResponse(String),
}

/// Resolves a topic to a canonical title and extract. A topic the source does
/// not know comes back as `Ok` with an empty extract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EncyclopediaClient: Send + Sync {
    async fn fetch(&self, topic: &str) -> Result<EncyclopediaResult, EncyclopediaError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
}

/// Text completion against a generative model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ModelError>;
}
