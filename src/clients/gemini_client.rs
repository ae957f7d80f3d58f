use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    clients::{GenerationRequest, GenerativeModel, ModelError},
    config::Config,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
}

impl GeminiClient {
    /// Returns `None` when no usable API key is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.usable_gemini_key()?.clone();

        Some(Self {
            http: reqwest::Client::new(),
            endpoint: format!(
                "{}/{}/models/{}:generateContent",
                config.gemini_base_url.trim_end_matches('/'),
                config.gemini_api_version,
                config.gemini_model
            ),
            api_key,
        })
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ModelError> {
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&request_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        first_candidate_text(parsed)
    }
}

fn request_body(request: &GenerationRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart {
                text: format!("{}\n\n{}", request.system, request.prompt),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: request.temperature,
        },
    }
}

fn first_candidate_text(response: GenerateContentResponse) -> Result<String, ModelError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ModelError::InvalidResponse("response has no candidates".to_string()))?;

    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();

    Ok(parts
        .into_iter()
        .map(|p| p.text.unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n"))
}
