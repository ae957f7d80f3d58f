use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

const GEMINI_KEY_PLACEHOLDER: &str = "your_gemini_api_key_here";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub allowed_origins: Vec<String>,
    pub gemini_api_key: Option<SecretString>,
    pub gemini_model: String,
    pub gemini_api_version: String,
    pub gemini_base_url: String,
    pub ai_timeout: Duration,
    pub wikipedia_summary_url: String,
    pub wikipedia_user_agent: String,
    pub wikipedia_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .or_else(|_| env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            allowed_origins: parse_origins(&env::var("ORIGIN").unwrap_or_else(|_| "*".to_string())),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().map(SecretString::from),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            gemini_api_version: env::var("GEMINI_API_VERSION").unwrap_or_else(|_| "v1".to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            ai_timeout: Duration::from_secs(
                env::var("AI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(20),
            ),
            wikipedia_summary_url: env::var("WIKIPEDIA_SUMMARY_URL").unwrap_or_else(|_| {
                "https://en.wikipedia.org/api/rest_v1/page/summary/".to_string()
            }),
            wikipedia_user_agent: env::var("WIKIPEDIA_USER_AGENT")
                .unwrap_or_else(|_| "SmartStudyAssistant/1.0 (https://example.com)".to_string()),
            wikipedia_timeout: Duration::from_secs(
                env::var("WIKIPEDIA_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }

    /// Returns the Gemini key only when it is set to something other than
    /// blank or the `.env.example` placeholder.
    pub fn usable_gemini_key(&self) -> Option<&SecretString> {
        self.gemini_api_key.as_ref().filter(|key| {
            let key = key.expose_secret().trim();
            !key.is_empty() && key != GEMINI_KEY_PLACEHOLDER
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// The service runs without an AI credential, so this warns instead of
    /// refusing to start.
    pub fn log_startup_warnings(&self) {
        if self.usable_gemini_key().is_none() {
            log::warn!(
                "GEMINI_API_KEY is missing, empty, or still the placeholder; study packs will use fallback content only"
            );
        }

        if self.allows_any_origin() {
            log::warn!("ORIGIN is '*'; CORS accepts requests from any origin");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            allowed_origins: vec!["*".to_string()],
            gemini_api_key: None,
            gemini_model: "gemini-test".to_string(),
            gemini_api_version: "v1".to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            ai_timeout: Duration::from_secs(20),
            wikipedia_summary_url: "http://127.0.0.1:9/page/summary/".to_string(),
            wikipedia_user_agent: "SmartStudyAssistant/test".to_string(),
            wikipedia_timeout: Duration::from_secs(10),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}
