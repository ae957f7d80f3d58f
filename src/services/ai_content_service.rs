use std::{sync::Arc, time::Duration};

use serde_json::{Map, Value};

use crate::{
    clients::{GenerationRequest, GenerativeModel, ModelError},
    constants::study_prompts::{
        MATH_TEMPERATURE, MATH_TUTOR_SYSTEM_PROMPT, NORMAL_TEMPERATURE,
        STUDY_ASSISTANT_SYSTEM_PROMPT,
    },
    models::domain::{AiContent, MathProblem, QuizItem, StudyMode},
    services::{
        ai_stats::{AiDegradation, AiStats},
        prompt_builder::build_prompt,
        response_parser::parse_model_output,
    },
};

const MAX_ITEMS: usize = 3;
const EXPECTED_FIELDS: [&str; 4] = ["summary", "quiz", "studyTip", "funFact"];

/// Asks the generative model for study content. Every failure is absorbed
/// into `AiContent::default()`; callers fill the gaps with fallback content.
pub struct AiContentService {
    model: Option<Arc<dyn GenerativeModel>>,
    timeout: Duration,
    stats: Arc<AiStats>,
}

impl AiContentService {
    pub fn new(
        model: Option<Arc<dyn GenerativeModel>>,
        timeout: Duration,
        stats: Arc<AiStats>,
    ) -> Self {
        Self {
            model,
            timeout,
            stats,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    pub async fn generate(&self, topic: &str, extract: &str, mode: StudyMode) -> AiContent {
        let Some(model) = &self.model else {
            log::warn!("No usable Gemini API key; skipping AI generation for '{}'", topic);
            self.stats.record_degradation(AiDegradation::MissingCredential);
            return AiContent::default();
        };

        let request = GenerationRequest {
            system: system_prompt(mode).to_string(),
            prompt: build_prompt(topic, extract, mode),
            temperature: temperature(mode),
        };

        self.stats.record_attempt();
        let raw = match tokio::time::timeout(self.timeout, model.generate(&request)).await {
            Ok(Ok(text)) => text,
            Ok(Err(err)) => {
                self.stats.record_degradation(log_model_error(&err));
                return AiContent::default();
            }
            Err(_) => {
                log::error!(
                    "Gemini API timed out after {} seconds; using fallback content",
                    self.timeout.as_secs()
                );
                self.stats.record_degradation(AiDegradation::Timeout);
                return AiContent::default();
            }
        };

        let fields = match parse_model_output(&raw) {
            Value::Object(fields) if !fields.is_empty() => fields,
            _ => {
                log::error!(
                    "Failed to parse a JSON object from Gemini response; raw preview: {}",
                    raw.chars().take(300).collect::<String>()
                );
                self.stats.record_degradation(AiDegradation::Unparseable);
                return AiContent::default();
            }
        };

        let missing: Vec<&str> = EXPECTED_FIELDS
            .into_iter()
            .filter(|field| !fields.contains_key(*field))
            .collect();
        if !missing.is_empty() {
            log::warn!("Missing fields in Gemini response: {}", missing.join(", "));
        }

        let content = shape_content(&fields);
        if content.is_empty() {
            log::warn!("Gemini response had no usable study fields; using fallback content");
            self.stats.record_degradation(AiDegradation::Incomplete);
        } else {
            self.stats.record_success();
        }
        content
    }
}

fn system_prompt(mode: StudyMode) -> &'static str {
    match mode {
        StudyMode::Math => MATH_TUTOR_SYSTEM_PROMPT,
        StudyMode::Normal => STUDY_ASSISTANT_SYSTEM_PROMPT,
    }
}

fn temperature(mode: StudyMode) -> f32 {
    match mode {
        StudyMode::Math => MATH_TEMPERATURE,
        StudyMode::Normal => NORMAL_TEMPERATURE,
    }
}

fn log_model_error(err: &ModelError) -> AiDegradation {
    match err {
        ModelError::Status { status, body } => {
            log::error!("Gemini API error ({}): {}", status, body);
            match *status {
                400 => log::error!("Check that GEMINI_API_KEY is valid and the request is well formed"),
                401 | 403 => log::error!("Gemini rejected the API key; check GEMINI_API_KEY"),
                429 => log::warn!("Gemini rate limit exceeded"),
                s if s >= 500 => log::error!("Gemini API appears to be temporarily unavailable"),
                _ => {}
            }
            AiDegradation::HttpStatus
        }
        ModelError::Transport(e) => {
            log::error!("Error calling Gemini API: {}", e);
            AiDegradation::Transport
        }
        ModelError::InvalidResponse(reason) => {
            log::error!("Invalid Gemini API response structure: {}", reason);
            AiDegradation::Unparseable
        }
    }
}

/// Keeps only well-typed fields: at most three summary strings, at most three
/// quiz objects, and a math problem only when it is an object.
fn shape_content(fields: &Map<String, Value>) -> AiContent {
    let summary = fields
        .get("summary")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .take(MAX_ITEMS)
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let quiz = fields
        .get("quiz")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .take(MAX_ITEMS)
                .filter(|item| item.is_object())
                .filter_map(|item| serde_json::from_value::<QuizItem>(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    let math = fields
        .get("math")
        .filter(|m| m.is_object())
        .and_then(|m| serde_json::from_value::<MathProblem>(m.clone()).ok());

    AiContent {
        summary,
        quiz,
        math,
        study_tip: string_field(fields, "studyTip"),
        fun_fact: string_field(fields, "funFact"),
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}
