use crate::models::{
    domain::{EncyclopediaResult, StudyMode, TopicQuery},
    dto::request::StudyRequestDto,
};

pub mod fixtures {
    use super::*;

    pub const PHOTOSYNTHESIS_EXTRACT: &str = "Photosynthesis is a system of biological processes by which organisms convert light into chemical energy. Most plants, algae and cyanobacteria perform it. The process releases oxygen as a by-product! It also fixes carbon dioxide into sugars.";

    /// Encyclopedia result for a well-known topic.
    pub fn photosynthesis() -> EncyclopediaResult {
        EncyclopediaResult {
            title: "Photosynthesis".to_string(),
            extract: PHOTOSYNTHESIS_EXTRACT.to_string(),
            description: Some("Biological process".to_string()),
            content_url: Some("https://en.wikipedia.org/wiki/Photosynthesis".to_string()),
            thumbnail_url: None,
            fun_fact: Some("Did you know? Photosynthesis: Biological process.".to_string()),
        }
    }

    pub fn topic_query(topic: &str, mode: StudyMode) -> TopicQuery {
        TopicQuery {
            topic: topic.to_string(),
            mode,
        }
    }

    pub fn study_request(topic: &str, mode: Option<&str>) -> StudyRequestDto {
        StudyRequestDto {
            topic: Some(serde_json::Value::from(topic)),
            mode: mode.map(serde_json::Value::from),
        }
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_photosynthesis() {
        let result = photosynthesis();
        assert_eq!(result.title, "Photosynthesis");
        assert!(result.has_content());
    }

    #[test]
    fn test_fixtures_study_request() {
        let request = study_request("Algebra", Some("math"));
        assert_eq!(request.topic, Some(serde_json::json!("Algebra")));
        assert_eq!(request.mode, Some(serde_json::json!("math")));
        assert!(study_request("Algebra", None).mode.is_none());
    }
}
