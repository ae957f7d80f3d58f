use async_trait::async_trait;
use reqwest::{header::USER_AGENT, StatusCode, Url};
use serde::Deserialize;

use crate::{
    clients::{EncyclopediaClient, EncyclopediaError},
    config::Config,
    models::domain::{encyclopedia::build_fun_fact, EncyclopediaResult},
};

#[derive(Debug, Default, Deserialize)]
struct PageSummary {
    title: Option<String>,
    extract: Option<String>,
    description: Option<String>,
    thumbnail: Option<Thumbnail>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrls>,
}

#[derive(Debug, Deserialize)]
struct PageUrls {
    page: Option<String>,
}

/// Client for the Wikipedia REST page-summary endpoint.
pub struct WikipediaClient {
    http: reqwest::Client,
    summary_url: String,
    user_agent: String,
}

impl WikipediaClient {
    /// Every lookup is bounded by `config.wikipedia_timeout`.
    pub fn new(config: &Config) -> Result<Self, EncyclopediaError> {
        let http = reqwest::Client::builder()
            .timeout(config.wikipedia_timeout)
            .build()?;

        Ok(Self {
            http,
            summary_url: config.wikipedia_summary_url.clone(),
            user_agent: config.wikipedia_user_agent.clone(),
        })
    }

    fn page_url(&self, topic: &str) -> Result<Url, EncyclopediaError> {
        let mut url = Url::parse(&self.summary_url)
            .map_err(|e| EncyclopediaError::InvalidUrl(format!("{}: {}", self.summary_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| EncyclopediaError::InvalidUrl(self.summary_url.clone()))?
            .pop_if_empty()
            .push(topic);

        Ok(url)
    }
}

#[async_trait]
impl EncyclopediaClient for WikipediaClient {
    async fn fetch(&self, topic: &str) -> Result<EncyclopediaResult, EncyclopediaError> {
        let url = self.page_url(topic)?;
        log::debug!("Fetching Wikipedia summary from {}", url);

        let response = self
            .http
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            log::info!("Wikipedia has no page for '{}'", topic);
            return Ok(EncyclopediaResult::not_found(topic));
        }
        if !status.is_success() {
            return Err(EncyclopediaError::Status(status.as_u16()));
        }

        let summary: PageSummary = response.json().await?;
        Ok(into_result(topic, summary))
    }
}

fn into_result(topic: &str, summary: PageSummary) -> EncyclopediaResult {
    let fun_fact = build_fun_fact(summary.title.as_deref(), summary.description.as_deref());

    let description = summary.description.filter(|d| !d.is_empty());
    let extract = summary
        .extract
        .filter(|e| !e.is_empty())
        .or_else(|| description.clone())
        .unwrap_or_default();

    EncyclopediaResult {
        title: summary
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| topic.to_string()),
        extract,
        description,
        content_url: summary
            .content_urls
            .and_then(|urls| urls.desktop)
            .and_then(|desktop| desktop.page),
        thumbnail_url: summary.thumbnail.and_then(|t| t.source),
        fun_fact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_with_base(base: &str) -> WikipediaClient {
        let mut config = Config::test_config();
        config.wikipedia_summary_url = base.to_string();
        WikipediaClient::new(&config).unwrap()
    }

    #[actix_web::test]
    async fn stalled_lookup_times_out() {
        // Accepts connections through the backlog but never answers.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/page/summary/", listener.local_addr().unwrap());

        let mut config = Config::test_config();
        config.wikipedia_summary_url = base;
        config.wikipedia_timeout = std::time::Duration::from_millis(200);
        let client = WikipediaClient::new(&config).unwrap();

        let outcome =
            tokio::time::timeout(std::time::Duration::from_secs(5), client.fetch("Algebra")).await;

        match outcome {
            Ok(Err(EncyclopediaError::Transport(e))) => assert!(e.is_timeout()),
            other => panic!("expected a client timeout, got {:?}", other.map(|r| r.is_ok())),
        }
        drop(listener);
    }

    #[test]
    fn page_url_percent_encodes_topic() {
        let client = client_with_base("https://en.wikipedia.org/api/rest_v1/page/summary/");
        let url = client.page_url("Newton's laws / motion").unwrap();

        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Newton's%20laws%20%2F%20motion"
        );
    }

    #[test]
    fn page_url_works_without_trailing_slash() {
        let client = client_with_base("https://en.wikipedia.org/api/rest_v1/page/summary");
        let url = client.page_url("Algebra").unwrap();
        assert_eq!(url.path(), "/api/rest_v1/page/summary/Algebra");
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let client = client_with_base("not a url");
        assert!(matches!(
            client.page_url("Algebra"),
            Err(EncyclopediaError::InvalidUrl(_))
        ));
    }

    #[test]
    fn maps_full_page_summary() {
        let summary: PageSummary = serde_json::from_value(json!({
            "title": "Photosynthesis",
            "extract": "Photosynthesis is a process. Plants do it.",
            "description": "Biological process",
            "thumbnail": {"source": "https://upload.example/thumb.png"},
            "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Photosynthesis"}}
        }))
        .unwrap();

        let result = into_result("photosynthesis", summary);
        assert_eq!(result.title, "Photosynthesis");
        assert_eq!(result.extract, "Photosynthesis is a process. Plants do it.");
        assert_eq!(result.description.as_deref(), Some("Biological process"));
        assert_eq!(
            result.content_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Photosynthesis")
        );
        assert_eq!(
            result.thumbnail_url.as_deref(),
            Some("https://upload.example/thumb.png")
        );
        assert_eq!(
            result.fun_fact.as_deref(),
            Some("Did you know? Photosynthesis: Biological process.")
        );
    }

    #[test]
    fn missing_extract_falls_back_to_description_and_title_to_topic() {
        let summary: PageSummary =
            serde_json::from_value(json!({"description": "Greek letter"})).unwrap();

        let result = into_result("Pi", summary);
        assert_eq!(result.title, "Pi");
        assert_eq!(result.extract, "Greek letter");
        assert!(result.fun_fact.is_none());
        assert!(result.content_url.is_none());
    }
}
