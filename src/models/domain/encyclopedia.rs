use serde::Serialize;

/// Result of an encyclopedia lookup. An empty `extract` means the topic had
/// no usable content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EncyclopediaResult {
    pub title: String,
    pub extract: String,
    pub description: Option<String>,
    pub content_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub fun_fact: Option<String>,
}

impl EncyclopediaResult {
    pub fn not_found(topic: &str) -> Self {
        Self {
            title: topic.to_string(),
            ..Default::default()
        }
    }

    pub fn has_content(&self) -> bool {
        !self.extract.trim().is_empty()
    }
}

/// Fun fact derived from the page title and short description.
pub fn build_fun_fact(title: Option<&str>, description: Option<&str>) -> Option<String> {
    let title = title.filter(|t| !t.trim().is_empty())?;

    match description.filter(|d| !d.trim().is_empty()) {
        Some(desc) => Some(format!("Did you know? {}: {}.", title, desc)),
        None => Some(format!("Did you know? {} is a topic on Wikipedia.", title)),
    }
}
