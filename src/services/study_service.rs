use std::sync::Arc;

use crate::{
    clients::EncyclopediaClient,
    errors::{AppError, AppResult},
    models::{
        domain::{StudyPack, TopicQuery},
        dto::request::StudyRequestDto,
    },
    services::{ai_content_service::AiContentService, study_pack_composer::StudyPackComposer},
};

const TOPIC_NOT_FOUND: &str = "Topic not found on Wikipedia";

pub struct StudyService {
    encyclopedia: Arc<dyn EncyclopediaClient>,
    ai_content: Arc<AiContentService>,
    composer: StudyPackComposer,
}

impl StudyService {
    pub fn new(
        encyclopedia: Arc<dyn EncyclopediaClient>,
        ai_content: Arc<AiContentService>,
        composer: StudyPackComposer,
    ) -> Self {
        Self {
            encyclopedia,
            ai_content,
            composer,
        }
    }

    pub fn ai_configured(&self) -> bool {
        self.ai_content.is_configured()
    }

    /// Runs the whole pipeline. Only an invalid topic or a topic the
    /// encyclopedia cannot resolve is reported as an error.
    pub async fn create_study_pack(&self, request: &StudyRequestDto) -> AppResult<StudyPack> {
        let query = TopicQuery::from_request(request)?;
        log::info!("Generating {} study pack for '{}'", query.mode, query.topic);

        let encyclopedia = self.encyclopedia.fetch(&query.topic).await.map_err(|e| {
            log::error!("Encyclopedia lookup for '{}' failed: {}", query.topic, e);
            AppError::NotFound(TOPIC_NOT_FOUND.to_string())
        })?;

        if !encyclopedia.has_content() {
            return Err(AppError::NotFound(TOPIC_NOT_FOUND.to_string()));
        }

        let ai = self
            .ai_content
            .generate(&encyclopedia.title, &encyclopedia.extract, query.mode)
            .await;
        if ai.is_empty() {
            log::info!("No AI content for '{}'; using fallback content", encyclopedia.title);
        }

        Ok(self.composer.compose(&query, &encyclopedia, ai))
    }
}
