use std::sync::Arc;

use crate::{
    clients::{EncyclopediaClient, GeminiClient, GenerativeModel, WikipediaClient},
    clock::{Clock, SystemClock},
    config::Config,
    errors::{AppError, AppResult},
    services::{
        ai_content_service::AiContentService, ai_stats::AiStats,
        study_pack_composer::StudyPackComposer, study_service::StudyService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub study_service: Arc<StudyService>,
    pub ai_stats: Arc<AiStats>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let wikipedia = WikipediaClient::new(&config).map_err(|e| {
            AppError::InternalError(format!("Failed to build Wikipedia client: {}", e))
        })?;
        let encyclopedia: Arc<dyn EncyclopediaClient> = Arc::new(wikipedia);
        let model = GeminiClient::from_config(&config)
            .map(|client| Arc::new(client) as Arc<dyn GenerativeModel>);

        Ok(Self::with_collaborators(
            config,
            encyclopedia,
            model,
            Arc::new(SystemClock),
        ))
    }

    /// Wires the pipeline around the given collaborators.
    pub fn with_collaborators(
        config: Config,
        encyclopedia: Arc<dyn EncyclopediaClient>,
        model: Option<Arc<dyn GenerativeModel>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let ai_stats = Arc::new(AiStats::new());
        let ai_content = Arc::new(AiContentService::new(
            model,
            config.ai_timeout,
            ai_stats.clone(),
        ));
        let study_service = Arc::new(StudyService::new(
            encyclopedia,
            ai_content,
            StudyPackComposer::new(clock),
        ));

        Self {
            study_service,
            ai_stats,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_ai_disabled_without_key() {
        let state = AppState::new(Config::test_config()).unwrap();
        assert!(!state.study_service.ai_configured());
        assert_eq!(state.ai_stats.snapshot().attempts, 0);
    }
}
