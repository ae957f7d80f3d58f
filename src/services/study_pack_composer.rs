use std::sync::Arc;

use crate::{
    clock::Clock,
    models::domain::{AiContent, EncyclopediaResult, SourceLinks, StudyPack, TopicQuery},
    services::fallback_content::FallbackContent,
};

const MAX_ITEMS: usize = 3;

/// Merges AI output with fallback content one field at a time: an AI field is
/// used when present, otherwise the fallback fills that field alone.
pub struct StudyPackComposer {
    fallback: FallbackContent,
    clock: Arc<dyn Clock>,
}

impl StudyPackComposer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            fallback: FallbackContent::new(clock.clone()),
            clock,
        }
    }

    pub fn compose(
        &self,
        query: &TopicQuery,
        encyclopedia: &EncyclopediaResult,
        ai: AiContent,
    ) -> StudyPack {
        let topic = if encyclopedia.title.trim().is_empty() {
            query.topic.clone()
        } else {
            encyclopedia.title.clone()
        };

        let summary = if ai.summary.is_empty() {
            self.fallback.summary(&encyclopedia.extract)
        } else {
            ai.summary.into_iter().take(MAX_ITEMS).collect()
        };

        let quiz = if ai.quiz.is_empty() {
            self.fallback.quiz(&topic, &summary)
        } else {
            ai.quiz.into_iter().take(MAX_ITEMS).collect()
        };

        let math = query
            .mode
            .is_math()
            .then(|| ai.math.unwrap_or_else(|| self.fallback.math_problem(&topic)));

        let study_tip = if ai.study_tip.trim().is_empty() {
            self.fallback.study_tip(&topic)
        } else {
            ai.study_tip
        };

        let fun_fact = if ai.fun_fact.trim().is_empty() {
            encyclopedia.fun_fact.clone()
        } else {
            Some(ai.fun_fact)
        };

        StudyPack {
            topic,
            summary,
            quiz,
            math,
            study_tip,
            fun_fact,
            mode: query.mode,
            timestamp: self.clock.now(),
            source: SourceLinks {
                wikipedia: encyclopedia.content_url.clone(),
            },
        }
    }
}
