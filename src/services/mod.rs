pub mod ai_content_service;
pub mod ai_stats;
pub mod fallback_content;
pub mod prompt_builder;
pub mod response_parser;
pub mod study_pack_composer;
pub mod study_service;

pub use ai_content_service::AiContentService;
pub use ai_stats::{AiStats, AiStatsSnapshot};
pub use study_pack_composer::StudyPackComposer;
pub use study_service::StudyService;
