pub mod ai_content;
pub mod encyclopedia;
pub mod study_mode;
pub mod study_pack;
pub mod topic_query;

pub use ai_content::{AiContent, MathProblem, QuizItem};
pub use encyclopedia::EncyclopediaResult;
pub use study_mode::StudyMode;
pub use study_pack::{SourceLinks, StudyPack};
pub use topic_query::TopicQuery;
