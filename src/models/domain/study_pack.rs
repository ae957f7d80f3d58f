use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{MathProblem, QuizItem, StudyMode};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourceLinks {
    pub wikipedia: Option<String>,
}

/// Response payload of `POST /api/study`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPack {
    pub topic: String,
    pub summary: Vec<String>,
    pub quiz: Vec<QuizItem>,
    pub math: Option<MathProblem>,
    pub study_tip: String,
    pub fun_fact: Option<String>,
    pub mode: StudyMode,
    pub timestamp: DateTime<Utc>,
    pub source: SourceLinks,
}
