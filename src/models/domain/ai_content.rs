use serde::{Deserialize, Serialize};

/// Multiple-choice question. `answer` is expected to equal one of `options`
/// verbatim; AI-sourced items are not checked against that.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizItem {
    #[serde(rename = "q", alias = "question", default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: String,
}

impl QuizItem {
    pub fn new(question: impl Into<String>, options: [String; 4], answer_index: usize) -> Self {
        let answer = options[answer_index.min(3)].clone();
        Self {
            question: question.into(),
            options: options.into(),
            answer,
        }
    }

    pub fn answer_is_an_option(&self) -> bool {
        self.options.iter().filter(|o| **o == self.answer).count() == 1
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MathProblem {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
}

/// Partial content recovered from the generative model. Every field may be
/// empty; `AiContent::default()` is the "no AI content" sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AiContent {
    pub summary: Vec<String>,
    pub quiz: Vec<QuizItem>,
    pub math: Option<MathProblem>,
    pub study_tip: String,
    pub fun_fact: String,
}

impl AiContent {
    pub fn is_empty(&self) -> bool {
        self == &AiContent::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quiz_item_reads_q_or_question() {
        let short: QuizItem =
            serde_json::from_value(json!({"q": "Q1", "options": ["A", "B"], "answer": "A"}))
                .unwrap();
        let long: QuizItem =
            serde_json::from_value(json!({"question": "Q1", "options": ["A", "B"], "answer": "A"}))
                .unwrap();

        assert_eq!(short, long);
        assert_eq!(serde_json::to_value(&short).unwrap()["q"], "Q1");
    }

    #[test]
    fn quiz_item_new_takes_answer_from_options() {
        let item = QuizItem::new(
            "Which?",
            ["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()],
            2,
        );
        assert_eq!(item.answer, "c");
        assert!(item.answer_is_an_option());
    }

    #[test]
    fn default_content_is_the_empty_sentinel() {
        let content = AiContent::default();
        assert!(content.is_empty());
        assert!(content.math.is_none());

        let partial = AiContent {
            study_tip: "Review daily".to_string(),
            ..Default::default()
        };
        assert!(!partial.is_empty());
    }
}
