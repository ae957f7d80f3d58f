use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    clock::Clock,
    models::domain::{MathProblem, QuizItem},
};

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("SENTENCE_BOUNDARY is a valid regex"));

const SUMMARY_LEN: usize = 3;
const QUIZ_LEN: usize = 3;
const EXCERPT_CHARS: usize = 100;
const SHORT_EXCERPT_CHARS: usize = 50;
const STUDY_TIP_COUNT: u64 = 8;

/// Locally synthesized content used wherever the model gave nothing usable.
#[derive(Clone)]
pub struct FallbackContent {
    clock: Arc<dyn Clock>,
}

impl FallbackContent {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn summary(&self, extract: &str) -> Vec<String> {
        split_sentences(extract).into_iter().take(SUMMARY_LEN).collect()
    }

    pub fn quiz(&self, topic: &str, summary: &[String]) -> Vec<QuizItem> {
        let mut questions: Vec<QuizItem> = summary
            .iter()
            .take(QUIZ_LEN)
            .enumerate()
            .map(|(position, sentence)| sentence_question(topic, sentence, position))
            .collect();

        while questions.len() < QUIZ_LEN {
            questions.push(generic_question(topic, questions.len()));
        }

        questions
    }

    pub fn study_tip(&self, topic: &str) -> String {
        study_tip_for(topic, self.clock.seed())
    }

    pub fn math_problem(&self, topic: &str) -> MathProblem {
        math_problem_for(topic, self.clock.seed())
    }
}

/// Splits on `.`, `!` or `?` followed by whitespace, keeping the punctuation.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut last = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        sentences.push(&text[last..boundary.start() + 1]);
        last = boundary.end();
    }
    sentences.push(&text[last..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn excerpt(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn options(a: String, b: String, c: String, d: String) -> [String; 4] {
    [a, b, c, d]
}

fn sentence_question(topic: &str, sentence: &str, position: usize) -> QuizItem {
    let short = excerpt(sentence, EXCERPT_CHARS);

    match position {
        0 => QuizItem::new(
            format!(
                "Based on this key idea about {topic}: {short}... - Which statement best explains WHY it matters?"
            ),
            options(
                format!("It reveals the fundamental mechanism behind how {topic} works"),
                "It is a basic fact with no deeper implications".to_string(),
                "It only matters for memorization".to_string(),
                "It is purely historical context".to_string(),
            ),
            0,
        ),
        1 => QuizItem::new(
            format!(
                "Regarding {topic}: {short}... - What would happen if this principle were disrupted?"
            ),
            options(
                format!("The core functioning of {topic} would be compromised"),
                "Nothing significant would change".to_string(),
                "Only cosmetic differences would appear".to_string(),
                "Everything would work exactly the same".to_string(),
            ),
            0,
        ),
        _ => QuizItem::new(
            format!(
                "To show real understanding of {topic} beyond memorization, you should be able to:"
            ),
            options(
                format!(
                    "Apply these ideas: {}... to solve new problems",
                    excerpt(&short, SHORT_EXCERPT_CHARS)
                ),
                "Recite the definition word for word".to_string(),
                "Name the year it was discovered".to_string(),
                "List facts without seeing how they connect".to_string(),
            ),
            0,
        ),
    }
}

fn generic_question(topic: &str, position: usize) -> QuizItem {
    match position {
        0 => QuizItem::new(
            format!("When studying {topic}, which approach shows the deepest understanding?"),
            options(
                format!("Explaining {topic} concepts and applying them to new problems"),
                format!("Memorizing definitions and terms related to {topic}"),
                format!("Knowing historical dates about {topic}"),
                format!("Reading about {topic} once without practice"),
            ),
            0,
        ),
        1 => QuizItem::new(
            format!("What is the most reliable way to check that someone truly understands {topic}?"),
            options(
                format!("Ask them to solve an unfamiliar problem involving {topic}"),
                format!("Have them recite the definition of {topic}"),
                format!("Check whether they can spell terms from {topic}"),
                format!("See if they remember who discovered {topic}"),
            ),
            0,
        ),
        _ => QuizItem::new(
            format!("In a real-world situation that calls for knowledge of {topic}, which skill is most valuable?"),
            options(
                format!("Applying {topic} principles to analyze and solve the problem"),
                format!("Knowing the textbook definition of {topic}"),
                format!("Remembering facts about {topic} without context"),
                format!("Having memorized examples from {topic} lessons"),
            ),
            0,
        ),
    }
}

pub fn study_tip_for(topic: &str, seed: u64) -> String {
    let t = if topic.trim().is_empty() { "this topic" } else { topic };

    match seed % STUDY_TIP_COUNT {
        0 => format!("Try the Feynman Technique: explain {t} as if to a 10-year-old. The gaps in your explanation show what to review."),
        1 => format!("Build a mind map: put {t} in the center and branch out into key concepts, examples and the connections between them."),
        2 => format!("Use active recall: close this summary and write down everything you remember about {t}. Check what you missed, then repeat."),
        3 => format!("Make flashcards for the 3-5 most important terms in {t} and review them with spaced repetition (today, tomorrow, in 3 days, in a week)."),
        4 => format!("Teach it back: record a 2-minute voice memo explaining {t} in your own words, then listen for the parts that sound unclear."),
        5 => format!("Find real-world connections: spend 5 minutes thinking about how {t} shows up in your life or in current events."),
        6 => format!("Draw it out: sketch a diagram or timeline for {t}. Pictures often expose patterns that text hides."),
        _ => format!("Practice retrieval: cover the summary and quiz yourself on {t} without looking. Struggling to remember strengthens memory."),
    }
}

/// Bounded values derived from a time seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MathSeed {
    base: u64,
    secondary: u64,
    percentage: u64,
    template: u64,
}

impl MathSeed {
    fn from_seed(seed: u64) -> Self {
        Self {
            base: 30 + seed % 70,
            secondary: 10 + (seed / 70) % 40,
            percentage: 10 + (seed / 2_800) % 40,
            template: seed % 3,
        }
    }
}

pub fn math_problem_for(topic: &str, seed: u64) -> MathProblem {
    let values = MathSeed::from_seed(seed);

    match values.template {
        0 => study_time_growth(topic, values),
        1 => quiz_score(topic, values),
        _ => reading_rate(topic, values),
    }
}

fn study_time_growth(topic: &str, values: MathSeed) -> MathProblem {
    let MathSeed { base, percentage, .. } = values;
    let factor = 1.0 + percentage as f64 / 100.0;
    let day2 = base as f64 * factor;
    let day3 = day2 * factor;

    MathProblem {
        question: format!(
            "If a student studies {topic} for {base} minutes on day 1 and increases their study time by {percentage}% each day, how many minutes will they study on day 3?"
        ),
        answer: format!("{day3:.1} minutes"),
        explanation: format!(
            "Day 1: {base} min. Day 2: {base} × {factor:.2} = {day2:.1} min. Day 3: {day2:.1} × {factor:.2} = {day3:.1} min"
        ),
    }
}

fn quiz_score(topic: &str, values: MathSeed) -> MathProblem {
    let MathSeed { base, percentage, .. } = values;
    let correct = base * percentage / 100;
    let wrong = base - correct;

    MathProblem {
        question: format!(
            "In a {topic} test, {base} questions were asked. If a student answered {percentage}% of them correctly, how many did they get wrong?"
        ),
        answer: format!("{wrong} questions"),
        explanation: format!(
            "Correct: {base} × {percentage}% = {correct} (whole questions only). Wrong: {base} - {correct} = {wrong}"
        ),
    }
}

fn reading_rate(topic: &str, values: MathSeed) -> MathProblem {
    let MathSeed { base, secondary, .. } = values;
    let pages = base * 3;
    let days = pages.div_ceil(secondary);

    MathProblem {
        question: format!(
            "A {topic} textbook has {pages} pages. If you read {secondary} pages per day, how many days do you need to finish it?"
        ),
        answer: format!("{days} days"),
        explanation: format!(
            "Total pages ÷ pages per day = {pages} ÷ {secondary} = {:.2}, rounded up to {days} days",
            pages as f64 / secondary as f64
        ),
    }
}
