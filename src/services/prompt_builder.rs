use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::study_prompts::{
        MATH_RESPONSE_SHAPE, MATH_TOPIC_PATTERN, MAX_CONTEXT_CHARS, NORMAL_RESPONSE_SHAPE,
    },
    models::domain::StudyMode,
};

static MATH_TOPIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(MATH_TOPIC_PATTERN).expect("MATH_TOPIC_PATTERN is a valid regex"));

pub fn is_math_topic(topic: &str) -> bool {
    MATH_TOPIC_REGEX.is_match(topic)
}

/// Cuts `text` to `max` characters, marking the cut with `...`.
pub fn truncate_context(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Renders the instruction text sent to the generative model.
pub fn build_prompt(topic: &str, extract: &str, mode: StudyMode) -> String {
    let context = truncate_context(extract, MAX_CONTEXT_CHARS);

    let mut lines = vec![
        format!("Topic: {topic}"),
        format!("Context: {context}"),
    ];

    match mode {
        StudyMode::Math => lines.extend(math_requirements(topic)),
        StudyMode::Normal => lines.extend(normal_requirements(topic)),
    }

    lines.push("Return JSON exactly in this shape:".to_string());
    lines.push(
        match mode {
            StudyMode::Math => MATH_RESPONSE_SHAPE,
            StudyMode::Normal => NORMAL_RESPONSE_SHAPE,
        }
        .to_string(),
    );
    lines.push("- No markdown or code fences.".to_string());

    lines.join("\n")
}

fn quiz_requirements(topic: &str) -> Vec<String> {
    vec![
        format!("- Quiz: EXACTLY 3 challenging questions DIRECTLY ABOUT {topic}, grounded in the context above"),
        format!("  * Q1 (Medium): a core concept or mechanism specific to {topic}"),
        format!("  * Q2 (Hard): how {topic} behaves in a concrete real-world scenario"),
        format!("  * Q3 (Very Hard): edge cases, limitations or advanced implications of {topic}"),
        format!("  * Use real terminology and examples from {topic}, never generic statements"),
        "  * Each question has EXACTLY 4 distinct, plausible options".to_string(),
        "  * \"answer\" must match one option exactly".to_string(),
    ]
}

fn normal_requirements(topic: &str) -> Vec<String> {
    let mut lines = vec![
        "Task: Create a comprehensive study pack.".to_string(),
        "Requirements:".to_string(),
        "- Summary: EXACTLY 3 detailed bullets explaining HOW and WHY, not bare definitions"
            .to_string(),
    ];
    lines.extend(quiz_requirements(topic));
    lines.push(format!(
        "- StudyTip: ONE specific, actionable technique for learning {topic}"
    ));
    lines.push(format!(
        "- FunFact: ONE genuinely surprising or counterintuitive fact about {topic}"
    ));
    lines
}

fn math_requirements(topic: &str) -> Vec<String> {
    let math_topic = is_math_topic(topic);
    let problem_kind = if math_topic {
        "pure mathematical problem using formulas or equations from this topic"
    } else {
        "quantitative word problem"
    };
    let problem_hint = if math_topic {
        "Use real formulas or theorems from the topic (e.g. for Pythagoras: \"Find c if a=7, b=24\")"
    } else {
        "Build a practical word problem that needs actual calculation"
    };

    let mut lines = vec![
        "Task: Create a comprehensive study pack with a quiz AND a math problem.".to_string(),
        "Requirements:".to_string(),
        "- Summary: EXACTLY 3 detailed bullets explaining key concepts, not bare definitions"
            .to_string(),
    ];
    lines.extend(quiz_requirements(topic));
    lines.push(format!(
        "- Math: ONE {problem_kind} with freshly chosen numbers"
    ));
    lines.push("  * Vary the values significantly on every request".to_string());
    lines.push(format!("  * {problem_hint}"));
    lines.push("  * Show the complete step-by-step solution".to_string());
    lines.push(format!("- StudyTip: ONE specific technique for mastering {topic}"));
    lines.push(format!(
        "- FunFact: ONE surprising or counterintuitive fact about {topic}"
    ));
    lines
}
