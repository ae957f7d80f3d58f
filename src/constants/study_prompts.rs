pub const STUDY_ASSISTANT_SYSTEM_PROMPT: &str = "You are a helpful study assistant. Reply with a single valid JSON value only. Do not use markdown or code blocks.";

pub const MATH_TUTOR_SYSTEM_PROMPT: &str = "You are a helpful math tutor. Reply with a single valid JSON value only. Do not use markdown or code blocks.";

pub const NORMAL_TEMPERATURE: f32 = 0.4;
pub const MATH_TEMPERATURE: f32 = 0.3;

/// Maximum number of extract characters embedded in a prompt.
pub const MAX_CONTEXT_CHARS: usize = 1200;

/// Topics matching this pattern get a formula problem instead of a word problem.
pub const MATH_TOPIC_PATTERN: &str = r"(?i)math|calculus|algebra|geometry|trigonometry|statistics|probability|equation|theorem|formula|arithmetic";

pub const NORMAL_RESPONSE_SHAPE: &str = r#"{ "summary": ["explanatory bullet 1", "explanatory bullet 2", "explanatory bullet 3"], "quiz": [{"q": "Why does [mechanism A] produce [effect B] rather than [alternative C]?", "options": ["Reasoning 1", "Reasoning 2", "Reasoning 3", "Reasoning 4"], "answer": "Reasoning 1"}, {"q": "If [specific condition] occurred, which outcome would come FIRST?", "options": ["Consequence A", "Consequence B", "Consequence C", "Consequence D"], "answer": "Consequence B"}, {"q": "In [complex scenario], which factor has the GREATEST impact?", "options": ["Factor A and why", "Factor B and why", "Factor C and why", "Factor D and why"], "answer": "Factor A and why"}], "studyTip": "...", "funFact": "..." }"#;

pub const MATH_RESPONSE_SHAPE: &str = r#"{ "summary": ["explanatory bullet 1", "explanatory bullet 2", "explanatory bullet 3"], "quiz": [{"q": "Why would [scenario X] lead to [outcome Y] rather than [outcome Z]?", "options": ["Plausible A", "Plausible B", "Plausible C", "Plausible D"], "answer": "Plausible A"}, {"q": "If [condition] changed, what is the FIRST consequence?", "options": ["Option 1", "Option 2", "Option 3", "Option 4"], "answer": "Option 2"}, {"q": "Which factor matters MOST in [complex situation]?", "options": ["Option A and why", "Option B and why", "Option C and why", "Option D and why"], "answer": "Option A and why"}], "math": {"question": "...", "answer": "...", "explanation": "..."}, "studyTip": "...", "funFact": "..." }"#;
