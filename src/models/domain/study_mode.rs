use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyMode {
    #[default]
    Normal,
    Math,
}

impl StudyMode {
    /// Anything other than the exact string `"math"` selects normal mode.
    pub fn from_raw(raw: Option<&serde_json::Value>) -> Self {
        match raw.and_then(|v| v.as_str()) {
            Some("math") => StudyMode::Math,
            _ => StudyMode::Normal,
        }
    }

    pub fn is_math(self) -> bool {
        self == StudyMode::Math
    }
}

impl std::fmt::Display for StudyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudyMode::Normal => write!(f, "normal"),
            StudyMode::Math => write!(f, "math"),
        }
    }
}
