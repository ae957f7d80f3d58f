//! Recovers a JSON value from free text produced by a generative model.
//!
//! Strategies run in order and stop at the first success:
//! 1. strip one enclosing code fence (optionally tagged `json`),
//! 2. parse the remaining text directly,
//! 3. parse the first balanced `{...}` span, then the first balanced `[...]` span.
//!
//! When nothing parses the result is an empty object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)^```(?:json)?\s*(.*?)\s*```$").expect("CODE_FENCE is a valid regex")
});

pub fn parse_model_output(raw: &str) -> Value {
    let cleaned = strip_code_fence(raw.trim());

    try_parse(cleaned)
        .or_else(|| extract_balanced(cleaned, b'{', b'}'))
        .or_else(|| extract_balanced(cleaned, b'[', b']'))
        .unwrap_or_else(|| Value::Object(Map::new()))
}

fn strip_code_fence(text: &str) -> &str {
    CODE_FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or(text)
}

fn try_parse(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

/// Parses the shortest span starting at the first `open` byte whose bracket
/// depth returns to zero. Brackets inside string literals are not counted.
fn extract_balanced(text: &str, open: u8, close: u8) -> Option<Value> {
    let start = text.bytes().position(|b| b == open)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.bytes().skip(start).enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b if b == open => depth += 1,
            b if b == close => {
                depth -= 1;
                if depth == 0 {
                    return try_parse(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_json_parses_unchanged() {
        for value in [
            json!({"summary": ["a", "b"], "quiz": [], "nested": {"x": [1, 2, {"y": null}]}}),
            json!([1, "two", {"three": 3}]),
            json!("just a string"),
            json!(42),
            json!(null),
            json!({"n": 985.6906946328695, "tiny": 1.0715660391465826e-75}),
            json!([0.1, 2.5e300, -123.456789012345, 1e-7]),
        ] {
            let text = serde_json::to_string(&value).unwrap();
            assert_eq!(parse_model_output(&text), value);
        }
    }

    #[test]
    fn strips_json_code_fence() {
        assert_eq!(parse_model_output("```json\n{\"a\":1}\n```"), json!({"a": 1}));
        assert_eq!(parse_model_output("  ```\n[1,2]\n```  "), json!([1, 2]));
        assert_eq!(parse_model_output("```JSON {\"a\":1} ```"), json!({"a": 1}));
    }

    #[test]
    fn recovers_object_followed_by_prose() {
        assert_eq!(
            parse_model_output("{\"a\":1} — hope that helps!"),
            json!({"a": 1})
        );
    }

    #[test]
    fn recovers_object_surrounded_by_prose() {
        let raw = "Sure! Here is your study pack:\n{\"summary\": [\"s1\"]}\nLet me know.";
        assert_eq!(parse_model_output(raw), json!({"summary": ["s1"]}));
    }

    #[test]
    fn fenced_block_inside_prose_is_found_by_scan() {
        let raw = "Here you go:\n```json\n{\"a\": 2}\n```\nEnjoy";
        assert_eq!(parse_model_output(raw), json!({"a": 2}));
    }

    #[test]
    fn object_is_preferred_over_array() {
        let raw = "list [1, 2] then object {\"a\": 1} end";
        assert_eq!(parse_model_output(raw), json!({"a": 1}));
    }

    #[test]
    fn array_is_used_when_no_object_parses() {
        assert_eq!(parse_model_output("values: [1, 2, 3]."), json!([1, 2, 3]));
    }

    #[test]
    fn first_balanced_span_wins_over_later_ones() {
        let raw = "{\"first\": true} and {\"second\": true}";
        assert_eq!(parse_model_output(raw), json!({"first": true}));
    }

    #[test]
    fn brackets_inside_strings_do_not_end_the_span() {
        let raw = "note: {\"q\": \"what is } or {?\", \"esc\": \"a \\\" }\"} trailing";
        assert_eq!(
            parse_model_output(raw),
            json!({"q": "what is } or {?", "esc": "a \" }"})
        );
    }

    #[test]
    fn truncated_object_falls_back_to_first_complete_array() {
        let raw = "{\"summary\": [\"s1\", \"s2\"], \"quiz\": [{\"q\": \"Q1\"";
        assert_eq!(parse_model_output(raw), json!(["s1", "s2"]));
    }

    #[test]
    fn truncated_output_without_arrays_yields_empty_object() {
        assert_eq!(parse_model_output("{\"studyTip\": \"Revi"), json!({}));
    }

    #[test]
    fn garbage_yields_empty_object() {
        assert_eq!(parse_model_output(""), json!({}));
        assert_eq!(parse_model_output("no json here"), json!({}));
        assert_eq!(parse_model_output("{not: valid}"), json!({}));
    }
}
