//! Tolerant parsing of completion backend output.
//!
//! Backends are instructed to answer either with labeled sections or with a
//! single JSON object, but real responses arrive wrapped in prose, with
//! reordered sections, markdown emphasis, or missing fields. Parsing here
//! never fails: anything unreadable degrades to an absent field, and
//! [`finalize`] fills absent fields from policy defaults.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::config::AnalysisConfig;
use crate::types::{truncate_chars, AnalysisResult, Importance, MAX_SUMMARY_CHARS};

/// Fields recovered from a backend response. Absence is a value here, not
/// an error - defaulting happens in [`finalize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFields {
    pub summary: Option<String>,
    pub key_points: Vec<String>,
    pub suggested_actions: Vec<String>,
    pub importance: Option<Importance>,
    pub readability_score: Option<f64>,
}

impl ParsedFields {
    /// True when nothing at all was recovered.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.key_points.is_empty()
            && self.suggested_actions.is_empty()
            && self.importance.is_none()
            && self.readability_score.is_none()
    }
}

/// Parse a backend response into fields.
///
/// Tries an embedded JSON object first, then labeled sections. Surrounding
/// prose is ignored in both modes.
pub fn parse_response(response: &str) -> ParsedFields {
    if let Some(object) = first_json_object(response) {
        if let Ok(value) = serde_json::from_str::<Value>(object) {
            let fields = from_json(&value);
            if !fields.is_empty() {
                return fields;
            }
        }
    }
    from_labeled_sections(response)
}

/// Fill absent fields with policy defaults and enforce the result contract.
pub fn finalize(fields: ParsedFields, category: &str, config: &AnalysisConfig) -> AnalysisResult {
    let summary = match fields.summary {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => config.summary_for(category),
    };

    let key_points = if fields.key_points.is_empty() {
        config.default_key_points.clone()
    } else {
        fields.key_points
    };

    let suggested_actions = if fields.suggested_actions.is_empty() {
        config.actions_for(category)
    } else {
        fields.suggested_actions
    };

    AnalysisResult {
        summary: truncate_chars(&summary, MAX_SUMMARY_CHARS),
        key_points,
        suggested_actions,
        importance: fields.importance.unwrap_or_default(),
        readability_score: fields.readability_score.unwrap_or(config.default_readability),
    }
    .clamped()
}

/// Locate the first balanced `{...}` substring, skipping braces inside
/// string literals.
fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

fn from_json(value: &Value) -> ParsedFields {
    ParsedFields {
        summary: value
            .get("summary")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
        key_points: string_list(value.get("key_points")),
        suggested_actions: string_list(value.get("suggested_actions")),
        importance: value
            .get("importance")
            .and_then(Value::as_str)
            .and_then(Importance::parse),
        readability_score: number_value(value.get("readability_score")),
    }
}

/// Read a JSON value as a list of non-empty strings; a bare string becomes a
/// single-element list.
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

/// Read a JSON value as a number, accepting numeric strings.
fn number_value(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Label matcher: known section names with optional `**` emphasis, tolerant
/// of `_` vs space and of casing.
static LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\*{0,2}(SUMMARY|KEY[_ ]?POINTS|SUGGESTED[_ ]?ACTIONS|IMPORTANCE|READABILITY[_ ]?SCORE)\*{0,2}\s*:",
    )
    .expect("label regex is valid")
});

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-?\d+(?:\.\d+)?").expect("number regex is valid")
});

fn from_labeled_sections(response: &str) -> ParsedFields {
    let mut fields = ParsedFields::default();

    let matches: Vec<(String, usize, usize)> = LABEL_RE
        .captures_iter(response)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = canonical_label(caps.get(1)?.as_str());
            Some((label, whole.start(), whole.end()))
        })
        .collect();

    for (i, (label, _, body_start)) in matches.iter().enumerate() {
        let body_end = matches
            .get(i + 1)
            .map(|(_, next_start, _)| *next_start)
            .unwrap_or(response.len());
        let body = response[*body_start..body_end].trim();

        match label.as_str() {
            "summary" => {
                if !body.is_empty() && fields.summary.is_none() {
                    fields.summary = Some(body.to_string());
                }
            }
            "key_points" => fields.key_points = list_items(body),
            "suggested_actions" => fields.suggested_actions = list_items(body),
            "importance" => {
                // Trailing prose after the tier name is common; read the
                // first line only.
                let cleaned = body.lines().next().unwrap_or("").trim_matches(|c: char| {
                    c.is_whitespace() || matches!(c, '.' | '*' | '"' | '\'')
                });
                fields.importance = Importance::parse(cleaned);
            }
            "readability_score" => {
                fields.readability_score = NUMBER_RE
                    .find(body)
                    .and_then(|m| m.as_str().parse().ok());
            }
            _ => {}
        }
    }

    fields
}

fn canonical_label(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_")
}

/// Extract bullet-prefixed lines (`-` or `*`). When a section has no
/// bullets at all, its non-empty lines are taken as items instead.
fn list_items(body: &str) -> Vec<String> {
    let bullets: Vec<String> = body
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
                .or_else(|| trimmed.strip_prefix('-').filter(|_| trimmed.len() > 1))
                .or_else(|| trimmed.strip_prefix('*').filter(|_| trimmed.len() > 1))
                .map(|item| item.trim().to_string())
        })
        .filter(|item| !item.is_empty())
        .collect();

    if !bullets.is_empty() {
        return bullets;
    }

    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    #[test]
    fn test_parses_plain_json_object() {
        let response = r#"{"summary": "A lease agreement.", "key_points": ["Term is one year", "Rent due monthly"], "suggested_actions": ["Review terms"], "importance": "high", "readability_score": 55}"#;
        let fields = parse_response(response);
        assert_eq!(fields.summary.as_deref(), Some("A lease agreement."));
        assert_eq!(fields.key_points.len(), 2);
        assert_eq!(fields.importance, Some(Importance::High));
        assert_eq!(fields.readability_score, Some(55.0));
    }

    #[test]
    fn test_parses_json_with_leading_prose() {
        let response = "Sure! Here is the analysis you asked for:\n\n{\"summary\": \"Short note.\", \"importance\": \"low\"}\n\nLet me know if you need more.";
        let fields = parse_response(response);
        assert_eq!(fields.summary.as_deref(), Some("Short note."));
        assert_eq!(fields.importance, Some(Importance::Low));
    }

    #[test]
    fn test_json_with_braces_inside_strings() {
        let response = r#"{"summary": "Uses {braces} inside.", "importance": "medium"}"#;
        let fields = parse_response(response);
        assert_eq!(fields.summary.as_deref(), Some("Uses {braces} inside."));
    }

    #[test]
    fn test_json_numeric_string_score() {
        let fields = parse_response(r#"{"summary": "s", "readability_score": "62.5"}"#);
        assert_eq!(fields.readability_score, Some(62.5));
    }

    #[test]
    fn test_malformed_json_falls_through_to_sections() {
        let response = "{\"summary\": broken}\nSUMMARY: Recovered from the labeled form.";
        let fields = parse_response(response);
        assert_eq!(
            fields.summary.as_deref(),
            Some("Recovered from the labeled form.")
        );
    }

    #[test]
    fn test_parses_labeled_sections_in_any_order() {
        let response = "IMPORTANCE: critical\nSUMMARY: An expired permit notice.\nKEY_POINTS:\n- Permit expired last month\n- Penalty accrues weekly\nREADABILITY_SCORE: 40\nSUGGESTED_ACTIONS:\n- Renew immediately";
        let fields = parse_response(response);
        assert_eq!(fields.summary.as_deref(), Some("An expired permit notice."));
        assert_eq!(fields.key_points.len(), 2);
        assert_eq!(fields.suggested_actions, vec!["Renew immediately"]);
        assert_eq!(fields.importance, Some(Importance::Critical));
        assert_eq!(fields.readability_score, Some(40.0));
    }

    #[test]
    fn test_labels_tolerate_case_emphasis_and_spacing() {
        let response = "**Summary**: Bolded label form.\nKey Points:\n* Starred bullet item\nimportance: High.";
        let fields = parse_response(response);
        assert_eq!(fields.summary.as_deref(), Some("Bolded label form."));
        assert_eq!(fields.key_points, vec!["Starred bullet item"]);
        assert_eq!(fields.importance, Some(Importance::High));
    }

    #[test]
    fn test_section_without_bullets_takes_lines() {
        let response = "KEY_POINTS:\nFirst point line\nSecond point line\nIMPORTANCE: low";
        let fields = parse_response(response);
        assert_eq!(fields.key_points, vec!["First point line", "Second point line"]);
    }

    #[test]
    fn test_unparsable_response_yields_empty_fields() {
        let fields = parse_response("I could not process this document at all, sorry.");
        assert!(fields.is_empty());
    }

    #[test]
    fn test_invalid_importance_is_absent() {
        let fields = parse_response(r#"{"summary": "s", "importance": "severe"}"#);
        assert_eq!(fields.importance, None);
    }

    #[test]
    fn test_finalize_fills_all_defaults() {
        // Only a summary survived parsing; everything else is defaulted.
        let fields = parse_response(r#"{"summary": "Only this field is present."}"#);
        let result = finalize(fields, "other", &config());

        assert_eq!(result.summary, "Only this field is present.");
        assert_eq!(result.key_points, config().default_key_points);
        assert_eq!(result.suggested_actions, config().actions_for("other"));
        assert_eq!(result.importance, Importance::Medium);
        assert_eq!(result.readability_score, 75.0);
    }

    #[test]
    fn test_finalize_uses_category_defaults() {
        let result = finalize(ParsedFields::default(), "license", &config());
        assert_eq!(result.summary, config().summary_for("license"));
        assert_eq!(result.suggested_actions, config().actions_for("license"));
    }

    #[test]
    fn test_finalize_clamps_score_and_truncates_lists() {
        let fields = ParsedFields {
            summary: Some("ok".to_string()),
            key_points: (0..9).map(|i| format!("p{}", i)).collect(),
            suggested_actions: (0..6).map(|i| format!("a{}", i)).collect(),
            importance: Some(Importance::Low),
            readability_score: Some(250.0),
        };
        let result = finalize(fields, "other", &config());
        assert_eq!(result.key_points.len(), 5);
        assert_eq!(result.suggested_actions.len(), 3);
        assert_eq!(result.readability_score, 100.0);
    }

    #[test]
    fn test_first_json_object_unterminated() {
        assert_eq!(first_json_object("{\"a\": 1"), None);
        assert_eq!(first_json_object("no braces"), None);
    }
}
