//! TOML deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization.
//! They are converted to [`PatternRule`](crate::rule::PatternRule)s by the
//! loader.

use serde::Deserialize;

/// Raw TOML representation of user-defined pattern rules.
///
/// Extends the base `Config` with `[[pattern-rules]]` sections; every other
/// key of the file is ignored here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatternRulesDto {
    /// Pattern rule definitions, in file order.
    #[serde(rename = "pattern-rules", default)]
    pub pattern_rules: Vec<PatternRuleDto>,
}

/// TOML representation of one pattern rule.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternRuleDto {
    /// Rule name (e.g., "no-important").
    pub name: String,
    /// Rule code (e.g., "DSX001").
    pub code: String,
    /// Category tag.
    pub category: String,
    /// Violation regex.
    pub pattern: String,
    /// Exclusion regex.
    #[serde(default)]
    pub exclude: Option<String>,
    /// Violation message.
    #[serde(default)]
    pub message: Option<String>,
    /// Fixed suggestion text; the category fallback is used when absent.
    #[serde(default)]
    pub suggestion: Option<String>,
    /// Severity (default: "error").
    #[serde(default = "default_severity_str")]
    pub severity: String,
}

fn default_severity_str() -> String {
    "error".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty() {
        let dto: PatternRulesDto = toml::from_str("").unwrap();
        assert!(dto.pattern_rules.is_empty());
    }

    #[test]
    fn deserialize_ignores_other_sections() {
        let toml_str = r#"
preset = "minimal"

[analyzer]
root = "."

[[pattern-rules]]
name = "no-important"
code = "DSX001"
category = "important-modifier"
pattern = "!\\w+-\\w+"
exclude = "!important-ok"
message = "Avoid the important modifier."
suggestion = "Increase specificity via a variant instead."
severity = "warning"

[[pattern-rules]]
name = "no-z-index"
code = "DSX002"
category = "layering"
pattern = "z-\\[\\d+\\]"
"#;
        let dto: PatternRulesDto = toml::from_str(toml_str).unwrap();
        assert_eq!(dto.pattern_rules.len(), 2);
        assert_eq!(dto.pattern_rules[0].exclude.as_deref(), Some("!important-ok"));
        assert_eq!(dto.pattern_rules[0].severity, "warning");
        assert_eq!(dto.pattern_rules[1].severity, "error");
        assert!(dto.pattern_rules[1].suggestion.is_none());
    }
}
