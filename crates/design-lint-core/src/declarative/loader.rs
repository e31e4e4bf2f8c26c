//! DTO → `PatternRule` conversion with validation.

use crate::rule::{PatternRule, RuleError};
use crate::suggest::SuggestionStrategy;
use crate::types::Severity;
use std::collections::HashSet;

use super::config_dto::{PatternRuleDto, PatternRulesDto};

/// Errors during DTO → rule conversion.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A required field is empty.
    #[error("{context}: `{field}` must not be empty")]
    EmptyField {
        /// Where the error occurred (e.g., "pattern-rules[0]").
        context: String,
        /// The empty field.
        field: &'static str,
    },

    /// A rule name is not kebab-case.
    #[error("{context}: invalid rule name `{name}`, expected kebab-case")]
    InvalidName {
        /// Where the error occurred.
        context: String,
        /// The rejected name.
        name: String,
    },

    /// Two rules share a name.
    #[error("duplicate pattern rule name `{name}`")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// Unknown severity string.
    #[error("{context}: unknown severity `{value}`, expected: error, warning, info")]
    UnknownSeverity {
        /// Where the error occurred.
        context: String,
        /// The invalid value.
        value: String,
    },

    /// A pattern failed to compile.
    #[error("{context}: {source}")]
    Rule {
        /// Where the error occurred.
        context: String,
        /// The underlying rule error.
        source: RuleError,
    },
}

/// Converts a `PatternRulesDto` to validated rules, in file order.
///
/// # Errors
///
/// Returns the first error encountered during conversion.
pub fn load(dto: PatternRulesDto) -> Result<Vec<PatternRule>, LoadError> {
    let mut seen = HashSet::new();
    let mut rules = Vec::with_capacity(dto.pattern_rules.len());

    for (i, rule) in dto.pattern_rules.into_iter().enumerate() {
        if !seen.insert(rule.name.clone()) {
            return Err(LoadError::DuplicateName { name: rule.name });
        }
        rules.push(convert_rule(rule, i)?);
    }

    Ok(rules)
}

fn convert_rule(dto: PatternRuleDto, index: usize) -> Result<PatternRule, LoadError> {
    let ctx = format!("pattern-rules[{index}]");

    for (field, value) in [
        ("name", &dto.name),
        ("code", &dto.code),
        ("category", &dto.category),
        ("pattern", &dto.pattern),
    ] {
        if value.trim().is_empty() {
            return Err(LoadError::EmptyField {
                context: ctx,
                field,
            });
        }
    }
    if !is_kebab_case(&dto.name) {
        return Err(LoadError::InvalidName {
            context: ctx,
            name: dto.name,
        });
    }

    let ctx = format!("pattern-rule '{}'", dto.name);
    let severity = parse_severity(&dto.severity, &ctx)?;

    let mut builder = PatternRule::builder(dto.code, dto.name, dto.category)
        .pattern(dto.pattern)
        .severity(severity)
        .description(
            dto.message
                .unwrap_or_else(|| "Matches a disallowed pattern".to_string()),
        );
    if let Some(exclude) = dto.exclude {
        builder = builder.exclusion(exclude);
    }
    if let Some(text) = dto.suggestion {
        builder = builder.suggestion(SuggestionStrategy::Fixed(text));
    }

    builder
        .build()
        .map_err(|source| LoadError::Rule { context: ctx, source })
}

fn is_kebab_case(name: &str) -> bool {
    !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn parse_severity(value: &str, context: &str) -> Result<Severity, LoadError> {
    value.parse().map_err(|_| LoadError::UnknownSeverity {
        context: context.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn parse_and_load(toml_str: &str) -> Result<Vec<PatternRule>, LoadError> {
        let dto: PatternRulesDto = toml::from_str(toml_str).unwrap();
        load(dto)
    }

    // -- Happy path --

    #[test]
    fn load_empty_config() {
        assert!(parse_and_load("").unwrap().is_empty());
    }

    #[test]
    fn load_full_rule() {
        let rules = parse_and_load(
            r#"
[[pattern-rules]]
name = "no-important"
code = "DSX001"
category = "important-modifier"
pattern = "!\\w+-\\w+"
exclude = "!important-ok"
message = "Avoid the important modifier."
suggestion = "Use a variant instead."
severity = "warning"
"#,
        )
        .unwrap();

        let rule = &rules[0];
        assert_eq!(rule.name(), "no-important");
        assert_eq!(rule.code(), "DSX001");
        assert_eq!(rule.default_severity(), Severity::Warning);
        assert_eq!(rule.description(), "Avoid the important modifier.");
        assert!(rule.is_excluded("!important-ok"));
        assert_eq!(rule.suggest("!mt-4"), "Use a variant instead.");
    }

    #[test]
    fn missing_suggestion_uses_category_fallback() {
        let rules = parse_and_load(
            r##"
[[pattern-rules]]
name = "no-hex"
code = "DSX002"
category = "hardcoded-color"
pattern = "#[0-9a-f]{6}"
"##,
        )
        .unwrap();
        assert_eq!(
            rules[0].suggest("#ff0000"),
            crate::suggest::category_fallback("hardcoded-color")
        );
    }

    // -- Error cases --

    #[test]
    fn load_rejects_invalid_regex() {
        let result = parse_and_load(
            r#"
[[pattern-rules]]
name = "broken"
code = "X"
category = "c"
pattern = "(unclosed"
"#,
        );
        assert!(matches!(result, Err(LoadError::Rule { .. })));
    }

    #[test]
    fn load_rejects_unknown_severity() {
        let result = parse_and_load(
            r#"
[[pattern-rules]]
name = "bad"
code = "X"
category = "c"
pattern = "x"
severity = "critical"
"#,
        );
        assert!(matches!(result, Err(LoadError::UnknownSeverity { .. })));
    }

    #[test]
    fn load_rejects_empty_pattern() {
        let result = parse_and_load(
            r#"
[[pattern-rules]]
name = "empty"
code = "X"
category = "c"
pattern = ""
"#,
        );
        assert!(matches!(
            result,
            Err(LoadError::EmptyField { field: "pattern", .. })
        ));
    }

    #[test]
    fn load_rejects_non_kebab_name() {
        let result = parse_and_load(
            r#"
[[pattern-rules]]
name = "No_Important"
code = "X"
category = "c"
pattern = "x"
"#,
        );
        assert!(matches!(result, Err(LoadError::InvalidName { .. })));
    }

    #[test]
    fn load_rejects_duplicate_names() {
        let result = parse_and_load(
            r#"
[[pattern-rules]]
name = "same"
code = "X1"
category = "c"
pattern = "x"

[[pattern-rules]]
name = "same"
code = "X2"
category = "c"
pattern = "y"
"#,
        );
        assert!(matches!(result, Err(LoadError::DuplicateName { .. })));
    }
}
