//! Declarative pattern rules driven by TOML configuration.
//!
//! Projects can add their own checks without writing Rust rule code:
//!
//! ```text
//! TOML text
//!   ↓ serde (DTO layer)
//! config_dto types
//!   ↓ validate + compile
//! Vec<PatternRule>
//!   ↓ load_rules_from_toml()
//! Vec<RuleBox>
//! ```

pub mod config_dto;
pub mod loader;

/// Errors from parsing TOML and loading declarative rules.
#[derive(Debug, thiserror::Error)]
pub enum LoadRulesError {
    /// TOML deserialization failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Rule validation failed.
    #[error("{0}")]
    Load(#[from] loader::LoadError),
}

/// Parses TOML content and creates all `[[pattern-rules]]`.
///
/// Returns `Ok(vec![])` if no pattern rules are present.
///
/// # Errors
///
/// Returns an error if TOML parsing or rule validation fails.
pub fn load_rules_from_toml(content: &str) -> Result<Vec<crate::rule::RuleBox>, LoadRulesError> {
    let dto: config_dto::PatternRulesDto = toml::from_str(content)?;
    let rules = loader::load(dto)?;
    Ok(rules
        .into_iter()
        .map(|rule| Box::new(rule) as crate::rule::RuleBox)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FileContext;
    use std::path::Path;

    #[test]
    fn loads_and_checks() {
        let rules = load_rules_from_toml(
            r#"
[[pattern-rules]]
name = "no-z-index"
code = "DSX010"
category = "layering"
pattern = "z-\\[\\d+\\]"
suggestion = "z-overlay"
"#,
        )
        .unwrap();
        assert_eq!(rules.len(), 1);

        let ctx = FileContext::relative(Path::new("a.tsx"), "<div className=\"z-[999]\" />");
        let violations = rules[0].check(&ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].suggestion.as_deref(), Some("z-overlay"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let result = load_rules_from_toml("[[pattern-rules]\nname=");
        assert!(matches!(result, Err(LoadRulesError::Toml(_))));
    }
}
