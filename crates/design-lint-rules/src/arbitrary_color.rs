//! Rule to forbid arbitrary color values in utility classes.
//!
//! Detects `bg-[#1a1a1a]`, `text-[rgb(0,0,0)]`, `border-[hsl(0 0% 90%)]` and
//! the other color prefixes with a bracketed literal color.
//!
//! Suppress with `// design-lint: allow(arbitrary-color)`.

use crate::patterns::COLOR_PREFIXES;
use design_lint_core::{PatternRule, Severity, SuggestionStrategy, SuggestionTable};
use std::sync::{Arc, LazyLock};

/// Rule code for arbitrary-color.
pub const CODE: &str = "DS002";

/// Rule name for arbitrary-color.
pub const NAME: &str = "arbitrary-color";

static RULE: LazyLock<PatternRule> = LazyLock::new(|| {
    let pattern = format!(
        r"\b(?:{COLOR_PREFIXES})-\[(?:#[0-9a-fA-F]{{3,8}}|(?:rgba?|hsla?)\([^\]\s]*(?:\s[^\]\s]*)*\))\]"
    );
    let table = SuggestionTable::new().fallback(
        "hardcoded-color",
        "Replace the arbitrary color with a color-role token, or add it to the theme",
    );
    PatternRule::builder(CODE, NAME, "hardcoded-color")
        .pattern(pattern)
        .description("Arbitrary color value; use a color-role token")
        .severity(Severity::Error)
        .suggestion(SuggestionStrategy::Lookup(Arc::new(table)))
        .build()
        .unwrap_or_else(|e| unreachable!("built-in rule {NAME}: {e}"))
});

/// Returns the arbitrary-color rule.
#[must_use]
pub fn arbitrary_color() -> PatternRule {
    RULE.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_lint_core::scan;
    use std::path::Path;

    fn matched(content: &str) -> Vec<String> {
        scan(&[arbitrary_color()], Path::new("a.tsx"), content)
            .into_iter()
            .map(|v| v.matched_text)
            .collect()
    }

    #[test]
    fn flags_hex_rgb_and_hsl() {
        let found = matched(
            r#"<div className="bg-[#1a1a1a] text-[rgb(0,0,0)] border-[hsl(0_0%_90%)] ring-[#fff]">"#,
        );
        assert_eq!(
            found,
            vec!["bg-[#1a1a1a]", "text-[rgb(0,0,0)]", "border-[hsl(0_0%_90%)]", "ring-[#fff]"]
        );
    }

    #[test]
    fn non_color_arbitrary_values_pass() {
        assert!(matched(r#"<div className="w-[320px] text-[14px] bg-[url(/a.png)]">"#).is_empty());
    }

    #[test]
    fn suggestion_is_table_fallback() {
        let v = scan(&[arbitrary_color()], Path::new("a.tsx"), "bg-[#000]");
        assert!(v[0]
            .suggestion
            .as_deref()
            .is_some_and(|s| s.starts_with("Replace the arbitrary color")));
    }
}
