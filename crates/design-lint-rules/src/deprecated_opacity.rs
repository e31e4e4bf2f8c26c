//! Rule to forbid the legacy `*-opacity-N` utilities.
//!
//! `bg-opacity-50` and friends are replaced by the slash modifier on the
//! color itself. The suggested tier comes from the rounding table shared
//! with [`opacity-tier`](crate::opacity_tier), so `bg-opacity-50` suggests
//! `bg-<color>/60`.
//!
//! Suppress with `// design-lint: allow(deprecated-opacity)`.

use crate::patterns::{tier_for, Tier};
use design_lint_core::{PatternRule, Severity, SuggestionStrategy};
use std::sync::LazyLock;

/// Rule code for deprecated-opacity.
pub const CODE: &str = "DS030";

/// Rule name for deprecated-opacity.
pub const NAME: &str = "deprecated-opacity";

static RULE: LazyLock<PatternRule> = LazyLock::new(|| {
    PatternRule::builder(CODE, NAME, "opacity-syntax")
        .pattern(r"\b(?:bg|text|border|ring|divide|placeholder)-opacity-\d{1,3}\b")
        .description("Deprecated opacity utility; use the slash opacity modifier")
        .severity(Severity::Warning)
        .suggestion(SuggestionStrategy::Derive(slash_modifier))
        .build()
        .unwrap_or_else(|e| unreachable!("built-in rule {NAME}: {e}"))
});

/// Returns the deprecated-opacity rule.
#[must_use]
pub fn deprecated_opacity() -> PatternRule {
    RULE.clone()
}

fn slash_modifier(matched: &str) -> Option<String> {
    let (prefix, value) = matched.split_once("-opacity-")?;
    let suggestion = match tier_for(value)? {
        Tier::Level(tier) => format!("{prefix}-<color>/{tier}"),
        Tier::Opaque => format!("{prefix}-<color>"),
        Tier::Transparent => format!("{prefix}-transparent"),
    };
    Some(suggestion)
}
