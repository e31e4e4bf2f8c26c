//! Rule to keep slash opacity modifiers on the shipped tiers.
//!
//! # Rationale
//!
//! The theme ships four opacity tiers: 20, 40, 60 and 80. Other values
//! (`bg-primary/50`) are rounded with a hand-curated table: 10 goes up to
//! 20, 50 goes up to 60, and 90/95 collapse to 80. `/100` is the same as no
//! modifier and suggests dropping it.
//!
//! Font-size shorthands with a line height (`text-sm/6`) are not opacity
//! modifiers and are skipped.
//!
//! # Suppression
//!
//! - `// design-lint: allow(opacity-tier)` comment

use crate::patterns::{tier_for, Tier, COLOR_PREFIXES, OPACITY_TIERS};
use design_lint_core::{PatternRule, Severity, SuggestionStrategy};
use std::sync::LazyLock;

/// Rule code for opacity-tier.
pub const CODE: &str = "DS031";

/// Rule name for opacity-tier.
pub const NAME: &str = "opacity-tier";

static RULE: LazyLock<PatternRule> = LazyLock::new(|| {
    let pattern = format!(r"\b(?:{COLOR_PREFIXES})-[a-z]+(?:-[a-z]+)*(?:-\d{{2,3}})?/\d{{1,3}}\b");
    let shipped: Vec<String> = OPACITY_TIERS.iter().map(ToString::to_string).collect();
    PatternRule::builder(CODE, NAME, "opacity-syntax")
        .pattern(pattern)
        .exclusion(format!(
            r"/(?:{})$|^text-(?:xs|sm|base|lg|xl|[2-9]xl)/\d+$",
            shipped.join("|")
        ))
        .description("Opacity modifier outside the available tiers (20, 40, 60, 80)")
        .severity(Severity::Warning)
        .suggestion(SuggestionStrategy::Derive(nearest_tier))
        .build()
        .unwrap_or_else(|e| unreachable!("built-in rule {NAME}: {e}"))
});

/// Returns the opacity-tier rule.
#[must_use]
pub fn opacity_tier() -> PatternRule {
    RULE.clone()
}

fn nearest_tier(matched: &str) -> Option<String> {
    let (base, value) = matched.rsplit_once('/')?;
    let suggestion = match tier_for(value)? {
        Tier::Level(tier) => format!("{base}/{tier}"),
        Tier::Opaque => base.to_string(),
        Tier::Transparent => {
            let prefix = base.split('-').next()?;
            format!("{prefix}-transparent")
        }
    };
    Some(suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_lint_core::scan;
    use std::path::Path;

    fn run(content: &str) -> Vec<(String, String)> {
        scan(&[opacity_tier()], Path::new("a.tsx"), content)
            .into_iter()
            .map(|v| (v.matched_text, v.suggestion.unwrap_or_default()))
            .collect()
    }

    #[test]
    fn font_size_line_height_shorthand_is_skipped() {
        assert!(run(r#"<p className="text-sm/6 text-base/7 text-xs/4 text-lg/8">"#).is_empty());
        assert_eq!(run("text-sm/6 text-primary/50").len(), 1);
    }

    #[test]
    fn rounds_with_literal_table() {
        let found = run("bg-primary/10 text-muted-foreground/50 border-border/90 ring-ring/95");
        assert_eq!(
            found,
            vec![
                ("bg-primary/10".into(), "bg-primary/20".into()),
                ("text-muted-foreground/50".into(), "text-muted-foreground/60".into()),
                ("border-border/90".into(), "border-border/80".into()),
                ("ring-ring/95".into(), "ring-ring/80".into()),
            ]
        );
    }

    #[test]
    fn full_opacity_drops_modifier() {
        assert_eq!(run("bg-primary/100"), vec![("bg-primary/100".into(), "bg-primary".into())]);
    }

    #[test]
    fn zero_opacity_becomes_transparent() {
        assert_eq!(run("bg-card/0")[0].1, "bg-transparent");
    }

    #[test]
    fn shipped_tiers_pass() {
        assert!(run("bg-primary/20 text-foreground/40 border-input/60 bg-muted/80").is_empty());
    }

    #[test]
    fn palette_colors_with_modifier_are_checked_too() {
        assert_eq!(run("bg-red-500/75")[0].1, "bg-red-500/80");
    }
}
