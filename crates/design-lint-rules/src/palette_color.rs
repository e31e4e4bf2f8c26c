//! Rule to forbid raw palette color utilities.
//!
//! # Rationale
//!
//! Palette classes such as `bg-red-500` bypass the theme: they do not follow
//! dark mode and drift from the brand palette. Color-role tokens
//! (`bg-destructive`, `text-muted-foreground`, ...) should be used instead.
//!
//! # Detected Patterns
//!
//! - `{bg,text,border,ring,...}-{palette}-{50..950}`
//! - `{bg,text,border,ring,...}-{black,white}`
//!
//! # Suppression
//!
//! - `// design-lint: allow(palette-color)` comment

use crate::patterns::{COLOR_PREFIXES, PALETTE, SHADES};
use design_lint_core::{PatternRule, Severity, SuggestionStrategy, SuggestionTable};
use std::sync::{Arc, LazyLock};

/// Rule code for palette-color.
pub const CODE: &str = "DS001";

/// Rule name for palette-color.
pub const NAME: &str = "palette-color";

static SUGGESTIONS: LazyLock<Arc<SuggestionTable>> = LazyLock::new(|| {
    Arc::new(
        SuggestionTable::new()
            .exact([
                ("bg-white", "bg-background"),
                ("bg-black", "bg-foreground"),
                ("text-white", "text-primary-foreground"),
                ("text-black", "text-foreground"),
                ("bg-gray-50", "bg-muted"),
                ("bg-gray-100", "bg-muted"),
                ("bg-gray-200", "bg-muted"),
                ("text-gray-400", "text-muted-foreground"),
                ("text-gray-500", "text-muted-foreground"),
                ("text-gray-600", "text-muted-foreground"),
                ("text-gray-700", "text-foreground"),
                ("text-gray-900", "text-foreground"),
                ("border-gray-200", "border-border"),
                ("border-gray-300", "border-input"),
                ("bg-red-500", "bg-destructive"),
                ("bg-red-600", "bg-destructive"),
                ("text-red-500", "text-destructive"),
                ("text-red-600", "text-destructive"),
                ("border-red-500", "border-destructive"),
                ("bg-blue-500", "bg-primary"),
                ("bg-blue-600", "bg-primary"),
                ("text-blue-500", "text-primary"),
                ("text-blue-600", "text-primary"),
                ("ring-blue-500", "ring-ring"),
                ("bg-green-500", "bg-success"),
                ("text-green-600", "text-success"),
                ("bg-yellow-500", "bg-warning"),
                ("text-yellow-600", "text-warning"),
            ])
            .fallback(
                "hardcoded-color",
                "Replace the palette color with a color-role token (e.g. bg-primary, text-muted-foreground, border-border)",
            ),
    )
});

static RULE: LazyLock<PatternRule> = LazyLock::new(|| {
    let pattern = format!(
        r"\b(?:{COLOR_PREFIXES})-(?:(?:{PALETTE})-(?:{SHADES})|black|white)\b"
    );
    PatternRule::builder(CODE, NAME, "hardcoded-color")
        .pattern(pattern)
        .description("Hardcoded palette color; use a color-role token")
        .severity(Severity::Error)
        .suggestion(SuggestionStrategy::Lookup(Arc::clone(&SUGGESTIONS)))
        .build()
        .unwrap_or_else(|e| unreachable!("built-in rule {NAME}: {e}"))
});

/// Returns the palette-color rule.
#[must_use]
pub fn palette_color() -> PatternRule {
    RULE.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_lint_core::scan;
    use std::path::Path;

    fn matches(content: &str) -> Vec<(String, Option<String>)> {
        scan(&[palette_color()], Path::new("App.tsx"), content)
            .into_iter()
            .map(|v| (v.matched_text, v.suggestion))
            .collect()
    }

    #[test]
    fn flags_palette_classes_with_role_suggestions() {
        let found = matches(r#"<div className="bg-white text-gray-500 hover:bg-red-600">"#);
        assert_eq!(
            found,
            vec![
                ("bg-white".into(), Some("bg-background".into())),
                ("text-gray-500".into(), Some("text-muted-foreground".into())),
                ("bg-red-600".into(), Some("bg-destructive".into())),
            ]
        );
    }

    #[test]
    fn unmapped_palette_class_gets_fallback() {
        let found = matches(r#"<p className="text-fuchsia-300">"#);
        assert_eq!(found.len(), 1);
        assert!(found[0].1.as_deref().is_some_and(|s| s.contains("color-role token")));
    }

    #[test]
    fn role_tokens_and_lookalikes_pass() {
        assert!(matches(r#"<div className="bg-background text-muted-foreground border-border">"#).is_empty());
        assert!(matches(r#"<div className="bg-red-5000 text-whitesmoke">"#).is_empty());
    }

    #[test]
    fn opacity_modifier_still_flags_base_color() {
        let found = matches(r#"<div className="bg-black/40">"#);
        assert_eq!(found[0].0, "bg-black");
    }
}
