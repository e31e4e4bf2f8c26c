//! Rule to forbid colors on single border sides.
//!
//! # Rationale
//!
//! Side borders use the dedicated `border-{side}-default` utilities so that
//! divider colors stay consistent across themes.
//!
//! # Detected Patterns
//!
//! - `border-{t,b,l,r,x,y,top,bottom,left,right}-{color}` such as
//!   `border-t-gray-200` or `border-b-border`
//!
//! # Allowed Patterns
//!
//! - `border-{top,bottom,left,right}-default`
//! - `transparent`, `current` and `inherit` side colors
//! - CSS longhand properties such as `border-bottom-width` or
//!   `border-top-left-radius`
//!
//! # Suppression
//!
//! - `// design-lint: allow(directional-border-color)` comment

use design_lint_core::{PatternRule, Severity, SuggestionStrategy};
use std::sync::LazyLock;

/// Rule code for directional-border-color.
pub const CODE: &str = "DS003";

/// Rule name for directional-border-color.
pub const NAME: &str = "directional-border-color";

static RULE: LazyLock<PatternRule> = LazyLock::new(|| {
    PatternRule::builder(CODE, NAME, "hardcoded-color")
        .pattern(r"\bborder-(?:top|bottom|left|right|t|b|l|r|x|y)-[a-z]+(?:-[a-z]+)*(?:-\d{2,3})?\b")
        .exclusion(concat!(
            r"^border-(?:top|bottom|left|right)-default$",
            r"|^border-(?:top|bottom|left|right|t|b|l|r|x|y)-(?:transparent|current|inherit)$",
            r"|^border-(?:top|bottom|left|right)(?:-(?:left|right))?-(?:width|style|color|radius)$",
        ))
        .description("Colored side border; use the border-{side}-default utility")
        .severity(Severity::Warning)
        .suggestion(SuggestionStrategy::Derive(side_default))
        .build()
        .unwrap_or_else(|e| unreachable!("built-in rule {NAME}: {e}"))
});

/// Returns the directional-border-color rule.
#[must_use]
pub fn directional_border_color() -> PatternRule {
    RULE.clone()
}

/// `border-t-gray-200` → `border-top-default`; axis shorthands expand to
/// both sides.
fn side_default(matched: &str) -> Option<String> {
    let side = matched.strip_prefix("border-")?.split('-').next()?;
    let sides: &[&str] = match side {
        "t" | "top" => &["top"],
        "b" | "bottom" => &["bottom"],
        "l" | "left" => &["left"],
        "r" | "right" => &["right"],
        "x" => &["left", "right"],
        "y" => &["top", "bottom"],
        _ => return None,
    };
    Some(
        sides
            .iter()
            .map(|s| format!("border-{s}-default"))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_lint_core::scan;
    use std::path::Path;

    fn run(content: &str) -> Vec<(String, String)> {
        scan(&[directional_border_color()], Path::new("a.tsx"), content)
            .into_iter()
            .map(|v| (v.matched_text, v.suggestion.unwrap_or_default()))
            .collect()
    }

    #[test]
    fn default_side_utilities_are_excluded() {
        assert!(run(r#"<hr className="border-top-default" />"#).is_empty());
        assert!(run("border-bottom-default border-left-default border-right-default").is_empty());
    }

    #[test]
    fn keyword_colors_are_excluded() {
        assert!(run("border-t-transparent border-x-current border-b-inherit").is_empty());
    }

    #[test]
    fn widths_are_not_colors() {
        assert!(run("border-t-2 border-b-0 border-x-4").is_empty());
    }

    #[test]
    fn css_longhand_properties_are_not_utilities() {
        let css = ".card {\n  border-bottom-width: 1px;\n  border-top-left-radius: 4px;\n  border-left-style: solid;\n  border-right-color: var(--border);\n}\n";
        let found = scan(&[directional_border_color()], Path::new("card.css"), css);
        assert!(found.is_empty(), "unexpected: {found:?}");
    }

    #[test]
    fn colored_sides_get_side_defaults() {
        let found = run(r#"<div className="border-t-gray-200 border-y-border border-right-red-500">"#);
        assert_eq!(
            found,
            vec![
                ("border-t-gray-200".into(), "border-top-default".into()),
                ("border-y-border".into(), "border-top-default border-bottom-default".into()),
                ("border-right-red-500".into(), "border-right-default".into()),
            ]
        );
    }

    #[test]
    fn excluded_idiom_beside_violation() {
        let found = run("border-top-default border-b-gray-100");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "border-b-gray-100");
    }
}
