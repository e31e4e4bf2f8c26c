//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! // design-lint: allow(palette-color) reason="brand gradient"
//! {/* design-lint: allow(semantic-element) */}
//! /* design-lint: allow(all) */
//! ```
//!
//! A directive applies to its own line and to the line after it.

use crate::context::LineIndex;
use std::collections::HashSet;

const DIRECTIVE_PREFIX: &str = "design-lint:";

/// Result of checking for an allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
struct AllowDirective {
    /// Rule names that are allowed.
    rules: HashSet<String>,
    /// Optional reason for the allowance.
    reason: Option<String>,
}

/// Checks whether `rule_name` is allowed on a 1-indexed `line`.
///
/// Looks at the line itself (trailing comment) and the line before it.
#[must_use]
pub fn check_allow_comment(lines: &LineIndex<'_>, line: usize, rule_name: &str) -> AllowCheck {
    for check_line in [line.saturating_sub(1), line] {
        let Some(text) = lines.line_text(check_line) else {
            continue;
        };
        if let Some(directive) = parse_allow_directive(text) {
            if directive.rules.contains(rule_name) || directive.rules.contains("all") {
                return AllowCheck::Allowed {
                    reason: directive.reason,
                };
            }
        }
    }

    AllowCheck::Denied
}

/// Parses an allowance directive from any comment on the line.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    line.match_indices("//")
        .chain(line.match_indices("/*"))
        .find_map(|(i, _)| parse_comment_body(&line[i + 2..]))
}

fn parse_comment_body(comment: &str) -> Option<AllowDirective> {
    let directive = comment
        .trim_start_matches('/')
        .trim()
        .strip_prefix(DIRECTIVE_PREFIX)?
        .trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules: HashSet<String> = allow_content[..paren_end]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = allow_content[paren_end + 1..].trim();
    let reason = rest
        .strip_prefix("reason=")
        .map(str::trim)
        .and_then(|r| r.strip_prefix('"'))
        .and_then(|r| r.find('"').map(|end| r[..end].to_string()));

    Some(AllowDirective { rules, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_line_comment() {
        let directive = parse_allow_directive("// design-lint: allow(palette-color)").unwrap();
        assert!(directive.rules.contains("palette-color"));
        assert!(directive.reason.is_none());
    }

    #[test]
    fn parses_jsx_block_comment() {
        let directive =
            parse_allow_directive("  {/* design-lint: allow(semantic-element) */}").unwrap();
        assert!(directive.rules.contains("semantic-element"));
    }

    #[test]
    fn parses_reason() {
        let directive = parse_allow_directive(
            "// design-lint: allow(inline-style) reason=\"computed by chart lib\"",
        )
        .unwrap();
        assert_eq!(directive.reason.as_deref(), Some("computed by chart lib"));
    }

    #[test]
    fn parses_multiple_rules() {
        let directive = parse_allow_directive("/* design-lint: allow(a, b, c) */").unwrap();
        assert_eq!(directive.rules.len(), 3);
    }

    #[test]
    fn ignores_urls_and_plain_comments() {
        assert!(parse_allow_directive("const u = \"https://example.com\";").is_none());
        assert!(parse_allow_directive("// just a note").is_none());
        assert!(parse_allow_directive("// design-lint: allow()").is_none());
    }

    #[test]
    fn url_before_directive_on_same_line() {
        let line = "<a href=\"https://x.dev\" /> {/* design-lint: allow(semantic-element) */}";
        assert!(parse_allow_directive(line).is_some());
    }

    #[test]
    fn directive_covers_same_and_next_line() {
        let content = "// design-lint: allow(palette-color)\nbg-white\nbg-white";
        let lines = LineIndex::new(content);
        assert!(check_allow_comment(&lines, 1, "palette-color").is_allowed());
        assert!(check_allow_comment(&lines, 2, "palette-color").is_allowed());
        assert!(!check_allow_comment(&lines, 3, "palette-color").is_allowed());
        assert!(!check_allow_comment(&lines, 2, "inline-style").is_allowed());
    }

    #[test]
    fn all_allows_every_rule() {
        let content = "x {/* design-lint: allow(all) reason=\"legacy\" */}";
        let lines = LineIndex::new(content);
        let check = check_allow_comment(&lines, 1, "anything");
        assert_eq!(check.reason(), Some("legacy"));
    }
}
