//! Rule to forbid raw interactive and structural markup.
//!
//! # Rationale
//!
//! Raw `<button>`, `<input>`, `<h1>` and friends skip the design-system
//! components that carry focus styles, sizing and typography. Each tag maps to
//! its component: `<button` suggests `<Button>`.
//!
//! # Allowed Patterns
//!
//! A markup-like match is not JSX when it is:
//!
//! - a generic type argument (`Array<input>`)
//! - inside a line or block comment
//! - inside a string or template literal
//!
//! # Suppression
//!
//! - `{/* design-lint: allow(semantic-element) */}` comment

use design_lint_core::{
    Classifier, ContextPredicate, ContextWindow, PatternRule, Severity, SuggestionStrategy,
    SuggestionTable,
};
use std::sync::{Arc, LazyLock};

/// Rule code for semantic-element.
pub const CODE: &str = "DS020";

/// Rule name for semantic-element.
pub const NAME: &str = "semantic-element";

static COMPONENTS: LazyLock<Arc<SuggestionTable>> = LazyLock::new(|| {
    Arc::new(SuggestionTable::new().exact([
        ("<button", "<Button>"),
        ("<input", "<Input>"),
        ("<select", "<Select>"),
        ("<textarea", "<Textarea>"),
        ("<h1", "<Heading level={1}>"),
        ("<h2", "<Heading level={2}>"),
        ("<h3", "<Heading level={3}>"),
        ("<h4", "<Heading level={4}>"),
        ("<h5", "<Heading level={5}>"),
        ("<h6", "<Heading level={6}>"),
        ("<table", "<Table>"),
        ("<dialog", "<Dialog>"),
        ("<a", "<Link>"),
    ]))
});

/// Predicates that mark a match as not being JSX markup.
pub const PREDICATES: [ContextPredicate; 3] = [
    ContextPredicate::new("generic-type-argument", is_generic_argument),
    ContextPredicate::new("comment", is_in_comment),
    ContextPredicate::new("string-literal", is_in_string),
];

fn is_generic_argument(window: &ContextWindow<'_>) -> bool {
    window
        .before
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

fn is_in_comment(window: &ContextWindow<'_>) -> bool {
    let before = window.before;
    let line_comment = before
        .match_indices("//")
        .any(|(i, _)| !before[..i].ends_with(':'));
    let open_block = before
        .rfind("/*")
        .is_some_and(|open| !before[open..].contains("*/"));
    let doc_line = before.trim_start().starts_with('*') && !before.contains("*/");
    line_comment || open_block || doc_line
}

fn is_in_string(window: &ContextWindow<'_>) -> bool {
    let chars: Vec<char> = window.before.chars().collect();
    let mut open: Option<char> = None;
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && chars[i - 1] == '\\' {
            continue;
        }
        match open {
            Some(q) if c == q => open = None,
            Some(_) => {}
            None if c == '"' || c == '`' => open = Some(c),
            None if c == '\'' => {
                let apostrophe = i > 0
                    && chars[i - 1].is_alphanumeric()
                    && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
                if !apostrophe {
                    open = Some(c);
                }
            }
            None => {}
        }
    }
    open.is_some()
}

static RULE: LazyLock<PatternRule> = LazyLock::new(|| {
    PatternRule::builder(CODE, NAME, "semantic-element")
        .pattern(r"<(?:button|input|select|textarea|h[1-6]|table|dialog)\b|<a\s")
        .description("Raw markup element; use the design-system component")
        .severity(Severity::Warning)
        .classifier(Classifier::new(PREDICATES.to_vec()))
        .suggestion(SuggestionStrategy::Lookup(Arc::clone(&COMPONENTS)))
        .build()
        .unwrap_or_else(|e| unreachable!("built-in rule {NAME}: {e}"))
});

/// Returns the semantic-element rule.
#[must_use]
pub fn semantic_element() -> PatternRule {
    RULE.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_lint_core::{scan, Decision};
    use std::path::Path;

    fn run(content: &str) -> Vec<(String, String)> {
        scan(&[semantic_element()], Path::new("a.tsx"), content)
            .into_iter()
            .map(|v| (v.matched_text, v.suggestion.unwrap_or_default()))
            .collect()
    }

    fn window(before: &'static str) -> ContextWindow<'static> {
        ContextWindow {
            before,
            matched: "<button",
            after: ">",
        }
    }

    #[test]
    fn raw_tags_map_to_components() {
        let found = run("<form>\n  <input name=\"q\" />\n  <button type=\"submit\">Go</button>\n  <a href=\"/help\">Help</a>\n</form>");
        assert_eq!(
            found,
            vec![
                ("<input".into(), "<Input>".into()),
                ("<button".into(), "<Button>".into()),
                ("<a ".into(), "<Link>".into()),
            ]
        );
    }

    #[test]
    fn headings_carry_their_level() {
        let found = run("<h2 className=\"title\">Settings</h2>");
        assert_eq!(found, vec![("<h2".into(), "<Heading level={2}>".into())]);
    }

    #[test]
    fn components_and_longer_tags_pass() {
        assert!(run("<Button /><Input /><buttonGroup /><abbr title=\"x\" /><header>").is_empty());
    }

    #[test]
    fn generic_arguments_are_allowed() {
        assert!(is_generic_argument(&window("const refs: Array")));
        assert!(!is_generic_argument(&window("  return (")));
        assert!(run("type Fields = Record<input, string>;").is_empty());
    }

    #[test]
    fn comments_are_allowed() {
        assert!(is_in_comment(&window("// TODO: replace ")));
        assert!(is_in_comment(&window(" * renders a ")));
        assert!(is_in_comment(&window("{/* old: ")));
        assert!(!is_in_comment(&window("<a href=\"https://x.dev\">")));
        assert!(!is_in_comment(&window("{/* note */} ")));
    }

    #[test]
    fn strings_are_allowed() {
        assert!(is_in_string(&window("const html = \"")));
        assert!(is_in_string(&window("const tpl = `<div>")));
        assert!(!is_in_string(&window("<div className=\"row\">")));
        assert!(!is_in_string(&window("<p>Don't click ")));
    }

    #[test]
    fn classifier_runs_predicates_in_order() {
        let classifier = Classifier::new(PREDICATES.to_vec());
        let content = "const s = \"<button>\";\n<button>";
        assert_eq!(classifier.classify(content, 11, 18), Decision::Allow);
        assert_eq!(classifier.classify(content, 22, 29), Decision::Flag);
        assert_eq!(run(content).len(), 1);
    }
}
