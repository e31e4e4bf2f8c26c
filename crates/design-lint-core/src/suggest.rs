//! Suggestion resolution for matched violations.
//!
//! Resolution order for table-backed rules, first success wins:
//!
//! 1. exact lookup of the matched text or one of its sub-extractions
//!    (`className` tokens, a tag name),
//! 2. structural decomposition of an embedded style declaration into
//!    `property: value` pairs looked up one by one,
//! 3. the table's category fallback, then the global category fallback.
//!
//! Every path ends in a non-empty string.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Returned when nothing more specific is known about a category.
pub const DEFAULT_SUGGESTION: &str = "Replace with a design-system token or component";

static CATEGORY_FALLBACKS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (
            "hardcoded-color",
            "Use a color-role utility class (e.g. bg-primary, text-muted-foreground)",
        ),
        (
            "inline-style",
            "Move inline styles to utility classes in className",
        ),
        (
            "semantic-element",
            "Use the design-system component instead of raw markup",
        ),
        (
            "icon-name",
            "Use an icon name from the approved icon vocabulary",
        ),
        (
            "opacity-syntax",
            "Use the slash opacity modifier with an available tier (20, 40, 60, 80)",
        ),
    ])
});

static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:className|class)\s*=\s*\{?\s*["'`]([^"'`]*)["'`]"#)
        .unwrap_or_else(|e| unreachable!("static class attribute pattern: {e}"))
});

static TAG_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<\s*([A-Za-z][A-Za-z0-9]*)")
        .unwrap_or_else(|e| unreachable!("static tag name pattern: {e}"))
});

static JSX_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)style\s*=\s*\{\{(.*)\}\}")
        .unwrap_or_else(|e| unreachable!("static JSX style pattern: {e}"))
});

static CSS_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"style\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .unwrap_or_else(|e| unreachable!("static CSS style pattern: {e}"))
});

static DYNAMIC_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{|\?|&&|\|\||\.\.\.")
        .unwrap_or_else(|e| unreachable!("static dynamic marker pattern: {e}"))
});

/// Returns the global fallback suggestion for a category.
#[must_use]
pub fn category_fallback(category: &str) -> &'static str {
    CATEGORY_FALLBACKS
        .get(category)
        .copied()
        .unwrap_or(DEFAULT_SUGGESTION)
}

/// Returns true if a style or attribute value is computed at runtime.
///
/// Template interpolation, conditionals, logical operators and spreads all
/// count as dynamic.
#[must_use]
pub fn is_dynamic(value: &str) -> bool {
    DYNAMIC_MARKERS.is_match(value)
}

/// How a rule derives the suggestion for one of its matches.
#[derive(Clone)]
pub enum SuggestionStrategy {
    /// The same text for every match.
    Fixed(String),
    /// Resolve through lookup tables.
    Lookup(Arc<SuggestionTable>),
    /// Rule-specific derivation from the matched text.
    Derive(fn(&str) -> Option<String>),
}

impl Default for SuggestionStrategy {
    fn default() -> Self {
        Self::Lookup(Arc::new(SuggestionTable::default()))
    }
}

impl fmt::Debug for SuggestionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(text) => f.debug_tuple("Fixed").field(text).finish(),
            Self::Lookup(table) => f.debug_tuple("Lookup").field(table).finish(),
            Self::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

impl SuggestionStrategy {
    /// Resolves the suggestion for `matched` in `category`.
    #[must_use]
    pub fn resolve(&self, matched: &str, category: &str) -> String {
        match self {
            Self::Fixed(text) if !text.is_empty() => text.clone(),
            Self::Fixed(_) => category_fallback(category).to_string(),
            Self::Lookup(table) => table.suggest(matched, category),
            Self::Derive(derive) => {
                derive(matched).unwrap_or_else(|| category_fallback(category).to_string())
            }
        }
    }
}

/// Immutable replacement tables for one family of rules.
#[derive(Debug, Clone, Default)]
pub struct SuggestionTable {
    exact: HashMap<String, String>,
    declarations: HashMap<String, String>,
    fallbacks: HashMap<String, String>,
}

impl SuggestionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds exact replacements keyed by matched text or extracted token.
    #[must_use]
    pub fn exact<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.exact
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Adds per-declaration replacements keyed by `property: value`.
    ///
    /// Keys must already be in normalized form (see [`normalize_declaration`]).
    #[must_use]
    pub fn declarations<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.declarations
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Overrides the fallback for a category.
    #[must_use]
    pub fn fallback(mut self, category: impl Into<String>, text: impl Into<String>) -> Self {
        self.fallbacks.insert(category.into(), text.into());
        self
    }

    /// Resolves a suggestion; never returns an empty string.
    #[must_use]
    pub fn suggest(&self, matched: &str, category: &str) -> String {
        self.lookup_exact(matched)
            .or_else(|| self.decompose(matched))
            .unwrap_or_else(|| {
                self.fallbacks
                    .get(category)
                    .cloned()
                    .unwrap_or_else(|| category_fallback(category).to_string())
            })
    }

    /// Step 1: the matched text itself, then its sub-extractions.
    fn lookup_exact(&self, matched: &str) -> Option<String> {
        if let Some(hit) = self.exact.get(matched.trim()) {
            return Some(hit.clone());
        }
        sub_extractions(matched).find_map(|key| self.exact.get(&key).cloned())
    }

    /// Step 2: map each declaration of an embedded style.
    fn decompose(&self, matched: &str) -> Option<String> {
        if self.declarations.is_empty() {
            return None;
        }
        let declarations = decompose_style(matched)?;
        let mapped: Vec<&str> = declarations
            .iter()
            .filter_map(|d| self.declarations.get(d).map(String::as_str))
            .collect();
        if mapped.is_empty() {
            None
        } else {
            Some(mapped.join(" "))
        }
    }
}

/// Keys derived from a match: `className` tokens and a bare `<tag` prefix.
fn sub_extractions(matched: &str) -> impl Iterator<Item = String> + '_ {
    let class_tokens = CLASS_ATTR
        .captures_iter(matched)
        .filter_map(|c| c.get(1))
        .flat_map(|m| m.as_str().split_whitespace().map(str::to_string));
    let tag = TAG_NAME
        .captures(matched)
        .and_then(|c| c.get(1))
        .map(|m| format!("<{}", m.as_str()));
    class_tokens.chain(tag)
}

/// Splits an embedded style into normalized `property: value` declarations.
///
/// Returns `None` when the text is not a style attribute or when any part of
/// it is dynamic.
#[must_use]
pub fn decompose_style(matched: &str) -> Option<Vec<String>> {
    if let Some(body) = JSX_STYLE.captures(matched).and_then(|c| c.get(1)) {
        let body = body.as_str();
        if is_dynamic(body) {
            return None;
        }
        return split_top_level(body, ',')
            .into_iter()
            .filter(|d| !d.trim().is_empty())
            .map(|d| normalize_declaration(d, ':'))
            .collect();
    }

    let css = CSS_STYLE.captures(matched)?;
    let body = css.get(1).or_else(|| css.get(2))?.as_str();
    if is_dynamic(body) {
        return None;
    }
    body.split(';')
        .filter(|d| !d.trim().is_empty())
        .map(|d| normalize_declaration(d, ':'))
        .collect()
}

/// Normalizes one declaration to `property: value`.
///
/// Properties are converted to camelCase; quoted or CSS keyword values are
/// rendered double-quoted, numbers stay bare. Bare identifiers in JSX position
/// are runtime references and yield `None`.
#[must_use]
pub fn normalize_declaration(declaration: &str, separator: char) -> Option<String> {
    let (property, value) = declaration.split_once(separator)?;
    let property = property.trim().trim_matches(|c| c == '"' || c == '\'');
    let value = value.trim();
    if property.is_empty() || value.is_empty() {
        return None;
    }

    let property = to_camel_case(property);
    let value = if let Some(inner) = strip_quotes(value) {
        format!("\"{}\"", inner.trim())
    } else if value.parse::<f64>().is_ok() {
        value.to_string()
    } else if looks_like_css_value(value) {
        format!("\"{value}\"")
    } else {
        return None;
    };

    Some(format!("{property}: {value}"))
}

fn strip_quotes(value: &str) -> Option<&str> {
    ['"', '\'', '`'].iter().find_map(|q| {
        value
            .strip_prefix(*q)
            .and_then(|rest| rest.strip_suffix(*q))
    })
}

/// CSS values in `style="..."` strings are unquoted but still static.
fn looks_like_css_value(value: &str) -> bool {
    value.starts_with("var(")
        || value.starts_with('#')
        || value.contains('(')
        || value.contains('%')
        || value.contains('-')
        || value.contains(' ')
        || value
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
        || matches!(
            value,
            "flex" | "grid" | "block" | "none" | "inline" | "center" | "relative" | "absolute"
                | "fixed" | "sticky" | "hidden" | "auto" | "pointer" | "bold" | "normal"
                | "column" | "row" | "wrap" | "transparent" | "inherit"
        )
}

fn to_camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper = false;
    for c in property.chars() {
        if c == '-' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Splits on `separator` outside parentheses, brackets and quotes.
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'' | '`') => quote = Some(c),
            (None, '(' | '[' | '{') => depth += 1,
            (None, ')' | ']' | '}') => depth = depth.saturating_sub(1),
            (None, c) if c == separator && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_table() -> SuggestionTable {
        SuggestionTable::new()
            .declarations([
                ("color: \"var(--foreground)\"", "text-foreground"),
                ("display: \"flex\"", "flex"),
                ("fontWeight: 600", "font-semibold"),
            ])
            .exact([("bg-white", "bg-background"), ("<button", "<Button>")])
    }

    #[test]
    fn exact_lookup_on_matched_text() {
        assert_eq!(
            style_table().suggest("bg-white", "hardcoded-color"),
            "bg-background"
        );
    }

    #[test]
    fn exact_lookup_on_class_token() {
        let table = style_table();
        assert_eq!(
            table.suggest("className=\"p-4 bg-white\"", "hardcoded-color"),
            "bg-background"
        );
    }

    #[test]
    fn exact_lookup_on_tag_prefix() {
        assert_eq!(
            style_table().suggest("<button type=\"submit\"", "semantic-element"),
            "<Button>"
        );
    }

    #[test]
    fn jsx_style_declaration_is_decomposed() {
        let table = style_table();
        assert_eq!(
            table.suggest(r#"style={{ color: "var(--foreground)" }}"#, "inline-style"),
            "text-foreground"
        );
    }

    #[test]
    fn multiple_declarations_join_in_order() {
        let table = style_table();
        assert_eq!(
            table.suggest(
                r#"style={{ display: 'flex', fontWeight: 600, margin: "3px" }}"#,
                "inline-style"
            ),
            "flex font-semibold"
        );
    }

    #[test]
    fn css_string_style_is_decomposed() {
        let table = style_table();
        assert_eq!(
            table.suggest(r#"style="color: var(--foreground); display: flex""#, "inline-style"),
            "text-foreground flex"
        );
    }

    #[test]
    fn dynamic_style_is_not_decomposed() {
        assert_eq!(
            decompose_style(r#"style={{ color: active ? "red" : "blue" }}"#),
            None
        );
        assert_eq!(decompose_style("style={{ color: `${c}` }}"), None);
        assert_eq!(decompose_style("style={{ color: themeColor }}"), None);
    }

    #[test]
    fn nested_commas_do_not_split_declarations() {
        let declarations =
            decompose_style(r#"style={{ boxShadow: "0 0 0 rgba(0, 0, 0, 0.5)", top: 0 }}"#)
                .unwrap();
        assert_eq!(
            declarations,
            vec![
                "boxShadow: \"0 0 0 rgba(0, 0, 0, 0.5)\"".to_string(),
                "top: 0".to_string()
            ]
        );
    }

    #[test]
    fn css_properties_become_camel_case() {
        assert_eq!(
            normalize_declaration("background-color: var(--primary)", ':'),
            Some("backgroundColor: \"var(--primary)\"".to_string())
        );
    }

    #[test]
    fn unmapped_match_uses_category_fallback() {
        let table = style_table();
        assert_eq!(
            table.suggest("text-rose-700", "hardcoded-color"),
            category_fallback("hardcoded-color")
        );
    }

    #[test]
    fn table_fallback_overrides_global() {
        let table = SuggestionTable::new().fallback("inline-style", "use tokens");
        assert_eq!(table.suggest("style={{}}", "inline-style"), "use tokens");
    }

    #[test]
    fn unknown_category_uses_default() {
        assert_eq!(
            SuggestionTable::new().suggest("anything", "unknown"),
            DEFAULT_SUGGESTION
        );
    }

    #[test]
    fn strategies_are_total_and_deterministic() {
        fn never(_: &str) -> Option<String> {
            None
        }
        let strategies = [
            SuggestionStrategy::Fixed(String::new()),
            SuggestionStrategy::Fixed("Use Button".into()),
            SuggestionStrategy::Lookup(Arc::new(style_table())),
            SuggestionStrategy::Derive(never),
        ];
        for strategy in &strategies {
            for input in ["", "bg-white", "style={{ x: y }}", "<h1"] {
                let first = strategy.resolve(input, "inline-style");
                assert!(!first.is_empty());
                assert_eq!(first, strategy.resolve(input, "inline-style"));
            }
        }
    }
}
