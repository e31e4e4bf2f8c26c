//! Rule to flag icon names missing from the icon vocabulary.
//!
//! # Rationale
//!
//! Icon fonts render unknown ligature names as plain text, so a typo such as
//! `check_circl` ships as a visible word instead of an icon. Every name used
//! by an icon component must exist in the vocabulary (case-exact).
//!
//! # Detected Patterns
//!
//! - `<Icon name="...">`, `<MaterialIcon icon="...">`, `<MaterialSymbol ...>`
//! - `<span className="material-symbols-outlined">name</span>`
//!
//! # Suggestions
//!
//! Edit-distance candidates first ("Did you mean: ..."), then substring
//! matches ("Similar icons: ..."), then the category fallback.
//!
//! # Configuration
//!
//! ```toml
//! [rules.icon-name]
//! max_distance = 2
//! allow = ["brand_logo"]
//! ```
//!
//! # Suppression
//!
//! - `// design-lint: allow(icon-name)` comment

use design_lint_core::matcher::DEFAULT_MAX_DISTANCE;
use design_lint_core::{
    category_fallback, check_allow_comment, FileContext, LineIndex, Location, Rule, RuleConfig,
    Severity, Violation, Vocabulary,
};
use regex::Regex;
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};
use tracing::warn;

/// Rule code for icon-name.
pub const CODE: &str = "DS040";

/// Rule name for icon-name.
pub const NAME: &str = "icon-name";

const CATEGORY: &str = "icon-name";

static COMPONENT_PROP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<(?:Icon|MaterialIcon|MaterialSymbol)\b[^>]*?\b(?:name|icon)\s*=\s*["']([A-Za-z0-9_]+)["']"#,
    )
    .unwrap_or_else(|e| unreachable!("icon component pattern: {e}"))
});

static SYMBOL_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<span\b[^>]*?\bclass(?:Name)?\s*=\s*["'][^"']*\bmaterial-symbols[\w-]*[^"']*["'][^>]*>\s*([A-Za-z0-9_]+)\s*</span>"#,
    )
    .unwrap_or_else(|e| unreachable!("icon span pattern: {e}"))
});

/// Validates icon names against a [`Vocabulary`].
#[derive(Debug, Clone)]
pub struct IconNameRule {
    vocabulary: Arc<Vocabulary>,
    max_distance: usize,
    allow: HashSet<String>,
    severity: Severity,
}

impl IconNameRule {
    /// Creates the rule with the default edit-distance cutoff.
    #[must_use]
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self {
            vocabulary,
            max_distance: DEFAULT_MAX_DISTANCE,
            allow: HashSet::new(),
            severity: Severity::Error,
        }
    }

    /// Builds the rule from its `[rules.icon-name]` table, if any.
    #[must_use]
    pub fn from_config(vocabulary: Arc<Vocabulary>, config: Option<&RuleConfig>) -> Self {
        let rule = Self::new(vocabulary);
        let Some(config) = config else {
            return rule;
        };
        let requested = config.get_int("max_distance", 2);
        let max_distance = usize::try_from(requested).unwrap_or_else(|_| {
            warn!("{NAME}: ignoring negative max_distance {requested}");
            DEFAULT_MAX_DISTANCE
        });
        rule.max_distance(max_distance)
            .allow(config.get_str_array("allow"))
    }

    /// Sets the edit-distance cutoff for suggestions.
    #[must_use]
    pub fn max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Accepts extra names without adding them to the vocabulary.
    #[must_use]
    pub fn allow<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow.extend(names.into_iter().map(Into::into));
        self
    }

    /// Overrides the default severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the vocabulary names are checked against.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn is_known(&self, name: &str) -> bool {
        self.vocabulary.contains(name) || self.allow.contains(name)
    }

    /// Builds the suggestion text for an unknown name.
    #[must_use]
    pub fn suggest(&self, name: &str) -> String {
        let closest = self.vocabulary.closest(name, self.max_distance);
        if !closest.is_empty() {
            let names: Vec<&str> = closest.iter().map(|c| c.name.as_str()).collect();
            return format!("Did you mean: {}", names.join(", "));
        }
        let partial = self.vocabulary.partial(name);
        if !partial.is_empty() {
            return format!("Similar icons: {}", partial.join(", "));
        }
        category_fallback(CATEGORY).to_string()
    }
}

impl Rule for IconNameRule {
    fn name(&self) -> &str {
        NAME
    }

    fn code(&self) -> &str {
        CODE
    }

    fn category(&self) -> &str {
        CATEGORY
    }

    fn description(&self) -> &str {
        "Icon name is not in the icon vocabulary"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let lines = LineIndex::new(ctx.content);

        let mut names: Vec<regex::Match<'_>> = COMPONENT_PROP
            .captures_iter(ctx.content)
            .chain(SYMBOL_SPAN.captures_iter(ctx.content))
            .filter_map(|caps| caps.get(1))
            .collect();
        names.sort_by_key(regex::Match::start);
        names.dedup_by_key(|m| m.start());

        names
            .into_iter()
            .filter(|m| !self.is_known(m.as_str()))
            .filter_map(|m| {
                let (line, column) = lines.position(m.start());
                if check_allow_comment(&lines, line, NAME).is_allowed() {
                    return None;
                }
                let location = Location::new(ctx.relative_path.clone(), line, column)
                    .with_span(m.start(), m.len());
                Some(
                    Violation::new(
                        CODE,
                        NAME,
                        CATEGORY,
                        self.severity,
                        location,
                        m.as_str(),
                        format!("Unknown icon name '{}'", m.as_str()),
                    )
                    .with_suggestion(self.suggest(m.as_str())),
                )
            })
            .collect()
    }
}
