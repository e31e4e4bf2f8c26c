//! Rule traits and the pattern rule model.

use crate::allowance::check_allow_comment;
use crate::classifier::Classifier;
use crate::context::{FileContext, LineIndex};
use crate::scanner;
use crate::suggest::SuggestionStrategy;
use crate::types::{Severity, Violation};
use regex::Regex;

/// A per-file lint rule.
///
/// Most rules are [`PatternRule`]s; implement this trait directly when a
/// rule needs more than a pattern, such as a vocabulary lookup.
///
/// # Example
///
/// ```ignore
/// use design_lint_core::{FileContext, Rule, Violation};
///
/// pub struct NoTodoClass;
///
/// impl Rule for NoTodoClass {
///     fn name(&self) -> &'static str { "no-todo-class" }
///     fn code(&self) -> &'static str { "DSX001" }
///     fn category(&self) -> &str { "housekeeping" }
///
///     fn check(&self, ctx: &FileContext) -> Vec<Violation> {
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "palette-color").
    fn name(&self) -> &str;

    /// Returns the rule code (e.g., "DS001").
    fn code(&self) -> &str;

    /// Returns the category tag shared by related rules.
    fn category(&self) -> &str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single file and returns any violations found, in position
    /// order.
    fn check(&self, ctx: &FileContext) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Errors raised while constructing a rule.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The main or exclusion pattern is not a valid regular expression.
    #[error("rule `{rule}`: invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// Rule name.
        rule: String,
        /// The offending pattern.
        pattern: String,
        /// Compiler error.
        source: regex::Error,
    },

    /// The builder was finished without a pattern.
    #[error("rule `{rule}`: missing pattern")]
    MissingPattern {
        /// Rule name.
        rule: String,
    },
}

/// A violation rule defined by a regular expression.
///
/// Immutable once built; the same rule can scan any number of files, in
/// parallel.
#[derive(Debug, Clone)]
pub struct PatternRule {
    code: String,
    name: String,
    category: String,
    description: String,
    severity: Severity,
    pattern: Regex,
    exclusion: Option<Regex>,
    classifier: Option<Classifier>,
    suggestion: SuggestionStrategy,
}

impl PatternRule {
    /// Starts building a rule.
    #[must_use]
    pub fn builder(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> PatternRuleBuilder {
        PatternRuleBuilder {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            description: String::new(),
            severity: Severity::Error,
            pattern: None,
            exclusion: None,
            classifier: None,
            suggestion: SuggestionStrategy::default(),
        }
    }

    /// Returns the violation pattern.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Returns the exclusion pattern, if any.
    #[must_use]
    pub fn exclusion(&self) -> Option<&Regex> {
        self.exclusion.as_ref()
    }

    /// Returns the context classifier, if any.
    #[must_use]
    pub fn classifier(&self) -> Option<&Classifier> {
        self.classifier.as_ref()
    }

    /// Returns the suggestion strategy.
    #[must_use]
    pub fn suggestion(&self) -> &SuggestionStrategy {
        &self.suggestion
    }

    /// Returns true if `matched` is whitelisted by the exclusion pattern.
    #[must_use]
    pub fn is_excluded(&self, matched: &str) -> bool {
        self.exclusion.as_ref().is_some_and(|e| e.is_match(matched))
    }

    /// Resolves the suggestion for a matched text.
    #[must_use]
    pub fn suggest(&self, matched: &str) -> String {
        self.suggestion.resolve(matched, &self.category)
    }

    /// Returns a copy of this rule with a different severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for PatternRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let lines = LineIndex::new(ctx.content);
        scanner::scan(std::slice::from_ref(self), &ctx.relative_path, ctx.content)
            .into_iter()
            .filter(|v| {
                !check_allow_comment(&lines, v.location.line, &self.name).is_allowed()
            })
            .collect()
    }
}

/// Builder for [`PatternRule`]; patterns are compiled in [`build`](Self::build).
#[derive(Debug)]
pub struct PatternRuleBuilder {
    code: String,
    name: String,
    category: String,
    description: String,
    severity: Severity,
    pattern: Option<String>,
    exclusion: Option<String>,
    classifier: Option<Classifier>,
    suggestion: SuggestionStrategy,
}

impl PatternRuleBuilder {
    /// Sets the violation pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the exclusion pattern.
    #[must_use]
    pub fn exclusion(mut self, pattern: impl Into<String>) -> Self {
        self.exclusion = Some(pattern.into());
        self
    }

    /// Sets the description shown in reports.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the default severity.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the context classifier.
    #[must_use]
    pub fn classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Sets the suggestion strategy.
    #[must_use]
    pub fn suggestion(mut self, strategy: SuggestionStrategy) -> Self {
        self.suggestion = strategy;
        self
    }

    /// Compiles the patterns and returns the rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is missing or either pattern fails to
    /// compile.
    pub fn build(self) -> Result<PatternRule, RuleError> {
        let raw = self.pattern.ok_or_else(|| RuleError::MissingPattern {
            rule: self.name.clone(),
        })?;
        let pattern = compile(&self.name, &raw)?;
        let exclusion = self
            .exclusion
            .map(|raw| compile(&self.name, &raw))
            .transpose()?;

        Ok(PatternRule {
            code: self.code,
            name: self.name,
            category: self.category,
            description: self.description,
            severity: self.severity,
            pattern,
            exclusion,
            classifier: self.classifier,
            suggestion: self.suggestion,
        })
    }
}

fn compile(rule: &str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        rule: rule.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}
