//! # design-lint-core
//!
//! Core engine for design-system compliance checking.
//!
//! Rules are regular expressions over raw source text (JSX, TSX, TS, CSS);
//! no syntax tree is built. This crate provides:
//!
//! - [`PatternRule`] and the [`Rule`] trait for violation rules
//! - [`scan`] for finding rule matches with 1-based positions
//! - [`SuggestionTable`] / [`SuggestionStrategy`] for replacement suggestions
//! - [`matcher`] for edit-distance and substring ranking against a
//!   [`Vocabulary`]
//! - [`Analyzer`] for walking a corpus and building a [`Report`]
//! - [`ProjectConfig`] for loading a `design-lint.toml` and its pattern rules
//!
//! ## Example
//!
//! ```ignore
//! use design_lint_core::{Analyzer, PatternRule};
//!
//! let rule = PatternRule::builder("DS001", "palette-color", "hardcoded-color")
//!     .pattern(r"\bbg-red-500\b")
//!     .build()?;
//!
//! let report = Analyzer::builder()
//!     .root("./src")
//!     .rule(rule)
//!     .build()?
//!     .analyze()?;
//!
//! println!("{}", report.format_test_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod allowance;
mod analyzer;
mod classifier;
mod config;
mod context;
mod corpus;
mod project;
mod rule;
mod scanner;
mod suggest;
mod types;
mod vocabulary;

/// User-defined pattern rules loaded from TOML.
pub mod declarative;
/// Approximate name matching.
pub mod matcher;

pub use allowance::{check_allow_comment, AllowCheck};
pub use analyzer::{aggregate, Analyzer, AnalyzerBuilder, AnalyzerError};
pub use classifier::{Classifier, ContextPredicate, ContextWindow, Decision, DEFAULT_WINDOW};
pub use config::{
    AnalyzerConfig, Config, ConfigError, RuleConfig, VocabularyConfig, DEFAULT_EXCLUDE,
    DEFAULT_INCLUDE,
};
pub use context::{FileContext, LineIndex};
pub use corpus::{Corpus, FsCorpus, SourceFile};
pub use matcher::Candidate;
pub use project::{ProjectConfig, ProjectConfigError};
pub use rule::{PatternRule, PatternRuleBuilder, Rule, RuleBox, RuleError};
pub use scanner::scan;
pub use suggest::{
    category_fallback, decompose_style, is_dynamic, normalize_declaration, SuggestionStrategy,
    SuggestionTable, DEFAULT_SUGGESTION,
};
pub use types::{
    FileReport, Location, Report, Severity, SkippedFile, Violation, ViolationDiagnostic,
    VocabularyStats,
};
pub use vocabulary::{Vocabulary, VocabularyEntry, VocabularyError};
