//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::FileContext;
use crate::corpus::{Corpus, FsCorpus, SourceFile};
use crate::rule::{Rule, RuleBox};
use crate::types::{Report, Violation, VocabularyStats};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error resolving the root.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The scan root does not exist or is not a directory.
    #[error("Scan root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The worker pool could not be created.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Runs every rule over in-memory files and builds the report.
///
/// Files are processed in the given order; the per-file violations are the
/// concatenation of each rule's findings, in rule order.
#[must_use]
pub fn aggregate(rules: &[RuleBox], files: &[SourceFile]) -> Report {
    let mut report = Report::new();
    for file in files {
        let ctx = FileContext::relative(&file.path, &file.content);
        let violations = rules.iter().flat_map(|rule| rule.check(&ctx)).collect();
        report.push_file(file.path.clone(), violations);
    }
    report
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Option<Config>,
    corpus: Option<Box<dyn Corpus>>,
    vocabulary: Option<VocabularyStats>,
    parallelism: Option<usize>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds an include glob pattern. Replaces the configured includes.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Uses a custom corpus instead of walking the root.
    #[must_use]
    pub fn corpus(mut self, corpus: Box<dyn Corpus>) -> Self {
        self.corpus = Some(corpus);
        self
    }

    /// Records the statistics of the vocabulary used by the rules.
    #[must_use]
    pub fn vocabulary_stats(mut self, stats: VocabularyStats) -> Self {
        self.vocabulary = Some(stats);
        self
    }

    /// Bounds the number of worker threads.
    #[must_use]
    pub fn parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved or a
    /// glob pattern is invalid.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();
        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let include_patterns = if self.include_patterns.is_empty() {
            config.analyzer.include.clone()
        } else {
            self.include_patterns
        };

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());

        let corpus = match self.corpus {
            Some(corpus) => corpus,
            None => Box::new(FsCorpus::new(
                root.clone(),
                &include_patterns,
                &exclude_patterns,
                config.analyzer.respect_gitignore,
            )?),
        };

        Ok(Analyzer {
            root,
            rules: self.rules,
            parallelism: self.parallelism.or(config.analyzer.parallelism),
            corpus,
            config,
            vocabulary: self.vocabulary,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    corpus: Box<dyn Corpus>,
    config: Config,
    vocabulary: Option<VocabularyStats>,
    parallelism: Option<usize>,
}

enum FileOutcome {
    Scanned(Vec<Violation>),
    Skipped(String),
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all files and returns the report.
    ///
    /// Unreadable files are logged and recorded in [`Report::skipped`]; they
    /// never abort the run.
    ///
    /// # Errors
    ///
    /// Returns an error if corpus discovery fails or the worker pool cannot
    /// be created.
    pub fn analyze(&self) -> Result<Report, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let files = self.corpus.discover()?;
        info!("Found {} files to analyze", files.len());

        let active: Vec<&RuleBox> = self
            .rules
            .iter()
            .filter(|rule| {
                let enabled = self.config.is_rule_enabled(rule.name());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .collect();

        let scan = || -> Vec<FileOutcome> {
            files
                .par_iter()
                .map(|path| self.analyze_file(path, &active))
                .collect()
        };
        let outcomes = match self.parallelism {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(scan),
            None => scan(),
        };

        let mut report = Report::new();
        for (path, outcome) in files.iter().zip(outcomes) {
            let relative = self.relative(path);
            match outcome {
                FileOutcome::Scanned(violations) => report.push_file(relative, violations),
                FileOutcome::Skipped(reason) => {
                    warn!("Skipping {}: {}", relative.display(), reason);
                    report.push_skipped(relative, reason);
                }
            }
        }
        report.vocabulary = self.vocabulary;

        info!(
            "Analysis complete: {} violations in {} files",
            report.total_violations(),
            report.files_checked
        );

        Ok(report)
    }

    /// Analyzes a single file.
    fn analyze_file(&self, path: &Path, rules: &[&RuleBox]) -> FileOutcome {
        debug!("Analyzing: {}", path.display());

        let content = match self.corpus.read(path) {
            Ok(content) => content,
            Err(e) => return FileOutcome::Skipped(e.to_string()),
        };

        let ctx = FileContext::new(path, &content, &self.root);
        let mut violations = Vec::new();
        for rule in rules {
            let found = rule.check(&ctx);
            violations.extend(self.apply_severity_override(rule.name(), found));
        }
        FileOutcome::Scanned(violations)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }
}
