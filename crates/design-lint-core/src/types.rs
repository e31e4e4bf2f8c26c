//! Core types for violations and reports.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            other => Err(format!(
                "unknown severity `{other}`, expected: error, warning, info"
            )),
        }
    }
}

/// Source code location of a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to the scan root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// One located occurrence of a violation rule in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "DS001").
    pub code: String,
    /// Rule name (e.g., "palette-color").
    pub rule: String,
    /// Category tag shared by related rules (e.g., "hardcoded-color").
    pub category: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Where the match starts.
    pub location: Location,
    /// The exact text the rule matched.
    pub matched_text: String,
    /// Human-readable message.
    pub message: String,
    /// Recommended replacement, if one could be derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Violation {
    /// Creates a new violation without a suggestion.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        category: impl Into<String>,
        severity: Severity,
        location: Location,
        matched_text: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            category: category.into(),
            severity,
            location,
            matched_text: matched_text.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        let _ = writeln!(output, "  = found: {}", self.matched_text);
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {suggestion}");
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {suggestion})")?;
        }
        Ok(())
    }
}

/// A violation rendered against its source file for rich terminal output.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl ViolationDiagnostic {
    /// Builds a diagnostic for `violation` using the full text of its file.
    #[must_use]
    pub fn new(violation: &Violation, content: impl Into<String>) -> Self {
        Self {
            message: format!("[{}] {}", violation.code, violation.message),
            source_code: NamedSource::new(
                violation.location.file.display().to_string(),
                content.into(),
            ),
            help: violation.suggestion.clone(),
            span: SourceSpan::from((violation.location.offset, violation.location.length)),
            label_message: violation.rule.clone(),
        }
    }
}

/// Violations found in one file, in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// File path relative to the scan root.
    pub path: PathBuf,
    /// Violations in scan order.
    pub violations: Vec<Violation>,
}

/// A file that was excluded from the results because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// File path relative to the scan root.
    pub path: PathBuf,
    /// Why the file was skipped.
    pub reason: String,
}

/// Summary statistics of the icon vocabulary used during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyStats {
    /// Total number of names.
    pub entries: usize,
    /// Number of categories.
    pub categories: usize,
}

/// Result of a design-lint run.
///
/// Per-file lists are only ever added through [`Report::push_file`], which
/// keeps `total_violations` equal to the sum of per-file counts. Reports are
/// serialized for output but never read back.
#[derive(Debug, Default, Clone)]
pub struct Report {
    files: Vec<FileReport>,
    total_violations: usize,
    /// Number of files scanned.
    pub files_checked: usize,
    /// Files that could not be read.
    pub skipped: Vec<SkippedFile>,
    /// Vocabulary statistics, when an icon vocabulary was in use.
    pub vocabulary: Option<VocabularyStats>,
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let optional = usize::from(!self.skipped.is_empty()) + usize::from(self.vocabulary.is_some());
        let mut state = serializer.serialize_struct("Report", 4 + optional)?;
        state.serialize_field("clean", &self.is_clean())?;
        state.serialize_field("files", &self.files)?;
        state.serialize_field("total_violations", &self.total_violations)?;
        state.serialize_field("files_checked", &self.files_checked)?;
        if self.skipped.is_empty() {
            state.skip_field("skipped")?;
        } else {
            state.serialize_field("skipped", &self.skipped)?;
        }
        match &self.vocabulary {
            Some(stats) => state.serialize_field("vocabulary", stats)?,
            None => state.skip_field("vocabulary")?,
        }
        state.end()
    }
}

impl Report {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the violations of one scanned file.
    ///
    /// Empty lists are counted as checked but not stored. A path seen before
    /// has its violations appended to the existing entry.
    pub fn push_file(&mut self, path: PathBuf, violations: Vec<Violation>) {
        self.files_checked += 1;
        if violations.is_empty() {
            return;
        }
        self.total_violations += violations.len();
        if let Some(existing) = self.files.iter_mut().find(|f| f.path == path) {
            existing.violations.extend(violations);
        } else {
            self.files.push(FileReport { path, violations });
        }
    }

    /// Records a file that was skipped.
    pub fn push_skipped(&mut self, path: PathBuf, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            path,
            reason: reason.into(),
        });
    }

    /// Violations grouped by file, in first-seen order.
    #[must_use]
    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    /// Violations recorded for `path`, if any.
    #[must_use]
    pub fn violations_for(&self, path: &std::path::Path) -> Option<&[Violation]> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.violations.as_slice())
    }

    /// Iterates over every violation in report order.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.files.iter().flat_map(|f| f.violations.iter())
    }

    /// Total number of violations.
    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.total_violations
    }

    /// Returns true iff no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.total_violations == 0
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.violations()
            .fold((0, 0, 0), |(e, w, i), v| match v.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Formats violations as a test failure report.
    ///
    /// Produces a human-readable multi-line report suitable for `panic!()`
    /// messages in `cargo test` integration.
    #[must_use]
    pub fn format_test_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        let _ = writeln!(
            report,
            "\n=== design-lint: {} violation(s) ===\n",
            self.total_violations
        );

        for v in self.violations() {
            let _ = writeln!(report, "{}", v.format());
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Total: {} error(s), {} warning(s), {} info(s) in {} file(s)",
            errors, warnings, infos, self.files_checked
        );

        report
    }
}
