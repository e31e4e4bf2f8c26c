//! Corpus discovery: which files a run scans.

use crate::analyzer::AnalyzerError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A source file and its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// File contents.
    pub content: String,
}

impl SourceFile {
    /// Creates a source file from a relative path and its contents.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Supplies the files of a run.
pub trait Corpus: Send + Sync {
    /// Returns the paths to scan, sorted and without duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus root cannot be walked at all.
    fn discover(&self) -> Result<Vec<PathBuf>, AnalyzerError>;

    /// Reads one discovered file.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error; callers treat it as recoverable.
    fn read(&self, path: &Path) -> std::io::Result<String>;
}

/// A corpus on the local filesystem.
///
/// Include and exclude globs are matched against the path relative to the
/// root, with `/` separators. Excludes win over includes.
#[derive(Debug, Clone)]
pub struct FsCorpus {
    root: PathBuf,
    include: Vec<glob::Pattern>,
    exclude: Vec<glob::Pattern>,
    respect_gitignore: bool,
}

impl FsCorpus {
    /// Creates a corpus rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if any glob pattern is invalid.
    pub fn new(
        root: impl Into<PathBuf>,
        include: &[String],
        exclude: &[String],
        respect_gitignore: bool,
    ) -> Result<Self, AnalyzerError> {
        Ok(Self {
            root: root.into(),
            include: compile_globs(include)?,
            exclude: compile_globs(exclude)?,
            respect_gitignore,
        })
    }

    /// Returns the corpus root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Checks a root-relative path against the include and exclude globs.
    #[must_use]
    pub fn is_selected(&self, relative: &Path) -> bool {
        let rel = relative.to_string_lossy().replace('\\', "/");
        if self.exclude.iter().any(|p| p.matches(&rel)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|p| p.matches(&rel))
    }
}

fn compile_globs(patterns: &[String]) -> Result<Vec<glob::Pattern>, AnalyzerError> {
    patterns
        .iter()
        .map(|p| glob::Pattern::new(p).map_err(AnalyzerError::from))
        .collect()
}

impl Corpus for FsCorpus {
    fn discover(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        if !self.root.is_dir() {
            return Err(AnalyzerError::RootNotFound(self.root.clone()));
        }

        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .require_git(false);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            if relative.components().any(|c| c.as_os_str() == ".git") {
                continue;
            }
            if self.is_selected(relative) {
                files.push(path);
            } else {
                debug!("Excluding: {}", relative.display());
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn read(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}
