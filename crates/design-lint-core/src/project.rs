//! Loading a project's configuration file.
//!
//! One `design-lint.toml` carries the [`Config`] tables and any
//! `[[pattern-rules]]`. Relative paths inside it, such as
//! `[vocabulary] path`, resolve against the file's directory.

use crate::config::{Config, ConfigError};
use crate::declarative::{self, LoadRulesError};
use crate::rule::RuleBox;
use crate::vocabulary::{Vocabulary, VocabularyError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Errors while loading a project configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ProjectConfigError {
    /// The file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The configuration tables are invalid.
    #[error("Failed to load config {path}: {source}")]
    Config {
        /// Config file path.
        path: PathBuf,
        /// Parse error.
        source: ConfigError,
    },

    /// A `[[pattern-rules]]` entry is invalid.
    #[error("Invalid pattern rule in {path}: {source}")]
    PatternRules {
        /// Config file path.
        path: PathBuf,
        /// Rule loading error.
        source: LoadRulesError,
    },

    /// The configured vocabulary could not be loaded.
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

/// A parsed configuration file and the pattern rules it declares.
#[derive(Default)]
pub struct ProjectConfig {
    /// Parsed configuration.
    pub config: Config,
    /// `[[pattern-rules]]` from the same file.
    pub pattern_rules: Vec<RuleBox>,
    /// Directory relative config paths resolve against.
    pub base_dir: Option<PathBuf>,
}

impl ProjectConfig {
    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or if its tables or
    /// pattern rules are invalid.
    pub fn load(path: &Path) -> Result<Self, ProjectConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProjectConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Config::parse(&content).map_err(|source| ProjectConfigError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let pattern_rules = declarative::load_rules_from_toml(&content).map_err(|source| {
            ProjectConfigError::PatternRules {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(
            "Loaded {} with {} pattern rule(s)",
            path.display(),
            pattern_rules.len()
        );

        Ok(Self {
            config,
            pattern_rules,
            base_dir: path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map(Path::to_path_buf),
        })
    }

    /// Vocabulary file to load: `explicit`, else `[vocabulary] path`
    /// resolved against [`base_dir`](Self::base_dir). `None` means the
    /// caller's built-in vocabulary.
    #[must_use]
    pub fn vocabulary_path(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let path = self.config.vocabulary.path.as_ref()?;
        Some(match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.clone(),
        })
    }

    /// Loads the vocabulary named by [`vocabulary_path`](Self::vocabulary_path).
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary file cannot be read or parsed.
    pub fn load_vocabulary(
        &self,
        explicit: Option<&Path>,
    ) -> Result<Option<Vocabulary>, ProjectConfigError> {
        self.vocabulary_path(explicit)
            .map(|path| Vocabulary::from_file(&path))
            .transpose()
            .map_err(Into::into)
    }
}
