//! Controlled-name vocabularies (e.g. approved icon names).
//!
//! A vocabulary file lists categories in order, each with its names:
//!
//! ```toml
//! [[categories]]
//! name = "action"
//! names = ["check_circle", "delete", "search"]
//! ```
//!
//! The same structure is accepted as JSON. Loading happens once per run; the
//! result is shared read-only.

use crate::matcher::{self, Candidate};
use crate::types::VocabularyStats;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Errors while loading a vocabulary. All of them are configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// The vocabulary file could not be read.
    #[error("Failed to read vocabulary file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or JSON of the expected shape.
    #[error("Failed to parse vocabulary {origin}: {message}")]
    Parse {
        /// File path or "<inline>".
        origin: String,
        /// Parser message.
        message: String,
    },

    /// The vocabulary defines no names at all.
    #[error("Vocabulary {origin} contains no names")]
    Empty {
        /// File path or "<inline>".
        origin: String,
    },
}

#[derive(Debug, Deserialize)]
struct VocabularyDto {
    #[serde(default)]
    categories: Vec<CategoryDto>,
}

#[derive(Debug, Deserialize)]
struct CategoryDto {
    name: String,
    #[serde(default)]
    names: Vec<String>,
}

/// One valid identifier and its grouping label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    /// Canonical identifier.
    pub name: String,
    /// Category the name belongs to.
    pub category: String,
}

/// The authoritative set of valid names for a controlled-name domain.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
    names: Vec<String>,
    index: HashSet<String>,
    categories: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from `(category, names)` groups, keeping order.
    ///
    /// Names listed more than once keep their first category.
    #[must_use]
    pub fn from_groups<I, C, N, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::default();
        for (category, names) in groups {
            let category = category.into();
            if !vocabulary.categories.contains(&category) {
                vocabulary.categories.push(category.clone());
            }
            for name in names {
                let name = name.into();
                if vocabulary.index.insert(name.clone()) {
                    vocabulary.names.push(name.clone());
                    vocabulary.entries.push(VocabularyEntry {
                        name,
                        category: category.clone(),
                    });
                }
            }
        }
        vocabulary
    }

    /// Loads a vocabulary file; `.json` files are parsed as JSON, anything
    /// else as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, malformed, or empty.
    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let content = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let origin = path.display().to_string();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::parse_json(&content, &origin)
        } else {
            Self::parse_toml(&content, &origin)
        }
    }

    /// Parses a TOML vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed or defines no names.
    pub fn parse_toml(content: &str, origin: &str) -> Result<Self, VocabularyError> {
        let dto: VocabularyDto = toml::from_str(content).map_err(|e| VocabularyError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        Self::from_dto(dto, origin)
    }

    /// Parses a JSON vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed or defines no names.
    pub fn parse_json(content: &str, origin: &str) -> Result<Self, VocabularyError> {
        let dto: VocabularyDto =
            serde_json::from_str(content).map_err(|e| VocabularyError::Parse {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;
        Self::from_dto(dto, origin)
    }

    fn from_dto(dto: VocabularyDto, origin: &str) -> Result<Self, VocabularyError> {
        let vocabulary = Self::from_groups(dto.categories.into_iter().map(|c| (c.name, c.names)));
        if vocabulary.is_empty() {
            return Err(VocabularyError::Empty {
                origin: origin.to_string(),
            });
        }
        Ok(vocabulary)
    }

    /// Case-exact membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Returns every name in load order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns every entry in load order.
    #[must_use]
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Returns the category names in load order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the category of `name`, if it is in the vocabulary.
    #[must_use]
    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.category.as_str())
    }

    /// Number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the vocabulary has no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Summary statistics for reports.
    #[must_use]
    pub fn stats(&self) -> VocabularyStats {
        VocabularyStats {
            entries: self.len(),
            categories: self.categories.len(),
        }
    }

    /// Edit-distance candidates for an unknown name.
    #[must_use]
    pub fn closest(&self, name: &str, max_distance: usize) -> Vec<Candidate> {
        matcher::rank(name, &self.names, max_distance)
    }

    /// Substring candidates for an unknown name.
    #[must_use]
    pub fn partial(&self, name: &str) -> Vec<String> {
        matcher::partial_match(name, &self.names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[categories]]
name = "action"
names = ["check_circle", "delete", "search"]

[[categories]]
name = "navigation"
names = ["close", "menu", "search"]
"#;

    #[test]
    fn parses_toml_in_order() {
        let vocab = Vocabulary::parse_toml(SAMPLE, "<inline>").unwrap();
        assert_eq!(vocab.categories(), ["action", "navigation"]);
        assert_eq!(
            vocab.names(),
            ["check_circle", "delete", "search", "close", "menu"]
        );
        assert_eq!(vocab.category_of("search"), Some("action"));
        assert_eq!(
            vocab.stats(),
            VocabularyStats {
                entries: 5,
                categories: 2
            }
        );
    }

    #[test]
    fn parses_json() {
        let json = r#"{"categories":[{"name":"toggle","names":["star","star_half"]}]}"#;
        let vocab = Vocabulary::parse_json(json, "<inline>").unwrap();
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("star_half"));
    }

    #[test]
    fn membership_is_case_exact() {
        let vocab = Vocabulary::parse_toml(SAMPLE, "<inline>").unwrap();
        assert!(vocab.contains("close"));
        assert!(!vocab.contains("Close"));
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let err = Vocabulary::parse_toml("", "<inline>").unwrap_err();
        assert!(matches!(err, VocabularyError::Empty { .. }));
    }

    #[test]
    fn malformed_vocabulary_is_rejected() {
        let err = Vocabulary::parse_toml("[[categories]]\nnames = 3", "<inline>").unwrap_err();
        assert!(matches!(err, VocabularyError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Vocabulary::from_file(Path::new("/nonexistent/icons.toml")).unwrap_err();
        assert!(matches!(err, VocabularyError::Io { .. }));
    }

    #[test]
    fn from_file_reads_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.json");
        std::fs::write(
            &path,
            r#"{"categories":[{"name":"a","names":["home","settings"]}]}"#,
        )
        .unwrap();
        let vocab = Vocabulary::from_file(&path).unwrap();
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn closest_and_partial_use_the_matcher() {
        let vocab = Vocabulary::parse_toml(SAMPLE, "<inline>").unwrap();
        assert_eq!(vocab.closest("serch", 2)[0].name, "search");
        assert_eq!(vocab.partial("check"), vec!["check_circle"]);
    }
}
