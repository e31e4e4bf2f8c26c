//! CLI command implementations.

pub mod check;
pub mod icons;
pub mod init;
pub mod list_rules;
pub mod output;

use crate::config_resolver::ConfigSource;
use anyhow::{Context, Result};
use design_lint_core::{ProjectConfig, Vocabulary};
use design_lint_rules::default_vocabulary;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Loads the configuration named by `source`.
pub fn load_config(source: &ConfigSource) -> Result<ProjectConfig> {
    let Some(path) = source.path() else {
        debug!("No configuration file, using defaults");
        return Ok(ProjectConfig::default());
    };

    if source.is_global() {
        info!("Using global config: {}", path.display());
    } else {
        debug!("Using config: {source}");
    }

    Ok(ProjectConfig::load(path)?)
}

/// Loads the icon vocabulary: the `--vocabulary` flag, else
/// `[vocabulary] path`, else the embedded default.
pub fn load_vocabulary(explicit: Option<&Path>, project: &ProjectConfig) -> Result<Arc<Vocabulary>> {
    let Some(path) = project.vocabulary_path(explicit) else {
        return Ok(default_vocabulary());
    };

    let vocabulary = Vocabulary::from_file(&path)
        .with_context(|| format!("Failed to load icon vocabulary: {}", path.display()))?;
    info!(
        "Loaded {} icon names in {} categories from {}",
        vocabulary.len(),
        vocabulary.categories().len(),
        path.display()
    );
    Ok(Arc::new(vocabulary))
}
