//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "design-lint.toml";

const DEFAULT_CONFIG: &str = r#"# design-lint configuration

# Rule preset: "recommended", "strict" or "minimal"
preset = "recommended"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Source files to scan
include = ["**/*.tsx", "**/*.jsx", "**/*.ts", "**/*.js", "**/*.css"]

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
]

# Respect .gitignore files
respect_gitignore = true

# Worker threads (default: one per CPU)
# parallelism = 4

[vocabulary]
# Icon names accepted by the icon-name rule (TOML or JSON).
# The built-in Material Symbols list is used when unset.
# path = "icons.toml"

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.palette-color]
enabled = true
# severity = "warning"

[rules.icon-name]
max_distance = 2
allow = []

# Project-specific rules
# [[pattern-rules]]
# name = "no-important"
# code = "DSX001"
# category = "important-modifier"
# pattern = "!\\w+-\\w+"
# message = "Avoid the important modifier."
# suggestion = "Increase specificity via a variant instead."
# severity = "warning"
"#;

/// Runs the init command in the current directory.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("."), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: design-lint check");

    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_lint_core::{declarative, Config, DEFAULT_INCLUDE};

    #[test]
    fn template_is_a_valid_config() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preset.as_deref(), Some("recommended"));
        assert_eq!(config.analyzer.include.len(), DEFAULT_INCLUDE.len());
        assert!(config.is_rule_enabled("palette-color"));
        assert!(declarative::load_rules_from_toml(DEFAULT_CONFIG)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), false).unwrap();
        assert!(write_config(dir.path(), false).is_err());

        std::fs::write(dir.path().join(CONFIG_FILE), "# edited").unwrap();
        write_config(dir.path(), true).unwrap();
        let content = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(content, DEFAULT_CONFIG);
    }
}
