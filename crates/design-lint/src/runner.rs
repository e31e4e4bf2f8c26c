//! Internal runner for `check!()` integration.
//!
//! Not part of the public API; called by the test function generated by
//! `design_lint::check!()`.

use design_lint_core::{Analyzer, Config, ProjectConfig};
use design_lint_rules::{default_vocabulary, Preset};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["design-lint.toml", ".design-lint.toml"];

/// Runs `run_check` with `key = "value"` pairs from the `check!()` macro.
///
/// # Panics
///
/// Panics on an unknown key, or whenever [`run_check`] panics.
pub fn run_check_with(options: &[(&str, &str)]) {
    let mut root = None;
    let mut preset = None;
    let mut config = None;
    for (key, value) in options {
        match *key {
            "root" => root = Some(Path::new(value)),
            "preset" => preset = Some(*value),
            "config" => config = Some(*value),
            other => panic!(
                "design-lint: unknown check!() option `{other}`. Valid options: root, preset, config"
            ),
        }
    }
    run_check(root, preset, config);
}

/// Runs design-lint as part of `cargo test`.
///
/// `root` and `config` are resolved against the crate manifest directory
/// when relative. Without `config`, `design-lint.toml` is looked up in the
/// root and then the manifest directory.
///
/// # Panics
///
/// Panics with a formatted report if any violation is found, or if the
/// configuration, vocabulary or analyzer cannot be loaded.
pub fn run_check(root: Option<&Path>, preset: Option<&str>, config_path: Option<&str>) {
    let base = manifest_dir();
    let root = root.map_or_else(|| base.clone(), |r| absolute(&base, r));

    let project = locate_config(&root, &base, config_path)
        .map_or_else(ProjectConfig::default, |path| {
            ProjectConfig::load(&path).unwrap_or_else(|e| panic!("design-lint: {e}"))
        });
    let vocabulary = match project.load_vocabulary(None) {
        Ok(Some(vocabulary)) => Arc::new(vocabulary),
        Ok(None) => default_vocabulary(),
        Err(e) => panic!("design-lint: failed to load vocabulary: {e}"),
    };
    let stats = vocabulary.stats();
    let preset = resolve_preset(preset, &project.config);
    let ProjectConfig {
        config,
        pattern_rules,
        ..
    } = project;
    let mut rules = preset.rules_for_config(vocabulary, &config);
    rules.extend(pattern_rules);

    let analyzer = Analyzer::builder()
        .root(&root)
        .config(config)
        .rules(rules)
        .vocabulary_stats(stats)
        .build()
        .unwrap_or_else(|e| panic!("design-lint: failed to build analyzer: {e}"));

    let report = analyzer
        .analyze()
        .unwrap_or_else(|e| panic!("design-lint: analysis failed: {e}"));

    if !report.is_clean() {
        panic!("{}", report.format_test_report());
    }
}

fn manifest_dir() -> PathBuf {
    std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn absolute(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Finds the config file: explicit path, else the root, else `base`.
fn locate_config(root: &Path, base: &Path, explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(absolute(base, Path::new(path)));
    }
    [root, base].into_iter().find_map(|dir| {
        CONFIG_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
    })
}

/// Resolves the preset: macro argument, then config, then `recommended`.
fn resolve_preset(macro_arg: Option<&str>, config: &Config) -> Preset {
    let name = macro_arg
        .or(config.preset.as_deref())
        .unwrap_or("recommended");

    Preset::from_name(name).unwrap_or_else(|| {
        panic!("design-lint: unknown preset `{name}`. Valid presets: recommended, strict, minimal")
    })
}
