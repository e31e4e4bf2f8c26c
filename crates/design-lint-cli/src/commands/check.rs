//! Check command implementation.

use super::{load_config, load_vocabulary};
use crate::config_resolver::ConfigSource;
use crate::OutputFormat;
use anyhow::{Context, Result};
use design_lint_core::{Analyzer, ProjectConfig, Report, RuleBox};
use design_lint_rules::Preset;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// Arguments of `design-lint check`.
#[derive(Debug, Default)]
pub struct CheckArgs {
    /// Directory to scan.
    pub path: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes.
    pub rules: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Include globs replacing the configured ones.
    pub include: Vec<String>,
    /// Vocabulary file overriding the configured one.
    pub vocabulary: Option<PathBuf>,
    /// Preset overriding the configured one.
    pub preset: Option<String>,
}

/// Runs the check command.
pub fn run(args: &CheckArgs, source: &ConfigSource) -> Result<ExitCode> {
    let report = analyze(args, source)?;
    super::output::print(&report, args.format, &args.path)?;

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Resolves configuration, rules and vocabulary, then scans `args.path`.
pub fn analyze(args: &CheckArgs, source: &ConfigSource) -> Result<Report> {
    let loaded = load_config(source)?;
    let vocabulary = load_vocabulary(args.vocabulary.as_deref(), &loaded)?;
    let stats = vocabulary.stats();

    let preset_name = args
        .preset
        .as_deref()
        .or(loaded.config.preset.as_deref())
        .unwrap_or("recommended");
    let preset = Preset::from_name(preset_name).with_context(|| {
        format!("Unknown preset `{preset_name}`, expected: recommended, strict, minimal")
    })?;

    let ProjectConfig {
        config,
        pattern_rules,
        ..
    } = loaded;

    let mut rules = preset.rules_for_config(vocabulary, &config);
    rules.extend(pattern_rules);
    if let Some(filter) = &args.rules {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        rules = filter_rules(rules, &names);
    }

    let mut builder = Analyzer::builder()
        .root(&args.path)
        .config(config)
        .rules(rules)
        .excludes(args.exclude.iter().cloned())
        .vocabulary_stats(stats);
    for pattern in &args.include {
        builder = builder.include(pattern.clone());
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;
    info!(
        "Analyzing {} with {} rules (preset: {preset})",
        args.path.display(),
        analyzer.rule_count()
    );

    analyzer.analyze().context("Analysis failed")
}

/// Keeps the rules named in `names` (by name or code), in rule order.
fn filter_rules(rules: Vec<RuleBox>, names: &[&str]) -> Vec<RuleBox> {
    for name in names {
        if !rules.iter().any(|r| r.name() == *name || r.code() == *name) {
            warn!("Unknown rule: {name}");
        }
    }
    rules
        .into_iter()
        .filter(|r| names.iter().any(|n| r.name() == *n || r.code() == *n))
        .collect()
}
