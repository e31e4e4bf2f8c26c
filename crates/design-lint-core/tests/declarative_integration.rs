//! Integration test: declarative rules end-to-end via Analyzer.
//!
//! Builds a small project on disk and verifies that the full
//! TOML → DTO → `PatternRule` → Analyzer pipeline reports what it should.

use design_lint_core::declarative;
use design_lint_core::{Analyzer, Config, RuleBox, Severity};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG: &str = r#"
[analyzer]
include = ["**/*.tsx", "**/*.css"]
exclude = ["**/vendor/**"]

[rules.no-important]
severity = "info"

[[pattern-rules]]
name = "no-important"
code = "DSX001"
category = "important-modifier"
pattern = "!\\w+-\\w+"
exclude = "^!important-ok$"
message = "Avoid the important modifier."
suggestion = "Increase specificity via a variant instead."
severity = "warning"

[[pattern-rules]]
name = "no-arbitrary-z"
code = "DSX002"
category = "layering"
pattern = "z-\\[\\d+\\]"
message = "Arbitrary z-index."
"#;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn load_config_and_rules(toml_content: &str) -> (Config, Vec<RuleBox>) {
    let config = Config::parse(toml_content).expect("config should parse");
    let rules = declarative::load_rules_from_toml(toml_content).expect("rules should load");
    (config, rules)
}

// ── Happy-path: detects expected violations ──

#[test]
fn detects_declared_patterns() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "src/Modal.tsx",
        "<div className=\"!mt-4 z-[999]\">\n  <p className=\"!important-ok\" />\n</div>\n",
    );
    write(dir.path(), "src/Card.tsx", "<div className=\"mt-4 z-overlay\" />\n");
    write(dir.path(), "vendor/lib.tsx", "<div className=\"z-[1]\" />\n");

    let (config, rules) = load_config_and_rules(CONFIG);
    let report = Analyzer::builder()
        .root(dir.path())
        .config(config)
        .rules(rules)
        .build()
        .expect("analyzer should build")
        .analyze()
        .expect("analysis should succeed");

    assert_eq!(report.files_checked, 2);
    assert_eq!(
        report.total_violations(),
        2,
        "unexpected violations: {:#?}",
        report.violations().collect::<Vec<_>>()
    );

    let violations = report
        .violations_for(Path::new("src/Modal.tsx"))
        .expect("Modal.tsx should have violations");
    assert_eq!(violations[0].code, "DSX001");
    assert_eq!(violations[0].matched_text, "!mt-4");
    assert_eq!(violations[0].severity, Severity::Info);
    assert_eq!(
        violations[0].suggestion.as_deref(),
        Some("Increase specificity via a variant instead.")
    );
    assert_eq!(violations[1].code, "DSX002");
    assert_eq!(violations[1].severity, Severity::Error);
    assert_eq!(violations[1].location.line, 1);
    assert_eq!(violations[1].location.column, 23);
}

#[test]
fn allow_comment_suppresses_declared_rule() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "Toast.tsx",
        "{/* design-lint: allow(no-arbitrary-z) reason=\"third-party overlay\" */}\n<div className=\"z-[60]\" />\n",
    );

    let (config, rules) = load_config_and_rules(CONFIG);
    let report = Analyzer::builder()
        .root(dir.path())
        .config(config)
        .rules(rules)
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    assert!(report.is_clean());
    assert!(report.files().is_empty());
    assert_eq!(report.files_checked, 1);
}

// ── Error cases ──

#[test]
fn invalid_pattern_is_a_configuration_error() {
    let toml = r#"
[[pattern-rules]]
name = "broken"
code = "X"
category = "c"
pattern = "[unclosed"
"#;
    let Err(err) = declarative::load_rules_from_toml(toml) else {
        panic!("an unclosed character class should be rejected");
    };
    assert!(err.to_string().contains("broken"));
}

#[test]
fn reports_are_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a", "b", "c"] {
        write(dir.path(), &format!("{name}.tsx"), "z-[1] !p-2 z-[2]");
    }
    let run = || {
        let (config, rules) = load_config_and_rules(CONFIG);
        Analyzer::builder()
            .root(dir.path())
            .config(config)
            .rules(rules)
            .build()
            .unwrap()
            .analyze()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert_eq!(first.files(), second.files());
    let paths: Vec<PathBuf> = first.files().iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        paths,
        vec![PathBuf::from("a.tsx"), PathBuf::from("b.tsx"), PathBuf::from("c.tsx")]
    );
}
