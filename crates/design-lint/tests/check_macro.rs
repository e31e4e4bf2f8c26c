//! Integration test for the `design_lint::check!()` macro.
//!
//! Runs the full pipeline (config load, preset, pattern rules, analysis)
//! over a clean fixture project.

design_lint::check!(
    root = "tests/fixtures/clean",
    config = "tests/fixtures/clean/design-lint.toml",
);
