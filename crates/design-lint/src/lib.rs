//! # design-lint
//!
//! Design-system compliance checker for JSX, TSX, TS and CSS sources.
//!
//! This is the facade crate: it re-exports the engine, the built-in rules
//! and a `cargo test` integration.
//!
//! ## Quick Start: `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! design-lint = "0.3"
//! ```
//!
//! ```rust,ignore
//! // tests/design_system.rs
//! design_lint::check!(root = "web/src", preset = "strict");
//! ```
//!
//! The generated test scans the directory and panics with a report when any
//! violation is found. Configure via `design-lint.toml`.
//!
//! ## Suppression Comments
//!
//! ```tsx
//! {/* design-lint: allow(palette-color) reason="brand gradient" */}
//! <div className="bg-rose-500" />
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use design_lint::Analyzer;
//! use design_lint::rules::{default_vocabulary, Preset};
//!
//! let report = Analyzer::builder()
//!     .root("./src")
//!     .rules(Preset::Recommended.rules(default_vocabulary()))
//!     .build()?
//!     .analyze()?;
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use design_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use design_lint_rules::*;
}

mod runner;

#[doc(hidden)]
pub mod __internal {
    pub use crate::runner::{run_check, run_check_with};
}

/// Generates a `#[test]` that fails when the project has violations.
///
/// Accepted keys, all optional: `root` (directory to scan, relative to the
/// crate manifest), `preset` and `config` (path to a `design-lint.toml`).
///
/// ```rust,ignore
/// design_lint::check!();
/// design_lint::check!(root = "frontend", preset = "minimal");
/// ```
#[macro_export]
macro_rules! check {
    ($($key:ident = $value:literal),* $(,)?) => {
        #[test]
        fn design_lint_check() {
            $crate::__internal::run_check_with(&[$((stringify!($key), $value)),*]);
        }
    };
}
