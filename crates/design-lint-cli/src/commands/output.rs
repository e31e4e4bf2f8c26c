//! Report rendering for the check command.

use anyhow::Result;
use design_lint_core::{Report, Severity, ViolationDiagnostic};
use miette::GraphicalReportHandler;
use std::fmt::Write;
use std::path::Path;

use crate::OutputFormat;

/// Prints `report` to stdout in the requested format.
///
/// `root` is the scan root; rich output reads violation sources from it.
pub fn print(report: &Report, format: OutputFormat, root: &Path) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Compact => render_compact(report),
        OutputFormat::Json => render_json(report)?,
        OutputFormat::Rich => render_rich(report, root, &GraphicalReportHandler::new())?,
    };
    print!("{rendered}");
    Ok(())
}

fn render_text(report: &Report) -> String {
    let (errors, warnings, infos) = report.count_by_severity();
    let mut out = String::new();

    for violation in report.violations() {
        let severity = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };
        let _ = writeln!(
            out,
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        let _ = writeln!(out, "  {severity}: {}", violation.message);
        let _ = writeln!(out, "  = found: {}", violation.matched_text);
        if let Some(suggestion) = &violation.suggestion {
            let _ = writeln!(out, "  = help: {suggestion}");
        }
        out.push('\n');
    }

    for skipped in &report.skipped {
        let _ = writeln!(
            out,
            "\x1b[33mskipped\x1b[0m {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    let _ = writeln!(
        out,
        "{summary_color}Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s)\x1b[0m",
        report.files_checked
    );
    if let Some(vocabulary) = report.vocabulary {
        let _ = writeln!(
            out,
            "Icon vocabulary: {} names in {} categories",
            vocabulary.entries, vocabulary.categories
        );
    }
    out
}

fn render_compact(report: &Report) -> String {
    report.violations().fold(String::new(), |mut out, v| {
        let _ = writeln!(out, "{v}");
        out
    })
}

fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

fn render_rich(report: &Report, root: &Path, handler: &GraphicalReportHandler) -> Result<String> {
    let mut out = String::new();
    let mut source: Option<(&Path, Option<String>)> = None;

    for violation in report.violations() {
        let file = violation.location.file.as_path();
        if source.as_ref().map(|(path, _)| *path) != Some(file) {
            source = Some((file, std::fs::read_to_string(root.join(file)).ok()));
        }
        match source.as_ref().and_then(|(_, content)| content.clone()) {
            Some(content) => {
                let diagnostic = ViolationDiagnostic::new(violation, content);
                handler.render_report(&mut out, &diagnostic)?;
            }
            None => out.push_str(&violation.format()),
        }
        out.push('\n');
    }

    let (errors, warnings, infos) = report.count_by_severity();
    let _ = writeln!(
        out,
        "Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s)",
        report.files_checked
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_lint_core::{Location, Violation};
    use std::path::PathBuf;

    fn report() -> Report {
        let mut report = Report::new();
        report.push_file(
            PathBuf::from("src/App.tsx"),
            vec![Violation::new(
                "DS001",
                "palette-color",
                "hardcoded-color",
                Severity::Error,
                Location::new(PathBuf::from("src/App.tsx"), 1, 17).with_span(16, 8),
                "bg-white",
                "Hardcoded palette color; use a color-role token",
            )
            .with_suggestion("bg-background")],
        );
        report.push_file(
            PathBuf::from("src/Card.tsx"),
            vec![Violation::new(
                "DS031",
                "opacity-tier",
                "opacity-syntax",
                Severity::Warning,
                Location::new(PathBuf::from("src/Card.tsx"), 3, 20),
                "text-primary/50",
                "Opacity modifier outside the available tiers (20, 40, 60, 80)",
            )],
        );
        report.push_file(PathBuf::from("src/Clean.tsx"), Vec::new());
        report
    }

    #[test]
    fn compact_output() {
        insta::assert_snapshot!(render_compact(&report()), @r"
        src/App.tsx:1:17: error [DS001] Hardcoded palette color; use a color-role token (suggestion: bg-background)
        src/Card.tsx:3:20: warning [DS031] Opacity modifier outside the available tiers (20, 40, 60, 80)
        ");
    }

    #[test]
    fn text_output_has_summary() {
        let text = render_text(&report());
        assert!(text.contains("DS001 palette-color at src/App.tsx:1:17"));
        assert!(text.contains("= help: bg-background"));
        assert!(text.contains("Found 1 error(s), 1 warning(s), 0 info(s) in 3 file(s)"));
    }

    #[test]
    fn json_output_is_parseable() {
        let json = render_json(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["clean"], false);
        assert_eq!(value["files_checked"], 3);
        assert_eq!(value["total_violations"], 2);
        assert_eq!(value["files"][0]["violations"][0]["suggestion"], "bg-background");
        assert_eq!(value["files"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn rich_output_shows_source_and_help() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(
            dir.path().join("src/App.tsx"),
            "<div className=\"bg-white p-4\" />\n",
        )
        .unwrap();

        let handler = GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor());
        let out = render_rich(&report(), dir.path(), &handler).unwrap();
        assert!(out.contains("[DS001] Hardcoded palette color"));
        assert!(out.contains("bg-background"));
        assert!(out.contains("className=\"bg-white p-4\""));
        assert!(out.contains("palette-color"));
        assert!(out.contains("DS031 opacity-tier at src/Card.tsx:3:20"));
    }
}
