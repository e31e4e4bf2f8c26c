//! Pattern scanner: finds rule matches in a file's text.

use crate::classifier::Decision;
use crate::context::LineIndex;
use crate::rule::{PatternRule, Rule};
use crate::types::{Location, Violation};
use std::path::Path;

/// Scans `content` with every rule and returns all matches.
///
/// Matches are grouped by rule (in rule order), then by position. Each rule
/// reports every non-overlapping match of its pattern; a match is dropped when
/// its text satisfies the rule's exclusion pattern or when the rule's
/// classifier allows it. Overlapping matches from different rules are all
/// kept.
#[must_use]
pub fn scan(rules: &[PatternRule], path: &Path, content: &str) -> Vec<Violation> {
    let lines = LineIndex::new(content);
    let mut violations = Vec::new();

    for rule in rules {
        for m in rule.pattern().find_iter(content) {
            if m.as_str().is_empty() || rule.is_excluded(m.as_str()) {
                continue;
            }
            if let Some(classifier) = rule.classifier() {
                if classifier.classify(content, m.start(), m.end()) == Decision::Allow {
                    continue;
                }
            }

            let (line, column) = lines.position(m.start());
            let location =
                Location::new(path.to_path_buf(), line, column).with_span(m.start(), m.len());
            violations.push(
                Violation::new(
                    rule.code(),
                    rule.name(),
                    rule.category(),
                    rule.default_severity(),
                    location,
                    m.as_str(),
                    rule.description(),
                )
                .with_suggestion(rule.suggest(m.as_str())),
            );
        }
    }

    violations
}
