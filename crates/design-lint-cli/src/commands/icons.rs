//! Icon vocabulary commands.

use design_lint_core::Vocabulary;

/// Prints vocabulary names close to `name`.
pub fn search(vocabulary: &Vocabulary, name: &str, max_distance: usize) {
    print!("{}", render_search(vocabulary, name, max_distance));
}

/// Prints vocabulary statistics.
pub fn stats(vocabulary: &Vocabulary) {
    print!("{}", render_stats(vocabulary));
}

fn render_search(vocabulary: &Vocabulary, name: &str, max_distance: usize) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(category) = vocabulary.category_of(name) {
        let _ = writeln!(out, "'{name}' is a known icon ({category})");
        return out;
    }

    let closest = vocabulary.closest(name, max_distance);
    if !closest.is_empty() {
        let _ = writeln!(out, "'{name}' is not a known icon. Closest names:");
        for candidate in closest {
            let _ = writeln!(out, "  {:<28} distance {}", candidate.name, candidate.distance);
        }
        return out;
    }

    let partial = vocabulary.partial(name);
    if partial.is_empty() {
        let _ = writeln!(out, "'{name}' is not a known icon. No similar names found.");
    } else {
        let _ = writeln!(out, "'{name}' is not a known icon. Similar names:");
        for entry in partial {
            let _ = writeln!(out, "  {entry}");
        }
    }
    out
}

fn render_stats(vocabulary: &Vocabulary) -> String {
    use std::fmt::Write;
    let stats = vocabulary.stats();
    let mut out = format!(
        "{} icon names in {} categories\n",
        stats.entries, stats.categories
    );
    for category in vocabulary.categories() {
        let count = vocabulary
            .entries()
            .iter()
            .filter(|e| &e.category == category)
            .count();
        let _ = writeln!(out, "  {category:<16} {count}");
    }
    out
}
