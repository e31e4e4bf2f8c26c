//! List rules command implementation.

use design_lint_rules::{all_rules, default_vocabulary};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<26} {:<18} Description", "Code", "Name", "Category");
    println!("{}", "-".repeat(100));

    for rule in all_rules(default_vocabulary()) {
        println!(
            "{:<8} {:<26} {:<18} {}",
            rule.code(),
            rule.name(),
            rule.category(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - All rules at their default severity (default)");
    println!("  strict       - All rules, warnings promoted to errors");
    println!("  minimal      - DS001, DS010 (for gradual adoption)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  design-lint check --rules palette-color,inline-style");
    println!("  design-lint check --rules DS001,DS010,DS040");
    println!("\nDeclare project rules with [[pattern-rules]] in design-lint.toml.");
}
