//! Rule to forbid static inline style objects.
//!
//! # Rationale
//!
//! Static `style={{ ... }}` objects and `style="..."` strings hard-code
//! values that belong in utility classes. Each declaration is mapped to its
//! utility where one is known: `style={{ color: "var(--foreground)" }}`
//! suggests `text-foreground`.
//!
//! # Allowed Patterns
//!
//! Dynamic styles are runtime values and are not reported: template
//! interpolation, conditionals, `&&`/`||`, spreads and bare identifiers as
//! values.
//!
//! `style = ...` outside attribute position is script, not markup:
//! `const style = "compact"`, `el.style = "..."` and default parameters are
//! skipped.
//!
//! # Suppression
//!
//! - `{/* design-lint: allow(inline-style) reason="..." */}` comment

use design_lint_core::{
    Classifier, ContextPredicate, ContextWindow, PatternRule, Severity, SuggestionStrategy,
    SuggestionTable,
};
use std::sync::{Arc, LazyLock};

/// Rule code for inline-style.
pub const CODE: &str = "DS010";

/// Rule name for inline-style.
pub const NAME: &str = "inline-style";

/// Declaration → utility table; keys are normalized `property: value`.
static DECLARATIONS: &[(&str, &str)] = &[
    ("color: \"var(--foreground)\"", "text-foreground"),
    ("color: \"var(--muted-foreground)\"", "text-muted-foreground"),
    ("color: \"var(--primary)\"", "text-primary"),
    ("color: \"var(--primary-foreground)\"", "text-primary-foreground"),
    ("color: \"var(--destructive)\"", "text-destructive"),
    ("backgroundColor: \"var(--background)\"", "bg-background"),
    ("backgroundColor: \"var(--primary)\"", "bg-primary"),
    ("backgroundColor: \"var(--secondary)\"", "bg-secondary"),
    ("backgroundColor: \"var(--muted)\"", "bg-muted"),
    ("backgroundColor: \"var(--card)\"", "bg-card"),
    ("borderColor: \"var(--border)\"", "border-border"),
    ("display: \"flex\"", "flex"),
    ("display: \"grid\"", "grid"),
    ("display: \"block\"", "block"),
    ("display: \"inline\"", "inline"),
    ("display: \"none\"", "hidden"),
    ("flexDirection: \"column\"", "flex-col"),
    ("flexDirection: \"row\"", "flex-row"),
    ("flexWrap: \"wrap\"", "flex-wrap"),
    ("alignItems: \"center\"", "items-center"),
    ("justifyContent: \"center\"", "justify-center"),
    ("justifyContent: \"space-between\"", "justify-between"),
    ("textAlign: \"center\"", "text-center"),
    ("fontWeight: \"bold\"", "font-bold"),
    ("fontWeight: 500", "font-medium"),
    ("fontWeight: 600", "font-semibold"),
    ("fontWeight: 700", "font-bold"),
    ("position: \"relative\"", "relative"),
    ("position: \"absolute\"", "absolute"),
    ("position: \"sticky\"", "sticky"),
    ("width: \"100%\"", "w-full"),
    ("height: \"100%\"", "h-full"),
    ("overflow: \"hidden\"", "overflow-hidden"),
    ("cursor: \"pointer\"", "cursor-pointer"),
    ("margin: 0", "m-0"),
    ("padding: 0", "p-0"),
    ("margin: \"0 auto\"", "mx-auto"),
    ("padding: \"8px\"", "p-2"),
    ("padding: \"16px\"", "p-4"),
    ("gap: \"8px\"", "gap-2"),
];

static SUGGESTIONS: LazyLock<Arc<SuggestionTable>> = LazyLock::new(|| {
    Arc::new(SuggestionTable::new().declarations(DECLARATIONS.iter().copied()))
});

/// Predicates that mark a `style = ...` match as a script binding.
pub const PREDICATES: [ContextPredicate; 1] =
    [ContextPredicate::new("script-binding", is_script_binding)];

fn is_script_binding(window: &ContextWindow<'_>) -> bool {
    let before = window.before.trim_end();
    if before.ends_with(['.', '(', ',']) {
        return true;
    }
    let last_word = before
        .rsplit(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .next()
        .unwrap_or_default();
    matches!(last_word, "const" | "let" | "var")
}

static RULE: LazyLock<PatternRule> = LazyLock::new(|| {
    PatternRule::builder(CODE, NAME, "inline-style")
        .pattern(r#"\bstyle\s*=\s*(?:\{\{[^}]*\}\}|"[^"]*"|'[^']*')"#)
        .exclusion(r"\$\{|\?|&&|\|\||\.\.\.|\{\{[^}]*?:\s*[A-Za-z_$][\w$]*(?:\.[\w$]+)*\s*(?:,|\}\})")
        .classifier(Classifier::new(PREDICATES.to_vec()))
        .description("Inline style; move the declarations to utility classes")
        .severity(Severity::Warning)
        .suggestion(SuggestionStrategy::Lookup(Arc::clone(&SUGGESTIONS)))
        .build()
        .unwrap_or_else(|e| unreachable!("built-in rule {NAME}: {e}"))
});

/// Returns the inline-style rule.
#[must_use]
pub fn inline_style() -> PatternRule {
    RULE.clone()
}
