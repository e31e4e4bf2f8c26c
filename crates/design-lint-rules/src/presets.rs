//! Rule presets for common configurations.

use crate::{
    arbitrary_color, deprecated_opacity, directional_border_color, inline_style, opacity_tier,
    palette_color, semantic_element, IconNameRule,
};
use design_lint_core::{Config, PatternRule, RuleBox, Severity, Vocabulary};
use std::sync::{Arc, LazyLock};

static DEFAULT_VOCABULARY: LazyLock<Arc<Vocabulary>> = LazyLock::new(|| {
    Arc::new(
        Vocabulary::parse_toml(include_str!("../data/icons.toml"), "embedded icons.toml")
            .unwrap_or_else(|e| unreachable!("embedded vocabulary: {e}")),
    )
});

/// Returns the icon vocabulary embedded in this crate.
#[must_use]
pub fn default_vocabulary() -> Arc<Vocabulary> {
    Arc::clone(&DEFAULT_VOCABULARY)
}

/// Preset configurations for design-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every built-in rule at its default severity.
    Recommended,
    /// Every built-in rule, warnings promoted to errors.
    Strict,
    /// Palette colors and inline styles only, for gradual adoption.
    Minimal,
}

impl Preset {
    /// All presets, in documentation order.
    pub const ALL: [Self; 3] = [Self::Recommended, Self::Strict, Self::Minimal];

    /// Returns the preset name used in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
            Self::Minimal => "minimal",
        }
    }

    /// Looks up a preset by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self, vocabulary: Arc<Vocabulary>) -> Vec<RuleBox> {
        self.rules_for_config(vocabulary, &Config::default())
    }

    /// Returns the rules for this preset with rule options from `config`.
    ///
    /// Only rule options are read here; enablement and severity overrides are
    /// applied by the analyzer.
    #[must_use]
    pub fn rules_for_config(self, vocabulary: Arc<Vocabulary>, config: &Config) -> Vec<RuleBox> {
        let icon = IconNameRule::from_config(vocabulary, config.rule_config(crate::icon_name::NAME));
        match self {
            Self::Recommended => boxed(pattern_rules(), icon),
            Self::Strict => boxed(
                pattern_rules()
                    .into_iter()
                    .map(|r| r.with_severity(Severity::Error))
                    .collect(),
                icon.with_severity(Severity::Error),
            ),
            Self::Minimal => minimal_rules(),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn pattern_rules() -> Vec<PatternRule> {
    vec![
        palette_color(),
        arbitrary_color(),
        directional_border_color(),
        inline_style(),
        semantic_element(),
        deprecated_opacity(),
        opacity_tier(),
    ]
}

fn boxed(rules: Vec<PatternRule>, icon: IconNameRule) -> Vec<RuleBox> {
    rules
        .into_iter()
        .map(|r| Box::new(r) as RuleBox)
        .chain(std::iter::once(Box::new(icon) as RuleBox))
        .collect()
}

/// Returns the recommended set of rules.
///
/// Every built-in rule at its default severity:
/// - `palette-color` (DS001), `arbitrary-color` (DS002)
/// - `directional-border-color` (DS003)
/// - `inline-style` (DS010), `semantic-element` (DS020)
/// - `deprecated-opacity` (DS030), `opacity-tier` (DS031)
/// - `icon-name` (DS040)
#[must_use]
pub fn recommended_rules(vocabulary: Arc<Vocabulary>) -> Vec<RuleBox> {
    Preset::Recommended.rules(vocabulary)
}

/// Returns the strict set of rules: all rules, all errors.
#[must_use]
pub fn strict_rules(vocabulary: Arc<Vocabulary>) -> Vec<RuleBox> {
    Preset::Strict.rules(vocabulary)
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes:
/// - `palette-color` (DS001)
/// - `inline-style` (DS010)
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![Box::new(palette_color()), Box::new(inline_style())]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules(vocabulary: Arc<Vocabulary>) -> Vec<RuleBox> {
    boxed(pattern_rules(), IconNameRule::new(vocabulary))
}
