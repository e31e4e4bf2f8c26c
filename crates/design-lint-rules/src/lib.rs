//! # design-lint-rules
//!
//! Built-in design-system compliance rules for design-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | DS001 | `palette-color` | Forbids raw palette colors such as `bg-red-500` |
//! | DS002 | `arbitrary-color` | Forbids arbitrary colors such as `bg-[#ff0000]` |
//! | DS003 | `directional-border-color` | Forbids colored side borders (`border-t-gray-200`) |
//! | DS010 | `inline-style` | Forbids inline `style` attributes |
//! | DS020 | `semantic-element` | Forbids raw `<button>`, `<input>`, `<h1>`.. markup |
//! | DS030 | `deprecated-opacity` | Forbids `bg-opacity-50` style utilities |
//! | DS031 | `opacity-tier` | Restricts slash opacity to 20, 40, 60, 80 |
//! | DS040 | `icon-name` | Checks icon names against the icon vocabulary |
//!
//! ## Usage
//!
//! ```ignore
//! use design_lint_core::Analyzer;
//! use design_lint_rules::{palette_color, IconNameRule, default_vocabulary};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(palette_color())
//!     .rule(IconNameRule::new(default_vocabulary()))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod arbitrary_color;
mod deprecated_opacity;
mod directional_border_color;
mod icon_name;
mod inline_style;
mod opacity_tier;
mod palette_color;
mod patterns;
mod presets;
mod semantic_element;

pub use arbitrary_color::arbitrary_color;
pub use deprecated_opacity::deprecated_opacity;
pub use directional_border_color::directional_border_color;
pub use icon_name::IconNameRule;
pub use inline_style::{inline_style, PREDICATES as INLINE_STYLE_PREDICATES};
pub use opacity_tier::opacity_tier;
pub use palette_color::palette_color;
pub use presets::{
    all_rules, default_vocabulary, minimal_rules, recommended_rules, strict_rules, Preset,
};
pub use semantic_element::{semantic_element, PREDICATES as SEMANTIC_ELEMENT_PREDICATES};

/// Re-export core types for convenience.
pub use design_lint_core::{PatternRule, Rule, Severity, Violation};
