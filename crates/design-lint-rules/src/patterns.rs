//! Pattern fragments shared by the color and opacity rules.

/// Utility prefixes that take a color.
pub(crate) const COLOR_PREFIXES: &str =
    "bg|text|border|ring|fill|stroke|outline|divide|from|via|to|placeholder|shadow|decoration|accent|caret";

/// Default Tailwind palette names.
pub(crate) const PALETTE: &str = "slate|gray|zinc|neutral|stone|red|orange|amber|yellow|lime|green|emerald|teal|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose";

/// Palette shades.
pub(crate) const SHADES: &str = "50|100|200|300|400|500|600|700|800|900|950";

/// Opacity tiers the design system ships.
pub(crate) const OPACITY_TIERS: [u16; 4] = [20, 40, 60, 80];

/// What an opacity request becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tier {
    /// A shipped tier.
    Level(u16),
    /// Fully opaque: drop the modifier.
    Opaque,
    /// Fully transparent: use the `transparent` color.
    Transparent,
}

/// Hand-curated rounding of opacity requests to shipped tiers.
///
/// Not nearest-tier rounding: 50 and 55 go up, 90 and 95 collapse to 80.
const ROUNDING: [(u16, Tier); 21] = [
    (0, Tier::Transparent),
    (5, Tier::Level(20)),
    (10, Tier::Level(20)),
    (15, Tier::Level(20)),
    (20, Tier::Level(20)),
    (25, Tier::Level(20)),
    (30, Tier::Level(40)),
    (35, Tier::Level(40)),
    (40, Tier::Level(40)),
    (45, Tier::Level(40)),
    (50, Tier::Level(60)),
    (55, Tier::Level(60)),
    (60, Tier::Level(60)),
    (65, Tier::Level(60)),
    (70, Tier::Level(80)),
    (75, Tier::Level(80)),
    (80, Tier::Level(80)),
    (85, Tier::Level(80)),
    (90, Tier::Level(80)),
    (95, Tier::Level(80)),
    (100, Tier::Opaque),
];

/// Looks up the tier for an opacity percentage.
///
/// Values missing from the table (e.g. `33`) have no tier.
pub(crate) fn tier_for(value: &str) -> Option<Tier> {
    let value: u16 = value.parse().ok()?;
    ROUNDING
        .iter()
        .find(|(requested, _)| *requested == value)
        .map(|(_, tier)| *tier)
}
