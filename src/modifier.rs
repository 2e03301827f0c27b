//! Stat modifiers and the fixed catalog.
//!
//! A modifier is a named, immutable transform on one stat field. The
//! catalog is static configuration: nine entries, never mutated at
//! runtime, in a fixed order that also serves as the sort tie-break.

use std::fmt;

/// The stat field a modifier touches and how it combines.
///
/// # Examples
///
/// ```rust
/// use dpstier::ModifierKind;
///
/// // Multiplies base damage by (1 + magnitude).
/// let dmg = ModifierKind::DamageMult;
///
/// // Adds to crit chance, hard-capped at 100%.
/// let crit = ModifierKind::CritChanceAdd;
/// # let _ = (dmg, crit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    /// Multiplies base damage by `(1 + magnitude)`.
    DamageMult,

    /// Multiplies the attack interval by `(1 - magnitude)`.
    CooldownReduction,

    /// Adds `magnitude` to crit chance, clamped to [0, 1].
    CritChanceAdd,

    /// Adds `magnitude` to the crit damage multiplier, uncapped.
    CritDamageAdd,
}

/// A named, catalog-fixed stat transform.
///
/// Modifiers are independent and non-stacking: the engine applies each
/// one in isolation to a fresh copy of the base stats.
///
/// # Examples
///
/// ```rust
/// use dpstier::{Modifier, ModifierKind};
///
/// let powerful = Modifier::new("Powerful", ModifierKind::DamageMult, 0.50);
/// assert_eq!(powerful.to_string(), "Powerful (+50% damage)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifier {
    /// Display label, unique within the catalog.
    pub name: &'static str,

    /// Which stat field this modifier touches.
    pub kind: ModifierKind,

    /// Fractional effect size (0.50 for +50%).
    pub magnitude: f64,
}

impl Modifier {
    /// Create a modifier. `const` so catalogs can be static tables.
    pub const fn new(name: &'static str, kind: ModifierKind, magnitude: f64) -> Self {
        Self {
            name,
            kind,
            magnitude,
        }
    }
}

impl fmt::Display for Modifier {
    /// Render the annotated label shown in result tables,
    /// e.g. `Lightning (-35% cooldown)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = self.magnitude * 100.0;
        match self.kind {
            ModifierKind::DamageMult => write!(f, "{} (+{:.0}% damage)", self.name, pct),
            ModifierKind::CooldownReduction => write!(f, "{} (-{:.0}% cooldown)", self.name, pct),
            ModifierKind::CritChanceAdd => write!(f, "{} (+{:.0}% crit chance)", self.name, pct),
            ModifierKind::CritDamageAdd => write!(f, "{} (+{:.0}% crit dmg)", self.name, pct),
        }
    }
}

/// The fixed modifier catalog.
///
/// Order matters only as the tie-break when two modifiers produce the
/// exact same DPS.
pub const CATALOG: [Modifier; 9] = [
    Modifier::new("Powerful", ModifierKind::DamageMult, 0.50),
    Modifier::new("Lightning", ModifierKind::CooldownReduction, 0.35),
    Modifier::new("Executor", ModifierKind::CritDamageAdd, 0.60),
    Modifier::new("Assassin", ModifierKind::CritChanceAdd, 0.35),
    Modifier::new("Trickster", ModifierKind::CooldownReduction, 0.20),
    Modifier::new("BodyBuilder", ModifierKind::DamageMult, 0.25),
    Modifier::new("Accurate", ModifierKind::CritChanceAdd, 0.20),
    Modifier::new("Strong", ModifierKind::DamageMult, 0.10),
    Modifier::new("Fast", ModifierKind::CooldownReduction, 0.10),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_nine_unique_names() {
        let names: HashSet<&str> = CATALOG.iter().map(|m| m.name).collect();
        assert_eq!(CATALOG.len(), 9);
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn test_catalog_order_is_fixed() {
        assert_eq!(CATALOG[0].name, "Powerful");
        assert_eq!(CATALOG[8].name, "Fast");
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(CATALOG[0].to_string(), "Powerful (+50% damage)");
        assert_eq!(CATALOG[1].to_string(), "Lightning (-35% cooldown)");
        assert_eq!(CATALOG[2].to_string(), "Executor (+60% crit dmg)");
        assert_eq!(CATALOG[3].to_string(), "Assassin (+35% crit chance)");
    }
}
