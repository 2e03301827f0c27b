//! Unit stat types.
//!
//! Stats exist in two forms: `UnitStats` is the boundary form (crit
//! fields entered and persisted as percentages), `StatBlock` is the
//! normalized form the engine computes with (crit chance in [0, 1],
//! crit damage as a plain multiplier).

use crate::error::DpsError;
use serde::{Deserialize, Serialize};

/// A unit's base combat stats in normalized form.
///
/// This is the engine's working representation. `crit_chance` lives in
/// [0, 1] and `crit_damage_multiplier` is a factor (1.75 means crits
/// deal 1.75× base damage).
///
/// # Examples
///
/// ```rust
/// use dpstier::StatBlock;
///
/// // Percent-form inputs are normalized at construction.
/// let stats = StatBlock::from_percent(145.0, 0.04, 30.0, 175.0);
/// assert_eq!(stats.crit_chance, 0.30);
/// assert_eq!(stats.crit_damage_multiplier, 1.75);
/// assert!(stats.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Base damage dealt per hit.
    pub base_damage: f64,

    /// Seconds between attacks. Lower is faster.
    pub attack_interval: f64,

    /// Probability of a critical hit, in [0, 1].
    pub crit_chance: f64,

    /// Damage multiplier applied on a critical hit.
    pub crit_damage_multiplier: f64,
}

impl StatBlock {
    /// Create a stat block from already-normalized values.
    pub fn new(
        base_damage: f64,
        attack_interval: f64,
        crit_chance: f64,
        crit_damage_multiplier: f64,
    ) -> Self {
        Self {
            base_damage,
            attack_interval,
            crit_chance,
            crit_damage_multiplier,
        }
    }

    /// Create a stat block from boundary-form values, where both crit
    /// fields are percentages (30.0 means 30%, 175.0 means 1.75×).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dpstier::StatBlock;
    ///
    /// let stats = StatBlock::from_percent(145.0, 0.04, 30.0, 175.0);
    /// assert_eq!(stats.base_damage, 145.0);
    /// assert_eq!(stats.crit_chance, 0.30);
    /// ```
    pub fn from_percent(dmg: f64, atk_speed: f64, crit_chance_pct: f64, crit_dmg_pct: f64) -> Self {
        Self {
            base_damage: dmg,
            attack_interval: atk_speed,
            crit_chance: crit_chance_pct / 100.0,
            crit_damage_multiplier: crit_dmg_pct / 100.0,
        }
    }

    /// Check every field against its allowed range.
    ///
    /// Damage, interval, and crit damage multiplier must be strictly
    /// positive; crit chance must lie in [0, 1] (zero is allowed).
    /// Violations are reported, never clamped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dpstier::{DpsError, StatBlock};
    ///
    /// let stats = StatBlock::new(100.0, 0.5, 1.2, 2.0);
    /// assert_eq!(stats.validate(), Err(DpsError::CritChanceOutOfRange(1.2)));
    /// ```
    pub fn validate(&self) -> Result<(), DpsError> {
        if self.base_damage <= 0.0 {
            return Err(DpsError::NonPositiveDamage(self.base_damage));
        }
        if self.attack_interval <= 0.0 {
            return Err(DpsError::NonPositiveInterval(self.attack_interval));
        }
        if !(0.0..=1.0).contains(&self.crit_chance) {
            return Err(DpsError::CritChanceOutOfRange(self.crit_chance));
        }
        if self.crit_damage_multiplier <= 0.0 {
            return Err(DpsError::NonPositiveCritDamage(self.crit_damage_multiplier));
        }
        Ok(())
    }
}

/// A unit's stats in the form presets are entered and persisted in.
///
/// Field names match the preset file format. `crit_chance` and
/// `crit_dmg` are percentages. Missing fields default to 0.0 on load,
/// so partial preset entries still deserialize.
///
/// # Examples
///
/// ```rust
/// use dpstier::UnitStats;
///
/// let partial: UnitStats = serde_json::from_str(r#"{ "dmg": 80.0 }"#).unwrap();
/// assert_eq!(partial.dmg, 80.0);
/// assert_eq!(partial.atk_speed, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitStats {
    /// Base damage per hit.
    #[serde(default)]
    pub dmg: f64,

    /// Seconds between attacks.
    #[serde(default)]
    pub atk_speed: f64,

    /// Critical hit chance as a percentage (0–100).
    #[serde(default)]
    pub crit_chance: f64,

    /// Critical damage multiplier as a percentage (175 = 1.75×).
    #[serde(default)]
    pub crit_dmg: f64,
}

impl UnitStats {
    /// Create unit stats from boundary-form values.
    pub fn new(dmg: f64, atk_speed: f64, crit_chance: f64, crit_dmg: f64) -> Self {
        Self {
            dmg,
            atk_speed,
            crit_chance,
            crit_dmg,
        }
    }

    /// Normalize into the engine's working form.
    pub fn to_stat_block(self) -> StatBlock {
        StatBlock::from_percent(self.dmg, self.atk_speed, self.crit_chance, self.crit_dmg)
    }
}

impl From<UnitStats> for StatBlock {
    fn from(stats: UnitStats) -> Self {
        stats.to_stat_block()
    }
}

impl From<StatBlock> for UnitStats {
    fn from(stats: StatBlock) -> Self {
        Self {
            dmg: stats.base_damage,
            atk_speed: stats.attack_interval,
            crit_chance: stats.crit_chance * 100.0,
            crit_dmg: stats.crit_damage_multiplier * 100.0,
        }
    }
}
