//! The DPS formulas.
//!
//! Everything here is a pure function of its inputs: same stats in,
//! same numbers out. Stats are validated strictly before any
//! arithmetic; nothing is clamped on the way in.

use crate::error::DpsError;
use crate::modifier::{Modifier, ModifierKind};
use crate::stats::StatBlock;

/// The unmodified unit's DPS, with and without crits factored in.
///
/// The with-crit figure is the baseline every modified result is
/// compared against.
///
/// # Examples
///
/// ```rust
/// use dpstier::{compute_baseline, StatBlock};
///
/// let stats = StatBlock::from_percent(145.0, 0.04, 30.0, 175.0);
/// let baseline = compute_baseline(&stats).unwrap();
/// assert_eq!(baseline.dps_no_crit, 3625.0);
/// assert_eq!(baseline.dps_with_crit, 4440.625);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    /// Raw damage throughput, ignoring crits entirely.
    pub dps_no_crit: f64,

    /// Expected damage throughput with crit chance and crit damage
    /// folded in per attack.
    pub dps_with_crit: f64,
}

/// Attacks per second for a stat block.
///
/// Reports a zero interval as its own condition rather than a generic
/// validation failure; callers that validate first never reach it.
fn attacks_per_second(stats: &StatBlock) -> Result<f64, DpsError> {
    if stats.attack_interval == 0.0 {
        return Err(DpsError::ZeroAttackInterval);
    }
    Ok(1.0 / stats.attack_interval)
}

/// Expected DPS with crit chance and crit damage folded in.
///
/// This is the only formula modified stat blocks are evaluated with;
/// a per-modifier no-crit figure is deliberately never produced.
pub(crate) fn crit_adjusted_dps(stats: &StatBlock) -> Result<f64, DpsError> {
    let aps = attacks_per_second(stats)?;
    let crit_hit_damage = stats.base_damage * stats.crit_damage_multiplier;
    let expected_damage_per_attack =
        (1.0 - stats.crit_chance) * stats.base_damage + stats.crit_chance * crit_hit_damage;
    Ok(expected_damage_per_attack * aps)
}

/// Compute the unmodified unit's DPS figures.
///
/// Fails with a validation error when any stat is out of range; see
/// [`StatBlock::validate`].
///
/// # Examples
///
/// ```rust
/// use dpstier::{compute_baseline, DpsError, StatBlock};
///
/// let bad = StatBlock::new(0.0, 0.5, 0.3, 1.75);
/// assert_eq!(compute_baseline(&bad), Err(DpsError::NonPositiveDamage(0.0)));
/// ```
pub fn compute_baseline(stats: &StatBlock) -> Result<Baseline, DpsError> {
    stats.validate()?;
    let aps = attacks_per_second(stats)?;
    Ok(Baseline {
        dps_no_crit: stats.base_damage * aps,
        dps_with_crit: crit_adjusted_dps(stats)?,
    })
}

/// Apply one modifier to a fresh copy of the stats.
///
/// The input is never mutated. Crit chance is the only field with a
/// cap: additive crit chance clamps to [0, 1]. Crit damage is additive
/// and uncapped.
///
/// # Examples
///
/// ```rust
/// use dpstier::{apply_modifier, Modifier, ModifierKind, StatBlock};
///
/// let stats = StatBlock::new(100.0, 0.5, 0.90, 2.0);
/// let assassin = Modifier::new("Assassin", ModifierKind::CritChanceAdd, 0.35);
///
/// let modified = apply_modifier(&stats, &assassin);
/// assert_eq!(modified.crit_chance, 1.0); // capped, not 1.25
/// assert_eq!(stats.crit_chance, 0.90); // original untouched
/// ```
pub fn apply_modifier(stats: &StatBlock, modifier: &Modifier) -> StatBlock {
    let mut out = *stats;
    match modifier.kind {
        ModifierKind::DamageMult => out.base_damage *= 1.0 + modifier.magnitude,
        ModifierKind::CooldownReduction => out.attack_interval *= 1.0 - modifier.magnitude,
        ModifierKind::CritChanceAdd => {
            out.crit_chance = (out.crit_chance + modifier.magnitude).clamp(0.0, 1.0)
        }
        ModifierKind::CritDamageAdd => out.crit_damage_multiplier += modifier.magnitude,
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medusa() -> StatBlock {
        StatBlock::from_percent(145.0, 0.04, 30.0, 175.0)
    }

    #[test]
    fn test_baseline_worked_example() {
        // aps = 25, no-crit = 145 * 25 = 3625
        // expected per attack = 0.7*145 + 0.3*253.75 = 177.625
        let baseline = compute_baseline(&medusa()).unwrap();
        assert_eq!(baseline.dps_no_crit, 3625.0);
        assert_eq!(baseline.dps_with_crit, 4440.625);
    }

    #[test]
    fn test_with_crit_at_least_no_crit_when_multiplier_above_one() {
        let baseline = compute_baseline(&medusa()).unwrap();
        assert!(baseline.dps_with_crit >= baseline.dps_no_crit);

        // Multiplier below 1 can pull the expected value under the raw figure.
        let weak_crits = StatBlock::new(100.0, 0.5, 0.5, 0.5);
        let baseline = compute_baseline(&weak_crits).unwrap();
        assert!(baseline.dps_with_crit < baseline.dps_no_crit);
    }

    #[test]
    fn test_zero_crit_chance_collapses_to_no_crit() {
        let stats = StatBlock::new(100.0, 0.5, 0.0, 2.0);
        let baseline = compute_baseline(&stats).unwrap();
        assert_eq!(baseline.dps_no_crit, baseline.dps_with_crit);
    }

    #[test]
    fn test_validation_fires_before_division() {
        let stats = StatBlock::new(100.0, 0.0, 0.3, 1.75);
        assert_eq!(
            compute_baseline(&stats),
            Err(DpsError::NonPositiveInterval(0.0))
        );
    }

    #[test]
    fn test_division_site_reports_zero_interval_distinctly() {
        // Unvalidated path: the division guard has its own report.
        let stats = StatBlock::new(100.0, 0.0, 0.3, 1.75);
        assert_eq!(crit_adjusted_dps(&stats), Err(DpsError::ZeroAttackInterval));
    }

    #[test]
    fn test_apply_damage_mult() {
        let powerful = Modifier::new("Powerful", ModifierKind::DamageMult, 0.50);
        let modified = apply_modifier(&medusa(), &powerful);
        assert_eq!(modified.base_damage, 217.5);
        assert_eq!(modified.attack_interval, 0.04);
    }

    #[test]
    fn test_apply_cooldown_reduction() {
        let stats = StatBlock::new(100.0, 0.5, 0.0, 2.0);
        let fast = Modifier::new("Fast", ModifierKind::CooldownReduction, 0.10);
        let modified = apply_modifier(&stats, &fast);
        assert_eq!(modified.attack_interval, 0.45);
    }

    #[test]
    fn test_apply_crit_damage_add_is_uncapped() {
        let stats = StatBlock::new(100.0, 0.5, 0.3, 1.75);
        let executor = Modifier::new("Executor", ModifierKind::CritDamageAdd, 0.60);
        let modified = apply_modifier(&stats, &executor);
        assert_eq!(modified.crit_damage_multiplier, 2.35);
    }

    #[test]
    fn test_apply_crit_chance_add_caps_at_one() {
        let stats = StatBlock::new(100.0, 0.5, 0.90, 2.0);
        let assassin = Modifier::new("Assassin", ModifierKind::CritChanceAdd, 0.35);
        let modified = apply_modifier(&stats, &assassin);
        assert_eq!(modified.crit_chance, 1.0);
    }

    #[test]
    fn test_apply_modifier_never_mutates_input() {
        let original = medusa();
        for modifier in &crate::modifier::CATALOG {
            let _ = apply_modifier(&original, modifier);
            assert_eq!(original, medusa());
        }
    }

    #[test]
    fn test_powerful_worked_example() {
        // dmg' = 217.5, expected' = 0.7*217.5 + 0.3*380.625 = 266.4375
        let powerful = Modifier::new("Powerful", ModifierKind::DamageMult, 0.50);
        let modified = apply_modifier(&medusa(), &powerful);
        assert_eq!(crit_adjusted_dps(&modified).unwrap(), 6660.9375);
    }
}
