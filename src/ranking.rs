//! Ranking modifiers into a tier list.
//!
//! Each catalog entry is applied in isolation to the base stats,
//! scored with the crit-adjusted DPS formula, and the results are
//! sorted into a tier table alongside a synthetic unmodified row.

use std::cmp::Ordering;

use crate::engine::{apply_modifier, compute_baseline, crit_adjusted_dps, Baseline};
use crate::error::DpsError;
use crate::modifier::Modifier;
use crate::stats::StatBlock;

/// Label of the synthetic row carrying the unmodified baseline.
pub const NO_MODIFICATION: &str = "No Modification";

/// Tier letters by rank position, best first.
pub const TIERS: [&str; 16] = [
    "S", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O",
];

/// Marker for rank positions past the tier alphabet.
pub const TIER_FALLBACK: &str = "-";

/// Tier letter for a 0-based rank index.
///
/// # Examples
///
/// ```rust
/// use dpstier::tier_for_rank;
///
/// assert_eq!(tier_for_rank(0), "S");
/// assert_eq!(tier_for_rank(15), "O");
/// assert_eq!(tier_for_rank(16), "-");
/// ```
pub fn tier_for_rank(rank: usize) -> &'static str {
    TIERS.get(rank).copied().unwrap_or(TIER_FALLBACK)
}

/// One row of the ranked output table.
///
/// `percent_change` is relative to the unmodified with-crit baseline,
/// so the `"No Modification"` row always reads 0%.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    /// Modifier name, or [`NO_MODIFICATION`] for the baseline row.
    pub label: String,

    /// Crit-adjusted DPS with this modifier applied.
    pub dps: f64,

    /// Change versus the unmodified with-crit baseline, in percent.
    pub percent_change: f64,

    /// Rank-derived letter grade, `"S"` highest.
    pub tier: &'static str,
}

/// Rank every catalog modifier against the unmodified baseline.
///
/// Each modifier is applied to a fresh copy of `stats` (modifiers never
/// stack) and scored with the crit-adjusted formula. A synthetic
/// [`NO_MODIFICATION`] row is appended before sorting, so exact ties
/// resolve in catalog order with the baseline row last among its ties.
///
/// The output always has `catalog.len() + 1` rows, sorted
/// non-increasing by DPS. Pure and deterministic: identical input
/// produces identical output.
///
/// # Examples
///
/// ```rust
/// use dpstier::{rank, StatBlock, CATALOG};
///
/// let stats = StatBlock::from_percent(145.0, 0.04, 30.0, 175.0);
/// let table = rank(&stats, &CATALOG).unwrap();
///
/// assert_eq!(table.len(), CATALOG.len() + 1);
/// assert_eq!(table[0].tier, "S");
/// // Lightning's 35% cooldown cut beats Powerful's flat +50% damage.
/// assert_eq!(table[0].label, "Lightning");
/// ```
pub fn rank(stats: &StatBlock, catalog: &[Modifier]) -> Result<Vec<RankedResult>, DpsError> {
    let baseline = compute_baseline(stats)?;

    let mut rows: Vec<(String, f64)> = Vec::with_capacity(catalog.len() + 1);
    for modifier in catalog {
        let modified = apply_modifier(stats, modifier);
        rows.push((modifier.name.to_string(), crit_adjusted_dps(&modified)?));
    }
    rows.push((NO_MODIFICATION.to_string(), baseline.dps_with_crit));

    // Stable sort keeps pre-sort (catalog, then baseline) order on ties.
    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    Ok(rows
        .into_iter()
        .enumerate()
        .map(|(i, (label, dps))| RankedResult {
            label,
            dps,
            percent_change: percent_change(dps, &baseline),
            tier: tier_for_rank(i),
        })
        .collect())
}

fn percent_change(dps: f64, baseline: &Baseline) -> f64 {
    if baseline.dps_with_crit == 0.0 {
        0.0
    } else {
        (dps - baseline.dps_with_crit) / baseline.dps_with_crit * 100.0
    }
}
