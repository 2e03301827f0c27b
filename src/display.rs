//! Display formatting for result tables.
//!
//! The numbers a frontend shows are part of the contract: DPS to two
//! decimals, percent change with an explicit sign right-aligned to
//! eight characters plus a trailing `%`. Exact half-cent values round
//! away from zero (4440.625 displays as 4440.63), so values are
//! pre-rounded rather than left to the formatter's ties-to-even rule.

use crate::engine::Baseline;

/// Round to two decimals, ties away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a DPS figure to two decimals.
///
/// # Examples
///
/// ```rust
/// use dpstier::display::format_dps;
///
/// assert_eq!(format_dps(4440.625), "4440.63");
/// ```
pub fn format_dps(dps: f64) -> String {
    format!("{:.2}", round2(dps))
}

/// Format a percent change with sign, two decimals, and a trailing `%`.
///
/// # Examples
///
/// ```rust
/// use dpstier::display::format_percent_change;
///
/// assert_eq!(format_percent_change(50.0), "  +50.00%");
/// assert_eq!(format_percent_change(0.0), "   +0.00%");
/// assert_eq!(format_percent_change(-12.5), "  -12.50%");
/// ```
pub fn format_percent_change(percent_change: f64) -> String {
    format!("{:>+8.2}%", round2(percent_change))
}

/// Header line for the unmodified no-crit DPS.
pub fn baseline_no_crit_line(baseline: &Baseline) -> String {
    format!("Base DPS (without crit): {}", format_dps(baseline.dps_no_crit))
}

/// Header line for the unmodified with-crit DPS.
pub fn baseline_with_crit_line(baseline: &Baseline) -> String {
    format!(
        "Base DPS (with crit): {} (Avg. DPS including critical hit frequency)",
        format_dps(baseline.dps_with_crit)
    )
}
