//! Tier List Example
//!
//! Ranks the full modifier catalog for the canonical example unit and
//! prints the same four-column table the original calculator showed:
//! tier, modification, total DPS, percent change versus the
//! unmodified baseline.

use dpstier::display::{
    baseline_no_crit_line, baseline_with_crit_line, format_dps, format_percent_change,
};
use dpstier::{compute_baseline, rank, StatBlock, CATALOG};

fn main() {
    // Medusa lvl 25: 145 dmg, one attack every 0.04s, 30% crit
    // chance, 175% crit damage.
    let stats = StatBlock::from_percent(145.0, 0.04, 30.0, 175.0);

    let baseline = compute_baseline(&stats).expect("example stats are valid");
    println!("{}", baseline_no_crit_line(&baseline));
    println!("{}", baseline_with_crit_line(&baseline));
    println!();

    let table = rank(&stats, &CATALOG).expect("example stats are valid");

    println!(
        "{:<4} {:<30} {:>10} {:>12}",
        "Tier", "Modification", "Total DPS", "% Change"
    );
    for row in &table {
        // Show the annotated catalog label where one exists.
        let label = CATALOG
            .iter()
            .find(|m| m.name == row.label)
            .map(|m| m.to_string())
            .unwrap_or_else(|| row.label.clone());

        println!(
            "{:<4} {:<30} {:>10} {:>12}",
            row.tier,
            label,
            format_dps(row.dps),
            format_percent_change(row.percent_change)
        );
    }
}
