//! Preset Store Example
//!
//! Opens a preset store in a temporary directory, saves a custom
//! unit, loads it back into the engine, and shows the protected
//! default refusing deletion.

use dpstier::{compute_baseline, PresetStore, UnitStats, DEFAULT_PRESET_NAME};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("dpstier-presets-demo");
    std::fs::create_dir_all(&dir)?;
    let mut store = PresetStore::open(dir.join("dps_units.json"))?;

    println!("presets after open: {:?}", store.names());

    // Save the current stats under a new name.
    store.upsert("Warrior lvl 50", UnitStats::new(180.0, 0.06, 15.0, 160.0))?;

    // Load it back and feed the engine.
    let warrior = store.get("Warrior lvl 50").expect("just saved");
    let baseline = compute_baseline(&warrior.to_stat_block())?;
    println!(
        "Warrior lvl 50 baseline DPS with crit: {:.2}",
        baseline.dps_with_crit
    );

    // The canonical default cannot be removed.
    match store.delete(DEFAULT_PRESET_NAME) {
        Err(e) => println!("delete refused: {e}"),
        Ok(()) => unreachable!("the default preset is protected"),
    }

    store.delete("Warrior lvl 50")?;
    println!("presets after cleanup: {:?}", store.names());
    Ok(())
}
