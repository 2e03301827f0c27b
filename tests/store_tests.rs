use std::fs;

use tempfile::TempDir;

use dpstier::{
    compute_baseline, default_preset_stats, PresetStore, StoreError, UnitStats,
    DEFAULT_PRESET_NAME,
};

/// Opening a store on a fresh path seeds the protected default and
/// writes the file immediately, mirroring first launch.
#[test]
fn test_first_open_seeds_and_persists_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dps_units.json");

    let store = PresetStore::open(&path).unwrap();
    assert_eq!(store.names(), vec![DEFAULT_PRESET_NAME]);
    assert_eq!(store.default_selection(), Some(DEFAULT_PRESET_NAME));

    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains(DEFAULT_PRESET_NAME));
    assert!(on_disk.contains("145.0"));
}

/// The seeded default feeds straight into the engine and reproduces
/// the documented baseline.
#[test]
fn test_default_preset_matches_engine_example() {
    let stats = default_preset_stats().to_stat_block();
    let baseline = compute_baseline(&stats).unwrap();
    assert_eq!(baseline.dps_with_crit, 4440.625);
}

/// Full CRUD round trip across a reopen.
#[test]
fn test_crud_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dps_units.json");

    let mut store = PresetStore::open(&path).unwrap();
    let warrior = UnitStats::new(180.0, 0.06, 15.0, 160.0);
    store.upsert("Warrior lvl 50", warrior).unwrap();
    store.upsert("Scout", UnitStats::new(40.0, 0.02, 5.0, 120.0)).unwrap();
    store.delete("Scout").unwrap();

    let store = PresetStore::open(&path).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("Warrior lvl 50"), Some(&warrior));
    assert!(!store.contains("Scout"));
}

/// Upserting the default's name replaces its stats but reopening
/// never un-seeds it, and deleting it is always refused.
#[test]
fn test_protected_default_rules() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dps_units.json");

    let mut store = PresetStore::open(&path).unwrap();
    let err = store.delete(DEFAULT_PRESET_NAME).unwrap_err();
    assert!(matches!(err, StoreError::ProtectedPreset(name) if name == DEFAULT_PRESET_NAME));
    assert!(store.contains(DEFAULT_PRESET_NAME));

    // Overwriting the stats under the protected name is allowed.
    store
        .upsert(DEFAULT_PRESET_NAME, UnitStats::new(1.0, 1.0, 0.0, 100.0))
        .unwrap();
    let store = PresetStore::open(&path).unwrap();
    assert_eq!(store.get(DEFAULT_PRESET_NAME).unwrap().dmg, 1.0);
}

/// A corrupt preset file is silently replaced by an empty store that
/// then receives the seeded default; a missing file behaves the same.
#[test]
fn test_lenient_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dps_units.json");

    fs::write(&path, "garbage {{{").unwrap();
    let store = PresetStore::open(&path).unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.contains(DEFAULT_PRESET_NAME));

    // The recovery save leaves the file valid again.
    let reparsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(reparsed.get(DEFAULT_PRESET_NAME).is_some());
}

/// Presets written with missing fields load with zero defaults, the
/// original flat file format's behavior.
#[test]
fn test_partial_entries_default_to_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dps_units.json");
    fs::write(&path, r#"{ "Sketch": { "dmg": 80.0 } }"#).unwrap();

    let store = PresetStore::open(&path).unwrap();
    let sketch = store.get("Sketch").unwrap();
    assert_eq!(sketch.dmg, 80.0);
    assert_eq!(sketch.atk_speed, 0.0);
    assert_eq!(sketch.crit_chance, 0.0);
    assert_eq!(sketch.crit_dmg, 0.0);
}

/// Failed saves surface the underlying io cause.
#[test]
fn test_save_failure_is_surfaced() {
    let dir = TempDir::new().unwrap();
    // A path whose parent does not exist cannot be written.
    let path = dir.path().join("missing").join("dps_units.json");

    let err = PresetStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Save { .. }));
    assert!(err.to_string().contains("dps_units.json"));
}
