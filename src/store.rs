//! Preset persistence.
//!
//! `PresetStore` maps unit names to their boundary-form stats, backed
//! by a single flat JSON file. Reads are lenient (a missing or corrupt
//! file recovers to an empty store), writes are whole-file overwrites,
//! and one canonical preset is seeded on open and protected from
//! deletion.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::StoreError;
use crate::stats::UnitStats;

/// Name of the seeded preset that can never be deleted.
pub const DEFAULT_PRESET_NAME: &str = "Medusa lvl 25";

/// Stats of the canonical example unit.
pub fn default_preset_stats() -> UnitStats {
    UnitStats {
        dmg: 145.0,
        atk_speed: 0.04,
        crit_chance: 30.0,
        crit_dmg: 175.0,
    }
}

/// Named unit presets on a flat JSON file.
///
/// The file holds a single object keyed by preset name; values are
/// [`UnitStats`] records with missing fields defaulting to 0.0.
/// Access is synchronous and whole-file: every load reads the entire
/// file, every mutation rewrites it.
///
/// # Examples
///
/// ```rust,no_run
/// use dpstier::{PresetStore, UnitStats, DEFAULT_PRESET_NAME};
///
/// let mut store = PresetStore::open("dps_units.json")?;
/// assert!(store.contains(DEFAULT_PRESET_NAME));
///
/// store.upsert("Warrior lvl 50", UnitStats::new(180.0, 0.06, 15.0, 160.0))?;
/// let warrior = store.get("Warrior lvl 50").unwrap();
/// assert_eq!(warrior.dmg, 180.0);
/// # Ok::<(), dpstier::StoreError>(())
/// ```
#[derive(Debug)]
pub struct PresetStore {
    path: PathBuf,
    units: BTreeMap<String, UnitStats>,
}

impl PresetStore {
    /// Open the store at `path`, seeding the default preset.
    ///
    /// An absent or unparseable file yields an empty map rather than an
    /// error; the only way `open` fails is the persisting write after
    /// the default is seeded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let units = read_units(&path);
        let mut store = Self { path, units };
        store.ensure_defaults()?;
        Ok(store)
    }

    /// Write the full map back to the preset file.
    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.units).map_err(|e| StoreError::Save {
            path: self.path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;
        fs::write(&self.path, json).map_err(|e| StoreError::Save {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Seed the canonical default preset if absent, persisting only
    /// when something changed.
    pub fn ensure_defaults(&mut self) -> Result<(), StoreError> {
        if self.units.contains_key(DEFAULT_PRESET_NAME) {
            return Ok(());
        }
        debug!("seeding default preset '{DEFAULT_PRESET_NAME}'");
        self.units
            .insert(DEFAULT_PRESET_NAME.to_string(), default_preset_stats());
        self.save()
    }

    /// Insert or replace a preset and persist.
    ///
    /// The name is trimmed first; an empty name is refused.
    pub fn upsert(&mut self, name: &str, stats: UnitStats) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.units.insert(name.to_string(), stats);
        self.save()
    }

    /// Delete a preset and persist.
    ///
    /// The protected default is refused before anything else is
    /// checked; unknown names are refused as such.
    pub fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        if name == DEFAULT_PRESET_NAME {
            return Err(StoreError::ProtectedPreset(name.to_string()));
        }
        if self.units.remove(name).is_none() {
            return Err(StoreError::UnknownPreset(name.to_string()));
        }
        self.save()
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Option<&UnitStats> {
        self.units.get(name)
    }

    /// Whether a preset with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    /// All preset names, for selection lists.
    pub fn names(&self) -> Vec<&str> {
        self.units.keys().map(String::as_str).collect()
    }

    /// The name a selector should start on: the protected default when
    /// present, otherwise the first preset, otherwise nothing.
    pub fn default_selection(&self) -> Option<&str> {
        if self.units.contains_key(DEFAULT_PRESET_NAME) {
            Some(DEFAULT_PRESET_NAME)
        } else {
            self.units.keys().next().map(String::as_str)
        }
    }

    /// Number of stored presets.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the store holds no presets.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read the preset map, recovering to empty on any failure.
fn read_units(path: &Path) -> BTreeMap<String, UnitStats> {
    if !path.exists() {
        return BTreeMap::new();
    }
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("could not read preset file {}: {e}", path.display());
            return BTreeMap::new();
        }
    };
    match serde_json::from_str(&contents) {
        Ok(units) => units,
        Err(e) => {
            warn!(
                "preset file {} is not valid JSON, starting empty: {e}",
                path.display()
            );
            BTreeMap::new()
        }
    }
}
