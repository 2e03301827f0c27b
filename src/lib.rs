//! # dpstier - Deterministic DPS Tier-List Engine
//!
//! A small engine that scores a game unit's damage per second under a
//! fixed catalog of stat modifiers and ranks the outcomes into a tier
//! list. It provides:
//! - **Deterministic** computation (same stats → same table)
//! - **Pure** ranking (no side effects, inputs never mutated)
//! - **Strict** validation (out-of-range stats error, never clamp)
//! - A flat-file **preset store** for named unit stat blocks
//!
//! ## Core Concepts
//!
//! ### Ranking Pipeline
//!
//! Stats flow through a simple pipeline:
//!
//! ```text
//! [StatBlock] → [apply_modifier × catalog] → [rank] → [RankedResult table]
//! ```
//!
//! 1. A **StatBlock** holds the unit's normalized base stats
//! 2. Each catalog **Modifier** is applied in isolation (non-stacking)
//! 3. **rank** sorts the crit-adjusted DPS of every variant, plus an
//!    unmodified `"No Modification"` row, into tiers (`S` highest)
//!
//! ### Key Features
//!
//! - **Fixed catalog**: nine modifiers as static configuration
//! - **Crit-adjusted scoring**: modified stats are always scored with
//!   crit chance and crit damage folded in; only the baseline also
//!   reports a no-crit figure
//! - **Stable tie-break**: equal DPS resolves in catalog order
//! - **Lenient persistence**: a missing or corrupt preset file loads
//!   as an empty store, and a protected default is always reseeded
//!
//! ## Example
//!
//! ```rust
//! use dpstier::{compute_baseline, rank, StatBlock, CATALOG};
//!
//! let stats = StatBlock::from_percent(145.0, 0.04, 30.0, 175.0);
//!
//! let baseline = compute_baseline(&stats).unwrap();
//! assert_eq!(baseline.dps_no_crit, 3625.0);
//! assert_eq!(baseline.dps_with_crit, 4440.625);
//!
//! let table = rank(&stats, &CATALOG).unwrap();
//! assert_eq!(table.len(), CATALOG.len() + 1);
//! assert_eq!(table[0].tier, "S");
//! ```
//!
//! ## Modules
//!
//! - [`stats`] - Unit stat types (boundary and normalized forms)
//! - [`modifier`] - Modifier records and the fixed catalog
//! - [`engine`] - The DPS formulas
//! - [`ranking`] - Tier-list construction
//! - [`store`] - Named preset persistence
//! - [`display`] - Result-table formatting
//! - [`error`] - Error types

pub mod display;
pub mod engine;
pub mod error;
pub mod modifier;
pub mod ranking;
pub mod stats;
pub mod store;

// Re-export main types for convenience
pub use engine::{apply_modifier, compute_baseline, Baseline};
pub use error::{DpsError, StoreError};
pub use modifier::{Modifier, ModifierKind, CATALOG};
pub use ranking::{rank, tier_for_rank, RankedResult, NO_MODIFICATION, TIERS};
pub use stats::{StatBlock, UnitStats};
pub use store::{default_preset_stats, PresetStore, DEFAULT_PRESET_NAME};
