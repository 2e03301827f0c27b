//! Error types for DPS computation and preset persistence.
//!
//! Engine-side failures are represented by `DpsError`, store-side
//! failures by `StoreError`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while computing DPS figures.
///
/// All validation is strict: out-of-range stats are reported, never
/// silently clamped.
///
/// # Examples
///
/// ```rust
/// use dpstier::DpsError;
///
/// let err = DpsError::NonPositiveDamage(-5.0);
/// println!("{}", err); // "base damage must be positive, got -5"
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DpsError {
    /// Base damage was zero or negative.
    #[error("base damage must be positive, got {0}")]
    NonPositiveDamage(f64),

    /// Attack interval was zero or negative.
    #[error("attack interval must be positive, got {0}")]
    NonPositiveInterval(f64),

    /// Crit chance fell outside [0, 1] (entered as 0–100%).
    #[error("crit chance must be between 0% and 100%, got {}%", .0 * 100.0)]
    CritChanceOutOfRange(f64),

    /// Crit damage multiplier was zero or negative.
    #[error("crit damage multiplier must be positive, got {0}")]
    NonPositiveCritDamage(f64),

    /// Attack interval was exactly zero at the point of division.
    ///
    /// Validation normally rejects a zero interval as
    /// [`NonPositiveInterval`](DpsError::NonPositiveInterval) before any
    /// division happens, but the division site reports its own condition
    /// rather than a generic validation failure.
    #[error("attack interval is zero, attacks per second is undefined")]
    ZeroAttackInterval,
}

/// Errors that can occur in the preset store.
///
/// A malformed or missing preset file is never an error: loading
/// recovers to an empty store. Only writes and refused operations
/// surface here.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Writing the preset file failed.
    #[error("failed to save presets to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The named preset is a built-in default and cannot be deleted.
    #[error("preset '{0}' is a built-in default and cannot be deleted")]
    ProtectedPreset(String),

    /// No preset with the given name exists.
    #[error("no preset named '{0}'")]
    UnknownPreset(String),

    /// A preset cannot be saved under an empty name.
    #[error("preset name cannot be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dps_error_display() {
        let err = DpsError::NonPositiveDamage(-5.0);
        assert!(err.to_string().contains("-5"));

        let err = DpsError::CritChanceOutOfRange(1.5);
        assert!(err.to_string().contains("150%"));
    }

    #[test]
    fn test_zero_interval_is_distinct_from_validation() {
        assert_ne!(
            DpsError::ZeroAttackInterval,
            DpsError::NonPositiveInterval(0.0)
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::ProtectedPreset("Medusa lvl 25".to_string());
        assert!(err.to_string().contains("Medusa lvl 25"));
        assert!(err.to_string().contains("cannot be deleted"));
    }
}
