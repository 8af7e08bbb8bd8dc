//! Grade-based pace model.
//!
//! Maps a local grade (percent) to a dimensionless pace multiplier. Uphill
//! costs roughly three times what downhill saves, reflecting that climbing
//! loses more time than descending recovers. The coefficients are
//! configuration, not constants, so callers can recalibrate for different
//! athlete profiles or surface types.
//!
//! ## Example
//! ```rust
//! use trail_pacer::pace::{pace_adjustment, PaceConfig};
//!
//! let config = PaceConfig::default();
//! assert_eq!(pace_adjustment(0.0, &config), 1.0);
//! assert!(pace_adjustment(10.0, &config) > pace_adjustment(-10.0, &config));
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the grade-based pace model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaceConfig {
    /// Multiplier added per percent of positive grade.
    /// Default: 0.075 (a 10% climb costs 75% extra time)
    pub uphill_factor: f64,

    /// Multiplier added per percent of negative grade magnitude.
    /// Default: 0.025
    pub downhill_factor: f64,
}

impl PaceConfig {
    /// Create a config with custom coefficients.
    pub fn with_factors(uphill_factor: f64, downhill_factor: f64) -> Self {
        Self {
            uphill_factor,
            downhill_factor,
        }
    }
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            uphill_factor: 0.075,
            downhill_factor: 0.025,
        }
    }
}

/// Pace multiplier for a grade in percent.
///
/// Flat ground is 1.0; uphill grades scale by `uphill_factor`, downhill by
/// `downhill_factor` applied to the grade magnitude. A non-finite grade is
/// treated as flat rather than propagated.
pub fn pace_adjustment(grade: f64, config: &PaceConfig) -> f64 {
    if !grade.is_finite() {
        return 1.0;
    }
    if grade > 0.0 {
        1.0 + grade * config.uphill_factor
    } else {
        1.0 + grade.abs() * config.downhill_factor
    }
}
