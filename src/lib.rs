//! # Trail Pacer
//!
//! Trail route enrichment and pace-adjusted split time estimation.
//!
//! This library takes an ordered sequence of raw GPS samples describing a
//! trail route and produces:
//! - an enriched [`Track`] with per-point cumulative distance and grade plus
//!   aggregate elevation statistics
//! - pace-adjusted [`Checkpoint`]s at fixed distance intervals, normalized
//!   so the cumulative time matches a target finish time
//! - continuous time estimates at arbitrary distances for chart display
//!
//! Parsing of track file formats, rendering, and persistence are external
//! concerns; this crate is the pure estimation core.
//!
//! ## Quick Start
//!
//! ```rust
//! use trail_pacer::{build_track, estimate_splits, PaceConfig, TrackSample};
//!
//! let samples: Vec<TrackSample> = (0..=10)
//!     .map(|i| TrackSample::new(45.0 + i as f64 * 0.01, 6.0, Some(1200.0)))
//!     .collect();
//!
//! let track = build_track(&samples).unwrap();
//! let checkpoints =
//!     estimate_splits(&track, 240.0, 5.0, &PaceConfig::default()).unwrap();
//!
//! for cp in &checkpoints {
//!     println!("{:.1} km -> {:.1} min", cp.distance, cp.estimated_time);
//! }
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{AnalysisError, Result};

// Geographic utilities (haversine distance, path length)
pub mod geo_utils;

// Track enrichment (cumulative distance, grade, elevation aggregates)
pub mod track;
pub use track::build_track;

// Grade-based pace model
pub mod pace;
pub use pace::{pace_adjustment, PaceConfig};

// Split estimation (raw pass + normalization pass)
pub mod splits;
pub use splits::{estimate_splits, Checkpoint};

// Piecewise-linear time interpolation for display
pub mod interpolate;
pub use interpolate::interpolate_times;

// End-to-end analysis pipeline
pub mod analysis;
pub use analysis::{analyze_route, format_time, AnalysisParams, RouteAnalysis};

// ============================================================================
// Core Types
// ============================================================================

/// A raw position sample as delivered by an external track parser.
///
/// Elevation may be unknown; unknown or non-finite elevations are treated
/// as 0 during track construction. The timestamp is carried through for
/// callers that want it but is not used by the estimation core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSample {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    /// Unix timestamp in seconds, if the source format carried one
    pub timestamp: Option<i64>,
}

impl TrackSample {
    /// Create a new sample without a timestamp.
    pub fn new(latitude: f64, longitude: f64, elevation: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
            timestamp: None,
        }
    }

    /// Check if the sample has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// One enriched point of a processed track.
///
/// Owned exclusively by the [`Track`] that contains it and immutable once
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Elevation in meters (0 when the source sample carried none)
    pub elevation: f64,
    /// Cumulative distance from the track start in kilometers
    pub distance: f64,
    /// Local slope at this point in percent, signed (0 at index 0)
    pub grade: f64,
}

/// An enriched track: ordered points plus aggregate statistics.
///
/// Point order is the original sample order and encodes the route path.
/// Constructed once by [`build_track`] and never mutated afterwards, so it
/// is safe to share between the split estimator and rendering collaborators
/// without locking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub points: Vec<TrackPoint>,
    /// Total route distance in kilometers
    pub total_distance: f64,
    /// Sum of positive elevation deltas in meters
    pub total_elevation_gain: f64,
    /// Absolute sum of negative elevation deltas in meters
    pub total_elevation_loss: f64,
    pub max_elevation: f64,
    pub min_elevation: f64,
}

impl Track {
    /// Get the bounding box of this track, for map rendering.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_track_points(&self.points)
    }

    /// Indices of the first point at or past each `interval_km` boundary,
    /// starting at 0 km. Used to place distance markers along a map line.
    pub fn split_marker_indices(&self, interval_km: f64) -> Vec<usize> {
        if interval_km <= 0.0 {
            return vec![];
        }
        let mut indices = Vec::new();
        let mut next_marker = 0.0;
        for (i, point) in self.points.iter().enumerate() {
            if point.distance >= next_marker {
                indices.push(i);
                next_marker += interval_km;
            }
        }
        indices
    }
}

/// Bounding box for a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from enriched track points.
    pub fn from_track_points(points: &[TrackPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for p in points {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lng = min_lng.min(p.longitude);
            max_lng = max_lng.max(p.longitude);
        }

        Some(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    /// Get the center point of the bounds as (latitude, longitude).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
