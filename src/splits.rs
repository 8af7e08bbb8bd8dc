//! Pace-adjusted split estimation.
//!
//! Partitions a track into fixed-distance segments and predicts elapsed
//! time at each boundary, constrained so the total matches a target finish
//! time. Two independent passes:
//!
//! 1. **Raw pass** — assume a uniform flat pace, weight each segment by the
//!    grade-adjusted pace of its sample points.
//! 2. **Normalization pass** — rescale raw segment times so their sum
//!    equals the target exactly, then accumulate into checkpoints.
//!
//! The passes are separate functions so the scale-factor edge case (zero
//! total raw time) is testable on its own.
//!
//! All times are in minutes.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::pace::{pace_adjustment, PaceConfig};
use crate::{Track, TrackPoint};

/// One split boundary with its normalized time estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Distance of the boundary in km (the track end for the last one)
    pub distance: f64,
    /// Minutes spent in the segment ending here
    pub split_time: f64,
    /// Cumulative minutes from the track start to this boundary
    pub estimated_time: f64,
    /// Elevation of the segment's last sample in meters
    pub elevation: f64,
}

/// A segment before normalization: raw grade-weighted time only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSegment {
    /// Right boundary of the segment in km
    pub end_distance: f64,
    /// Grade-adjusted time at the assumed flat pace, in minutes
    pub raw_time: f64,
    /// Elevation of the last sample inside the segment, in meters
    pub elevation: f64,
}

/// Raw pass: partition the track into `interval_km` segments and compute
/// grade-weighted times at the uniform base pace.
///
/// Each segment's distance is divided evenly across the sample points whose
/// cumulative distance falls within its bounds (inclusive), each weighted
/// by its local pace multiplier. Segments containing no sample points are
/// skipped.
///
/// Callers must ensure `track.total_distance > 0` and both parameters are
/// positive; [`estimate_splits`] does that validation.
pub fn build_raw_segments(
    track: &Track,
    target_minutes: f64,
    interval_km: f64,
    pace_config: &PaceConfig,
) -> Vec<RawSegment> {
    let total_distance = track.total_distance;
    let base_pace = target_minutes / total_distance;

    let mut segments = Vec::new();
    let mut current = 0.0;

    while current < total_distance {
        let next = (current + interval_km).min(total_distance);

        let in_segment: Vec<&TrackPoint> = track
            .points
            .iter()
            .filter(|p| p.distance >= current && p.distance <= next)
            .collect();

        if in_segment.is_empty() {
            current = next;
            continue;
        }

        let point_share = (next - current) / in_segment.len() as f64;
        let raw_time: f64 = in_segment
            .iter()
            .map(|p| base_pace * pace_adjustment(p.grade, pace_config) * point_share)
            .sum();

        segments.push(RawSegment {
            end_distance: next,
            raw_time,
            elevation: in_segment[in_segment.len() - 1].elevation,
        });

        current = next;
    }

    segments
}

/// Normalization pass: rescale raw segment times so they sum to
/// `target_minutes`, then accumulate into checkpoints.
///
/// Fails with [`AnalysisError::NoSegments`] when the total raw time is not
/// positive, since no scale factor can recover a meaningful plan from that.
pub fn normalize_segments(
    segments: &[RawSegment],
    target_minutes: f64,
) -> Result<Vec<Checkpoint>> {
    let total_raw_time: f64 = segments.iter().map(|s| s.raw_time).sum();
    if !(total_raw_time > 0.0) {
        return Err(AnalysisError::NoSegments);
    }

    let scale = target_minutes / total_raw_time;
    let mut accumulated = 0.0;

    Ok(segments
        .iter()
        .map(|segment| {
            let split_time = segment.raw_time * scale;
            accumulated += split_time;
            Checkpoint {
                distance: segment.end_distance,
                split_time,
                estimated_time: accumulated,
                elevation: segment.elevation,
            }
        })
        .collect())
}

/// Estimate pace-adjusted checkpoints for a track.
///
/// `target_minutes` is the target finish time and `interval_km` the split
/// spacing; both must be positive. The returned checkpoints are strictly
/// increasing in distance, the last one lands exactly on the track end, and
/// the split times sum to `target_minutes` within floating tolerance.
///
/// # Errors
/// - [`AnalysisError::InvalidParameter`] for non-positive parameters
/// - [`AnalysisError::DegenerateTrack`] when the track has zero distance
/// - [`AnalysisError::NoSegments`] when normalization is impossible
///
/// # Example
/// ```
/// use trail_pacer::{build_track, estimate_splits, PaceConfig, TrackSample};
///
/// let samples: Vec<TrackSample> = (0..=10)
///     .map(|i| TrackSample::new(45.0 + i as f64 * 0.01, 6.0, Some(1000.0)))
///     .collect();
/// let track = build_track(&samples).unwrap();
///
/// let checkpoints =
///     estimate_splits(&track, 120.0, 5.0, &PaceConfig::default()).unwrap();
/// let total: f64 = checkpoints.iter().map(|c| c.split_time).sum();
/// assert!((total - 120.0).abs() < 1e-9);
/// ```
pub fn estimate_splits(
    track: &Track,
    target_minutes: f64,
    interval_km: f64,
    pace_config: &PaceConfig,
) -> Result<Vec<Checkpoint>> {
    if !(target_minutes > 0.0) || !target_minutes.is_finite() {
        return Err(AnalysisError::InvalidParameter {
            name: "target_minutes",
            value: target_minutes,
        });
    }
    if !(interval_km > 0.0) || !interval_km.is_finite() {
        return Err(AnalysisError::InvalidParameter {
            name: "interval_km",
            value: interval_km,
        });
    }
    if !(track.total_distance > 0.0) {
        return Err(AnalysisError::DegenerateTrack {
            total_distance: track.total_distance,
        });
    }

    let raw = build_raw_segments(track, target_minutes, interval_km, pace_config);
    normalize_segments(&raw, target_minutes)
}
