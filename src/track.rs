//! Track enrichment: cumulative distance, grade, and elevation aggregates.
//!
//! This is the first stage of the pipeline. It converts raw position samples
//! into a [`Track`] whose points carry cumulative haversine distance and a
//! local grade, plus elevation gain/loss and extremes over the whole route.
//!
//! Samples with invalid coordinates are dropped with a warning rather than
//! aborting the run, as long as at least one valid sample remains. Unknown
//! elevations default to 0 so aggregates stay finite.

use log::warn;

use crate::error::{AnalysisError, Result};
use crate::geo_utils::haversine_km;
use crate::{Track, TrackPoint, TrackSample};

/// Build an enriched [`Track`] from raw position samples.
///
/// - `distance` is the cumulative haversine distance in km, 0 at index 0.
/// - `grade` is percent rise over run between consecutive samples, 0 at
///   index 0 and 0 wherever the distance delta is not positive (duplicate
///   or near-duplicate coordinates are treated as flat).
///
/// A single valid sample yields a trivial zero-distance track; the split
/// estimator rejects that later as degenerate. Fails with
/// [`AnalysisError::EmptyTrack`] only when no valid sample remains.
///
/// # Example
/// ```
/// use trail_pacer::{build_track, TrackSample};
///
/// let samples = vec![
///     TrackSample::new(45.0, 6.0, Some(1000.0)),
///     TrackSample::new(45.01, 6.0, Some(1050.0)),
/// ];
/// let track = build_track(&samples).unwrap();
/// assert_eq!(track.points[0].distance, 0.0);
/// assert!(track.total_distance > 0.0);
/// assert_eq!(track.total_elevation_gain, 50.0);
/// ```
pub fn build_track(samples: &[TrackSample]) -> Result<Track> {
    let valid: Vec<&TrackSample> = samples
        .iter()
        .filter(|s| {
            if s.is_valid() {
                true
            } else {
                warn!(
                    "Dropping malformed sample (lat={}, lng={})",
                    s.latitude, s.longitude
                );
                false
            }
        })
        .collect();

    if valid.is_empty() {
        return Err(AnalysisError::EmptyTrack);
    }

    let mut points: Vec<TrackPoint> = Vec::with_capacity(valid.len());
    let mut total_gain = 0.0;
    let mut total_loss = 0.0;
    let mut max_elevation = f64::MIN;
    let mut min_elevation = f64::MAX;

    for sample in valid {
        let elevation = sample
            .elevation
            .filter(|e| e.is_finite())
            .unwrap_or(0.0);

        let (distance, grade) = match points.last() {
            None => (0.0, 0.0),
            Some(prev) => {
                let step = haversine_km(
                    prev.latitude,
                    prev.longitude,
                    sample.latitude,
                    sample.longitude,
                );
                let delta_m = step * 1000.0;
                let grade = if delta_m > 0.0 {
                    (elevation - prev.elevation) / delta_m * 100.0
                } else {
                    0.0
                };
                (prev.distance + step, grade)
            }
        };

        if let Some(prev) = points.last() {
            let elevation_delta = elevation - prev.elevation;
            if elevation_delta > 0.0 {
                total_gain += elevation_delta;
            } else {
                total_loss += -elevation_delta;
            }
        }

        max_elevation = max_elevation.max(elevation);
        min_elevation = min_elevation.min(elevation);

        points.push(TrackPoint {
            latitude: sample.latitude,
            longitude: sample.longitude,
            elevation,
            distance,
            grade,
        });
    }

    let total_distance = points.last().map(|p| p.distance).unwrap_or(0.0);

    Ok(Track {
        points,
        total_distance,
        total_elevation_gain: total_gain,
        total_elevation_loss: total_loss,
        max_elevation,
        min_elevation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climb_samples() -> Vec<TrackSample> {
        // ~1.112 km between consecutive points, climbing then descending
        vec![
            TrackSample::new(45.00, 6.0, Some(1000.0)),
            TrackSample::new(45.01, 6.0, Some(1100.0)),
            TrackSample::new(45.02, 6.0, Some(1250.0)),
            TrackSample::new(45.03, 6.0, Some(1150.0)),
        ]
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(build_track(&[]), Err(AnalysisError::EmptyTrack));
    }

    #[test]
    fn test_all_malformed_fails() {
        let samples = vec![
            TrackSample::new(f64::NAN, 6.0, None),
            TrackSample::new(95.0, 6.0, None),
        ];
        assert_eq!(build_track(&samples), Err(AnalysisError::EmptyTrack));
    }

    #[test]
    fn test_malformed_samples_are_dropped() {
        let mut samples = climb_samples();
        samples.insert(2, TrackSample::new(f64::INFINITY, 6.0, Some(900.0)));

        let track = build_track(&samples).unwrap();
        assert_eq!(track.points.len(), 4);
        assert_eq!(track.total_elevation_gain, 250.0);
    }

    #[test]
    fn test_identical_samples_build_equal_tracks() {
        let a = build_track(&climb_samples()).unwrap();
        let b = build_track(&climb_samples()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distance_is_monotone_and_starts_at_zero() {
        let track = build_track(&climb_samples()).unwrap();
        assert_eq!(track.points[0].distance, 0.0);
        for w in track.points.windows(2) {
            assert!(w[1].distance >= w[0].distance);
        }
        assert_eq!(
            track.total_distance,
            track.points.last().unwrap().distance
        );
    }

    #[test]
    fn test_grade_signs() {
        let track = build_track(&climb_samples()).unwrap();
        assert_eq!(track.points[0].grade, 0.0);
        assert!(track.points[1].grade > 0.0);
        assert!(track.points[2].grade > 0.0);
        assert!(track.points[3].grade < 0.0);

        // ~100 m rise over ~1112 m run is roughly 9%
        assert!((track.points[1].grade - 9.0).abs() < 0.5);
    }

    #[test]
    fn test_duplicate_points_have_zero_grade() {
        let samples = vec![
            TrackSample::new(45.0, 6.0, Some(1000.0)),
            TrackSample::new(45.0, 6.0, Some(1500.0)),
            TrackSample::new(45.01, 6.0, Some(1500.0)),
        ];
        let track = build_track(&samples).unwrap();
        assert_eq!(track.points[1].grade, 0.0);
        assert_eq!(track.points[1].distance, track.points[0].distance);
    }

    #[test]
    fn test_elevation_aggregates() {
        let track = build_track(&climb_samples()).unwrap();
        assert_eq!(track.total_elevation_gain, 250.0);
        assert_eq!(track.total_elevation_loss, 100.0);
        assert_eq!(track.max_elevation, 1250.0);
        assert_eq!(track.min_elevation, 1000.0);
    }

    #[test]
    fn test_unknown_elevation_defaults_to_zero() {
        let samples = vec![
            TrackSample::new(45.0, 6.0, None),
            TrackSample::new(45.01, 6.0, Some(f64::NAN)),
            TrackSample::new(45.02, 6.0, Some(100.0)),
        ];
        let track = build_track(&samples).unwrap();
        assert_eq!(track.points[0].elevation, 0.0);
        assert_eq!(track.points[1].elevation, 0.0);
        assert_eq!(track.total_elevation_gain, 100.0);
        assert!(track.total_elevation_gain.is_finite());
        assert!(track.total_elevation_loss.is_finite());
    }

    #[test]
    fn test_single_sample_yields_trivial_track() {
        let track = build_track(&[TrackSample::new(45.0, 6.0, Some(1000.0))]).unwrap();
        assert_eq!(track.points.len(), 1);
        assert_eq!(track.total_distance, 0.0);
        assert_eq!(track.total_elevation_gain, 0.0);
    }
}
