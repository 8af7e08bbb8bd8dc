//! Continuous time estimates between checkpoints.
//!
//! Builds a piecewise-linear function over the (distance, estimated_time)
//! pairs of a checkpoint sequence, for chart hover annotations and similar
//! display uses. This is a display-layer convenience, not a correctness
//! guarantee: with fewer than 2 checkpoints there is nothing to interpolate
//! and every query returns 0 rather than failing.

use crate::splits::Checkpoint;

/// Interpolate elapsed time (minutes) at each query distance (km).
///
/// Queries below the first checkpoint return its estimated time; queries
/// beyond the last are extrapolated linearly from the nearest pair of
/// knots. Results are clamped to be non-negative. Pure and stateless, so it
/// is safe to call repeatedly with different query sets against the same
/// checkpoints.
///
/// # Example
/// ```
/// use trail_pacer::interpolate_times;
/// use trail_pacer::splits::Checkpoint;
///
/// let checkpoints = vec![
///     Checkpoint { distance: 5.0, split_time: 60.0, estimated_time: 60.0, elevation: 0.0 },
///     Checkpoint { distance: 10.0, split_time: 60.0, estimated_time: 120.0, elevation: 0.0 },
/// ];
/// let times = interpolate_times(&checkpoints, &[7.5]);
/// assert!((times[0] - 90.0).abs() < 1e-9);
/// ```
pub fn interpolate_times(checkpoints: &[Checkpoint], query_distances: &[f64]) -> Vec<f64> {
    if checkpoints.len() < 2 {
        return vec![0.0; query_distances.len()];
    }

    query_distances
        .iter()
        .map(|&d| interpolate_one(checkpoints, d).max(0.0))
        .collect()
}

fn interpolate_one(checkpoints: &[Checkpoint], distance: f64) -> f64 {
    let first = &checkpoints[0];
    if distance <= first.distance {
        return first.estimated_time;
    }

    for pair in checkpoints.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if distance <= b.distance {
            return lerp(a, b, distance);
        }
    }

    // Past the last knot: extrapolate from the final pair
    let n = checkpoints.len();
    lerp(&checkpoints[n - 2], &checkpoints[n - 1], distance)
}

fn lerp(a: &Checkpoint, b: &Checkpoint, distance: f64) -> f64 {
    let span = b.distance - a.distance;
    if span <= 0.0 {
        return b.estimated_time;
    }
    let t = (distance - a.distance) / span;
    a.estimated_time + t * (b.estimated_time - a.estimated_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkpoint(distance: f64, estimated_time: f64) -> Checkpoint {
        Checkpoint {
            distance,
            split_time: 0.0,
            estimated_time,
            elevation: 1000.0,
        }
    }

    fn sample_checkpoints() -> Vec<Checkpoint> {
        vec![
            checkpoint(5.0, 55.0),
            checkpoint(10.0, 120.0),
            checkpoint(15.0, 170.0),
        ]
    }

    #[test]
    fn test_exact_knots_round_trip() {
        let cps = sample_checkpoints();
        let queries: Vec<f64> = cps.iter().map(|c| c.distance).collect();
        let times = interpolate_times(&cps, &queries);

        for (time, cp) in times.iter().zip(&cps) {
            assert!((time - cp.estimated_time).abs() < 1e-12);
        }
    }

    #[test]
    fn test_midpoint_is_linear() {
        let cps = sample_checkpoints();
        let times = interpolate_times(&cps, &[7.5, 12.5]);
        assert!((times[0] - 87.5).abs() < 1e-9);
        assert!((times[1] - 145.0).abs() < 1e-9);
    }

    #[test]
    fn test_below_first_knot_clamps() {
        let cps = sample_checkpoints();
        let times = interpolate_times(&cps, &[0.0, 2.0]);
        assert_eq!(times, vec![55.0, 55.0]);
    }

    #[test]
    fn test_beyond_last_knot_extrapolates() {
        let cps = sample_checkpoints();
        // Final pair has slope 10 min/km
        let times = interpolate_times(&cps, &[16.0]);
        assert!((times[0] - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_results_clamped_non_negative() {
        // Decreasing knots would extrapolate below zero past the end
        let cps = vec![checkpoint(0.0, 10.0), checkpoint(1.0, 1.0)];
        let times = interpolate_times(&cps, &[5.0]);
        assert_eq!(times, vec![0.0]);
    }

    #[test]
    fn test_fewer_than_two_checkpoints_returns_zeros() {
        assert_eq!(interpolate_times(&[], &[1.0, 2.0]), vec![0.0, 0.0]);
        assert_eq!(
            interpolate_times(&[checkpoint(5.0, 60.0)], &[1.0]),
            vec![0.0]
        );
    }
}
