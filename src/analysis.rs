//! End-to-end analysis pipeline.
//!
//! Glue for host applications: build the track, estimate the splits, and
//! hand back one serializable result. Hosts that render maps, charts, or
//! tables consume [`RouteAnalysis`] directly or as JSON.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pace::PaceConfig;
use crate::splits::{estimate_splits, Checkpoint};
use crate::track::build_track;
use crate::{Track, TrackSample};

/// Parameters for one analysis run. Times are in minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Target finish time in minutes
    pub target_time_minutes: f64,
    /// Checkpoint spacing in kilometers
    pub split_interval_km: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            target_time_minutes: 240.0,
            split_interval_km: 5.0,
        }
    }
}

/// Result of a complete analysis run over one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteAnalysis {
    pub track: Track,
    pub checkpoints: Vec<Checkpoint>,
}

impl RouteAnalysis {
    /// Serialize the analysis for a host UI.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Run the full pipeline: samples in, enriched track and checkpoints out.
///
/// # Example
/// ```
/// use trail_pacer::{analyze_route, AnalysisParams, PaceConfig, TrackSample};
///
/// let samples: Vec<TrackSample> = (0..=20)
///     .map(|i| TrackSample::new(45.0 + i as f64 * 0.01, 6.0, Some(1000.0)))
///     .collect();
///
/// let analysis = analyze_route(
///     &samples,
///     &AnalysisParams::default(),
///     &PaceConfig::default(),
/// )
/// .unwrap();
/// assert!(!analysis.checkpoints.is_empty());
/// ```
pub fn analyze_route(
    samples: &[TrackSample],
    params: &AnalysisParams,
    pace_config: &PaceConfig,
) -> Result<RouteAnalysis> {
    let track = build_track(samples)?;
    let checkpoints = estimate_splits(
        &track,
        params.target_time_minutes,
        params.split_interval_km,
        pace_config,
    )?;

    info!(
        "Analyzed route: {:.1} km, +{:.0}/-{:.0} m, {} checkpoints for target {}",
        track.total_distance,
        track.total_elevation_gain,
        track.total_elevation_loss,
        checkpoints.len(),
        format_time(params.target_time_minutes),
    );

    Ok(RouteAnalysis { track, checkpoints })
}

/// Format minutes as "HH:MM" for table display.
pub fn format_time(minutes: f64) -> String {
    let total = minutes.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
