//! Unified error handling for the trail-pacer library.
//!
//! Per-sample anomalies are recovered locally (the sample is dropped with a
//! warning); the errors here are structural failures that make the whole
//! invocation meaningless and must reach the caller as typed values rather
//! than silently becoming zero-valued results.

use std::fmt;

/// Unified error type for trail-pacer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Track has no usable position samples
    EmptyTrack,
    /// Track has zero (or negative) total distance
    DegenerateTrack { total_distance: f64 },
    /// Normalization impossible: no segment produced positive raw time
    NoSegments,
    /// An estimation parameter is out of range
    InvalidParameter { name: &'static str, value: f64 },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyTrack => {
                write!(f, "Track contains no usable position samples")
            }
            AnalysisError::DegenerateTrack { total_distance } => {
                write!(
                    f,
                    "Track has degenerate total distance {:.3} km, cannot estimate splits",
                    total_distance
                )
            }
            AnalysisError::NoSegments => {
                write!(f, "No segment produced positive raw time, cannot normalize")
            }
            AnalysisError::InvalidParameter { name, value } => {
                write!(f, "Parameter '{}' must be positive, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Result type alias for trail-pacer operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::DegenerateTrack {
            total_distance: 0.0,
        };
        assert!(err.to_string().contains("0.000 km"));

        let err = AnalysisError::InvalidParameter {
            name: "target_time_minutes",
            value: -5.0,
        };
        assert!(err.to_string().contains("target_time_minutes"));
        assert!(err.to_string().contains("-5"));
    }
}
