//! BET linear-region selection
//!
//! Chooses the contiguous index range over which the BET line is fitted,
//! either automatically from the shape of the Roquerol curve or from
//! caller-supplied relative-pressure bounds.
//!
//! # Automatic heuristic
//!
//! The upper bound is the last point of the leading non-decreasing run of
//! the Roquerol transform (the curve's knee); the lower bound is the first
//! point whose pressure exceeds one tenth of the pressure at that knee.
//! The linear BET region conventionally spans roughly one decade of
//! relative pressure below the knee.
//!
//! # Fallback rule
//!
//! In both modes, a threshold scan that finds no crossing falls back to the
//! full-range boundary (`maximum = len - 1`, `minimum = 0`). A selection
//! that ends up with fewer than two points is rejected with
//! [`SorbError::InvalidRegion`] since no line can be fitted through it.

use crate::characterization::transform::roq_transform;
use crate::error::SorbError;

/// Inclusive contiguous index range selected for the BET fit
///
/// Invariant: `minimum < maximum <= len - 1`, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetRegion {
    /// First index of the region (inclusive)
    pub minimum: usize,
    /// Last index of the region (inclusive)
    pub maximum: usize,
}

impl BetRegion {
    /// Build a region, rejecting empty or single-point selections
    pub fn new(minimum: usize, maximum: usize) -> Result<Self, SorbError> {
        if minimum >= maximum {
            return Err(SorbError::InvalidRegion {
                minimum,
                maximum,
                reason: "fewer than two points selected for the linear fit",
            });
        }
        Ok(Self { minimum, maximum })
    }

    /// Number of points in the region
    pub fn len(&self) -> usize {
        self.maximum - self.minimum + 1
    }

    /// Whether the region holds no points (never true for a constructed region)
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Select the BET fitting region over paired (pressure, loading) arrays
///
/// `limits`, when given, are `(low, high)` relative-pressure bounds for
/// manual selection; `None` triggers the automatic Roquerol heuristic.
/// Fails with [`SorbError::LengthMismatch`] before any scan when the arrays
/// do not share one index space.
pub fn select_region(
    pressure: &[f64],
    loading: &[f64],
    limits: Option<(f64, f64)>,
) -> Result<BetRegion, SorbError> {
    if pressure.len() != loading.len() {
        return Err(SorbError::LengthMismatch {
            pressure_len: pressure.len(),
            loading_len: loading.len(),
        });
    }
    if pressure.len() < 2 {
        return Err(SorbError::InvalidRegion {
            minimum: 0,
            maximum: pressure.len().saturating_sub(1),
            reason: "fewer than two points selected for the linear fit",
        });
    }

    let last = pressure.len() - 1;

    let (minimum, maximum) = match limits {
        None => {
            // Upper bound: last point of the leading non-decreasing Roquerol run
            let roq = roq_transform(loading, pressure);
            let maximum = roq
                .windows(2)
                .position(|w| w[0] > w[1])
                .unwrap_or(last);

            // Lower bound: one decade of pressure below the knee
            let min_p = pressure[maximum] / 10.0;
            let minimum = pressure
                .iter()
                .position(|&p| p > min_p)
                .unwrap_or(0);

            (minimum, maximum)
        }
        Some((low, high)) => {
            let maximum = pressure
                .iter()
                .rposition(|&p| p < high)
                .unwrap_or(last);
            let minimum = pressure
                .iter()
                .position(|&p| p > low)
                .unwrap_or(0);

            (minimum, maximum)
        }
    };

    BetRegion::new(minimum, maximum)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Typical mesoporous shape: Roquerol transform rises, peaks, then falls
    fn typical_data() -> (Vec<f64>, Vec<f64>) {
        let pressure: Vec<f64> = (1..=20).map(|i| 0.02 * i as f64).collect();
        // loading grows slower than 1/(1-p), so roq peaks mid-range
        let loading: Vec<f64> = pressure.iter().map(|&p| 2.0 * p / (0.08 + p)).collect();
        (pressure, loading)
    }

    #[test]
    fn test_automatic_selection_finds_knee() {
        let (pressure, loading) = typical_data();
        let region = select_region(&pressure, &loading, None).unwrap();

        assert!(region.minimum < region.maximum);
        assert!(region.maximum < pressure.len());

        // The knee: Roquerol values are non-decreasing up to the maximum
        let roq = roq_transform(&loading, &pressure);
        for i in 0..region.maximum {
            assert!(roq[i] <= roq[i + 1], "roq decreases inside selected run");
        }

        // One-decade rule: pressure at minimum exceeds a tenth of the knee pressure
        assert!(pressure[region.minimum] > pressure[region.maximum] / 10.0);
        if region.minimum > 0 {
            assert!(pressure[region.minimum - 1] <= pressure[region.maximum] / 10.0);
        }
    }

    #[test]
    fn test_automatic_selection_is_idempotent() {
        let (pressure, loading) = typical_data();
        let first = select_region(&pressure, &loading, None).unwrap();
        let second = select_region(&pressure, &loading, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_monotonic_roq_falls_back_to_last_index() {
        // strictly increasing Roquerol curve: no knee, maximum = last index
        let pressure: Vec<f64> = (1..=10).map(|i| 0.03 * i as f64).collect();
        let loading: Vec<f64> = pressure.iter().map(|&p| 5.0 * p).collect();

        let region = select_region(&pressure, &loading, None).unwrap();
        assert_eq!(region.maximum, pressure.len() - 1);
    }

    #[test]
    fn test_manual_limits_respected() {
        let (pressure, loading) = typical_data();
        let region = select_region(&pressure, &loading, Some((0.05, 0.30))).unwrap();

        assert!(pressure[region.minimum] > 0.05);
        assert!(pressure[region.maximum] < 0.30);
        // tightest such bounds
        if region.minimum > 0 {
            assert!(pressure[region.minimum - 1] <= 0.05);
        }
        if region.maximum < pressure.len() - 1 {
            assert!(pressure[region.maximum + 1] >= 0.30);
        }
    }

    #[test]
    fn test_manual_limits_outside_data_fall_back_to_full_range() {
        let (pressure, loading) = typical_data();
        // no point has p > 0.9, no point has p < 0.001: both scans fall back
        let region = select_region(&pressure, &loading, Some((0.9, 0.001))).unwrap();
        assert_eq!(region.minimum, 0);
        assert_eq!(region.maximum, pressure.len() - 1);
    }

    #[test]
    fn test_interval_with_fewer_than_two_points_rejected() {
        let (pressure, loading) = typical_data();
        // only one point lies strictly inside (0.02, 0.06)
        let result = select_region(&pressure, &loading, Some((0.02, 0.06)));
        assert!(matches!(result, Err(SorbError::InvalidRegion { .. })));
    }

    #[test]
    fn test_length_mismatch_fails_before_scanning() {
        let result = select_region(&[0.1, 0.2, 0.3], &[1.0, 2.0], None);
        assert!(matches!(result, Err(SorbError::LengthMismatch { .. })));
    }
}
