//! Roquerol consistency checks
//!
//! The three checks Roquerol proposed to validate a BET region selection.
//! Violations are physically meaningful but non-fatal: each produces a
//! [`BetWarning`] value returned with the result, and a `log::warn!` mirror
//! for operators watching the log stream. Nothing here ever fails the
//! computation.

use crate::characterization::region::BetRegion;
use log::warn;
use std::fmt;

/// A single Roquerol consistency violation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BetWarning {
    /// The BET C constant is negative, which has no physical meaning
    NegativeConstant {
        c_const: f64,
    },
    /// The selected region is a poor straight line (Pearson r below 0.99)
    NonLinearRegion {
        corr_coef: f64,
    },
    /// The statistical monolayer falls outside the selected region
    MonolayerOutsideRegion {
        n_monolayer: f64,
        region_low: f64,
        region_high: f64,
    },
}

impl fmt::Display for BetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetWarning::NegativeConstant { c_const } => {
                write!(f, "the BET C constant is negative ({:.3})", c_const)
            }
            BetWarning::NonLinearRegion { corr_coef } => {
                write!(
                    f,
                    "the selected region is not linear (correlation {:.5} < 0.99)",
                    corr_coef
                )
            }
            BetWarning::MonolayerOutsideRegion {
                n_monolayer,
                region_low,
                region_high,
            } => write!(
                f,
                "the monolayer loading {:.4e} is outside the selected region [{:.4e}, {:.4e}]",
                n_monolayer, region_low, region_high
            ),
        }
    }
}

/// Evaluate the three Roquerol checks over a completed BET fit
///
/// Each check is independent; all violations are collected. `loading` is the
/// FULL loading array (mol basis), indexed by the region bounds.
pub fn validate(
    c_const: f64,
    corr_coef: f64,
    loading: &[f64],
    region: &BetRegion,
    n_monolayer: f64,
) -> Vec<BetWarning> {
    let mut warnings = Vec::new();

    if c_const < 0.0 {
        warnings.push(BetWarning::NegativeConstant { c_const });
    }

    if corr_coef < 0.99 {
        warnings.push(BetWarning::NonLinearRegion { corr_coef });
    }

    let region_low = loading[region.minimum];
    let region_high = loading[region.maximum];
    if region_low > n_monolayer || region_high < n_monolayer {
        warnings.push(BetWarning::MonolayerOutsideRegion {
            n_monolayer,
            region_low,
            region_high,
        });
    }

    for warning in &warnings {
        warn!("BET consistency: {}", warning);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> BetRegion {
        BetRegion::new(1, 3).unwrap()
    }

    #[test]
    fn test_consistent_fit_yields_no_warnings() {
        let loading = [0.5, 1.0, 2.0, 3.0, 4.0];
        let warnings = validate(100.0, 0.9995, &loading, &region(), 2.0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_negative_c_constant_flagged() {
        let loading = [0.5, 1.0, 2.0, 3.0, 4.0];
        let warnings = validate(-5.0, 0.9995, &loading, &region(), 2.0);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], BetWarning::NegativeConstant { .. }));
    }

    #[test]
    fn test_weak_correlation_flagged() {
        let loading = [0.5, 1.0, 2.0, 3.0, 4.0];
        let warnings = validate(100.0, 0.95, &loading, &region(), 2.0);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], BetWarning::NonLinearRegion { .. }));
    }

    #[test]
    fn test_monolayer_outside_region_flagged_on_both_sides() {
        let loading = [0.5, 1.0, 2.0, 3.0, 4.0];
        // below the region
        let low = validate(100.0, 0.9995, &loading, &region(), 0.8);
        assert_eq!(low.len(), 1);
        assert!(matches!(low[0], BetWarning::MonolayerOutsideRegion { .. }));
        // above the region
        let high = validate(100.0, 0.9995, &loading, &region(), 3.5);
        assert_eq!(high.len(), 1);
    }

    #[test]
    fn test_independent_checks_all_collected() {
        let loading = [0.5, 1.0, 2.0, 3.0, 4.0];
        let warnings = validate(-1.0, 0.5, &loading, &region(), 100.0);
        assert_eq!(warnings.len(), 3);
    }
}
