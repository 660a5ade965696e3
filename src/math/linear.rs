//! Ordinary least-squares line fit
//!
//! Single-pass accumulator formulation of the standard normal equations,
//! plus Pearson's r over the same points. Used by the BET pipeline to fit
//! the linearized region.

use crate::error::SorbError;

/// Result of a least-squares line fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Pearson correlation coefficient of the points
    pub corr_coef: f64,
}

/// Fit `y = slope * x + intercept` by least squares over the given points
///
/// Fails with a [`SorbError::Calculation`] on degenerate input: fewer than
/// two points, or zero variance in `x` (a vertical set has no finite slope).
/// When `y` has zero variance the line is exactly horizontal and r is
/// reported as 1.0 (the fit is perfect, not undefined).
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LineFit, SorbError> {
    if x.len() != y.len() {
        return Err(SorbError::LengthMismatch {
            pressure_len: x.len(),
            loading_len: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(SorbError::Calculation(format!(
            "linear regression needs at least 2 points, got {}",
            n
        )));
    }

    let nf = n as f64;
    let mean_x = x.iter().sum::<f64>() / nf;
    let mean_y = y.iter().sum::<f64>() / nf;

    // Centered sums: Sxx, Syy, Sxy
    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 {
        return Err(SorbError::Calculation(
            "linear regression needs at least 2 distinct x values".to_string(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let corr_coef = if syy == 0.0 { 1.0 } else { sxy / (sxx * syy).sqrt() };

    Ok(LineFit {
        slope,
        intercept,
        corr_coef,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_line_recovered() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|xi| 2.5 * xi - 1.0).collect();

        let fit = fit_line(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 2.5, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, -1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.corr_coef, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_anticorrelated_data() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [3.0, 2.0, 1.0, 0.0];
        let fit = fit_line(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, -1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.corr_coef, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noisy_data_correlation_below_one() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.1, 0.9, 2.2, 2.8, 4.1];
        let fit = fit_line(&x, &y).unwrap();
        assert!(fit.corr_coef > 0.99);
        assert!(fit.corr_coef < 1.0);
    }

    #[test]
    fn test_degenerate_inputs_fail() {
        assert!(fit_line(&[1.0], &[2.0]).is_err());
        // all x identical: no finite slope
        assert!(fit_line(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_horizontal_line_is_perfect_fit() {
        let fit = fit_line(&[0.0, 1.0, 2.0], &[5.0, 5.0, 5.0]).unwrap();
        assert_relative_eq!(fit.slope, 0.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 5.0, epsilon = 1e-12);
        assert_relative_eq!(fit.corr_coef, 1.0, epsilon = 1e-12);
    }
}
