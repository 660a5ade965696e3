//! Least-squares polynomial fit
//!
//! Solves the Vandermonde system `V c = y` in the least-squares sense via
//! SVD. Coefficients are returned highest-degree first, so for a cubic the
//! result is `[c3, c2, c1, c0]` with `p(x) = c3 x³ + c2 x² + c1 x + c0`.
//! Used by the Virial model fit.

use crate::error::SorbError;
use nalgebra::{DMatrix, DVector};

/// Result of a least-squares polynomial fit
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFit {
    /// Coefficients, highest degree first (length `degree + 1`)
    pub coefficients: Vec<f64>,
    /// Residual sum of squares of the fit
    pub residual_sum: f64,
}

impl PolyFit {
    /// Evaluate the fitted polynomial at `x` (Horner's scheme)
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }
}

/// Fit a polynomial of the given degree to `(x, y)` by least squares
///
/// Fails with [`SorbError::Calculation`] when there are fewer points than
/// coefficients or when the SVD solve fails (rank-deficient Vandermonde,
/// e.g. repeated x values).
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Result<PolyFit, SorbError> {
    if x.len() != y.len() {
        return Err(SorbError::LengthMismatch {
            pressure_len: x.len(),
            loading_len: y.len(),
        });
    }
    let n = x.len();
    let n_coefs = degree + 1;
    if n < n_coefs {
        return Err(SorbError::Calculation(format!(
            "degree-{} polynomial fit needs at least {} points, got {}",
            degree, n_coefs, n
        )));
    }

    // Vandermonde matrix, columns ordered x^degree .. x^0
    let vandermonde = DMatrix::from_fn(n, n_coefs, |row, col| {
        x[row].powi((degree - col) as i32)
    });
    let rhs = DVector::from_column_slice(y);

    let svd = vandermonde.clone().svd(true, true);
    let solution = svd
        .solve(&rhs, f64::EPSILON)
        .map_err(|msg| SorbError::Calculation(format!("polynomial fit failed: {}", msg)))?;

    let residual = &vandermonde * &solution - &rhs;
    let residual_sum = residual.norm_squared();

    Ok(PolyFit {
        coefficients: solution.iter().copied().collect(),
        residual_sum,
    })
}
