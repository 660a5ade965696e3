//! Virial-type isotherm model
//!
//! Expresses pressure as loading times an exponential polynomial in loading:
//!
//! ```text
//! p(n) = n exp(-ln KH + A n + B n² + C n³)
//! ```
//!
//! Useful for Henry-regime extrapolation at low pressure. The forward
//! direction is closed form; the inverse (`loading`) has none and is solved
//! per point by minimizing the squared pressure residual with the capped
//! derivative-free minimizer. Fitting is a cubic least-squares regression
//! of `ln(p/n)` in `n`.

use crate::error::SorbError;
use crate::math::{minimize_scalar, polyfit, MinimizeOptions};
use crate::models::{FitDiagnostics, IsothermModel, Parameters};
use log::debug;
use rayon::prelude::*;

/// Virial model, four parameters `KH`, `A`, `B`, `C`
///
/// # Example
///
/// ```rust
/// use sorb_rs::models::{Virial, IsothermModel};
///
/// let model = Virial::new(5.0, 0.05, 0.005, 0.0005);
/// let p = model.pressure(2.0).unwrap();
/// let n = model.loading(p).unwrap();
/// assert!((n - 2.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Virial {
    kh: f64,
    a: f64,
    b: f64,
    c: f64,
    minimize: MinimizeOptions,
}

impl Virial {
    /// Create a Virial model from its four constants
    pub fn new(kh: f64, a: f64, b: f64, c: f64) -> Self {
        Self {
            kh,
            a,
            b,
            c,
            minimize: MinimizeOptions::default(),
        }
    }

    /// Replace the minimizer cap/tolerance used by the loading inversion
    pub fn with_minimize_options(mut self, options: MinimizeOptions) -> Self {
        self.minimize = options;
        self
    }

    /// Invert `pressure` at one point by residual minimization
    fn invert_pressure(&self, target: f64) -> Result<f64, SorbError> {
        let objective = |x: f64| {
            let p = x * (-self.kh.ln() + self.a * x + self.b * x * x + self.c * x.powi(3)).exp();
            (p - target) * (p - target)
        };
        // Seeding at the target pressure keeps the search in the Henry
        // regime where loading and pressure are of the same order.
        minimize_scalar(objective, target, &self.minimize)
    }
}

impl Default for Virial {
    /// Unparameterized model; constants are NaN until fitted
    fn default() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }
}

impl IsothermModel for Virial {
    fn name(&self) -> &'static str {
        "Virial"
    }

    fn params(&self) -> Parameters {
        Parameters::from([
            ("KH".to_string(), self.kh),
            ("A".to_string(), self.a),
            ("B".to_string(), self.b),
            ("C".to_string(), self.c),
        ])
    }

    /// No closed form: solved numerically per point
    ///
    /// Fails with [`SorbError::Calculation`] carrying the minimizer
    /// diagnostic when the residual search does not converge.
    fn loading(&self, pressure: f64) -> Result<f64, SorbError> {
        self.invert_pressure(pressure)
    }

    /// Parallel elementwise inversion over a pressure array
    fn loading_many(&self, pressure: &[f64]) -> Result<Vec<f64>, SorbError> {
        pressure
            .par_iter()
            .map(|&p| self.invert_pressure(p))
            .collect()
    }

    fn pressure(&self, loading: f64) -> Result<f64, SorbError> {
        let exponent =
            -self.kh.ln() + self.a * loading + self.b * loading * loading + self.c * loading.powi(3);
        Ok(loading * exponent.exp())
    }

    /// Not defined for the virial form
    fn spreading_pressure(&self, _pressure: f64) -> Result<f64, SorbError> {
        Err(SorbError::Unsupported {
            model: "Virial",
            operation: "spreading_pressure",
        })
    }

    fn default_guess(&self, saturation_loading: f64, langmuir_k: f64) -> Parameters {
        Parameters::from([
            ("KH".to_string(), saturation_loading * langmuir_k),
            ("A".to_string(), 0.0),
            ("B".to_string(), 0.0),
            ("C".to_string(), 0.0),
        ])
    }

    /// Cubic least-squares fit of `ln(p/n)` against `n`
    ///
    /// With coefficients ordered highest degree first `[c0, c1, c2, c3]`:
    /// `C = c0`, `B = c1`, `A = c2`, `KH = exp(-c3)`. The guess is unused —
    /// the polynomial regression needs no seed. Returns the RMSE of the
    /// polynomial fit, `sqrt(rss / n_points)`.
    fn fit(
        &mut self,
        loading: &[f64],
        pressure: &[f64],
        _guess: &Parameters,
    ) -> Result<FitDiagnostics, SorbError> {
        if loading.len() != pressure.len() {
            return Err(SorbError::LengthMismatch {
                pressure_len: pressure.len(),
                loading_len: loading.len(),
            });
        }

        let ln_p_over_n: Vec<f64> = pressure
            .iter()
            .zip(loading.iter())
            .map(|(&p, &n)| (p / n).ln())
            .collect();

        let poly = polyfit(loading, &ln_p_over_n, 3)?;

        self.c = poly.coefficients[0];
        self.b = poly.coefficients[1];
        self.a = poly.coefficients[2];
        self.kh = (-poly.coefficients[3]).exp();

        let rmse = (poly.residual_sum / pressure.len() as f64).sqrt();
        debug!(
            "Virial fit: KH = {:.4e}, A = {:.4e}, B = {:.4e}, C = {:.4e}, rmse = {:.3e}",
            self.kh, self.a, self.b, self.c, rmse
        );

        Ok(FitDiagnostics { rmse })
    }
}
