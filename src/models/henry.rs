//! Henry's law isotherm model
//!
//! The simplest isotherm: loading proportional to pressure, `n = KH p`.
//! Realistic only in the dilute regime — adsorption sites saturate at
//! higher pressures, which a linear law cannot express. Typically seeded
//! from another model's fitted constants rather than regressed itself.

use crate::error::SorbError;
use crate::models::{FitDiagnostics, IsothermModel, Parameters};

/// Henry's law model, one parameter `KH`
///
/// # Example
///
/// ```rust
/// use sorb_rs::models::{Henry, IsothermModel};
///
/// let model = Henry::new(2.5);
/// assert_eq!(model.loading(0.4).unwrap(), 1.0);
/// assert_eq!(model.pressure(1.0).unwrap(), 0.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Henry {
    kh: f64,
}

impl Henry {
    /// Create a Henry model with the given constant
    pub fn new(kh: f64) -> Self {
        Self { kh }
    }

    /// The Henry constant
    pub fn kh(&self) -> f64 {
        self.kh
    }
}

impl Default for Henry {
    /// Unparameterized model; `KH` is NaN until seeded
    fn default() -> Self {
        Self { kh: f64::NAN }
    }
}

impl IsothermModel for Henry {
    fn name(&self) -> &'static str {
        "Henry"
    }

    fn params(&self) -> Parameters {
        Parameters::from([("KH".to_string(), self.kh)])
    }

    fn loading(&self, pressure: f64) -> Result<f64, SorbError> {
        Ok(self.kh * pressure)
    }

    fn pressure(&self, loading: f64) -> Result<f64, SorbError> {
        Ok(loading / self.kh)
    }

    /// For Henry's law the reduced spreading pressure integrates to `KH p`
    fn spreading_pressure(&self, pressure: f64) -> Result<f64, SorbError> {
        Ok(self.kh * pressure)
    }

    fn default_guess(&self, saturation_loading: f64, langmuir_k: f64) -> Parameters {
        Parameters::from([("KH".to_string(), saturation_loading * langmuir_k)])
    }

    /// Not defined: the closed-form constant is seeded, never regressed here
    fn fit(
        &mut self,
        _loading: &[f64],
        _pressure: &[f64],
        _guess: &Parameters,
    ) -> Result<FitDiagnostics, SorbError> {
        Err(SorbError::Unsupported {
            model: "Henry",
            operation: "fit",
        })
    }
}
