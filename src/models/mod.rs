//! Parametric isotherm models
//!
//! # The Contract
//!
//! Every model variant implements [`IsothermModel`], the capability set
//! consumed by higher-level fitting and IAST routines:
//!
//! - `loading(pressure)`: amount adsorbed at a pressure
//! - `pressure(loading)`: pressure at an amount adsorbed
//! - `spreading_pressure(pressure)`: reduced spreading pressure
//! - `default_guess(...)`: starting parameters for a fit
//! - `fit(...)`: regress the parameters against measured data
//!
//! A variant that cannot express one of these fails loudly with
//! [`SorbError::Unsupported`](crate::error::SorbError) — never a silent
//! wrong value.
//!
//! # Dispatch
//!
//! Variants are enumerated by [`ModelKind`], a closed enum dispatched by
//! exhaustive `match`. Adding a variant is a compile-time event, not a
//! runtime string lookup; `ModelKind::from_name` exists only for parsing at
//! the crate boundary.
//!
//! # Available Models
//!
//! ## [`Henry`] — closed form
//!
//! Linear law `n = KH p`, exact algebraic inverse, one parameter. Only
//! trust it where the data really is linear; it has no saturation.
//!
//! ## [`Virial`] — nonlinear
//!
//! `p = n exp(-ln KH + A n + B n² + C n³)`, four parameters, fitted by a
//! cubic polynomial regression of `ln(p/n)`; loading is recovered per point
//! by a derivative-free minimizer.
//!
//! # Example
//!
//! ```rust
//! use sorb_rs::models::{IsothermModel, ModelKind};
//!
//! let model = ModelKind::Henry.create();
//! let guess = model.default_guess(4.5, 0.2);
//! assert_eq!(guess["KH"], 0.9);
//! ```

pub mod henry;
pub mod virial;

pub use henry::Henry;
pub use virial::Virial;

use crate::error::SorbError;
use std::collections::HashMap;

/// Named model parameters, as exposed for introspection and guesses
pub type Parameters = HashMap<String, f64>;

/// Diagnostics returned by a successful model fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitDiagnostics {
    /// Root-mean-square error of the fit in its regression coordinates
    pub rmse: f64,
}

// =================================================================================================
// The Model Contract
// =================================================================================================

/// Capability contract shared by all isotherm model variants
///
/// Object safe: higher layers hold `Box<dyn IsothermModel>` and dispatch
/// through it. Each variant owns its parameters; `fit` is the only
/// operation that mutates them.
pub trait IsothermModel {
    /// Model name, for messages and logs
    fn name(&self) -> &'static str;

    /// Current parameter values as a name → value map
    fn params(&self) -> Parameters;

    /// Loading at the given pressure
    fn loading(&self, pressure: f64) -> Result<f64, SorbError>;

    /// Elementwise loading over a pressure array
    ///
    /// Default: scalar [`IsothermModel::loading`] per element. Variants with
    /// an expensive per-point inversion override this with a parallel path.
    fn loading_many(&self, pressure: &[f64]) -> Result<Vec<f64>, SorbError> {
        pressure.iter().map(|&p| self.loading(p)).collect()
    }

    /// Pressure at the given loading
    fn pressure(&self, loading: f64) -> Result<f64, SorbError>;

    /// Reduced spreading pressure at the given pressure
    fn spreading_pressure(&self, pressure: f64) -> Result<f64, SorbError>;

    /// Starting parameter guess from saturation loading and a Langmuir constant
    fn default_guess(&self, saturation_loading: f64, langmuir_k: f64) -> Parameters;

    /// Fit the model to measured data, mutating its parameters
    ///
    /// `guess` seeds variants that need a starting point. Returns the fit
    /// diagnostics; on failure the parameters are left untouched.
    fn fit(
        &mut self,
        loading: &[f64],
        pressure: &[f64],
        guess: &Parameters,
    ) -> Result<FitDiagnostics, SorbError>;
}

// =================================================================================================
// Closed Variant Dispatch
// =================================================================================================

/// The closed set of model variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Henry,
    Virial,
}

impl ModelKind {
    /// Instantiate the variant with unset (NaN) parameters
    pub fn create(self) -> Box<dyn IsothermModel> {
        match self {
            ModelKind::Henry => Box::new(Henry::default()),
            ModelKind::Virial => Box::new(Virial::default()),
        }
    }

    /// Parse a model name at the crate boundary
    pub fn from_name(name: &str) -> Result<Self, SorbError> {
        match name {
            "Henry" => Ok(ModelKind::Henry),
            "Virial" => Ok(ModelKind::Virial),
            other => Err(SorbError::Parameter(format!(
                "unknown isotherm model '{}' (available: Henry, Virial)",
                other
            ))),
        }
    }
}
