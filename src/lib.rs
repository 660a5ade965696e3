//! sorb-rs: Gas-Adsorption Characterization Framework
//!
//! Characterizes porous materials from gas-adsorption isotherm measurements:
//! from the equilibrium (pressure, loading) relationship it derives surface
//! area, monolayer capacity and model isotherm parameters.
//!
//! # Architecture
//!
//! sorb-rs is built on two core principles:
//!
//! 1. **Separation of Data and Computation**
//!    - Isotherm containers carry measurements with explicit modes and units
//!    - Characterization routines are pure: they reject wrong modes instead
//!      of converting shared input behind the caller's back
//!
//! 2. **Typed Contracts**
//!    - Closed enums for modes, units and model variants (exhaustive `match`,
//!      no runtime string lookup)
//!    - Typed errors for preconditions and numeric failures; physical
//!      consistency issues come back as warning VALUES on the result, never
//!      as exceptions or global side channels
//!
//! # Quick Start
//!
//! ```rust
//! use sorb_rs::prelude::*;
//!
//! // A measured adsorption branch: relative pressure vs loading (mol/g)
//! let pressure: Vec<f64> = (1..=20).map(|i| 0.015 * i as f64).collect();
//! let loading: Vec<f64> = pressure.iter()
//!     .map(|&p| 0.003 * 100.0 * p / ((1.0 - p) * (1.0 + 99.0 * p)))
//!     .collect();
//!
//! let sample = IsothermSample::new(
//!     pressure, loading,
//!     Branch::Adsorption, AdsorbentMode::Mass,
//!     PressureMode::Relative, LoadingUnit::Mol,
//! ).unwrap();
//!
//! // BET surface area with automatic region selection
//! let result = area_bet(&sample, &Adsorbate::nitrogen(), None).unwrap();
//! println!("a(BET) = {:.1} m²/g, C = {:.0}", result.bet_area, result.c_const);
//! assert!(result.is_consistent());
//! ```
//!
//! # Modules
//!
//! - [`isotherm`]: Sample containers, adsorbate properties, explicit conversions
//! - [`characterization`]: The BET surface-area pipeline
//! - [`models`]: Parametric isotherm models behind one contract
//! - [`math`]: Regression and minimization engines
//! - [`output`]: Diagnostic plots (optional, purely presentational)

// Core modules
pub mod error;
pub mod isotherm;
pub mod math;

pub mod characterization;
pub mod models;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use sorb_rs::prelude::*;
    //! ```
    pub use crate::characterization::{area_bet,
                                      area_bet_raw,
                                      BetRegion,
                                      BetResult,
                                      BetWarning};
    pub use crate::error::SorbError;
    pub use crate::isotherm::{convert,
                              Adsorbate,
                              AdsorbentMode,
                              Branch,
                              IsothermSample,
                              LoadingUnit,
                              PressureMode,
                              PressureUnit};
    pub use crate::models::{FitDiagnostics,
                            Henry,
                            IsothermModel,
                            ModelKind,
                            Virial};
}
