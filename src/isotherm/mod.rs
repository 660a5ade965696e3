//! Isotherm data containers and unit/mode machinery
//!
//! This module defines the narrow data interface consumed by the
//! characterization routines:
//!
//! - [`IsothermSample`]: one measured branch as ordered (pressure, loading)
//!   pairs, tagged with its modes and units
//! - [`Adsorbate`]: immutable physical-property lookup for the probe gas
//! - [`convert`]: explicit unit and pressure-mode conversions
//!
//! # Explicit conversion
//!
//! Computations in this crate never mutate a sample to normalize it.
//! When a routine needs a different mode it fails with
//! [`SorbError::InvalidMode`](crate::error::SorbError) and the caller opts in:
//!
//! ```rust
//! use sorb_rs::isotherm::{IsothermSample, Branch, AdsorbentMode, PressureMode,
//!                         PressureUnit, LoadingUnit, convert};
//!
//! let absolute = IsothermSample::new(
//!     vec![1_000.0, 10_000.0, 50_000.0],
//!     vec![0.001, 0.004, 0.008],
//!     Branch::Adsorption,
//!     AdsorbentMode::Mass,
//!     PressureMode::Absolute(PressureUnit::Pascal),
//!     LoadingUnit::Mol,
//! ).unwrap();
//!
//! // p0 of N2 at 77 K, in the same unit as the sample
//! let relative = convert::to_relative(&absolute, 101_325.0).unwrap();
//! assert_eq!(relative.pressure_mode(), PressureMode::Relative);
//! // the original sample is untouched
//! assert_eq!(absolute.pressure()[0], 1_000.0);
//! ```

pub mod adsorbate;
pub mod convert;
pub mod data;

pub use adsorbate::Adsorbate;
pub use data::{AdsorbentMode, Branch, IsothermSample, LoadingUnit, PressureMode, PressureUnit};
