//! Explicit unit and pressure-mode conversions
//!
//! Every function here returns a NEW [`IsothermSample`]; the input is never
//! mutated. Computations that need a specific mode reject mismatched input
//! with [`SorbError::InvalidMode`] and point callers here, so a normalization
//! is always a visible step in the caller's code.

use crate::error::SorbError;
use crate::isotherm::data::{IsothermSample, PressureMode, PressureUnit};

/// Convert an absolute-pressure sample to relative pressure (p/p0)
///
/// `saturation_pressure` must be expressed in the SAME unit as the sample's
/// pressure axis. Fails when the sample is already relative (converting
/// twice is almost certainly a caller bug) or when `saturation_pressure`
/// is not positive.
pub fn to_relative(
    sample: &IsothermSample,
    saturation_pressure: f64,
) -> Result<IsothermSample, SorbError> {
    match sample.pressure_mode() {
        PressureMode::Relative => Err(SorbError::InvalidMode {
            quantity: "pressure",
            expected: "absolute",
            got: "relative".to_string(),
        }),
        PressureMode::Absolute(_) => {
            if saturation_pressure <= 0.0 {
                return Err(SorbError::Parameter(format!(
                    "saturation pressure must be positive, got {}",
                    saturation_pressure
                )));
            }

            let pressure = sample
                .pressure()
                .iter()
                .map(|p| p / saturation_pressure)
                .collect();
            sample.with_pressure(pressure, PressureMode::Relative)
        }
    }
}

/// Convert a relative-pressure sample back to absolute pressure
///
/// Inverse of [`to_relative`]; `saturation_pressure` is expressed in `unit`.
pub fn to_absolute(
    sample: &IsothermSample,
    saturation_pressure: f64,
    unit: PressureUnit,
) -> Result<IsothermSample, SorbError> {
    match sample.pressure_mode() {
        PressureMode::Absolute(u) => Err(SorbError::InvalidMode {
            quantity: "pressure",
            expected: "relative",
            got: format!("absolute ({:?})", u),
        }),
        PressureMode::Relative => {
            if saturation_pressure <= 0.0 {
                return Err(SorbError::Parameter(format!(
                    "saturation pressure must be positive, got {}",
                    saturation_pressure
                )));
            }

            let pressure = sample
                .pressure()
                .iter()
                .map(|p| p * saturation_pressure)
                .collect();
            sample.with_pressure(pressure, PressureMode::Absolute(unit))
        }
    }
}

/// Re-express an absolute-pressure sample in another pressure unit
pub fn convert_pressure_unit(
    sample: &IsothermSample,
    target: PressureUnit,
) -> Result<IsothermSample, SorbError> {
    match sample.pressure_mode() {
        PressureMode::Relative => Err(SorbError::InvalidMode {
            quantity: "pressure",
            expected: "absolute",
            got: "relative".to_string(),
        }),
        PressureMode::Absolute(from) => {
            let factor = from.to_pascal() / target.to_pascal();
            let pressure = sample.pressure().iter().map(|p| p * factor).collect();
            sample.with_pressure(pressure, PressureMode::Absolute(target))
        }
    }
}
