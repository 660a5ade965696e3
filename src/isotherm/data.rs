//! Isotherm sample container and type-safe mode/unit identifiers
//!
//! Follows the same pattern as the physical-quantity enums elsewhere in the
//! crate: closed enums instead of strings, so invalid modes cannot be
//! constructed and matches are exhaustive.

use crate::error::SorbError;
use std::fmt;

// =================================================================================================
// Mode and Unit Identifiers (Type-safe Enums)
// =================================================================================================

/// Measurement branch of an isotherm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Increasing-pressure leg
    Adsorption,
    /// Decreasing-pressure leg
    Desorption,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Adsorption => write!(f, "adsorption"),
            Branch::Desorption => write!(f, "desorption"),
        }
    }
}

/// Basis in which the amount of adsorbent is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdsorbentMode {
    /// Per mass of adsorbent (required by the BET routines)
    Mass,
    /// Per volume of adsorbent
    Volume,
}

impl fmt::Display for AdsorbentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdsorbentMode::Mass => write!(f, "mass"),
            AdsorbentMode::Volume => write!(f, "volume"),
        }
    }
}

/// Unit of absolute pressure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressureUnit {
    Pascal,
    Bar,
    Atmosphere,
    MmHg,
}

impl PressureUnit {
    /// Conversion factor to pascal
    pub fn to_pascal(self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::Bar => 100_000.0,
            PressureUnit::Atmosphere => 101_325.0,
            PressureUnit::MmHg => 133.322,
        }
    }
}

/// How the pressure axis is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressureMode {
    /// Absolute pressure in the given unit
    Absolute(PressureUnit),
    /// Relative pressure p/p0, dimensionless in [0, 1)
    Relative,
}

impl fmt::Display for PressureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressureMode::Absolute(_) => write!(f, "absolute"),
            PressureMode::Relative => write!(f, "relative"),
        }
    }
}

/// Molar unit of the loading axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadingUnit {
    Mol,
    Mmol,
    Kmol,
}

impl LoadingUnit {
    /// Conversion factor to mol
    pub fn to_mol(self) -> f64 {
        match self {
            LoadingUnit::Mol => 1.0,
            LoadingUnit::Mmol => 0.001,
            LoadingUnit::Kmol => 1000.0,
        }
    }
}

// =================================================================================================
// Isotherm Sample
// =================================================================================================

/// One measured isotherm branch: ordered (pressure, loading) pairs
///
/// Pressure and loading share one index space; the constructor enforces
/// equal lengths. Monotonic non-decreasing pressure within a branch is
/// assumed from the measurement but not enforced here.
///
/// # Example
///
/// ```rust
/// use sorb_rs::isotherm::{IsothermSample, Branch, AdsorbentMode, PressureMode, LoadingUnit};
///
/// let sample = IsothermSample::new(
///     vec![0.05, 0.10, 0.20],
///     vec![0.002, 0.003, 0.004],
///     Branch::Adsorption,
///     AdsorbentMode::Mass,
///     PressureMode::Relative,
///     LoadingUnit::Mol,
/// ).unwrap();
///
/// assert_eq!(sample.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IsothermSample {
    pressure: Vec<f64>,
    loading: Vec<f64>,
    branch: Branch,
    mode_adsorbent: AdsorbentMode,
    mode_pressure: PressureMode,
    loading_unit: LoadingUnit,
}

impl IsothermSample {
    /// Create a new sample, validating that both arrays share one index space
    pub fn new(
        pressure: Vec<f64>,
        loading: Vec<f64>,
        branch: Branch,
        mode_adsorbent: AdsorbentMode,
        mode_pressure: PressureMode,
        loading_unit: LoadingUnit,
    ) -> Result<Self, SorbError> {
        if pressure.len() != loading.len() {
            return Err(SorbError::LengthMismatch {
                pressure_len: pressure.len(),
                loading_len: loading.len(),
            });
        }

        Ok(Self {
            pressure,
            loading,
            branch,
            mode_adsorbent,
            mode_pressure,
            loading_unit,
        })
    }

    /// Pressure values, in the sample's pressure mode
    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    /// Loading values, in the sample's loading unit
    pub fn loading(&self) -> &[f64] {
        &self.loading
    }

    /// Loading values converted to mol (fresh allocation, sample untouched)
    pub fn loading_in_mol(&self) -> Vec<f64> {
        let factor = self.loading_unit.to_mol();
        self.loading.iter().map(|l| l * factor).collect()
    }

    /// Number of measurement points
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    /// Whether the sample holds no points
    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }

    /// Measurement branch
    pub fn branch(&self) -> Branch {
        self.branch
    }

    /// Adsorbent basis
    pub fn adsorbent_mode(&self) -> AdsorbentMode {
        self.mode_adsorbent
    }

    /// Pressure mode
    pub fn pressure_mode(&self) -> PressureMode {
        self.mode_pressure
    }

    /// Loading unit
    pub fn loading_unit(&self) -> LoadingUnit {
        self.loading_unit
    }

    /// Rebuild with new pressure values and mode, keeping everything else
    ///
    /// Used by the conversion routines; always returns a new sample.
    pub(crate) fn with_pressure(
        &self,
        pressure: Vec<f64>,
        mode: PressureMode,
    ) -> Result<Self, SorbError> {
        Self::new(
            pressure,
            self.loading.clone(),
            self.branch,
            self.mode_adsorbent,
            mode,
            self.loading_unit,
        )
    }
}
