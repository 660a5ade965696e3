//! Adsorbate physical-property lookup
//!
//! An [`Adsorbate`] is an immutable map of named physical constants for the
//! probe gas. The BET routines read exactly one property,
//! `"cross_sectional_area"` (nm²); other properties can be attached freely
//! by callers (saturation pressure, molar mass, ...).

use crate::error::SorbError;
use std::collections::HashMap;

/// Property key read by the BET surface-area calculation (nm²)
pub const CROSS_SECTIONAL_AREA: &str = "cross_sectional_area";

/// Immutable physical constants for one probe gas
///
/// # Example
///
/// ```rust
/// use sorb_rs::isotherm::Adsorbate;
///
/// let n2 = Adsorbate::nitrogen();
/// let sigma = n2.get_prop("cross_sectional_area").unwrap();
/// assert!((sigma - 0.162).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Adsorbate {
    name: String,
    properties: HashMap<String, f64>,
}

impl Adsorbate {
    /// Create an adsorbate from a name and property map
    pub fn new(name: impl Into<String>, properties: HashMap<String, f64>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Adsorbate name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a named property
    ///
    /// Fails with [`SorbError::Parameter`] when the property is not present,
    /// naming both the adsorbate and the missing key.
    pub fn get_prop(&self, name: &str) -> Result<f64, SorbError> {
        self.properties.get(name).copied().ok_or_else(|| {
            SorbError::Parameter(format!(
                "adsorbate '{}' has no property '{}'",
                self.name, name
            ))
        })
    }

    /// Molecular cross-sectional area on the surface, in nm²
    pub fn cross_sectional_area(&self) -> Result<f64, SorbError> {
        self.get_prop(CROSS_SECTIONAL_AREA)
    }

    fn with_cross_section(name: &str, sigma: f64) -> Self {
        let mut properties = HashMap::new();
        properties.insert(CROSS_SECTIONAL_AREA.to_string(), sigma);
        Self::new(name, properties)
    }

    /// Nitrogen at 77 K, the standard BET probe (σ = 0.162 nm²)
    pub fn nitrogen() -> Self {
        Self::with_cross_section("N2", 0.162)
    }

    /// Argon at 87 K (σ = 0.142 nm²)
    pub fn argon() -> Self {
        Self::with_cross_section("Ar", 0.142)
    }

    /// Krypton at 77 K (σ = 0.210 nm²)
    pub fn krypton() -> Self {
        Self::with_cross_section("Kr", 0.210)
    }

    /// Carbon dioxide at 273 K (σ = 0.210 nm²)
    pub fn carbon_dioxide() -> Self {
        Self::with_cross_section("CO2", 0.210)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_property_is_a_parameter_error() {
        let n2 = Adsorbate::nitrogen();
        let err = n2.get_prop("saturation_pressure").unwrap_err();
        assert!(matches!(err, SorbError::Parameter(_)));
        assert!(err.to_string().contains("N2"));
        assert!(err.to_string().contains("saturation_pressure"));
    }

    #[test]
    fn test_builtin_cross_sections() {
        assert_eq!(Adsorbate::nitrogen().cross_sectional_area().unwrap(), 0.162);
        assert_eq!(Adsorbate::argon().cross_sectional_area().unwrap(), 0.142);
        assert_eq!(Adsorbate::krypton().cross_sectional_area().unwrap(), 0.210);
    }
}
