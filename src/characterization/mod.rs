//! BET surface-area characterization
//!
//! This module wires the characterization pipeline end to end:
//!
//! ```text
//! raw isotherm → mode guards → region selection → BET transform
//!              → linear regression → parameter derivation
//!              → consistency validation → BetResult
//! ```
//!
//! # Module Organization
//!
//! - **`transform`**: the pure Roquerol and BET linearization transforms
//! - **`region`**: automatic/manual selection of the linear fitting region
//! - **`parameters`**: slope/intercept → monolayer capacity, C constant, area
//! - **`validation`**: the three Roquerol consistency checks (non-fatal)
//! - **[`area_bet`] / [`area_bet_raw`]**: the orchestrators
//!
//! # Purity
//!
//! The orchestrator never mutates its inputs and never draws anything.
//! Samples in the wrong mode are rejected with a typed error; callers
//! normalize explicitly through [`crate::isotherm::convert`]. Diagnostic
//! plots live in [`crate::output::visualization`] and consume a finished
//! [`BetResult`].
//!
//! # Quick Start Example
//!
//! ```rust
//! use sorb_rs::characterization::area_bet;
//! use sorb_rs::isotherm::{Adsorbate, IsothermSample, Branch, AdsorbentMode,
//!                         PressureMode, LoadingUnit};
//!
//! // Synthetic BET-shaped isotherm: n_m = 0.003 mol/g, C = 100
//! let pressure: Vec<f64> = (1..=20).map(|i| 0.015 * i as f64).collect();
//! let loading: Vec<f64> = pressure.iter()
//!     .map(|&p| 0.003 * 100.0 * p / ((1.0 - p) * (1.0 + (100.0 - 1.0) * p)))
//!     .collect();
//!
//! let sample = IsothermSample::new(
//!     pressure, loading,
//!     Branch::Adsorption, AdsorbentMode::Mass,
//!     PressureMode::Relative, LoadingUnit::Mol,
//! ).unwrap();
//!
//! let result = area_bet(&sample, &Adsorbate::nitrogen(), None).unwrap();
//! assert!(result.c_const > 0.0);
//! assert!(result.corr_coef > 0.99);
//! ```

pub mod parameters;
pub mod region;
pub mod transform;
pub mod validation;

pub use parameters::{derive_bet_parameters, BetParameters, AVOGADRO};
pub use region::{select_region, BetRegion};
pub use transform::{bet_transform, roq_transform};
pub use validation::{validate, BetWarning};

use crate::error::SorbError;
use crate::isotherm::{Adsorbate, AdsorbentMode, IsothermSample, PressureMode};
use crate::math::fit_line;
use log::{debug, info};

// =================================================================================================
// Result Record
// =================================================================================================

/// Immutable record of one BET surface-area computation
///
/// Computed once per invocation and never mutated afterwards; safe to cache
/// externally by (sample, region) key.
#[derive(Debug, Clone, PartialEq)]
pub struct BetResult {
    /// Specific surface area, m² per unit adsorbent
    pub bet_area: f64,
    /// BET C constant, unitless
    pub c_const: f64,
    /// Loading at the statistical monolayer, mol per unit adsorbent
    pub n_monolayer: f64,
    /// Relative pressure at the statistical monolayer
    pub p_monolayer: f64,
    /// Slope of the BET plot
    pub slope: f64,
    /// Intercept of the BET plot
    pub intercept: f64,
    /// Pearson correlation coefficient over the fitted region
    pub corr_coef: f64,
    /// The index range selected for the linear fit
    pub region: BetRegion,
    /// Roquerol consistency violations (empty when fully consistent)
    pub warnings: Vec<BetWarning>,
}

impl BetResult {
    /// Whether every Roquerol consistency check passed
    pub fn is_consistent(&self) -> bool {
        self.warnings.is_empty()
    }
}

// =================================================================================================
// Orchestrators
// =================================================================================================

/// Compute the BET surface area of an isotherm sample
///
/// # Preconditions
///
/// - the sample's adsorbent mode is mass
/// - the sample's pressure mode is relative
///
/// Violations fail fast with [`SorbError::InvalidMode`]; convert first with
/// the explicit steps in [`crate::isotherm::convert`]. The sample is never
/// mutated. Loading is normalized to mol on a local copy.
///
/// `limits` optionally gives `(low, high)` relative-pressure bounds for
/// manual region selection; `None` selects automatically.
pub fn area_bet(
    sample: &IsothermSample,
    adsorbate: &Adsorbate,
    limits: Option<(f64, f64)>,
) -> Result<BetResult, SorbError> {
    // ====== Step 1: Mode guards ======

    if sample.adsorbent_mode() != AdsorbentMode::Mass {
        return Err(SorbError::InvalidMode {
            quantity: "adsorbent",
            expected: "mass",
            got: sample.adsorbent_mode().to_string(),
        });
    }
    if sample.pressure_mode() != PressureMode::Relative {
        return Err(SorbError::InvalidMode {
            quantity: "pressure",
            expected: "relative",
            got: sample.pressure_mode().to_string(),
        });
    }

    // ====== Step 2: Extract arrays, normalize loading to mol ======

    let cross_section = adsorbate.cross_sectional_area()?;
    let loading = sample.loading_in_mol();
    let pressure = sample.pressure();

    debug!(
        "BET analysis of {} points, adsorbate {} (sigma = {} nm2)",
        sample.len(),
        adsorbate.name(),
        cross_section
    );

    area_bet_raw(&loading, pressure, cross_section, limits)
}

/// Low-level BET computation over bare arrays
///
/// Advanced entry point mirroring [`area_bet`] without the sample container:
/// `loading` in mol per unit adsorbent, `pressure` relative, `cross_section`
/// in nm². Every precondition on array shape still applies.
pub fn area_bet_raw(
    loading: &[f64],
    pressure: &[f64],
    cross_section: f64,
    limits: Option<(f64, f64)>,
) -> Result<BetResult, SorbError> {
    if pressure.len() != loading.len() {
        return Err(SorbError::LengthMismatch {
            pressure_len: pressure.len(),
            loading_len: loading.len(),
        });
    }

    // ====== Step 1: Region selection ======

    let region = select_region(pressure, loading, limits)?;
    debug!(
        "selected region [{}, {}] ({} points, p = {:.4}..{:.4})",
        region.minimum,
        region.maximum,
        region.len(),
        pressure[region.minimum],
        pressure[region.maximum]
    );

    // ====== Step 2: Transform and regress over the region ======

    let p_region = &pressure[region.minimum..=region.maximum];
    let l_region = &loading[region.minimum..=region.maximum];
    let bet_points = bet_transform(l_region, p_region);

    let line = fit_line(p_region, &bet_points)?;

    // ====== Step 3: Derive the BET parameters ======

    let params = derive_bet_parameters(line.slope, line.intercept, cross_section);

    info!(
        "BET fit: slope = {:.4}, intercept = {:.4}, C = {:.1}, n_m = {:.4e} mol, a = {:.1} m2",
        line.slope, line.intercept, params.c_const, params.n_monolayer, params.bet_area
    );

    // ====== Step 4: Consistency validation (non-fatal) ======

    let warnings = validate(
        params.c_const,
        line.corr_coef,
        loading,
        &region,
        params.n_monolayer,
    );

    Ok(BetResult {
        bet_area: params.bet_area,
        c_const: params.c_const,
        n_monolayer: params.n_monolayer,
        p_monolayer: params.p_monolayer,
        slope: line.slope,
        intercept: line.intercept,
        corr_coef: line.corr_coef,
        region,
        warnings,
    })
}
