//! Derivation of BET parameters from the fitted line
//!
//! Converts the slope and intercept of the BET plot into the physically
//! meaningful quantities: monolayer capacity, BET C constant, monolayer
//! pressure and specific surface area.
//!
//! There is no internal failure path. An intercept near zero sends the
//! C constant and surface area to very large values; the consistency
//! validator flags the symptoms (negative C, monolayer outside region)
//! rather than this function guarding them.

/// Avogadro's number, 1/mol
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// BET quantities derived from the slope and intercept of the linear region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetParameters {
    /// Loading at the statistical monolayer, mol per unit adsorbent
    pub n_monolayer: f64,
    /// Relative pressure at the statistical monolayer, dimensionless
    pub p_monolayer: f64,
    /// BET C constant, unitless
    pub c_const: f64,
    /// Specific surface area, m² per unit adsorbent
    pub bet_area: f64,
}

/// Derive the BET parameters from a fitted slope/intercept pair
///
/// `cross_section` is the adsorbate's molecular cross-sectional area in nm²;
/// the 1e-18 factor converts it to m² before scaling by Avogadro's number.
pub fn derive_bet_parameters(slope: f64, intercept: f64, cross_section: f64) -> BetParameters {
    let c_const = slope / intercept + 1.0;
    let n_monolayer = 1.0 / (intercept * c_const);
    let p_monolayer = 1.0 / (c_const.sqrt() + 1.0);
    let bet_area = n_monolayer * cross_section * 1e-18 * AVOGADRO;

    BetParameters {
        n_monolayer,
        p_monolayer,
        c_const,
        bet_area,
    }
}
