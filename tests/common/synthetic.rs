//! Synthetic isotherm data for integration tests
//!
//! All generators are noiseless and built from closed-form isotherm
//! equations, so every reference value can be computed by hand.

use sorb_rs::isotherm::{AdsorbentMode, Branch, IsothermSample, LoadingUnit, PressureMode};
use sorb_rs::models::{IsothermModel, Virial};

/// Ideal multilayer-adsorption loading at relative pressure `p`
///
/// `n(p) = n_m C p / ((1-p)(1 + (C-1)p))` — the BET equation itself, so the
/// BET transform of these points is exactly linear everywhere.
pub fn bet_loading(p: f64, n_monolayer: f64, c_const: f64) -> f64 {
    n_monolayer * c_const * p / ((1.0 - p) * (1.0 + (c_const - 1.0) * p))
}

/// A mass-basis, relative-pressure sample following the ideal BET equation
pub fn ideal_bet_sample(
    n_monolayer: f64,
    c_const: f64,
    n_points: usize,
    p_max: f64,
) -> IsothermSample {
    let pressure: Vec<f64> = (1..=n_points)
        .map(|i| p_max * i as f64 / n_points as f64)
        .collect();
    let loading: Vec<f64> = pressure
        .iter()
        .map(|&p| bet_loading(p, n_monolayer, c_const))
        .collect();

    IsothermSample::new(
        pressure,
        loading,
        Branch::Adsorption,
        AdsorbentMode::Mass,
        PressureMode::Relative,
        LoadingUnit::Mol,
    )
    .expect("equal-length synthetic arrays")
}

/// A synthetic N2-at-77K-like isotherm: 20 points over p/p0 = 0.015..0.30
///
/// n_m = 0.003 mol/g, C = 100. With sigma(N2) = 0.162 nm² the hand-computed
/// reference area is n_m * 0.162e-18 * N_A ≈ 292.7 m²/g.
pub fn n2_77k_sample() -> IsothermSample {
    ideal_bet_sample(0.003, 100.0, 20, 0.30)
}

/// Noiseless (loading, pressure) data generated from a known Virial model
pub fn virial_data(model: &Virial, n_points: usize, n_max: f64) -> (Vec<f64>, Vec<f64>) {
    let loading: Vec<f64> = (1..=n_points)
        .map(|i| n_max * i as f64 / n_points as f64)
        .collect();
    let pressure: Vec<f64> = loading
        .iter()
        .map(|&n| model.pressure(n).expect("closed-form pressure"))
        .collect();
    (loading, pressure)
}
