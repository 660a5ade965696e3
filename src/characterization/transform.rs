//! Roquerol and BET linearization transforms
//!
//! Pure elementwise transforms mapping raw (loading, pressure) arrays to
//! the linearized coordinates used by region selection and regression:
//!
//! - Roquerol: `n (1 - p)`
//! - BET:      `p / (n (1 - p))`
//!
//! Both are defined for relative pressure in [0, 1). The BET transform
//! produces ±inf/NaN where the Roquerol value is zero; callers guard this
//! by selecting a region that excludes such points, as the BET method
//! prescribes.

/// Roquerol transform of one point: `loading * (1 - pressure)`
#[inline]
pub fn roq_point(loading: f64, pressure: f64) -> f64 {
    loading * (1.0 - pressure)
}

/// BET transform of one point: `pressure / (loading * (1 - pressure))`
#[inline]
pub fn bet_point(loading: f64, pressure: f64) -> f64 {
    pressure / roq_point(loading, pressure)
}

/// Elementwise Roquerol transform of paired arrays
pub fn roq_transform(loading: &[f64], pressure: &[f64]) -> Vec<f64> {
    loading
        .iter()
        .zip(pressure.iter())
        .map(|(&l, &p)| roq_point(l, p))
        .collect()
}

/// Elementwise BET transform of paired arrays
pub fn bet_transform(loading: &[f64], pressure: &[f64]) -> Vec<f64> {
    loading
        .iter()
        .zip(pressure.iter())
        .map(|(&l, &p)| bet_point(l, p))
        .collect()
}
