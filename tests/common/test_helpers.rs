//! Helper functions for integration tests

/// Relative error between a computed and a reference value
pub fn relative_error(computed: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        computed.abs()
    } else {
        ((computed - reference) / reference).abs()
    }
}
