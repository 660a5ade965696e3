//! Common utilities for integration tests

pub mod synthetic;
pub mod test_helpers;

// Re-export commonly used items
pub use synthetic::{ideal_bet_sample, n2_77k_sample, virial_data};
pub use test_helpers::relative_error;
