//! Error types for the characterization and model-fitting routines
//!
//! The crate distinguishes four failure classes:
//!
//! - **Precondition violations** (`LengthMismatch`, `InvalidMode`,
//!   `InvalidRegion`, `Parameter`): detected before any computation runs.
//! - **Numeric failures** (`Calculation`): a regression or minimizer could
//!   not produce a result; the message carries the solver's diagnostic.
//! - **Unsupported operations** (`Unsupported`): the model variant does not
//!   define the requested operation. Never silently returns a wrong value.
//! - Physical-consistency issues are NOT errors — they are returned as
//!   [`BetWarning`](crate::characterization::BetWarning) values alongside a
//!   successful result.

use thiserror::Error;

/// Errors raised by characterization and model-fitting routines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SorbError {
    /// Pressure and loading arrays must share one index space
    #[error("pressure ({pressure_len}) and loading ({loading_len}) arrays have different lengths")]
    LengthMismatch {
        pressure_len: usize,
        loading_len: usize,
    },

    /// The sample is expressed in a mode the computation cannot accept
    ///
    /// Conversion is an explicit caller step (see [`crate::isotherm::convert`]);
    /// computations never convert shared input in place.
    #[error("invalid {quantity} mode: expected {expected}, got {got}")]
    InvalidMode {
        quantity: &'static str,
        expected: &'static str,
        got: String,
    },

    /// The selected region cannot support a linear fit
    #[error("invalid fitting region [{minimum}, {maximum}]: {reason}")]
    InvalidRegion {
        minimum: usize,
        maximum: usize,
        reason: &'static str,
    },

    /// A supplied parameter or property is missing or unusable
    #[error("parameter error: {0}")]
    Parameter(String),

    /// A numeric routine failed or did not converge
    #[error("calculation failed: {0}")]
    Calculation(String),

    /// The model variant does not define this operation
    #[error("{operation} is not defined for the {model} model")]
    Unsupported {
        model: &'static str,
        operation: &'static str,
    },
}
