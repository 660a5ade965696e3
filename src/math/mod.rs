//! Numeric engines shared by the characterization and model-fitting layers
//!
//! - [`linear`]: ordinary least-squares line fit with Pearson correlation
//! - [`polynomial`]: degree-n least-squares polynomial fit (Vandermonde/SVD)
//! - [`minimize`]: iteration-capped derivative-free 1-D minimizer
//!
//! All routines are pure, synchronous and allocation-light; failures are
//! reported as [`SorbError::Calculation`](crate::error::SorbError) with the
//! engine's diagnostic message.

pub mod linear;
pub mod minimize;
pub mod polynomial;

pub use linear::{fit_line, LineFit};
pub use minimize::{minimize_scalar, MinimizeOptions};
pub use polynomial::{polyfit, PolyFit};
