//! Output module for characterization results
//!
//! Presentation lives here, strictly downstream of the numerics: every
//! function consumes a finished [`BetResult`](crate::characterization::BetResult)
//! and raw arrays, and nothing here can affect a computed value.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── visualization/      ← Diagnostic plots (plotters)
//!     ├── mod.rs
//!     ├── config.rs
//!     └── bet_plots.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sorb_rs::output::visualization::{plot_bet, plot_roquerol};
//!
//! let result = area_bet(&sample, &adsorbate, None)?;
//! plot_bet(sample.pressure(), &sample.loading_in_mol(), &result, "bet.png", None)?;
//! plot_roquerol(sample.pressure(), &sample.loading_in_mol(), &result, "roq.png", None)?;
//! ```

pub mod visualization;

pub use visualization::{plot_bet, plot_roquerol, PlotConfig};
