//! Diagnostic plots for BET characterization
//!
//! Two plots accompany a BET analysis:
//!
//! - **BET plot** (`p / n(1-p)` vs `p`): the linearized points, the fitted
//!   line over the selected region, and the statistical monolayer marker.
//! - **Roquerol plot** (`n(1-p)` vs `p`): the transform used to locate the
//!   region; the selected points should form a non-decreasing run.
//!
//! # Organization
//!
//! - **config**: shared plot configuration (`PlotConfig`)
//! - **bet_plots**: the two plot functions
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sorb_rs::output::visualization::{plot_bet, PlotConfig};
//!
//! // Plot with default config
//! plot_bet(&pressure, &loading, &result, "bet.png", None)?;
//!
//! // Or with custom config
//! let mut config = PlotConfig::bet("MOF-5, N2 at 77 K");
//! config.width = 1920;
//! plot_bet(&pressure, &loading, &result, "bet.png", Some(&config))?;
//! ```

pub mod bet_plots;
pub mod config;

pub use bet_plots::{plot_bet, plot_roquerol};
pub use config::{PlotConfig, NO_TITLE};
