//! Molecular cloud CO emission line modelling
//!
//! This crate synthesises the 12CO and 13CO J=1→0 rotational lines of a
//! homogeneous molecular cloud and renders them as interactive Plotly
//! charts. It provides:
//!
//! - Spectroscopic data for both isotopologues
//! - Cloud parameters with the ranges of the user controls
//! - The standard 100–130 GHz frequency grid
//! - The line intensity model (optical depth and emergent intensity)
//! - Chart assembly, HTML report, JSON and CSV export
//! - JSON configuration loading/saving
//!
//! # Example
//!
//! ```rust
//! use math_co_lines::{CloudParameters, FrequencyGrid, compute_all};
//!
//! let params = CloudParameters::from_sliders(8.0, 0.04, 12.0, 50).unwrap();
//! let curves = compute_all(&params, &FrequencyGrid::standard());
//! assert_eq!(curves.len(), 2);
//! assert_eq!(curves[0].len(), 5000);
//! ```

mod chart;
mod config;
mod error;
mod grid;
mod isotopologue;
mod output;
mod params;
mod spectrum;

pub use chart::*;
pub use config::*;
pub use error::{CoLinesError, Result};
pub use grid::*;
pub use isotopologue::*;
pub use output::*;
pub use params::*;
pub use spectrum::*;

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
