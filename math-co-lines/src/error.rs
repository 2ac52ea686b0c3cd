//! Error types for the CO line model.
//!
//! The spectrum computation itself is total; errors only arise when slider
//! values, grids or files are brought in from the outside.

use thiserror::Error;

/// Errors raised while validating inputs or writing results.
#[derive(Debug, Error)]
pub enum CoLinesError {
    /// A cloud parameter lies outside its slider range (or is not finite).
    #[error("{name} = {value} is out of range (must be within [{min}, {max}])")]
    OutOfRange {
        /// Slider label
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Lower bound of the slider
        min: f64,
        /// Upper bound of the slider
        max: f64,
    },

    /// The requested frequency grid cannot be built.
    #[error("invalid frequency grid: {reason}")]
    InvalidGrid {
        /// What is wrong with the grid
        reason: String,
    },

    /// No isotopologue goes by this name.
    #[error("unknown isotopologue '{name}' (expected 12CO or 13CO)")]
    UnknownIsotopologue {
        /// The name that was asked for
        name: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for CO line operations.
pub type Result<T> = std::result::Result<T, CoLinesError>;

impl CoLinesError {
    /// Returns `true` if this is a parameter range error.
    pub fn is_range_error(&self) -> bool {
        matches!(self, CoLinesError::OutOfRange { .. })
    }

    /// Returns `true` if this is a frequency grid error.
    pub fn is_grid_error(&self) -> bool {
        matches!(self, CoLinesError::InvalidGrid { .. })
    }

    /// Returns `true` if this error comes from file handling or encoding.
    pub fn is_io_error(&self) -> bool {
        matches!(self, CoLinesError::Io(_) | CoLinesError::Json(_))
    }
}
