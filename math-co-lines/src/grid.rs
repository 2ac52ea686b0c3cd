//! Frequency grid

use crate::error::{CoLinesError, Result};
use ndarray::Array1;
use serde::Serialize;

/// Lower edge of the standard grid (Hz)
pub const GRID_MIN_HZ: f64 = 100e9;
/// Upper edge of the standard grid (Hz)
pub const GRID_MAX_HZ: f64 = 130e9;
/// Number of samples of the standard grid
pub const GRID_POINTS: usize = 5000;

/// Linearly spaced frequencies, endpoints included
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyGrid {
    frequencies: Array1<f64>,
}

impl FrequencyGrid {
    /// The standard 100–130 GHz grid with 5000 points
    pub fn standard() -> Self {
        Self {
            frequencies: Array1::linspace(GRID_MIN_HZ, GRID_MAX_HZ, GRID_POINTS),
        }
    }

    /// A custom linear grid over `[min_hz, max_hz]`
    pub fn linear(min_hz: f64, max_hz: f64, points: usize) -> Result<Self> {
        if points < 2 {
            return Err(CoLinesError::InvalidGrid {
                reason: format!("need at least 2 points, got {}", points),
            });
        }
        if !min_hz.is_finite() || !max_hz.is_finite() || min_hz <= 0.0 {
            return Err(CoLinesError::InvalidGrid {
                reason: format!("bounds must be finite and positive, got [{}, {}]", min_hz, max_hz),
            });
        }
        if min_hz >= max_hz {
            return Err(CoLinesError::InvalidGrid {
                reason: format!("min ({}) must be below max ({})", min_hz, max_hz),
            });
        }

        Ok(Self {
            frequencies: Array1::linspace(min_hz, max_hz, points),
        })
    }

    /// Sample frequencies (Hz)
    pub fn frequencies(&self) -> &Array1<f64> {
        &self.frequencies
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Always false for a constructed grid
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// First frequency (Hz)
    pub fn min(&self) -> f64 {
        self.frequencies[0]
    }

    /// Last frequency (Hz)
    pub fn max(&self) -> f64 {
        self.frequencies[self.len() - 1]
    }

    /// Spacing between neighbouring samples (Hz)
    pub fn step(&self) -> f64 {
        (self.max() - self.min()) / (self.len() - 1) as f64
    }
}

impl Default for FrequencyGrid {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_grid() {
        let grid = FrequencyGrid::standard();
        assert_eq!(grid.len(), 5000);
        assert_eq!(grid.min(), 100e9);
        assert_relative_eq!(grid.max(), 130e9, max_relative = 1e-15);
        assert_relative_eq!(grid.step(), 30e9 / 4999.0, max_relative = 1e-12);
    }

    #[test]
    fn test_grid_is_increasing() {
        let grid = FrequencyGrid::standard();
        let f = grid.frequencies();
        for i in 1..f.len() {
            assert!(f[i] > f[i - 1], "grid not increasing at {}", i);
        }
    }

    #[test]
    fn test_invalid_grids() {
        assert!(FrequencyGrid::linear(100e9, 130e9, 1).unwrap_err().is_grid_error());
        assert!(FrequencyGrid::linear(130e9, 100e9, 10).is_err());
        assert!(FrequencyGrid::linear(0.0, 100e9, 10).is_err());
        assert!(FrequencyGrid::linear(100e9, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_custom_grid() {
        let grid = FrequencyGrid::linear(110e9, 111e9, 11).unwrap();
        assert_eq!(grid.len(), 11);
        assert_relative_eq!(grid.step(), 1e8, max_relative = 1e-9);
    }

    #[test]
    fn test_constructed_grids_are_never_empty() {
        for grid in [
            FrequencyGrid::standard(),
            FrequencyGrid::linear(100e9, 100.5e9, 2).unwrap(),
        ] {
            assert!(!grid.is_empty());
            assert!(grid.min() < grid.max());
        }
    }

    #[test]
    fn test_grid_serializes_frequencies() {
        let grid = FrequencyGrid::linear(110e9, 111e9, 3).unwrap();
        let json = serde_json::to_value(&grid).unwrap();
        assert!(json.get("frequencies").is_some());
    }
}
