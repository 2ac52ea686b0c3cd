//! Cloud parameters and their slider ranges

use crate::error::{CoLinesError, Result};
use crate::isotopologue::Isotopologue;
use math_radiative::constants::HZ_PER_GHZ;
use serde::Serialize;

/// Declaration of one user control: label, bounds, default and display hints
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRange {
    /// Label shown next to the control
    pub label: &'static str,
    /// Lowest accepted value
    pub min: f64,
    /// Highest accepted value
    pub max: f64,
    /// Initial value
    pub default: f64,
    /// Increment between selectable values
    pub step: f64,
    /// printf-style display format
    pub format: &'static str,
}

impl ParameterRange {
    /// Excitation temperature slider (K)
    pub const TEMPERATURE: ParameterRange = ParameterRange {
        label: "Excitation temperature (K)",
        min: 5.0,
        max: 30.0,
        default: 8.0,
        step: 1.0,
        format: "%d",
    };

    /// Doppler broadening slider (GHz)
    pub const DOPPLER_GHZ: ParameterRange = ParameterRange {
        label: "Doppler broadening (GHz)",
        min: 0.001,
        max: 0.1,
        default: 0.04,
        step: 0.001,
        format: "%.1e",
    };

    /// 12CO column density slider, log10(N / cm⁻²)
    pub const LOG_COLUMN: ParameterRange = ParameterRange {
        label: "12CO Column Density log10(N/cm⁻²)",
        min: 10.0,
        max: 23.0,
        default: 12.0,
        step: 0.01,
        format: "%.1e",
    };

    /// 12CO/13CO abundance ratio slider
    pub const RATIO: ParameterRange = ParameterRange {
        label: "12CO/13CO ratio",
        min: 10.0,
        max: 100.0,
        default: 50.0,
        step: 1.0,
        format: "%d",
    };

    /// All sliders in the order they are presented
    pub const ALL: [ParameterRange; 4] = [
        Self::TEMPERATURE,
        Self::DOPPLER_GHZ,
        Self::LOG_COLUMN,
        Self::RATIO,
    ];

    /// Whether `value` is finite and within the inclusive bounds
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Return `value` unchanged if accepted, otherwise an `OutOfRange` error
    pub fn check(&self, value: f64) -> Result<f64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(CoLinesError::OutOfRange {
                name: self.label,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Physical inputs of the cloud model
///
/// Values are stored in model units (K, Hz, cm⁻²). Build them with
/// [`CloudParameters::from_sliders`] so that every field is range checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CloudParameters {
    /// Excitation temperature T (K)
    pub temperature: f64,
    /// Doppler line width σ_ν (Hz)
    pub doppler_width: f64,
    /// 12CO column density N (cm⁻²)
    pub column_density: f64,
    /// 12CO/13CO abundance ratio
    pub ratio: u32,
}

impl CloudParameters {
    /// Build parameters from raw slider positions
    ///
    /// # Arguments
    ///
    /// * `temperature` - Excitation temperature (K), in [5, 30]
    /// * `doppler_ghz` - Doppler broadening (GHz), in [0.001, 0.1]
    /// * `log_column` - log10 of the 12CO column density (cm⁻²), in [10, 23]
    /// * `ratio` - 12CO/13CO ratio, in [10, 100]
    pub fn from_sliders(
        temperature: f64,
        doppler_ghz: f64,
        log_column: f64,
        ratio: u32,
    ) -> Result<Self> {
        let temperature = ParameterRange::TEMPERATURE.check(temperature)?;
        let doppler_ghz = ParameterRange::DOPPLER_GHZ.check(doppler_ghz)?;
        let log_column = ParameterRange::LOG_COLUMN.check(log_column)?;
        ParameterRange::RATIO.check(f64::from(ratio))?;

        Ok(Self {
            temperature,
            doppler_width: doppler_ghz * HZ_PER_GHZ,
            column_density: 10f64.powf(log_column),
            ratio,
        })
    }

    /// Doppler width expressed in GHz
    pub fn doppler_ghz(&self) -> f64 {
        self.doppler_width / HZ_PER_GHZ
    }

    /// log10 of the 12CO column density
    pub fn log_column(&self) -> f64 {
        self.column_density.log10()
    }

    /// Column density of the given isotopologue (cm⁻²)
    ///
    /// The rare isotopologue has no independent control: it is always the
    /// 12CO column divided by the ratio.
    pub fn column_density_for(&self, isotopologue: Isotopologue) -> f64 {
        match isotopologue {
            Isotopologue::Co12 => self.column_density,
            Isotopologue::Co13 => self.column_density / f64::from(self.ratio),
        }
    }
}

impl Default for CloudParameters {
    fn default() -> Self {
        Self {
            temperature: ParameterRange::TEMPERATURE.default,
            doppler_width: ParameterRange::DOPPLER_GHZ.default * HZ_PER_GHZ,
            column_density: 10f64.powf(ParameterRange::LOG_COLUMN.default),
            ratio: ParameterRange::RATIO.default as u32,
        }
    }
}
