//! JSON configuration for CO line runs

use crate::error::Result;
use crate::grid::{FrequencyGrid, GRID_MAX_HZ, GRID_MIN_HZ, GRID_POINTS};
use crate::params::{CloudParameters, ParameterRange};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete run configuration loaded from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoLinesConfig {
    /// Slider positions
    #[serde(default)]
    pub cloud: CloudConfig,
    /// Frequency grid
    #[serde(default)]
    pub grid: GridConfig,
    /// Chart layout
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Slider positions, in slider units (K, GHz, log10 cm⁻², ratio)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Excitation temperature (K)
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Doppler broadening (GHz)
    #[serde(default = "default_doppler_ghz")]
    pub doppler_ghz: f64,
    /// log10 of the 12CO column density (cm⁻²)
    #[serde(default = "default_log_column")]
    pub log_column: f64,
    /// 12CO/13CO ratio
    #[serde(default = "default_ratio")]
    pub ratio: u32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            doppler_ghz: default_doppler_ghz(),
            log_column: default_log_column(),
            ratio: default_ratio(),
        }
    }
}

fn default_temperature() -> f64 {
    ParameterRange::TEMPERATURE.default
}

fn default_doppler_ghz() -> f64 {
    ParameterRange::DOPPLER_GHZ.default
}

fn default_log_column() -> f64 {
    ParameterRange::LOG_COLUMN.default
}

fn default_ratio() -> u32 {
    ParameterRange::RATIO.default as u32
}

/// Slider values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CloudOverrides {
    /// Excitation temperature (K)
    pub temperature: Option<f64>,
    /// Doppler broadening (GHz)
    pub doppler_ghz: Option<f64>,
    /// log10 of the 12CO column density (cm⁻²)
    pub log_column: Option<f64>,
    /// 12CO/13CO ratio
    pub ratio: Option<u32>,
}

impl CloudConfig {
    /// Apply command-line values on top of this configuration
    pub fn with_overrides(&self, overrides: &CloudOverrides) -> CloudConfig {
        CloudConfig {
            temperature: overrides.temperature.unwrap_or(self.temperature),
            doppler_ghz: overrides.doppler_ghz.unwrap_or(self.doppler_ghz),
            log_column: overrides.log_column.unwrap_or(self.log_column),
            ratio: overrides.ratio.unwrap_or(self.ratio),
        }
    }

    /// Validate and convert to model parameters
    pub fn to_parameters(&self) -> Result<CloudParameters> {
        CloudParameters::from_sliders(
            self.temperature,
            self.doppler_ghz,
            self.log_column,
            self.ratio,
        )
    }
}

/// Frequency grid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Lowest frequency (Hz)
    #[serde(default = "default_min_hz")]
    pub min_hz: f64,
    /// Highest frequency (Hz)
    #[serde(default = "default_max_hz")]
    pub max_hz: f64,
    /// Number of samples
    #[serde(default = "default_points")]
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_hz: default_min_hz(),
            max_hz: default_max_hz(),
            points: default_points(),
        }
    }
}

fn default_min_hz() -> f64 {
    GRID_MIN_HZ
}

fn default_max_hz() -> f64 {
    GRID_MAX_HZ
}

fn default_points() -> usize {
    GRID_POINTS
}

impl GridConfig {
    /// Build the frequency grid
    pub fn to_grid(&self) -> Result<FrequencyGrid> {
        FrequencyGrid::linear(self.min_hz, self.max_hz, self.points)
    }
}

/// Chart size; `None` lets plotly fill the page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Width in pixels
    #[serde(default)]
    pub width: Option<usize>,
    /// Height in pixels
    #[serde(default)]
    pub height: Option<usize>,
}

impl CoLinesConfig {
    /// Load configuration from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: CoLinesConfig = serde_json::from_str(&contents)?;
        log::debug!("loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
