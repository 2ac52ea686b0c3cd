//! Physical constants (CGS)

use std::f64::consts::PI;

/// Speed of light in vacuum [cm/s].
pub const SPEED_OF_LIGHT: f64 = 2.997_924_58e10;

/// Planck constant [erg s].
pub const PLANCK: f64 = 6.626_070_15e-27;

/// Boltzmann constant [erg/K].
pub const BOLTZMANN: f64 = 1.380_649e-16;

/// 4π
pub const PI4: f64 = 4.0 * PI;

/// Hertz per gigahertz
pub const HZ_PER_GHZ: f64 = 1.0e9;
