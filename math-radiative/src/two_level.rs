//! Two-level line transfer
//!
//! A rotational transition is treated as an isolated pair of levels in a
//! homogeneous slab. Populations follow a rigid-rotor partition function
//! approximation, the opacity is corrected for stimulated emission, and the
//! slab radiates at the excitation temperature:
//!
//! ```text
//! B_ul = c² / (2hν₀³) · A_ul          B_lu = (g_u/g_l) · B_ul
//! N_l  = N / sqrt(1 + (T/B₀)²)        N_u  = N_l · exp(−T₁/T)
//! τ(ν) = (hν/4π) · (N_l B_lu − N_u B_ul) · φ(ν)
//! I(ν) = (1 − exp(−τ)) · B_ν(T)
//! ```

use crate::constants::{PI4, PLANCK, SPEED_OF_LIGHT};
use ndarray::{Array1, Zip};
use serde::{Deserialize, Serialize};

/// Statistical weight ratio g_u/g_l of the J=1→0 rotational transition
pub const J10_DEGENERACY_RATIO: f64 = 3.0;

/// Einstein coefficients of a single transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EinsteinCoefficients {
    /// Spontaneous emission rate A_ul (s⁻¹)
    pub a_ul: f64,
    /// Stimulated emission coefficient B_ul
    pub b_ul: f64,
    /// Absorption coefficient B_lu
    pub b_lu: f64,
}

impl EinsteinCoefficients {
    /// Derive the B coefficients from A_ul at rest frequency `nu0` (Hz)
    pub fn from_a10(a_ul: f64, nu0: f64, g_ratio: f64) -> Self {
        let b_ul = SPEED_OF_LIGHT * SPEED_OF_LIGHT / (2.0 * PLANCK * nu0.powi(3)) * a_ul;
        Self {
            a_ul,
            b_ul,
            b_lu: g_ratio * b_ul,
        }
    }
}

/// Column densities of the lower and upper level (cm⁻²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelPopulations {
    /// Lower level column density N_l
    pub lower: f64,
    /// Upper level column density N_u
    pub upper: f64,
}

impl LevelPopulations {
    /// Rigid-rotor level populations
    ///
    /// # Arguments
    ///
    /// * `column` - Total column density of the species (cm⁻²)
    /// * `t_ex` - Excitation temperature (K), must be > 0
    /// * `t_upper` - Energy of the upper level expressed in K (T₁)
    /// * `b0` - Rotational constant expressed in K (B₀), must be > 0
    pub fn rigid_rotor(column: f64, t_ex: f64, t_upper: f64, b0: f64) -> Self {
        let ratio = t_ex / b0;
        let lower = column / (1.0 + ratio * ratio).sqrt();
        let upper = lower * (-t_upper / t_ex).exp();
        Self { lower, upper }
    }

    /// Net absorption weight N_l·B_lu − N_u·B_ul
    ///
    /// Positive whenever the populations are sub-thermal with respect to the
    /// statistical weights, which always holds for the rigid-rotor model.
    pub fn absorption_weight(&self, einstein: &EinsteinCoefficients) -> f64 {
        self.lower * einstein.b_lu - self.upper * einstein.b_ul
    }
}

/// Optical depth τ(ν) over a frequency grid
///
/// `profile` must hold φ(ν) sampled on the same grid as `nu`.
pub fn optical_depth(
    nu: &Array1<f64>,
    profile: &Array1<f64>,
    populations: &LevelPopulations,
    einstein: &EinsteinCoefficients,
) -> Array1<f64> {
    assert_eq!(nu.len(), profile.len(), "profile/grid length mismatch");

    let weight = populations.absorption_weight(einstein);
    Zip::from(nu)
        .and(profile)
        .map_collect(|&f, &phi| PLANCK * f / PI4 * weight * phi)
}

/// Emergent intensity of a slab, I(ν) = (1 − exp(−τ)) · S(ν)
///
/// `source` is the source function on the same grid, normally the Planck
/// function at the excitation temperature.
pub fn emergent_intensity(tau: &Array1<f64>, source: &Array1<f64>) -> Array1<f64> {
    assert_eq!(tau.len(), source.len(), "source/opacity length mismatch");

    Zip::from(tau)
        .and(source)
        .map_collect(|&t, &s| -(-t).exp_m1() * s)
}
