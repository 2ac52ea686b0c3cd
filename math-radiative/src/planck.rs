//! Blackbody (Planck) specific intensity

use crate::constants::{BOLTZMANN, PLANCK, SPEED_OF_LIGHT};
use ndarray::Array1;

/// Planck function per unit frequency: B_ν(T) = (2hν³/c²) / (exp(hν/kT) − 1)
///
/// Returns the specific intensity in erg s⁻¹ cm⁻² Hz⁻¹ sr⁻¹.
///
/// # Arguments
///
/// * `nu` - Frequency (Hz), must be > 0
/// * `temperature` - Temperature (K), must be > 0
///
/// # Example
///
/// ```rust
/// use math_radiative::planck_nu;
///
/// let cold = planck_nu(115.271e9, 8.0);
/// let warm = planck_nu(115.271e9, 30.0);
/// assert!(warm > cold && cold > 0.0);
/// ```
pub fn planck_nu(nu: f64, temperature: f64) -> f64 {
    let x = PLANCK * nu / (BOLTZMANN * temperature);
    2.0 * PLANCK * nu.powi(3) / (SPEED_OF_LIGHT * SPEED_OF_LIGHT) / x.exp_m1()
}

/// Planck function evaluated over a frequency grid
pub fn planck_spectrum(nu: &Array1<f64>, temperature: f64) -> Array1<f64> {
    nu.mapv(|f| planck_nu(f, temperature))
}
