//! Radiative transfer kernels for spectral line modelling
//!
//! This crate provides the closed-form pieces needed to synthesise a
//! rotational emission line from a homogeneous slab of gas, in CGS units.
//!
//! # Features
//!
//! - **Constants**: speed of light, Planck and Boltzmann constants (CGS)
//! - **Planck function**: blackbody specific intensity B_ν(T)
//! - **Line profiles**: peak-normalised Gaussian (Doppler) profile
//! - **Two-level model**: Einstein coefficients, rigid-rotor level
//!   populations, optical depth and emergent intensity
//!
//! # Example
//!
//! ```rust
//! use math_radiative::{EinsteinCoefficients, LevelPopulations, J10_DEGENERACY_RATIO};
//!
//! let einstein = EinsteinCoefficients::from_a10(6.78e-8, 115.271e9, J10_DEGENERACY_RATIO);
//! assert!((einstein.b_lu / einstein.b_ul - 3.0).abs() < 1e-12);
//!
//! let pops = LevelPopulations::rigid_rotor(1e12, 8.0, 5.56, 2.78);
//! assert!(pops.upper < pops.lower);
//! ```

pub mod constants;
pub mod planck;
pub mod profile;
pub mod two_level;

pub use planck::{planck_nu, planck_spectrum};
pub use profile::{gaussian_profile, gaussian_profile_array};
pub use two_level::{
    EinsteinCoefficients, J10_DEGENERACY_RATIO, LevelPopulations, emergent_intensity,
    optical_depth,
};
