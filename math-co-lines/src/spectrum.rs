//! Line intensity model
//!
//! Synthesises the J=1→0 emission of one isotopologue from a homogeneous
//! cloud at a single excitation temperature:
//!
//! 1. Gaussian line shape φ(ν) centred on the rest frequency, peak 1
//! 2. Einstein coefficients B₁₀ from A₁₀, B₀₁ = 3 B₁₀
//! 3. Rigid-rotor populations of J=0 and J=1
//! 4. Optical depth τ(ν)
//! 5. Emergent intensity (1 − e^−τ) B_ν(T)
//!
//! Every call recomputes the curve from scratch; nothing is cached.

use crate::grid::FrequencyGrid;
use crate::isotopologue::{Isotopologue, IsotopologueSpec};
use crate::params::CloudParameters;
use math_radiative::{
    EinsteinCoefficients, J10_DEGENERACY_RATIO, LevelPopulations, emergent_intensity,
    gaussian_profile_array, optical_depth, planck_spectrum,
};
use ndarray::Array1;
use serde::Serialize;

/// Synthetic spectrum of one isotopologue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumCurve {
    /// Isotopologue name
    pub name: &'static str,
    /// Rest frequency of the line (Hz)
    pub rest_frequency: f64,
    /// Column density used for this species (cm⁻²)
    pub column_density: f64,
    /// Sample frequencies (Hz)
    pub frequencies: Array1<f64>,
    /// Optical depth τ(ν)
    pub optical_depth: Array1<f64>,
    /// Emergent intensity I(ν) (erg s⁻¹ cm⁻² Hz⁻¹ sr⁻¹)
    pub intensity: Array1<f64>,
}

impl SpectrumCurve {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True if the curve holds no samples
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// (ν, I) pairs in grid order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.intensity.iter().copied())
    }

    /// Frequency and intensity of the brightest sample
    ///
    /// Ties resolve to the lowest frequency.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points()
            .fold(None, |best: Option<(f64, f64)>, (nu, i)| match best {
                Some((_, best_i)) if best_i >= i => best,
                _ => Some((nu, i)),
            })
    }

    /// Largest optical depth on the grid
    pub fn peak_optical_depth(&self) -> f64 {
        self.optical_depth.iter().copied().fold(0.0, f64::max)
    }
}

/// Compute the spectrum of `spec` for the given parameters
///
/// The column density is resolved with
/// [`CloudParameters::column_density_for`] when `spec` is one of the known
/// isotopologues; any other spec uses the 12CO column directly.
pub fn compute_spectrum(
    spec: &IsotopologueSpec,
    params: &CloudParameters,
    grid: &FrequencyGrid,
) -> SpectrumCurve {
    let column = Isotopologue::ALL
        .into_iter()
        .find(|iso| iso.spec() == spec)
        .map(|iso| params.column_density_for(iso))
        .unwrap_or(params.column_density);

    compute_spectrum_with_column(spec, params, column, grid)
}

/// Compute the spectrum of one of the modelled isotopologues
pub fn compute_isotopologue(
    isotopologue: Isotopologue,
    params: &CloudParameters,
    grid: &FrequencyGrid,
) -> SpectrumCurve {
    let column = params.column_density_for(isotopologue);
    compute_spectrum_with_column(isotopologue.spec(), params, column, grid)
}

/// Compute the spectrum of `spec` for an explicit species column density
///
/// `column` is the column density of this species, already divided by the
/// abundance ratio for the rare isotopologue.
pub fn compute_spectrum_with_column(
    spec: &IsotopologueSpec,
    params: &CloudParameters,
    column: f64,
    grid: &FrequencyGrid,
) -> SpectrumCurve {
    let nu = grid.frequencies();

    let phi = gaussian_profile_array(nu, spec.rest_frequency, params.doppler_width);
    let einstein =
        EinsteinCoefficients::from_a10(spec.einstein_a, spec.rest_frequency, J10_DEGENERACY_RATIO);
    let populations = LevelPopulations::rigid_rotor(
        column,
        params.temperature,
        spec.t_upper,
        spec.rotational_constant,
    );

    let tau = optical_depth(nu, &phi, &populations, &einstein);
    let source = planck_spectrum(nu, params.temperature);
    let intensity = emergent_intensity(&tau, &source);

    let curve = SpectrumCurve {
        name: spec.name,
        rest_frequency: spec.rest_frequency,
        column_density: column,
        frequencies: nu.clone(),
        optical_depth: tau,
        intensity,
    };

    log::debug!(
        "{}: N = {:.3e} cm^-2, N_l = {:.3e}, N_u = {:.3e}, peak tau = {:.3e}",
        spec.name,
        column,
        populations.lower,
        populations.upper,
        curve.peak_optical_depth()
    );

    curve
}

/// Spectra of both isotopologues, 12CO first
pub fn compute_all(params: &CloudParameters, grid: &FrequencyGrid) -> Vec<SpectrumCurve> {
    Isotopologue::ALL
        .into_iter()
        .map(|iso| compute_isotopologue(iso, params, grid))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_curves() -> Vec<SpectrumCurve> {
        compute_all(&CloudParameters::default(), &FrequencyGrid::standard())
    }

    #[test]
    fn test_curve_shape() {
        for curve in default_curves() {
            assert_eq!(curve.len(), 5000);
            assert_eq!(curve.optical_depth.len(), 5000);
            assert!(curve.intensity.iter().all(|i| i.is_finite() && *i >= 0.0));
        }
    }

    #[test]
    fn test_centre_brighter_than_edges() {
        let params = CloudParameters::default();
        let grid = FrequencyGrid::standard();
        for iso in Isotopologue::ALL {
            let curve = compute_isotopologue(iso, &params, &grid);
            let centre = ((iso.spec().rest_frequency - grid.min()) / grid.step()).round() as usize;
            let centre_i = curve.intensity[centre];
            assert!(centre_i >= curve.intensity[0]);
            assert!(centre_i >= curve.intensity[curve.len() - 1]);
            assert!(centre_i > 0.0);
        }
    }

    #[test]
    fn test_default_peaks() {
        let curves = default_curves();
        let grid = FrequencyGrid::standard();

        // 12CO is optically thick (tau ~ 150): its flat top tilts with B_nu(T)
        let (nu12, i12) = curves[0].peak().unwrap();
        assert!((nu12 - 115.271e9).abs() < 0.1e9, "12CO peak at {}", nu12);
        assert!(i12.is_finite() && i12 > 0.0);

        let (nu13, i13) = curves[1].peak().unwrap();
        assert!((nu13 - 110.201e9).abs() <= grid.step(), "13CO peak at {}", nu13);
        assert!(i13.is_finite() && i13 > 0.0);
    }

    #[test]
    fn test_optically_thick_line_saturates_at_planck() {
        let params = CloudParameters::default();
        let grid = FrequencyGrid::standard();
        let curve = compute_isotopologue(Isotopologue::Co12, &params, &grid);
        let centre = ((115.271e9 - grid.min()) / grid.step()).round() as usize;
        let nu = curve.frequencies[centre];
        assert!(curve.optical_depth[centre] > 100.0);
        let bb = math_radiative::planck_nu(nu, params.temperature);
        assert_relative_eq!(curve.intensity[centre], bb, max_relative = 1e-12);
    }

    #[test]
    fn test_generic_spec_resolves_column() {
        let params = CloudParameters::from_sliders(12.0, 0.02, 14.0, 25).unwrap();
        let grid = FrequencyGrid::standard();
        let via_spec = compute_spectrum(&IsotopologueSpec::CO13, &params, &grid);
        let via_enum = compute_isotopologue(Isotopologue::Co13, &params, &grid);
        assert_eq!(via_spec, via_enum);
        assert_relative_eq!(via_spec.column_density, 1e14 / 25.0, max_relative = 1e-12);
    }

    #[test]
    fn test_peak_of_empty_curve() {
        let curve = SpectrumCurve {
            name: "12CO",
            rest_frequency: 115.271e9,
            column_density: 0.0,
            frequencies: Array1::zeros(0),
            optical_depth: Array1::zeros(0),
            intensity: Array1::zeros(0),
        };
        assert!(curve.is_empty());
        assert_eq!(curve.peak(), None);
    }
}
