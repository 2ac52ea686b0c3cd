//! Property-based tests for the line intensity model.
//!
//! Covers: finiteness and sign of the spectra over the full slider ranges,
//! the rare isotopologue column, linear opacity scaling and determinism.

use math_co_lines::{
    CloudParameters, FrequencyGrid, Isotopologue, compute_all, compute_isotopologue,
};
use proptest::prelude::*;

fn params(t: f64, sigma_ghz: f64, log_n: f64, ratio: u32) -> CloudParameters {
    CloudParameters::from_sliders(t, sigma_ghz, log_n, ratio).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// 5000 finite, non-negative samples for every valid input.
    #[test]
    fn spectra_are_finite_and_non_negative(
        t in 5.0f64..=30.0,
        sigma_ghz in 0.001f64..=0.1,
        log_n in 10.0f64..=23.0,
        ratio in 10u32..=100,
    ) {
        let grid = FrequencyGrid::standard();
        for curve in compute_all(&params(t, sigma_ghz, log_n, ratio), &grid) {
            prop_assert_eq!(curve.len(), 5000);
            prop_assert_eq!(curve.intensity.len(), 5000);
            for (nu, i) in curve.points() {
                prop_assert!(i.is_finite() && i >= 0.0, "{}: I({}) = {}", curve.name, nu, i);
            }
            for tau in curve.optical_depth.iter() {
                prop_assert!(tau.is_finite() && *tau >= 0.0);
            }
        }
    }

    /// The 13CO column is always the 12CO column over the ratio.
    #[test]
    fn rare_column_is_main_over_ratio(
        log_n in 10.0f64..=23.0,
        ratio in 10u32..=100,
    ) {
        let p = params(8.0, 0.04, log_n, ratio);
        let main = p.column_density_for(Isotopologue::Co12);
        let rare = p.column_density_for(Isotopologue::Co13);
        prop_assert_eq!(main, p.column_density);
        prop_assert_eq!(rare, p.column_density / f64::from(ratio));

        let grid = FrequencyGrid::linear(109e9, 112e9, 64).unwrap();
        let curve = compute_isotopologue(Isotopologue::Co13, &p, &grid);
        prop_assert_eq!(curve.column_density, rare);
    }

    /// Doubling N doubles τ at every frequency.
    #[test]
    fn optical_depth_is_linear_in_column(
        t in 5.0f64..=30.0,
        sigma_ghz in 0.001f64..=0.1,
        log_n in 10.0f64..=22.0,
    ) {
        let grid = FrequencyGrid::standard();
        let single = params(t, sigma_ghz, log_n, 50);
        let double = params(t, sigma_ghz, log_n + 2f64.log10(), 50);

        for iso in Isotopologue::ALL {
            let a = compute_isotopologue(iso, &single, &grid);
            let b = compute_isotopologue(iso, &double, &grid);
            let peak_a = a.peak_optical_depth();
            let peak_b = b.peak_optical_depth();
            prop_assert!((peak_b / peak_a - 2.0).abs() < 1e-9, "ratio {}", peak_b / peak_a);
        }
    }

    /// Identical parameters give bit-identical spectra.
    #[test]
    fn computation_is_deterministic(
        t in 5.0f64..=30.0,
        sigma_ghz in 0.001f64..=0.1,
        log_n in 10.0f64..=23.0,
        ratio in 10u32..=100,
    ) {
        let grid = FrequencyGrid::standard();
        let p = params(t, sigma_ghz, log_n, ratio);
        let first = compute_all(&p, &grid);
        let second = compute_all(&p, &grid);
        for (a, b) in first.iter().zip(second.iter()) {
            for (x, y) in a.intensity.iter().zip(b.intensity.iter()) {
                prop_assert_eq!(x.to_bits(), y.to_bits());
            }
        }
    }
}

/// In the optically thin regime the intensity follows N.
#[test]
fn thin_line_intensity_scales_with_column() {
    let grid = FrequencyGrid::standard();
    let single = params(30.0, 0.04, 10.0, 100);
    let double = params(30.0, 0.04, 10.0 + 2f64.log10(), 100);

    let a = compute_isotopologue(Isotopologue::Co13, &single, &grid);
    let b = compute_isotopologue(Isotopologue::Co13, &double, &grid);
    assert!(a.peak_optical_depth() < 1e-2);

    let (_, ia) = a.peak().unwrap();
    let (_, ib) = b.peak().unwrap();
    assert!((ib / ia - 2.0).abs() < 1e-2, "ratio {}", ib / ia);
}
