//! Line profiles

use ndarray::Array1;

/// Gaussian line shape φ(ν) = exp(−(ν − ν₀)² / (2σ²))
///
/// The profile is normalised to a peak of 1 at ν₀, not to unit area.
pub fn gaussian_profile(nu: f64, nu0: f64, sigma: f64) -> f64 {
    let d = nu - nu0;
    (-(d * d) / (2.0 * sigma * sigma)).exp()
}

/// Gaussian line shape over a frequency grid
pub fn gaussian_profile_array(nu: &Array1<f64>, nu0: f64, sigma: f64) -> Array1<f64> {
    nu.mapv(|f| gaussian_profile(f, nu0, sigma))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_peak_is_one() {
        assert_eq!(gaussian_profile(115.271e9, 115.271e9, 4e7), 1.0);
    }

    #[test]
    fn test_symmetry() {
        let nu0 = 110.201e9;
        let sigma = 4e7;
        for k in 1..5 {
            let offset = k as f64 * 1.3e7;
            assert_abs_diff_eq!(
                gaussian_profile(nu0 + offset, nu0, sigma),
                gaussian_profile(nu0 - offset, nu0, sigma),
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_one_sigma() {
        let value = gaussian_profile(1.0 + 0.5, 1.0, 0.5);
        assert_abs_diff_eq!(value, (-0.5_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_far_wings_vanish() {
        let nu = Array1::linspace(100e9, 130e9, 11);
        let phi = gaussian_profile_array(&nu, 115.271e9, 4e7);
        assert_eq!(phi[0], 0.0);
        assert_eq!(phi[10], 0.0);
    }
}
