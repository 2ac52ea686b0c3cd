//! JSON / CSV export and console summary

use crate::error::Result;
use crate::params::CloudParameters;
use crate::spectrum::SpectrumCurve;
use math_radiative::constants::HZ_PER_GHZ;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Create output JSON holding the parameters and every curve
pub fn create_output_json(
    params: &CloudParameters,
    curves: &[SpectrumCurve],
) -> serde_json::Value {
    serde_json::json!({
        "parameters": {
            "temperature": params.temperature,
            "doppler_width": params.doppler_width,
            "column_density": params.column_density,
            "ratio": params.ratio,
        },
        "spectra": curves.iter().map(|curve| {
            let (peak_frequency, peak_intensity) = curve.peak().unwrap_or((f64::NAN, f64::NAN));
            serde_json::json!({
                "name": curve.name,
                "rest_frequency": curve.rest_frequency,
                "column_density": curve.column_density,
                "peak_frequency": peak_frequency,
                "peak_intensity": peak_intensity,
                "peak_optical_depth": curve.peak_optical_depth(),
                "frequencies": curve.frequencies.to_vec(),
                "optical_depth": curve.optical_depth.to_vec(),
                "intensity": curve.intensity.to_vec(),
            })
        }).collect::<Vec<_>>(),
    })
}

/// Write the output JSON (pretty printed) to `path`
pub fn write_json<P: AsRef<Path>>(
    params: &CloudParameters,
    curves: &[SpectrumCurve],
    path: P,
) -> Result<()> {
    let json = create_output_json(params, curves);
    fs::write(path.as_ref(), serde_json::to_string_pretty(&json)?)?;
    log::info!("wrote spectra to {}", path.as_ref().display());
    Ok(())
}

/// Export one curve as CSV: `frequency_hz,optical_depth,intensity`
pub fn export_csv<P: AsRef<Path>>(curve: &SpectrumCurve, path: P) -> Result<()> {
    let mut file = BufWriter::new(File::create(path.as_ref())?);

    writeln!(file, "frequency_hz,optical_depth,intensity")?;
    for ((nu, tau), i) in curve
        .frequencies
        .iter()
        .zip(curve.optical_depth.iter())
        .zip(curve.intensity.iter())
    {
        writeln!(file, "{:e},{:e},{:e}", nu, tau, i)?;
    }
    file.flush()?;

    log::info!("wrote {} CSV to {}", curve.name, path.as_ref().display());
    Ok(())
}

/// Print parameter and peak summary to stdout
pub fn print_summary(params: &CloudParameters, curves: &[SpectrumCurve]) {
    println!("\n=== Cloud Parameters ===");
    println!("  Excitation temperature: {} K", params.temperature);
    println!("  Doppler broadening:     {:.1e} GHz", params.doppler_ghz());
    println!(
        "  12CO column density:    {:.2e} cm^-2 (log10 = {:.2})",
        params.column_density,
        params.log_column()
    );
    println!("  12CO/13CO ratio:        {}", params.ratio);

    println!("\n=== Spectra ===");
    for curve in curves {
        match curve.peak() {
            Some((nu, i)) => println!(
                "  {}: N = {:.2e} cm^-2, peak {:.3e} erg/s/cm^2/Hz/sr at {:.4} GHz, max tau = {:.3e}",
                curve.name,
                curve.column_density,
                i,
                nu / HZ_PER_GHZ,
                curve.peak_optical_depth()
            ),
            None => println!("  {}: empty spectrum", curve.name),
        }
    }
}
