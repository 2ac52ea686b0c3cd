//! Plotly charts and the HTML report

use crate::config::ChartConfig;
use crate::error::Result;
use crate::params::CloudParameters;
use crate::spectrum::SpectrumCurve;
use math_radiative::constants::HZ_PER_GHZ;
use plotly::common::{Line, Mode, Title};
use plotly::layout::themes::PLOTLY_WHITE;
use plotly::layout::{Axis, AxisType, Layout};
use plotly::{Plot, Scatter};
use std::fs;
use std::path::Path;

/// Page title of the report
pub const REPORT_TITLE: &str = "Molecular Cloud CO Emission Line Modeling";

/// Explanatory text shown under the charts
pub const EXPLANATION: &str =
    "This is a simple model of the 12CO J=1->0 emission one might expect from a molecular cloud.";

/// x axis title
pub const FREQUENCY_AXIS_TITLE: &str = "Frequency (GHz)";

/// y axis title
pub const INTENSITY_AXIS_TITLE: &str = "Intensity (erg s⁻¹ Hz⁻¹)";

const PLOTLY_JS_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

/// Chart title for one curve
pub fn chart_title(curve: &SpectrumCurve) -> String {
    format!("{} J=1->0 Emission Line", curve.name)
}

/// Build the line chart of one spectrum
///
/// Frequencies are shown in GHz on a logarithmic axis, intensities on a
/// linear axis, with the plotly_white template.
pub fn spectrum_plot(curve: &SpectrumCurve, config: &ChartConfig) -> Plot {
    let x_ghz: Vec<f64> = curve.frequencies.iter().map(|f| f / HZ_PER_GHZ).collect();
    let y: Vec<f64> = curve.intensity.to_vec();

    let trace = Scatter::new(x_ghz, y)
        .mode(Mode::Lines)
        .name("Spectrum")
        .line(Line::new().color("blue").width(2.0));

    let mut layout = Layout::new()
        .title(Title::with_text(chart_title(curve)))
        .x_axis(
            Axis::new()
                .title(Title::with_text(FREQUENCY_AXIS_TITLE))
                .type_(AxisType::Log),
        )
        .y_axis(Axis::new().title(Title::with_text(INTENSITY_AXIS_TITLE)))
        .template(&*PLOTLY_WHITE);

    if let Some(width) = config.width {
        layout = layout.width(width);
    }
    if let Some(height) = config.height {
        layout = layout.height(height);
    }

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Write a standalone HTML page holding a single chart
pub fn write_chart_html<P: AsRef<Path>>(
    curve: &SpectrumCurve,
    config: &ChartConfig,
    path: P,
) -> Result<()> {
    let plot = spectrum_plot(curve, config);
    fs::write(path.as_ref(), plot.to_html())?;
    log::info!("wrote {} chart to {}", curve.name, path.as_ref().display());
    Ok(())
}

/// Render the full report: parameter summary, one chart per curve, explanation
pub fn report_html(
    params: &CloudParameters,
    curves: &[SpectrumCurve],
    config: &ChartConfig,
) -> String {
    let charts = curves
        .iter()
        .map(|curve| {
            let div_id = format!("chart-{}", curve.name.to_lowercase());
            spectrum_plot(curve, config).to_inline_html(Some(div_id.as_str()))
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <script src="{cdn}"></script>
    <style>
        body {{ font-family: sans-serif; margin: 2em; background: #fff; }}
        table {{ border-collapse: collapse; margin-bottom: 1.5em; }}
        td {{ padding: 0.2em 1em 0.2em 0; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <h2>Cloud Parameters</h2>
    <table>
        <tr><td>Excitation temperature (K)</td><td>{temperature}</td></tr>
        <tr><td>Doppler broadening (GHz)</td><td>{doppler:.1e}</td></tr>
        <tr><td>12CO column density (cm⁻²)</td><td>{column:.2e}</td></tr>
        <tr><td>13CO column density (cm⁻²)</td><td>{rare_column:.2e}</td></tr>
        <tr><td>12CO/13CO ratio</td><td>{ratio}</td></tr>
    </table>
{charts}
    <p>{explanation}</p>
</body>
</html>
"#,
        title = REPORT_TITLE,
        cdn = PLOTLY_JS_CDN,
        temperature = params.temperature,
        doppler = params.doppler_ghz(),
        column = params.column_density,
        rare_column = params.column_density / f64::from(params.ratio),
        ratio = params.ratio,
        charts = charts,
        explanation = EXPLANATION,
    )
}

/// Write the full report to `path`
pub fn write_report_html<P: AsRef<Path>>(
    params: &CloudParameters,
    curves: &[SpectrumCurve],
    config: &ChartConfig,
    path: P,
) -> Result<()> {
    fs::write(path.as_ref(), report_html(params, curves, config))?;
    log::info!("wrote report to {}", path.as_ref().display());
    Ok(())
}
