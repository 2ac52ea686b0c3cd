//! Molecular cloud CO emission line modelling
//!
//! Computes the 12CO and 13CO J=1->0 spectra for one set of cloud
//! parameters and writes an interactive HTML report.
//!
//! Usage:
//!   cargo run --release --bin co_lines -- --temperature 12 --log-column 16
//!   cargo run --release --bin co_lines -- --config cloud.json --json --csv
//!   cargo run --release --bin co_lines -- --list-ranges

use clap::Parser;
use directories::ProjectDirs;
use math_co_lines::{
    ChartConfig, CloudOverrides, CoLinesConfig, Isotopologue, ParameterRange,
    compute_isotopologue, export_csv, print_summary, write_chart_html, write_json,
    write_report_html,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "co_lines")]
#[command(about = "Model the 12CO and 13CO J=1->0 emission lines of a molecular cloud", long_about = None)]
struct Args {
    /// Excitation temperature (K), 5 to 30
    #[arg(short = 'T', long)]
    temperature: Option<f64>,

    /// Doppler broadening (GHz), 0.001 to 0.1
    #[arg(short, long)]
    doppler_ghz: Option<f64>,

    /// 12CO column density log10(N/cm^-2), 10 to 23
    #[arg(short = 'n', long)]
    log_column: Option<f64>,

    /// 12CO/13CO ratio, 10 to 100
    #[arg(short, long)]
    ratio: Option<u32>,

    /// Only model these isotopologues (12CO, 13CO); repeatable
    #[arg(short, long = "species")]
    species: Vec<String>,

    /// Path to JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (default: the user cache directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Chart width in pixels
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Chart height in pixels
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Also write one standalone HTML chart per isotopologue
    #[arg(long)]
    charts: bool,

    /// Also write the spectra as JSON
    #[arg(long)]
    json: bool,

    /// Also write one CSV file per isotopologue
    #[arg(long)]
    csv: bool,

    /// Print the parameter ranges and exit
    #[arg(long)]
    list_ranges: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Get the default output directory using the directories crate
fn default_output_dir() -> Result<PathBuf, String> {
    let proj_dirs = ProjectDirs::from("org", "spinorama", "math-audio")
        .ok_or("Failed to determine project directories")?;

    Ok(proj_dirs.cache_dir().join("co_lines"))
}

fn print_ranges() {
    println!("=== Parameter Ranges ===");
    for range in ParameterRange::ALL {
        println!(
            "  {:<40} [{}, {}] default {} step {} ({})",
            range.label, range.min, range.max, range.default, range.step, range.format
        );
    }
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.list_ranges {
        print_ranges();
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            CoLinesConfig::from_file(path)?
        }
        None => CoLinesConfig::default(),
    };

    let overrides = CloudOverrides {
        temperature: args.temperature,
        doppler_ghz: args.doppler_ghz,
        log_column: args.log_column,
        ratio: args.ratio,
    };
    let params = config.cloud.with_overrides(&overrides).to_parameters()?;
    let species = Isotopologue::select(&args.species)?;
    let grid = config.grid.to_grid()?;
    let chart = ChartConfig {
        width: args.width.or(config.chart.width),
        height: args.height.or(config.chart.height),
    };

    log::debug!(
        "grid: {} points over [{:.3e}, {:.3e}] Hz",
        grid.len(),
        grid.min(),
        grid.max()
    );

    let curves: Vec<_> = species
        .into_iter()
        .map(|iso| compute_isotopologue(iso, &params, &grid))
        .collect();
    print_summary(&params, &curves);

    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => default_output_dir()?,
    };
    std::fs::create_dir_all(&output_dir)?;

    let report = output_dir.join("co_emission.html");
    write_report_html(&params, &curves, &chart, &report)?;
    println!("\nReport: {}", report.display());

    for curve in &curves {
        let stem = curve.name.to_lowercase();
        if args.charts {
            write_chart_html(curve, &chart, output_dir.join(format!("{}_spectrum.html", stem)))?;
        }
        if args.csv {
            export_csv(curve, output_dir.join(format!("{}_spectrum.csv", stem)))?;
        }
    }

    if args.json {
        let path = output_dir.join("co_spectra.json");
        write_json(&params, &curves, &path)?;
        println!("Spectra: {}", path.display());
    }

    Ok(())
}
