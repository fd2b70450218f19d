//! CLI logic for the HealthSync collateral generator.
//!
//! Each run is a linear construct → render → write sequence over the
//! selected outputs; re-running overwrites previous files.

mod args;
mod config;

pub use args::{Args, Command};

use std::{fs, path::Path};

use log::info;

use healthsync_viz::{
    ChartBuilder, VizError,
    dataset::{ArchitectureData, Dataset, JourneyData, ReportData},
    report,
};

/// Fixed output file names, written into the output directory.
pub const ARCHITECTURE_FILE: &str = "healthsync_architecture.svg";
pub const JOURNEY_FILE: &str = "healthsync_user_journey.svg";
pub const FEATURES_FILE: &str = "healthsync_features_analysis.csv";
pub const ROI_FILE: &str = "healthsync_roi_metrics.csv";
pub const TECH_SPECS_FILE: &str = "healthsync_technical_specifications.csv";

/// Run the HealthSync collateral generator
///
/// Builds the dataset (built-in or from `--dataset`), renders the selected
/// charts, and writes the selected reports into the output directory.
///
/// # Errors
///
/// Returns `VizError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Dataset parsing and validation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), VizError> {
    info!(output_dir = args.output_dir; "Generating collateral");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Build the dataset once; everything downstream consumes it
    let dataset = match &args.dataset {
        Some(path) => {
            info!(path; "Loading dataset");
            let content = fs::read_to_string(path)?;
            toml::from_str::<Dataset>(&content)
                .map_err(|err| VizError::Dataset(format!("Failed to parse dataset file: {err}")))?
        }
        None => Dataset::builtin(),
    };

    let builder = ChartBuilder::new(app_config);
    let out_dir = Path::new(&args.output_dir);

    match args.command {
        Some(Command::Architecture) => export_architecture(&builder, &dataset.architecture, out_dir)?,
        Some(Command::Journey) => export_journey(&builder, &dataset.journey, out_dir)?,
        Some(Command::Reports) => export_reports(&dataset.reports, out_dir)?,
        None => {
            export_architecture(&builder, &dataset.architecture, out_dir)?;
            export_journey(&builder, &dataset.journey, out_dir)?;
            export_reports(&dataset.reports, out_dir)?;
        }
    }

    Ok(())
}

fn export_architecture(
    builder: &ChartBuilder,
    data: &ArchitectureData,
    out_dir: &Path,
) -> Result<(), VizError> {
    let graph = data.build_graph()?;
    let palette = data.build_palette()?;
    let overlay = data.build_overlay()?;

    let svg = builder.render_architecture(&data.title, &graph, &palette, &overlay)?;

    let path = out_dir.join(ARCHITECTURE_FILE);
    fs::write(&path, svg)?;
    info!(path = path.display().to_string(); "Architecture diagram exported");

    Ok(())
}

fn export_journey(
    builder: &ChartBuilder,
    data: &JourneyData,
    out_dir: &Path,
) -> Result<(), VizError> {
    let journey = data.build_journey()?;
    let palette = data.build_palette()?;

    let svg = builder.render_journey(&data.title, &journey, &palette)?;

    let path = out_dir.join(JOURNEY_FILE);
    fs::write(&path, svg)?;
    info!(path = path.display().to_string(); "Journey flowchart exported");

    Ok(())
}

fn export_reports(data: &ReportData, out_dir: &Path) -> Result<(), VizError> {
    report::write_csv(&data.features, out_dir.join(FEATURES_FILE))?;
    report::write_csv(&data.roi, out_dir.join(ROI_FILE))?;
    report::write_csv(&data.tech_specs, out_dir.join(TECH_SPECS_FILE))?;

    print!("{}", report::console_summary(data));
    info!("Reports exported");

    Ok(())
}
