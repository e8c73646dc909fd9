// src/lib.rs - Library interface for internal module access

pub mod body_parts;
pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod data_output;
pub mod error;
pub mod plot_framework;
pub mod plot_functions;

use log::info;

use crate::config::RunConfig;
use crate::data_analysis::statistics::TakeAnalysis;
use crate::data_input::take_scanner::{scan_take, TakeScan};
use crate::data_output::coords_log::CoordsLog;
use crate::data_output::prepare_output_dirs;
use crate::data_output::reports::write_all_reports;
use crate::error::Result;

/// Scans a take and writes its coordinate logs and reports.
///
/// Plots are left to the caller (see [`plot_functions::render_all_plots`]).
pub fn process_take(config: &RunConfig) -> Result<(TakeScan, TakeAnalysis)> {
    config.validate()?;
    prepare_output_dirs(config)?;

    info!("--- Scanning Take '{}' ---", config.take_dir().display());
    let mut coords_log = CoordsLog::new(config);
    let scan = scan_take(config, |_, observation| coords_log.append(observation))?;
    info!(
        "  {} keypoint line(s) appended to the coordinate logs.",
        coords_log.lines_written()
    );

    info!("--- Computing Statistics ---");
    let analysis = TakeAnalysis::from_matrix(&scan.matrix);

    info!("--- Writing Reports ---");
    write_all_reports(config, &analysis)?;
    Ok((scan, analysis))
}

// src/lib.rs
