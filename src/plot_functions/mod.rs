// src/plot_functions/mod.rs

pub mod plot_boxplots;
pub mod plot_certainty;
pub mod plot_scatter;

use std::error::Error;

use log::info;

use crate::config::RunConfig;
use crate::data_analysis::statistics::TakeAnalysis;

/// Renders the full plot battery of a take into its plots directory.
pub fn render_all_plots(config: &RunConfig, analysis: &TakeAnalysis) -> Result<(), Box<dyn Error>> {
    info!("--- Generating Scatter Plots ---");
    plot_scatter::plot_part_scatters(config, analysis)?;

    info!("--- Generating Box Plots ---");
    plot_boxplots::plot_part_boxplots(config, analysis)?;
    plot_boxplots::plot_element_boxplots(config, analysis, false)?;
    plot_boxplots::plot_element_boxplots(config, analysis, true)?;

    info!("--- Generating Certainty Plots ---");
    plot_certainty::plot_part_certainty(config, analysis)?;
    plot_certainty::plot_pair_certainty(config, analysis)?;
    plot_certainty::plot_all_certainty(config, analysis)?;

    info!("--- Generating Skeleton Scatter Plots ---");
    plot_scatter::plot_pair_scatters(config, analysis)?;
    plot_scatter::plot_whole_body_scatters(config, analysis)?;
    Ok(())
}

// src/plot_functions/mod.rs
