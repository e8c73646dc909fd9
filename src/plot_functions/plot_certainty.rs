// src/plot_functions/plot_certainty.rs

use std::error::Error;

use log::info;

use crate::body_parts::{BodyPart, Element, BODY_PART_PAIRS};
use crate::config::RunConfig;
use crate::constants::{
    COLOR_CERTAINTY_POINT, LINE_WIDTH_PLOT, PLOT_HEIGHT, PLOT_HEIGHT_WIDE, PLOT_WIDTH,
    PLOT_WIDTH_WIDE,
};
use crate::data_analysis::statistics::{certainty_across_frames, TakeAnalysis};
use crate::plot_framework::{
    calculate_range, draw_series_plot, part_color, plot_file_name, PlotConfig, PlotSeries,
};

/// x range covering frame indices `0..frames`.
fn frame_range(frames: usize) -> std::ops::Range<f64> {
    let (lo, hi) = calculate_range(0.0, frames.saturating_sub(1) as f64);
    lo..hi
}

fn certainty_range() -> std::ops::Range<f64> {
    let (lo, hi) = calculate_range(0.0, 1.0);
    lo..hi
}

/// Certainty per frame of each observed part, markers labelled by frame index.
pub fn plot_part_certainty(config: &RunConfig, analysis: &TakeAnalysis) -> Result<(), Box<dyn Error>> {
    let certainty = certainty_across_frames(&analysis.matrix);
    for part in BodyPart::ALL {
        if !analysis.matrix.has_data(part, Element::Certainty) {
            continue;
        }
        let title = format!("Plot of {part} certainty across frames");
        let data = certainty[part.index()]
            .iter()
            .enumerate()
            .map(|(frame, &c)| (frame as f64, c))
            .collect();
        let plot_config = PlotConfig {
            title: title.clone(),
            x_range: frame_range(analysis.max_frames()),
            y_range: certainty_range(),
            series: vec![PlotSeries {
                data,
                label: String::new(),
                color: *COLOR_CERTAINTY_POINT,
                stroke_width: 0,
                annotate_indices: true,
            }],
            x_label: "Frame".to_string(),
            y_label: format!("{part} certainty"),
        };
        let output = plot_file_name(&config.plots_dir(), &title);
        draw_series_plot(&output, (PLOT_WIDTH, PLOT_HEIGHT), &plot_config)?;
    }
    Ok(())
}

/// Certainty of one part of a skeleton pair against the other, frame by frame.
pub fn plot_pair_certainty(config: &RunConfig, analysis: &TakeAnalysis) -> Result<(), Box<dyn Error>> {
    let certainty = certainty_across_frames(&analysis.matrix);
    for (a, b) in BODY_PART_PAIRS {
        let observed = analysis.matrix.has_data(a, Element::Certainty)
            || analysis.matrix.has_data(b, Element::Certainty);
        if !observed {
            continue;
        }
        let title = format!("Plot of {a} and {b} certainty across frames");
        let data = certainty[a.index()]
            .iter()
            .zip(&certainty[b.index()])
            .map(|(&ca, &cb)| (ca, cb))
            .collect();
        let plot_config = PlotConfig {
            title: title.clone(),
            x_range: certainty_range(),
            y_range: certainty_range(),
            series: vec![PlotSeries {
                data,
                label: String::new(),
                color: *COLOR_CERTAINTY_POINT,
                stroke_width: 0,
                annotate_indices: true,
            }],
            x_label: format!("{a} certainty"),
            y_label: format!("{b} certainty"),
        };
        let output = plot_file_name(&config.plots_dir(), &title);
        draw_series_plot(&output, (PLOT_WIDTH, PLOT_HEIGHT), &plot_config)?;
    }
    Ok(())
}

/// Certainty of every part across frames on one chart, y fixed to [0, 1].
pub fn plot_all_certainty(config: &RunConfig, analysis: &TakeAnalysis) -> Result<(), Box<dyn Error>> {
    let certainty = certainty_across_frames(&analysis.matrix);
    let series: Vec<PlotSeries> = BodyPart::ALL
        .iter()
        .map(|&part| PlotSeries {
            data: certainty[part.index()]
                .iter()
                .enumerate()
                .map(|(frame, &c)| (frame as f64, c))
                .collect(),
            label: part.name().to_string(),
            color: part_color(part),
            stroke_width: LINE_WIDTH_PLOT,
            annotate_indices: false,
        })
        .collect();

    let title = "Plot of body parts certainty across frames".to_string();
    if analysis.max_frames() == 0 {
        info!("  Skipping '{title}': no frames.");
        return Ok(());
    }
    let plot_config = PlotConfig {
        title: title.clone(),
        x_range: frame_range(analysis.max_frames()),
        y_range: 0.0..1.0,
        series,
        x_label: "Frame".to_string(),
        y_label: "Body parts certainty".to_string(),
    };
    let output = plot_file_name(&config.plots_dir(), &title);
    draw_series_plot(&output, (PLOT_WIDTH_WIDE, PLOT_HEIGHT_WIDE), &plot_config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_range_covers_all_frames() {
        let r = frame_range(10);
        assert!(r.start < 0.0 && r.end > 9.0);
        let single = frame_range(1);
        assert!(single.start < 0.0 && single.end > 0.0);
    }
}

// src/plot_functions/plot_certainty.rs
