// src/plot_functions/plot_boxplots.rs

use std::error::Error;

use log::info;

use crate::body_parts::{BodyPart, Element};
use crate::config::RunConfig;
use crate::constants::{PLOT_HEIGHT, PLOT_HEIGHT_WIDE, PLOT_WIDTH, PLOT_WIDTH_WIDE};
use crate::data_analysis::normalization::element_series_by_part;
use crate::data_analysis::statistics::TakeAnalysis;
use crate::plot_framework::{draw_box_plot, plot_file_name, BoxData, BoxPlotConfig};

const ALL_PARTS_LABEL: &str = "BODY_25 human pose model body parts";

/// Box plot of x, y and z for each body part that has any coordinate reading.
pub fn plot_part_boxplots(config: &RunConfig, analysis: &TakeAnalysis) -> Result<(), Box<dyn Error>> {
    let frame = config.coordinate_frame;
    let labels: Vec<String> = Element::COORDINATES
        .iter()
        .map(|&e| frame.axis_label(e))
        .collect();

    for part in BodyPart::ALL {
        let boxes: Vec<BoxData> = Element::COORDINATES
            .iter()
            .zip(&labels)
            .map(|(&element, label)| BoxData {
                label: label.clone(),
                values: analysis.matrix.present_values(part, element),
            })
            .collect();
        if boxes.iter().all(|b| b.values.is_empty()) {
            continue;
        }

        let title = format!("Boxplot of {} at {part}", labels.join(", "));
        let output = plot_file_name(&config.plots_dir(), &title);
        let plot_config = BoxPlotConfig {
            title,
            boxes,
            x_label: part.name().to_string(),
            y_label: String::new(),
        };
        draw_box_plot(&output, (PLOT_WIDTH, PLOT_HEIGHT), &plot_config)?;
    }
    Ok(())
}

pub fn element_boxplot_title(element: Element, mean_centered: bool) -> String {
    let suffix = if mean_centered { " after mean normalization" } else { "" };
    format!(
        "Boxplot of {} values for all {ALL_PARTS_LABEL}{suffix}",
        element.name()
    )
}

/// One box plot per element comparing all parts, left to right.
pub fn plot_element_boxplots(
    config: &RunConfig,
    analysis: &TakeAnalysis,
    mean_centered: bool,
) -> Result<(), Box<dyn Error>> {
    for element in Element::ALL {
        let series = element_series_by_part(&analysis.matrix, element, mean_centered);
        let title = element_boxplot_title(element, mean_centered);
        if series.is_empty() {
            info!("  Skipping '{title}': no readings.");
            continue;
        }
        let boxes = series
            .into_iter()
            .map(|(part, values)| BoxData {
                label: part.name().to_string(),
                values,
            })
            .collect();
        let output = plot_file_name(&config.plots_dir(), &title);
        let plot_config = BoxPlotConfig {
            title,
            boxes,
            x_label: ALL_PARTS_LABEL.to_string(),
            y_label: element.name().to_string(),
        };
        draw_box_plot(&output, (PLOT_WIDTH_WIDE, PLOT_HEIGHT_WIDE), &plot_config)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_boxplot_titles() {
        assert_eq!(
            element_boxplot_title(Element::X, false),
            "Boxplot of x values for all BODY_25 human pose model body parts"
        );
        assert_eq!(
            element_boxplot_title(Element::Certainty, true),
            "Boxplot of certainty values for all BODY_25 human pose model body parts after mean normalization"
        );
    }
}

// src/plot_functions/plot_boxplots.rs
