// src/plot_functions/plot_scatter.rs

use std::error::Error;

use log::info;

use crate::body_parts::{BodyPart, Element, BODY_PART_PAIRS};
use crate::config::RunConfig;
use crate::constants::{
    COLOR_SCATTER_POINT, COLOR_SKELETON, PLOT_HEIGHT, PLOT_HEIGHT_WIDE, PLOT_WIDTH, PLOT_WIDTH_WIDE,
};
use crate::data_analysis::report_matrix::{ReportMatrix, StatSlot};
use crate::data_analysis::statistics::TakeAnalysis;
use crate::plot_framework::{
    draw_scatter_2d_plot, draw_scatter_3d_plot, part_color, plot_file_name, GroupStyle, PointGroup,
    ScatterPlotConfig,
};

/// Frames in which x, y and z of `part` were all read.
pub fn spatial_points(matrix: &ReportMatrix, part: BodyPart) -> Vec<(f64, f64, f64)> {
    (0..matrix.max_frames())
        .filter_map(|frame| {
            Some((
                matrix.frame_value(part, Element::X, frame)?,
                matrix.frame_value(part, Element::Y, frame)?,
                matrix.frame_value(part, Element::Z, frame)?,
            ))
        })
        .collect()
}

/// Mean position of `part`, when all three coordinate means exist.
pub fn mean_point(matrix: &ReportMatrix, part: BodyPart) -> Option<(f64, f64, f64)> {
    Some((
        matrix.stat(part, Element::X, StatSlot::Mean)?,
        matrix.stat(part, Element::Y, StatSlot::Mean)?,
        matrix.stat(part, Element::Z, StatSlot::Mean)?,
    ))
}

fn axis_labels(config: &RunConfig) -> (String, String, String) {
    let frame = config.coordinate_frame;
    (
        frame.axis_label(Element::X),
        frame.axis_label(Element::Y),
        frame.axis_label(Element::Z),
    )
}

fn scatter_config(config: &RunConfig, title: String, groups: Vec<PointGroup>) -> ScatterPlotConfig {
    let (x_label, y_label, z_label) = axis_labels(config);
    ScatterPlotConfig {
        title,
        groups,
        x_label,
        y_label,
        z_label,
    }
}

/// One 3D scatter per body part with x, y and z readings.
pub fn plot_part_scatters(config: &RunConfig, analysis: &TakeAnalysis) -> Result<(), Box<dyn Error>> {
    let (x_label, y_label, z_label) = axis_labels(config);
    for part in BodyPart::ALL {
        if !analysis.matrix.has_spatial_data(part) {
            info!("  Skipping scatter of {part}: no spatial readings.");
            continue;
        }
        let title = format!("Scatterplot of {x_label}, {y_label}, {z_label} at {part}");
        let groups = vec![PointGroup {
            points: spatial_points(&analysis.matrix, part),
            label: String::new(),
            color: *COLOR_SCATTER_POINT,
            style: GroupStyle::Markers,
        }];
        let output = plot_file_name(&config.plots_dir(), &title);
        draw_scatter_3d_plot(&output, (PLOT_WIDTH, PLOT_HEIGHT), &scatter_config(config, title, groups))?;
    }
    Ok(())
}

/// One 3D scatter per skeleton pair, when both parts have spatial readings.
pub fn plot_pair_scatters(config: &RunConfig, analysis: &TakeAnalysis) -> Result<(), Box<dyn Error>> {
    let (x_label, y_label, z_label) = axis_labels(config);
    for (a, b) in BODY_PART_PAIRS {
        if !(analysis.matrix.has_spatial_data(a) && analysis.matrix.has_spatial_data(b)) {
            continue;
        }
        let title = format!("Scatterplot of {x_label}, {y_label}, {z_label} at {a} and {b} pair");
        let groups = [a, b]
            .iter()
            .map(|&part| PointGroup {
                points: spatial_points(&analysis.matrix, part),
                label: part.name().to_string(),
                color: part_color(part),
                style: GroupStyle::Markers,
            })
            .collect();
        let output = plot_file_name(&config.plots_dir(), &title);
        draw_scatter_3d_plot(&output, (PLOT_WIDTH, PLOT_HEIGHT), &scatter_config(config, title, groups))?;
    }
    Ok(())
}

/// Point groups for every part with spatial readings, followed by skeleton
/// limbs joining the mean positions of each pair.
pub fn whole_body_groups(matrix: &ReportMatrix) -> Vec<PointGroup> {
    let mut groups: Vec<PointGroup> = BodyPart::ALL
        .iter()
        .filter(|&&part| matrix.has_spatial_data(part))
        .map(|&part| PointGroup {
            points: spatial_points(matrix, part),
            label: part.name().to_string(),
            color: part_color(part),
            style: GroupStyle::Markers,
        })
        .collect();

    for (a, b) in BODY_PART_PAIRS {
        if let (Some(pa), Some(pb)) = (mean_point(matrix, a), mean_point(matrix, b)) {
            groups.push(PointGroup {
                points: vec![pa, pb],
                label: String::new(),
                color: *COLOR_SKELETON,
                style: GroupStyle::Line,
            });
        }
    }
    groups
}

/// All parts at once, in 3D and projected on x/y.
pub fn plot_whole_body_scatters(config: &RunConfig, analysis: &TakeAnalysis) -> Result<(), Box<dyn Error>> {
    let groups = whole_body_groups(&analysis.matrix);
    if groups.is_empty() {
        info!("  Skipping whole-body scatter: no spatial readings.");
        return Ok(());
    }
    let (x_label, y_label, z_label) = axis_labels(config);
    let size = (PLOT_WIDTH_WIDE, PLOT_HEIGHT_WIDE);

    let title_3d = format!("Scatterplot of {x_label}, {y_label}, {z_label} for all body parts detected in space");
    let output_3d = plot_file_name(&config.plots_dir(), &title_3d);
    draw_scatter_3d_plot(&output_3d, size, &scatter_config(config, title_3d, groups.clone()))?;

    let title_2d = format!("Scatterplot of {x_label}, {y_label} for all body parts detected in space");
    let output_2d = plot_file_name(&config.plots_dir(), &title_2d);
    draw_scatter_2d_plot(&output_2d, size, &scatter_config(config, title_2d, groups))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::report_matrix::build_report_matrix;
    use crate::data_analysis::statistics::compute_statistics;
    use crate::data_input::log_data::KeypointObservation;

    #[test]
    fn test_spatial_points_require_all_coordinates() {
        let full = KeypointObservation::new(BodyPart::Neck, vec![1.0, 2.0, 3.0, 0.9]);
        let partial = KeypointObservation::new(BodyPart::Neck, vec![4.0, 5.0]);
        let matrix = build_report_matrix(2, [(0, &full), (1, &partial)]);
        assert_eq!(spatial_points(&matrix, BodyPart::Neck), vec![(1.0, 2.0, 3.0)]);
        assert!(spatial_points(&matrix, BodyPart::Nose).is_empty());
    }

    #[test]
    fn test_whole_body_groups_add_skeleton_between_means() {
        let neck = KeypointObservation::new(BodyPart::Neck, vec![0.0, 0.0, 0.0, 1.0]);
        let nose = KeypointObservation::new(BodyPart::Nose, vec![0.0, 1.0, 0.0, 1.0]);
        let analysed = compute_statistics(&build_report_matrix(1, [(0, &neck), (0, &nose)]));

        let groups = whole_body_groups(&analysed);
        let markers = groups.iter().filter(|g| g.style == GroupStyle::Markers).count();
        let limbs: Vec<_> = groups.iter().filter(|g| g.style == GroupStyle::Line).collect();
        assert_eq!(markers, 2);
        assert_eq!(limbs.len(), 1);
        assert_eq!(limbs[0].points.len(), 2);
    }
}

// src/plot_functions/plot_scatter.rs
