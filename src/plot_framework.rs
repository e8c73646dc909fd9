// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::prelude::DrawingBackend;
use plotters::chart::{ChartBuilder, ChartContext, SeriesLabelPosition};
use plotters::coord::CoordTranslate;
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::data::Quartiles;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Boxplot, Circle, EmptyElement, PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use log::info;

use crate::body_parts::{BodyPart, BODY_PART_COUNT};
use crate::constants::{
    COLOR_BOXPLOT, FONT_FAMILY, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND,
    FONT_SIZE_MESSAGE, FONT_SIZE_POINT_LABEL, LINE_WIDTH_LEGEND, LINE_WIDTH_SKELETON, POINT_SIZE,
    PROJECTION_PITCH, PROJECTION_SCALE, PROJECTION_YAW,
};

type PlotArea<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Padded range covering all finite values, `None` when there are none.
pub fn padded_range<I: IntoIterator<Item = f64>>(values: I) -> Option<Range<f64>> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min.is_infinite() || max.is_infinite() {
        return None;
    }
    let (lo, hi) = calculate_range(min, max);
    Some(lo..hi)
}

/// Distinct colour per body part, evenly spaced around the hue circle.
pub fn part_color(part: BodyPart) -> RGBColor {
    let c = colorous::SINEBOW.eval_rational(part.index(), BODY_PART_COUNT);
    RGBColor(c.r, c.g, c.b)
}

/// File name for a plot: its title plus `.png`.
pub fn plot_file_name(plots_dir: &Path, title: &str) -> String {
    plots_dir
        .join(format!("{title}.png"))
        .to_string_lossy()
        .into_owned()
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &PlotArea,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{plot_type} Data Unavailable: {reason}");
    let estimated_text_width = (message.len() as f32 * FONT_SIZE_MESSAGE as f32 * 0.6) as i32;

    let text_style = (FONT_FAMILY, FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(
        message,
        (width / 2 - estimated_text_width / 2, height / 2),
        text_style,
    ))?;
    Ok(())
}

/// How a group of points is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupStyle {
    Markers,
    /// Points joined in order (skeleton limbs).
    Line,
}

/// A labelled set of 3D points. 2D charts use x and y only.
#[derive(Clone, Debug)]
pub struct PointGroup {
    pub points: Vec<(f64, f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub style: GroupStyle,
}

#[derive(Clone, Debug)]
pub struct ScatterPlotConfig {
    pub title: String,
    pub groups: Vec<PointGroup>,
    pub x_label: String,
    pub y_label: String,
    pub z_label: String,
}

impl ScatterPlotConfig {
    fn has_data(&self) -> bool {
        self.groups.iter().any(|g| !g.points.is_empty())
    }

    fn axis_ranges(&self) -> Option<(Range<f64>, Range<f64>, Range<f64>)> {
        let points = || self.groups.iter().flat_map(|g| g.points.iter());
        Some((
            padded_range(points().map(|p| p.0))?,
            padded_range(points().map(|p| p.1))?,
            padded_range(points().map(|p| p.2))?,
        ))
    }
}

/// A series of (x, y) points drawn as markers, optionally joined by a line
/// and annotated with their index.
#[derive(Clone, Debug)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub annotate_indices: bool,
}

#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// One box of a box plot.
#[derive(Clone, Debug)]
pub struct BoxData {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug)]
pub struct BoxPlotConfig {
    pub title: String,
    pub boxes: Vec<BoxData>,
    pub x_label: String,
    pub y_label: String,
}

fn configure_legend<'a, DB, CT>(chart: &mut ChartContext<'a, DB, CT>) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    CT: CoordTranslate,
{
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT_FAMILY, FONT_SIZE_LEGEND))
        .draw()?;
    Ok(())
}

fn draw_scatter_3d_chart(area: &PlotArea, config: &ScatterPlotConfig) -> Result<(), Box<dyn Error>> {
    let Some((x_range, y_range, z_range)) = config.axis_ranges() else {
        return draw_unavailable_message(area, &config.title, "No finite points");
    };

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{} ({}, {}, {})", config.title, config.x_label, config.y_label, config.z_label),
            (FONT_FAMILY, FONT_SIZE_CHART_TITLE),
        )
        .margin(20)
        .build_cartesian_3d(x_range, y_range, z_range)?;

    chart.with_projection(|mut pb| {
        pb.yaw = PROJECTION_YAW;
        pb.pitch = PROJECTION_PITCH;
        pb.scale = PROJECTION_SCALE;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    let mut legend_entries = 0;
    for group in &config.groups {
        if group.points.is_empty() {
            continue;
        }
        let color = group.color;
        let anno = match group.style {
            GroupStyle::Markers => chart.draw_series(
                group
                    .points
                    .iter()
                    .map(|&p| Circle::new(p, POINT_SIZE, color.filled())),
            )?,
            GroupStyle::Line => chart.draw_series(LineSeries::new(
                group.points.iter().copied(),
                color.stroke_width(LINE_WIDTH_SKELETON),
            ))?,
        };
        if !group.label.is_empty() {
            anno.label(&group.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_entries += 1;
        }
    }

    if legend_entries > 0 {
        configure_legend(&mut chart)?;
    }
    Ok(())
}

fn draw_scatter_2d_chart(area: &PlotArea, config: &ScatterPlotConfig) -> Result<(), Box<dyn Error>> {
    let Some((x_range, y_range, _)) = config.axis_ranges() else {
        return draw_unavailable_message(area, &config.title, "No finite points");
    };

    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, (FONT_FAMILY, FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .light_line_style(WHITE.mix(0.7))
        .label_style((FONT_FAMILY, FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_entries = 0;
    for group in &config.groups {
        if group.points.is_empty() {
            continue;
        }
        let color = group.color;
        let anno = match group.style {
            GroupStyle::Markers => chart.draw_series(
                group
                    .points
                    .iter()
                    .map(|&(x, y, _)| Circle::new((x, y), POINT_SIZE, color.filled())),
            )?,
            GroupStyle::Line => chart.draw_series(LineSeries::new(
                group.points.iter().map(|&(x, y, _)| (x, y)),
                color.stroke_width(LINE_WIDTH_SKELETON),
            ))?,
        };
        if !group.label.is_empty() {
            anno.label(&group.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_entries += 1;
        }
    }

    if legend_entries > 0 {
        configure_legend(&mut chart)?;
    }
    Ok(())
}

fn draw_series_chart(area: &PlotArea, config: &PlotConfig) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, (FONT_FAMILY, FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(config.x_range.clone(), config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .light_line_style(WHITE.mix(0.7))
        .label_style((FONT_FAMILY, FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_entries = 0;
    for s in &config.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        if s.stroke_width > 0 {
            chart.draw_series(LineSeries::new(
                s.data.iter().copied(),
                color.stroke_width(s.stroke_width),
            ))?;
        }

        let anno = if s.annotate_indices {
            chart.draw_series(s.data.iter().enumerate().map(|(i, &point)| {
                EmptyElement::at(point)
                    + Circle::new((0, 0), POINT_SIZE, color.filled())
                    + Text::new(
                        i.to_string(),
                        (POINT_SIZE + 2, -(POINT_SIZE + 2)),
                        (FONT_FAMILY, FONT_SIZE_POINT_LABEL).into_font(),
                    )
            }))?
        } else {
            chart.draw_series(
                s.data
                    .iter()
                    .map(|&point| Circle::new(point, POINT_SIZE, color.filled())),
            )?
        };

        if !s.label.is_empty() {
            anno.label(&s.label).legend(move |(x, y)| {
                Circle::new((x + 10, y), POINT_SIZE, color.filled())
            });
            legend_entries += 1;
        }
    }

    if legend_entries > 0 {
        configure_legend(&mut chart)?;
    }
    Ok(())
}

fn draw_box_chart(area: &PlotArea, config: &BoxPlotConfig) -> Result<(), Box<dyn Error>> {
    let boxes: Vec<&BoxData> = config.boxes.iter().filter(|b| !b.values.is_empty()).collect();
    let Some(y_range) = padded_range(boxes.iter().flat_map(|b| b.values.iter().copied())) else {
        return draw_unavailable_message(area, &config.title, "No data points");
    };
    let labels: Vec<String> = boxes.iter().map(|b| b.label.clone()).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, (FONT_FAMILY, FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            labels[..].into_segmented(),
            y_range.start as f32..y_range.end as f32,
        )?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(labels.len())
        .light_line_style(WHITE.mix(0.7))
        .label_style((FONT_FAMILY, FONT_SIZE_AXIS_LABEL))
        .draw()?;

    chart.draw_series(boxes.iter().zip(labels.iter()).map(|(b, label)| {
        let quartiles = Quartiles::new(&b.values);
        Boxplot::new_vertical(SegmentValue::CenterOf(label), &quartiles)
            .width(24)
            .whisker_width(0.5)
            .style(COLOR_BOXPLOT.stroke_width(LINE_WIDTH_SKELETON))
    }))?;
    Ok(())
}

fn render_single_chart<F>(output_filename: &str, size: (u32, u32), draw: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&PlotArea) -> Result<(), Box<dyn Error>>,
{
    let root_area = BitMapBackend::new(output_filename, size).into_drawing_area();
    root_area.fill(&WHITE)?;
    draw(&root_area)?;
    root_area.present()?;
    info!("  Plot saved as '{output_filename}'.");
    Ok(())
}

/// Renders a 3D scatter (markers and skeleton lines) into `output_filename`.
pub fn draw_scatter_3d_plot(
    output_filename: &str,
    size: (u32, u32),
    config: &ScatterPlotConfig,
) -> Result<(), Box<dyn Error>> {
    render_single_chart(output_filename, size, |area| {
        if config.has_data() {
            draw_scatter_3d_chart(area, config)
        } else {
            draw_unavailable_message(area, &config.title, "No data points")
        }
    })
}

/// Renders the x/y projection of a scatter configuration.
pub fn draw_scatter_2d_plot(
    output_filename: &str,
    size: (u32, u32),
    config: &ScatterPlotConfig,
) -> Result<(), Box<dyn Error>> {
    render_single_chart(output_filename, size, |area| {
        if config.has_data() {
            draw_scatter_2d_chart(area, config)
        } else {
            draw_unavailable_message(area, &config.title, "No data points")
        }
    })
}

/// Renders marker (and optional line) series.
pub fn draw_series_plot(
    output_filename: &str,
    size: (u32, u32),
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    render_single_chart(output_filename, size, |area| {
        let has_data = config.series.iter().any(|s| !s.data.is_empty());
        let valid_ranges =
            config.x_range.end > config.x_range.start && config.y_range.end > config.y_range.start;
        if has_data && valid_ranges {
            draw_series_chart(area, config)
        } else {
            let reason = if !has_data { "No data points" } else { "Invalid ranges" };
            draw_unavailable_message(area, &config.title, reason)
        }
    })
}

/// Renders one box per non-empty `BoxData`.
pub fn draw_box_plot(
    output_filename: &str,
    size: (u32, u32),
    config: &BoxPlotConfig,
) -> Result<(), Box<dyn Error>> {
    render_single_chart(output_filename, size, |area| draw_box_chart(area, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads() {
        assert_eq!(calculate_range(0.0, 10.0), (-1.5, 11.5));
        assert_eq!(calculate_range(10.0, 0.0), (-1.5, 11.5));
        assert_eq!(calculate_range(2.0, 2.0), (1.5, 2.5));
    }

    #[test]
    fn test_padded_range_ignores_non_finite() {
        assert_eq!(padded_range([f64::NAN, 2.0, 2.0]), Some(1.5..2.5));
        assert_eq!(padded_range([f64::NAN]), None);
        assert_eq!(padded_range(Vec::new()), None);
    }

    #[test]
    fn test_part_colors_are_distinct() {
        let mut colors: Vec<(u8, u8, u8)> = BodyPart::ALL
            .iter()
            .map(|&p| {
                let c = part_color(p);
                (c.0, c.1, c.2)
            })
            .collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), BODY_PART_COUNT);
    }

    #[test]
    fn test_plot_file_name() {
        let name = plot_file_name(Path::new("/take/plots"), "Boxplot of Xcam at Nose");
        assert_eq!(name, "/take/plots/Boxplot of Xcam at Nose.png");
    }
}

// src/plot_framework.rs
