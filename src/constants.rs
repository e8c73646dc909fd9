// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUEGREY, GREY, ORANGE, RED};
use plotters::style::RGBColor;

// --- Take layout defaults ---
// Number of log frames (files) analysed per take.
pub const DEFAULT_MAX_FRAMES: usize = 10;
// Upper bound on the frame window; the matrix holds 25 x 4 x (frames + 8) f64.
pub const MAX_FRAMES_LIMIT: usize = 100_000;
// Substring identifying the log files of a take, e.g. "raw Fri Jan 25 12:41:05.txt".
pub const DEFAULT_FILE_PREFIX: &str = "raw ";

pub const CSV_SUBDIR: &str = "csv";
pub const PLOTS_SUBDIR: &str = "plots";
pub const STATISTICS_SUBDIR: &str = "statistics";

pub const COORDS_LOG_SUFFIX: &str = "CoordsAndProb";
pub const STATISTICS_REPORT_FILE: &str = "Statistics.txt";
pub const Z_TABLE_FILE: &str = "z_table.txt";

// --- Log line format ---
// Lines containing this token are per-person headers ("Body 0 keypoints:").
pub const HEADER_TOKEN: &str = "Body";
pub const BODY_PART_PATTERN: &str = r"kp ([^:]*):";
pub const DECIMAL_PATTERN: &str = r"[0-9]+\.[0-9]+";

// Number of statistic slots following the frame readings in the report matrix.
pub const STAT_SLOT_COUNT: usize = 8;

// Text written for absent values in CSV and text reports.
pub const ABSENT_VALUE_TEXT: &str = "nan";

// --- Plot dimensions ---
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 960;
pub const PLOT_WIDTH_WIDE: u32 = 1920;
pub const PLOT_HEIGHT_WIDE: u32 = 1080;

// --- Font sizes ---
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_POINT_LABEL: i32 = 11;
pub const FONT_SIZE_MESSAGE: i32 = 20;
pub const FONT_FAMILY: &str = "sans-serif";

// --- Plot Color Assignments ---
pub const COLOR_SCATTER_POINT: &RGBColor = &RED;
pub const COLOR_CERTAINTY_POINT: &RGBColor = &ORANGE;
pub const COLOR_BOXPLOT: &RGBColor = &BLUEGREY;
pub const COLOR_SKELETON: &RGBColor = &GREY;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_SKELETON: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Marker radius in pixels.
pub const POINT_SIZE: i32 = 4;

// 3D view angles (radians).
pub const PROJECTION_YAW: f64 = 0.6;
pub const PROJECTION_PITCH: f64 = 0.25;
pub const PROJECTION_SCALE: f64 = 0.85;

// src/constants.rs
