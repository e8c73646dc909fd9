// src/data_output/mod.rs

pub mod coords_log;
pub mod reports;

use std::fs::{self, File};
use std::path::PathBuf;

use crate::body_parts::BodyPart;
use crate::config::RunConfig;
use crate::constants::{ABSENT_VALUE_TEXT, COORDS_LOG_SUFFIX};
use crate::error::{PoseLogError, Result};

/// Formats a report value: `nan` when absent, otherwise always with a
/// decimal point (`3.0`, `0.125`).
pub fn format_report_value(value: f64) -> String {
    if value.is_nan() {
        ABSENT_VALUE_TEXT.to_string()
    } else {
        format!("{value:?}")
    }
}

pub fn coords_log_path(config: &RunConfig, part: BodyPart) -> PathBuf {
    config
        .csv_dir()
        .join(format!("{}{}.csv", part.name(), COORDS_LOG_SUFFIX))
}

pub fn part_summary_path(config: &RunConfig, part: BodyPart) -> PathBuf {
    config.csv_dir().join(format!("{}.csv", part.name()))
}

/// Creates the csv/plots/statistics directories of the take and truncates
/// the per-part CSV files, so reruns never append to stale output.
pub fn prepare_output_dirs(config: &RunConfig) -> Result<()> {
    for dir in [config.csv_dir(), config.plots_dir(), config.statistics_dir()] {
        fs::create_dir_all(&dir).map_err(|e| PoseLogError::io(&dir, e))?;
    }
    for part in BodyPart::ALL {
        for path in [coords_log_path(config, part), part_summary_path(config, part)] {
            File::create(&path).map_err(|e| PoseLogError::io(&path, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_report_value() {
        assert_eq!(format_report_value(f64::NAN), "nan");
        assert_eq!(format_report_value(3.0), "3.0");
        assert_eq!(format_report_value(0.125), "0.125");
        assert_eq!(format_report_value(-1.5), "-1.5");
    }

    #[test]
    fn test_prepare_output_dirs_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path());
        prepare_output_dirs(&config).unwrap();
        let log = coords_log_path(&config, BodyPart::Nose);
        fs::write(&log, "stale\n").unwrap();
        prepare_output_dirs(&config).unwrap();
        assert_eq!(fs::read_to_string(&log).unwrap(), "");
        assert!(config.plots_dir().is_dir());
        assert!(config.statistics_dir().is_dir());
    }
}

// src/data_output/mod.rs
