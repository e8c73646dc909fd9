// src/data_input/take_scanner.rs

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::body_parts::BodyPart;
use crate::config::{FileOrdering, RunConfig};
use crate::data_analysis::report_matrix::ReportMatrix;
use crate::data_input::log_data::KeypointObservation;
use crate::data_input::log_parser::KeypointLineParser;
use crate::error::{PoseLogError, Result};

/// Outcome of reading the log files of a take.
#[derive(Debug, Clone)]
pub struct TakeScan {
    pub matrix: ReportMatrix,
    /// Number of files processed; equals the frame counter at the end of the scan.
    pub frames_processed: usize,
    /// Files in frame order.
    pub files: Vec<PathBuf>,
}

/// Regular files of the take directory whose name contains the configured prefix.
pub fn list_eligible_files(config: &RunConfig) -> Result<Vec<PathBuf>> {
    let dir = config.take_dir();
    let entries = fs::read_dir(dir).map_err(|e| PoseLogError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PoseLogError::io(dir, e))?;
        let path = entry.path();
        let name_matches = entry
            .file_name()
            .to_string_lossy()
            .contains(config.file_prefix.as_str());
        if name_matches && path.is_file() {
            files.push(path);
        }
    }

    if config.file_ordering == FileOrdering::FileName {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(files)
}

/// Parses one log file into observations, in line order.
///
/// Aborts on the first malformed line or unknown body part.
pub fn read_log_file(
    parser: &KeypointLineParser,
    path: &Path,
) -> Result<Vec<KeypointObservation>> {
    let file = File::open(path).map_err(|e| PoseLogError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut observations = Vec::new();
    for (line_index, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| PoseLogError::io(path, e))?;
        let parsed = match parser.parse_line(&line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(source) => {
                return Err(PoseLogError::Parse {
                    file: path.to_path_buf(),
                    line: line_index + 1,
                    source,
                })
            }
        };

        let body_part = BodyPart::from_name(&parsed.body_part_name).ok_or_else(|| {
            PoseLogError::UnknownBodyPart {
                file: path.to_path_buf(),
                line: line_index + 1,
                name: parsed.body_part_name.clone(),
            }
        })?;

        observations.push(KeypointObservation {
            body_part,
            raw_values: parsed.raw_values,
            values: parsed.values,
        });
    }
    Ok(observations)
}

/// Reads the take's log files frame by frame into a report matrix.
///
/// Each eligible file is one frame; scanning stops once `max_frames` files
/// have been processed. `on_observation` sees every observation in order,
/// together with its frame index.
pub fn scan_take<F>(config: &RunConfig, mut on_observation: F) -> Result<TakeScan>
where
    F: FnMut(usize, &KeypointObservation) -> Result<()>,
{
    config.validate()?;
    let parser = KeypointLineParser::new()?;
    let eligible = list_eligible_files(config)?;
    info!(
        "Found {} log file(s) containing '{}' in '{}'.",
        eligible.len(),
        config.file_prefix,
        config.take_dir().display()
    );

    let mut matrix = ReportMatrix::new(config.max_frames);
    let mut files = Vec::new();
    let mut frame_counter = 0;

    for path in eligible {
        if frame_counter == config.max_frames {
            break;
        }
        let observations = read_log_file(&parser, &path)?;
        debug!(
            "  Frame {}: '{}' ({} keypoints)",
            frame_counter,
            path.display(),
            observations.len()
        );
        for observation in &observations {
            matrix.record(frame_counter, observation);
            on_observation(frame_counter, observation)?;
        }
        files.push(path);
        frame_counter += 1;
    }

    info!("Processed {} of at most {} frames.", frame_counter, config.max_frames);
    Ok(TakeScan {
        matrix,
        frames_processed: frame_counter,
        files,
    })
}

// src/data_input/take_scanner.rs
