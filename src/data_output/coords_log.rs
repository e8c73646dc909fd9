// src/data_output/coords_log.rs

use std::fs::OpenOptions;

use csv::WriterBuilder;

use crate::config::RunConfig;
use crate::data_input::log_data::KeypointObservation;
use crate::data_output::coords_log_path;
use crate::error::{PoseLogError, Result};

/// Append-only `<Part>CoordsAndProb.csv` files, one line of raw value
/// tokens per parsed observation.
pub struct CoordsLog<'a> {
    config: &'a RunConfig,
    lines_written: usize,
}

impl<'a> CoordsLog<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self {
            config,
            lines_written: 0,
        }
    }

    pub fn append(&mut self, observation: &KeypointObservation) -> Result<()> {
        let path = coords_log_path(self.config, observation.body_part);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| PoseLogError::io(&path, e))?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(file);
        writer.write_record(&observation.raw_values)?;
        writer.flush().map_err(|e| PoseLogError::io(&path, e))?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body_parts::BodyPart;
    use crate::data_output::prepare_output_dirs;
    use std::fs;

    #[test]
    fn test_append_keeps_raw_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path());
        prepare_output_dirs(&config).unwrap();

        let mut log = CoordsLog::new(&config);
        let obs = KeypointObservation {
            body_part: BodyPart::LEye,
            raw_values: vec!["0.10".to_string(), "2.50".to_string()],
            values: vec![0.1, 2.5],
        };
        let full = KeypointObservation {
            body_part: BodyPart::LEye,
            raw_values: vec!["1.00".into(), "2.00".into(), "3.00".into(), "0.95".into()],
            values: vec![1.0, 2.0, 3.0, 0.95],
        };
        log.append(&obs).unwrap();
        log.append(&full).unwrap();
        log.append(&obs).unwrap();

        let text = fs::read_to_string(coords_log_path(&config, BodyPart::LEye)).unwrap();
        assert_eq!(text, "0.10,2.50\n1.00,2.00,3.00,0.95\n0.10,2.50\n");
        assert_eq!(log.lines_written(), 3);
    }
}

// src/data_output/coords_log.rs
