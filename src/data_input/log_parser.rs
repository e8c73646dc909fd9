// src/data_input/log_parser.rs

use regex::Regex;
use thiserror::Error;

use crate::body_parts::ELEMENT_COUNT;
use crate::constants::{BODY_PART_PATTERN, DECIMAL_PATTERN, HEADER_TOKEN};
use crate::data_input::log_data::ParsedLine;

/// Reasons a data line cannot be turned into an observation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineParseError {
    #[error("no 'kp <BodyPart>:' marker found")]
    MissingBodyPart,

    #[error("{count} values found, at most 4 (x, y, z, certainty) expected")]
    TooManyValues { count: usize },

    #[error("cannot convert '{token}' to a number")]
    InvalidNumber { token: String },
}

/// Parser for pose logger lines of the form
/// `kp <BodyPart>: x=<float> y=<float> z=<float> ...`.
///
/// Only tokens with a decimal point are recognised as numbers: integers,
/// signs and exponents are not part of the pattern.
#[derive(Debug, Clone)]
pub struct KeypointLineParser {
    body_part_re: Regex,
    decimal_re: Regex,
}

impl KeypointLineParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            body_part_re: Regex::new(BODY_PART_PATTERN)?,
            decimal_re: Regex::new(DECIMAL_PATTERN)?,
        })
    }

    /// True for lines that carry a keypoint (not a header, not blank).
    pub fn is_data_line(&self, line: &str) -> bool {
        !line.contains(HEADER_TOKEN) && !line.trim().is_empty()
    }

    /// Extracts the body part name and the decimal numbers following it.
    ///
    /// Returns `Ok(None)` for header and blank lines.
    pub fn parse_line(&self, line: &str) -> Result<Option<ParsedLine>, LineParseError> {
        if !self.is_data_line(line) {
            return Ok(None);
        }

        let captures = self
            .body_part_re
            .captures(line)
            .ok_or(LineParseError::MissingBodyPart)?;
        let (name_match, marker_end) = match (captures.get(1), captures.get(0)) {
            (Some(name), Some(whole)) => (name, whole.end()),
            _ => return Err(LineParseError::MissingBodyPart),
        };

        let raw_values: Vec<String> = self
            .decimal_re
            .find_iter(&line[marker_end..])
            .map(|m| m.as_str().to_string())
            .collect();
        if raw_values.len() > ELEMENT_COUNT {
            return Err(LineParseError::TooManyValues {
                count: raw_values.len(),
            });
        }

        let values = raw_values
            .iter()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| LineParseError::InvalidNumber {
                        token: token.clone(),
                    })
            })
            .collect::<Result<Vec<f64>, LineParseError>>()?;

        Ok(Some(ParsedLine {
            body_part_name: name_match.as_str().trim().to_string(),
            raw_values,
            values,
        }))
    }
}


// src/data_input/log_parser.rs
