// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

use crate::data_input::log_parser::LineParseError;

/// Errors that abort a take run.
#[derive(Error, Debug)]
pub enum PoseLogError {
    #[error("Parse error in '{}' line {line}: {source}", file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        #[source]
        source: LineParseError,
    },

    #[error("Unknown BODY_25 body part '{name}' in '{}' line {line}", file.display())]
    UnknownBodyPart {
        file: PathBuf,
        line: usize,
        name: String,
    },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid log line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PoseLogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PoseLogError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PoseLogError>;
