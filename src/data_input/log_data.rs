// src/data_input/log_data.rs

use crate::body_parts::{BodyPart, Element};

/// A data line as extracted from the log, before the body part name is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub body_part_name: String,
    /// Matched number tokens, verbatim.
    pub raw_values: Vec<String>,
    pub values: Vec<f64>,
}

/// One keypoint reading of one frame: values are positional (x, y, z, certainty),
/// lines carrying fewer than four numbers leave the trailing elements absent.
#[derive(Debug, Clone, PartialEq)]
pub struct KeypointObservation {
    pub body_part: BodyPart,
    pub raw_values: Vec<String>,
    pub values: Vec<f64>,
}

impl KeypointObservation {
    pub fn new(body_part: BodyPart, values: Vec<f64>) -> Self {
        let raw_values = values.iter().map(|v| format!("{v:?}")).collect();
        Self {
            body_part,
            raw_values,
            values,
        }
    }

    pub fn element_values(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        Element::ALL.iter().copied().zip(self.values.iter().copied())
    }
}

// src/data_input/log_data.rs
