// src/data_analysis/normalization.rs

use crate::body_parts::{BodyPart, Element, LEFT_TO_RIGHT_ORDER};
use crate::data_analysis::report_matrix::{ReportMatrix, StatSlot};

/// Present readings of `part`/`element`, shifted by that pair's mean.
///
/// Needs an analysed matrix; without a mean the series is empty.
pub fn mean_centered_values(analysed: &ReportMatrix, part: BodyPart, element: Element) -> Vec<f64> {
    match analysed.stat(part, element, StatSlot::Mean) {
        Some(mean) => analysed
            .present_values(part, element)
            .into_iter()
            .map(|v| v - mean)
            .collect(),
        None => Vec::new(),
    }
}

/// Non-empty per-part series of one element, in left-to-right order of
/// appearance. Used for the all-parts box plots.
pub fn element_series_by_part(
    analysed: &ReportMatrix,
    element: Element,
    mean_centered: bool,
) -> Vec<(BodyPart, Vec<f64>)> {
    LEFT_TO_RIGHT_ORDER
        .iter()
        .map(|&part| {
            let values = if mean_centered {
                mean_centered_values(analysed, part, element)
            } else {
                analysed.present_values(part, element)
            };
            (part, values)
        })
        .filter(|(_, values)| !values.is_empty())
        .collect()
}


// src/data_analysis/normalization.rs
