// src/data_analysis/report_matrix.rs

use ndarray::{s, Array3, ArrayView1};

use crate::body_parts::{BodyPart, Element, BODY_PART_COUNT, ELEMENT_COUNT};
use crate::constants::STAT_SLOT_COUNT;
use crate::data_input::log_data::KeypointObservation;

/// Statistic slots stored after the frame readings, in report column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatSlot {
    Nobs,
    Min,
    Max,
    Mean,
    Variance,
    Skewness,
    Kurtosis,
    StdDev,
}

impl StatSlot {
    pub const ALL: [StatSlot; STAT_SLOT_COUNT] = [
        StatSlot::Nobs,
        StatSlot::Min,
        StatSlot::Max,
        StatSlot::Mean,
        StatSlot::Variance,
        StatSlot::Skewness,
        StatSlot::Kurtosis,
        StatSlot::StdDev,
    ];

    pub fn offset(self) -> usize {
        self as usize
    }

    /// Column name used in the per-part summary CSV header.
    pub fn column_name(self) -> &'static str {
        match self {
            StatSlot::Nobs => "nobs",
            StatSlot::Min => "min",
            StatSlot::Max => "max",
            StatSlot::Mean => "mean",
            StatSlot::Variance => "variance",
            StatSlot::Skewness => "skewness",
            StatSlot::Kurtosis => "kurtosis",
            StatSlot::StdDev => "std_dev",
        }
    }
}

/// Per-take table `[body part][element][frame readings.., statistics..]`.
///
/// Absent values are NaN. Statistic slots stay NaN until the statistics
/// pass fills them, and stay NaN for pairs without any reading.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMatrix {
    data: Array3<f64>,
    max_frames: usize,
}

impl ReportMatrix {
    pub fn new(max_frames: usize) -> Self {
        Self {
            data: Array3::from_elem(
                (BODY_PART_COUNT, ELEMENT_COUNT, max_frames + STAT_SLOT_COUNT),
                f64::NAN,
            ),
            max_frames,
        }
    }

    pub fn max_frames(&self) -> usize {
        self.max_frames
    }

    /// Readings of one (part, element) pair over the frame window.
    pub fn frame_values(&self, part: BodyPart, element: Element) -> ArrayView1<'_, f64> {
        self.data
            .slice(s![part.index(), element.index(), ..self.max_frames])
    }

    /// The full row: frame readings followed by the statistic slots.
    pub fn row(&self, part: BodyPart, element: Element) -> ArrayView1<'_, f64> {
        self.data.slice(s![part.index(), element.index(), ..])
    }

    pub fn frame_value(&self, part: BodyPart, element: Element, frame: usize) -> Option<f64> {
        if frame >= self.max_frames {
            return None;
        }
        let v = self.data[[part.index(), element.index(), frame]];
        if v.is_nan() {
            None
        } else {
            Some(v)
        }
    }

    /// Stores a reading. Frames outside the window are ignored.
    pub fn set_frame_value(&mut self, part: BodyPart, element: Element, frame: usize, value: f64) {
        if frame < self.max_frames {
            self.data[[part.index(), element.index(), frame]] = value;
        }
    }

    /// Writes every value of an observation into `frame`.
    pub fn record(&mut self, frame: usize, observation: &KeypointObservation) {
        for (element, value) in observation.element_values() {
            self.set_frame_value(observation.body_part, element, frame, value);
        }
    }

    pub fn stat(&self, part: BodyPart, element: Element, slot: StatSlot) -> Option<f64> {
        let v = self.data[[part.index(), element.index(), self.max_frames + slot.offset()]];
        if v.is_nan() {
            None
        } else {
            Some(v)
        }
    }

    pub fn set_stat(&mut self, part: BodyPart, element: Element, slot: StatSlot, value: f64) {
        self.data[[part.index(), element.index(), self.max_frames + slot.offset()]] = value;
    }

    /// Readings in the frame window with absent frames dropped.
    pub fn present_values(&self, part: BodyPart, element: Element) -> Vec<f64> {
        self.frame_values(part, element)
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .collect()
    }

    pub fn has_data(&self, part: BodyPart, element: Element) -> bool {
        self.frame_values(part, element).iter().any(|v| !v.is_nan())
    }

    /// True when x, y and z all have at least one reading.
    pub fn has_spatial_data(&self, part: BodyPart) -> bool {
        Element::COORDINATES
            .iter()
            .all(|&element| self.has_data(part, element))
    }
}

/// Builds a matrix from in-memory `(frame, observation)` pairs.
pub fn build_report_matrix<'a, I>(max_frames: usize, observations: I) -> ReportMatrix
where
    I: IntoIterator<Item = (usize, &'a KeypointObservation)>,
{
    let mut matrix = ReportMatrix::new(max_frames);
    for (frame, observation) in observations {
        matrix.record(frame, observation);
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix_is_absent() {
        let matrix = ReportMatrix::new(10);
        assert_eq!(matrix.row(BodyPart::Nose, Element::X).len(), 18);
        assert!(matrix.row(BodyPart::RHeel, Element::Certainty).iter().all(|v| v.is_nan()));
        assert_eq!(matrix.stat(BodyPart::Nose, Element::X, StatSlot::Mean), None);
    }

    #[test]
    fn test_record_is_positional() {
        let obs = KeypointObservation::new(BodyPart::Neck, vec![1.0, 2.0, 3.0]);
        let matrix = build_report_matrix(4, [(2, &obs)]);
        assert_eq!(matrix.frame_value(BodyPart::Neck, Element::X, 2), Some(1.0));
        assert_eq!(matrix.frame_value(BodyPart::Neck, Element::Z, 2), Some(3.0));
        assert_eq!(matrix.frame_value(BodyPart::Neck, Element::Certainty, 2), None);
        assert_eq!(matrix.frame_value(BodyPart::Neck, Element::X, 1), None);
    }

    #[test]
    fn test_frames_outside_window_are_ignored() {
        let obs = KeypointObservation::new(BodyPart::Nose, vec![1.0, 1.0, 1.0, 1.0]);
        let matrix = build_report_matrix(2, [(2, &obs)]);
        assert!(!matrix.has_data(BodyPart::Nose, Element::X));
        assert_eq!(matrix.stat(BodyPart::Nose, Element::X, StatSlot::Nobs), None);
    }

    #[test]
    fn test_stat_slots_follow_frames() {
        let mut matrix = ReportMatrix::new(3);
        matrix.set_stat(BodyPart::LEye, Element::Y, StatSlot::StdDev, 0.5);
        let row = matrix.row(BodyPart::LEye, Element::Y);
        assert_eq!(row[3 + 7], 0.5);
        assert_eq!(matrix.stat(BodyPart::LEye, Element::Y, StatSlot::StdDev), Some(0.5));
    }
}
