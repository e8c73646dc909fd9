// src/data_analysis/statistics.rs

use ndarray::{s, Array1, Array3, ArrayView1};
use ndarray_stats::{QuantileExt, SummaryStatisticsExt};

use crate::body_parts::{BodyPart, Element, BODY_PART_COUNT, ELEMENT_COUNT};
use crate::data_analysis::report_matrix::{ReportMatrix, StatSlot};

/// Descriptive statistics of the present readings of one (part, element) pair.
///
/// `variance` uses the unbiased nobs-1 divisor while `std_dev` uses the
/// population divisor nobs, so `std_dev^2 != variance` in general.
/// `skewness` and `kurtosis` (excess) are the biased moment estimators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub nobs: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub variance: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub std_dev: f64,
}

impl DescriptiveStats {
    pub fn slot_value(&self, slot: StatSlot) -> f64 {
        match slot {
            StatSlot::Nobs => self.nobs as f64,
            StatSlot::Min => self.min,
            StatSlot::Max => self.max,
            StatSlot::Mean => self.mean,
            StatSlot::Variance => self.variance,
            StatSlot::Skewness => self.skewness,
            StatSlot::Kurtosis => self.kurtosis,
            StatSlot::StdDev => self.std_dev,
        }
    }
}

/// Describes a series, ignoring NaN (absent) entries.
///
/// Returns `None` when no value is present. Undefined moments (variance of
/// a single reading, skewness/kurtosis of a constant series) are NaN.
pub fn describe(values: ArrayView1<'_, f64>) -> Option<DescriptiveStats> {
    let present: Array1<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    let nobs = present.len();
    if nobs == 0 {
        return None;
    }

    let mean = present.mean()?;
    let variance = if nobs > 1 { present.var(1.0) } else { f64::NAN };
    let skewness = present.skewness().unwrap_or(f64::NAN);
    let kurtosis = present.kurtosis().map(|k| k - 3.0).unwrap_or(f64::NAN);

    Some(DescriptiveStats {
        nobs,
        min: *values.min_skipnan(),
        max: *values.max_skipnan(),
        mean,
        variance,
        skewness,
        kurtosis,
        std_dev: present.std(0.0),
    })
}

/// Returns a copy of `matrix` with every statistic slot filled from the
/// readings in the frame window. Pairs without readings keep absent slots.
pub fn compute_statistics(matrix: &ReportMatrix) -> ReportMatrix {
    let mut analysed = matrix.clone();
    for part in BodyPart::ALL {
        for element in Element::ALL {
            let stats = describe(matrix.frame_values(part, element));
            for slot in StatSlot::ALL {
                let value = stats.map_or(f64::NAN, |st| st.slot_value(slot));
                analysed.set_stat(part, element, slot, value);
            }
        }
    }
    analysed
}

/// Per-frame z-scores `[body part][element][frame]`, NaN where undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct ZTable {
    data: Array3<f64>,
}

impl ZTable {
    pub fn max_frames(&self) -> usize {
        self.data.dim().2
    }

    pub fn scores(&self, part: BodyPart, element: Element) -> ArrayView1<'_, f64> {
        self.data.slice(s![part.index(), element.index(), ..])
    }

    pub fn z_score(&self, part: BodyPart, element: Element, frame: usize) -> Option<f64> {
        self.scores(part, element)
            .get(frame)
            .copied()
            .filter(|z| !z.is_nan())
    }
}

/// z = (value - mean) / std_dev for each frame of an analysed matrix.
///
/// Undefined (NaN) when the reading, the mean or the std-dev is absent, or
/// when the std-dev is zero.
pub fn compute_z_table(analysed: &ReportMatrix) -> ZTable {
    let max_frames = analysed.max_frames();
    let mut data = Array3::from_elem((BODY_PART_COUNT, ELEMENT_COUNT, max_frames), f64::NAN);

    for part in BodyPart::ALL {
        for element in Element::ALL {
            let mean = analysed.stat(part, element, StatSlot::Mean);
            let std_dev = analysed.stat(part, element, StatSlot::StdDev);
            let (mean, std_dev) = match (mean, std_dev) {
                (Some(m), Some(sd)) if sd != 0.0 => (m, sd),
                _ => continue,
            };
            for (frame, &value) in analysed.frame_values(part, element).iter().enumerate() {
                data[[part.index(), element.index(), frame]] = (value - mean) / std_dev;
            }
        }
    }
    ZTable { data }
}

/// Number of frames in which each part has a certainty reading.
pub fn occurrences_across_frames(matrix: &ReportMatrix) -> [usize; BODY_PART_COUNT] {
    let mut occurrences = [0; BODY_PART_COUNT];
    for part in BodyPart::ALL {
        occurrences[part.index()] = matrix
            .frame_values(part, Element::Certainty)
            .iter()
            .filter(|v| !v.is_nan())
            .count();
    }
    occurrences
}

/// Certainty per frame for each part (indexed by part), 0.0 where absent.
pub fn certainty_across_frames(matrix: &ReportMatrix) -> Vec<Vec<f64>> {
    BodyPart::ALL
        .iter()
        .map(|&part| {
            matrix
                .frame_values(part, Element::Certainty)
                .iter()
                .map(|&c| if c.is_nan() { 0.0 } else { c })
                .collect()
        })
        .collect()
}

/// Everything derived from the report matrix of one take.
#[derive(Debug, Clone)]
pub struct TakeAnalysis {
    /// Matrix with statistic slots filled.
    pub matrix: ReportMatrix,
    pub z_table: ZTable,
    pub occurrences: [usize; BODY_PART_COUNT],
}

impl TakeAnalysis {
    pub fn from_matrix(raw: &ReportMatrix) -> Self {
        let matrix = compute_statistics(raw);
        let z_table = compute_z_table(&matrix);
        let occurrences = occurrences_across_frames(&matrix);
        Self {
            matrix,
            z_table,
            occurrences,
        }
    }

    pub fn max_frames(&self) -> usize {
        self.matrix.max_frames()
    }
}


// src/data_analysis/statistics.rs
