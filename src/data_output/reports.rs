// src/data_output/reports.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use log::info;

use crate::body_parts::{BodyPart, Element, BODY_PART_COUNT};
use crate::config::RunConfig;
use crate::constants::{STATISTICS_REPORT_FILE, Z_TABLE_FILE};
use crate::data_analysis::report_matrix::{ReportMatrix, StatSlot};
use crate::data_analysis::statistics::{TakeAnalysis, ZTable};
use crate::data_output::{format_report_value, part_summary_path};
use crate::error::{PoseLogError, Result};

/// `elem,t0,...,t(N-1),nobs,min,max,mean,variance,skewness,kurtosis,std_dev`
pub fn summary_header(max_frames: usize) -> Vec<String> {
    let mut header = Vec::with_capacity(1 + max_frames + StatSlot::ALL.len());
    header.push("elem".to_string());
    header.extend((0..max_frames).map(|k| format!("t{k}")));
    header.extend(StatSlot::ALL.iter().map(|slot| slot.column_name().to_string()));
    header
}

/// One summary row: element name, frame readings, statistics.
pub fn summary_row(matrix: &ReportMatrix, part: BodyPart, element: Element) -> Vec<String> {
    let row = matrix.row(part, element);
    let mut record = Vec::with_capacity(1 + row.len());
    record.push(element.name().to_string());
    record.extend(row.iter().map(|&v| format_report_value(v)));
    record
}

/// Writes `<Part>.csv` for every body part.
pub fn write_part_summaries(config: &RunConfig, analysis: &TakeAnalysis) -> Result<()> {
    let header = summary_header(analysis.max_frames());
    for part in BodyPart::ALL {
        let path = part_summary_path(config, part);
        let mut writer = WriterBuilder::new().from_path(&path)?;
        writer.write_record(&header)?;
        for element in Element::ALL {
            writer.write_record(summary_row(&analysis.matrix, part, element))?;
        }
        writer.flush().map_err(|e| PoseLogError::io(&path, e))?;
    }
    info!(
        "  Wrote {} per-part summaries to '{}'.",
        BODY_PART_COUNT,
        config.csv_dir().display()
    );
    Ok(())
}

pub fn render_statistics_report(occurrences: &[usize; BODY_PART_COUNT], max_frames: usize) -> String {
    let mut text = format!(
        "BODY_25 human pose model body part,Occurrences across {max_frames} log frames\n"
    );
    for part in BodyPart::ALL {
        text.push_str(&format!("{},{}\n", part.name(), occurrences[part.index()]));
    }
    text
}

pub fn render_z_table(z_table: &ZTable) -> String {
    let mut text = format!(
        "BODY_25 human pose model body part,z-scores across {} log frames\n\n",
        z_table.max_frames()
    );
    for part in BodyPart::ALL {
        for element in Element::ALL {
            let scores: Vec<String> = z_table
                .scores(part, element)
                .iter()
                .map(|&z| format_report_value(z))
                .collect();
            text.push_str(&format!("{}:{},[{}]\n", part.name(), element.name(), scores.join(", ")));
        }
    }
    text
}

fn write_text_file(path: &Path, text: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| PoseLogError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| PoseLogError::io(path, e))
}

/// Writes `Statistics.txt` (occurrences per part).
pub fn write_statistics_report(config: &RunConfig, analysis: &TakeAnalysis) -> Result<()> {
    let path = config.statistics_dir().join(STATISTICS_REPORT_FILE);
    write_text_file(
        &path,
        &render_statistics_report(&analysis.occurrences, analysis.max_frames()),
    )?;
    info!("  Statistics report saved as '{}'.", path.display());
    Ok(())
}

/// Writes `z_table.txt` (per-frame z-scores per part and element).
pub fn write_z_table(config: &RunConfig, analysis: &TakeAnalysis) -> Result<()> {
    let path = config.statistics_dir().join(Z_TABLE_FILE);
    write_text_file(&path, &render_z_table(&analysis.z_table))?;
    info!("  z-table saved as '{}'.", path.display());
    Ok(())
}

pub fn write_all_reports(config: &RunConfig, analysis: &TakeAnalysis) -> Result<()> {
    write_part_summaries(config, analysis)?;
    write_statistics_report(config, analysis)?;
    write_z_table(config, analysis)
}


// src/data_output/reports.rs
