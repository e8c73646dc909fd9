// tests/take_pipeline_test.rs

use std::fs;
use std::path::Path;

use pose_log_render::body_parts::{BodyPart, Element, BODY_PART_NAMES};
use pose_log_render::config::{FileOrdering, RunConfig};
use pose_log_render::data_analysis::report_matrix::StatSlot;
use pose_log_render::data_input::take_scanner::{list_eligible_files, scan_take};
use pose_log_render::error::PoseLogError;
use pose_log_render::process_take;

/// Writes one log file with a header line and one keypoint line per part.
fn write_frame(dir: &Path, file_name: &str, lines: &[String]) {
    let mut text = String::from("Body 0 keypoints:\n");
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    fs::write(dir.join(file_name), text).unwrap();
}

fn full_body_lines(offset: f64) -> Vec<String> {
    BODY_PART_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let x = i as f64 + offset;
            format!("kp {name}: x={x:.2} y=1.50 z=2.25 c=0.75")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_file_fills_one_frame_per_part() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(dir.path(), "raw 000.txt", &full_body_lines(0.5));
        let config = RunConfig::new(dir.path());

        let scan = scan_take(&config, |_, _| Ok(())).unwrap();
        assert_eq!(scan.frames_processed, 1);
        for part in BodyPart::ALL {
            assert_eq!(scan.matrix.present_values(part, Element::Certainty), vec![0.75]);
            assert_eq!(scan.matrix.frame_value(part, Element::Y, 1), None);
        }
        assert_eq!(
            scan.matrix.frame_value(BodyPart::Neck, Element::X, 0),
            Some(1.5)
        );
    }

    #[test]
    fn test_scan_stops_at_max_frames() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..4 {
            write_frame(dir.path(), &format!("raw {i:03}.txt"), &full_body_lines(i as f64));
        }
        let config = RunConfig::new(dir.path()).with_max_frames(2);

        let mut frames_seen = Vec::new();
        let scan = scan_take(&config, |frame, _| {
            frames_seen.push(frame);
            Ok(())
        })
        .unwrap();
        assert_eq!(scan.frames_processed, 2);
        assert_eq!(scan.files.len(), 2);
        assert!(frames_seen.iter().all(|&f| f < 2));
        assert_eq!(
            scan.matrix.present_values(BodyPart::Nose, Element::X),
            vec![0.0, 1.0]
        );
    }

    #[test]
    fn test_files_are_ordered_by_name_and_filtered_by_prefix() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(dir.path(), "raw b.txt", &[]);
        write_frame(dir.path(), "raw a.txt", &[]);
        write_frame(dir.path(), "notes.txt", &[]);
        fs::create_dir(dir.path().join("raw dir")).unwrap();

        let files = list_eligible_files(&RunConfig::new(dir.path())).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["raw a.txt", "raw b.txt"]);
    }

    #[test]
    fn test_directory_listing_keeps_the_same_files() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(dir.path(), "raw b.txt", &[]);
        write_frame(dir.path(), "raw a.txt", &[]);
        write_frame(dir.path(), "raw c.txt", &[]);
        write_frame(dir.path(), "notes.txt", &[]);

        let config =
            RunConfig::new(dir.path()).with_file_ordering(FileOrdering::DirectoryListing);
        let mut names: Vec<String> = list_eligible_files(&config)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["raw a.txt", "raw b.txt", "raw c.txt"]);

        let scan = scan_take(&config.with_max_frames(3), |_, _| Ok(())).unwrap();
        assert_eq!(scan.frames_processed, 3);
    }

    #[test]
    fn test_unknown_body_part_aborts() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(
            dir.path(),
            "raw 000.txt",
            &["kp Background: x=1.00 y=1.00".to_string()],
        );
        let err = scan_take(&RunConfig::new(dir.path()), |_, _| Ok(())).unwrap_err();
        match err {
            PoseLogError::UnknownBodyPart { name, line, .. } => {
                assert_eq!(name, "Background");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_line_aborts() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(dir.path(), "raw 000.txt", &["garbage without marker".to_string()]);
        let err = scan_take(&RunConfig::new(dir.path()), |_, _| Ok(())).unwrap_err();
        assert!(matches!(err, PoseLogError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_process_take_writes_reports() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(dir.path(), "raw 000.txt", &full_body_lines(0.0));
        write_frame(dir.path(), "raw 001.txt", &full_body_lines(1.0));
        let config = RunConfig::new(dir.path()).with_max_frames(3);

        let (scan, analysis) = process_take(&config).unwrap();
        assert_eq!(scan.frames_processed, 2);
        assert_eq!(analysis.occurrences, [2; 25]);
        assert_eq!(
            analysis.matrix.stat(BodyPart::Nose, Element::X, StatSlot::Mean),
            Some(0.5)
        );

        let coords = fs::read_to_string(config.csv_dir().join("NoseCoordsAndProb.csv")).unwrap();
        assert_eq!(coords, "0.00,1.50,2.25,0.75\n1.00,1.50,2.25,0.75\n");

        let summary = fs::read_to_string(config.csv_dir().join("Nose.csv")).unwrap();
        let mut lines = summary.lines();
        assert_eq!(
            lines.next(),
            Some("elem,t0,t1,t2,nobs,min,max,mean,variance,skewness,kurtosis,std_dev")
        );
        assert_eq!(lines.next().map(|l| l.starts_with("x,0.0,1.0,nan,2.0,0.0,1.0,0.5,0.5,")), Some(true));

        let stats = fs::read_to_string(config.statistics_dir().join("Statistics.txt")).unwrap();
        assert!(stats.starts_with("BODY_25 human pose model body part,Occurrences across 3 log frames\n"));
        assert!(stats.contains("\nNose,2\n"));

        let z_table = fs::read_to_string(config.statistics_dir().join("z_table.txt")).unwrap();
        assert!(z_table.contains("Nose:x,[-1.0, 1.0, nan]\n"));
        assert!(z_table.contains("Nose:y,[nan, nan, nan]\n"));
    }

    #[test]
    fn test_rerun_truncates_coordinate_logs() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(dir.path(), "raw 000.txt", &full_body_lines(0.0));
        let config = RunConfig::new(dir.path()).with_max_frames(1);

        process_take(&config).unwrap();
        process_take(&config).unwrap();
        let coords = fs::read_to_string(config.csv_dir().join("NeckCoordsAndProb.csv")).unwrap();
        assert_eq!(coords.lines().count(), 1);
    }

    #[test]
    fn test_oversized_max_frames_is_rejected_before_scanning() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(dir.path(), "raw 000.txt", &full_body_lines(0.0));
        let config = RunConfig::new(dir.path()).with_max_frames(usize::MAX);
        let err = scan_take(&config, |_, _| Ok(())).unwrap_err();
        assert!(matches!(err, PoseLogError::Config(_)));
    }

    #[test]
    fn test_zero_max_frames_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path()).with_max_frames(0);
        assert!(matches!(process_take(&config), Err(PoseLogError::Config(_))));
    }
}

// tests/take_pipeline_test.rs
