// src/config.rs

use std::path::{Path, PathBuf};

use crate::body_parts::CoordinateFrame;
use crate::constants::{
    CSV_SUBDIR, DEFAULT_FILE_PREFIX, DEFAULT_MAX_FRAMES, MAX_FRAMES_LIMIT, PLOTS_SUBDIR,
    STATISTICS_SUBDIR, STAT_SLOT_COUNT,
};
use crate::error::{PoseLogError, Result};

/// Order in which eligible log files are assigned to frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileOrdering {
    /// Lexicographic by file name. Log names embed their timestamp, so this
    /// is chronological within a take.
    #[default]
    FileName,
    /// Whatever order the directory listing yields (platform dependent).
    DirectoryListing,
}

/// Settings for one take run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory holding the log files of the take. Output sub-directories
    /// are created inside it.
    pub take_dir: PathBuf,
    /// A file belongs to the take when its name contains this string.
    pub file_prefix: String,
    /// Maximum number of log files (frames) analysed.
    pub max_frames: usize,
    pub file_ordering: FileOrdering,
    pub coordinate_frame: CoordinateFrame,
}

impl RunConfig {
    pub fn new(take_dir: impl Into<PathBuf>) -> Self {
        Self {
            take_dir: take_dir.into(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            max_frames: DEFAULT_MAX_FRAMES,
            file_ordering: FileOrdering::default(),
            coordinate_frame: CoordinateFrame::default(),
        }
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    pub fn with_file_ordering(mut self, ordering: FileOrdering) -> Self {
        self.file_ordering = ordering;
        self
    }

    pub fn with_coordinate_frame(mut self, frame: CoordinateFrame) -> Self {
        self.coordinate_frame = frame;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_frames == 0 {
            return Err(PoseLogError::Config(
                "max_frames must be at least 1".to_string(),
            ));
        }
        let overflows = self.max_frames.checked_add(STAT_SLOT_COUNT).is_none();
        if overflows || self.max_frames > MAX_FRAMES_LIMIT {
            return Err(PoseLogError::Config(format!(
                "max_frames must be at most {MAX_FRAMES_LIMIT}, got {}",
                self.max_frames
            )));
        }
        if self.file_prefix.is_empty() {
            return Err(PoseLogError::Config(
                "file_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn csv_dir(&self) -> PathBuf {
        self.take_dir.join(CSV_SUBDIR)
    }

    pub fn plots_dir(&self) -> PathBuf {
        self.take_dir.join(PLOTS_SUBDIR)
    }

    pub fn statistics_dir(&self) -> PathBuf {
        self.take_dir.join(STATISTICS_SUBDIR)
    }

    pub fn take_dir(&self) -> &Path {
        &self.take_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("/tmp/take9");
        assert_eq!(config.max_frames, DEFAULT_MAX_FRAMES);
        assert_eq!(config.file_prefix, DEFAULT_FILE_PREFIX);
        assert_eq!(config.file_ordering, FileOrdering::FileName);
        assert_eq!(config.csv_dir(), PathBuf::from("/tmp/take9/csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_frames_rejected() {
        let config = RunConfig::new("take").with_max_frames(0);
        assert!(matches!(config.validate(), Err(PoseLogError::Config(_))));
    }

    #[test]
    fn test_oversized_frames_rejected() {
        let overflowing = RunConfig::new("take").with_max_frames(usize::MAX);
        assert!(matches!(overflowing.validate(), Err(PoseLogError::Config(_))));

        let huge = RunConfig::new("take").with_max_frames(MAX_FRAMES_LIMIT + 1);
        assert!(matches!(huge.validate(), Err(PoseLogError::Config(_))));

        let at_limit = RunConfig::new("take").with_max_frames(MAX_FRAMES_LIMIT);
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let config = RunConfig::new("take").with_file_prefix("");
        assert!(matches!(config.validate(), Err(PoseLogError::Config(_))));
    }
}
