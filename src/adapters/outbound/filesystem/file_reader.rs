use crate::cve_report::domain::FeedYear;
use crate::ports::outbound::{FeedRepository, RawFeed};
use crate::shared::error::ReportError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemFeedReader adapter for reading yearly feeds from a directory
///
/// This adapter implements the FeedRepository port for feeds that are
/// already present as `{input_dir}/nvdcve-1.1-{year}.json`.
#[derive(Debug, Clone)]
pub struct FileSystemFeedReader {
    input_dir: PathBuf,
}

impl FileSystemFeedReader {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Location the feed for `year` is expected at
    pub fn feed_path(&self, year: FeedYear) -> PathBuf {
        self.input_dir.join(year.feed_file_name())
    }

    /// True when the path exists, regular file or not
    pub fn feed_exists(&self, year: FeedYear) -> bool {
        fs::symlink_metadata(self.feed_path(year)).is_ok()
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path) -> Result<Vec<u8>> {
        validate_regular_file(path, "NVD feed")?;

        let file_size = fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read NVD feed metadata: {}", e))?
            .len();
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read(path).map_err(|e| {
            ReportError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Reads and decodes the feed at an explicit path
    pub fn read_feed_file(&self, path: &Path) -> Result<RawFeed> {
        let bytes = self.safe_read_file(path)?;

        serde_json::from_slice(&bytes).map_err(|e| {
            ReportError::FeedParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl FeedRepository for FileSystemFeedReader {
    fn load_feed(&self, year: FeedYear) -> Result<RawFeed> {
        let feed_path = self.feed_path(year);

        if !self.feed_exists(year) {
            return Err(ReportError::FeedNotFound {
                path: feed_path,
                suggestion: format!(
                    "Place {} in \"{}\", or run without --offline to download it.",
                    year.feed_file_name(),
                    self.input_dir.display()
                ),
            }
            .into());
        }

        self.read_feed_file(&feed_path)
    }
}
