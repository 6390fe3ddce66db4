use crate::cve_report::domain::FeedYear;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FeedDownloader port for fetching a yearly feed from its publisher
pub trait FeedDownloader {
    /// Downloads the feed for `year` and unpacks it into `destination_dir`
    ///
    /// # Returns
    /// Path of the extracted `nvdcve-1.1-{year}.json`
    ///
    /// # Errors
    /// Returns an error if the download fails, the archive is damaged or
    /// the extracted file cannot be written
    fn download(&self, year: FeedYear, destination_dir: &Path) -> Result<PathBuf>;

    /// Location the feed for `year` is fetched from, for progress messages
    fn source_url(&self, year: FeedYear) -> String;
}
