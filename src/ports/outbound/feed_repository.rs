use super::advisory_feed::RawFeed;
use crate::cve_report::domain::FeedYear;
use crate::shared::Result;

/// FeedRepository port for loading the yearly NVD feed
///
/// This port abstracts where the feed comes from (a local file, a file
/// downloaded on demand, or an in-memory fixture in tests).
pub trait FeedRepository {
    /// Loads and decodes the feed for the given year
    ///
    /// # Arguments
    /// * `year` - Feed year, selects `nvdcve-1.1-{year}.json`
    ///
    /// # Returns
    /// The decoded feed document with all `CVE_Items` in feed order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The feed does not exist and cannot be obtained
    /// - The file cannot be read or is not valid NVD JSON 1.1
    fn load_feed(&self, year: FeedYear) -> Result<RawFeed>;
}
