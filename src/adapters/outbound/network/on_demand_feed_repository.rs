use crate::adapters::outbound::filesystem::FileSystemFeedReader;
use crate::cve_report::domain::FeedYear;
use crate::ports::outbound::{FeedDownloader, FeedRepository, RawFeed};
use crate::shared::Result;

/// OnDemandFeedRepository wraps the local feed reader and downloads
/// missing feeds before reading them.
///
/// This adapter implements the decorator pattern over `FileSystemFeedReader`.
/// Without a downloader (offline mode) it behaves exactly like the reader.
pub struct OnDemandFeedRepository<D: FeedDownloader> {
    reader: FileSystemFeedReader,
    downloader: Option<D>,
}

impl<D: FeedDownloader> OnDemandFeedRepository<D> {
    pub fn new(reader: FileSystemFeedReader, downloader: Option<D>) -> Self {
        Self { reader, downloader }
    }

    /// Repository that never touches the network
    pub fn offline(reader: FileSystemFeedReader) -> Self {
        Self::new(reader, None)
    }
}

impl<D: FeedDownloader> FeedRepository for OnDemandFeedRepository<D> {
    fn load_feed(&self, year: FeedYear) -> Result<RawFeed> {
        if self.reader.feed_exists(year) {
            return self.reader.load_feed(year);
        }

        let Some(downloader) = &self.downloader else {
            return self.reader.load_feed(year);
        };

        eprintln!(
            "🌐 {} not found locally, downloading {}...",
            year.feed_file_name(),
            downloader.source_url(year)
        );
        let feed_path = downloader.download(year, self.reader.input_dir())?;
        eprintln!("✅ Saved NVD feed: {}", feed_path.display());

        self.reader.read_feed_file(&feed_path)
    }
}
