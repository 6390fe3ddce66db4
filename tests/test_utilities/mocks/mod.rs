/// Mock implementations for testing
mod mock_feed_downloader;
mod mock_feed_repository;
mod mock_progress_reporter;

pub use mock_feed_downloader::MockFeedDownloader;
pub use mock_feed_repository::MockFeedRepository;
pub use mock_progress_reporter::MockProgressReporter;
