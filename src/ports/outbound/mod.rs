/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod advisory_feed;
pub mod feed_downloader;
pub mod feed_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use advisory_feed::{RawAdvisory, RawFeed};
pub use feed_downloader::FeedDownloader;
pub use feed_repository::FeedRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
