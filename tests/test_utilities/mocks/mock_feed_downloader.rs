use nvd_cpe_report::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock FeedDownloader that "downloads" a fixed feed into the destination
#[derive(Clone)]
pub struct MockFeedDownloader {
    pub content: String,
    pub calls: Arc<AtomicUsize>,
}

impl MockFeedDownloader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FeedDownloader for MockFeedDownloader {
    fn download(&self, year: FeedYear, destination_dir: &Path) -> Result<PathBuf> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::fs::create_dir_all(destination_dir)?;
        let path = destination_dir.join(year.feed_file_name());
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }

    fn source_url(&self, year: FeedYear) -> String {
        format!("mock://feeds/{}", year.archive_file_name())
    }
}
