use nvd_cpe_report::prelude::*;

/// Mock FeedRepository for testing that serves a feed from a JSON string
pub struct MockFeedRepository {
    pub json: String,
    pub should_fail: bool,
}

impl MockFeedRepository {
    pub fn new(json: &str) -> Self {
        Self {
            json: json.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            json: String::new(),
            should_fail: true,
        }
    }
}

impl FeedRepository for MockFeedRepository {
    fn load_feed(&self, year: FeedYear) -> Result<RawFeed> {
        if self.should_fail {
            anyhow::bail!("Mock feed load failure for {}", year);
        }
        Ok(serde_json::from_str(&self.json)?)
    }
}
