use crate::application::dto::{ReportRequest, ReportResponse};
use crate::cve_report::services::RecordExtractor;
use crate::ports::outbound::{FeedRepository, ProgressReporter, RawFeed};
use crate::shared::Result;

/// GenerateReportUseCase - Core use case for CVE report generation
///
/// Loads the yearly feed, extracts one record per advisory and flags the
/// ones relevant for the requested CPE prefix. Rendering and presenting
/// happen afterwards, so a failing advisory never leaves a partial report.
///
/// # Type Parameters
/// * `FR` - FeedRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<FR, PR> {
    feed_repository: FR,
    progress_reporter: PR,
}

impl<FR, PR> GenerateReportUseCase<FR, PR>
where
    FR: FeedRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(feed_repository: FR, progress_reporter: PR) -> Self {
        Self {
            feed_repository,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Returns
    /// ReportResponse holding every extracted record in feed order
    ///
    /// # Errors
    /// Returns an error if the feed cannot be loaded or any advisory is
    /// malformed. No records are returned in that case.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let feed = self.load_feed(&request)?;

        let extractor = RecordExtractor::new(request.filter.clone());
        self.progress_reporter
            .report(&format!("🔍 Matching advisories against {}...", extractor.filter()));

        let records = extractor
            .extract_all_with_progress(&feed.items, |current, total| {
                self.progress_reporter
                    .report_progress(current, total, Some("Extracting advisories"))
            })
            .inspect_err(|_| {
                self.progress_reporter
                    .report_error("❌ Extraction aborted: the feed contains a malformed advisory")
            })?;

        let response = ReportResponse::new(records, request.filter, request.year);
        self.report_summary(&response);

        Ok(response)
    }

    fn load_feed(&self, request: &ReportRequest) -> Result<RawFeed> {
        self.progress_reporter
            .report(&format!("📖 Loading NVD feed for {}...", request.year));

        let feed = self.feed_repository.load_feed(request.year)?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} advisory(ies)", feed.items.len()));

        Ok(feed)
    }

    fn report_summary(&self, response: &ReportResponse) {
        let matched = response.matched_count();
        if matched == 0 {
            self.progress_reporter.report_completion(&format!(
                "⚠️  No advisories match {}. The report will be empty",
                response.filter
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ {} of {} advisories match {}",
                matched,
                response.total_count(),
                response.filter
            ));
        }
    }
}
