use crate::cve_report::domain::{CpeFilter, FeedYear};

/// ReportRequest - Internal request DTO for the report generation use case
///
/// Year and filter travel together as one explicit value; nothing
/// downstream reads them from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Feed year to load
    pub year: FeedYear,
    /// Normalized CPE prefix advisories are matched against
    pub filter: CpeFilter,
}

impl ReportRequest {
    pub fn new(year: FeedYear, filter: CpeFilter) -> Self {
        Self { year, filter }
    }
}
