pub mod cpe_filter;
pub mod cve_record;
pub mod feed_year;
pub mod report_name;

pub use cpe_filter::CpeFilter;
pub use cve_record::{CveRecord, CvssRating, CvssScore, Severity, NOT_APPLICABLE};
pub use feed_year::FeedYear;
pub use report_name::ReportName;
