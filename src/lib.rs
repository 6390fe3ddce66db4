//! nvd-cpe-report - CVE report generation for a single CPE
//!
//! This library filters the advisories of an NVD JSON 1.1 yearly feed down
//! to those affecting one CPE prefix and renders them as a Markdown table
//! with a Mermaid publish-date timeline (or as JSON), following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`cve_report`): Value objects and extraction services
//! - **Application Layer** (`application`): Use case, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nvd_cpe_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let reader = FileSystemFeedReader::new(PathBuf::from("./input"));
//! let downloader = NvdFeedClient::new(DEFAULT_FEED_BASE_URL)?;
//! let feed_repository = OnDemandFeedRepository::new(reader, Some(downloader));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case and execute
//! let use_case = GenerateReportUseCase::new(feed_repository, progress_reporter);
//! let request = ReportRequest::new(FeedYear::new(2020)?, CpeFilter::new("a:microsoft:edge"));
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = CveReportReadModelBuilder::build(&response);
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod cve_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemFeedReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        NvdFeedClient, OnDemandFeedRepository, DEFAULT_FEED_BASE_URL,
    };
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::read_models::{CveReportReadModel, CveReportReadModelBuilder};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::cve_report::domain::{
        CpeFilter, CveRecord, CvssRating, CvssScore, FeedYear, ReportName, Severity,
    };
    pub use crate::cve_report::services::{CpeMatcher, RecordExtractor};
    pub use crate::ports::outbound::{
        FeedDownloader, FeedRepository, OutputPresenter, ProgressReporter, RawAdvisory, RawFeed,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
