//! CVE report read model for query operations
//!
//! Rows and timeline entries are already filtered to matching advisories
//! and kept in feed order, so formatters only render.

use chrono::NaiveDate;
use serde::Serialize;

/// Main read model for a CVE report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CveReportReadModel {
    /// Heading, e.g. `acme widget CVE 2020`
    pub title: String,
    pub year: u16,
    /// Normalized CPE prefix
    pub filter: String,
    /// One row per matching advisory
    pub rows: Vec<CveRowView>,
    /// One entry per row, same order
    pub timeline: Vec<TimelineEntryView>,
}

/// View representation of one table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CveRowView {
    pub identifier: String,
    /// One decimal, or `N/A`
    pub score: String,
    /// Upper-case severity, or `N/A`
    pub severity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvss_vector: Option<String>,
    pub description: String,
    pub published: NaiveDate,
    pub affected_platforms: Vec<String>,
    pub vendor_references: Vec<String>,
}

/// View representation of one Gantt task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntryView {
    pub identifier: String,
    /// `cve0`, `cve1`, ... counting matches only
    pub task_id: String,
    pub start: NaiveDate,
    pub duration_days: u32,
}
