//! Builder for constructing CveReportReadModel from domain objects

use super::cve_report_read_model::{CveReportReadModel, CveRowView, TimelineEntryView};
use crate::application::dto::ReportResponse;
use crate::cve_report::domain::CveRecord;

/// Fixed bar length of every timeline entry
pub const TIMELINE_DURATION_DAYS: u32 = 5;

/// Builder for constructing CveReportReadModel from a use case response
pub struct CveReportReadModelBuilder;

impl CveReportReadModelBuilder {
    /// Builds the read model, dropping non-matching records
    ///
    /// Task ids are numbered over matches only, from 0, without gaps.
    pub fn build(response: &ReportResponse) -> CveReportReadModel {
        let matched: Vec<&CveRecord> = response.matched_records().collect();

        let rows = matched.iter().map(|record| Self::build_row(record)).collect();
        let timeline = matched
            .iter()
            .enumerate()
            .map(|(n, record)| Self::build_timeline_entry(n, record))
            .collect();

        CveReportReadModel {
            title: response.report_name.title(),
            year: response.year.value(),
            filter: response.filter.to_string(),
            rows,
            timeline,
        }
    }

    fn build_row(record: &CveRecord) -> CveRowView {
        CveRowView {
            identifier: record.identifier().to_string(),
            score: record.score_label(),
            severity: record.severity_label().to_string(),
            cvss_vector: record
                .rating()
                .and_then(|rating| rating.vector())
                .map(str::to_string),
            description: record.description().to_string(),
            published: record.publish_date(),
            affected_platforms: record.affected_platforms().to_vec(),
            vendor_references: record.vendor_references().to_vec(),
        }
    }

    fn build_timeline_entry(n: usize, record: &CveRecord) -> TimelineEntryView {
        TimelineEntryView {
            identifier: record.identifier().to_string(),
            task_id: format!("cve{}", n),
            start: record.publish_date(),
            duration_days: TIMELINE_DURATION_DAYS,
        }
    }
}
