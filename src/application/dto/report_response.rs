use crate::cve_report::domain::{CpeFilter, CveRecord, FeedYear, ReportName};

/// ReportResponse - Internal response DTO from the report generation use case
///
/// Holds every extracted record, matching or not, in feed order.
/// Formatters work on the read model built from it, which keeps matches only.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub records: Vec<CveRecord>,
    pub filter: CpeFilter,
    pub year: FeedYear,
    pub report_name: ReportName,
}

impl ReportResponse {
    pub fn new(records: Vec<CveRecord>, filter: CpeFilter, year: FeedYear) -> Self {
        let report_name = ReportName::new(&filter, year);
        Self {
            records,
            filter,
            year,
            report_name,
        }
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn matched_count(&self) -> usize {
        self.records.iter().filter(|r| r.matches()).count()
    }

    pub fn matched_records(&self) -> impl Iterator<Item = &CveRecord> {
        self.records.iter().filter(|r| r.matches())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, matches: bool) -> CveRecord {
        CveRecord::new(
            id.to_string(),
            "desc".to_string(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            None,
            vec![],
            vec![],
            matches,
        )
    }

    #[test]
    fn test_counts() {
        let response = ReportResponse::new(
            vec![
                record("CVE-2020-0001", true),
                record("CVE-2020-0002", false),
                record("CVE-2020-0003", true),
            ],
            CpeFilter::new("a:acme:widget"),
            FeedYear::new(2020).unwrap(),
        );
        assert_eq!(response.total_count(), 3);
        assert_eq!(response.matched_count(), 2);
        let ids: Vec<_> = response.matched_records().map(|r| r.identifier()).collect();
        assert_eq!(ids, vec!["CVE-2020-0001", "CVE-2020-0003"]);
        assert_eq!(response.report_name.title(), "acme widget CVE 2020");
    }
}
