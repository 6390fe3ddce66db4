use crate::application::read_models::CveReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable CVE reports
///
/// Serializes the read model as-is: title, year, filter, matched rows
/// (including the CVSS vector when present) and timeline entries.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &CveReportReadModel) -> Result<String> {
        let mut output = serde_json::to_string_pretty(model)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report to JSON: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{CveRowView, TimelineEntryView};
    use chrono::NaiveDate;
    use serde_json::Value;

    #[test]
    fn test_format_json_structure() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
        let model = CveReportReadModel {
            title: "acme widget CVE 2020".to_string(),
            year: 2020,
            filter: "cpe:2.3:a:acme:widget".to_string(),
            rows: vec![CveRowView {
                identifier: "CVE-2020-0001".to_string(),
                score: "9.8".to_string(),
                severity: "CRITICAL".to_string(),
                cvss_vector: Some("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H".to_string()),
                description: "Widget overflow".to_string(),
                published: date,
                affected_platforms: vec!["cpe:2.3:a:acme:widget:1.0:*:*:*:*:*:*:*".to_string()],
                vendor_references: vec!["https://acme.example/sa-1".to_string()],
            }],
            timeline: vec![TimelineEntryView {
                identifier: "CVE-2020-0001".to_string(),
                task_id: "cve0".to_string(),
                start: date,
                duration_days: 5,
            }],
        };

        let output = JsonFormatter::new().format(&model).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["title"], "acme widget CVE 2020");
        assert_eq!(json["year"], 2020);
        assert!(json.get("total_advisories").is_none());
        assert_eq!(json["rows"][0]["identifier"], "CVE-2020-0001");
        assert_eq!(json["rows"][0]["published"], "2020-01-10");
        assert_eq!(
            json["rows"][0]["cvss_vector"],
            "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H"
        );
        assert_eq!(json["timeline"][0]["task_id"], "cve0");
        assert_eq!(json["timeline"][0]["duration_days"], 5);
    }

    #[test]
    fn test_format_json_omits_missing_vector() {
        let model = CveReportReadModel {
            title: " CVE 2020".to_string(),
            year: 2020,
            filter: "cpe:2.3:a".to_string(),
            rows: vec![CveRowView {
                identifier: "CVE-2020-0002".to_string(),
                score: "N/A".to_string(),
                severity: "N/A".to_string(),
                cvss_vector: None,
                description: "desc".to_string(),
                published: NaiveDate::from_ymd_opt(2020, 2, 1).unwrap(),
                affected_platforms: vec![],
                vendor_references: vec![],
            }],
            timeline: vec![],
        };

        let output = JsonFormatter::new().format(&model).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert!(json["rows"][0].get("cvss_vector").is_none());
        assert_eq!(json["rows"][0]["score"], "N/A");
    }
}
