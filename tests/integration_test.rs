/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use nvd_cpe_report::prelude::*;

const FIXTURE_DIR: &str = "tests/fixtures/input";

fn fixture_feed() -> String {
    std::fs::read_to_string(PathBuf::from(FIXTURE_DIR).join("nvdcve-1.1-2020.json")).unwrap()
}

fn request(cpe: &str) -> ReportRequest {
    ReportRequest::new(FeedYear::new(2020).unwrap(), CpeFilter::new(cpe))
}

fn render_markdown(response: &ReportResponse) -> String {
    let model = CveReportReadModelBuilder::build(response);
    MarkdownFormatter::new().format(&model).unwrap()
}

#[test]
fn test_two_advisories_one_match() {
    let feed = r#"{ "CVE_Items": [
        {
            "cve": {
                "CVE_data_meta": { "ID": "CVE-2020-0001" },
                "references": { "reference_data": [] },
                "description": { "description_data": [ { "lang": "en", "value": "A" } ] }
            },
            "configurations": { "nodes": [ { "operator": "OR", "cpe_match": [
                { "vulnerable": true, "cpe23Uri": "cpe:2.3:a:acme:widget:1.0:*:*:*:*:*:*:*" }
            ] } ] },
            "impact": {},
            "publishedDate": "2020-01-10T00:00Z"
        },
        {
            "cve": {
                "CVE_data_meta": { "ID": "CVE-2020-0002" },
                "references": { "reference_data": [] },
                "description": { "description_data": [ { "lang": "en", "value": "B" } ] }
            },
            "configurations": { "nodes": [ { "operator": "OR", "cpe_match": [
                { "vulnerable": true, "cpe23Uri": "cpe:2.3:a:other:thing:2.0:*:*:*:*:*:*:*" }
            ] } ] },
            "impact": {},
            "publishedDate": "2020-02-01T00:00Z"
        }
    ] }"#;

    let use_case = GenerateReportUseCase::new(
        MockFeedRepository::new(feed),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(request("a:acme:widget")).unwrap();
    let markdown = render_markdown(&response);

    assert!(markdown.contains("\n# acme widget CVE 2020\n"));
    assert!(markdown.contains("|CVE-2020-0001|N/A|N/A|A|2020-01-10|"));
    assert!(markdown.contains(" CVE-2020-0001  :cve0, 2020-01-10, 5d\n"));
    assert!(!markdown.contains("CVE-2020-0002"));
    assert_eq!(markdown.matches(":cve").count(), 1);
}

#[test]
fn test_fixture_feed_rows_and_timeline() {
    let use_case = GenerateReportUseCase::new(
        MockFeedRepository::new(&fixture_feed()),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(request("a:acme:widget")).unwrap();

    assert_eq!(response.total_count(), 5);
    assert_eq!(response.matched_count(), 2);

    let markdown = render_markdown(&response);
    assert!(markdown.contains(
        "|CVE-2020-0001|9.8|CRITICAL|Out-of-bounds write in the Acme Widget parser allows remote code execution.|2020-01-10|cpe:2.3:a:acme:widget:1.0:*:*:*:*:*:*:*|https://acme.example/security/sa-2020-01|\n"
    ));
    assert!(markdown.contains(
        "|CVE-2020-0003|N/A|N/A|Widget Pro mishandles the a\\|b separator in export templates.|2020-03-15|cpe:2.3:o:debian:debian_linux:10.0:*:*:*:*:*:*:* cpe:2.3:a:acme:widget_pro:2.0:*:*:*:*:*:*:*|https://acme.example/security/sa-2020-03 https://acme.example/security/sa-2020-04|\n"
    ));
    assert!(markdown.contains(" CVE-2020-0001  :cve0, 2020-01-10, 5d\n"));
    assert!(markdown.contains(" CVE-2020-0003  :cve1, 2020-03-15, 5d\n"));

    // Empty node list and matches outside the first node are never reported
    assert!(!markdown.contains("CVE-2020-0004"));
    assert!(!markdown.contains("CVE-2020-0005"));
}

#[test]
fn test_rows_follow_feed_order_not_dates() {
    let use_case = GenerateReportUseCase::new(
        MockFeedRepository::new(&fixture_feed()),
        MockProgressReporter::new(),
    );
    // Every advisory with a platform under "cpe:2.3:" matches the bare prefix
    let response = use_case.execute(request("")).unwrap();
    let model = CveReportReadModelBuilder::build(&response);

    let ids: Vec<&str> = model.rows.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(
        ids,
        vec!["CVE-2020-0001", "CVE-2020-0002", "CVE-2020-0003", "CVE-2020-0005"]
    );
    let task_ids: Vec<&str> = model.timeline.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(task_ids, vec!["cve0", "cve1", "cve2", "cve3"]);
    assert_eq!(model.title, " CVE 2020");
}

#[test]
fn test_no_matches_produces_empty_sections() {
    let use_case = GenerateReportUseCase::new(
        MockFeedRepository::new(&fixture_feed()),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(request("a:nobody:nothing")).unwrap();
    let markdown = render_markdown(&response);

    assert!(markdown.contains("# nobody nothing CVE 2020"));
    assert!(!markdown.contains("|CVE-"));
    assert!(markdown.contains("section CVE Release Dates\n```\n"));
}

#[test]
fn test_missing_identifier_fails_whole_run() {
    let malformed =
        std::fs::read_to_string("tests/fixtures/malformed/nvdcve-1.1-2020.json").unwrap();
    let progress_reporter = MockProgressReporter::new();
    let use_case =
        GenerateReportUseCase::new(MockFeedRepository::new(&malformed), progress_reporter.clone());

    let err = use_case.execute(request("a:acme:widget")).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("CVE_Items[1]"));
    assert!(message.contains("cve.CVE_data_meta.ID"));
    assert!(progress_reporter
        .get_messages()
        .iter()
        .all(|m| !m.starts_with("Completed:")));
}

#[test]
fn test_feed_failure_is_propagated() {
    let use_case = GenerateReportUseCase::new(
        MockFeedRepository::with_failure(),
        MockProgressReporter::new(),
    );

    let err = use_case.execute(request("a:acme:widget")).unwrap_err();
    assert!(err.to_string().contains("Mock feed load failure for 2020"));
}

#[test]
fn test_progress_messages() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = GenerateReportUseCase::new(
        MockFeedRepository::new(&fixture_feed()),
        progress_reporter.clone(),
    );
    use_case.execute(request("a:acme:widget")).unwrap();

    let messages = progress_reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Loaded 5 advisory(ies)")));
    assert!(messages
        .iter()
        .any(|m| m == "Progress: 5/5 - Extracting advisories"));
    assert!(messages
        .iter()
        .any(|m| m == "Completed: ✅ 2 of 5 advisories match cpe:2.3:a:acme:widget"));
    assert!(progress_reporter.message_count() >= 8);
}

#[test]
fn test_on_demand_repository_downloads_missing_feed() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("input");
    let downloader = MockFeedDownloader::new(&fixture_feed());

    let repository = OnDemandFeedRepository::new(
        FileSystemFeedReader::new(input_dir.clone()),
        Some(downloader.clone()),
    );
    let use_case = GenerateReportUseCase::new(repository, MockProgressReporter::new());

    let response = use_case.execute(request("a:acme:widget")).unwrap();
    assert_eq!(response.matched_count(), 2);
    assert_eq!(downloader.call_count(), 1);
    assert!(input_dir.join("nvdcve-1.1-2020.json").is_file());

    // Second run reuses the downloaded file
    let repository = OnDemandFeedRepository::new(
        FileSystemFeedReader::new(input_dir),
        Some(downloader.clone()),
    );
    let use_case = GenerateReportUseCase::new(repository, MockProgressReporter::new());
    use_case.execute(request("a:acme:widget")).unwrap();
    assert_eq!(downloader.call_count(), 1);
}

#[test]
fn test_json_report_from_fixture() {
    let use_case = GenerateReportUseCase::new(
        FileSystemFeedReader::new(PathBuf::from(FIXTURE_DIR)),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(request("a:acme:widget")).unwrap();
    let model = CveReportReadModelBuilder::build(&response);
    let output = JsonFormatter::new().format(&model).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    // Non-matching advisories are neither listed nor counted
    assert!(!output.contains("CVE-2020-0002"));
    assert!(!output.contains("CVE-2020-0005"));
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 5);
    assert!(keys.iter().all(|k| ["title", "year", "filter", "rows", "timeline"].contains(k)));

    assert_eq!(json["title"], "acme widget CVE 2020");
    assert_eq!(json["filter"], "cpe:2.3:a:acme:widget");
    assert_eq!(json["rows"].as_array().unwrap().len(), 2);
    assert_eq!(json["rows"][0]["severity"], "CRITICAL");
    assert_eq!(json["timeline"][1]["start"], "2020-03-15");
}
