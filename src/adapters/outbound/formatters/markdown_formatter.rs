use crate::application::read_models::{CveReportReadModel, CveRowView, TimelineEntryView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the overview section
const TABLE_HEADER: &str =
    "| CVE | Score | Severity | Description | Published | Affected | References |\n";

/// Markdown table separator line (centered columns)
const TABLE_SEPARATOR: &str =
    "| :---: | :---------: | :-------: | :------: | :-----: | :-----:| :----:|\n";

/// Name of the single Gantt section holding every entry
const TIMELINE_SECTION: &str = "CVE Release Dates";

/// MarkdownFormatter adapter for generating the CVE report
///
/// This adapter implements the ReportFormatter port for Markdown format:
/// an overview table followed by a Mermaid Gantt chart of publish dates.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and line breaks for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|")
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
    }

    fn render_header(&self, output: &mut String, title: &str) {
        output.push_str(&format!("\n# {}\n\n", title));
    }

    fn render_overview(&self, output: &mut String, rows: &[CveRowView]) {
        output.push_str("## Overview\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for row in rows {
            self.render_row(output, row);
        }
    }

    fn render_row(&self, output: &mut String, row: &CveRowView) {
        output.push_str(&format!(
            "|{}|{}|{}|{}|{}|{}|{}|\n",
            Self::escape_markdown_table_cell(&row.identifier),
            row.score,
            row.severity,
            Self::escape_markdown_table_cell(&row.description),
            row.published,
            Self::escape_markdown_table_cell(&row.affected_platforms.join(" ")),
            Self::escape_markdown_table_cell(&row.vendor_references.join(" ")),
        ));
    }

    fn render_timeline(&self, output: &mut String, title: &str, entries: &[TimelineEntryView]) {
        output.push_str("\n## Publish Date\n\n");
        output.push_str("```mermaid\n");
        output.push_str("gantt\n\n");
        output.push_str(&format!("title {}\n", title));
        output.push_str("dateFormat YYYY-MM-DD\n");
        output.push_str("axisFormat %Y-%m\n\n");
        output.push_str(&format!("section {}\n", TIMELINE_SECTION));

        for entry in entries {
            output.push_str(&format!(
                " {}  :{}, {}, {}d\n",
                entry.identifier, entry.task_id, entry.start, entry.duration_days
            ));
        }

        output.push_str("```\n");
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &CveReportReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.title);
        self.render_overview(&mut output, &model.rows);
        self.render_timeline(&mut output, &model.title, &model.timeline);

        Ok(output)
    }
}
