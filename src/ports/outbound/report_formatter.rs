use crate::application::read_models::CveReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the CVE report
///
/// This port abstracts the formatting logic for different output formats
/// (Markdown, JSON).
pub trait ReportFormatter {
    /// Renders the report from the read model
    ///
    /// # Arguments
    /// * `model` - Matched CVE rows and timeline entries, in feed order
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &CveReportReadModel) -> Result<String>;
}
