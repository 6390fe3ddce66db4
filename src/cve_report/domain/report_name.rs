use super::{CpeFilter, FeedYear};
use crate::shared::security::validate_file_name_component;
use crate::shared::Result;

/// ReportName value object - report title and file name derived from the filter
///
/// Both come from the vendor and product components of the normalized
/// filter: `cpe:2.3:a:acme:widget` in 2020 gives the title
/// `acme widget CVE 2020` and the file stem `acme_widget_2020`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportName {
    components: Vec<String>,
    year: FeedYear,
}

impl ReportName {
    pub fn new(filter: &CpeFilter, year: FeedYear) -> Self {
        Self {
            components: filter
                .vendor_product()
                .into_iter()
                .map(str::to_string)
                .collect(),
            year,
        }
    }

    /// `{vendor} {product}`, empty when the filter names neither
    pub fn label(&self) -> String {
        self.components.join(" ")
    }

    /// Heading used by every output format
    pub fn title(&self) -> String {
        format!("{} CVE {}", self.label(), self.year)
    }

    /// `{vendor}_{product}_{year}`, with whichever components the filter has
    ///
    /// # Errors
    /// Fails when a component could escape the output directory
    pub fn file_stem(&self) -> Result<String> {
        for component in &self.components {
            validate_file_name_component(component)?;
        }

        Ok(format!("{}_{}", self.components.join("_"), self.year))
    }

    pub fn file_name(&self, extension: &str) -> Result<String> {
        Ok(format!("{}.{}", self.file_stem()?, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year() -> FeedYear {
        FeedYear::new(2020).unwrap()
    }

    #[test]
    fn test_title_and_file_name() {
        let name = ReportName::new(&CpeFilter::new("a:acme:widget"), year());
        assert_eq!(name.label(), "acme widget");
        assert_eq!(name.title(), "acme widget CVE 2020");
        assert_eq!(name.file_stem().unwrap(), "acme_widget_2020");
        assert_eq!(name.file_name("md").unwrap(), "acme_widget_2020.md");
    }

    #[test]
    fn test_version_components_are_ignored() {
        let name = ReportName::new(
            &CpeFilter::new("cpe:2.3:o:linux:linux_kernel:5.4"),
            year(),
        );
        assert_eq!(name.file_name("json").unwrap(), "linux_linux_kernel_2020.json");
    }

    #[test]
    fn test_vendor_only_filter() {
        let name = ReportName::new(&CpeFilter::new("a:acme"), year());
        assert_eq!(name.title(), "acme CVE 2020");
        assert_eq!(name.file_stem().unwrap(), "acme_2020");
    }

    #[test]
    fn test_filter_without_vendor() {
        let name = ReportName::new(&CpeFilter::new("a"), year());
        assert_eq!(name.title(), " CVE 2020");
        assert_eq!(name.file_stem().unwrap(), "_2020");
    }

    #[test]
    fn test_empty_vendor_is_kept_in_file_name() {
        let name = ReportName::new(&CpeFilter::new("a::widget"), year());
        assert_eq!(name.title(), " widget CVE 2020");
        assert_eq!(name.file_stem().unwrap(), "_widget_2020");
    }

    #[test]
    fn test_traversal_in_filter_is_rejected_for_file_names_only() {
        let name = ReportName::new(&CpeFilter::new("a:..:widget"), year());
        assert_eq!(name.title(), ".. widget CVE 2020");
        assert!(name.file_name("md").is_err());
    }
}
