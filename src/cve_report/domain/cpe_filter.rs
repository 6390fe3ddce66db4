use std::fmt;

/// Prefix every CPE 2.3 formatted string starts with
pub const CPE_23_PREFIX: &str = "cpe:2.3:";

/// Position of the vendor component in a colon-delimited CPE 2.3 string
const VENDOR_INDEX: usize = 3;

/// Position of the product component in a colon-delimited CPE 2.3 string
const PRODUCT_INDEX: usize = 4;

/// CpeFilter value object - the normalized platform prefix to match against
///
/// The filter does not need to be a complete CPE: it is compared with
/// `starts_with`, so `a:microsoft:edge` selects every Edge version.
/// Normalization never fails; any string is accepted.
///
/// The string is split exactly once, on construction, so that vendor and
/// product are available to the report title and the file name without
/// re-parsing. Empty components are kept: `a::widget` has an empty vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpeFilter {
    prefix: String,
    part: Option<String>,
    vendor: Option<String>,
    product: Option<String>,
}

impl CpeFilter {
    /// Normalizes the raw filter by prepending `cpe:2.3:` when it is missing
    pub fn new(raw: &str) -> Self {
        let prefix = Self::normalize(raw);
        let component = |index: usize| prefix.split(':').nth(index).map(str::to_string);

        let part = component(2);
        let vendor = component(VENDOR_INDEX);
        let product = component(PRODUCT_INDEX);

        Self {
            prefix,
            part,
            vendor,
            product,
        }
    }

    /// Normalization rule on its own; idempotent
    pub fn normalize(raw: &str) -> String {
        if raw.starts_with(CPE_23_PREFIX) {
            raw.to_string()
        } else {
            format!("{}{}", CPE_23_PREFIX, raw)
        }
    }

    /// Literal, case-sensitive prefix test against a full CPE string
    pub fn matches(&self, cpe: &str) -> bool {
        cpe.starts_with(&self.prefix)
    }

    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// `a` (application), `o` (operating system) or `h` (hardware)
    pub fn part(&self) -> Option<&str> {
        self.part.as_deref()
    }

    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    /// Vendor and product, in that order, skipping whichever is absent
    pub fn vendor_product(&self) -> Vec<&str> {
        [self.vendor(), self.product()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl fmt::Display for CpeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prepends_prefix() {
        assert_eq!(
            CpeFilter::normalize("a:acme:widget"),
            "cpe:2.3:a:acme:widget"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = CpeFilter::normalize("a:acme:widget");
        let twice = CpeFilter::normalize(&once);
        assert_eq!(once, twice);
        assert_eq!(
            CpeFilter::normalize("cpe:2.3:o:linux:linux_kernel"),
            "cpe:2.3:o:linux:linux_kernel"
        );
    }

    #[test]
    fn test_normalize_only_checks_literal_prefix() {
        // A CPE 2.2 URI is not recognized and gets the prefix like any other string
        assert_eq!(
            CpeFilter::normalize("cpe:/a:acme:widget"),
            "cpe:2.3:cpe:/a:acme:widget"
        );
        assert_eq!(CpeFilter::normalize(""), "cpe:2.3:");
    }

    #[test]
    fn test_components() {
        let filter = CpeFilter::new("a:acme:widget:1.0");
        assert_eq!(filter.part(), Some("a"));
        assert_eq!(filter.vendor(), Some("acme"));
        assert_eq!(filter.product(), Some("widget"));
        assert_eq!(filter.vendor_product(), vec!["acme", "widget"]);
    }

    #[test]
    fn test_components_partial_filter() {
        let filter = CpeFilter::new("cpe:2.3:o:linux");
        assert_eq!(filter.vendor(), Some("linux"));
        assert_eq!(filter.product(), None);
        assert_eq!(filter.vendor_product(), vec!["linux"]);

        let filter = CpeFilter::new("a:acme:");
        assert_eq!(filter.product(), Some(""));
    }

    #[test]
    fn test_empty_components_are_kept() {
        let filter = CpeFilter::new("a::widget");
        assert_eq!(filter.vendor(), Some(""));
        assert_eq!(filter.vendor_product(), vec!["", "widget"]);

        let filter = CpeFilter::new("");
        assert_eq!(filter.part(), Some(""));
        assert_eq!(filter.vendor(), None);
        assert!(filter.vendor_product().is_empty());
    }

    #[test]
    fn test_matches_is_prefix_and_case_sensitive() {
        let filter = CpeFilter::new("a:acme:widget");
        assert!(filter.matches("cpe:2.3:a:acme:widget:1.0:*:*:*:*:*:*:*"));
        assert!(filter.matches("cpe:2.3:a:acme:widget_pro:2.0:*:*:*:*:*:*:*"));
        assert!(!filter.matches("cpe:2.3:a:ACME:widget:1.0:*:*:*:*:*:*:*"));
        assert!(!filter.matches("cpe:2.3:a:other:thing:2.0:*:*:*:*:*:*:*"));
        assert!(!filter.matches("cpe:2.3:a:acme"));
    }

    #[test]
    fn test_display() {
        let filter = CpeFilter::new("a:acme:widget");
        assert_eq!(filter.to_string(), "cpe:2.3:a:acme:widget");
    }
}
