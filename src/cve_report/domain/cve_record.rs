use crate::shared::Result;
use chrono::NaiveDate;
use std::fmt;

/// Label rendered for score and severity when an advisory carries no impact data
pub const NOT_APPLICABLE: &str = "N/A";

/// CVSS v3 base score, validated to the 0.0 - 10.0 range
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CvssScore(f64);

impl CvssScore {
    pub fn new(score: f64) -> Result<Self> {
        if !(0.0..=10.0).contains(&score) {
            anyhow::bail!("CVSS score must be between 0.0 and 10.0, got {}", score);
        }
        Ok(Self(score))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for CvssScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// CVSS v3 qualitative severity rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Parses an NVD `baseSeverity` label; unknown labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "NONE" => Some(Severity::None),
            "LOW" => Some(Severity::Low),
            "MEDIUM" => Some(Severity::Medium),
            "HIGH" => Some(Severity::High),
            "CRITICAL" => Some(Severity::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Score and severity read together from the CVSS v3 block
#[derive(Debug, Clone, PartialEq)]
pub struct CvssRating {
    score: CvssScore,
    severity: Severity,
    vector: Option<String>,
}

impl CvssRating {
    pub fn new(score: CvssScore, severity: Severity, vector: Option<String>) -> Self {
        Self {
            score,
            severity,
            vector,
        }
    }

    pub fn score(&self) -> CvssScore {
        self.score
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn vector(&self) -> Option<&str> {
        self.vector.as_deref()
    }
}

/// CveRecord entity - one normalized advisory from the feed
///
/// Created once per raw advisory and never mutated afterwards.
/// `matches` is true exactly when one of `affected_platforms` starts with
/// the filter the record was extracted with.
#[derive(Debug, Clone, PartialEq)]
pub struct CveRecord {
    identifier: String,
    description: String,
    publish_date: NaiveDate,
    rating: Option<CvssRating>,
    affected_platforms: Vec<String>,
    vendor_references: Vec<String>,
    matches: bool,
}

impl CveRecord {
    pub fn new(
        identifier: String,
        description: String,
        publish_date: NaiveDate,
        rating: Option<CvssRating>,
        affected_platforms: Vec<String>,
        vendor_references: Vec<String>,
        matches: bool,
    ) -> Self {
        Self {
            identifier,
            description,
            publish_date,
            rating,
            affected_platforms,
            vendor_references,
            matches,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn publish_date(&self) -> NaiveDate {
        self.publish_date
    }

    /// `None` means the advisory had no impact data ("not applicable")
    pub fn rating(&self) -> Option<&CvssRating> {
        self.rating.as_ref()
    }

    pub fn affected_platforms(&self) -> &[String] {
        &self.affected_platforms
    }

    pub fn vendor_references(&self) -> &[String] {
        &self.vendor_references
    }

    pub fn matches(&self) -> bool {
        self.matches
    }

    /// Score as shown in reports: one decimal, or `N/A`
    pub fn score_label(&self) -> String {
        self.rating
            .as_ref()
            .map_or(NOT_APPLICABLE.to_string(), |r| r.score().to_string())
    }

    /// Severity as shown in reports: upper-case label, or `N/A`
    pub fn severity_label(&self) -> &'static str {
        self.rating
            .as_ref()
            .map_or(NOT_APPLICABLE, |r| r.severity().as_str())
    }
}
