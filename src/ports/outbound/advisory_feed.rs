//! Schema of the NVD JSON 1.1 yearly feed
//!
//! Only the parts the report needs are modelled. Fields the extractor
//! requires are still declared optional here: a missing key must surface as
//! one `MalformedRecord` error naming the advisory and the field, not as a
//! generic deserialization error for the whole feed.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Top-level feed document (`nvdcve-1.1-{year}.json`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeed {
    #[serde(rename = "CVE_data_type", default)]
    pub data_type: Option<String>,
    #[serde(rename = "CVE_data_format", default)]
    pub data_format: Option<String>,
    #[serde(rename = "CVE_data_version", default)]
    pub data_version: Option<String>,
    #[serde(rename = "CVE_data_numberOfCVEs", default)]
    pub number_of_cves: Option<String>,
    #[serde(rename = "CVE_data_timestamp", default)]
    pub timestamp: Option<String>,
    #[serde(rename = "CVE_Items")]
    pub items: Vec<RawAdvisory>,
}

/// One entry of `CVE_Items`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAdvisory {
    #[serde(default)]
    pub cve: Option<RawCve>,
    #[serde(default)]
    pub configurations: Option<RawConfigurations>,
    #[serde(default)]
    pub impact: Option<RawImpact>,
    #[serde(rename = "publishedDate", default)]
    pub published_date: Option<String>,
    #[serde(rename = "lastModifiedDate", default)]
    pub last_modified_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCve {
    #[serde(rename = "CVE_data_meta", default)]
    pub data_meta: Option<RawDataMeta>,
    #[serde(default)]
    pub description: Option<RawDescription>,
    #[serde(default)]
    pub references: Option<RawReferences>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDataMeta {
    #[serde(rename = "ID", default)]
    pub id: Option<String>,
    #[serde(rename = "ASSIGNER", default)]
    pub assigner: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDescription {
    #[serde(default)]
    pub description_data: Vec<RawLangString>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLangString {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReferences {
    #[serde(default)]
    pub reference_data: Vec<RawReference>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReference {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub refsource: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigurations {
    #[serde(rename = "CVE_data_version", default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
}

/// Configuration node; `AND` nodes nest further nodes in `children`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNode {
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub children: Vec<RawNode>,
    #[serde(default)]
    pub cpe_match: Vec<RawCpeMatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCpeMatch {
    #[serde(default)]
    pub vulnerable: Option<bool>,
    #[serde(rename = "cpe23Uri", default)]
    pub cpe23_uri: Option<String>,
}

/// Impact block; `{}` for advisories that have not been analysed yet
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImpact {
    #[serde(rename = "baseMetricV3", default)]
    pub base_metric_v3: Option<RawBaseMetricV3>,
    /// `baseMetricV2` and anything else; only inspected for emptiness
    #[serde(flatten)]
    pub other_metrics: HashMap<String, Value>,
}

impl RawImpact {
    pub fn is_empty(&self) -> bool {
        self.base_metric_v3.is_none() && self.other_metrics.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBaseMetricV3 {
    #[serde(rename = "cvssV3", default)]
    pub cvss_v3: Option<RawCvssV3>,
    #[serde(rename = "exploitabilityScore", default)]
    pub exploitability_score: Option<f64>,
    #[serde(rename = "impactScore", default)]
    pub impact_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCvssV3 {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(rename = "vectorString", default)]
    pub vector_string: Option<String>,
    #[serde(rename = "baseScore", default)]
    pub base_score: Option<f64>,
    #[serde(rename = "baseSeverity", default)]
    pub base_severity: Option<String>,
}
