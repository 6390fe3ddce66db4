use super::cpe_matcher::{CpeMatcher, PlatformMatch};
use crate::cve_report::domain::{CpeFilter, CveRecord, CvssRating, CvssScore, Severity};
use crate::ports::outbound::advisory_feed::{
    RawAdvisory, RawConfigurations, RawCve, RawImpact, RawReferences,
};
use crate::shared::error::{ReportError, UNKNOWN_IDENTIFIER};
use crate::shared::Result;
use chrono::{NaiveDate, NaiveDateTime};

/// Timestamp layout of `publishedDate` in NVD JSON 1.1 (UTC, minute precision)
pub const PUBLISHED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// Reference tag marking links published by the affected vendor
pub const VENDOR_ADVISORY_TAG: &str = "Vendor Advisory";

/// RecordExtractor - turns raw feed entries into `CveRecord`s
///
/// Every entry yields exactly one record, matching or not. A missing
/// required field aborts the whole pass; there is no per-record recovery
/// and no partial result.
pub struct RecordExtractor {
    filter: CpeFilter,
}

impl RecordExtractor {
    pub fn new(filter: CpeFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &CpeFilter {
        &self.filter
    }

    /// Extracts all advisories in feed order
    pub fn extract_all(&self, advisories: &[RawAdvisory]) -> Result<Vec<CveRecord>> {
        self.extract_all_with_progress(advisories, |_, _| {})
    }

    /// Extracts all advisories, calling `progress(done, total)` after each one
    pub fn extract_all_with_progress<F>(
        &self,
        advisories: &[RawAdvisory],
        mut progress: F,
    ) -> Result<Vec<CveRecord>>
    where
        F: FnMut(usize, usize),
    {
        let total = advisories.len();
        let mut records = Vec::with_capacity(total);

        for (index, advisory) in advisories.iter().enumerate() {
            records.push(self.extract(index, advisory)?);
            progress(index + 1, total);
        }

        Ok(records)
    }

    /// Extracts a single advisory; `index` is its position in `CVE_Items`
    pub fn extract(&self, index: usize, advisory: &RawAdvisory) -> Result<CveRecord> {
        let cve = advisory.cve.as_ref();

        let identifier = cve
            .and_then(|c| c.data_meta.as_ref())
            .and_then(|meta| meta.id.as_deref())
            .ok_or_else(|| {
                malformed(index, UNKNOWN_IDENTIFIER, "cve.CVE_data_meta.ID", "is missing")
            })?;

        let description = Self::extract_description(index, identifier, cve)?;
        let publish_date =
            Self::extract_publish_date(index, identifier, advisory.published_date.as_deref())?;
        let rating = Self::extract_rating(index, identifier, advisory.impact.as_ref())?;
        let vendor_references = Self::extract_vendor_references(
            index,
            identifier,
            cve.and_then(|c| c.references.as_ref()),
        )?;
        let platform_match =
            self.match_first_node(index, identifier, advisory.configurations.as_ref())?;

        Ok(CveRecord::new(
            identifier.to_string(),
            description,
            publish_date,
            rating,
            platform_match.platforms,
            vendor_references,
            platform_match.matches,
        ))
    }

    fn extract_description(
        index: usize,
        identifier: &str,
        cve: Option<&RawCve>,
    ) -> Result<String> {
        const FIELD: &str = "cve.description.description_data";

        let data = &cve
            .and_then(|c| c.description.as_ref())
            .ok_or_else(|| malformed(index, identifier, FIELD, "is missing"))?
            .description_data;

        let first = data
            .first()
            .ok_or_else(|| malformed(index, identifier, FIELD, "is empty"))?;

        first.value.clone().ok_or_else(|| {
            malformed(
                index,
                identifier,
                "cve.description.description_data[0].value",
                "is missing",
            )
        })
    }

    fn extract_publish_date(
        index: usize,
        identifier: &str,
        published: Option<&str>,
    ) -> Result<NaiveDate> {
        let value =
            published.ok_or_else(|| malformed(index, identifier, "publishedDate", "is missing"))?;

        NaiveDateTime::parse_from_str(value, PUBLISHED_DATE_FORMAT)
            .map(|timestamp| timestamp.date())
            .map_err(|e| {
                ReportError::DateParse {
                    identifier: identifier.to_string(),
                    value: value.to_string(),
                    details: e.to_string(),
                }
                .into()
            })
    }

    /// Empty or absent impact means "not applicable". A non-empty impact
    /// block must carry a complete CVSS v3 score/severity pair.
    fn extract_rating(
        index: usize,
        identifier: &str,
        impact: Option<&RawImpact>,
    ) -> Result<Option<CvssRating>> {
        let impact = match impact {
            Some(impact) if !impact.is_empty() => impact,
            _ => return Ok(None),
        };

        let cvss = impact
            .base_metric_v3
            .as_ref()
            .ok_or_else(|| malformed(index, identifier, "impact.baseMetricV3", "is missing"))?
            .cvss_v3
            .as_ref()
            .ok_or_else(|| {
                malformed(index, identifier, "impact.baseMetricV3.cvssV3", "is missing")
            })?;

        const SCORE_FIELD: &str = "impact.baseMetricV3.cvssV3.baseScore";
        const SEVERITY_FIELD: &str = "impact.baseMetricV3.cvssV3.baseSeverity";

        let raw_score = cvss
            .base_score
            .ok_or_else(|| malformed(index, identifier, SCORE_FIELD, "is missing"))?;
        let score = CvssScore::new(raw_score).map_err(|e| {
            malformed(index, identifier, SCORE_FIELD, &format!("is invalid: {}", e))
        })?;

        let label = cvss
            .base_severity
            .as_deref()
            .ok_or_else(|| malformed(index, identifier, SEVERITY_FIELD, "is missing"))?;
        let severity = Severity::from_label(label).ok_or_else(|| {
            malformed(
                index,
                identifier,
                SEVERITY_FIELD,
                &format!("has unknown value '{}'", label),
            )
        })?;

        Ok(Some(CvssRating::new(
            score,
            severity,
            cvss.vector_string.clone(),
        )))
    }

    fn extract_vendor_references(
        index: usize,
        identifier: &str,
        references: Option<&RawReferences>,
    ) -> Result<Vec<String>> {
        let Some(references) = references else {
            return Ok(Vec::new());
        };

        references
            .reference_data
            .iter()
            .filter(|reference| reference.tags.iter().any(|tag| tag == VENDOR_ADVISORY_TAG))
            .map(|reference| {
                reference.url.clone().ok_or_else(|| {
                    malformed(
                        index,
                        identifier,
                        "cve.references.reference_data[].url",
                        "is missing on a vendor advisory reference",
                    )
                })
            })
            .collect()
    }

    /// Only the first configuration node is inspected; later nodes and
    /// nested children are ignored.
    fn match_first_node(
        &self,
        index: usize,
        identifier: &str,
        configurations: Option<&RawConfigurations>,
    ) -> Result<PlatformMatch> {
        let Some(first_node) = configurations.and_then(|c| c.nodes.first()) else {
            return Ok(PlatformMatch::default());
        };

        let cpes = first_node
            .cpe_match
            .iter()
            .map(|cpe_match| {
                cpe_match.cpe23_uri.as_deref().ok_or_else(|| {
                    malformed(
                        index,
                        identifier,
                        "configurations.nodes[0].cpe_match[].cpe23Uri",
                        "is missing",
                    )
                })
            })
            .collect::<Result<Vec<&str>>>()?;

        Ok(CpeMatcher::new(&self.filter).evaluate(cpes))
    }
}

fn malformed(index: usize, identifier: &str, field: &'static str, reason: &str) -> anyhow::Error {
    ReportError::MalformedRecord {
        index,
        identifier: identifier.to_string(),
        field,
        reason: reason.to_string(),
    }
    .into()
}
