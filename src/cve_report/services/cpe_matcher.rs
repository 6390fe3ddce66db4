use crate::cve_report::domain::CpeFilter;

/// Outcome of matching one configuration node against the filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformMatch {
    /// Every CPE of the node, in feed order, matching or not
    pub platforms: Vec<String>,
    /// True when at least one of `platforms` starts with the filter
    pub matches: bool,
}

/// CpeMatcher - decides whether an advisory is relevant for the filter
///
/// Collects all CPE strings it is given and flags the result as soon as
/// one of them has the filter as a literal prefix. No wildcard semantics.
#[derive(Debug, Clone, Copy)]
pub struct CpeMatcher<'a> {
    filter: &'a CpeFilter,
}

impl<'a> CpeMatcher<'a> {
    pub fn new(filter: &'a CpeFilter) -> Self {
        Self { filter }
    }

    pub fn evaluate<I, S>(&self, cpes: I) -> PlatformMatch
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut result = PlatformMatch::default();

        for cpe in cpes {
            let cpe = cpe.into();
            if self.filter.matches(&cpe) {
                result.matches = true;
            }
            result.platforms.push(cpe);
        }

        result
    }
}
