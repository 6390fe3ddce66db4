use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// First year NVD publishes a yearly JSON 1.1 feed for
pub const FIRST_FEED_YEAR: u16 = 2002;

/// Upper bound accepted for a feed year
pub const LAST_FEED_YEAR: u16 = 9999;

/// NewType wrapper for the year of an NVD yearly feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedYear(u16);

impl FeedYear {
    pub fn new(year: u16) -> Result<Self> {
        if !(FIRST_FEED_YEAR..=LAST_FEED_YEAR).contains(&year) {
            return Err(ReportError::Validation {
                message: format!(
                    "Year {} is out of range. NVD yearly feeds exist from {} onwards",
                    year, FIRST_FEED_YEAR
                ),
            }
            .into());
        }
        Ok(Self(year))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// File name of the uncompressed yearly feed, e.g. `nvdcve-1.1-2020.json`
    pub fn feed_file_name(&self) -> String {
        format!("nvdcve-1.1-{}.json", self.0)
    }

    /// File name of the published archive, e.g. `nvdcve-1.1-2020.json.zip`
    pub fn archive_file_name(&self) -> String {
        format!("{}.zip", self.feed_file_name())
    }
}

impl FromStr for FeedYear {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let year: u16 = s.trim().parse().map_err(|_| ReportError::Validation {
            message: format!("Invalid year '{}'. Please specify a four-digit year", s),
        })?;
        Self::new(year)
    }
}

impl fmt::Display for FeedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
