mod cpe_matcher;
mod record_extractor;

pub use cpe_matcher::{CpeMatcher, PlatformMatch};
pub use record_extractor::{RecordExtractor, PUBLISHED_DATE_FORMAT, VENDOR_ADVISORY_TAG};
