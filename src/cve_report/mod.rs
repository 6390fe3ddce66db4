//! Domain layer for CVE report generation
//!
//! Value objects describing a filter, a feed year and a normalized CVE
//! record, plus the services that turn raw advisories into those records.
pub mod domain;
pub mod services;
