//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of the report for formatters.

mod cve_report_read_model;
mod cve_report_read_model_builder;

pub use cve_report_read_model::{CveReportReadModel, CveRowView, TimelineEntryView};
pub use cve_report_read_model_builder::{CveReportReadModelBuilder, TIMELINE_DURATION_DAYS};
