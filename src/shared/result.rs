/// Result alias used across the crate.
///
/// Domain and adapter code returns `anyhow::Error` so that typed
/// [`ReportError`](crate::shared::error::ReportError) values and I/O failures
/// share one propagation path up to `main`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
