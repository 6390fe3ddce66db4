/// Network adapters for fetching NVD feeds
mod nvd_feed_client;
mod on_demand_feed_repository;

pub use nvd_feed_client::{extract_feed_archive, NvdFeedClient, DEFAULT_FEED_BASE_URL};
pub use on_demand_feed_repository::OnDemandFeedRepository;
