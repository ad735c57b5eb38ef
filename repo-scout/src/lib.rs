#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod cache;
pub mod config;
pub mod counts;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod listing;
pub mod orchestrator;
pub mod paginate;
pub mod record;
pub mod shape;
pub mod topics;

pub use cache::{CacheKey, Clock, ExpiryPolicy, ListingCache, MemoryCache, NoCache, SystemClock};
pub use config::{ConfigError, ScraperConfig};
pub use counts::parse_count;
pub use export::{
    export_csv, export_file_name, export_to_dir, filter_min_stars, ExportError, RecordTable,
};
pub use extract::{extract, Extraction};
pub use fetch::{FetchError, HtmlPage, PageFetcher, ReqwestFetcher};
pub use listing::{Listing, ListingStatus};
pub use orchestrator::{topic_page_url, Scraper, ScraperError};
pub use paginate::{stop_on_empty_page, user_page_url, PageSummary, Paginator, StopPredicate};
pub use record::{RepositoryRecord, NO_DESCRIPTION};
pub use shape::ListingShape;
pub use topics::{is_known_topic, TOPICS};
