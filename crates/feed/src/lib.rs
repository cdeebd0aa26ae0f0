//! Best-effort loading of the daily event feed.
//!
//! The engine never waits on this crate: parsing failures skip individual
//! records, transport failures degrade to an empty event set, and the
//! render loop is expected to already be running when results land.

pub mod error;
pub mod fetch;
pub mod geojson;

pub use error::FeedError;
pub use fetch::{fetch_events, USGS_ALL_DAY_URL};
pub use geojson::parse_feed;
