use tracing::{info, warn};

use scene::store::EventSample;

use crate::error::FeedError;
use crate::geojson::parse_feed;

/// The daily summary feed the visualization replays.
pub const USGS_ALL_DAY_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";

/// Single best-effort fetch at startup.
///
/// Any failure is logged and yields an empty set; the globe renders with
/// zero events rather than failing the visualization. No retries.
pub async fn fetch_events(url: &str) -> Vec<EventSample> {
    match try_fetch(url).await {
        Ok(samples) => {
            info!(count = samples.len(), url, "event feed loaded");
            samples
        }
        Err(error) => {
            warn!(%error, url, "event feed unavailable, continuing with zero events");
            Vec::new()
        }
    }
}

async fn try_fetch(url: &str) -> Result<Vec<EventSample>, FeedError> {
    let text = reqwest::get(url).await?.error_for_status()?.text().await?;
    Ok(parse_feed(&text)?)
}
