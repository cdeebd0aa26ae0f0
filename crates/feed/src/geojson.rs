//! Serde model of the GeoJSON summary feed subset the engine consumes.
//!
//! Matches the USGS earthquake summary shape: a `FeatureCollection` whose
//! features carry `[lon, lat, depth]` coordinates and `mag`/`place`/`time`
//! properties. Individual features with missing or non-finite fields are
//! skipped; only a malformed document is an error.

use serde::Deserialize;

use scene::store::EventSample;

use crate::error::FeedError;

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Properties>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// `[lon, lat, depth]`; depth may be absent.
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Properties {
    pub mag: Option<f64>,
    pub place: Option<String>,
    /// Epoch milliseconds.
    pub time: Option<i64>,
}

/// Parse a feed document into event samples, dropping unusable features.
pub fn parse_feed(text: &str) -> Result<Vec<EventSample>, FeedError> {
    let collection: FeatureCollection = serde_json::from_str(text)?;
    Ok(collection
        .features
        .into_iter()
        .filter_map(sample_from_feature)
        .collect())
}

fn sample_from_feature(feature: Feature) -> Option<EventSample> {
    let geometry = feature.geometry?;
    let properties = feature.properties?;

    let (lon, lat) = match geometry.coordinates.as_slice() {
        [lon, lat, ..] => (*lon, *lat),
        _ => return None,
    };
    let depth = geometry.coordinates.get(2).copied().unwrap_or(0.0);
    if !lon.is_finite() || !lat.is_finite() {
        return None;
    }

    let magnitude = properties.mag.filter(|m| m.is_finite())?;
    let timestamp_ms = properties.time?;

    Some(EventSample {
        lon_deg: lon,
        lat_deg: lat,
        depth_km: depth,
        magnitude,
        timestamp_ms,
        place: properties.place.unwrap_or_default(),
    })
}
