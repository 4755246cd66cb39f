//! GeoJSON feature parsing for the Brazilian state outlines.
//!
//! Only the pieces the map needs are modeled: each feature's display name and
//! its polygon rings. Ring positions keep raw lon/lat; projection happens in
//! the UI layer.

pub mod names;

use serde::Deserialize;
use thiserror::Error;

use crate::http_client::{self, FetchError};

/// Size cap for a fetched geometry body.
const MAX_GEOMETRY_BYTES: usize = 32 * 1024 * 1024;

/// Failure while loading or decoding the geometry resource.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Fetching the resource failed.
    #[error("geometry fetch failed: {0}")]
    Fetch(#[from] FetchError),
    /// The resource was not a valid feature collection.
    #[error("geometry parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A GeoJSON-style feature collection.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// One state outline with its display name.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

/// Feature metadata; only the name is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    pub name: String,
}

/// Polygon or multi-polygon geometry. Positions are `[lon, lat, ...]` arrays;
/// trailing components beyond the first two are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
}

impl Feature {
    /// All rings of the feature as `(lon, lat)` sequences, outer and inner
    /// alike. Positions with fewer than two components are dropped.
    pub fn rings(&self) -> Vec<Vec<(f64, f64)>> {
        match &self.geometry {
            Geometry::Polygon { coordinates } => {
                coordinates.iter().map(|ring| convert_ring(ring)).collect()
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(|ring| convert_ring(ring)))
                .collect(),
        }
    }
}

fn convert_ring(ring: &[Vec<f64>]) -> Vec<(f64, f64)> {
    ring.iter()
        .filter_map(|position| match position.as_slice() {
            [lon, lat, ..] => Some((*lon, *lat)),
            _ => None,
        })
        .collect()
}

/// Decode a feature collection from raw JSON bytes.
pub fn parse(bytes: &[u8]) -> Result<FeatureCollection, GeoError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Fetch and decode the geometry resource.
pub fn fetch(url: &str) -> Result<FeatureCollection, GeoError> {
    let bytes = http_client::fetch_bytes(url, MAX_GEOMETRY_BYTES)?;
    parse(&bytes)
}
