//! Reference points that pixel (0, 0) maps to.

use crate::point::{GeoPoint, MercatorPoint};
use serde::{Deserialize, Serialize};

/// Web Mercator position of pixel (0, 0), in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MercatorOrigin {
    #[serde(with = "crate::float")]
    pub origin_x: f64,
    #[serde(with = "crate::float")]
    pub origin_y: f64,
}

impl MercatorOrigin {
    pub fn new(origin_x: f64, origin_y: f64) -> Self {
        Self { origin_x, origin_y }
    }
}

impl From<MercatorPoint> for MercatorOrigin {
    fn from(p: MercatorPoint) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Geographic position of pixel (0, 0), in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoOrigin {
    #[serde(with = "crate::float")]
    pub origin_lat: f64,
    #[serde(with = "crate::float")]
    pub origin_lng: f64,
}

impl GeoOrigin {
    pub fn new(origin_lat: f64, origin_lng: f64) -> Self {
        Self {
            origin_lat,
            origin_lng,
        }
    }
}

impl From<GeoPoint> for GeoOrigin {
    fn from(p: GeoPoint) -> Self {
        Self::new(p.lat, p.lng)
    }
}
