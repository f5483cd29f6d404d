//! Point types for the three coordinate spaces.
//!
//! Pixel space has Y growing downward. Web Mercator and geographic space have
//! Y (northing / latitude) growing upward. None of these types enforce a
//! valid range; NaN and infinities are carried through unchanged, and
//! serialize as `"NaN"`, `"inf"` or `"-inf"` (see [`crate::float`]).

use crate::error::{parse_pair, CoordError, CoordResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A position in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelCoordinate {
    #[serde(with = "crate::float")]
    pub x: f64,
    #[serde(with = "crate::float")]
    pub y: f64,
}

impl PixelCoordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl FromStr for PixelCoordinate {
    type Err = CoordError;

    /// Parse `"x,y"`.
    fn from_str(s: &str) -> CoordResult<Self> {
        let (x, y) = parse_pair(s)?;
        Ok(Self { x, y })
    }
}

/// A Web Mercator position in meters.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "MercatorPair", into = "MercatorPair")]
pub struct MercatorPoint {
    #[serde(with = "crate::float")]
    /// Easting in meters
    pub x: f64,
    #[serde(with = "crate::float")]
    /// Northing in meters
    pub y: f64,
}

impl MercatorPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Wire form of [`MercatorPoint`]: a two-element array.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct MercatorPair(
    #[serde(with = "crate::float")] f64,
    #[serde(with = "crate::float")] f64,
);

impl From<MercatorPair> for MercatorPoint {
    fn from(MercatorPair(x, y): MercatorPair) -> Self {
        Self { x, y }
    }
}

impl From<MercatorPoint> for MercatorPair {
    fn from(p: MercatorPoint) -> Self {
        MercatorPair(p.x, p.y)
    }
}

impl From<[f64; 2]> for MercatorPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<MercatorPoint> for [f64; 2] {
    fn from(p: MercatorPoint) -> Self {
        p.to_array()
    }
}

impl From<(f64, f64)> for MercatorPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<MercatorPoint> for (f64, f64) {
    fn from(p: MercatorPoint) -> Self {
        (p.x, p.y)
    }
}

/// A geographic position in degrees.
///
/// Values outside `[-90, 90]` / `[-180, 180]` are representable on purpose;
/// callers own range checks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(with = "crate::float")]
    pub lat: f64,
    #[serde(with = "crate::float")]
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl FromStr for GeoPoint {
    type Err = CoordError;

    /// Parse `"lat,lng"`.
    fn from_str(s: &str) -> CoordResult<Self> {
        let (lat, lng) = parse_pair(s)?;
        Ok(Self { lat, lng })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Origin plus robot-relative offset, both in degrees.
///
/// Field names serialize in camelCase (`originLat`, `robotLng`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotOffsetPayload {
    #[serde(with = "crate::float")]
    pub origin_lat: f64,
    #[serde(with = "crate::float")]
    pub origin_lng: f64,
    #[serde(with = "crate::float")]
    pub robot_lat: f64,
    #[serde(with = "crate::float")]
    pub robot_lng: f64,
}

impl RobotOffsetPayload {
    pub fn new(origin: GeoPoint, robot: GeoPoint) -> Self {
        Self {
            origin_lat: origin.lat,
            origin_lng: origin.lng,
            robot_lat: robot.lat,
            robot_lng: robot.lng,
        }
    }

    /// Parse a JSON payload such as
    /// `{"originLat":10,"originLng":20,"robotLat":1,"robotLng":-2}`.
    pub fn from_json(s: &str) -> CoordResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn origin(&self) -> GeoPoint {
        GeoPoint::new(self.origin_lat, self.origin_lng)
    }

    pub fn robot(&self) -> GeoPoint {
        GeoPoint::new(self.robot_lat, self.robot_lng)
    }
}
