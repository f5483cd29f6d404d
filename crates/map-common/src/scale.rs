//! Pixel scale factors.

use serde::{Deserialize, Serialize};

/// Approximate length of one degree of latitude in meters.
///
/// Flat approximation; only meaningful over small areas.
pub const METERS_PER_DEGREE_LAT: f64 = 111_300.0;

/// How many projection units one pixel covers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaleFactors {
    /// Same scale on both axes (meters per pixel for Web Mercator).
    Uniform { pixel_scale: f64 },
    /// Separate degree factors per axis.
    PerAxis {
        lat_per_pixel: f64,
        lng_per_pixel: f64,
    },
}

impl ScaleFactors {
    pub fn uniform(pixel_scale: f64) -> Self {
        ScaleFactors::Uniform { pixel_scale }
    }

    pub fn per_axis(lat_per_pixel: f64, lng_per_pixel: f64) -> Self {
        ScaleFactors::PerAxis {
            lat_per_pixel,
            lng_per_pixel,
        }
    }

    /// Derive per-axis degree factors from a ground resolution.
    ///
    /// Latitude uses [`METERS_PER_DEGREE_LAT`]; longitude shrinks with
    /// `cos(origin_lat)`. Near the poles the longitude factor grows without
    /// bound and is returned unchecked.
    pub fn from_ground_resolution(meters_per_pixel: f64, origin_lat: f64) -> Self {
        let meters_per_degree_lng = METERS_PER_DEGREE_LAT * origin_lat.to_radians().cos();
        ScaleFactors::PerAxis {
            lat_per_pixel: meters_per_pixel / METERS_PER_DEGREE_LAT,
            lng_per_pixel: meters_per_pixel / meters_per_degree_lng,
        }
    }

    /// Scale applied to the latitude (Y) axis.
    pub fn y_factor(&self) -> f64 {
        match *self {
            ScaleFactors::Uniform { pixel_scale } => pixel_scale,
            ScaleFactors::PerAxis { lat_per_pixel, .. } => lat_per_pixel,
        }
    }

    /// Scale applied to the longitude (X) axis.
    pub fn x_factor(&self) -> f64 {
        match *self {
            ScaleFactors::Uniform { pixel_scale } => pixel_scale,
            ScaleFactors::PerAxis { lng_per_pixel, .. } => lng_per_pixel,
        }
    }
}
