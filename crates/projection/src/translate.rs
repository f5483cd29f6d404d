//! Pixel to lat/lng translation with per-axis degree factors.
//!
//! A flat approximation: displacement is linear in pixel offset, which holds
//! only over areas small enough to ignore curvature. One degree of latitude
//! is roughly [`map_common::METERS_PER_DEGREE_LAT`] meters; callers derive
//! the factors from their ground resolution, for example with
//! [`ScaleFactors::from_ground_resolution`].
//!
//! Latitude follows pixel Y and longitude follows pixel X, with no sign
//! inversion. Use a negative `lat_per_pixel` for north-up images.

use crate::config::DiagnosticsConfig;
use map_common::{GeoOrigin, GeoPoint, PixelCoordinate, ScaleFactors};
use tracing::debug;

/// Input of the sine probe diagnostic.
pub const SINE_PROBE_INPUT: f64 = 1.3004538;

/// Filter directive that lets the sine probe event through at any
/// default log level.
pub const SINE_PROBE_DIRECTIVE: &str = "projection::translate=debug";

/// Translate a pixel position into degrees.
///
/// `lat = origin_lat + y * lat_per_pixel`, `lng = origin_lng + x * lng_per_pixel`.
pub fn translate_coordinates(
    x: f64,
    y: f64,
    origin_lat: f64,
    origin_lng: f64,
    lat_per_pixel: f64,
    lng_per_pixel: f64,
) -> GeoPoint {
    GeoPoint {
        lat: origin_lat + y * lat_per_pixel,
        lng: origin_lng + x * lng_per_pixel,
    }
}

/// Value reported by the sine probe.
pub fn sine_probe() -> f64 {
    SINE_PROBE_INPUT.sin()
}

/// A fixed origin and scale for translating many pixels of one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelToLatLngTranslator {
    pub origin: GeoOrigin,
    pub scale: ScaleFactors,
    pub diagnostics: DiagnosticsConfig,
}

impl PixelToLatLngTranslator {
    pub fn new(origin: GeoOrigin, lat_per_pixel: f64, lng_per_pixel: f64) -> Self {
        Self::with_scale(origin, ScaleFactors::per_axis(lat_per_pixel, lng_per_pixel))
    }

    pub fn with_scale(origin: GeoOrigin, scale: ScaleFactors) -> Self {
        Self {
            origin,
            scale,
            diagnostics: DiagnosticsConfig::default(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn translate(&self, pixel: PixelCoordinate) -> GeoPoint {
        if self.diagnostics.sine_probe {
            debug!(input = SINE_PROBE_INPUT, value = sine_probe(), "Math.sin(input) :>>");
        }

        translate_coordinates(
            pixel.x,
            pixel.y,
            self.origin.origin_lat,
            self.origin.origin_lng,
            self.scale.y_factor(),
            self.scale.x_factor(),
        )
    }
}
