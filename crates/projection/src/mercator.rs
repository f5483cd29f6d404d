//! Pixel to Web Mercator conversion.
//!
//! Pixel rows grow downward while Mercator northing grows upward, so only
//! the Y axis is inverted.

use map_common::{MercatorOrigin, MercatorPoint, PixelCoordinate};
use serde::{Deserialize, Serialize};

/// Convert a pixel position to Web Mercator meters.
///
/// # Arguments
/// * `pixel_x`, `pixel_y` - Pixel position, Y growing downward
/// * `origin_x`, `origin_y` - Mercator position of pixel (0, 0)
/// * `pixel_scale` - Meters per pixel
pub fn pixel_to_web_mercator(
    pixel_x: f64,
    pixel_y: f64,
    origin_x: f64,
    origin_y: f64,
    pixel_scale: f64,
) -> MercatorPoint {
    MercatorPoint {
        x: origin_x + pixel_x * pixel_scale,
        y: origin_y - pixel_y * pixel_scale,
    }
}

/// A fixed origin and scale for converting many pixels of one image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelToMercatorConverter {
    pub origin: MercatorOrigin,
    /// Meters per pixel
    pub pixel_scale: f64,
}

impl PixelToMercatorConverter {
    pub fn new(origin: MercatorOrigin, pixel_scale: f64) -> Self {
        Self {
            origin,
            pixel_scale,
        }
    }

    pub fn convert(&self, pixel: PixelCoordinate) -> MercatorPoint {
        pixel_to_web_mercator(
            pixel.x,
            pixel.y,
            self.origin.origin_x,
            self.origin.origin_y,
            self.pixel_scale,
        )
    }
}
