//! Coordinate conversions between pixel, Web Mercator and geographic space.
//!
//! Each conversion is a linear transform with no range checks. NaN and
//! infinite inputs produce NaN or infinite outputs rather than errors.

pub mod config;
pub mod mercator;
pub mod summer;
pub mod translate;

pub use config::DiagnosticsConfig;
pub use mercator::{pixel_to_web_mercator, PixelToMercatorConverter};
pub use summer::{sum_robot_global_coordinate, CoordinateSummer};
pub use translate::{
    translate_coordinates, PixelToLatLngTranslator, SINE_PROBE_DIRECTIVE, SINE_PROBE_INPUT,
};

pub use map_common::{
    GeoOrigin, GeoPoint, MercatorOrigin, MercatorPoint, PixelCoordinate, RobotOffsetPayload,
    ScaleFactors,
};
