//! Common coordinate types shared across the map-coords workspace.

pub mod error;
pub mod float;
pub mod origin;
pub mod point;
pub mod scale;

pub use error::{CoordError, CoordResult};
pub use origin::{GeoOrigin, MercatorOrigin};
pub use point::{GeoPoint, MercatorPoint, PixelCoordinate, RobotOffsetPayload};
pub use scale::{ScaleFactors, METERS_PER_DEGREE_LAT};
