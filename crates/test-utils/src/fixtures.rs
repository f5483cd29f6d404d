//! Common test fixtures for coordinate conversion tests.

/// Web Mercator origins, in meters.
pub mod mercator {
    /// Null Island
    pub const ZERO: (f64, f64) = (0.0, 0.0);

    /// Half of the Web Mercator world width
    pub const MAX_EXTENT: f64 = 20_037_508.342_789_244;

    /// Top-left corner of the Web Mercator square
    pub const WORLD_TOP_LEFT: (f64, f64) = (-MAX_EXTENT, MAX_EXTENT);

    /// Roughly Seattle
    pub const SEATTLE: (f64, f64) = (-13_618_288.8, 6_042_702.1);

    /// Meters per pixel of a 256px tile at zoom 0
    pub const ZOOM0_PIXEL_SCALE: f64 = 156_543.033_928_041;
}

/// Geographic origins as (lat, lng), in degrees.
pub mod geo {
    pub const NULL_ISLAND: (f64, f64) = (0.0, 0.0);

    pub const SEATTLE: (f64, f64) = (45.0, -122.0);

    pub const NEAR_NORTH_POLE: (f64, f64) = (89.9, 10.0);

    pub const NEAR_ANTIMERIDIAN: (f64, f64) = (-33.0, 179.9);
}

/// Per-pixel degree factors as (lat_per_pixel, lng_per_pixel).
pub mod scale {
    /// About 11 m per pixel near the equator
    pub const FINE: (f64, f64) = (0.0001, 0.0001);

    pub const ANISOTROPIC: (f64, f64) = (0.001, 0.002);

    /// Negative latitude factor, for images whose rows run north to south
    pub const NORTH_UP_IMAGE: (f64, f64) = (-0.0001, 0.0001);
}
