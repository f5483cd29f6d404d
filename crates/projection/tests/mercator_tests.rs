//! Tests for pixel to Web Mercator conversion.

use projection::{pixel_to_web_mercator, MercatorOrigin, PixelCoordinate, PixelToMercatorConverter};
use test_utils::{assert_approx_eq, assert_coords_approx_eq, fixtures::mercator};

// ============================================================================
// Linear transform
// ============================================================================

#[test]
fn test_matches_formula() {
    let cases = [
        (0.0, 0.0, 0.0, 0.0, 1.0),
        (256.0, 128.0, -1000.0, 2000.0, 0.5),
        (-3.5, 7.25, 1e6, -1e6, 38.2),
        (1e5, 1e5, 0.0, 0.0, 1e-3),
    ];

    for (px, py, ox, oy, s) in cases {
        let p = pixel_to_web_mercator(px, py, ox, oy, s);
        assert_coords_approx_eq!((p.x, p.y), (ox + px * s, oy - py * s));
    }
}

#[test]
fn test_origin_pixel_any_scale() {
    let (ox, oy) = mercator::SEATTLE;
    for s in [0.0, 1.0, -2.0, 1e9, mercator::ZOOM0_PIXEL_SCALE] {
        let p = pixel_to_web_mercator(0.0, 0.0, ox, oy, s);
        assert_eq!(p.to_array(), [ox, oy]);
    }
}

#[test]
fn test_moving_down_decreases_northing() {
    let a = pixel_to_web_mercator(0.0, 0.0, 0.0, 0.0, 10.0);
    let b = pixel_to_web_mercator(0.0, 1.0, 0.0, 0.0, 10.0);
    assert!(b.y < a.y);
    assert_eq!(a.x, b.x);
}

#[test]
fn test_zoom0_tile_spans_world() {
    let (ox, oy) = mercator::WORLD_TOP_LEFT;
    let p = pixel_to_web_mercator(256.0, 256.0, ox, oy, mercator::ZOOM0_PIXEL_SCALE);
    assert_approx_eq!(p.x, mercator::MAX_EXTENT, 1e-3);
    assert_approx_eq!(p.y, -mercator::MAX_EXTENT, 1e-3);
}

// ============================================================================
// Non-finite input
// ============================================================================

#[test]
fn test_nan_propagates() {
    let p = pixel_to_web_mercator(f64::NAN, 1.0, 0.0, 0.0, 1.0);
    assert!(p.x.is_nan());
    assert_eq!(p.y, -1.0);
}

#[test]
fn test_infinity_propagates() {
    let p = pixel_to_web_mercator(1.0, 1.0, 0.0, 0.0, f64::INFINITY);
    assert_eq!(p.x, f64::INFINITY);
    assert_eq!(p.y, f64::NEG_INFINITY);
}

// ============================================================================
// Converter
// ============================================================================

#[test]
fn test_converter_row_of_pixels() {
    let (ox, oy) = mercator::ZERO;
    let converter = PixelToMercatorConverter::new(MercatorOrigin::new(ox, oy), 4.0);

    let xs: Vec<f64> = (0..4)
        .map(|i| converter.convert(PixelCoordinate::new(i as f64, 0.0)).x)
        .collect();
    assert_eq!(xs, vec![0.0, 4.0, 8.0, 12.0]);
}

#[test]
fn test_output_serializes_as_pair() {
    let p = pixel_to_web_mercator(1.0, 1.0, 0.0, 0.0, 1.0);
    assert_eq!(serde_json::to_string(&p).unwrap(), "[1.0,-1.0]");
}
