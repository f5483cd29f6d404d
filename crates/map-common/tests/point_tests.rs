//! Tests for the shared coordinate value types.

use map_common::{
    CoordError, GeoOrigin, GeoPoint, MercatorOrigin, MercatorPoint, PixelCoordinate,
    RobotOffsetPayload, ScaleFactors, METERS_PER_DEGREE_LAT,
};
use test_utils::{assert_approx_eq, fixtures::geo};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_geo_point_negative() {
    let p: GeoPoint = "-33.5,179.9".parse().unwrap();
    assert_eq!(p, GeoPoint::new(-33.5, 179.9));
}

#[test]
fn test_parse_pixel_scientific() {
    let p: PixelCoordinate = "1e3,-2.5e-1".parse().unwrap();
    assert_eq!(p, PixelCoordinate::new(1000.0, -0.25));
}

#[test]
fn test_parse_out_of_range_accepted() {
    let p: GeoPoint = "200,-400".parse().unwrap();
    assert_eq!(p.lat, 200.0);
    assert_eq!(p.lng, -400.0);
}

#[test]
fn test_parse_invalid_format() {
    let result = "1;2".parse::<GeoPoint>();
    assert!(matches!(result, Err(CoordError::InvalidPair(_))));
}

#[test]
fn test_parse_invalid_number() {
    let result = "north,2".parse::<PixelCoordinate>();
    assert!(matches!(result, Err(CoordError::InvalidNumber(ref s)) if s == "north"));
}

#[test]
fn test_parse_empty() {
    assert!("".parse::<GeoPoint>().is_err());
}

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn test_mercator_point_tuple_and_array() {
    let p = MercatorPoint::from((1.0, 2.0));
    let arr: [f64; 2] = p.into();
    let tuple: (f64, f64) = p.into();
    assert_eq!(arr, [1.0, 2.0]);
    assert_eq!(tuple, (1.0, 2.0));
    assert_eq!(MercatorOrigin::from(p), MercatorOrigin::new(1.0, 2.0));
}

#[test]
fn test_geo_origin_from_point() {
    let (lat, lng) = geo::SEATTLE;
    let origin = GeoOrigin::from(GeoPoint::new(lat, lng));
    assert_eq!(origin, GeoOrigin::new(lat, lng));
}

#[test]
fn test_payload_from_points() {
    let payload = RobotOffsetPayload::new(GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0));
    let json = serde_json::to_value(payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"originLat": 1.0, "originLng": 2.0, "robotLat": 3.0, "robotLng": 4.0})
    );
}

#[test]
fn test_payload_accepts_non_finite_text() {
    let payload = RobotOffsetPayload::from_json(
        r#"{"originLat": "NaN", "originLng": 20, "robotLat": 1, "robotLng": "-inf"}"#,
    )
    .unwrap();
    assert!(payload.origin_lat.is_nan());
    assert_eq!(payload.robot_lng, f64::NEG_INFINITY);
}

#[test]
fn test_payload_rejects_null_component() {
    let result = RobotOffsetPayload::from_json(
        r#"{"originLat": null, "originLng": 20, "robotLat": 1, "robotLng": 2}"#,
    );
    assert!(matches!(result, Err(CoordError::InvalidPayload(_))));
}

// ============================================================================
// Scale factors
// ============================================================================

#[test]
fn test_meters_per_degree() {
    assert_eq!(METERS_PER_DEGREE_LAT, 111_300.0);
}

#[test]
fn test_per_axis_factors() {
    let s = ScaleFactors::per_axis(0.001, 0.002);
    assert_eq!(s.y_factor(), 0.001);
    assert_eq!(s.x_factor(), 0.002);
}

#[test]
fn test_ground_resolution_lat_independent_of_origin() {
    let a = ScaleFactors::from_ground_resolution(10.0, 0.0);
    let b = ScaleFactors::from_ground_resolution(10.0, 70.0);
    assert_approx_eq!(a.y_factor(), b.y_factor());
    assert!(b.x_factor() > a.x_factor());
}

#[test]
fn test_scale_factors_deserialize() {
    let s: ScaleFactors =
        serde_json::from_str(r#"{"kind":"per_axis","lat_per_pixel":0.1,"lng_per_pixel":0.2}"#)
            .unwrap();
    assert_eq!(s, ScaleFactors::per_axis(0.1, 0.2));
}
