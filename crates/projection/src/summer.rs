//! Robot-relative to global coordinate summation.

use map_common::{GeoPoint, RobotOffsetPayload};
use tracing::trace;

/// Add a robot-relative offset to a global origin, component-wise.
///
/// The result is not wrapped or clamped; a sum past the poles or the
/// antimeridian is returned as computed.
pub fn sum_robot_global_coordinate(payload: &RobotOffsetPayload) -> GeoPoint {
    GeoPoint {
        lat: payload.origin_lat + payload.robot_lat,
        lng: payload.origin_lng + payload.robot_lng,
    }
}

/// Typed front for [`sum_robot_global_coordinate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateSummer;

impl CoordinateSummer {
    pub fn sum(&self, origin: GeoPoint, offset: GeoPoint) -> GeoPoint {
        let result = sum_robot_global_coordinate(&RobotOffsetPayload::new(origin, offset));
        trace!(%origin, %offset, %result, "Summed robot offset");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_payload() {
        let payload = RobotOffsetPayload {
            origin_lat: 10.0,
            origin_lng: 20.0,
            robot_lat: 1.0,
            robot_lng: -2.0,
        };
        assert_eq!(sum_robot_global_coordinate(&payload), GeoPoint::new(11.0, 18.0));
    }

    #[test]
    fn test_summer_swap_is_symmetric() {
        let a = GeoPoint::new(12.5, -40.25);
        let b = GeoPoint::new(-0.75, 3.5);
        assert_eq!(CoordinateSummer.sum(a, b), CoordinateSummer.sum(b, a));
    }
}
