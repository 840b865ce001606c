use clap::ValueEnum;
use geo::{Distance, Euclidean, Haversine, Point};
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Time, Velocity};
use uom::si::length::meter;
use uom::si::time::second;

use crate::model::TransportType;

/// how the deadhead distance between two trips is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// straight-line distance in coordinate units, for feeds already projected to meters.
    #[default]
    Euclidean,
    /// great-circle distance for lon,lat coordinates.
    Haversine,
}

impl DistanceMetric {
    pub fn distance(&self, src: Point<f64>, dst: Point<f64>) -> Length {
        let meters = match self {
            DistanceMetric::Euclidean => Euclidean.distance(src, dst),
            DistanceMetric::Haversine => Haversine.distance(src, dst),
        };
        Length::new::<meter>(meters)
    }
}

/// limits applied when chaining trips onto one vehicle.
#[derive(Clone, Copy, Debug)]
pub struct FeasibilityParams {
    pub max_speed: Velocity,
    pub max_link_distance: Length,
    pub distance_metric: DistanceMetric,
}

/// time and place where a trip starts or ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TripEndpoint {
    pub time: u32,
    pub location: Point<f64>,
}

/// tests if a vehicle that finished a trip at `last_end` can start the trip beginning at
/// `next_start`:
///   - the next trip cannot start before the last one ended
///   - rail-like modes may not move further than the max link distance in between
///   - covering the distance at max speed must fit into the time gap
pub fn is_next_trip(
    last_end: &TripEndpoint,
    next_start: &TripEndpoint,
    transport_type: TransportType,
    params: &FeasibilityParams,
) -> bool {
    if last_end.time > next_start.time {
        return false;
    }

    let distance = params
        .distance_metric
        .distance(last_end.location, next_start.location);

    if transport_type.is_rail_like() && distance > params.max_link_distance {
        return false;
    }

    let travel_time: Time = distance / params.max_speed;
    let gap = Time::new::<second>((next_start.time - last_end.time) as f64);
    travel_time <= gap
}

#[cfg(test)]
mod test {
    use super::*;
    use uom::si::velocity::meter_per_second;

    fn params() -> FeasibilityParams {
        FeasibilityParams {
            max_speed: Velocity::new::<meter_per_second>(20.0),
            max_link_distance: Length::new::<meter>(500.0),
            distance_metric: DistanceMetric::Euclidean,
        }
    }

    fn endpoint(time: u32, x: f64, y: f64) -> TripEndpoint {
        TripEndpoint {
            time,
            location: Point::new(x, y),
        }
    }

    #[test]
    fn test_next_trip_cannot_start_before_last_end() {
        let last = endpoint(400, 0.0, 0.0);
        let next = endpoint(399, 0.0, 0.0);
        assert!(!is_next_trip(&last, &next, TransportType::Bus, &params()));
        let next = endpoint(400, 0.0, 0.0);
        assert!(is_next_trip(&last, &next, TransportType::Bus, &params()));
    }

    #[test]
    fn test_travel_time_must_fit_gap() {
        // 4800 m at 20 m/s takes 240 s
        let last = endpoint(400, 1.0, 4801.0);
        let too_soon = endpoint(500, 1.0, 1.0);
        let in_time = endpoint(640, 1.0, 1.0);
        assert!(!is_next_trip(&last, &too_soon, TransportType::Bus, &params()));
        assert!(is_next_trip(&last, &in_time, TransportType::Bus, &params()));
    }

    #[test]
    fn test_link_distance_only_limits_rail_like_modes() {
        let last = endpoint(0, 0.0, 0.0);
        let far_later = endpoint(3600, 600.0, 0.0);
        assert!(is_next_trip(&last, &far_later, TransportType::Bus, &params()));
        for tt in [TransportType::Tram, TransportType::Metro, TransportType::Rail] {
            assert!(!is_next_trip(&last, &far_later, tt, &params()));
        }
        let near_later = endpoint(3600, 500.0, 0.0);
        assert!(is_next_trip(&last, &near_later, TransportType::Rail, &params()));
    }

    #[test]
    fn test_haversine_distance_in_meters() {
        // one degree of latitude is roughly 111 km
        let d = DistanceMetric::Haversine
            .distance(Point::new(24.9, 60.0), Point::new(24.9, 61.0))
            .get::<meter>();
        assert!((d - 111_195.0).abs() < 500.0, "unexpected distance {d}");
    }
}
