use std::collections::{BTreeMap, HashMap};

use crate::model::{Route, StopTime, Trip};
use crate::schedule::ScheduleError;

/// a trip and its stop times, in feed order until assembly sorts them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripStopTimes {
    pub trip: Trip,
    pub stop_times: Vec<StopTime>,
}

/// the trips of one kept route, keyed by trip id.
#[derive(Clone, Debug)]
pub struct RouteTrips {
    pub route: Route,
    pub route_int_id: u32,
    pub trips: BTreeMap<String, TripStopTimes>,
}

/// kept routes keyed by their dense integer id.
pub type TripHierarchy = BTreeMap<u32, RouteTrips>;

/// groups stop times first by route, then by trip. only trips with at least one stop time
/// and routes with at least one such trip appear.
pub fn build_trip_hierarchy(
    routes: &[Route],
    trips: &[Trip],
    stop_times: Vec<StopTime>,
    route_int_ids: &HashMap<String, u32>,
) -> Result<TripHierarchy, ScheduleError> {
    let routes_by_id: HashMap<&str, &Route> = routes.iter().map(|r| (r.id.as_str(), r)).collect();
    let trips_by_id: HashMap<&str, &Trip> = trips.iter().map(|t| (t.id.as_str(), t)).collect();

    let mut hierarchy = TripHierarchy::new();
    for stop_time in stop_times.into_iter() {
        let trip = trips_by_id.get(stop_time.trip_id.as_str()).ok_or_else(|| {
            ScheduleError::Internal(format!(
                "stop time references unknown trip '{}'",
                stop_time.trip_id
            ))
        })?;
        let (route, route_int_id) = routes_by_id
            .get(trip.route_id.as_str())
            .zip(route_int_ids.get(&trip.route_id))
            .ok_or_else(|| {
                ScheduleError::Internal(format!(
                    "trip '{}' references route '{}' which was not kept",
                    trip.id, trip.route_id
                ))
            })?;

        let route_trips = hierarchy
            .entry(*route_int_id)
            .or_insert_with(|| RouteTrips {
                route: (*route).clone(),
                route_int_id: *route_int_id,
                trips: BTreeMap::new(),
            });
        route_trips
            .trips
            .entry(trip.id.clone())
            .or_insert_with(|| TripStopTimes {
                trip: (*trip).clone(),
                stop_times: vec![],
            })
            .stop_times
            .push(stop_time);
    }
    Ok(hierarchy)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::TransportType;
    use crate::schedule::test_fixtures::stop_times;

    #[test]
    fn test_groups_by_route_then_trip() {
        let routes = vec![
            Route::new("r1", TransportType::Bus),
            Route::new("r2", TransportType::Tram),
        ];
        let trips = vec![
            Trip::new("a", "r1", "wk"),
            Trip::new("b", "r1", "wk"),
            Trip::new("c", "r2", "wk"),
        ];
        let mut all = stop_times("c", &["0", "1"], 0, 60);
        all.extend(stop_times("a", &["0", "1", "2"], 0, 60));
        all.extend(stop_times("b", &["2", "1"], 0, 60));
        let ids = HashMap::from([("r1".to_string(), 0), ("r2".to_string(), 1)]);

        let hierarchy = build_trip_hierarchy(&routes, &trips, all, &ids).expect("should build");
        assert_eq!(hierarchy.len(), 2);
        let r1 = &hierarchy[&0];
        assert_eq!(r1.route.id, "r1");
        assert_eq!(r1.trips.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(r1.trips["a"].stop_times.len(), 3);
        assert_eq!(hierarchy[&1].trips["c"].stop_times.len(), 2);
    }

    #[test]
    fn test_unknown_trip_is_internal_error() {
        let routes = vec![Route::new("r1", TransportType::Bus)];
        let ids = HashMap::from([("r1".to_string(), 0)]);
        let result = build_trip_hierarchy(&routes, &[], stop_times("x", &["0"], 0, 0), &ids);
        assert!(matches!(result, Err(ScheduleError::Internal(_))));
    }
}
