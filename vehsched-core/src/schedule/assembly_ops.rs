use itertools::Itertools;
use rayon::prelude::*;

use crate::schedule::{
    batch_result, RouteGroup, RouteTrips, ScheduleError, TripHierarchy, TripSpan,
};

/// builds one route group per route of the hierarchy, in route id order.
pub fn assemble_route_groups(hierarchy: TripHierarchy) -> Result<Vec<RouteGroup>, ScheduleError> {
    let (groups, errors): (Vec<RouteGroup>, Vec<ScheduleError>) = hierarchy
        .into_values()
        .collect_vec()
        .into_par_iter()
        .map(assemble_route)
        .collect::<Vec<_>>()
        .into_iter()
        .partition_result();
    batch_result(groups, errors)
}

/// sorts the stop times of each trip, collects the served stops and orders the trips by
/// start time.
pub fn assemble_route(route_trips: RouteTrips) -> Result<RouteGroup, ScheduleError> {
    let mut group = RouteGroup::new(route_trips.route, route_trips.route_int_id);
    for (trip_id, entry) in route_trips.trips.into_iter() {
        group.add_trip(TripSpan::new(&trip_id, entry.stop_times)?);
    }
    group.trips.sort_by_key(|t| t.start_time);
    validate_trip_order(&group)?;
    Ok(group)
}

/// confirms that trips are ordered by non-decreasing start time.
pub fn validate_trip_order(group: &RouteGroup) -> Result<(), ScheduleError> {
    match group
        .trips
        .iter()
        .tuple_windows()
        .find(|(prev, next)| next.start_time < prev.start_time)
    {
        Some((prev, next)) => Err(ScheduleError::OrderingViolation {
            route_id: group.route.id.clone(),
            trip_id: next.trip_id.clone(),
            start_time: next.start_time,
            previous_start_time: prev.start_time,
        }),
        None => Ok(()),
    }
}
