use std::collections::VecDeque;

use itertools::Itertools;

use crate::model::StopDirectory;
use crate::schedule::{
    is_next_trip, FeasibilityParams, PipelineContext, RouteGroup, ScheduleError, TripEndpoint,
    TripSpan, VehicleSchedule,
};

/// assigns the trips of every route to vehicles. vehicle ids are unique across all routes.
/// returns the number of vehicles created.
pub fn populate_vehicles(
    groups: &mut [RouteGroup],
    stops: &StopDirectory,
    params: &FeasibilityParams,
    ctx: &mut PipelineContext,
) -> Result<usize, ScheduleError> {
    let mut num_vehicles = 0;
    let mut num_trips = 0;
    for group in groups.iter_mut() {
        num_vehicles += populate_route(group, stops, params, ctx)?;
        num_trips += group.trips.len();
    }
    ctx.summary.vehicles = num_vehicles;
    log::info!("{num_vehicles} vehicles created for {num_trips} trips");
    Ok(num_vehicles)
}

/// greedily chains the route's start-time ordered trips into vehicles.
///
/// each vehicle is seeded with the earliest unassigned trip and then makes one pass over the
/// remaining trips, taking every trip it can reach in time from the end of its last one.
/// skipped trips stay in the pool for the next vehicle.
pub fn populate_route(
    group: &mut RouteGroup,
    stops: &StopDirectory,
    params: &FeasibilityParams,
    ctx: &mut PipelineContext,
) -> Result<usize, ScheduleError> {
    let transport_type = group.route.transport_type;
    let endpoints = group
        .trips
        .iter()
        .map(|trip| trip_endpoints(trip, stops))
        .collect::<Result<Vec<_>, _>>()?;

    let mut vehicles = vec![];
    let mut pool: VecDeque<usize> = (0..group.trips.len()).collect();
    while let Some(seed) = pool.pop_front() {
        let mut chain = vec![seed];
        let mut last_end = endpoints[seed].1;
        for candidate in std::mem::take(&mut pool).into_iter() {
            let (candidate_start, candidate_end) = endpoints[candidate];
            if is_next_trip(&last_end, &candidate_start, transport_type, params) {
                chain.push(candidate);
                last_end = candidate_end;
            } else {
                pool.push_back(candidate);
            }
        }
        vehicles.push(VehicleSchedule {
            vehicle_id: ctx.next_vehicle_id(),
            trips: chain
                .into_iter()
                .map(|idx| group.trips[idx].stop_visits())
                .collect_vec(),
        });
    }

    let created = vehicles.len();
    group.vehicles = vehicles;
    Ok(created)
}

/// where and when the trip starts and ends.
fn trip_endpoints(
    trip: &TripSpan,
    stops: &StopDirectory,
) -> Result<(TripEndpoint, TripEndpoint), ScheduleError> {
    let location = |stop_id: Option<&str>| match stop_id {
        Some(stop_id) => stops
            .get(stop_id)
            .copied()
            .ok_or_else(|| ScheduleError::MissingStopLocation(stop_id.to_string())),
        None => Err(ScheduleError::EmptyTrip(trip.trip_id.clone())),
    };
    let start = TripEndpoint {
        time: trip.start_time,
        location: location(trip.first_stop_id())?,
    };
    let end = TripEndpoint {
        time: trip.end_time,
        location: location(trip.last_stop_id())?,
    };
    Ok((start, end))
}
