use std::ops::Range;

use itertools::Itertools;

use crate::model::StopDirectory;
use crate::schedule::{Boundary, ClipSummary, CoordinateOffset, RouteSchedule, StopVisit};

/// removes schedule content outside of the boundary. routes, vehicles and trips left empty
/// are removed. stops without a known location count as outside.
pub fn clip_to_boundary(
    routes: &mut Vec<RouteSchedule>,
    stops: &StopDirectory,
    boundary: &Boundary,
) -> ClipSummary {
    let mut summary = ClipSummary::default();
    for route in routes.iter_mut() {
        clip_route(route, stops, boundary, &mut summary);
    }
    let before = routes.len();
    routes.retain(|r| !r.vehicles.is_empty());
    summary.routes_removed = before - routes.len();
    log::info!(
        "clipping removed {} stop visits, {} trips, {} vehicles and {} routes, truncated {} trips",
        summary.stop_visits_removed,
        summary.trips_removed,
        summary.vehicles_removed,
        summary.routes_removed,
        summary.trips_truncated
    );
    summary
}

/// clips one route. a route whose stops are all inside is left as is. otherwise each trip
/// keeps its longest run of inside stops when that run covers at least half of the trip,
/// and is dropped if not. stops removed from a trip are also removed from the route's stops.
pub fn clip_route(
    route: &mut RouteSchedule,
    stops: &StopDirectory,
    boundary: &Boundary,
    summary: &mut ClipSummary,
) {
    let inside = |stop_id: &str| stops.get(stop_id).is_some_and(|p| boundary.contains(p));
    if route.stops.iter().all(|s| inside(s)) {
        return;
    }

    let mut removed_visits: Vec<StopVisit> = vec![];
    for vehicle in route.vehicles.iter_mut() {
        for mut trip in std::mem::take(&mut vehicle.trips).into_iter() {
            let mask = trip.iter().map(|v| inside(&v.stop_id)).collect_vec();
            match longest_run(&mask).filter(|run| 2 * run.len() >= trip.len()) {
                Some(run) => {
                    let tail = trip.split_off(run.end);
                    let head = trip.drain(..run.start).collect_vec();
                    if !head.is_empty() || !tail.is_empty() {
                        summary.trips_truncated += 1;
                    }
                    removed_visits.extend(head);
                    removed_visits.extend(tail);
                    vehicle.trips.push(trip);
                }
                None => {
                    summary.trips_removed += 1;
                    removed_visits.extend(trip);
                }
            }
        }
    }

    summary.stop_visits_removed += removed_visits.len();
    for visit in removed_visits.iter() {
        if route.stops.remove(&visit.stop_id) {
            summary.route_stops_removed += 1;
        }
    }
    let before = route.vehicles.len();
    route.vehicles.retain(|v| !v.trips.is_empty());
    summary.vehicles_removed += before - route.vehicles.len();
}

/// index range of the longest run of `true` values. the first one wins a tie.
pub fn longest_run(mask: &[bool]) -> Option<Range<usize>> {
    let mut best: Option<Range<usize>> = None;
    let mut start = None;
    for (idx, inside) in mask.iter().chain(std::iter::once(&false)).enumerate() {
        match (inside, start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                if best.as_ref().is_none_or(|b| idx - s > b.len()) {
                    best = Some(s..idx);
                }
                start = None;
            }
            _ => {}
        }
    }
    best
}

/// drops stops outside of the boundary from the directory. returns the number removed.
pub fn clip_stop_directory(stops: &mut StopDirectory, boundary: &Boundary) -> usize {
    let before = stops.len();
    stops.retain(|_, p| boundary.contains(p));
    before - stops.len()
}

pub fn translate_stop_directory(stops: &mut StopDirectory, offset: &CoordinateOffset) {
    for point in stops.values_mut() {
        *point = offset.apply(point);
    }
}
