use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use chrono::Weekday;
use itertools::Itertools;

use crate::model::{Calendar, Route, ServiceVariant, StopTime, Trip};
use crate::schedule::{CalendarIndex, MalformedCalendarPolicy, PipelineContext, ScheduleError};

/// the routes and trips that survive deduplication.
#[derive(Clone, Debug, Default)]
pub struct DedupResult {
    /// dense integer id of every kept route, assigned in route order starting at 0
    pub route_int_ids: HashMap<String, u32>,
    /// ids of the trips marked useful
    pub useful_trips: HashSet<String>,
}

/// keeps the routes of a recognized transport type and, per route, one service variant
/// per weekday.
///
/// within a route, the first trip serving a weekday claims it for its calendar's date range.
/// later trips serving that weekday are useful only if their date range matches the claim,
/// so that e.g. holiday variants of a term-time timetable are left out. a trip is kept if
/// any of its weekdays made it useful.
pub fn select_useful_trips(
    routes: &[Route],
    trips: &[Trip],
    calendars: &CalendarIndex,
    policy: MalformedCalendarPolicy,
    ctx: &mut PipelineContext,
) -> Result<DedupResult, ScheduleError> {
    let trips_by_route = trips.iter().into_group_map_by(|t| t.route_id.as_str());
    let mut result = DedupResult::default();

    for route in routes.iter() {
        if !route.transport_type.is_recognized() {
            log::debug!(
                "route '{}' has unsupported route type {}, skipping",
                route.id,
                route.transport_type.code()
            );
            continue;
        }
        if result.route_int_ids.contains_key(&route.id) {
            log::warn!("route '{}' appears more than once, skipping", route.id);
            continue;
        }
        let route_int_id = result.route_int_ids.len() as u32;
        result.route_int_ids.insert(route.id.clone(), route_int_id);

        let Some(route_trips) = trips_by_route.get(route.id.as_str()) else {
            continue;
        };
        let mut claims: HashMap<Weekday, ServiceVariant> = HashMap::new();
        for trip in route_trips.iter() {
            let Some(calendar) = usable_calendar(trip, calendars, policy, ctx)? else {
                continue;
            };
            if claim_weekdays(calendar, &mut claims) {
                result.useful_trips.insert(trip.id.clone());
            }
        }
    }

    ctx.summary.routes_total = routes.len();
    ctx.summary.routes_kept = result.route_int_ids.len();
    ctx.summary.trips_total = trips.len();
    ctx.summary.trips_kept = result.useful_trips.len();
    log::info!(
        "kept {}/{} routes and {}/{} trips",
        ctx.summary.routes_kept,
        ctx.summary.routes_total,
        ctx.summary.trips_kept,
        ctx.summary.trips_total
    );
    Ok(result)
}

/// discards every stop time whose trip was not kept.
pub fn retain_useful_stop_times(
    stop_times: Vec<StopTime>,
    useful_trips: &HashSet<String>,
    ctx: &mut PipelineContext,
) -> Vec<StopTime> {
    ctx.summary.stop_times_total = stop_times.len();
    let kept = stop_times
        .into_iter()
        .filter(|st| useful_trips.contains(&st.trip_id))
        .collect_vec();
    ctx.summary.stop_times_kept = kept.len();
    log::info!(
        "kept {}/{} stop times",
        ctx.summary.stop_times_kept,
        ctx.summary.stop_times_total
    );
    kept
}

/// records the claims of one trip's calendar, returning true if any weekday check made
/// the trip useful.
fn claim_weekdays(calendar: &Calendar, claims: &mut HashMap<Weekday, ServiceVariant>) -> bool {
    let variant = calendar.variant();
    let mut useful = false;
    for day in calendar.active_weekdays() {
        match claims.entry(day) {
            Entry::Vacant(entry) => {
                entry.insert(variant);
                useful = true;
            }
            Entry::Occupied(entry) if *entry.get() == variant => useful = true,
            Entry::Occupied(_) => {}
        }
    }
    useful
}

/// finds a calendar that places the trip on at least one weekday, applying the policy
/// when there is none.
fn usable_calendar<'a>(
    trip: &Trip,
    calendars: &'a CalendarIndex,
    policy: MalformedCalendarPolicy,
    ctx: &mut PipelineContext,
) -> Result<Option<&'a Calendar>, ScheduleError> {
    let error = match calendars.get(&trip.service_id) {
        Some(calendar) if calendar.num_active_days() > 0 => return Ok(Some(calendar)),
        Some(_) => ScheduleError::MalformedCalendar {
            service_id: trip.service_id.clone(),
            trip_id: trip.id.clone(),
        },
        None => ScheduleError::MissingCalendar {
            service_id: trip.service_id.clone(),
            trip_id: trip.id.clone(),
        },
    };
    match policy {
        MalformedCalendarPolicy::Fail => Err(error),
        MalformedCalendarPolicy::DropTrip => {
            log::warn!("dropping trip: {error}");
            ctx.summary.trips_dropped_malformed_calendar += 1;
            Ok(None)
        }
    }
}
