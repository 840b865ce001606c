use std::collections::btree_map::Entry;

use itertools::Itertools;
use rayon::prelude::*;

use crate::model::SECONDS_PER_DAY;
use crate::schedule::{
    batch_result, CalendarIndex, PipelineContext, RouteTrips, ScheduleError, TripHierarchy,
    TripStopTimes,
};

/// places every trip on the weekly timeline, creating one independent copy per additional
/// active weekday. returns the number of copies created.
pub fn expand_weekdays(
    hierarchy: &mut TripHierarchy,
    calendars: &CalendarIndex,
    ctx: &mut PipelineContext,
) -> Result<usize, ScheduleError> {
    let (created, errors): (Vec<usize>, Vec<ScheduleError>) = hierarchy
        .par_iter_mut()
        .map(|(_, route_trips)| expand_route(route_trips, calendars))
        .collect::<Vec<_>>()
        .into_iter()
        .partition_result();
    let created: usize = batch_result(created, errors)?.into_iter().sum();

    ctx.summary.trips_created = created;
    ctx.summary.trips_after_expansion = hierarchy.values().map(|r| r.trips.len()).sum();
    log::info!(
        "weekday expansion created {} trips, {} trips in total",
        created,
        ctx.summary.trips_after_expansion
    );
    Ok(created)
}

/// expands every trip of one route and adds the copies to it.
pub fn expand_route(
    route_trips: &mut RouteTrips,
    calendars: &CalendarIndex,
) -> Result<usize, ScheduleError> {
    let mut copies = vec![];
    for template in route_trips.trips.values_mut() {
        copies.extend(expand_trip(template, calendars)?);
    }
    let created = copies.len();
    if created > 0 {
        log::debug!(
            "route '{}': {} trips created by weekday expansion",
            route_trips.route.id,
            created
        );
    }
    for copy in copies.into_iter() {
        match route_trips.trips.entry(copy.trip.id.clone()) {
            Entry::Occupied(entry) => {
                return Err(ScheduleError::DuplicateTrip(entry.key().clone()));
            }
            Entry::Vacant(entry) => {
                entry.insert(copy);
            }
        }
    }
    Ok(created)
}

/// shifts `template` onto its first active weekday and returns one copy for each further
/// active weekday. copies own their stop times and point them at their own trip id.
pub fn expand_trip(
    template: &mut TripStopTimes,
    calendars: &CalendarIndex,
) -> Result<Vec<TripStopTimes>, ScheduleError> {
    let calendar = calendars.get(&template.trip.service_id).ok_or_else(|| {
        ScheduleError::MissingCalendar {
            service_id: template.trip.service_id.clone(),
            trip_id: template.trip.id.clone(),
        }
    })?;
    let active_days = calendar
        .weekday_flags()
        .iter()
        .enumerate()
        .filter(|(_, active)| **active)
        .map(|(day_index, _)| day_index)
        .collect_vec();
    let Some((first_day, other_days)) = active_days.split_first() else {
        return Err(ScheduleError::MalformedCalendar {
            service_id: calendar.service_id.clone(),
            trip_id: template.trip.id.clone(),
        });
    };

    let copies = other_days
        .iter()
        .map(|day_index| {
            let mut copy = template.clone();
            copy.trip.id = weekday_trip_id(&template.trip.id, *day_index);
            for stop_time in copy.stop_times.iter_mut() {
                stop_time.trip_id.clone_from(&copy.trip.id);
                stop_time.shift(day_offset(*day_index));
            }
            copy
        })
        .collect_vec();
    for stop_time in template.stop_times.iter_mut() {
        stop_time.shift(day_offset(*first_day));
    }
    Ok(copies)
}

/// id of the copy of `trip_id` running on weekday `day_index` (Monday = 0).
pub fn weekday_trip_id(trip_id: &str, day_index: usize) -> String {
    format!("{trip_id}_weekday_{day_index}")
}

fn day_offset(day_index: usize) -> u32 {
    SECONDS_PER_DAY * day_index as u32
}
