//! small feeds shared by the unit tests of the pipeline stages.
use chrono::{NaiveDate, Weekday};
use itertools::Itertools;

use crate::model::{stop_directory, Calendar, Route, Stop, StopDirectory, StopTime, TransportType};
use crate::schedule::{RouteGroup, TripSpan};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("test invariant failed: invalid date")
}

/// a calendar valid for the first half of 2024 on the given weekdays.
pub fn calendar(service_id: &str, days: &[Weekday]) -> Calendar {
    let mut flags = [false; 7];
    for day in days {
        flags[day.num_days_from_monday() as usize] = true;
    }
    Calendar::new(service_id, flags, date(2024, 1, 1), date(2024, 6, 30))
}

/// five stops "0".."4" on a straight north-south line, 1200 m apart.
pub fn line_stops() -> Vec<Stop> {
    (0..5)
        .map(|i| Stop::new(&i.to_string(), 1.0, 1.0 + 1200.0 * i as f64))
        .collect_vec()
}

pub fn line_directory() -> StopDirectory {
    stop_directory(&line_stops())
}

/// stop times visiting `stop_ids` in order, departing the first stop at `start` and
/// arriving at the last stop at `end`, evenly spaced in between.
pub fn stop_times(trip_id: &str, stop_ids: &[&str], start: u32, end: u32) -> Vec<StopTime> {
    let legs = (stop_ids.len().max(2) - 1) as u32;
    stop_ids
        .iter()
        .enumerate()
        .map(|(idx, stop_id)| {
            let time = start + (end - start) * idx as u32 / legs;
            StopTime::new(trip_id, stop_id, idx as u32 + 1, time, time)
        })
        .collect_vec()
}

pub const OUTBOUND: [&str; 5] = ["0", "1", "2", "3", "4"];
pub const INBOUND: [&str; 5] = ["4", "3", "2", "1", "0"];

pub fn trip_span(trip_id: &str, stop_ids: &[&str], start: u32, end: u32) -> TripSpan {
    TripSpan::new(trip_id, stop_times(trip_id, stop_ids, start, end))
        .expect("test invariant failed: empty trip")
}

/// a route group holding the given trips, in the order given.
pub fn route_group(
    route_id: &str,
    transport_type: TransportType,
    trips: Vec<TripSpan>,
) -> RouteGroup {
    let mut group = RouteGroup::new(Route::new(route_id, transport_type), 0);
    for trip in trips {
        group.add_trip(trip);
    }
    group
}
