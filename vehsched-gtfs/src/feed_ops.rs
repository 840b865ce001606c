//! conversion of a [`Gtfs`] archive into [`Feed`] records.
use std::sync::Arc;

use geo::Point;
use gtfs_structures::{Gtfs, RouteType};
use itertools::Itertools;
use vehsched_core::model::{Calendar, Feed, Route, Stop, StopTime, TransportType, Trip};

use crate::app::AppError;

/// reads a GTFS zip archive or directory.
pub fn read_gtfs(path: &str) -> Result<Gtfs, AppError> {
    log::info!("reading GTFS archive {path}");
    let gtfs = Gtfs::new(path).map_err(|source| AppError::Gtfs {
        path: path.to_string(),
        source,
    })?;
    log::info!(
        "read {} routes, {} trips, {} calendars and {} stops",
        gtfs.routes.len(),
        gtfs.trips.len(),
        gtfs.calendar.len(),
        gtfs.stops.len()
    );
    Ok(gtfs)
}

/// copies the archive into feed records. records are sorted by id so that route ids,
/// vehicle ids and output order do not depend on hash map iteration.
pub fn feed_from_gtfs(gtfs: &Gtfs) -> Feed {
    let routes = gtfs
        .routes
        .values()
        .sorted_by(|a, b| a.id.cmp(&b.id))
        .map(|r| Route::new(&r.id, transport_type(&r.route_type)))
        .collect_vec();

    let mut trips = vec![];
    let mut stop_times = vec![];
    for trip in gtfs.trips.values().sorted_by(|a, b| a.id.cmp(&b.id)) {
        trips.push(Trip::new(&trip.id, &trip.route_id, &trip.service_id));
        for gtfs_stop_time in trip.stop_times.iter() {
            match stop_time(&trip.id, gtfs_stop_time) {
                Some(st) => stop_times.push(st),
                None => log::warn!(
                    "trip '{}' stop sequence {} at stop '{}' has neither arrival nor departure time, skipping",
                    trip.id,
                    gtfs_stop_time.stop_sequence,
                    gtfs_stop_time.stop.id
                ),
            }
        }
    }

    let calendars = gtfs
        .calendar
        .values()
        .sorted_by(|a, b| a.id.cmp(&b.id))
        .map(|c| {
            let flags = [
                c.monday,
                c.tuesday,
                c.wednesday,
                c.thursday,
                c.friday,
                c.saturday,
                c.sunday,
            ];
            Calendar::new(&c.id, flags, c.start_date, c.end_date)
        })
        .collect_vec();

    let stops = gtfs
        .stops
        .values()
        .sorted_by(|a, b| a.id.cmp(&b.id))
        .filter_map(|stop| match get_stop_location(stop.clone(), gtfs) {
            Some(point) => Some(Stop::new(&stop.id, point.x(), point.y())),
            None => {
                log::warn!(
                    "stop '{}' has no location in its row or its parent station, skipping",
                    stop.id
                );
                None
            }
        })
        .collect_vec();

    Feed {
        routes,
        trips,
        stop_times,
        calendars,
        stops,
    }
}

/// maps the GTFS route type onto the four converted transport types.
pub fn transport_type(route_type: &RouteType) -> TransportType {
    match route_type {
        RouteType::Tramway => TransportType::Tram,
        RouteType::Subway => TransportType::Metro,
        RouteType::Rail => TransportType::Rail,
        RouteType::Bus => TransportType::Bus,
        RouteType::Ferry => TransportType::Other(4),
        RouteType::CableCar => TransportType::Other(5),
        RouteType::Gondola => TransportType::Other(6),
        RouteType::Funicular => TransportType::Other(7),
        RouteType::Coach => TransportType::Other(200),
        RouteType::Air => TransportType::Other(1100),
        RouteType::Taxi => TransportType::Other(1500),
        RouteType::Other(code) => TransportType::Other(*code),
    }
}

/// a missing arrival or departure time takes the value of the other one.
fn stop_time(trip_id: &str, st: &gtfs_structures::StopTime) -> Option<StopTime> {
    let arrival = st.arrival_time.or(st.departure_time)?;
    let departure = st.departure_time.unwrap_or(arrival);
    Some(StopTime::new(
        trip_id,
        &st.stop.id,
        st.stop_sequence,
        arrival,
        departure,
    ))
}

// Checks the stop and its parent station for lon,lat location, looking one level up only.
fn get_stop_location(stop: Arc<gtfs_structures::Stop>, gtfs: &Gtfs) -> Option<Point<f64>> {
    if let (Some(lon), Some(lat)) = (stop.longitude, stop.latitude) {
        return Some(Point::new(lon, lat));
    }
    stop.parent_station
        .as_ref()
        .and_then(|parent_id| gtfs.stops.get(parent_id))
        .and_then(
            |parent_stop| match (parent_stop.longitude, parent_stop.latitude) {
                (Some(lon), Some(lat)) => Some(Point::new(lon, lat)),
                _ => None,
            },
        )
}
