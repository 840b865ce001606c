use std::collections::BTreeSet;

use crate::model::Route;
use crate::schedule::{RouteSchedule, TripSpan, VehicleSchedule};

/// working set of one route between assembly and output.
#[derive(Clone, Debug)]
pub struct RouteGroup {
    pub route: Route,
    pub route_int_id: u32,
    /// trips ordered by start time once assembled
    pub trips: Vec<TripSpan>,
    /// union of the stops visited by `trips`
    pub stops: BTreeSet<String>,
    pub vehicles: Vec<VehicleSchedule>,
}

impl RouteGroup {
    pub fn new(route: Route, route_int_id: u32) -> RouteGroup {
        RouteGroup {
            route,
            route_int_id,
            trips: vec![],
            stops: BTreeSet::new(),
            vehicles: vec![],
        }
    }

    pub fn add_trip(&mut self, trip: TripSpan) {
        self.stops.extend(trip.stop_ids().map(String::from));
        self.trips.push(trip);
    }

    pub fn into_route_schedule(self) -> RouteSchedule {
        RouteSchedule {
            route_id: self.route_int_id,
            layer_id: self.route.transport_type.layer_id(),
            stops: self.stops,
            vehicles: self.vehicles,
        }
    }
}
