use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::StopTime;

/// one stop visit of a scheduled trip, in the simulator's field names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopVisit {
    pub stop_id: String,
    #[serde(rename = "arrT")]
    pub arrival_time: u32,
    #[serde(rename = "depT")]
    pub departure_time: u32,
}

impl From<&StopTime> for StopVisit {
    fn from(stop_time: &StopTime) -> Self {
        StopVisit {
            stop_id: stop_time.stop_id.clone(),
            arrival_time: stop_time.arrival_time,
            departure_time: stop_time.departure_time,
        }
    }
}

/// the duty of one vehicle: trips it performs back to back, each as its ordered stop visits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSchedule {
    pub vehicle_id: usize,
    pub trips: Vec<Vec<StopVisit>>,
}

/// final schedule of one route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSchedule {
    /// dense integer id of the route
    pub route_id: u32,
    pub layer_id: i32,
    pub stops: BTreeSet<String>,
    pub vehicles: Vec<VehicleSchedule>,
}
