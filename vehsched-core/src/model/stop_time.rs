use serde::{Deserialize, Serialize};

/// one stop visit of a trip. times are seconds since midnight of the service day
/// and may exceed 86400 for trips running past midnight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopTime {
    pub trip_id: String,
    pub stop_id: String,
    pub stop_sequence: u32,
    pub arrival_time: u32,
    pub departure_time: u32,
}

impl StopTime {
    pub fn new(
        trip_id: &str,
        stop_id: &str,
        stop_sequence: u32,
        arrival_time: u32,
        departure_time: u32,
    ) -> Self {
        Self {
            trip_id: trip_id.to_string(),
            stop_id: stop_id.to_string(),
            stop_sequence,
            arrival_time,
            departure_time,
        }
    }

    /// shifts both arrival and departure by the same number of seconds.
    pub fn shift(&mut self, seconds: u32) {
        self.arrival_time += seconds;
        self.departure_time += seconds;
    }
}
