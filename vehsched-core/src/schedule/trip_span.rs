use itertools::Itertools;

use crate::model::StopTime;
use crate::schedule::{ScheduleError, StopVisit};

/// a trip with its stop times in stop sequence order and its computed bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripSpan {
    pub trip_id: String,
    /// departure time at the first stop
    pub start_time: u32,
    /// arrival time at the last stop
    pub end_time: u32,
    pub stop_times: Vec<StopTime>,
}

impl TripSpan {
    pub fn new(trip_id: &str, mut stop_times: Vec<StopTime>) -> Result<TripSpan, ScheduleError> {
        stop_times.sort_by_key(|st| st.stop_sequence);
        let (start_time, end_time) = match (stop_times.first(), stop_times.last()) {
            (Some(first), Some(last)) => (first.departure_time, last.arrival_time),
            _ => return Err(ScheduleError::EmptyTrip(trip_id.to_string())),
        };
        Ok(TripSpan {
            trip_id: trip_id.to_string(),
            start_time,
            end_time,
            stop_times,
        })
    }

    pub fn first_stop_id(&self) -> Option<&str> {
        self.stop_times.first().map(|st| st.stop_id.as_str())
    }

    pub fn last_stop_id(&self) -> Option<&str> {
        self.stop_times.last().map(|st| st.stop_id.as_str())
    }

    pub fn stop_ids(&self) -> impl Iterator<Item = &str> {
        self.stop_times.iter().map(|st| st.stop_id.as_str())
    }

    pub fn stop_visits(&self) -> Vec<StopVisit> {
        self.stop_times.iter().map(StopVisit::from).collect_vec()
    }
}
