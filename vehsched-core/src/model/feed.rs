use serde::{Deserialize, Serialize};

use super::{Calendar, Route, Stop, StopTime, Trip};

/// the materialized records of one transit feed, the input of
/// [`crate::schedule::pipeline::run`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Feed {
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub stop_times: Vec<StopTime>,
    pub calendars: Vec<Calendar>,
    pub stops: Vec<Stop>,
}
