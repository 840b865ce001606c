use std::collections::BTreeMap;

use geo::Point;
use serde::{Deserialize, Serialize};

/// stop id to location lookup. x is longitude (or easting), y is latitude (or northing).
pub type StopDirectory = BTreeMap<String, Point<f64>>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl Stop {
    pub fn new(id: &str, longitude: f64, latitude: f64) -> Self {
        Self {
            id: id.to_string(),
            longitude,
            latitude,
        }
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// builds the stop directory. a repeated stop id keeps its last location.
pub fn stop_directory(stops: &[Stop]) -> StopDirectory {
    stops.iter().map(|s| (s.id.clone(), s.point())).collect()
}
