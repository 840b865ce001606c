use serde::{Deserialize, Serialize};

/// one scheduled run of a route. its timing records are kept apart, see [`super::StopTime`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub route_id: String,
    pub service_id: String,
}

impl Trip {
    pub fn new(id: &str, route_id: &str, service_id: &str) -> Self {
        Self {
            id: id.to_string(),
            route_id: route_id.to_string(),
            service_id: service_id.to_string(),
        }
    }
}
