use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Velocity};
use uom::si::length::meter;
use uom::si::velocity::meter_per_second;

use crate::schedule::{
    Boundary, CoordinateOffset, DistanceMetric, FeasibilityParams, ScheduleError,
};

pub const DEFAULT_MAX_SPEED: f64 = 20.0;
pub const DEFAULT_MAX_LINK_DISTANCE: f64 = 500.0;

/// app logic applied when a trip's calendar cannot place it on the weekly timeline,
/// either because the service id has no calendar or because no weekday is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MalformedCalendarPolicy {
    /// stop processing and report the trip and service
    #[default]
    Fail,
    /// exclude the trip, log a warning and count it in the summary
    DropTrip,
}

/// configures a conversion run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// max speed of vehicles in meters per second, used when chaining trips.
    pub max_speed: f64,
    /// max distance in meters between two chained trips of rail-like transport.
    pub max_link_distance: f64,
    pub distance_metric: DistanceMetric,
    /// optional clipping area `[xmin, ymin, xmax, ymax]`.
    pub boundary: Option<Boundary>,
    /// optional translation `[dx, dy]` applied to the retained stops.
    pub offset: Option<CoordinateOffset>,
    pub malformed_calendar_policy: MalformedCalendarPolicy,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            max_link_distance: DEFAULT_MAX_LINK_DISTANCE,
            distance_metric: DistanceMetric::default(),
            boundary: None,
            offset: None,
            malformed_calendar_policy: MalformedCalendarPolicy::default(),
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(ScheduleError::InvalidConfiguration(format!(
                "max_speed must be a positive number of meters per second, found {}",
                self.max_speed
            )));
        }
        if !self.max_link_distance.is_finite() || self.max_link_distance < 0.0 {
            return Err(ScheduleError::InvalidConfiguration(format!(
                "max_link_distance must be a non-negative number of meters, found {}",
                self.max_link_distance
            )));
        }
        if let Some(offset) = &self.offset {
            if !offset.dx.is_finite() || !offset.dy.is_finite() {
                return Err(ScheduleError::InvalidConfiguration(format!(
                    "offset must be finite, found {offset:?}"
                )));
            }
        }
        Ok(())
    }

    pub fn feasibility(&self) -> FeasibilityParams {
        FeasibilityParams {
            max_speed: Velocity::new::<meter_per_second>(self.max_speed),
            max_link_distance: Length::new::<meter>(self.max_link_distance),
            distance_metric: self.distance_metric,
        }
    }
}
