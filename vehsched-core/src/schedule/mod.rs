pub mod assembly_ops;
mod boundary;
mod calendar_index;
pub mod clip_ops;
pub mod dedup_ops;
mod feasibility;
pub mod packing_ops;
pub mod pipeline;
mod pipeline_context;
mod route_group;
mod route_schedule;
mod schedule_config;
mod schedule_error;
mod trip_hierarchy;
mod trip_span;
pub mod weekday_ops;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use boundary::{Boundary, CoordinateOffset};
pub use calendar_index::CalendarIndex;
pub use feasibility::{is_next_trip, DistanceMetric, FeasibilityParams, TripEndpoint};
pub use pipeline::ScheduleOutput;
pub use pipeline_context::{ClipSummary, PipelineContext, PipelineSummary};
pub use route_group::RouteGroup;
pub use route_schedule::{RouteSchedule, StopVisit, VehicleSchedule};
pub use schedule_config::{MalformedCalendarPolicy, ScheduleConfig};
pub use schedule_error::{batch_processing_error, batch_result, ScheduleError};
pub use trip_hierarchy::{build_trip_hierarchy, RouteTrips, TripHierarchy, TripStopTimes};
pub use trip_span::TripSpan;
