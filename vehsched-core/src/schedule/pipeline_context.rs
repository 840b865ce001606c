use serde::{Deserialize, Serialize};

/// counters collected during one run. filtering outcomes are reported here rather than
/// as errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub routes_total: usize,
    pub routes_kept: usize,
    pub trips_total: usize,
    pub trips_kept: usize,
    /// trips excluded under [`super::MalformedCalendarPolicy::DropTrip`]
    pub trips_dropped_malformed_calendar: usize,
    pub stop_times_total: usize,
    pub stop_times_kept: usize,
    /// weekday copies created by the expander
    pub trips_created: usize,
    pub trips_after_expansion: usize,
    pub vehicles: usize,
    /// present only when a boundary was configured
    pub clip: Option<ClipSummary>,
}

/// removals made by boundary clipping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipSummary {
    pub stop_visits_removed: usize,
    pub route_stops_removed: usize,
    pub trips_truncated: usize,
    pub trips_removed: usize,
    pub vehicles_removed: usize,
    pub routes_removed: usize,
    pub directory_stops_removed: usize,
}

/// state threaded through the stages of a run.
#[derive(Debug, Default)]
pub struct PipelineContext {
    next_vehicle_id: usize,
    pub summary: PipelineSummary,
}

impl PipelineContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// hands out vehicle ids sequentially across all routes of the run, starting at 0.
    pub fn next_vehicle_id(&mut self) -> usize {
        let id = self.next_vehicle_id;
        self.next_vehicle_id += 1;
        id
    }
}
