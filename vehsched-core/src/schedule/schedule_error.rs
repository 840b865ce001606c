use itertools::Itertools;

#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("calendar for service_id '{service_id}' (trip '{trip_id}') has no active weekday")]
    MalformedCalendar { service_id: String, trip_id: String },
    #[error("Cannot find service in calendar.txt with service_id '{service_id}' (trip '{trip_id}')")]
    MissingCalendar { service_id: String, trip_id: String },
    #[error("trip '{trip_id}' on route '{route_id}' starts at {start_time}, before the preceding trip start {previous_start_time}")]
    OrderingViolation {
        route_id: String,
        trip_id: String,
        start_time: u32,
        previous_start_time: u32,
    },
    #[error("Missing lon,lat data for stop: {0}")]
    MissingStopLocation(String),
    #[error("trip has no stop times: {0}")]
    EmptyTrip(String),
    #[error("trip id is already in use within its route: {0}")]
    DuplicateTrip(String),
    #[error("invalid boundary: {0}")]
    InvalidBoundary(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Internal Error: {0}")]
    Internal(String),
    #[error("errors encountered during batch route processing: {0}")]
    BatchProcessing(String),
}

pub fn batch_processing_error(errors: &[ScheduleError]) -> ScheduleError {
    let concatenated = errors.iter().map(|e| e.to_string()).join("\n  ");
    ScheduleError::BatchProcessing(format!("[\n  {concatenated}\n]"))
}

/// folds the outcome of a batch of per-route jobs. a lone error is returned as is,
/// several are combined with [`batch_processing_error`].
pub fn batch_result<T>(
    values: Vec<T>,
    mut errors: Vec<ScheduleError>,
) -> Result<Vec<T>, ScheduleError> {
    match errors.len() {
        0 => Ok(values),
        1 => Err(errors.remove(0)),
        _ => Err(batch_processing_error(&errors)),
    }
}
