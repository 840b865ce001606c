//! pipeline that turns in-memory transit feed records (routes, trips, stop times,
//! calendars and stops) into simulation-ready [`schedule::RouteSchedule`] values:
//! for every route, the set of stops it serves and the vehicles that run its trips
//! back-to-back over one canonical week.
pub mod model;
pub mod schedule;
