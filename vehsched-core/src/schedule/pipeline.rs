use itertools::Itertools;

use crate::model::{stop_directory, Feed, StopDirectory};
use crate::schedule::{
    assembly_ops, build_trip_hierarchy, clip_ops, dedup_ops, packing_ops, weekday_ops,
    CalendarIndex, PipelineContext, PipelineSummary, RouteGroup, RouteSchedule, ScheduleConfig,
    ScheduleError,
};

/// everything a run produces.
#[derive(Clone, Debug)]
pub struct ScheduleOutput {
    /// route schedules in ascending route id order
    pub routes: Vec<RouteSchedule>,
    /// stop locations, restricted to the boundary and translated when configured
    pub stops: StopDirectory,
    pub summary: PipelineSummary,
}

/// converts a feed into vehicle schedules.
pub fn run(feed: Feed, config: &ScheduleConfig) -> Result<ScheduleOutput, ScheduleError> {
    config.validate()?;
    let mut ctx = PipelineContext::new();
    let Feed {
        routes,
        trips,
        stop_times,
        calendars,
        stops,
    } = feed;

    let calendars = CalendarIndex::new(&calendars);
    let dedup = dedup_ops::select_useful_trips(
        &routes,
        &trips,
        &calendars,
        config.malformed_calendar_policy,
        &mut ctx,
    )?;
    let stop_times = dedup_ops::retain_useful_stop_times(stop_times, &dedup.useful_trips, &mut ctx);

    let mut hierarchy = build_trip_hierarchy(&routes, &trips, stop_times, &dedup.route_int_ids)?;
    weekday_ops::expand_weekdays(&mut hierarchy, &calendars, &mut ctx)?;
    let mut groups = assembly_ops::assemble_route_groups(hierarchy)?;

    let mut directory = stop_directory(&stops);
    packing_ops::populate_vehicles(&mut groups, &directory, &config.feasibility(), &mut ctx)?;
    let mut schedules = groups
        .into_iter()
        .map(RouteGroup::into_route_schedule)
        .collect_vec();

    if let Some(boundary) = &config.boundary {
        let mut clip = clip_ops::clip_to_boundary(&mut schedules, &directory, boundary);
        clip.directory_stops_removed = clip_ops::clip_stop_directory(&mut directory, boundary);
        log::info!(
            "{} stops remain inside the boundary, {} removed",
            directory.len(),
            clip.directory_stops_removed
        );
        ctx.summary.clip = Some(clip);
    }
    if let Some(offset) = &config.offset {
        clip_ops::translate_stop_directory(&mut directory, offset);
    }

    Ok(ScheduleOutput {
        routes: schedules,
        stops: directory,
        summary: ctx.summary,
    })
}
