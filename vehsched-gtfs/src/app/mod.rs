mod app_error;
mod cli_args;
mod vehsched_app;

pub use app_error::AppError;
pub use cli_args::{parse_bbox, parse_offset, ScheduleArgs};
pub use vehsched_app::{VehschedApp, VehschedOperation};
