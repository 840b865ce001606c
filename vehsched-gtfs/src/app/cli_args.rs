use std::path::Path;

use clap::Args;
use config::{Config, File};
use vehsched_core::schedule::{
    Boundary, CoordinateOffset, DistanceMetric, MalformedCalendarPolicy, ScheduleConfig,
};

use crate::app::AppError;

/// arguments shared by every operation that runs the schedule pipeline.
#[derive(Debug, Clone, Args)]
pub struct ScheduleArgs {
    /// GTFS archive, either a zip file or a directory of .txt files
    #[arg(short, long)]
    pub input: String,

    /// TOML or JSON file with schedule settings. command line values take precedence.
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// maximum vehicle speed in meters per second (default 20)
    #[arg(long)]
    pub max_speed: Option<f64>,

    /// maximum distance in meters between chained tram, metro and rail trips (default 500)
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// distance between the end of one trip and the start of the next. GTFS coordinates are
    /// longitude/latitude degrees, so the default is haversine.
    #[arg(long, value_enum)]
    pub distance_metric: Option<DistanceMetric>,

    /// handling of trips whose calendar is missing or serves no weekday (default fail)
    #[arg(long, value_enum)]
    pub malformed_calendar_policy: Option<MalformedCalendarPolicy>,

    /// clipping area (format: xmin,ymin,xmax,ymax)
    #[arg(long, value_parser = parse_bbox, allow_hyphen_values(true))]
    pub bbox: Option<Boundary>,

    /// translation of the written stop locations (format: dx,dy)
    #[arg(long, value_parser = parse_offset, allow_hyphen_values(true))]
    pub offset: Option<CoordinateOffset>,
}

impl ScheduleArgs {
    /// loads the configuration file, if any, and applies the command line overrides.
    pub fn schedule_config(&self) -> Result<ScheduleConfig, AppError> {
        let mut conf = read_config_file(self.config_file.as_deref())?;
        if let Some(max_speed) = self.max_speed {
            conf.max_speed = max_speed;
        }
        if let Some(max_distance) = self.max_distance {
            conf.max_link_distance = max_distance;
        }
        if let Some(distance_metric) = self.distance_metric {
            conf.distance_metric = distance_metric;
        }
        if let Some(policy) = self.malformed_calendar_policy {
            conf.malformed_calendar_policy = policy;
        }
        if let Some(bbox) = self.bbox {
            conf.boundary = Some(bbox);
        }
        if let Some(offset) = self.offset {
            conf.offset = Some(offset);
        }
        conf.validate()?;
        Ok(conf)
    }
}

/// reads the schedule settings for a GTFS feed. values missing from the file (or every
/// value, without a file) fall back to [`ScheduleConfig::default`], except the distance
/// metric which defaults to haversine for longitude/latitude coordinates.
pub fn read_config_file(path: Option<&str>) -> Result<ScheduleConfig, AppError> {
    let config_error = |source| AppError::Config {
        path: path.unwrap_or("<defaults>").to_string(),
        source,
    };
    let mut builder = Config::builder()
        .set_default("distance_metric", "haversine")
        .map_err(config_error)?;
    if let Some(path) = path {
        builder = builder.add_source(File::from(Path::new(path)));
    }
    builder
        .build()
        .map_err(config_error)?
        .try_deserialize::<ScheduleConfig>()
        .map_err(config_error)
}

/// parses `xmin,ymin,xmax,ymax` into a [`Boundary`].
pub fn parse_bbox(s: &str) -> Result<Boundary, String> {
    let values = parse_floats(s, 4, "xmin,ymin,xmax,ymax")?;
    Boundary::new(values[0], values[1], values[2], values[3]).map_err(|e| e.to_string())
}

/// parses `dx,dy` into a [`CoordinateOffset`].
pub fn parse_offset(s: &str) -> Result<CoordinateOffset, String> {
    let values = parse_floats(s, 2, "dx,dy")?;
    Ok(CoordinateOffset::new(values[0], values[1]))
}

fn parse_floats(s: &str, expected: usize, format: &str) -> Result<Vec<f64>, String> {
    let values = s
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("failed reading '{v}' in '{s}' as a number: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != expected {
        return Err(format!(
            "expected {expected} comma-separated values ({format}), found {} in '{s}'",
            values.len()
        ));
    }
    Ok(values)
}
