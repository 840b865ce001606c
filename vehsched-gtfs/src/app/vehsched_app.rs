use std::path::Path;

use clap::{Parser, Subcommand};
use vehsched_core::schedule::{pipeline, ScheduleOutput};

use crate::app::{AppError, ScheduleArgs};
use crate::{feed_ops, write_ops};

/// Command line tool converting GTFS archives into per-route vehicle schedules
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct VehschedApp {
    #[command(subcommand)]
    pub op: VehschedOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum VehschedOperation {
    /// convert a GTFS archive into vehicle schedules and stop locations
    Convert {
        #[command(flatten)]
        args: ScheduleArgs,

        /// JSON file receiving the route schedules
        #[arg(long, default_value_t = String::from("vehicle_schedules.json"))]
        output_file: String,

        /// CSV file receiving the stop locations as WKT points
        #[arg(long, default_value_t = String::from("stops.csv"))]
        stops_file: String,

        /// JSON file receiving the run summary
        #[arg(long, default_value_t = String::from("summary.json"))]
        summary_file: String,
    },
    /// run the conversion and print its summary without writing schedules
    Summary {
        #[command(flatten)]
        args: ScheduleArgs,
    },
}

impl VehschedOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            VehschedOperation::Convert {
                args,
                output_file,
                stops_file,
                summary_file,
            } => {
                let output = run_pipeline(args)?;
                write_ops::write_schedules(Path::new(output_file), &output.routes)?;
                write_ops::write_stops(Path::new(stops_file), &output.stops)?;
                write_ops::write_summary(Path::new(summary_file), &output.summary)
            }
            VehschedOperation::Summary { args } => {
                let output = run_pipeline(args)?;
                let json = serde_json::to_string_pretty(&output.summary).map_err(|source| {
                    AppError::Json {
                        path: String::from("<stdout>"),
                        source,
                    }
                })?;
                println!("{json}");
                Ok(())
            }
        }
    }
}

fn run_pipeline(args: &ScheduleArgs) -> Result<ScheduleOutput, AppError> {
    let conf = args.schedule_config()?;
    let gtfs = feed_ops::read_gtfs(&args.input)?;
    let feed = feed_ops::feed_from_gtfs(&gtfs);
    let output = pipeline::run(feed, &conf)?;
    Ok(output)
}
