use clap::Parser;
use vehsched_gtfs::app::{AppError, VehschedApp};

fn main() -> Result<(), AppError> {
    env_logger::init();
    let args = VehschedApp::parse();
    args.op.run()
}
