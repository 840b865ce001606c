//! GTFS front end for `vehsched-core`: reads an archive into feed records, runs the
//! schedule pipeline and writes the simulator's input files.
pub mod app;
pub mod feed_ops;
pub mod write_ops;

#[cfg(test)]
pub(crate) mod test_gtfs;
