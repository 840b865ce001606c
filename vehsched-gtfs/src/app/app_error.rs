use vehsched_core::schedule::ScheduleError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error("failed reading GTFS archive '{path}': {source}")]
    Gtfs {
        path: String,
        source: gtfs_structures::Error,
    },
    #[error("file '{path}' produced error: {source}")]
    Config {
        path: String,
        source: config::ConfigError,
    },
    #[error("failed writing '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed writing '{path}' as JSON: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("failed writing '{path}' as CSV: {source}")]
    Csv { path: String, source: csv::Error },
    #[error("invalid user input: {0}")]
    InvalidUserInput(String),
}
