use std::path::Path;

use serde::Serialize;
use vehsched_core::model::StopDirectory;
use vehsched_core::schedule::{PipelineSummary, RouteSchedule};
use wkt::ToWkt;

use crate::app::AppError;

/// writes the route schedules as a pretty-printed JSON array.
pub fn write_schedules(path: &Path, routes: &[RouteSchedule]) -> Result<(), AppError> {
    write_json(path, &routes)?;
    log::info!("wrote {} route schedules to {}", routes.len(), path.display());
    Ok(())
}

/// writes the run summary as JSON.
pub fn write_summary(path: &Path, summary: &PipelineSummary) -> Result<(), AppError> {
    write_json(path, summary)
}

/// writes the stop locations as CSV rows of stop id and WKT point.
pub fn write_stops(path: &Path, stops: &StopDirectory) -> Result<(), AppError> {
    create_parent_directory(path)?;
    let csv_error = |source| AppError::Csv {
        path: path.display().to_string(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_error)?;
    writer
        .write_record(["stop_id", "geometry"])
        .map_err(csv_error)?;
    for (stop_id, point) in stops.iter() {
        writer
            .write_record([stop_id.as_str(), point.to_wkt().to_string().as_str()])
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("wrote {} stops to {}", stops.len(), path.display());
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), AppError> {
    create_parent_directory(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| AppError::Json {
        path: path.display().to_string(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn create_parent_directory(path: &Path) -> Result<(), AppError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| AppError::Io {
                path: parent.display().to_string(),
                source,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::Point;
    use std::collections::BTreeSet;
    use vehsched_core::schedule::{StopVisit, VehicleSchedule};

    #[test]
    fn test_write_stops_as_wkt() {
        let dir = tempfile::tempdir().expect("test invariant failed: no temp dir");
        let path = dir.path().join("out").join("stops.csv");
        let stops = StopDirectory::from([
            ("a".to_string(), Point::new(1.5, 2.0)),
            ("b".to_string(), Point::new(-3.0, 4.25)),
        ]);
        write_stops(&path, &stops).expect("should write stops");

        let mut reader = csv::Reader::from_path(&path).expect("should open stops");
        let rows = reader
            .records()
            .map(|r| r.expect("valid row").iter().map(String::from).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "POINT(1.5 2)".to_string()],
                vec!["b".to_string(), "POINT(-3 4.25)".to_string()],
            ]
        );
    }

    #[test]
    fn test_write_schedules_json() {
        let dir = tempfile::tempdir().expect("test invariant failed: no temp dir");
        let path = dir.path().join("vehicle_schedules.json");
        let routes = vec![RouteSchedule {
            route_id: 0,
            layer_id: 0,
            stops: BTreeSet::from(["a".to_string()]),
            vehicles: vec![VehicleSchedule {
                vehicle_id: 0,
                trips: vec![vec![StopVisit {
                    stop_id: "a".to_string(),
                    arrival_time: 5,
                    departure_time: 6,
                }]],
            }],
        }];
        write_schedules(&path, &routes).expect("should write schedules");

        let text = std::fs::read_to_string(&path).expect("should read back");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(value[0]["vehicles"][0]["trips"][0][0]["arrT"], 5);
        assert_eq!(value[0]["stops"][0], "a");
    }
}
