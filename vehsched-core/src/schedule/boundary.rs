use geo::{coord, Intersects, Point, Rect, Translate};
use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleError;

/// rectangular clipping area, written as `[xmin, ymin, xmax, ymax]` in configuration.
/// the edges belong to the area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct Boundary {
    rect: Rect<f64>,
}

impl Boundary {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, ScheduleError> {
        if [xmin, ymin, xmax, ymax].iter().any(|v| !v.is_finite()) {
            return Err(ScheduleError::InvalidBoundary(format!(
                "values must be finite, found [{xmin}, {ymin}, {xmax}, {ymax}]"
            )));
        }
        if xmax < xmin || ymax < ymin {
            return Err(ScheduleError::InvalidBoundary(format!(
                "expected xmin <= xmax and ymin <= ymax, found [{xmin}, {ymin}, {xmax}, {ymax}]"
            )));
        }
        let rect = Rect::new(coord! { x: xmin, y: ymin }, coord! { x: xmax, y: ymax });
        Ok(Self { rect })
    }

    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.rect.intersects(&point.0)
    }
}

impl TryFrom<[f64; 4]> for Boundary {
    type Error = ScheduleError;

    fn try_from(value: [f64; 4]) -> Result<Self, Self::Error> {
        let [xmin, ymin, xmax, ymax] = value;
        Boundary::new(xmin, ymin, xmax, ymax)
    }
}

impl From<Boundary> for [f64; 4] {
    fn from(value: Boundary) -> Self {
        let (min, max) = (value.rect.min(), value.rect.max());
        [min.x, min.y, max.x, max.y]
    }
}

/// translation applied to retained stop locations, written as `[dx, dy]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct CoordinateOffset {
    pub dx: f64,
    pub dy: f64,
}

impl CoordinateOffset {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn apply(&self, point: &Point<f64>) -> Point<f64> {
        point.translate(self.dx, self.dy)
    }
}

impl From<[f64; 2]> for CoordinateOffset {
    fn from(value: [f64; 2]) -> Self {
        let [dx, dy] = value;
        Self { dx, dy }
    }
}

impl From<CoordinateOffset> for [f64; 2] {
    fn from(value: CoordinateOffset) -> Self {
        [value.dx, value.dy]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let boundary = Boundary::new(0.0, 0.0, 10.0, 5.0).expect("valid boundary");
        assert!(boundary.contains(&Point::new(5.0, 2.5)));
        assert!(boundary.contains(&Point::new(0.0, 0.0)));
        assert!(boundary.contains(&Point::new(10.0, 5.0)));
        assert!(!boundary.contains(&Point::new(10.1, 5.0)));
        assert!(!boundary.contains(&Point::new(-0.1, 2.0)));
    }

    #[test]
    fn test_inverted_boundary_rejected() {
        let result = Boundary::new(10.0, 0.0, 0.0, 5.0);
        match result {
            Err(ScheduleError::InvalidBoundary(msg)) => assert!(msg.contains("xmin <= xmax")),
            other => panic!("expected InvalidBoundary, found {other:?}"),
        }
        assert!(Boundary::new(0.0, 0.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_boundary_deserializes_from_array() {
        let boundary: Boundary =
            serde_json::from_str("[24.5, 60.1, 25.2, 60.4]").expect("should deserialize");
        assert!(boundary.contains(&Point::new(24.9, 60.2)));
        let as_array: [f64; 4] = boundary.into();
        assert_eq!(as_array, [24.5, 60.1, 25.2, 60.4]);

        let inverted: Result<Boundary, _> = serde_json::from_str("[25.2, 60.1, 24.5, 60.4]");
        assert!(inverted.is_err());
    }

    #[test]
    fn test_offset_translates_point() {
        let offset = CoordinateOffset::new(-100.0, 250.0);
        let moved = offset.apply(&Point::new(1000.0, 2000.0));
        assert_eq!(moved, Point::new(900.0, 2250.0));
    }
}
