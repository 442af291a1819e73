//! Bounding boxes over point sets.

use crate::Point;
use crate::vecutils::{max, min};

/// Returns the axis-aligned bounding box of the points as (min, max).
///
/// Panics on an empty slice; callers always have at least one polygon.
pub fn bounding_box(pts: &[Point]) -> (Point, Point) {
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let zs: Vec<f64> = pts.iter().map(|p| p.z).collect();

    (
        Point::new(min(&xs), min(&ys), min(&zs)),
        Point::new(max(&xs), max(&ys), max(&zs)),
    )
}
