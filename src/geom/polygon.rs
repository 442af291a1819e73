use crate::UID;
use crate::error::{Result, ShapeError};
use crate::geom::EPS;
use crate::geom::point::Point;
use crate::geom::vector::Vector;
use crate::vecutils;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A planar, non-self-intersecting vertex loop.
///
/// The first and last vertices are implicitly connected; the closing vertex
/// is never repeated. Winding order determines the outward normal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    pub name: String,
    pub uid: UID,
    pub parent: Option<UID>,
    pub pts: Vec<Point>,
    /// Unit normal following the right-hand rule over `pts`.
    pub vn: Vector,
    area: f64,
}

impl Polygon {
    /// Creates a polygon from at least 3 vertices.
    ///
    /// The normal and area come from Newell's method, so slightly noisy
    /// but planar loops are fine. Collinear or zero-area input fails with
    /// [`ShapeError::DegenerateFootprint`].
    pub fn new(name: &str, pts: Vec<Point>) -> Result<Self> {
        if pts.len() < 3 {
            return Err(ShapeError::DegenerateFootprint {
                name: name.to_string(),
            });
        }

        let scaled = newell(&pts);
        let area = scaled.length() / 2.0;
        let vn = match scaled.normalize() {
            Some(v) if area > EPS => v,
            _ => {
                return Err(ShapeError::DegenerateFootprint {
                    name: name.to_string(),
                });
            }
        };

        Ok(Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            pts,
            vn,
            area,
        })
    }

    /// Gross area of the loop.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Vertex average; sufficient for the convex plates this crate emits.
    pub fn centroid(&self) -> Point {
        let n = self.pts.len() as f64;
        let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
        for p in &self.pts {
            x += p.x;
            y += p.y;
            z += p.z;
        }
        Point::new(x / n, y / n, z / n)
    }

    /// Edges of the loop, including the implicit closing edge.
    pub fn edges(&self) -> Vec<(Point, Point)> {
        let n = self.pts.len();
        (0..n).map(|i| (self.pts[i], self.pts[(i + 1) % n])).collect()
    }

    /// Returns a copy with reversed winding (and so a flipped normal).
    pub fn flip(&self, name: &str) -> Result<Self> {
        Polygon::new(name, vecutils::flip(&self.pts))
    }

    pub fn min_z(&self) -> f64 {
        let zs: Vec<f64> = self.pts.iter().map(|p| p.z).collect();
        vecutils::min(&zs)
    }

    pub fn max_z(&self) -> f64 {
        let zs: Vec<f64> = self.pts.iter().map(|p| p.z).collect();
        vecutils::max(&zs)
    }

    /// Same vertices in the same cyclic order (any starting vertex).
    pub fn is_close(&self, other: &Self) -> bool {
        let n = self.pts.len();
        if n != other.pts.len() {
            return false;
        }
        (0..n).any(|shift| {
            (0..n).all(|i| self.pts[i].is_close(&other.pts[(i + shift) % n]))
        })
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({}, {} pts, area {:.2})", self.name, self.pts.len(), self.area)
    }
}

/// Scaled normal of a planar loop (Newell's method). Length = 2 * area.
fn newell(pts: &[Point]) -> Vector {
    let n = pts.len();
    let (mut dx, mut dy, mut dz) = (0.0, 0.0, 0.0);
    for i in 0..n {
        let p = pts[i];
        let q = pts[(i + 1) % n];
        dx += (p.y - q.y) * (p.z + q.z);
        dy += (p.z - q.z) * (p.x + q.x);
        dz += (p.x - q.x) * (p.y + q.y);
    }
    Vector::new(dx, dy, dz)
}
