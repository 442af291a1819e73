//! Perimeter/core zoning of a footprint.
//!
//! Splits each floor plate into a ring of perimeter zones (one strip per
//! outline edge, `depth` meters deep, mitered at corners) plus one core
//! zone per wing. The strips and cores tile the plate exactly, so zone
//! areas always sum to the footprint area. When a wing is too thin to hold
//! a core, the plan falls back to one whole-plate zone per wing.

use crate::error::{Result, ShapeError};
use crate::footprint::Footprint;
use crate::geom::EPS;
use serde::{Deserialize, Serialize};

/// Facade orientation of a perimeter zone, from the outward edge normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinal {
    South,
    East,
    North,
    West,
}

impl Cardinal {
    /// Dominant-axis orientation of an outward normal.
    pub fn from_outward(nx: f64, ny: f64) -> Self {
        if nx.abs() > ny.abs() {
            if nx > 0.0 { Cardinal::East } else { Cardinal::West }
        } else if ny > 0.0 {
            Cardinal::North
        } else {
            Cardinal::South
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinal::South => "south",
            Cardinal::East => "east",
            Cardinal::North => "north",
            Cardinal::West => "west",
        }
    }
}

/// Thermal role of a zone polygon within its story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneRole {
    Perimeter(Cardinal),
    Core,
    /// A whole wing plate, used when the footprint is too small to split.
    WholePlate,
    Plenum,
}

impl ZoneRole {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneRole::Perimeter(c) => c.as_str(),
            ZoneRole::Core => "core",
            ZoneRole::WholePlate => "plate",
            ZoneRole::Plenum => "plenum",
        }
    }
}

/// One zone of the floor plate, in plan coordinates (counter-clockwise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePolygon {
    pub pts: Vec<(f64, f64)>,
    pub role: ZoneRole,
    /// Index into [`Footprint::edges`] for perimeter strips.
    pub outline_edge: Option<usize>,
}

impl ZonePolygon {
    pub fn area(&self) -> f64 {
        let n = self.pts.len();
        let mut twice = 0.0;
        for i in 0..n {
            let (x0, y0) = self.pts[i];
            let (x1, y1) = self.pts[(i + 1) % n];
            twice += x0 * y1 - x1 * y0;
        }
        twice / 2.0
    }

    pub fn centroid(&self) -> (f64, f64) {
        let n = self.pts.len() as f64;
        let (mut x, mut y) = (0.0, 0.0);
        for p in &self.pts {
            x += p.0;
            y += p.1;
        }
        (x / n, y / n)
    }
}

/// Zoning result for one floor plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePlan {
    pub zones: Vec<ZonePolygon>,
    /// False when the plan fell back to whole-plate wings.
    pub subdivided: bool,
}

impl ZonePlan {
    pub fn total_area(&self) -> f64 {
        self.zones.iter().map(|z| z.area()).sum()
    }
}

/// Splits the footprint into perimeter strips and wing cores.
///
/// Fails with [`ShapeError::InvalidZoning`] when `depth` is nonpositive or
/// at least half the smaller bounding box dimension; falls back to
/// whole-plate wings when an individual strip or core degenerates.
pub fn zone_plan(fp: &Footprint, depth: f64) -> Result<ZonePlan> {
    let bbox = fp.bbox();
    let min_dimension = bbox.width().min(bbox.height());
    if depth <= 0.0 || 2.0 * depth >= min_dimension {
        return Err(ShapeError::InvalidZoning {
            depth,
            min_dimension,
        });
    }

    match subdivide(fp, depth) {
        Some(zones) => Ok(ZonePlan {
            zones,
            subdivided: true,
        }),
        None => Ok(ZonePlan {
            zones: whole_plate(fp),
            subdivided: false,
        }),
    }
}

/// One whole-plate zone per wing.
fn whole_plate(fp: &Footprint) -> Vec<ZonePolygon> {
    fp.wings
        .iter()
        .map(|w| ZonePolygon {
            pts: w.rect.corners(),
            role: ZoneRole::WholePlate,
            outline_edge: None,
        })
        .collect()
}

/// Perimeter strips plus wing cores, or None when any zone degenerates.
fn subdivide(fp: &Footprint, depth: f64) -> Option<Vec<ZonePolygon>> {
    let mut zones = Vec::new();
    let mut edge_index = 0;

    for lp in fp.loops() {
        let offsets = mitered_offsets(lp, depth)?;
        let n = lp.len();
        for i in 0..n {
            let j = (i + 1) % n;
            let (vx, vy) = lp[i];
            let (wx, wy) = lp[j];
            let edge_len = ((wx - vx).powi(2) + (wy - vy).powi(2)).sqrt();
            let dir = ((wx - vx) / edge_len, (wy - vy) / edge_len);

            // The inner edge must not invert on short outline edges.
            let along =
                (offsets[j].0 - offsets[i].0) * dir.0 + (offsets[j].1 - offsets[i].1) * dir.1;
            if along < EPS {
                return None;
            }

            let strip = ZonePolygon {
                pts: vec![lp[i], lp[j], offsets[j], offsets[i]],
                // Interior on the left means the outward normal is the
                // edge direction rotated clockwise.
                role: ZoneRole::Perimeter(Cardinal::from_outward(dir.1, -dir.0)),
                outline_edge: Some(edge_index),
            };
            if strip.area() < EPS {
                return None;
            }
            zones.push(strip);
            edge_index += 1;
        }
    }

    for wing in &fp.wings {
        let core = wing.core_rect(depth);
        if core.width() < EPS || core.height() < EPS {
            return None;
        }
        zones.push(ZonePolygon {
            pts: core.corners(),
            role: ZoneRole::Core,
            outline_edge: None,
        });
    }

    Some(zones)
}

/// Mitered inward offset of every loop vertex.
///
/// Assumes the plate interior lies to the left of each edge, which holds
/// for counter-clockwise outer loops and clockwise hole loops.
fn mitered_offsets(lp: &[(f64, f64)], depth: f64) -> Option<Vec<(f64, f64)>> {
    let n = lp.len();
    let inward: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let (vx, vy) = lp[i];
            let (wx, wy) = lp[(i + 1) % n];
            let len = ((wx - vx).powi(2) + (wy - vy).powi(2)).sqrt();
            (-(wy - vy) / len, (wx - vx) / len)
        })
        .collect();

    (0..n)
        .map(|i| {
            let prev = inward[(i + n - 1) % n];
            let next = inward[i];
            let denom = 1.0 + (prev.0 * next.0 + prev.1 * next.1);
            if denom.abs() < EPS {
                // A 180 degree turn cannot be mitered.
                return None;
            }
            let scale = depth / denom;
            Some((
                lp[i].0 + (prev.0 + next.0) * scale,
                lp[i].1 + (prev.1 + next.1) * scale,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::{Courtyard, LShape, Rectangle, Shape};

    #[test]
    fn test_rectangle_plan() -> Result<()> {
        let fp = Rectangle {
            length: 25.,
            width: 20.,
        }
        .footprint()?;
        let plan = zone_plan(&fp, 4.57)?;
        assert!(plan.subdivided);
        // 4 strips + 1 core.
        assert_eq!(plan.zones.len(), 5);
        assert!((plan.total_area() - 500.0).abs() < 1e-9);

        let cardinals: Vec<ZoneRole> = plan.zones.iter().map(|z| z.role).collect();
        assert_eq!(cardinals[0], ZoneRole::Perimeter(Cardinal::South));
        assert_eq!(cardinals[1], ZoneRole::Perimeter(Cardinal::East));
        assert_eq!(cardinals[2], ZoneRole::Perimeter(Cardinal::North));
        assert_eq!(cardinals[3], ZoneRole::Perimeter(Cardinal::West));
        assert_eq!(cardinals[4], ZoneRole::Core);
        Ok(())
    }

    #[test]
    fn test_courtyard_plan_tiles_plate() -> Result<()> {
        let (length, width) = (50.0, 200.0);
        let fp = Courtyard {
            length,
            width,
            courtyard_length: length / 3.0,
            courtyard_width: width / 3.0,
        }
        .footprint()?;
        let plan = zone_plan(&fp, 4.57)?;
        assert!(plan.subdivided);
        // 8 strips + 4 cores.
        assert_eq!(plan.zones.len(), 12);
        assert!((plan.total_area() - fp.area()).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_l_plan_tiles_plate() -> Result<()> {
        let fp = LShape {
            length: 100.,
            width: 80.,
            lower_end_width: 80.0 / 3.0,
            upper_end_length: 100.0 / 3.0,
        }
        .footprint()?;
        let plan = zone_plan(&fp, 4.57)?;
        assert!(plan.subdivided);
        // 6 strips + 2 cores.
        assert_eq!(plan.zones.len(), 8);
        assert!((plan.total_area() - fp.area()).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_depth_too_large() -> Result<()> {
        let fp = Rectangle {
            length: 25.,
            width: 20.,
        }
        .footprint()?;
        assert!(matches!(
            zone_plan(&fp, 10.0),
            Err(ShapeError::InvalidZoning { .. })
        ));
        assert!(matches!(
            zone_plan(&fp, 0.0),
            Err(ShapeError::InvalidZoning { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_thin_wing_falls_back() -> Result<()> {
        // The L's lower bar is only 4 m wide, so no core fits in it, but
        // the overall bounding box still admits the depth.
        let fp = LShape {
            length: 100.,
            width: 80.,
            lower_end_width: 4.0,
            upper_end_length: 30.0,
        }
        .footprint()?;
        let plan = zone_plan(&fp, 4.57)?;
        assert!(!plan.subdivided);
        assert_eq!(plan.zones.len(), 2);
        assert!((plan.total_area() - fp.area()).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_strip_edges_cover_outline() -> Result<()> {
        let fp = Courtyard {
            length: 50.,
            width: 200.,
            courtyard_length: 50.0 / 3.0,
            courtyard_width: 200.0 / 3.0,
        }
        .footprint()?;
        let plan = zone_plan(&fp, 4.57)?;
        let strip_edges: Vec<usize> = plan
            .zones
            .iter()
            .filter_map(|z| z.outline_edge)
            .collect();
        assert_eq!(strip_edges, (0..fp.edge_count()).collect::<Vec<_>>());
        Ok(())
    }
}
