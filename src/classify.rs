//! Surface type and boundary condition classification.
//!
//! Runs once over a fully extruded building as the last generation step.
//! Types come from outward normals; boundary conditions from elevation
//! relative to grade and from whether a wall's base edge lies on the
//! footprint outline.

use crate::footprint::Footprint;
use crate::geom::EPS;
use crate::geom::polygon::Polygon;
use crate::geom::vector::Vector;
use crate::model::building::Building;
use crate::model::surface::{BoundaryCondition, SurfaceType};

/// Surface type from the outward normal.
pub fn surface_type_of(vn: &Vector) -> SurfaceType {
    if vn.dz.abs() < EPS {
        SurfaceType::Wall
    } else if vn.dz > 0.0 {
        SurfaceType::RoofCeiling
    } else {
        SurfaceType::Floor
    }
}

/// Assigns surface types and boundary conditions in place.
pub fn classify(building: &mut Building, footprint: &Footprint, grade: f64) {
    let z_min = building.stories().first().map_or(0.0, |s| s.z_bottom);
    let z_max = building.stories().last().map_or(0.0, |s| s.z_top);

    for story in building.stories_mut() {
        for space in story.spaces_mut() {
            for surface in space.surfaces_mut() {
                surface.surface_type = surface_type_of(&surface.polygon.vn);
                surface.boundary_condition = match surface.surface_type {
                    SurfaceType::Wall => {
                        classify_wall(&surface.polygon, footprint, grade)
                    }
                    SurfaceType::RoofCeiling => {
                        if surface.polygon.max_z() >= z_max - EPS {
                            BoundaryCondition::Outdoors
                        } else {
                            BoundaryCondition::Interzone
                        }
                    }
                    SurfaceType::Floor => {
                        if surface.polygon.min_z() > z_min + EPS {
                            BoundaryCondition::Interzone
                        } else if z_min <= grade + EPS {
                            BoundaryCondition::Ground
                        } else {
                            // Bottom plate raised above grade is exposed.
                            BoundaryCondition::Outdoors
                        }
                    }
                };
            }
        }
    }
}

fn classify_wall(polygon: &Polygon, footprint: &Footprint, grade: f64) -> BoundaryCondition {
    if !wall_on_outline(polygon, footprint) {
        return BoundaryCondition::Interzone;
    }
    if polygon.max_z() <= grade + EPS {
        BoundaryCondition::Ground
    } else {
        BoundaryCondition::Outdoors
    }
}

/// True when the wall's base edge lies on an outline segment.
fn wall_on_outline(polygon: &Polygon, footprint: &Footprint) -> bool {
    let base_z = polygon.min_z();
    let base: Vec<(f64, f64)> = polygon
        .pts
        .iter()
        .filter(|p| (p.z - base_z).abs() < EPS)
        .map(|p| (p.x, p.y))
        .collect();
    if base.len() != 2 {
        return false;
    }
    let mid = ((base[0].0 + base[1].0) / 2.0, (base[0].1 + base[1].1) / 2.0);

    footprint.edges().iter().any(|(a, b)| {
        point_on_segment(base[0], *a, *b)
            && point_on_segment(base[1], *a, *b)
            && point_on_segment(mid, *a, *b)
    })
}

fn point_on_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> bool {
    let cross = (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0);
    if cross.abs() > EPS {
        return false;
    }
    p.0 >= a.0.min(b.0) - EPS
        && p.0 <= a.0.max(b.0) + EPS
        && p.1 >= a.1.min(b.1) - EPS
        && p.1 <= a.1.max(b.1) + EPS
}
