use crate::UID;
use crate::geom::polygon::Polygon;
use crate::name::HasName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geometric role of a surface, derived from its outward normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceType {
    Wall,
    RoofCeiling,
    Floor,
}

/// What lies on the other side of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryCondition {
    Outdoors,
    Ground,
    /// Shared with an adjacent space.
    Interzone,
    /// Never assigned by the generator; kept for downstream tools that
    /// mark party walls after the fact.
    Adiabatic,
}

/// A single planar face of a space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surface {
    pub name: String,
    pub uid: UID,
    pub parent: Option<UID>,
    pub polygon: Polygon,
    pub surface_type: SurfaceType,
    pub boundary_condition: BoundaryCondition,
}

impl Surface {
    /// Creates a surface; the boundary condition starts as interzone and
    /// is settled by the classifier once the building is assembled.
    pub fn new(name: &str, polygon: Polygon, surface_type: SurfaceType) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            polygon,
            surface_type,
            boundary_condition: BoundaryCondition::Interzone,
        }
    }

    pub fn net_area(&self) -> f64 {
        self.polygon.area()
    }
}

impl HasName for Surface {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Surface({}, {:?}, {:?}, area {:.2})",
            self.name,
            self.surface_type,
            self.boundary_condition,
            self.net_area()
        )
    }
}
