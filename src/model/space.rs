use crate::UID;
use crate::error::Result;
use crate::model::surface::Surface;
use crate::name::{HasName, SortByName};
use crate::zoning::ZoneRole;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A bounded volume holding one thermal zone's surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub name: String,
    pub uid: UID,
    pub parent: Option<UID>,
    pub role: ZoneRole,
    surfaces: HashMap<String, Surface>,
}

impl Space {
    pub fn new(name: &str, role: ZoneRole) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            role,
            surfaces: HashMap::new(),
        }
    }

    pub fn add_surface(&mut self, mut surface: Surface) -> Result<()> {
        if self.surfaces.contains_key(&surface.name) {
            return Err(anyhow!("Surface already present: {}", surface.name).into());
        }
        surface.parent = Some(self.uid.clone());
        self.surfaces.insert(surface.name.clone(), surface);
        Ok(())
    }

    pub fn get_surface(&self, name: &str) -> Option<&Surface> {
        self.surfaces.get(name)
    }

    /// Surfaces sorted by name.
    pub fn surfaces(&self) -> Vec<&Surface> {
        let mut surfaces: Vec<&Surface> = self.surfaces.values().collect();
        surfaces.sort_by_name();
        surfaces
    }

    pub fn surfaces_mut(&mut self) -> impl Iterator<Item = &mut Surface> {
        self.surfaces.values_mut()
    }

    /// Plan area of this space: the sum of its floor faces.
    pub fn floor_area(&self) -> f64 {
        self.surfaces
            .values()
            .filter(|s| s.surface_type == super::surface::SurfaceType::Floor)
            .map(|s| s.net_area())
            .sum()
    }
}

impl HasName for Space {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Space({}, {}, {} surfaces)",
            self.name,
            self.role.label(),
            self.surfaces.len()
        )
    }
}
