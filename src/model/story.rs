use crate::UID;
use crate::error::Result;
use crate::geom::EPS;
use crate::model::space::Space;
use crate::name::{HasName, SortByName};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A horizontal slice of the building between two elevations.
///
/// `index` counts occupied levels, negative below grade. A plenum story
/// shares its level index with the occupied story it caps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub name: String,
    pub uid: UID,
    pub parent: Option<UID>,
    pub index: i32,
    pub z_bottom: f64,
    pub z_top: f64,
    pub is_plenum: bool,
    spaces: HashMap<String, Space>,
}

impl Story {
    pub fn new(name: &str, index: i32, z_bottom: f64, z_top: f64, is_plenum: bool) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            index,
            z_bottom,
            z_top,
            is_plenum,
            spaces: HashMap::new(),
        }
    }

    pub fn add_space(&mut self, mut space: Space) -> Result<()> {
        if self.spaces.contains_key(&space.name) {
            return Err(anyhow!("Space already present: {}", space.name).into());
        }
        space.parent = Some(self.uid.clone());
        self.spaces.insert(space.name.clone(), space);
        Ok(())
    }

    pub fn get_space(&self, name: &str) -> Option<&Space> {
        self.spaces.get(name)
    }

    /// Spaces sorted by name.
    pub fn spaces(&self) -> Vec<&Space> {
        let mut spaces: Vec<&Space> = self.spaces.values().collect();
        spaces.sort_by_name();
        spaces
    }

    pub fn spaces_mut(&mut self) -> impl Iterator<Item = &mut Space> {
        self.spaces.values_mut()
    }

    pub fn height(&self) -> f64 {
        self.z_top - self.z_bottom
    }

    pub fn is_above_ground(&self) -> bool {
        self.z_bottom >= -EPS
    }

    /// Plan area of the story.
    pub fn floor_area(&self) -> f64 {
        self.spaces.values().map(|s| s.floor_area()).sum()
    }

    /// Enclosed air volume of the story slice.
    pub fn volume(&self) -> f64 {
        self.floor_area() * self.height()
    }
}

impl HasName for Story {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Story({}, z {:.2}..{:.2}, {} spaces)",
            self.name,
            self.z_bottom,
            self.z_top,
            self.spaces.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoning::ZoneRole;

    #[test]
    fn test_above_ground() {
        let story = Story::new("story_0", 0, 0.0, 3.8, false);
        assert!(story.is_above_ground());
        let basement = Story::new("story_m1", -1, -3.8, 0.0, false);
        assert!(!basement.is_above_ground());
        assert!((basement.height() - 3.8).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_space_rejected() -> Result<()> {
        let mut story = Story::new("story_0", 0, 0.0, 3.8, false);
        story.add_space(Space::new("core", ZoneRole::Core))?;
        assert!(story.add_space(Space::new("core", ZoneRole::Core)).is_err());
        assert_eq!(story.spaces().len(), 1);
        Ok(())
    }
}
