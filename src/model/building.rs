use crate::UID;
use crate::error::Result;
use crate::geom::EPS;
use crate::geom::bboxes::bounding_box;
use crate::geom::point::Point;
use crate::model::story::Story;
use crate::model::surface::{BoundaryCondition, Surface, SurfaceType};
use crate::name::HasName;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A complete generated building.
///
/// Stories are kept in strict bottom-to-top order. All aggregate
/// quantities are derived views over the owned surfaces and are never
/// stored separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub uid: UID,
    stories: Vec<Story>,
}

impl Building {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            stories: Vec::new(),
        }
    }

    /// Appends a story on top of the current stack.
    pub fn add_story(&mut self, mut story: Story) -> Result<()> {
        if self.stories.iter().any(|s| s.name == story.name) {
            return Err(anyhow!("Story already present: {}", story.name).into());
        }
        if let Some(last) = self.stories.last() {
            if story.z_bottom < last.z_bottom - EPS {
                return Err(anyhow!(
                    "Story added out of order: {} starts below {}",
                    story.name,
                    last.name
                )
                .into());
            }
        }
        story.parent = Some(self.uid.clone());
        self.stories.push(story);
        Ok(())
    }

    /// Stories in bottom-to-top order.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn stories_mut(&mut self) -> impl Iterator<Item = &mut Story> {
        self.stories.iter_mut()
    }

    pub fn get_story(&self, name: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.name == name)
    }

    /// Looks up a space by `"story/space"` path.
    pub fn get_space(&self, path: &str) -> Option<&crate::model::space::Space> {
        let (story, space) = path.split_once('/')?;
        self.get_story(story)?.get_space(space)
    }

    /// Looks up a surface by `"story/space/surface"` path.
    pub fn get_surface(&self, path: &str) -> Option<&Surface> {
        let (story, rest) = path.split_once('/')?;
        let (space, surface) = rest.split_once('/')?;
        self.get_story(story)?.get_space(space)?.get_surface(surface)
    }

    pub fn iter_surfaces(&self) -> impl Iterator<Item = &Surface> {
        self.stories
            .iter()
            .flat_map(|st| st.spaces().into_iter())
            .flat_map(|sp| sp.surfaces().into_iter())
    }

    /// Occupied floor area: floor plates of all non-plenum stories.
    pub fn floor_area(&self) -> f64 {
        self.stories
            .iter()
            .filter(|st| !st.is_plenum)
            .map(|st| st.floor_area())
            .sum()
    }

    /// Walls facing outdoor air.
    pub fn exterior_walls(&self) -> Vec<&Surface> {
        self.iter_surfaces()
            .filter(|s| {
                s.surface_type == SurfaceType::Wall
                    && s.boundary_condition == BoundaryCondition::Outdoors
            })
            .collect()
    }

    pub fn exterior_wall_area(&self) -> f64 {
        self.exterior_walls().iter().map(|s| s.net_area()).sum()
    }

    /// Upward faces exposed to the sky.
    pub fn roofs(&self) -> Vec<&Surface> {
        self.iter_surfaces()
            .filter(|s| {
                s.surface_type == SurfaceType::RoofCeiling
                    && s.boundary_condition == BoundaryCondition::Outdoors
            })
            .collect()
    }

    pub fn roof_area(&self) -> f64 {
        self.roofs().iter().map(|s| s.net_area()).sum()
    }

    /// Surfaces in contact with the ground.
    pub fn ground_surfaces(&self) -> Vec<&Surface> {
        self.iter_surfaces()
            .filter(|s| s.boundary_condition == BoundaryCondition::Ground)
            .collect()
    }

    pub fn ground_area(&self) -> f64 {
        self.ground_surfaces().iter().map(|s| s.net_area()).sum()
    }

    /// Envelope area facing outdoor air: exterior walls plus roofs.
    pub fn exterior_surface_area(&self) -> f64 {
        self.exterior_wall_area() + self.roof_area()
    }

    /// Enclosed air volume over all stories, plenums included.
    pub fn volume(&self) -> f64 {
        self.stories.iter().map(|st| st.volume()).sum()
    }

    /// Bounding box over all surface vertices.
    pub fn bbox(&self) -> (Point, Point) {
        let pts: Vec<Point> = self
            .iter_surfaces()
            .flat_map(|s| s.polygon.pts.iter().copied())
            .collect();
        bounding_box(&pts)
    }

    /// Checks structural consistency: unique identifiers, no empty
    /// containers, and parent links pointing at the actual owners.
    pub fn validate(&self) -> Result<()> {
        if self.stories.is_empty() {
            return Err(anyhow!("Building has no stories: {}", self.name).into());
        }
        let mut uids: HashSet<&str> = HashSet::new();
        uids.insert(self.uid.as_str());

        for story in &self.stories {
            if !uids.insert(story.uid.as_str()) {
                return Err(anyhow!("Duplicate uid on story: {}", story.name).into());
            }
            if story.parent.as_ref() != Some(&self.uid) {
                return Err(anyhow!("Story not linked to building: {}", story.name).into());
            }
            if story.spaces().is_empty() {
                return Err(anyhow!("Story has no spaces: {}", story.name).into());
            }
            for space in story.spaces() {
                if !uids.insert(space.uid.as_str()) {
                    return Err(anyhow!("Duplicate uid on space: {}", space.name).into());
                }
                if space.parent.as_ref() != Some(&story.uid) {
                    return Err(anyhow!("Space not linked to story: {}", space.name).into());
                }
                if space.surfaces().is_empty() {
                    return Err(anyhow!("Space has no surfaces: {}", space.name).into());
                }
                for surface in space.surfaces() {
                    if !uids.insert(surface.uid.as_str()) {
                        return Err(
                            anyhow!("Duplicate uid on surface: {}", surface.name).into()
                        );
                    }
                    if surface.parent.as_ref() != Some(&space.uid) {
                        return Err(anyhow!(
                            "Surface not linked to space: {}",
                            surface.name
                        )
                        .into());
                    }
                }
            }
        }
        Ok(())
    }
}

impl HasName for Building {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Building({}, {} stories)", self.name, self.stories.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::space::Space;
    use crate::model::surface::Surface;
    use crate::zoning::ZoneRole;
    use crate::{Point, Polygon};

    fn story_with_plate(name: &str, index: i32, z0: f64, z1: f64) -> Result<Story> {
        let mut story = Story::new(name, index, z0, z1, false);
        let mut space = Space::new("core", ZoneRole::Core);
        let poly = Polygon::new(
            "floor",
            vec![
                Point::new(0., 0., z0),
                Point::new(4., 0., z0),
                Point::new(4., 4., z0),
                Point::new(0., 4., z0),
            ],
        )?
        .flip("floor")?;
        space.add_surface(Surface::new("floor", poly, SurfaceType::Floor))?;
        story.add_space(space)?;
        Ok(story)
    }

    #[test]
    fn test_stories_kept_in_order() -> Result<()> {
        let mut bdg = Building::new("test");
        bdg.add_story(story_with_plate("story_0", 0, 0.0, 3.8)?)?;
        bdg.add_story(story_with_plate("story_1", 1, 3.8, 7.6)?)?;
        assert!(bdg.add_story(story_with_plate("story_low", 2, -3.8, 0.0)?).is_err());
        assert_eq!(bdg.stories().len(), 2);
        Ok(())
    }

    #[test]
    fn test_floor_area_and_volume() -> Result<()> {
        let mut bdg = Building::new("test");
        bdg.add_story(story_with_plate("story_0", 0, 0.0, 3.8)?)?;
        bdg.add_story(story_with_plate("story_1", 1, 3.8, 7.6)?)?;
        assert!((bdg.floor_area() - 32.0).abs() < 1e-9);
        assert!((bdg.volume() - 32.0 * 3.8).abs() < 1e-9);
        let (pmin, pmax) = bdg.bbox();
        assert!(pmin.is_close(&Point::new(0., 0., 0.)));
        assert!(pmax.is_close(&Point::new(4., 4., 3.8)));
        Ok(())
    }

    #[test]
    fn test_path_lookup() -> Result<()> {
        let mut bdg = Building::new("test");
        bdg.add_story(story_with_plate("story_0", 0, 0.0, 3.8)?)?;
        assert!(bdg.get_space("story_0/core").is_some());
        assert!(bdg.get_surface("story_0/core/floor").is_some());
        assert!(bdg.get_surface("story_0/core/missing").is_none());
        Ok(())
    }

    #[test]
    fn test_validate() -> Result<()> {
        let mut bdg = Building::new("test");
        bdg.add_story(story_with_plate("story_0", 0, 0.0, 3.8)?)?;
        bdg.validate()?;
        let empty = Building::new("empty");
        assert!(empty.validate().is_err());
        Ok(())
    }
}
