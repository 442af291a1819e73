//! Story extrusion: lifts a zoned footprint into a stack of stories with
//! floor, ceiling, wall and plenum surfaces.
//!
//! Each occupied level gets one space per zone. Exterior walls span the
//! full floor-to-floor height (the plenum slice included) and are owned by
//! the perimeter space behind them, so wall counts and areas stay exact
//! whether or not a plenum is present. Plenum stories carry only their
//! floor and ceiling plates, emitted once per zone polygon so the top
//! level's plates are exactly the roof faces.

use crate::error::{Result, require_less_than, require_positive, ShapeError};
use crate::footprint::Footprint;
use crate::geom::EPS;
use crate::geom::point::Point;
use crate::geom::polygon::Polygon;
use crate::model::building::Building;
use crate::model::space::Space;
use crate::model::story::Story;
use crate::model::surface::{Surface, SurfaceType};
use crate::zoning::{ZonePlan, ZoneRole};

/// Vertical stacking parameters shared by all shape generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoryParams {
    pub above_ground_stories: u32,
    pub below_ground_stories: u32,
    pub floor_to_floor_height: f64,
    pub plenum_height: f64,
    pub perimeter_zone_depth: f64,
    pub initial_height: f64,
}

impl Default for StoryParams {
    fn default() -> Self {
        Self {
            above_ground_stories: 1,
            below_ground_stories: 0,
            floor_to_floor_height: 3.8,
            plenum_height: 0.0,
            perimeter_zone_depth: 4.57,
            initial_height: 0.0,
        }
    }
}

impl StoryParams {
    pub fn check(&self) -> Result<()> {
        if self.above_ground_stories == 0 {
            return Err(ShapeError::InvalidGeometry {
                param: "above_ground_stories",
                value: 0.0,
                reason: "at least one above-ground story is required",
            });
        }
        require_positive("floor_to_floor_height", self.floor_to_floor_height)?;
        if self.plenum_height < 0.0 {
            return Err(ShapeError::InvalidGeometry {
                param: "plenum_height",
                value: self.plenum_height,
                reason: "must not be negative",
            });
        }
        require_less_than(
            "plenum_height",
            self.plenum_height,
            self.floor_to_floor_height,
            "must be strictly less than floor_to_floor_height",
        )?;
        Ok(())
    }
}

/// Extrudes the zoned footprint into a building.
///
/// Boundary conditions are left for the classifier; geometry and surface
/// ownership are settled here.
pub fn extrude(
    name: &str,
    fp: &Footprint,
    plan: &ZonePlan,
    params: &StoryParams,
) -> Result<Building> {
    params.check()?;

    let mut building = Building::new(name);
    let f2f = params.floor_to_floor_height;
    let occupied_height = f2f - params.plenum_height;
    let has_plenum = params.plenum_height > EPS;

    let first = -(params.below_ground_stories as i32);
    let last = params.above_ground_stories as i32;
    for level in first..last {
        let z0 = params.initial_height + level as f64 * f2f;
        let z_ceil = z0 + occupied_height;
        let z_top = z0 + f2f;

        let mut story = Story::new(&level_name("story", level), level, z0, z_ceil, false);
        for (zi, zone) in plan.zones.iter().enumerate() {
            let mut space = Space::new(&format!("{}_{}", zone.role.label(), zi), zone.role);

            space.add_surface(plate("floor", &zone.pts, z0, true)?)?;
            space.add_surface(plate("ceiling", &zone.pts, z_ceil, false)?)?;

            let n = zone.pts.len();
            for i in 0..n {
                let a = zone.pts[i];
                let b = zone.pts[(i + 1) % n];
                match zone.outline_edge {
                    // The first edge of a perimeter strip is the outline
                    // edge; it carries the full-height facade wall.
                    Some(k) if i == 0 => {
                        space.add_surface(wall(&format!("ext_wall_{k}"), a, b, z0, z_top)?)?;
                    }
                    Some(_) => {
                        space.add_surface(wall(&format!("wall_{i}"), a, b, z0, z_ceil)?)?;
                    }
                    None => {}
                }
            }
            story.add_space(space)?;
        }

        if !plan.subdivided {
            // Whole-plate zones mirror the wings one-to-one; hand each
            // facade wall to the wing holding the edge midpoint.
            assign_plate_walls(&mut story, fp, plan, z0, z_top)?;
        }
        building.add_story(story)?;

        if has_plenum {
            let mut plenum =
                Story::new(&level_name("plenum", level), level, z_ceil, z_top, true);
            add_plenum_spaces(&mut plenum, fp, plan, z_ceil, z_top)?;
            building.add_story(plenum)?;
        }
    }

    Ok(building)
}

/// Facade walls for an unsubdivided plan, owned per wing.
fn assign_plate_walls(
    story: &mut Story,
    fp: &Footprint,
    plan: &ZonePlan,
    z0: f64,
    z_top: f64,
) -> Result<()> {
    let mut walls: Vec<Vec<Surface>> = plan.zones.iter().map(|_| Vec::new()).collect();
    for (k, (a, b)) in fp.edges().into_iter().enumerate() {
        let mid = ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
        let owner = fp
            .wings
            .iter()
            .position(|w| w.rect.contains(mid))
            .unwrap_or(0);
        walls[owner].push(wall(&format!("ext_wall_{k}"), a, b, z0, z_top)?);
    }

    for space in story.spaces_mut() {
        // spaces_mut iterates a HashMap; recover the wing index from the
        // space name written as "plate_<index>".
        let zi: usize = space
            .name
            .rsplit('_')
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        for srf in walls[zi].drain(..) {
            space.add_surface(srf)?;
        }
    }
    Ok(())
}

/// One plenum space per wing, holding the zone plates above its area.
fn add_plenum_spaces(
    plenum: &mut Story,
    fp: &Footprint,
    plan: &ZonePlan,
    z_bottom: f64,
    z_top: f64,
) -> Result<()> {
    let mut spaces: Vec<Space> = (0..fp.wings.len())
        .map(|wi| Space::new(&format!("plenum_{wi}"), ZoneRole::Plenum))
        .collect();

    for (zi, zone) in plan.zones.iter().enumerate() {
        let c = zone.centroid();
        let owner = fp
            .wings
            .iter()
            .position(|w| w.rect.contains(c))
            .unwrap_or(0);
        spaces[owner].add_surface(plate(&format!("floor_{zi}"), &zone.pts, z_bottom, true)?)?;
        spaces[owner].add_surface(plate(&format!("ceiling_{zi}"), &zone.pts, z_top, false)?)?;
    }

    for space in spaces {
        plenum.add_space(space)?;
    }
    Ok(())
}

fn level_name(prefix: &str, level: i32) -> String {
    if level < 0 {
        format!("{}_m{}", prefix, -level)
    } else {
        format!("{}_{}", prefix, level)
    }
}

/// Horizontal plate at elevation `z`; reversed winding for downward faces.
fn plate(name: &str, pts: &[(f64, f64)], z: f64, facing_down: bool) -> Result<Surface> {
    let mut lifted: Vec<Point> = pts.iter().map(|&xy| Point::from_xy(xy, z)).collect();
    if facing_down {
        lifted.reverse();
    }
    let surface_type = if facing_down {
        SurfaceType::Floor
    } else {
        SurfaceType::RoofCeiling
    };
    Ok(Surface::new(name, Polygon::new(name, lifted)?, surface_type))
}

/// Vertical quad over the plan edge `a -> b`, facing right of the edge.
fn wall(name: &str, a: (f64, f64), b: (f64, f64), z0: f64, z1: f64) -> Result<Surface> {
    let pts = vec![
        Point::from_xy(a, z0),
        Point::from_xy(b, z0),
        Point::from_xy(b, z1),
        Point::from_xy(a, z1),
    ];
    Ok(Surface::new(name, Polygon::new(name, pts)?, SurfaceType::Wall))
}
