//! Shape-specific building generators.
//!
//! Each generator validates its footprint parameters, zones the plate,
//! extrudes the story stack and classifies every surface. The returned
//! building is complete and is not mutated afterwards by this crate.

use crate::classify::classify;
use crate::error::Result;
use crate::extrude::{StoryParams, extrude};
use crate::footprint::{Courtyard, HShape, LShape, Rectangle, Shape, TShape, UShape};
use crate::model::building::Building;
use crate::zoning::zone_plan;

/// Grade plane elevation; stories at or below it touch the ground.
const GRADE: f64 = 0.0;

/// Generates a building from any shape family.
pub fn generate(shape: &impl Shape, params: &StoryParams) -> Result<Building> {
    let fp = shape.footprint()?;
    let plan = zone_plan(&fp, params.perimeter_zone_depth)?;
    let mut building = extrude(shape.shape_name(), &fp, &plan, params)?;
    classify(&mut building, &fp, GRADE);
    building.validate()?;
    Ok(building)
}

pub fn generate_rectangle(length: f64, width: f64, params: &StoryParams) -> Result<Building> {
    generate(&Rectangle { length, width }, params)
}

pub fn generate_courtyard(
    length: f64,
    width: f64,
    courtyard_length: f64,
    courtyard_width: f64,
    params: &StoryParams,
) -> Result<Building> {
    generate(
        &Courtyard {
            length,
            width,
            courtyard_length,
            courtyard_width,
        },
        params,
    )
}

pub fn generate_l(
    length: f64,
    width: f64,
    lower_end_width: f64,
    upper_end_length: f64,
    params: &StoryParams,
) -> Result<Building> {
    generate(
        &LShape {
            length,
            width,
            lower_end_width,
            upper_end_length,
        },
        params,
    )
}

pub fn generate_t(
    length: f64,
    width: f64,
    upper_end_width: f64,
    lower_end_length: f64,
    left_end_offset: f64,
    params: &StoryParams,
) -> Result<Building> {
    generate(
        &TShape {
            length,
            width,
            upper_end_width,
            lower_end_length,
            left_end_offset,
        },
        params,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn generate_h(
    length: f64,
    left_width: f64,
    center_width: f64,
    right_width: f64,
    left_end_length: f64,
    right_end_length: f64,
    left_upper_end_offset: f64,
    right_upper_end_offset: f64,
    params: &StoryParams,
) -> Result<Building> {
    generate(
        &HShape {
            length,
            left_width,
            center_width,
            right_width,
            left_end_length,
            right_end_length,
            left_upper_end_offset,
            right_upper_end_offset,
        },
        params,
    )
}

pub fn generate_u(
    length: f64,
    left_width: f64,
    right_width: f64,
    left_end_length: f64,
    right_end_length: f64,
    left_end_offset: f64,
    params: &StoryParams,
) -> Result<Building> {
    generate(
        &UShape {
            length,
            left_width,
            right_width,
            left_end_length,
            right_end_length,
            left_end_offset,
        },
        params,
    )
}
