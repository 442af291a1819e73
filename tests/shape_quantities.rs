//! End-to-end quantity checks for all six shape families.
//!
//! Every case compares generated floor, wall, roof and ground quantities
//! against closed-form expectations derived from the input dimensions.

use building_shapes::{
    Building, Result, ShapeError, StoryParams, generate_courtyard, generate_h, generate_l,
    generate_rectangle, generate_t, generate_u,
};

const AREA_TOL: f64 = 0.1;

fn assert_quantities(
    building: &Building,
    floor_area: f64,
    wall_count: usize,
    wall_area: f64,
    roof_count: usize,
    roof_area: f64,
) {
    let name = &building.name;
    assert!(
        (building.floor_area() - floor_area).abs() < AREA_TOL,
        "{name}: floor area {} != {floor_area}",
        building.floor_area()
    );
    assert_eq!(building.exterior_walls().len(), wall_count, "{name}: wall count");
    assert!(
        (building.exterior_wall_area() - wall_area).abs() < AREA_TOL,
        "{name}: wall area {} != {wall_area}",
        building.exterior_wall_area()
    );
    assert_eq!(building.roofs().len(), roof_count, "{name}: roof count");
    assert!(
        (building.roof_area() - roof_area).abs() < AREA_TOL,
        "{name}: roof area {} != {roof_area}",
        building.roof_area()
    );
}

#[test]
fn test_small_rectangle() -> Result<()> {
    let bdg = generate_rectangle(25., 20., &StoryParams::default())?;
    assert_quantities(&bdg, 500.0, 4, 342.0, 5, 500.0);
    assert!((bdg.ground_area() - 500.0).abs() < AREA_TOL);
    Ok(())
}

#[test]
fn test_rectangle_tower_with_basements() -> Result<()> {
    let params = StoryParams {
        above_ground_stories: 5,
        below_ground_stories: 3,
        ..StoryParams::default()
    };
    let bdg = generate_rectangle(100., 80., &params)?;
    // 8 stories of 8000 m2 each; walls only above grade.
    assert_quantities(&bdg, 64000.0, 20, 6840.0, 5, 8000.0);
    // Ground contact: the footprint plus three levels of basement walls.
    assert!((bdg.ground_area() - (8000.0 + 3.8 * 360.0 * 3.0)).abs() < AREA_TOL);
    Ok(())
}

#[test]
fn test_courtyard() -> Result<()> {
    let (length, width) = (50.0, 200.0);
    let bdg = generate_courtyard(
        length,
        width,
        length / 3.0,
        width / 3.0,
        &StoryParams::default(),
    )?;
    let plate = length * width * 8.0 / 9.0;
    let perimeter = (8.0 / 3.0) * (length + width);
    assert_quantities(&bdg, plate, 8, 3.8 * perimeter, 12, plate);
    Ok(())
}

#[test]
fn test_l_shape() -> Result<()> {
    let (length, width) = (100.0, 80.0);
    let bdg = generate_l(length, width, width / 3.0, length / 3.0, &StoryParams::default())?;
    let plate = length * width * 5.0 / 9.0;
    assert_quantities(&bdg, plate, 6, 3.8 * 2.0 * (length + width), 8, plate);
    Ok(())
}

#[test]
fn test_t_shape() -> Result<()> {
    let (length, width) = (100.0, 80.0);
    let bdg = generate_t(
        length,
        width,
        width / 3.0,
        length / 3.0,
        length / 3.0,
        &StoryParams::default(),
    )?;
    let plate = length * width * 5.0 / 9.0;
    assert_quantities(&bdg, plate, 8, 3.8 * 2.0 * (length + width), 10, plate);
    Ok(())
}

#[test]
fn test_h_shape_five_stories() -> Result<()> {
    let (length, width) = (100.0, 80.0);
    let params = StoryParams {
        above_ground_stories: 5,
        ..StoryParams::default()
    };
    let bdg = generate_h(
        length,
        width,
        width / 3.0,
        width,
        length / 3.0,
        length / 3.0,
        width / 3.0,
        width / 3.0,
        &params,
    )?;
    let plate = length * width * 7.0 / 9.0;
    let perimeter = (10.0 / 3.0) * width + 2.0 * length;
    assert_quantities(&bdg, plate * 5.0, 60, 3.8 * perimeter * 5.0, 15, plate);
    Ok(())
}

#[test]
fn test_u_shape() -> Result<()> {
    let (length, width) = (100.0, 80.0);
    let bdg = generate_u(
        length,
        length / 3.0,
        length / 3.0,
        2.0 * width / 3.0,
        2.0 * width / 3.0,
        width / 3.0,
        &StoryParams::default(),
    )?;
    let plate = length * width * 7.0 / 9.0;
    let perimeter = (10.0 / 3.0) * width + 2.0 * length;
    assert_quantities(&bdg, plate, 8, 3.8 * perimeter, 11, plate);
    Ok(())
}

#[test]
fn test_plenum_does_not_change_quantities() -> Result<()> {
    let without = generate_rectangle(25., 20., &StoryParams::default())?;
    let with = generate_rectangle(
        25.,
        20.,
        &StoryParams {
            plenum_height: 1.0,
            ..StoryParams::default()
        },
    )?;
    assert!((with.floor_area() - without.floor_area()).abs() < 1e-9);
    assert_eq!(with.exterior_walls().len(), without.exterior_walls().len());
    assert!((with.exterior_wall_area() - without.exterior_wall_area()).abs() < 1e-9);
    assert_eq!(with.roofs().len(), without.roofs().len());
    assert!((with.roof_area() - without.roof_area()).abs() < 1e-9);
    // The plenum slice still belongs to the enclosed volume.
    assert!((with.volume() - 500.0 * 3.8).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_ground_area_scales_with_basements() -> Result<()> {
    for below in [0u32, 1, 3] {
        let params = StoryParams {
            above_ground_stories: 2,
            below_ground_stories: below,
            ..StoryParams::default()
        };
        let bdg = generate_rectangle(100., 80., &params)?;
        let expected = 8000.0 + 3.8 * 360.0 * below as f64;
        assert!(
            (bdg.ground_area() - expected).abs() < AREA_TOL,
            "below={below}: {} != {expected}",
            bdg.ground_area()
        );
    }
    Ok(())
}

#[test]
fn test_exterior_surface_area_is_walls_plus_roofs() -> Result<()> {
    let bdg = generate_l(100., 80., 80. / 3., 100. / 3., &StoryParams::default())?;
    let expected = bdg.exterior_wall_area() + bdg.roof_area();
    assert!((bdg.exterior_surface_area() - expected).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_queries_are_idempotent() -> Result<()> {
    let bdg = generate_courtyard(50., 200., 50. / 3., 200. / 3., &StoryParams::default())?;
    assert_eq!(bdg.floor_area(), bdg.floor_area());
    assert_eq!(bdg.exterior_walls().len(), bdg.exterior_walls().len());
    assert_eq!(bdg.roof_area(), bdg.roof_area());
    Ok(())
}

#[test]
fn test_invalid_courtyard_names_parameter() {
    let result = generate_courtyard(50., 200., 50., 200. / 3., &StoryParams::default());
    match result {
        Err(ShapeError::InvalidGeometry { param, .. }) => {
            assert_eq!(param, "courtyard_length");
        }
        other => panic!("expected InvalidGeometry, got {other:?}"),
    }
}

#[test]
fn test_invalid_zone_depth() {
    let params = StoryParams {
        perimeter_zone_depth: 10.0,
        ..StoryParams::default()
    };
    assert!(matches!(
        generate_rectangle(25., 20., &params),
        Err(ShapeError::InvalidZoning { .. })
    ));
}

#[test]
fn test_generated_buildings_validate() -> Result<()> {
    let params = StoryParams {
        above_ground_stories: 2,
        below_ground_stories: 1,
        plenum_height: 1.0,
        ..StoryParams::default()
    };
    let buildings = vec![
        generate_rectangle(100., 80., &params)?,
        generate_courtyard(100., 80., 100. / 3., 80. / 3., &params)?,
        generate_l(100., 80., 80. / 3., 100. / 3., &params)?,
        generate_t(100., 80., 80. / 3., 100. / 3., 100. / 3., &params)?,
        generate_h(
            100.,
            80.,
            80. / 3.,
            80.,
            100. / 3.,
            100. / 3.,
            80. / 3.,
            80. / 3.,
            &params,
        )?,
        generate_u(
            100.,
            100. / 3.,
            100. / 3.,
            2.0 * 80. / 3.,
            2.0 * 80. / 3.,
            80. / 3.,
            &params,
        )?,
    ];
    for bdg in &buildings {
        bdg.validate()?;
    }
    Ok(())
}
