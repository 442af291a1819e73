use anyhow::Result;
use building_shapes::io::write_json;
use building_shapes::{
    Building, StoryParams, generate_courtyard, generate_h, generate_l, generate_rectangle,
    generate_t, generate_u,
};

fn report(building: &Building) {
    println!("{}", building.name);
    println!("  floor area:     {:10.1} m2", building.floor_area());
    println!(
        "  exterior walls: {:4} ({:10.1} m2)",
        building.exterior_walls().len(),
        building.exterior_wall_area()
    );
    println!(
        "  roofs:          {:4} ({:10.1} m2)",
        building.roofs().len(),
        building.roof_area()
    );
    println!("  ground area:    {:10.1} m2", building.ground_area());
    println!("  volume:         {:10.1} m3", building.volume());
}

fn main() -> Result<()> {
    let params = StoryParams {
        above_ground_stories: 3,
        plenum_height: 1.0,
        ..StoryParams::default()
    };
    let (length, width) = (100.0, 80.0);

    let buildings = vec![
        generate_rectangle(length, width, &params)?,
        generate_courtyard(length, width, length / 3.0, width / 3.0, &params)?,
        generate_l(length, width, width / 3.0, length / 3.0, &params)?,
        generate_t(length, width, width / 3.0, length / 3.0, length / 3.0, &params)?,
        generate_h(
            length,
            width,
            width / 3.0,
            width,
            length / 3.0,
            length / 3.0,
            width / 3.0,
            width / 3.0,
            &params,
        )?,
        generate_u(
            length,
            length / 3.0,
            length / 3.0,
            2.0 * width / 3.0,
            2.0 * width / 3.0,
            width / 3.0,
            &params,
        )?,
    ];

    for building in &buildings {
        report(building);
    }

    let out = std::env::temp_dir().join(format!(
        "{}_{}.json",
        buildings[0].name,
        buildings[0].uid.short()
    ));
    write_json(&out, &buildings[0])?;
    println!("saved {}", out.display());

    Ok(())
}
