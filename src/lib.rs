//! Parametric rectilinear building-shape generation.
//!
//! Builds 3D building envelopes (floor plates, walls, roofs, ground-contact
//! surfaces) from footprint dimensions, story counts and zoning parameters.
//! Six shape families are supported: rectangle, courtyard, L, T, H and U.
//! Every generated building satisfies exact, closed-form area and count
//! invariants, which makes the output directly checkable:
//!
//! ```
//! use building_shapes::{StoryParams, generate_rectangle};
//!
//! let building = generate_rectangle(25.0, 20.0, &StoryParams::default())?;
//! assert_eq!(building.exterior_walls().len(), 4);
//! assert!((building.floor_area() - 500.0).abs() < 0.1);
//! # Ok::<(), building_shapes::ShapeError>(())
//! ```

pub mod classify;
pub mod error;
pub mod extrude;
pub mod footprint;
pub mod generate;
pub mod geom;
pub mod io;
pub mod model;
pub mod name;
pub mod uid;
pub mod vecutils;
pub mod zoning;

pub use error::{Result, ShapeError};
pub use extrude::StoryParams;
pub use generate::{
    generate, generate_courtyard, generate_h, generate_l, generate_rectangle, generate_t,
    generate_u,
};
pub use geom::point::Point;
pub use geom::polygon::Polygon;
pub use geom::vector::Vector;
pub use model::building::Building;
pub use model::space::Space;
pub use model::story::Story;
pub use model::surface::{BoundaryCondition, Surface, SurfaceType};
pub use uid::UID;
