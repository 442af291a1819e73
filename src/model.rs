//! Building model: surfaces owned by spaces, spaces by stories, stories by
//! the building.

pub mod building;
pub mod space;
pub mod story;
pub mod surface;
