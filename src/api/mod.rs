pub mod place;
pub mod place_grid;

pub use place::Place;
pub use place_grid::{PlaceGrid, PlaceGridBuilder};
