pub mod block_place;
pub mod bounds;
pub mod constants;
pub mod grid;

pub use block_place::BlockPlace;
pub use bounds::{
    bounds_from_place_id, place_ids_for_sized_block, place_ids_in_bounds,
    sized_bounds_from_place_id, southwest_corner_of_place_id,
};
pub use constants::{CELL_SIZE_DEG, MAX_PLACE_ID, MIN_PLACE_ID, PLACE_ID_TAG};
pub use grid::{block_place_to_southwest, point_to_block_place};
