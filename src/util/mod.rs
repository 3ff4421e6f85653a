pub mod coord;
pub mod error;
pub mod identifier;

pub use coord::LngLat;
pub use error::PlaceGridError;
pub use identifier::{PlaceId, decode_place_id, enclosing_place_id, generate_place_id};
