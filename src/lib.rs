//! # placegrid-rs
//!
//! A deterministic, bidirectional mapping between geographic lng/lat
//! coordinates and compact integer place IDs on a fixed 0.01 x 0.01 degree
//! global grid.
//!
//! There are currently three main entry points.
//!
//! ### 1. `Place` - Single Cell Operations
//!
//! ```
//! use placegrid_rs::Place;
//!
//! # fn main() -> Result<(), placegrid_rs::PlaceGridError> {
//! let place = Place::from_lng_lat(&(100.0, 50.0))?;
//! println!("{}", place.id);
//! let polygon = place.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PlaceGrid` - Collections of Cells
//!
//! ```
//! use placegrid_rs::PlaceGrid;
//! use geo_types::point;
//!
//! let grid = PlaceGrid::builder()
//!     .extent(-0.51, 51.28, -0.49, 51.3)
//!     .build();
//!
//! let pt = point! { x: -0.5, y: 51.29 };
//! if let Some(place) = grid.get_place_at(&pt) {
//!     println!("{}", place.id);
//! }
//! ```
//!
//! ### 3. Raw identifier functions
//!
//! ```
//! use placegrid_rs::{PlaceId, decode_place_id, enclosing_place_id};
//!
//! # fn main() -> Result<(), placegrid_rs::PlaceGridError> {
//! let id = enclosing_place_id(&(100.0, 50.0))?;
//! assert_eq!(id.as_u64(), 18_827_182_083);
//! assert!(decode_place_id(PlaceId(2)).is_none());
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use api::{Place, PlaceGrid, PlaceGridBuilder};
pub use core::{
    BlockPlace, CELL_SIZE_DEG, MAX_PLACE_ID, MIN_PLACE_ID, PLACE_ID_TAG, block_place_to_southwest,
    bounds_from_place_id, place_ids_for_sized_block, place_ids_in_bounds, point_to_block_place,
    sized_bounds_from_place_id, southwest_corner_of_place_id,
};
pub use util::{
    LngLat, PlaceGridError, PlaceId, decode_place_id, enclosing_place_id, generate_place_id,
};

pub use geo_types;
pub use geojson;
