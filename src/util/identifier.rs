use crate::core::block_place::BlockPlace;
use crate::core::constants::{
    FIELD_MASK, LAT_FRAC_SHIFT, LAT_WHOLE_SHIFT, LNG_FRAC_SHIFT, LNG_WHOLE_MASK, LNG_WHOLE_SHIFT,
    MAX_PLACE_ID, MIN_PLACE_ID, PLACE_ID_TAG,
};
use crate::core::grid::point_to_block_place;
use crate::util::coord::LngLat;
use crate::util::error::PlaceGridError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Packed integer identifier for one 0.01 x 0.01 degree place cell.
///
/// Serializes as a bare JSON number, so IDs interchange directly with
/// systems that store them as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct PlaceId(pub u64);

impl PlaceId {
    /// Returns the raw packed value.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Wraps a raw value without validation; [`decode_place_id`] checks it.
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Returns true when the two lowest bits carry the place ID tag.
    pub fn has_tag(self) -> bool {
        self.0 & PLACE_ID_TAG == PLACE_ID_TAG
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PlaceId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<PlaceId> for u64 {
    fn from(id: PlaceId) -> Self {
        id.0
    }
}

/// Generates the place ID for a decomposed block place.
///
/// # Bit Layout
///
/// The four fields pack into a single integer at fixed offsets,
/// most-significant field first:
///
/// | Bits  | Field       | Range | Description                                 |
/// |-------|-------------|-------|---------------------------------------------|
/// | 26+   | `lng_whole` | 0-359 | Whole degrees of longitude, shifted +180    |
/// | 18-25 | `lat_whole` | 0-179 | Whole degrees of latitude, shifted +90      |
/// | 10-17 | `lng_frac`  | 0-99  | Hundredths of a degree of longitude         |
/// | 2-9   | `lat_frac`  | 0-99  | Hundredths of a degree of latitude          |
/// | 0-1   | tag         | 0b11  | Always set; marks the integer as a place ID |
///
/// IDs range from [`MIN_PLACE_ID`] (the cell at -180, -90) to
/// [`MAX_PLACE_ID`] (the cell at 179.99, 89.99). An ID is only meaningful
/// under this exact field order.
///
/// # Example
/// ```
/// use placegrid_rs::{BlockPlace, generate_place_id};
///
/// # fn main() -> Result<(), placegrid_rs::PlaceGridError> {
/// // Southwest corner (100.0, 50.0)
/// let id = generate_place_id(BlockPlace::new(280, 0, 140, 0))?;
/// assert_eq!(id.as_u64(), 18_827_182_083);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`PlaceGridError::InvalidCoordinate`] when any field is out of range.
pub fn generate_place_id(block: BlockPlace) -> Result<PlaceId, PlaceGridError> {
    block.validate()?;

    let packed = ((block.lng_whole as u64) << LNG_WHOLE_SHIFT)
        | ((block.lat_whole as u64) << LAT_WHOLE_SHIFT)
        | ((block.lng_frac as u64) << LNG_FRAC_SHIFT)
        | ((block.lat_frac as u64) << LAT_FRAC_SHIFT);

    Ok(PlaceId(packed | PLACE_ID_TAG))
}

/// Decodes a place ID back to its block place.
///
/// Returns `None` instead of failing: arbitrary integers are legitimately
/// probed as place IDs and "not a place" is the expected answer for them.
/// An integer is rejected when it falls outside
/// `[MIN_PLACE_ID, MAX_PLACE_ID]` or when any extracted field is out of
/// range. The tag bits themselves are not inspected, so an untagged integer
/// inside the range decodes to its field values; re-encoding the result
/// restores the canonical tagged form.
///
/// Exact inverse of [`generate_place_id`] for every ID it can produce.
///
/// # Example
/// ```
/// use placegrid_rs::{PlaceId, decode_place_id};
///
/// let block = decode_place_id(PlaceId(18_827_182_083)).unwrap();
/// assert_eq!((block.lng_whole, block.lat_whole), (280, 140));
/// assert!(decode_place_id(PlaceId(2)).is_none());
/// ```
pub fn decode_place_id(id: PlaceId) -> Option<BlockPlace> {
    let raw = id.as_u64();
    if !(MIN_PLACE_ID..=MAX_PLACE_ID).contains(&raw) {
        return None;
    }

    let block = BlockPlace::new(
        ((raw >> LNG_WHOLE_SHIFT) & LNG_WHOLE_MASK) as u32,
        ((raw >> LNG_FRAC_SHIFT) & FIELD_MASK) as u32,
        ((raw >> LAT_WHOLE_SHIFT) & FIELD_MASK) as u32,
        ((raw >> LAT_FRAC_SHIFT) & FIELD_MASK) as u32,
    );

    // The range bound caps lng_whole, but the other masks are wider than
    // their fields and can extract out-of-range values.
    if !block.is_valid() {
        return None;
    }

    Some(block)
}

/// Returns the place ID of the cell enclosing a signed lng/lat point.
///
/// A point exactly on a cell boundary belongs to the cell east/north of
/// that boundary.
///
/// # Example
/// ```
/// use placegrid_rs::enclosing_place_id;
///
/// # fn main() -> Result<(), placegrid_rs::PlaceGridError> {
/// let id = enclosing_place_id(&(100.0, 50.0))?;
/// assert_eq!(id.as_u64(), 18_827_182_083);
/// # Ok(())
/// # }
/// ```
pub fn enclosing_place_id<C: LngLat>(point: &C) -> Result<PlaceId, PlaceGridError> {
    let block = point_to_block_place(point)?;
    generate_place_id(block)
}
