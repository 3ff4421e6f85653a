use crate::core::constants::{CELL_SIZE_DEG, FRAC_RANGE, LAT_WHOLE_RANGE, LNG_WHOLE_RANGE};
use crate::core::grid::block_place_to_southwest;
use crate::util::error::PlaceGridError;
use crate::util::identifier::{PlaceId, decode_place_id, enclosing_place_id};
use geo_types::{Point, Rect, coord};

/// Corner clamp for the enumeration: the world spans [-18000, 18000)
/// hundredths of a degree of longitude and [-9000, 9000) of latitude.
const LNG_CENTI_LIMIT: i64 = (LNG_WHOLE_RANGE as i64 / 2) * FRAC_RANGE as i64;
const LAT_CENTI_LIMIT: i64 = (LAT_WHOLE_RANGE as i64 / 2) * FRAC_RANGE as i64;

/// Returns the signed southwest corner of a place cell.
///
/// `None` when `id` does not decode to an in-range block place.
pub fn southwest_corner_of_place_id(id: PlaceId) -> Option<Point<f64>> {
    let block = decode_place_id(id)?;
    Some(block_place_to_southwest(&block))
}

/// Returns the bounding box of a single place cell.
///
/// The box runs from the cell's southwest corner to the corner 0.01 degrees
/// east and north of it. `None` when `id` does not decode.
///
/// # Example
/// ```
/// use placegrid_rs::{PlaceId, bounds_from_place_id};
///
/// let bounds = bounds_from_place_id(PlaceId(18_827_182_083)).unwrap();
/// assert_eq!((bounds.min().x, bounds.min().y), (100.0, 50.0));
/// assert_eq!((bounds.max().x, bounds.max().y), (100.01, 50.01));
/// ```
pub fn bounds_from_place_id(id: PlaceId) -> Option<Rect<f64>> {
    let block = decode_place_id(id)?;
    Some(cell_bounds(block_place_to_southwest(&block)))
}

/// Returns the bounding box of an N x N block of cells.
///
/// The origin cell `id` is the northwest corner of the block, which expands
/// east and south from it. A size of 1 is the single-cell box.
///
/// # Errors
///
/// [`PlaceGridError::InvalidSize`] when `size < 1`. An undecodable `id` is
/// reported as `Ok(None)` instead, matching [`bounds_from_place_id`].
pub fn sized_bounds_from_place_id(
    id: PlaceId,
    size: u32,
) -> Result<Option<Rect<f64>>, PlaceGridError> {
    if size < 1 {
        return Err(PlaceGridError::InvalidSize(size));
    }

    let origin = match bounds_from_place_id(id) {
        Some(bounds) => bounds,
        None => return Ok(None),
    };

    Ok(Some(expand_from_northwest(&origin, size)))
}

/// Lists the place IDs of every cell covered by a bounding box.
///
/// Both corners are snapped to integer hundredths of a degree
/// (`round(deg * 100)`) and iteration runs in that integer space, half-open
/// at the northeast edge, so float drift cannot add or drop a row of cells.
/// Each covered cell is identified from a sample point 0.001 degrees inside
/// its southwest corner.
///
/// IDs come back in longitude-major, latitude-minor order, ascending in
/// both. The result is empty when the box spans less than one cell in
/// either dimension. Corner indices are clamped to longitude [-180, 180) /
/// latitude [-90, 90) before iteration, so a box reaching past the edge of
/// the world enumerates only its in-world cells and a non-finite corner
/// clamps instead of overflowing the iteration space.
///
/// # Example
/// ```
/// use geo_types::{Rect, coord};
/// use placegrid_rs::place_ids_in_bounds;
///
/// let bounds = Rect::new(
///     coord! { x: 99.995, y: 49.995 },
///     coord! { x: 100.015, y: 50.015 },
/// );
/// assert_eq!(place_ids_in_bounds(&bounds).len(), 4);
/// ```
pub fn place_ids_in_bounds(bounds: &Rect<f64>) -> Vec<PlaceId> {
    let sw_lng = centi_index(bounds.min().x, LNG_CENTI_LIMIT);
    let sw_lat = centi_index(bounds.min().y, LAT_CENTI_LIMIT);
    let ne_lng = centi_index(bounds.max().x, LNG_CENTI_LIMIT);
    let ne_lat = centi_index(bounds.max().y, LAT_CENTI_LIMIT);

    // NaN corners bypass Rect's corner ordering and can leave sw past ne.
    let lng_steps = (ne_lng - sw_lng).max(0);
    let lat_steps = (ne_lat - sw_lat).max(0);

    let mut ids = Vec::with_capacity((lng_steps * lat_steps) as usize);
    for i in 0..lng_steps {
        let lng = (sw_lng + i) as f64 / 100.0;
        for j in 0..lat_steps {
            let lat = (sw_lat + j) as f64 / 100.0;

            if let Ok(id) = enclosing_place_id(&(lng + 0.001, lat + 0.001)) {
                ids.push(id);
            }
        }
    }

    ids
}

/// Lists the place IDs of an N x N block anchored at a northwest origin cell.
///
/// Composes [`sized_bounds_from_place_id`] with [`place_ids_in_bounds`]: the
/// IDs come back in longitude-major order, and a block that stays inside the
/// representable range contains exactly N squared cells with the origin as
/// the northernmost cell of the westernmost column.
///
/// # Errors
///
/// [`PlaceGridError::InvalidSize`] when `size < 1`; `Ok(None)` when the
/// origin does not decode.
pub fn place_ids_for_sized_block(
    id: PlaceId,
    size: u32,
) -> Result<Option<Vec<PlaceId>>, PlaceGridError> {
    let bounds = match sized_bounds_from_place_id(id, size)? {
        Some(bounds) => bounds,
        None => return Ok(None),
    };

    Ok(Some(place_ids_in_bounds(&bounds)))
}

pub(crate) fn cell_bounds(sw: Point<f64>) -> Rect<f64> {
    Rect::new(
        coord! { x: sw.x(), y: sw.y() },
        coord! { x: sw.x() + CELL_SIZE_DEG, y: sw.y() + CELL_SIZE_DEG },
    )
}

pub(crate) fn expand_from_northwest(origin: &Rect<f64>, size: u32) -> Rect<f64> {
    let extra = (size - 1) as f64 * CELL_SIZE_DEG;
    Rect::new(
        coord! { x: origin.min().x, y: origin.min().y - extra },
        coord! { x: origin.max().x + extra, y: origin.max().y },
    )
}

fn centi_index(deg: f64, limit: i64) -> i64 {
    // The saturating cast turns non-finite values into clampable integers.
    ((deg * 100.0).round() as i64).clamp(-limit, limit)
}
