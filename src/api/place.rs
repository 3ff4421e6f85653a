use crate::core::block_place::BlockPlace;
use crate::core::bounds::{cell_bounds, expand_from_northwest, place_ids_in_bounds};
use crate::core::constants::CELL_SIZE_DEG;
use crate::core::grid::{block_place_to_southwest, point_to_block_place};
use crate::util::coord::LngLat;
use crate::util::error::PlaceGridError;
use crate::util::identifier::{PlaceId, decode_place_id, generate_place_id};
use geo_types::{Point, Polygon, Rect};
use geojson::{Feature, JsonObject};

/// A single cell of the place grid.
///
/// Each `Place` pairs a packed [`PlaceId`] with the decomposed block place
/// it encodes and the signed southwest corner of its 0.01 x 0.01 degree cell.
///
/// # Example
///
/// ```
/// use placegrid_rs::Place;
///
/// # fn main() -> Result<(), placegrid_rs::PlaceGridError> {
/// let place = Place::from_lng_lat(&(100.0, 50.0))?;
/// println!("Place ID: {}", place.id);
/// println!("Southwest corner: ({}, {})", place.lng(), place.lat());
///
/// // Convert to polygon for GIS operations
/// let polygon = place.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Packed integer identifier for this cell
    pub id: PlaceId,
    /// Decomposed grid position backing the identifier
    pub block: BlockPlace,
    /// Southwest corner of the cell in signed degrees
    pub southwest: Point<f64>,
}

impl Place {
    pub(crate) fn new(id: PlaceId, block: BlockPlace, southwest: Point<f64>) -> Self {
        Self {
            id,
            block,
            southwest,
        }
    }

    /// Create a Place from the signed lng/lat point it encloses
    ///
    /// # Example
    /// ```
    /// use placegrid_rs::Place;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), placegrid_rs::PlaceGridError> {
    /// // From tuple
    /// let place = Place::from_lng_lat(&(-2.248, 53.481))?;
    /// // From Point
    /// let place = Place::from_lng_lat(&Point::new(-2.248, 53.481))?;
    /// println!("Place ID: {}", place.id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_lng_lat(point: &impl LngLat) -> Result<Self, PlaceGridError> {
        let block = point_to_block_place(point)?;
        let id = generate_place_id(block)?;

        Ok(Self::new(id, block, block_place_to_southwest(&block)))
    }

    /// Create a Place from a packed identifier
    ///
    /// Returns `None` when the identifier does not decode to an in-range
    /// block place.
    ///
    /// # Example
    /// ```
    /// use placegrid_rs::Place;
    ///
    /// # fn main() -> Result<(), placegrid_rs::PlaceGridError> {
    /// let place = Place::from_lng_lat(&(100.0, 50.0))?;
    /// let restored = Place::from_place_id(place.id).unwrap();
    /// assert_eq!(place, restored);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_place_id(id: PlaceId) -> Option<Self> {
        let block = decode_place_id(id)?;
        Some(Self::new(id, block, block_place_to_southwest(&block)))
    }

    /// Returns the longitude of the cell's southwest corner in signed degrees.
    pub fn lng(&self) -> f64 {
        self.southwest.x()
    }

    /// Returns the latitude of the cell's southwest corner in signed degrees.
    pub fn lat(&self) -> f64 {
        self.southwest.y()
    }

    /// Returns the center point of the cell.
    pub fn center(&self) -> Point<f64> {
        Point::new(
            self.southwest.x() + CELL_SIZE_DEG / 2.0,
            self.southwest.y() + CELL_SIZE_DEG / 2.0,
        )
    }

    /// Returns the bounding box of this cell.
    pub fn bounds(&self) -> Rect<f64> {
        cell_bounds(self.southwest)
    }

    /// Returns the bounding box of the N x N block with this cell as its
    /// northwest corner.
    ///
    /// # Errors
    ///
    /// [`PlaceGridError::InvalidSize`] when `size < 1`.
    pub fn sized_bounds(&self, size: u32) -> Result<Rect<f64>, PlaceGridError> {
        if size < 1 {
            return Err(PlaceGridError::InvalidSize(size));
        }
        Ok(expand_from_northwest(&self.bounds(), size))
    }

    /// Returns the place IDs of the N x N block with this cell as its
    /// northwest corner, in longitude-major order.
    pub fn block_ids(&self, size: u32) -> Result<Vec<PlaceId>, PlaceGridError> {
        Ok(place_ids_in_bounds(&self.sized_bounds(size)?))
    }

    /// Converts this cell to a rectangular polygon.
    ///
    /// Returns a `geo_types::Polygon` tracing the cell boundary, suitable
    /// for spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds().to_polygon()
    }

    /// Converts this cell to a GeoJSON feature.
    ///
    /// The feature carries the cell polygon as its geometry, the place ID as
    /// the numeric feature id, and a `place_id` property.
    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert(
            "place_id".to_string(),
            serde_json::Value::from(self.id.as_u64()),
        );

        Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&self.to_polygon())),
            id: Some(geojson::feature::Id::Number(self.id.as_u64().into())),
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lng_lat_tuple() -> Result<(), PlaceGridError> {
        let place = Place::from_lng_lat(&(100.0, 50.0))?;

        assert_eq!(place.id, PlaceId(18_827_182_083));
        assert_eq!(place.block, BlockPlace::new(280, 0, 140, 0));
        assert_eq!((place.lng(), place.lat()), (100.0, 50.0));
        Ok(())
    }

    #[test]
    fn test_from_lng_lat_point() -> Result<(), PlaceGridError> {
        let point = Point::new(-2.2479699500757597, 53.48082746395233);
        let place = Place::from_lng_lat(&point)?;

        assert_eq!(place.id, PlaceId(11_915_832_515));
        assert_eq!((place.lng(), place.lat()), (-2.25, 53.48));
        Ok(())
    }

    #[test]
    fn test_from_place_id_roundtrip() -> Result<(), PlaceGridError> {
        let place = Place::from_lng_lat(&(100.0, 50.0))?;
        let restored = Place::from_place_id(place.id).unwrap();

        assert_eq!(place, restored);
        Ok(())
    }

    #[test]
    fn test_from_undecodable_place_id() {
        assert!(Place::from_place_id(PlaceId(0)).is_none());
    }

    #[test]
    fn test_same_point_same_place() -> Result<(), PlaceGridError> {
        // The same point should always return the same place
        let place1 = Place::from_lng_lat(&(100.0, 50.0))?;
        let place2 = Place::from_lng_lat(&(100.0, 50.0))?;
        assert_eq!(place1.id, place2.id);

        // A point inside the cell should be in the same place
        let place3 = Place::from_lng_lat(&(place1.lng() + 0.005, place1.lat() + 0.005))?;
        assert_eq!(place1.id, place3.id);
        Ok(())
    }

    #[test]
    fn test_center_re_encloses_to_same_place() -> Result<(), PlaceGridError> {
        let place = Place::from_lng_lat(&(100.0, 50.0))?;
        let center = place.center();

        assert_eq!((center.x(), center.y()), (100.005, 50.005));
        assert_eq!(Place::from_lng_lat(&center)?.id, place.id);
        Ok(())
    }

    #[test]
    fn test_bounds_span_one_cell() -> Result<(), PlaceGridError> {
        let place = Place::from_lng_lat(&(100.0, 50.0))?;
        let bounds = place.bounds();

        assert_eq!(bounds.min().x, 100.0);
        assert_eq!(bounds.min().y, 50.0);
        assert_eq!(bounds.max().x, 100.01);
        assert_eq!(bounds.max().y, 50.01);
        Ok(())
    }

    #[test]
    fn test_sized_bounds_and_block_ids() -> Result<(), PlaceGridError> {
        let place = Place::from_lng_lat(&(100.0, 50.0))?;

        let bounds = place.sized_bounds(2)?;
        assert!((bounds.width() - 0.02).abs() < 1e-9);
        assert!((bounds.height() - 0.02).abs() < 1e-9);

        let ids = place.block_ids(2)?;
        assert_eq!(ids.len(), 4);
        assert!(ids.contains(&place.id));
        Ok(())
    }

    #[test]
    fn test_block_ids_rejects_zero_size() -> Result<(), PlaceGridError> {
        let place = Place::from_lng_lat(&(100.0, 50.0))?;
        assert_eq!(place.block_ids(0), Err(PlaceGridError::InvalidSize(0)));
        Ok(())
    }

    #[test]
    fn test_to_polygon() -> Result<(), PlaceGridError> {
        let place = Place::from_lng_lat(&(100.0, 50.0))?;
        let polygon = place.to_polygon();

        assert_eq!(polygon.exterior().coords().count(), 5);
        Ok(())
    }

    #[test]
    fn test_to_feature() -> Result<(), PlaceGridError> {
        let place = Place::from_lng_lat(&(100.0, 50.0))?;
        let feature = place.to_feature();

        assert!(feature.geometry.is_some());
        assert_eq!(
            feature.property("place_id").and_then(|v| v.as_u64()),
            Some(18_827_182_083)
        );
        Ok(())
    }
}
