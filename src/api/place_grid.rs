use crate::api::place::Place;
use crate::core::bounds::{place_ids_in_bounds, sized_bounds_from_place_id};
use crate::util::coord::LngLat;
use crate::util::error::PlaceGridError;
use crate::util::identifier::{PlaceId, enclosing_place_id};
use geo_types::{Polygon, Rect, coord};
use geojson::FeatureCollection;

/// A collection of place cells covering a bounding box.
#[derive(Debug, Clone)]
pub struct PlaceGrid {
    places: Vec<Place>,
}

impl PlaceGrid {
    pub fn builder() -> PlaceGridBuilder {
        PlaceGridBuilder::new()
    }

    pub fn from_extent(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        Self::from_bounds(&Rect::new(
            coord! { x: min_lng, y: min_lat },
            coord! { x: max_lng, y: max_lat },
        ))
    }

    pub fn from_bounds(bounds: &Rect<f64>) -> Self {
        let places = place_ids_in_bounds(bounds)
            .into_iter()
            .filter_map(Place::from_place_id)
            .collect();

        Self { places }
    }

    /// Grid covering the N x N block with the origin cell as its northwest
    /// corner.
    ///
    /// # Errors
    ///
    /// [`PlaceGridError::InvalidSize`] when `size < 1`; `Ok(None)` when the
    /// origin does not decode.
    pub fn from_sized_block(id: PlaceId, size: u32) -> Result<Option<Self>, PlaceGridError> {
        let bounds = match sized_bounds_from_place_id(id, size)? {
            Some(bounds) => bounds,
            None => return Ok(None),
        };

        Ok(Some(Self::from_bounds(&bounds)))
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    pub fn place_ids(&self) -> Vec<PlaceId> {
        self.places.iter().map(|place| place.id).collect()
    }

    pub fn get_place_at<C: LngLat>(&self, point: &C) -> Option<&Place> {
        let id = enclosing_place_id(point).ok()?;
        self.places.iter().find(|place| place.id == id)
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&Place>
    where
        F: Fn(&Place) -> bool,
    {
        self.places.iter().filter(|place| predicate(place)).collect()
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.places.iter().map(|place| place.to_polygon()).collect()
    }

    /// Converts the grid to a GeoJSON feature collection.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.places.iter().map(|place| place.to_feature()).collect(),
            foreign_members: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct PlaceGridBuilder {
    min_lng: Option<f64>,
    min_lat: Option<f64>,
    max_lng: Option<f64>,
    max_lat: Option<f64>,
}

impl PlaceGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extent(mut self, min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        self.min_lng = Some(min_lng);
        self.min_lat = Some(min_lat);
        self.max_lng = Some(max_lng);
        self.max_lat = Some(max_lat);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.min_lng = Some(rect.min().x);
        self.min_lat = Some(rect.min().y);
        self.max_lng = Some(rect.max().x);
        self.max_lat = Some(rect.max().y);
        self
    }

    pub fn build(self) -> PlaceGrid {
        let min_lng = self.min_lng.expect("extent must be set");
        let min_lat = self.min_lat.expect("extent must be set");
        let max_lng = self.max_lng.expect("extent must be set");
        let max_lat = self.max_lat.expect("extent must be set");

        PlaceGrid::from_extent(min_lng, min_lat, max_lng, max_lat)
    }
}
