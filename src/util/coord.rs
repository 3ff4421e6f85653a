use geo_types::Point;

/// Trait for types that can supply a longitude/latitude pair in signed degrees.
///
/// Implemented for `(f64, f64)` tuples (lng, lat) and `geo_types::Point<f64>`
/// (x = longitude, y = latitude), so grid functions accept either.
pub trait LngLat {
    fn lng(&self) -> f64;
    fn lat(&self) -> f64;
}

impl LngLat for (f64, f64) {
    fn lng(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl LngLat for Point<f64> {
    fn lng(&self) -> f64 {
        Point::x(*self)
    }
    fn lat(&self) -> f64 {
        Point::y(*self)
    }
}
