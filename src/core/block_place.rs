use crate::core::constants::{FRAC_RANGE, LAT_WHOLE_RANGE, LNG_WHOLE_RANGE};
use crate::util::error::PlaceGridError;
use serde::{Deserialize, Serialize};

/// A coordinate decomposed into the unsigned fields of the place grid.
///
/// The signed lng/lat plane is shifted into an all-positive range before
/// packing: longitude by +180 degrees, latitude by +90 degrees, each split
/// into whole degrees and hundredths. The fields name the southwest corner
/// of a cell at `(lng_whole + lng_frac / 100 - 180, lat_whole + lat_frac / 100 - 90)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPlace {
    /// Whole degrees of shifted longitude, valid range [0, 360)
    pub lng_whole: u32,
    /// Hundredths of a degree of longitude, valid range [0, 100)
    pub lng_frac: u32,
    /// Whole degrees of shifted latitude, valid range [0, 180)
    pub lat_whole: u32,
    /// Hundredths of a degree of latitude, valid range [0, 100)
    pub lat_frac: u32,
}

impl BlockPlace {
    /// Create a BlockPlace from raw field values.
    ///
    /// No validation is applied here; call [`BlockPlace::validate`] before
    /// encoding, or [`BlockPlace::is_valid`] to check.
    pub fn new(lng_whole: u32, lng_frac: u32, lat_whole: u32, lat_frac: u32) -> Self {
        Self {
            lng_whole,
            lng_frac,
            lat_whole,
            lat_frac,
        }
    }

    /// Returns true when all four fields are inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.lng_whole < LNG_WHOLE_RANGE
            && self.lng_frac < FRAC_RANGE
            && self.lat_whole < LAT_WHOLE_RANGE
            && self.lat_frac < FRAC_RANGE
    }

    /// Checks all four fields against their valid ranges.
    ///
    /// # Errors
    ///
    /// [`PlaceGridError::InvalidCoordinate`] when any field is out of range.
    pub fn validate(&self) -> Result<(), PlaceGridError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(PlaceGridError::InvalidCoordinate(format!(
                "block place fields out of range: lng {} + {}/100, lat {} + {}/100",
                self.lng_whole, self.lng_frac, self.lat_whole, self.lat_frac
            )))
        }
    }
}
