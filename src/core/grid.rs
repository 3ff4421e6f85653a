use crate::core::block_place::BlockPlace;
use crate::core::constants::{LAT_WHOLE_RANGE, LNG_WHOLE_RANGE};
use crate::util::coord::LngLat;
use crate::util::error::PlaceGridError;
use geo_types::Point;

/// Decomposes a signed lng/lat point into the block place of its enclosing cell.
///
/// Each coordinate is floored toward the southwest corner, so a point exactly
/// on a cell boundary belongs to the cell east/north of that boundary.
pub fn point_to_block_place<C: LngLat>(point: &C) -> Result<BlockPlace, PlaceGridError> {
    let lng_whole = point.lng().floor() + 180.0;
    let lat_whole = point.lat().floor() + 90.0;

    // A NaN coordinate fails both range checks, so non-finite input is
    // rejected here as well.
    if !(0.0..LNG_WHOLE_RANGE as f64).contains(&lng_whole)
        || !(0.0..LAT_WHOLE_RANGE as f64).contains(&lat_whole)
    {
        return Err(PlaceGridError::InvalidCoordinate(format!(
            "point ({}, {}) outside longitude [-180, 180) / latitude [-90, 90)",
            point.lng(),
            point.lat()
        )));
    }

    let lng_frac = ((point.lng() - lng_whole + 180.0) * 100.0).floor();
    let lat_frac = ((point.lat() - lat_whole + 90.0) * 100.0).floor();

    let block = BlockPlace::new(
        lng_whole as u32,
        lng_frac as u32,
        lat_whole as u32,
        lat_frac as u32,
    );
    block.validate()?;
    Ok(block)
}

/// Reconstructs the signed southwest corner of a block place's cell.
///
/// The corner is rounded to two decimals so repeated conversions cannot
/// accumulate floating-point drift.
pub fn block_place_to_southwest(block: &BlockPlace) -> Point<f64> {
    let lng = block.lng_whole as f64 + block.lng_frac as f64 / 100.0 - 180.0;
    let lat = block.lat_whole as f64 + block.lat_frac as f64 / 100.0 - 90.0;

    Point::new(round_hundredths(lng), round_hundredths(lat))
}

fn round_hundredths(deg: f64) -> f64 {
    (deg * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_point_to_block_place() -> Result<(), PlaceGridError> {
        let block = point_to_block_place(&(100.0, 50.0))?;
        assert_eq!(block, BlockPlace::new(280, 0, 140, 0));
        Ok(())
    }

    #[test]
    fn test_point_to_block_place_with_point() -> Result<(), PlaceGridError> {
        let pt = point! { x: -2.2479699500757597, y: 53.48082746395233 };
        let block = point_to_block_place(&pt)?;
        assert_eq!(block, BlockPlace::new(177, 75, 143, 48));
        Ok(())
    }

    #[test]
    fn test_negative_coordinates_floor_southwest() -> Result<(), PlaceGridError> {
        let block = point_to_block_place(&(-0.005, -0.005))?;
        assert_eq!(block, BlockPlace::new(179, 99, 89, 99));
        Ok(())
    }

    #[test]
    fn test_boundary_point_belongs_to_cell_east_north() -> Result<(), PlaceGridError> {
        let block = point_to_block_place(&(0.0, 0.0))?;
        assert_eq!(block, BlockPlace::new(180, 0, 90, 0));
        Ok(())
    }

    #[test]
    fn test_world_southwest_corner() -> Result<(), PlaceGridError> {
        let block = point_to_block_place(&(-180.0, -90.0))?;
        assert_eq!(block, BlockPlace::new(0, 0, 0, 0));
        Ok(())
    }

    #[test]
    fn test_rejects_out_of_range_points() {
        assert!(point_to_block_place(&(180.0, 0.0)).is_err());
        assert!(point_to_block_place(&(0.0, 90.0)).is_err());
        assert!(point_to_block_place(&(-180.01, 0.0)).is_err());
        assert!(point_to_block_place(&(0.0, -90.5)).is_err());
    }

    #[test]
    fn test_rejects_non_finite_points() {
        assert!(point_to_block_place(&(f64::NAN, 0.0)).is_err());
        assert!(point_to_block_place(&(0.0, f64::NAN)).is_err());
        assert!(point_to_block_place(&(f64::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn test_southwest_corner_reconstruction() {
        let sw = block_place_to_southwest(&BlockPlace::new(279, 99, 139, 99));
        assert_eq!(sw.x(), 99.99);
        assert_eq!(sw.y(), 49.99);
    }

    #[test]
    fn test_southwest_of_first_cell() {
        let sw = block_place_to_southwest(&BlockPlace::new(0, 0, 0, 0));
        assert_eq!(sw.x(), -180.0);
        assert_eq!(sw.y(), -90.0);
    }

    #[test]
    fn test_decompose_then_reconstruct_floors() -> Result<(), PlaceGridError> {
        let block = point_to_block_place(&(12.345, 53.48082746395233))?;
        let sw = block_place_to_southwest(&block);

        assert_eq!(sw.x(), 12.34);
        assert_eq!(sw.y(), 53.48);
        Ok(())
    }
}
