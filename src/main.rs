use placegrid_rs::{Place, PlaceGrid, PlaceGridError};

fn main() -> Result<(), PlaceGridError> {
    let lng = -2.2479699500757597;
    let lat = 53.48082746395233;

    let place = Place::from_lng_lat(&(lng, lat))?;

    println!("Place ID: {}", place.id);
    println!("Southwest corner: ({}, {})", place.lng(), place.lat());
    println!("Center: {:?}", place.center());
    println!("Bounds: {:?}", place.bounds());

    let block = place.block_ids(3)?;
    println!("3x3 block covers {} places", block.len());

    let grid = PlaceGrid::builder().extent(-2.26, 53.47, -2.23, 53.5).build();
    println!("Viewport grid contains {} places", grid.len());

    Ok(())
}
