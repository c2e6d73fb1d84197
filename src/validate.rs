use std::collections::HashSet;

use crate::geometry::{ImageSize, TileSize};

/// Whether `tile` and `ordering` describe a rearrangement of `image`.
///
/// True exactly when the tile area divides the image area and no tile index
/// appears twice in `ordering`.
///
/// Only areas are compared: a 3x8 image accepts a 4x6 tile even though
/// neither axis tiles cleanly. The ordering is not compared against the tile
/// count either, so short, long or out-of-range orderings pass as long as they
/// are free of duplicates. A zero-area tile is rejected.
pub fn valid_input(image: ImageSize, tile: TileSize, ordering: &[usize]) -> bool {
    let tile_area = tile.area();
    if tile_area == 0 {
        return false;
    }
    image.area() % tile_area == 0 && has_no_duplicates(ordering)
}

fn has_no_duplicates(ordering: &[usize]) -> bool {
    let mut seen = HashSet::with_capacity(ordering.len());
    ordering.iter().all(|order| seen.insert(*order))
}
