use std::path::Path;

use crate::raster::{load_raster, save_raster};
use crate::{TileError, TileSize};

/// Rearrange the tiles of the image at `image_path` and write the result to
/// `out_path`.
///
/// The image is decoded as 8-bit RGB before anything else, so an unreadable
/// input fails with [`TileError::Decode`] without looking at `tile` or
/// `ordering`. An arrangement rejected by [`crate::valid_input`] fails with
/// [`TileError::InvalidArrangement`]. In both cases, and whenever the copy plan
/// does not fit, `out_path` is not touched.
///
/// The output format is taken from the extension of `out_path`.
pub fn rearrange_tiles(
    image_path: impl AsRef<Path>,
    tile: TileSize,
    ordering: &[usize],
    out_path: impl AsRef<Path>,
) -> Result<(), TileError> {
    let src = load_raster(image_path)?;
    let out = crate::imgref::rearrange(src.as_ref(), tile, ordering)?;
    save_raster(out.as_ref(), out_path)
}
