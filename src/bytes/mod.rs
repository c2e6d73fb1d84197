// ---------------------------------------------------------------------------
// Byte-level tile rearrangement between strided buffers.
//
// Every other entry point funnels into `rearrange_strided`: validate the
// arrangement, plan all copies, then zero the destination and copy rows.
// ---------------------------------------------------------------------------

use crate::geometry::{ImageSize, TileCopy, TileSize, plan_copies};
use crate::{SizeError, TileError, valid_input};


// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    let row_bytes = width.checked_mul(bpp).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    if width == 0 || height == 0 {
        return Ok(());
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Row kernels
// ===========================================================================

fn zero_rows(buf: &mut [u8], width: usize, height: usize, stride: usize, bpp: usize) {
    let row_bytes = width * bpp;
    for y in 0..height {
        let start = y * stride;
        buf[start..start + row_bytes].fill(0);
    }
}

fn copy_tile(
    src: &[u8],
    dst: &mut [u8],
    src_stride: usize,
    dst_stride: usize,
    bpp: usize,
    copy: &TileCopy,
) {
    let from = copy.source;
    let to = copy.destination;
    if to.is_empty() {
        return;
    }
    log::trace!(
        "tile {} <- {}: {}x{} at ({}, {}) from ({}, {})",
        copy.position,
        copy.order,
        to.width,
        to.height,
        to.x,
        to.y,
        from.x,
        from.y
    );
    let row_bytes = to.width * bpp;
    for row in 0..to.height {
        let s = copy.source_row(row) * src_stride + from.x * bpp;
        let d = (to.y + row) * dst_stride + to.x * bpp;
        let dst_row = &mut dst[d..d + row_bytes];
        if copy.repeats_column() {
            let px = &src[s..s + bpp];
            for out in dst_row.chunks_exact_mut(bpp) {
                out.copy_from_slice(px);
            }
        } else {
            dst_row.copy_from_slice(&src[s..s + row_bytes]);
        }
    }
}

// ===========================================================================
// Public API
// ===========================================================================

/// Rearrange the tiles of a strided image into a strided destination.
///
/// `src_stride` / `dst_stride` are the distances in bytes between the start of
/// consecutive rows; each must be ≥ `width × bpp`. Padding bytes between rows
/// are never read or written.
///
/// Tile `ordering[i]` of the source lands at position `i` of the destination,
/// both addressed along the image diagonal (see [`crate::geometry`]). Pixels
/// no tile reaches are zeroed. On error the destination is left untouched.
#[allow(clippy::too_many_arguments)]
pub fn rearrange_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
    bpp: usize,
    tile: TileSize,
    ordering: &[usize],
) -> Result<(), TileError> {
    if bpp == 0 {
        return Err(SizeError::ZeroBytesPerPixel.into());
    }
    check_strided(src.len(), width, height, src_stride, bpp)?;
    check_strided(dst.len(), width, height, dst_stride, bpp)?;

    let size = ImageSize::new(width, height);
    if !valid_input(size, tile, ordering) {
        log::debug!(
            "rejecting {}x{} tiles over a {}x{} image with {} orderings",
            tile.width,
            tile.height,
            width,
            height,
            ordering.len()
        );
        return Err(TileError::InvalidArrangement);
    }
    let plan = plan_copies(size, tile, ordering)?;

    zero_rows(dst, width, height, dst_stride, bpp);
    for copy in &plan {
        copy_tile(src, dst, src_stride, dst_stride, bpp, copy);
    }
    Ok(())
}

/// Rearrange the tiles of a tightly packed image (`stride = width × bpp`).
pub fn rearrange(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    bpp: usize,
    tile: TileSize,
    ordering: &[usize],
) -> Result<(), TileError> {
    let stride = width.checked_mul(bpp).ok_or(SizeError::InvalidStride)?;
    rearrange_strided(src, dst, width, height, stride, stride, bpp, tile, ordering)
}
