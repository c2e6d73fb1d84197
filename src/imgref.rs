//! Tile rearrangement on [`imgref`] images of any [`bytemuck::Pod`] pixel.
//!
//! Strides are honoured on both sides, so sub-images and padded buffers work
//! without copying. The pixel bytes are handed to [`crate::bytes`].
//!
//! # Caller-provided destination
//!
//! ```rust
//! use rgb::Rgb;
//! use ::imgref::{ImgRefMut, ImgVec};
//! use retile::{TileSize, imgref};
//!
//! let src = ImgVec::new(vec![Rgb::new(255u8, 0, 0); 16], 4, 4);
//! let mut dst_buf = vec![Rgb::default(); 16];
//! let dst = ImgRefMut::new(&mut dst_buf[..], 4, 4);
//! imgref::rearrange_into(src.as_ref(), dst, TileSize::new(2, 2), &[1, 0]).unwrap();
//! ```
//!
//! # Allocating
//!
//! ```rust
//! use rgb::Rgba;
//! use ::imgref::ImgVec;
//! use retile::{TileSize, imgref};
//!
//! let src = ImgVec::new(vec![Rgba::new(1u8, 2, 3, 4); 64], 8, 8);
//! let out = imgref::rearrange(src.as_ref(), TileSize::new(4, 4), &[0, 1]).unwrap();
//! assert_eq!(out.buf()[0], Rgba::new(1, 2, 3, 4));
//! ```

use core::mem::size_of;

use bytemuck::{Pod, Zeroable};
use imgref::{ImgRef, ImgRefMut, ImgVec};

use crate::{SizeError, TileError, TileSize};

fn check_dims(sw: usize, sh: usize, dw: usize, dh: usize) -> Result<(), SizeError> {
    if sw != dw || sh != dh {
        Err(SizeError::DimensionMismatch)
    } else {
        Ok(())
    }
}

/// Rearrange the tiles of `src` into `dst`, which must have the same size.
///
/// Pixels no tile reaches are zeroed. On error `dst` is left untouched.
pub fn rearrange_into<P: Pod>(
    src: ImgRef<'_, P>,
    mut dst: ImgRefMut<'_, P>,
    tile: TileSize,
    ordering: &[usize],
) -> Result<(), TileError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    let bpp = size_of::<P>();
    if bpp == 0 {
        return Err(SizeError::ZeroBytesPerPixel.into());
    }
    let width = src.width();
    let height = src.height();
    let src_stride = src.stride().checked_mul(bpp).ok_or(SizeError::InvalidStride)?;
    let dst_stride = dst.stride().checked_mul(bpp).ok_or(SizeError::InvalidStride)?;

    let src_px: &[P] = src.buf();
    let dst_px: &mut [P] = dst.buf_mut();
    crate::bytes::rearrange_strided(
        bytemuck::cast_slice(src_px),
        bytemuck::cast_slice_mut(dst_px),
        width,
        height,
        src_stride,
        dst_stride,
        bpp,
        tile,
        ordering,
    )
}

/// Rearrange the tiles of `src` into a newly allocated, tightly packed image.
pub fn rearrange<P: Pod>(
    src: ImgRef<'_, P>,
    tile: TileSize,
    ordering: &[usize],
) -> Result<ImgVec<P>, TileError> {
    let width = src.width();
    let height = src.height();
    let len = width.checked_mul(height).ok_or(SizeError::InvalidStride)?;
    let mut buf = vec![P::zeroed(); len];
    rearrange_into(src, ImgRefMut::new(&mut buf[..], width, height), tile, ordering)?;
    Ok(ImgVec::new(buf, width, height))
}
