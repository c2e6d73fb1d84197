//! Decoding files into 8-bit RGB rasters and encoding them back.
//!
//! Gray and alpha inputs are converted to three channels; alpha is dropped.
//! The output format follows the extension of the destination path.

use std::path::Path;

use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, RgbImage};
use imgref::{ImgRef, ImgVec};
use rgb::Rgb;

use crate::TileError;

/// Decode the image at `path` into a tightly packed RGB raster.
pub fn load_raster(path: impl AsRef<Path>) -> Result<ImgVec<Rgb<u8>>, TileError> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|source| TileError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let buffer = decoded.to_rgb8();
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    log::debug!("decoded {} as {}x{} rgb8", path.display(), width, height);

    let pixels: Vec<Rgb<u8>> = match bytemuck::allocation::try_cast_vec(buffer.into_raw()) {
        Ok(pixels) => pixels,
        // Capacity not a multiple of three; fall back to one copy.
        Err((_, raw)) => bytemuck::cast_slice(&raw[..]).to_vec(),
    };
    Ok(ImgVec::new(pixels, width, height))
}

/// Encode `img` to `path`, choosing the format from the file extension.
pub fn save_raster(img: ImgRef<'_, Rgb<u8>>, path: impl AsRef<Path>) -> Result<(), TileError> {
    let path = path.as_ref();
    let encode_err = |source: ImageError| TileError::Encode {
        path: path.to_path_buf(),
        source,
    };
    let dimension_err = || {
        encode_err(ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        )))
    };

    let width = u32::try_from(img.width()).map_err(|_| dimension_err())?;
    let height = u32::try_from(img.height()).map_err(|_| dimension_err())?;
    let mut raw = Vec::with_capacity(img.width() * img.height() * 3);
    for row in img.rows() {
        raw.extend_from_slice(bytemuck::cast_slice::<Rgb<u8>, u8>(row));
    }
    let buffer = RgbImage::from_raw(width, height, raw).ok_or_else(dimension_err)?;
    buffer.save(path).map_err(encode_err)?;
    log::debug!("encoded {}x{} rgb8 to {}", width, height, path.display());
    Ok(())
}
