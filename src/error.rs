use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::Extent;

/// Buffer geometry problems in the byte-level and typed entry points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum SizeError {
    /// A buffer is shorter than `(height - 1) * stride + width * bpp` bytes,
    /// or a row is wider than its stride.
    #[error("buffer is too small for the given width, height and stride")]
    InvalidStride,
    /// Source and destination images differ in width or height.
    #[error("source and destination dimensions differ")]
    DimensionMismatch,
    /// Pixels must occupy at least one byte.
    #[error("bytes per pixel must be non-zero")]
    ZeroBytesPerPixel,
}

/// Everything that can go wrong while rearranging tiles.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TileError {
    /// The tile area does not divide the image area, or the ordering repeats
    /// a tile index.
    #[error("The tile size or ordering are not valid for the given image")]
    InvalidArrangement,

    /// After clipping to the image, a source tile cannot fill its destination.
    #[error(
        "tile at position {position} (source tile {order}) spans {source_extent} \
         inside the image but its destination spans {destination}"
    )]
    ShapeMismatch {
        position: usize,
        order: usize,
        source_extent: Extent,
        destination: Extent,
    },

    #[error(transparent)]
    Size(#[from] SizeError),

    #[error("could not decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not encode image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
