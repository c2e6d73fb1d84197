//! # retile
//!
//! Cut an image into fixed-size tiles and put them back in a different order.
//!
//! An ordering names, for every output position `i`, the input tile that is
//! copied there. Tiles are addressed along the image diagonal: position `i`
//! is the rectangle at `(i * tile.width, i * tile.height)`. See [`geometry`]
//! for how rectangles that reach past the image are handled.
//!
//! ```rust,no_run
//! use retile::{TileSize, rearrange_tiles};
//!
//! rearrange_tiles("in.png", TileSize::new(32, 32), &[2, 0, 1], "out.png")?;
//! # Ok::<(), retile::TileError>(())
//! ```
//!
//! ## Layers
//!
//! - [`valid_input`]: the go/no-go check on sizes and ordering.
//! - [`bytes`]: strided `&[u8]` buffers with any bytes-per-pixel.
//! - [`imgref`]: `ImgRef` / `ImgVec` images of any [`bytemuck::Pod`] pixel.
//! - [`rearrange_tiles`]: file in, file out, through the [`image`] crate.
//!
//! ## Feature flags
//!
//! - **`png`**, **`jpeg`**, **`bmp`** (default): codecs enabled in [`image`].
//!
//! Progress is reported through the [`log`] facade at `debug` and `trace`
//! level; no logger is installed.

#![forbid(unsafe_code)]

mod error;
mod rearrange;
mod validate;

pub mod bytes;
pub mod geometry;
pub mod imgref;
pub mod raster;

pub use error::{SizeError, TileError};
pub use geometry::{Extent, ImageSize, TileCopy, TileRect, TileSize, plan_copies};
pub use rearrange::rearrange_tiles;
pub use validate::valid_input;
