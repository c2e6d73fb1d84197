//! Tile rectangles and the copy plan shared by every entry point.
//!
//! Tiles are addressed by a single scalar. Position `i` in the ordering names
//! the destination rectangle at `(i * tile.width, i * tile.height)`, and the
//! value stored there names the source rectangle the same way. Both axes use
//! the same scalar, so tiles walk down the main diagonal of the image rather
//! than across a row-major grid:
//!
//! ```text
//!  4x4 image, 2x2 tiles
//!
//!  +----+----+
//!  | 0  |    |
//!  +----+----+
//!  |    | 1  |      positions 2 and 3 fall outside the image
//!  +----+----+
//! ```
//!
//! Rectangles that reach past the image are clipped to it. A clipped source
//! fills its clipped destination when each axis either matches or is a single
//! row/column, which is then repeated.

use core::fmt;

use crate::TileError;

/// Pixel dimensions of an image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ImageSize {
    pub width: usize,
    pub height: usize,
}

impl ImageSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total pixel count. Never overflows.
    pub const fn area(self) -> u128 {
        self.width as u128 * self.height as u128
    }
}

/// Pixel dimensions of one tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileSize {
    pub width: usize,
    pub height: usize,
}

impl TileSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Pixel count of one tile. Never overflows.
    pub const fn area(self) -> u128 {
        self.width as u128 * self.height as u128
    }
}

/// Width and height of a clipped rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    pub width: usize,
    pub height: usize,
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct TileRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl TileRect {
    /// The unclipped rectangle for tile scalar `index`.
    ///
    /// Coordinates saturate instead of wrapping; a saturated rectangle lies
    /// outside any real image and clips to empty.
    pub const fn at(index: usize, tile: TileSize) -> Self {
        Self {
            x: index.saturating_mul(tile.width),
            y: index.saturating_mul(tile.height),
            width: tile.width,
            height: tile.height,
        }
    }

    /// Clamp both edges of each axis to `bounds`.
    pub fn clip(self, bounds: ImageSize) -> Self {
        let x = self.x.min(bounds.width);
        let y = self.y.min(bounds.height);
        let right = self.x.saturating_add(self.width).min(bounds.width);
        let bottom = self.y.saturating_add(self.height).min(bounds.height);
        Self {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }

    pub const fn extent(self) -> Extent {
        Extent {
            width: self.width,
            height: self.height,
        }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One planned tile copy, already clipped to the image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileCopy {
    /// Index into the ordering.
    pub position: usize,
    /// Value of the ordering at `position`.
    pub order: usize,
    pub source: TileRect,
    pub destination: TileRect,
}

impl TileCopy {
    /// Source row feeding destination row `row` of this tile.
    #[inline]
    pub(crate) fn source_row(&self, row: usize) -> usize {
        if self.source.height == 1 {
            self.source.y
        } else {
            self.source.y + row
        }
    }

    /// Whether a single source column is repeated across the destination.
    #[inline]
    pub(crate) fn repeats_column(&self) -> bool {
        self.source.width != self.destination.width
    }
}

#[inline]
fn axis_fits(source: usize, destination: usize) -> bool {
    source == destination || source == 1
}

/// Clip every tile of `ordering` to `image` and check that each source can
/// fill its destination.
///
/// Does not check that the arrangement is valid; see [`crate::valid_input`].
/// Nothing is copied here, so a failing plan never leaves a half-written
/// destination behind.
pub fn plan_copies(
    image: ImageSize,
    tile: TileSize,
    ordering: &[usize],
) -> Result<Vec<TileCopy>, TileError> {
    ordering
        .iter()
        .enumerate()
        .map(|(position, &order)| {
            let destination = TileRect::at(position, tile).clip(image);
            let source = TileRect::at(order, tile).clip(image);
            if !axis_fits(source.width, destination.width)
                || !axis_fits(source.height, destination.height)
            {
                return Err(TileError::ShapeMismatch {
                    position,
                    order,
                    source_extent: source.extent(),
                    destination: destination.extent(),
                });
            }
            Ok(TileCopy {
                position,
                order,
                source,
                destination,
            })
        })
        .collect()
}
