//! 2D grid partitioned into fixed non-overlapping blocks.

use crate::error::SpaceError;
use crate::topology::{Planar, Topology};
use enclave_core::Coord;
use smallvec::SmallVec;

/// A two-dimensional grid whose satisfaction neighbourhood is the rest
/// of the cell's block.
///
/// The board is tiled by `block x block` squares; block membership is
/// determined by integer-dividing each axis by the block size. Every
/// cell's neighbourhood is every *other* cell of its block, so the
/// relation is symmetric and never shrinks at board edges: blocks are
/// always full-sized because both dimensions must be divisible by the
/// block size.
///
/// # Examples
///
/// ```
/// use enclave_core::Coord;
/// use enclave_space::{BlockGrid, SpaceError, Topology};
///
/// let grid = BlockGrid::new(4, 4, 2).unwrap();
/// assert_eq!(grid.neighbours(Coord::new(0, 0)).len(), 3);
///
/// // 4 is not divisible by 3.
/// assert!(matches!(
///     BlockGrid::new(4, 4, 3),
///     Err(SpaceError::BlockMismatch { .. })
/// ));
/// ```
#[derive(Clone, Debug)]
pub struct BlockGrid {
    width: u32,
    height: u32,
    block: u32,
}

impl BlockGrid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a block-partitioned grid.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptySpace`] if any of the three sizes is
    /// 0, [`SpaceError::DimensionTooLarge`] if a dimension exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), or [`SpaceError::BlockMismatch`] if
    /// `block` does not evenly divide both dimensions.
    pub fn new(width: u32, height: u32, block: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 || block == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        if width % block != 0 || height % block != 0 {
            return Err(SpaceError::BlockMismatch {
                width,
                height,
                block,
            });
        }
        Ok(Self {
            width,
            height,
            block,
        })
    }

    /// Side length of a block.
    pub fn block_size(&self) -> u32 {
        self.block
    }

    /// Top-left corner of the block containing `coord`.
    fn block_origin(&self, coord: Coord) -> Coord {
        let b = self.block as i32;
        Coord::new(coord.x / b * b, coord.y / b * b)
    }
}

impl Topology for BlockGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn ndim(&self) -> usize {
        2
    }

    fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        debug_assert!(self.contains(coord));
        let origin = self.block_origin(coord);
        let b = self.block as i32;
        let mut result = SmallVec::new();
        for y in origin.y..origin.y + b {
            for x in origin.x..origin.x + b {
                let cell = Coord::new(x, y);
                if cell != coord {
                    result.push(cell);
                }
            }
        }
        result
    }
}

impl Planar for BlockGrid {}
