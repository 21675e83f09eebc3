//! 2D square grid with ring neighbourhoods.

use crate::error::SpaceError;
use crate::shell::shell;
use crate::topology::{Planar, Topology};
use enclave_core::Coord;
use smallvec::SmallVec;

/// A two-dimensional square grid whose satisfaction neighbourhood is
/// the Chebyshev ring at a fixed radius, clipped at the board edge.
///
/// With the default radius of 1 this is the familiar 8-connected Moore
/// neighbourhood. Cells on the boundary simply have fewer neighbours
/// (a corner sees 3 instead of 8). That shrinkage is intentional: edge
/// agents judge satisfaction against whoever is actually adjacent.
///
/// At radii above 1 the neighbourhood is the ring at exactly that
/// distance, not the filled disk.
///
/// # Examples
///
/// ```
/// use enclave_core::Coord;
/// use enclave_space::{SquareGrid, Topology};
///
/// let grid = SquareGrid::new(5, 5).unwrap();
/// assert_eq!(grid.neighbours(Coord::new(2, 2)).len(), 8);
/// assert_eq!(grid.neighbours(Coord::new(0, 0)).len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct SquareGrid {
    width: u32,
    height: u32,
    shell_radius: u32,
}

impl SquareGrid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with the standard radius-1 ring neighbourhood.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptySpace`] if either dimension is 0, or
    /// [`SpaceError::DimensionTooLarge`] if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        Self::with_shell_radius(width, height, 1)
    }

    /// Create a grid whose neighbourhood is the ring at `shell_radius`.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new), plus [`SpaceError::ZeroRadius`] if
    /// `shell_radius == 0`.
    pub fn with_shell_radius(
        width: u32,
        height: u32,
        shell_radius: u32,
    ) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
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
        if shell_radius == 0 {
            return Err(SpaceError::ZeroRadius);
        }
        Ok(Self {
            width,
            height,
            shell_radius,
        })
    }

    /// Radius of the satisfaction ring.
    pub fn shell_radius(&self) -> u32 {
        self.shell_radius
    }
}

impl Topology for SquareGrid {
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
        shell(coord, self.shell_radius)
            .expect("shell radius validated at construction")
            .filter(|c| self.contains(*c))
            .collect()
    }
}

impl Planar for SquareGrid {}
