//! 1D line with a symmetric satisfaction window and bounded travel.

use crate::error::SpaceError;
use crate::topology::Topology;
use enclave_core::Coord;
use smallvec::SmallVec;

/// A one-dimensional strip of cells.
///
/// Cells are addressed as `(x, 0)` for `0 <= x < len`. The
/// satisfaction neighbourhood is the `window` cells on either side,
/// clipped to the board, so end cells see a shorter window.
///
/// `max_travel` is a separate concern from `window`: it bounds how far
/// an agent may relocate in one turn (inclusive), or not at all when
/// `None`. It does not affect who counts as a neighbour.
///
/// `LineStrip` boards advance one agent per tick in round-robin index
/// order rather than by full-board rounds, so this topology is
/// deliberately not [`Planar`](crate::Planar).
///
/// # Examples
///
/// ```
/// use enclave_core::Coord;
/// use enclave_space::{LineStrip, Topology};
///
/// let line = LineStrip::new(10, 2, None).unwrap();
/// assert_eq!(line.neighbours(Coord::new(5, 0)).len(), 4);
/// assert_eq!(line.neighbours(Coord::new(0, 0)).len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct LineStrip {
    len: u32,
    window: u32,
    max_travel: Option<u32>,
}

impl LineStrip {
    /// Maximum length: coordinates use `i32`, so `len` must fit.
    pub const MAX_LEN: u32 = i32::MAX as u32;

    /// Create a line of `len` cells.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptySpace`] if `len == 0`,
    /// [`SpaceError::DimensionTooLarge`] if `len` exceeds
    /// [`MAX_LEN`](Self::MAX_LEN), [`SpaceError::ZeroWindow`] if
    /// `window == 0`, or [`SpaceError::ZeroTravel`] if `max_travel`
    /// is `Some(0)`.
    pub fn new(len: u32, window: u32, max_travel: Option<u32>) -> Result<Self, SpaceError> {
        if len == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if len > Self::MAX_LEN {
            return Err(SpaceError::DimensionTooLarge {
                name: "len",
                value: len,
                max: Self::MAX_LEN,
            });
        }
        if window == 0 {
            return Err(SpaceError::ZeroWindow);
        }
        if max_travel == Some(0) {
            return Err(SpaceError::ZeroTravel);
        }
        Ok(Self {
            len,
            window,
            max_travel,
        })
    }

    /// Number of cells.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always `false` — construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Satisfaction window radius.
    pub fn window(&self) -> u32 {
        self.window
    }

    /// Relocation distance bound, if any.
    pub fn max_travel(&self) -> Option<u32> {
        self.max_travel
    }
}

impl Topology for LineStrip {
    fn width(&self) -> u32 {
        self.len
    }

    fn height(&self) -> u32 {
        1
    }

    fn ndim(&self) -> usize {
        1
    }

    fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        debug_assert!(self.contains(coord));
        let mut result = SmallVec::new();
        for direction in [-1i32, 1] {
            for distance in 1..=self.window as i32 {
                let x = coord.x + direction * distance;
                if x >= 0 && x < self.len as i32 {
                    result.push(Coord::new(x, 0));
                }
            }
        }
        result
    }
}
