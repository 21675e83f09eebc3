//! Error types for topology construction and geometry.

use std::error::Error;
use std::fmt;

/// Errors arising from topology construction or shell generation.
///
/// All of these are fatal configuration errors: they are raised once,
/// at construction time, and never during simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a topology with zero cells.
    EmptySpace,
    /// A shell was requested at radius zero; shells start at radius 1.
    ZeroRadius,
    /// Block-partitioned dimensions must be divisible by the block size.
    BlockMismatch {
        /// Configured board width.
        width: u32,
        /// Configured board height.
        height: u32,
        /// The block size that fails to divide one of them.
        block: u32,
    },
    /// The satisfaction window of a line must cover at least one cell.
    ZeroWindow,
    /// A maximum travel distance, when bounded, must be at least 1.
    ZeroTravel,
    /// A dimension exceeds what `i32` coordinates can address.
    DimensionTooLarge {
        /// Which dimension ("width", "height", "len").
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The maximum representable value.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "topology must have at least one cell"),
            Self::ZeroRadius => write!(f, "shell radius must be at least 1"),
            Self::BlockMismatch {
                width,
                height,
                block,
            } => write!(
                f,
                "block size {block} must evenly divide both dimensions ({width} x {height})"
            ),
            Self::ZeroWindow => write!(f, "neighbourhood window must be at least 1"),
            Self::ZeroTravel => write!(f, "max travel distance must be at least 1 when bounded"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for SpaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_mismatch_names_both_dimensions() {
        let err = SpaceError::BlockMismatch {
            width: 4,
            height: 4,
            block: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("block size 3"));
        assert!(msg.contains("4 x 4"));
    }
}
