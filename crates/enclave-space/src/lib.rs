//! Neighbourhood geometry and lattice topologies for the Enclave
//! segregation model.
//!
//! This crate defines the [`Topology`] trait, the neighbour relation
//! through which every satisfaction query flows, along with the
//! [`shell`] ring generator used by the expanding relocation search and
//! three concrete lattice backends.
//!
//! # Backends
//!
//! - [`SquareGrid`]: 2D grid; neighbours are the Chebyshev ring at a
//!   configurable radius, clipped at the board edge
//! - [`BlockGrid`]: 2D grid partitioned into fixed non-overlapping
//!   blocks; neighbours are the rest of the block
//! - [`LineStrip`]: 1D line with a symmetric window and an optional
//!   bound on relocation distance

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod error;
pub mod line;
pub mod shell;
pub mod square;
pub mod topology;

pub use block::BlockGrid;
pub use error::SpaceError;
pub use line::LineStrip;
pub use shell::{shell, Shell};
pub use square::SquareGrid;
pub use topology::{CellIter, Planar, Topology};
