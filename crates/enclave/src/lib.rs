//! Enclave: a Schelling-style segregation simulation engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Enclave sub-crates. For most users, adding `enclave` as a
//! single dependency is sufficient.
//!
//! Agents of distinct species occupy cells of a lattice and relocate
//! when dissatisfied with the species mix of their neighbourhood. The
//! engine owns the grid state machine and its transition rule only:
//! rendering, animation, and interactive drivers consume it through
//! the read-only query surface and call one advance operation between
//! frames.
//!
//! # Quick start
//!
//! ```rust
//! use enclave::prelude::*;
//!
//! // A 16x16 grid, two species of 60 agents each, satisfied at 40%
//! // conspecificity or better.
//! let mut board = Board::new(
//!     SquareGrid::new(16, 16).unwrap(),
//!     BoardConfig {
//!         population: Some(PopulationSpec::Counts(vec![60, 60])),
//!         thresholds: Some(ParamSpec::Uniform(0.4)),
//!         record_moves: true,
//!         seed: 42,
//!         ..BoardConfig::default()
//!     },
//! )
//! .unwrap();
//!
//! while board.proportion_satisfied() < 1.0 && board.log().unwrap().len() < 50 {
//!     board.update();
//! }
//!
//! assert_eq!(board.total_population(), 120);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `enclave-core` | coordinates, species ids, the move log, domain errors |
//! | [`space`] | `enclave-space` | shell geometry, the `Topology` trait, lattice backends |
//! | [`board`] | `enclave-board` | board state, configuration, update algorithms |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: coordinates, species ids, the move log, and domain
/// errors (`enclave-core`).
pub use enclave_core as types;

/// Shell geometry and lattice topologies (`enclave-space`).
///
/// Provides the [`space::Topology`] trait and concrete backends:
/// [`space::SquareGrid`], [`space::BlockGrid`], [`space::LineStrip`].
pub use enclave_space as space;

/// Board state, configuration, and the update algorithms
/// (`enclave-board`).
pub use enclave_board as board;

/// Common imports for typical Enclave usage.
///
/// ```rust
/// use enclave::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use enclave_core::{BoardError, Coord, Move, MoveLog, Species};

    // Space
    pub use enclave_space::{shell, BlockGrid, LineStrip, SpaceError, SquareGrid, Topology};

    // Board
    pub use enclave_board::{
        Board, BoardConfig, ConfigError, ParamSpec, PopulationSpec, DEFAULT_PROXIMITY_BIAS,
    };
}
