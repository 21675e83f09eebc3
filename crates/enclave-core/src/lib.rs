//! Core types for the Enclave segregation model.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Enclave workspace:
//! lattice coordinates, species identifiers, the move log, and the
//! domain error taxonomy shared by every board operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod log;
pub mod species;

pub use coord::Coord;
pub use error::BoardError;
pub use log::{Move, MoveLog};
pub use species::Species;
