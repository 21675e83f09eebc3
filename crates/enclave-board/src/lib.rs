//! Board state and update algorithms for the Enclave segregation
//! model.
//!
//! A [`Board`] maps every cell of a topology to a species or vacancy,
//! owns the per-species parameter tables, and advances by exactly one
//! transition: [`Board::update`] for the 2D full-round variants, or
//! [`Board::step`] for the one-agent-per-tick line.
//!
//! All randomness (the initial placement shuffle, per-round processing
//! order, per-agent search shuffles, and expansion coin flips) draws
//! from a single ChaCha8 stream seeded at construction, so a fixed
//! [`BoardConfig::seed`] reproduces a run exactly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;

mod linear;
mod update;

pub use board::Board;
pub use config::{BoardConfig, ConfigError, ParamSpec, PopulationSpec, DEFAULT_PROXIMITY_BIAS};
