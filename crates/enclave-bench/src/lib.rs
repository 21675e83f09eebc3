//! Benchmark profiles for the Enclave segregation engine.
//!
//! Provides pre-built board profiles so benches and examples agree on
//! what "reference" and "stress" workloads mean:
//!
//! - [`reference_board`]: 64x64 grid (4K cells) at 60% fill
//! - [`stress_board`]: 256x256 grid (64K cells) at 60% fill

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use enclave_board::{Board, BoardConfig, ParamSpec, PopulationSpec};
use enclave_space::SquareGrid;

/// Build a reference benchmark board: 64x64 grid, two species, 60%
/// fill, threshold 0.5.
pub fn reference_board(seed: u64) -> Board<SquareGrid> {
    board(64, seed)
}

/// Build a stress benchmark board: 256x256 grid at the same density.
pub fn stress_board(seed: u64) -> Board<SquareGrid> {
    board(256, seed)
}

fn board(side: u32, seed: u64) -> Board<SquareGrid> {
    Board::new(
        SquareGrid::new(side, side).unwrap(),
        BoardConfig {
            population: Some(PopulationSpec::TotalProportion(0.6)),
            species_count: Some(2),
            thresholds: Some(ParamSpec::Uniform(0.5)),
            seed,
            ..BoardConfig::default()
        },
    )
    .expect("benchmark profile is well-formed")
}
