//! The board: occupancy state, parameters, and the query surface.

use crate::config::{BoardConfig, ConfigError};
use enclave_core::{BoardError, Coord, MoveLog, Species};
use enclave_space::{CellIter, Topology};
use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// A segregation board over some [`Topology`].
///
/// The board owns one `Option<Species>` per cell in row-major rank
/// order, the per-species parameter tables fixed at construction, the
/// optional move log, and the single random stream that every
/// stochastic choice draws from.
///
/// Dimensions and parameters are immutable after construction; after
/// the one-time random fill, occupancy changes only through
/// [`relocate`](Self::relocate) (driven by the update algorithms) or
/// the [`set`](Self::set) escape hatch.
///
/// The board is mutably owned by exactly one caller: `update`/`step`
/// take `&mut self` and run to completion, so no partial-round state
/// is ever observable.
#[derive(Clone, Debug)]
pub struct Board<T: Topology> {
    pub(crate) topo: T,
    pub(crate) cells: Vec<Option<Species>>,
    pub(crate) populations: Vec<usize>,
    pub(crate) thresholds: Vec<f64>,
    pub(crate) biases: Vec<f64>,
    pub(crate) log: Option<MoveLog>,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) max_search_radius: u32,
    /// Round-robin position for the one-agent-per-tick line walk;
    /// untouched by the full-round topologies.
    pub(crate) cursor: usize,
}

impl<T: Topology> Board<T> {
    /// Construct a board and randomly place its initial population.
    ///
    /// Placement generates every cell in canonical order, shuffles the
    /// list once (a uniform random permutation), and assigns the first
    /// N0 cells to species 0, the next N1 to species 1, and so on,
    /// leaving the remainder vacant, for an unbiased initial layout.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from resolving `config` against this
    /// topology's area.
    pub fn new(topo: T, config: BoardConfig) -> Result<Self, ConfigError> {
        let area = topo.cell_count();
        let resolved = config.resolve(area)?;
        let max_search_radius = config
            .max_search_radius
            .unwrap_or_else(|| topo.width().max(topo.height()));

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut order: Vec<Coord> = topo.cells().collect();
        order.shuffle(&mut rng);

        let mut cells = vec![None; area];
        let mut slots = order.into_iter();
        for (species, &count) in resolved.populations.iter().enumerate() {
            for _ in 0..count {
                let coord = slots.next().expect("population validated against area");
                let rank = topo.rank(coord).expect("canonical cells are in bounds");
                cells[rank] = Some(Species(species as u32));
            }
        }

        debug!(
            "board {}x{} filled: populations {:?}, seed {}",
            topo.width(),
            topo.height(),
            resolved.populations,
            config.seed
        );

        Ok(Self {
            topo,
            cells,
            populations: resolved.populations,
            thresholds: resolved.thresholds,
            biases: resolved.biases,
            log: config.record_moves.then(MoveLog::new),
            rng,
            max_search_radius,
            cursor: 0,
        })
    }

    // ── Dimensions and parameters ──────────────────────────────────

    /// The topology this board is built over.
    pub fn topology(&self) -> &T {
        &self.topo
    }

    /// Number of columns (cells for a 1D board).
    pub fn width(&self) -> u32 {
        self.topo.width()
    }

    /// Number of rows (1 for a 1D board).
    pub fn height(&self) -> u32 {
        self.topo.height()
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.topo.cell_count()
    }

    /// Number of species on the board.
    pub fn species_count(&self) -> usize {
        self.populations.len()
    }

    /// Configured population of one species (0 for an unknown id).
    pub fn population(&self, species: Species) -> usize {
        self.populations.get(species.index()).copied().unwrap_or(0)
    }

    /// Total number of agents on the board.
    pub fn total_population(&self) -> usize {
        self.populations.iter().sum()
    }

    /// Number of vacant cells.
    pub fn vacancies(&self) -> usize {
        self.area() - self.total_population()
    }

    /// Satisfaction threshold of one species.
    pub fn threshold(&self, species: Species) -> Option<f64> {
        self.thresholds.get(species.index()).copied()
    }

    /// Proximity bias of one species.
    pub fn proximity_bias(&self, species: Species) -> Option<f64> {
        self.biases.get(species.index()).copied()
    }

    /// The move log, present only when recording was configured.
    pub fn log(&self) -> Option<&MoveLog> {
        self.log.as_ref()
    }

    /// All cells in canonical row-major order (lazy and restartable).
    pub fn cells(&self) -> CellIter {
        self.topo.cells()
    }

    // ── Occupancy ──────────────────────────────────────────────────

    /// The species at `coord`, or `None` for a vacant cell.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if `coord` is not a cell.
    pub fn species_at(&self, coord: Coord) -> Result<Option<Species>, BoardError> {
        Ok(self.cells[self.rank_checked(coord)?])
    }

    /// Overwrite a cell with a species or a vacancy.
    ///
    /// This is a low-level escape hatch for arranging exact scenarios;
    /// it bypasses population bookkeeping, so after using it the
    /// configured populations may no longer describe the grid. Normal
    /// simulation mutates occupancy only through
    /// [`relocate`](Self::relocate).
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if `coord` is not a cell.
    pub fn set(&mut self, coord: Coord, value: Option<Species>) -> Result<(), BoardError> {
        let rank = self.rank_checked(coord)?;
        self.cells[rank] = value;
        Ok(())
    }

    /// Atomically relocate the agent at `origin` to `destination`.
    ///
    /// On success `origin` becomes vacant and `destination` holds its
    /// prior species. On any error the board is unchanged.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if either coordinate is not a cell,
    /// [`BoardError::Vacant`] if `origin` holds no agent, or
    /// [`BoardError::Occupied`] if `destination` already holds one.
    pub fn relocate(&mut self, origin: Coord, destination: Coord) -> Result<(), BoardError> {
        let origin_rank = self.rank_checked(origin)?;
        let dest_rank = self.rank_checked(destination)?;
        let species = self.cells[origin_rank].ok_or(BoardError::Vacant { coord: origin })?;
        if self.cells[dest_rank].is_some() {
            return Err(BoardError::Occupied { coord: destination });
        }
        self.cells[dest_rank] = Some(species);
        self.cells[origin_rank] = None;
        Ok(())
    }

    // ── Satisfaction ───────────────────────────────────────────────

    /// Proportion of occupied neighbours sharing the species at
    /// `coord`, or 0.0 when no neighbour is occupied.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if `coord` is not a cell, or
    /// [`BoardError::Vacant`] if it holds no agent.
    pub fn conspecificity(&self, coord: Coord) -> Result<f64, BoardError> {
        let species = self
            .species_at(coord)?
            .ok_or(BoardError::Vacant { coord })?;
        let mut occupied = 0usize;
        let mut alike = 0usize;
        for neighbour in self.topo.neighbours(coord) {
            if let Some(other) = self.species_at(neighbour)? {
                occupied += 1;
                if other == species {
                    alike += 1;
                }
            }
        }
        if occupied == 0 {
            return Ok(0.0);
        }
        Ok(alike as f64 / occupied as f64)
    }

    /// True iff the agent's conspecificity meets its species'
    /// threshold (at-or-above; a threshold of 0 is always met).
    ///
    /// # Errors
    ///
    /// As [`conspecificity`](Self::conspecificity).
    pub fn is_satisfied(&self, coord: Coord) -> Result<bool, BoardError> {
        let species = self
            .species_at(coord)?
            .ok_or(BoardError::Vacant { coord })?;
        Ok(self.conspecificity(coord)? >= self.thresholds[species.index()])
    }

    /// Number of satisfied agents on the board.
    pub fn total_satisfied(&self) -> usize {
        self.cells()
            .filter(|&c| matches!(self.is_satisfied(c), Ok(true)))
            .count()
    }

    /// Proportion of agents that are satisfied.
    pub fn proportion_satisfied(&self) -> f64 {
        let total = self.total_population();
        if total == 0 {
            return 0.0;
        }
        self.total_satisfied() as f64 / total as f64
    }

    /// Mean conspecificity over all agents on the grid.
    pub fn mean_conspecificity(&self) -> f64 {
        let mut sum = 0.0;
        let mut counted = 0usize;
        for coord in self.cells() {
            if let Ok(c) = self.conspecificity(coord) {
                sum += c;
                counted += 1;
            }
        }
        if counted == 0 {
            return 0.0;
        }
        sum / counted as f64
    }

    // ── Internals ──────────────────────────────────────────────────

    pub(crate) fn rank_checked(&self, coord: Coord) -> Result<usize, BoardError> {
        self.topo
            .rank(coord)
            .ok_or(BoardError::OutOfBounds { coord })
    }
}

impl<T: Topology> fmt::Display for Board<T> {
    /// One row per line, species ids separated by spaces, `*` for a
    /// vacant cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                if x > 0 {
                    write!(f, " ")?;
                }
                match self.cells[y as usize * self.width() as usize + x as usize] {
                    Some(species) => write!(f, "{species}")?,
                    None => write!(f, "*")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
