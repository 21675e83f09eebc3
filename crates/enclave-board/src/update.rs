//! The full-round update for 2D boards.

use crate::board::Board;
use enclave_core::{Coord, Move};
use enclave_space::{shell, Planar};
use log::debug;
use rand::seq::SliceRandom;
use rand::RngExt;

impl<T: Planar> Board<T> {
    /// Run one full round of the simulation.
    ///
    /// Every occupied, unsatisfied cell is collected in canonical
    /// order, the collection is shuffled, and each agent in that order
    /// attempts to relocate. Processing order matters (an earlier
    /// mover can take a spot a later mover wanted), which is why it is
    /// randomized rather than positional.
    ///
    /// An agent's candidate destinations are an expanding union of
    /// shells around its position: starting from radius 1, each
    /// accumulated shell is followed by a coin flip that stops the
    /// expansion with probability equal to the species' proximity
    /// bias, so the search space always contains at least the radius-1
    /// ring and grows geometrically far in the worst case (bounded by
    /// the board's search-radius cap). The accumulated space is
    /// shuffled and candidates tried in order; occupied and off-board
    /// candidates are discarded, and an agent whose space is exhausted
    /// stays put.
    ///
    /// When recording is enabled, the round's actual relocations are
    /// appended as one log entry, in processing order; staying put is
    /// never logged.
    pub fn update(&mut self) {
        let mut dissatisfied: Vec<Coord> = Vec::new();
        for coord in self.cells() {
            if matches!(self.is_satisfied(coord), Ok(false)) {
                dissatisfied.push(coord);
            }
        }
        let unrest = dissatisfied.len();
        dissatisfied.shuffle(&mut self.rng);

        let mut moves = Vec::new();
        for origin in dissatisfied {
            let destination = self.seek_new_home(origin);
            if destination != origin {
                moves.push(Move {
                    origin,
                    destination,
                });
            }
        }

        debug!("round: {unrest} dissatisfied, {} relocated", moves.len());
        if let Some(log) = self.log.as_mut() {
            log.push_round(moves);
        }
    }

    /// Pick a destination for the agent at `origin`, relocating it on
    /// success; returns the agent's final position either way.
    fn seek_new_home(&mut self, origin: Coord) -> Coord {
        let Ok(Some(species)) = self.species_at(origin) else {
            return origin;
        };
        let bias = self.biases[species.index()];

        let mut search: Vec<Coord> = Vec::new();
        let mut radius = 1u32;
        loop {
            search.extend(shell(origin, radius).expect("radius starts at 1"));
            if self.rng.random::<f64>() < bias || radius >= self.max_search_radius {
                break;
            }
            radius += 1;
        }
        search.shuffle(&mut self.rng);

        for candidate in search {
            // Occupied or off-board just means "next candidate".
            if self.relocate(origin, candidate).is_ok() {
                return candidate;
            }
        }
        origin
    }
}
