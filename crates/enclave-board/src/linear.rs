//! The one-agent-per-tick walk for line boards.

use crate::board::Board;
use enclave_core::{Coord, Move};
use enclave_space::LineStrip;
use log::trace;

impl Board<LineStrip> {
    /// Advance exactly one agent.
    ///
    /// The mover is whichever occupant sits at the round-robin cursor;
    /// a vacant cursor cell is a quiet no-op (`None`, nothing logged)
    /// and the cursor still advances. The agent probes positions
    /// alternating one step left, one step right, two left, two right,
    /// and so on out to the board edge or its travel bound, whichever
    /// is nearer. Each probe is committed to the grid before testing
    /// (the agent is pulled out of the line and reinserted at the probe,
    /// shifting the agents in between), and the walk stops at the
    /// first position where the agent is satisfied, falling back to
    /// its original index when none is.
    ///
    /// When recording is enabled, every agent-processing call appends
    /// a single-entry round, stay-put outcomes included.
    pub fn step(&mut self) -> Option<Move> {
        let width = self.width() as usize;
        let start = self.cursor;
        self.cursor = (self.cursor + 1) % width;

        // Rank and index coincide on a line.
        if self.cells[start].is_none() {
            trace!("cursor {start} is vacant, skipping");
            return None;
        }

        let (lowest, highest) = match self.topo.max_travel() {
            Some(d) => (
                start.saturating_sub(d as usize),
                (start + d as usize).min(width - 1),
            ),
            None => (0, width - 1),
        };
        let left = (lowest..start).rev();
        let right = start + 1..=highest;

        let mut current = start;
        for probe in interleave(left, right).chain(std::iter::once(start)) {
            let agent = self.cells.remove(current);
            self.cells.insert(probe, agent);
            current = probe;
            if matches!(self.is_satisfied(Coord::new(current as i32, 0)), Ok(true)) {
                break;
            }
        }

        let mv = Move {
            origin: Coord::new(start as i32, 0),
            destination: Coord::new(current as i32, 0),
        };
        if let Some(log) = self.log.as_mut() {
            log.push_round(vec![mv]);
        }
        Some(mv)
    }
}

/// Alternate between two iterators, draining whichever remains once
/// the other is exhausted.
fn interleave<A, B>(a: A, b: B) -> Interleave<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    Interleave {
        a,
        b,
        from_a: true,
    }
}

struct Interleave<A, B> {
    a: A,
    b: B,
    from_a: bool,
}

impl<A, B> Iterator for Interleave<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        // An exhausted side keeps yielding None, so the fallback
        // drains the other without extra state.
        if self.from_a {
            self.from_a = false;
            self.a.next().or_else(|| self.b.next())
        } else {
            self.from_a = true;
            self.b.next().or_else(|| self.a.next())
        }
    }
}
