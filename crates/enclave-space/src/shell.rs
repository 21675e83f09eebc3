//! The square ring ("shell") generator behind expanding relocation
//! searches.

use crate::error::SpaceError;
use enclave_core::Coord;

/// Lazy iterator over the shell of cells at Chebyshev distance exactly
/// `radius` from a centre.
///
/// The shell is the boundary of a square: `8 * radius` distinct cells,
/// none of them the centre. Cells are produced wall by wall in a fixed
/// rotational order: for each axis (x, then y), for each direction
/// (negative, then positive), the wall perpendicular to that axis is
/// swept from one corner up to (but excluding) the next, so each wall
/// contributes exactly `2 * radius` cells and owns exactly one corner.
///
/// The ordering is deterministic but carries no semantic weight:
/// consumers shuffle the accumulated cells before use. Determinism
/// matters only for reproducing fixed-seed runs and for testing.
///
/// The iterator is `Clone` and restartable (clone before consuming),
/// and performs no bounds filtering: cells may lie outside any given
/// board, and callers intersect with the board's own validity check.
#[derive(Clone, Debug)]
pub struct Shell {
    centre: Coord,
    radius: i32,
    wall: u8,
    step: i32,
}

/// Produce the shell at Chebyshev distance exactly `radius` from
/// `centre`.
///
/// # Errors
///
/// Returns [`SpaceError::ZeroRadius`] if `radius == 0`.
///
/// # Examples
///
/// ```
/// use enclave_core::Coord;
/// use enclave_space::shell;
///
/// let ring: Vec<Coord> = shell(Coord::new(0, 0), 1).unwrap().collect();
/// assert_eq!(ring.len(), 8);
/// assert!(ring.iter().all(|c| c.chebyshev(Coord::new(0, 0)) == 1));
/// ```
pub fn shell(centre: Coord, radius: u32) -> Result<Shell, SpaceError> {
    if radius == 0 {
        return Err(SpaceError::ZeroRadius);
    }
    Ok(Shell {
        centre,
        radius: radius as i32,
        wall: 0,
        step: 0,
    })
}

impl Iterator for Shell {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.wall >= 4 {
            return None;
        }
        // Walls 0..4 decompose as (axis, direction):
        // 0 = x-axis, -1    1 = x-axis, +1    2 = y-axis, -1    3 = y-axis, +1.
        // The wall lies on the perpendicular axis at centre +/- radius;
        // the sweep runs from -radius (corner) to radius - 1.
        let direction = if self.wall % 2 == 0 { -1 } else { 1 };
        let offset = direction * (self.step - self.radius);
        let coord = if self.wall < 2 {
            Coord::new(
                self.centre.x + offset,
                self.centre.y - self.radius * direction,
            )
        } else {
            Coord::new(
                self.centre.x + self.radius * direction,
                self.centre.y + offset,
            )
        };
        self.step += 1;
        if self.step == 2 * self.radius {
            self.step = 0;
            self.wall += 1;
        }
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining =
            (4 - self.wall as i32) as usize * (2 * self.radius) as usize - self.step as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Shell {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn collect(centre: Coord, radius: u32) -> Vec<Coord> {
        shell(centre, radius).unwrap().collect()
    }

    // ── Golden orderings (reference walk, wall by wall) ─────────────

    #[test]
    fn radius_one_off_origin_matches_reference_order() {
        let got = collect(Coord::new(10, -1), 1);
        let want: Vec<Coord> = [
            (11, 0),
            (10, 0),
            (9, -2),
            (10, -2),
            (9, 0),
            (9, -1),
            (11, -2),
            (11, -1),
        ]
        .into_iter()
        .map(Coord::from)
        .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn radius_two_at_origin_matches_reference_order() {
        let got = collect(Coord::new(0, 0), 2);
        let want: Vec<Coord> = [
            (2, 2),
            (1, 2),
            (0, 2),
            (-1, 2),
            (-2, -2),
            (-1, -2),
            (0, -2),
            (1, -2),
            (-2, 2),
            (-2, 1),
            (-2, 0),
            (-2, -1),
            (2, -2),
            (2, -1),
            (2, 0),
            (2, 1),
        ]
        .into_iter()
        .map(Coord::from)
        .collect();
        assert_eq!(got, want);
    }

    // ── Contract ────────────────────────────────────────────────────

    #[test]
    fn zero_radius_is_rejected() {
        match shell(Coord::new(0, 0), 0) {
            Err(SpaceError::ZeroRadius) => {}
            other => panic!("expected ZeroRadius, got {other:?}"),
        }
    }

    #[test]
    fn shell_is_restartable_via_clone() {
        let ring = shell(Coord::new(3, 3), 2).unwrap();
        let first: Vec<Coord> = ring.clone().collect();
        let second: Vec<Coord> = ring.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn size_hint_is_exact() {
        let mut ring = shell(Coord::new(0, 0), 3).unwrap();
        assert_eq!(ring.len(), 24);
        ring.next();
        assert_eq!(ring.len(), 23);
        assert_eq!(ring.by_ref().count(), 23);
        assert_eq!(ring.len(), 0);
    }

    // ── Properties ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn shell_has_8r_distinct_cells_at_distance_r(
            cx in -100i32..100, cy in -100i32..100, radius in 1u32..20,
        ) {
            let centre = Coord::new(cx, cy);
            let cells = collect(centre, radius);
            prop_assert_eq!(cells.len(), 8 * radius as usize);

            let distinct: HashSet<Coord> = cells.iter().copied().collect();
            prop_assert_eq!(distinct.len(), cells.len());

            for cell in &cells {
                prop_assert_eq!(cell.chebyshev(centre), radius);
            }
        }

        #[test]
        fn shells_union_to_the_punctured_chebyshev_ball(
            cx in -20i32..20, cy in -20i32..20, radius in 1u32..8,
        ) {
            let centre = Coord::new(cx, cy);
            let mut union: HashSet<Coord> = HashSet::new();
            for r in 1..=radius {
                union.extend(collect(centre, r));
            }

            let mut ball: HashSet<Coord> = HashSet::new();
            let r = radius as i32;
            for dx in -r..=r {
                for dy in -r..=r {
                    if dx != 0 || dy != 0 {
                        ball.insert(Coord::new(cx + dx, cy + dy));
                    }
                }
            }
            prop_assert_eq!(union, ball);
        }
    }
}
