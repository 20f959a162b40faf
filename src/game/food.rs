use super::cell::{on_board, Cell, Step};
use crate::consts;
use log::warn;
use rand::{seq::IteratorRandom, Rng};
use std::collections::VecDeque;

/// A food item roaming the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) position: Cell,

    /// How far the food moves on each drift.  Either component may be zero,
    /// so some food sits still along an axis (or entirely).
    pub(super) drift: Step,
}

impl Food {
    /// Create a food item at a random cell not occupied by `snake`, moving in
    /// a random direction.  Returns `None` if the board is full.
    pub(super) fn new<R: Rng>(rng: &mut R, snake: &VecDeque<Cell>) -> Option<Food> {
        let position = random_position(rng, snake)?;
        let drift = Step::new(rng.random_range(-1..=1), rng.random_range(-1..=1));
        Some(Food { position, drift })
    }

    /// Move the food by its drift.  If that takes it off the board along an
    /// axis, its drift along that axis is reversed so that the next drift
    /// brings it back.  The position itself is not clamped.
    pub(super) fn drift(&mut self) {
        self.position = self.position + self.drift;
        if !on_board(self.position.x) {
            self.drift.dx = -self.drift.dx;
        }
        if !on_board(self.position.y) {
            self.drift.dy = -self.drift.dy;
        }
    }

    /// Move the food to a random cell not occupied by `snake`.  Returns
    /// `false` and leaves the food where it is if there is no free cell.
    pub(super) fn relocate<R: Rng>(&mut self, rng: &mut R, snake: &VecDeque<Cell>) -> bool {
        match random_position(rng, snake) {
            Some(pos) => {
                self.position = pos;
                true
            }
            None => {
                warn!("No free cell to move food at {:?} to; leaving it", self.position);
                false
            }
        }
    }
}

/// Return a uniformly random cell on the board
pub(super) fn random_cell<R: Rng>(rng: &mut R) -> Cell {
    Cell::new(
        rng.random_range(0..consts::CELL_COUNT),
        rng.random_range(0..consts::CELL_COUNT),
    )
}

/// Return a uniformly random cell on the board that is not in `occupied`.
///
/// Random cells are tried up to
/// [`PLACEMENT_ATTEMPTS`][consts::PLACEMENT_ATTEMPTS] times, after which a
/// free cell is chosen directly from the whole board.  Returns `None` if
/// there are no free cells.
pub(super) fn random_position<R: Rng>(rng: &mut R, occupied: &VecDeque<Cell>) -> Option<Cell> {
    for _ in 0..consts::PLACEMENT_ATTEMPTS {
        let cell = random_cell(rng);
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
    Cell::all()
        .filter(|c| !occupied.contains(c))
        .choose(rng)
}
