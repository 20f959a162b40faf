use super::cell::Cell;
use super::direction::Direction;
use crate::consts;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// All positions are relative to the top-left corner of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the cells in the snake, head first
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the snake will next move
    pub(super) direction: Direction,

    /// Whether the next advance should leave the tail in place
    pub(super) grow_pending: bool,
}

impl Snake {
    /// Create a new snake laid out as
    /// [`INITIAL_SNAKE`][consts::INITIAL_SNAKE] and facing east
    pub(super) fn new() -> Snake {
        Snake {
            body: consts::INITIAL_SNAKE.into_iter().map(Cell::from).collect(),
            direction: Direction::East,
            grow_pending: false,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Cell {
        self.body[0]
    }

    /// Return the positions of the cells in the snake, head first
    pub(super) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Return the positions of the cells behind the head
    pub(super) fn tail(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter().skip(1)
    }

    /// Change the snake's direction to `direction`, unless that would send it
    /// straight back into its own neck.  Returns `false` if the turn was
    /// rejected.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Move the snake forwards one cell in the current direction.  The new
    /// head is not checked against anything.
    pub(super) fn advance(&mut self) {
        let head = self.head() + self.direction.step();
        self.body.push_front(head);
        if self.grow_pending {
            self.grow_pending = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Extend the snake by one cell on its next advance
    pub(super) fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// Put the snake back in its starting position
    pub(super) fn reset(&mut self) {
        *self = Snake::new();
    }
}
