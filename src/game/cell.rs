use crate::consts;
use std::ops::Add;

/// A cell on the board, measured from the top-left corner.
///
/// Cells on the board have both coordinates in `0..CELL_COUNT`.  A snake's
/// head or a drifting food item can briefly sit one cell outside of that
/// range, at `-1` or `CELL_COUNT`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(super) struct Cell {
    pub(super) x: i32,
    pub(super) y: i32,
}

impl Cell {
    pub(super) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Is the cell on the board?
    pub(super) fn on_board(self) -> bool {
        on_board(self.x) && on_board(self.y)
    }

    /// Iterate over every cell on the board in row-major order
    pub(super) fn all() -> impl Iterator<Item = Cell> {
        (0..consts::CELL_COUNT)
            .flat_map(|y| (0..consts::CELL_COUNT).map(move |x| Cell { x, y }))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Cell {
        Cell { x, y }
    }
}

impl Add<Step> for Cell {
    type Output = Cell;

    fn add(self, step: Step) -> Cell {
        Cell {
            x: self.x + step.dx,
            y: self.y + step.dy,
        }
    }
}

/// A displacement of at most one cell along each axis
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(super) struct Step {
    pub(super) dx: i32,
    pub(super) dy: i32,
}

impl Step {
    pub(super) const fn new(dx: i32, dy: i32) -> Step {
        Step { dx, dy }
    }
}

/// Is `coord` a valid board coordinate along either axis?
pub(super) fn on_board(coord: i32) -> bool {
    (0..consts::CELL_COUNT).contains(&coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(24, 24), true)]
    #[case(Cell::new(25, 3), false)]
    #[case(Cell::new(3, -1), false)]
    #[case(Cell::new(-1, 25), false)]
    fn test_on_board(#[case] cell: Cell, #[case] r: bool) {
        assert_eq!(cell.on_board(), r);
    }

    #[test]
    fn all_cells() {
        let cells = Cell::all().collect::<Vec<_>>();
        assert_eq!(cells.len(), 625);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[25], Cell::new(0, 1));
        assert!(cells.iter().all(|c| c.on_board()));
    }

    #[test]
    fn add_step() {
        assert_eq!(Cell::new(24, 0) + Step::new(1, -1), Cell::new(25, -1));
    }
}
