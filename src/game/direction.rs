use super::cell::Step;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The change in position from moving one cell in this direction
    pub(super) fn step(self) -> Step {
        match self {
            Direction::North => Step::new(0, -1),
            Direction::East => Step::new(1, 0),
            Direction::South => Step::new(0, 1),
            Direction::West => Step::new(-1, 0),
        }
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
