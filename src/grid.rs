//! Coordinates and directions for puzzles played on character grids.
//!
//! Grids themselves are `nalgebra::DMatrix` values indexed by `(row, column)`; see
//! [`advent_framework::parsing::parse_grid`].

use nalgebra::{DMatrix, Scalar};

/// A cardinal direction, with north toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    #[must_use]
    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    #[must_use]
    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// The direction for an arrow character (`^`, `>`, `v`, `<`).
    #[must_use]
    pub fn from_arrow(c: char) -> Option<Self> {
        match c {
            '^' => Some(Self::North),
            '>' => Some(Self::East),
            'v' => Some(Self::South),
            '<' => Some(Self::West),
            _ => None,
        }
    }

    /// Row and column deltas of one step.
    #[must_use]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

/// Row and column deltas to the eight surrounding cells, diagonals included.
pub const EIGHT_WAYS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell position on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move by signed deltas, staying inside a `rows` × `cols` grid.
    #[must_use]
    pub fn offset_within(
        self,
        (d_row, d_col): (isize, isize),
        (rows, cols): (usize, usize),
    ) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row).filter(|&row| row < rows)?;
        let col = self.col.checked_add_signed(d_col).filter(|&col| col < cols)?;
        Some(Self { row, col })
    }

    /// One step in `direction`, staying inside a grid of the given shape.
    #[must_use]
    pub fn step_within(self, direction: Direction, shape: (usize, usize)) -> Option<Self> {
        self.offset_within(direction.offset(), shape)
    }

    /// The in-bounds orthogonal neighbors.
    pub fn neighbors_within(self, shape: (usize, usize)) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step_within(direction, shape))
    }

    /// The in-bounds surrounding cells, diagonals included.
    pub fn adjacent_within(self, shape: (usize, usize)) -> impl Iterator<Item = Self> {
        EIGHT_WAYS
            .into_iter()
            .filter_map(move |offset| self.offset_within(offset, shape))
    }

    #[must_use]
    pub fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    #[must_use]
    pub fn index(self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// Coordinates of every cell holding `value`.
pub fn find_all<T: Scalar>(grid: &DMatrix<T>, value: &T) -> impl Iterator<Item = Coord> {
    let (rows, cols) = grid.shape();
    (0..rows)
        .flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
        .filter(move |coord| grid[coord.index()] == *value)
}

/// Render a grid one row per line, using `cell_char` for each cell.
pub fn render<T: Scalar>(
    grid: &DMatrix<T>,
    mut cell_char: impl FnMut(Coord, &T) -> char,
) -> String {
    let (rows, cols) = grid.shape();
    let mut rendered = String::with_capacity(rows * (cols + 1));
    for row in 0..rows {
        if row > 0 {
            rendered.push('\n');
        }
        for col in 0..cols {
            let coord = Coord::new(row, col);
            rendered.push(cell_char(coord, &grid[coord.index()]));
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_four_times_returns_to_start() {
        for direction in Direction::ALL {
            let turned = (0..4).fold(direction, |acc, _| acc.turn_right());
            assert_eq!(turned, direction);
            assert_eq!(direction.turn_right().turn_left(), direction);
        }
    }

    #[test]
    fn steps_stay_in_bounds() {
        let shape = (3, 4);
        let corner = Coord::new(0, 0);
        assert_eq!(corner.step_within(Direction::North, shape), None);
        assert_eq!(corner.step_within(Direction::West, shape), None);
        assert_eq!(
            corner.step_within(Direction::East, shape),
            Some(Coord::new(0, 1))
        );

        let far = Coord::new(2, 3);
        assert_eq!(far.step_within(Direction::South, shape), None);
        assert_eq!(far.step_within(Direction::East, shape), None);
        assert_eq!(far.neighbors_within(shape).count(), 2);
        assert_eq!(Coord::new(1, 1).neighbors_within(shape).count(), 4);
    }

    #[test]
    fn diagonal_offsets() {
        let shape = (3, 3);
        assert_eq!(
            Coord::new(1, 1).offset_within((-1, 1), shape),
            Some(Coord::new(0, 2))
        );
        assert_eq!(Coord::new(0, 1).offset_within((-1, 1), shape), None);
        assert_eq!(Coord::new(1, 1).adjacent_within(shape).count(), 8);
        assert_eq!(Coord::new(0, 0).adjacent_within(shape).count(), 3);
    }

    #[test]
    fn finds_and_renders_cells() {
        let grid = DMatrix::from_row_slice(2, 3, &['a', 'b', 'a', 'c', 'a', 'd']);
        let found: Vec<_> = find_all(&grid, &'a').collect();
        assert_eq!(
            found,
            vec![Coord::new(0, 0), Coord::new(0, 2), Coord::new(1, 1)]
        );
        assert_eq!(render(&grid, |_, &c| c), "aba\ncad");
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Coord::new(1, 5).manhattan(Coord::new(4, 2)), 6);
    }
}
