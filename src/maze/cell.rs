use std::fmt;

/// A cell of the maze, addressed by 1-based `(row, col)`.
///
/// Row 1 is the top row and column 1 the leftmost column. The derived ordering compares rows
/// first, which is also the order used to break the last ties in the A* frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
}

impl Cell {
    pub const fn new(row: u16, col: u16) -> Self {
        Cell { row, col }
    }

    /// The adjacent cell in `direction`, or `None` when the step would leave the
    /// coordinate space (row or column 0, or past `u16::MAX`).
    ///
    /// Grid bounds are not checked here, see [`crate::maze::Maze::neighbor`].
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let Cell { row, col } = self;
        let (row, col) = match direction {
            Direction::North => (row.checked_sub(1)?, col),
            Direction::South => (row.checked_add(1)?, col),
            Direction::East => (row, col.checked_add(1)?),
            Direction::West => (row, col.checked_sub(1)?),
        };
        (row > 0 && col > 0).then_some(Cell { row, col })
    }

    /// Manhattan distance, `|Δrow| + |Δcol|`.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) as u32 + self.col.abs_diff(other.col) as u32
    }

    /// Direction to take from `self` to reach the adjacent `other`, if they are adjacent.
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.step(d) == Some(other))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u16, u16)> for Cell {
    fn from((row, col): (u16, u16)) -> Self {
        Cell { row, col }
    }
}

/// The four compass directions a passage can lead to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Whether the direction moves along a row (east/west).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::East => 0b0010,
            Direction::South => 0b0100,
            Direction::West => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        };
        write!(f, "{}", letter)
    }
}

/// Open/closed state of the four walls around a cell, packed into a byte.
///
/// A set bit means the passage toward that direction is open.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    /// All four walls present.
    pub const CLOSED: Walls = Walls(0);

    pub fn is_open(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub(crate) fn open(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Build from the flags in persistence column order (`E, W, N, S`).
    pub fn from_ewns(east: bool, west: bool, north: bool, south: bool) -> Self {
        let mut walls = Walls::CLOSED;
        for (open, direction) in [
            (east, Direction::East),
            (west, Direction::West),
            (north, Direction::North),
            (south, Direction::South),
        ] {
            if open {
                walls.open(direction);
            }
        }
        walls
    }

    /// Flags in persistence column order (`E, W, N, S`).
    pub fn to_ewns(self) -> [bool; 4] {
        [
            self.is_open(Direction::East),
            self.is_open(Direction::West),
            self.is_open(Direction::North),
            self.is_open(Direction::South),
        ]
    }

    pub fn open_count(self) -> u32 {
        self.0.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_in_coordinate_space() {
        let corner = Cell::new(1, 1);
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::West), None);
        assert_eq!(corner.step(Direction::East), Some(Cell::new(1, 2)));
        assert_eq!(corner.step(Direction::South), Some(Cell::new(2, 1)));
        assert_eq!(Cell::new(u16::MAX, 3).step(Direction::South), None);
    }

    #[test]
    fn test_direction_to() {
        let cell = Cell::new(2, 2);
        for direction in Direction::ALL {
            let next = cell.step(direction).unwrap();
            assert_eq!(cell.direction_to(next), Some(direction));
            assert_eq!(next.direction_to(cell), Some(direction.opposite()));
        }
        assert_eq!(cell.direction_to(Cell::new(3, 3)), None);
    }

    #[test]
    fn test_walls_flags() {
        let walls = Walls::from_ewns(true, false, false, true);
        assert!(walls.is_open(Direction::East));
        assert!(walls.is_open(Direction::South));
        assert!(!walls.is_open(Direction::West));
        assert!(!walls.is_open(Direction::North));
        assert_eq!(walls.to_ewns(), [true, false, false, true]);
        assert_eq!(walls.open_count(), 2);
    }

    #[test]
    fn test_cell_display_and_order() {
        assert_eq!(Cell::new(3, 12).to_string(), "(3, 12)");
        assert!(Cell::new(1, 9) < Cell::new(2, 1));
        assert_eq!(Cell::new(1, 1).manhattan(Cell::new(3, 4)), 5);
    }
}
