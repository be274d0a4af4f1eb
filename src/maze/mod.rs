pub mod cell;
pub mod grid;

use std::collections::HashMap;

pub use cell::{Cell, Direction, Walls};
use grid::Grid;

use crate::error::{MazeError, Result};
use crate::solvers::PathMap;

/// A rectangular maze of `rows x cols` cells.
///
/// The maze owns the wall state of every cell, the goal cell and the canonical path toward it.
/// Walls only ever open, and always on both sides of a shared boundary.
pub struct Maze {
    walls: Grid<Walls>,
    goal: Cell,
    path: PathMap,
}

impl Maze {
    /// Creates a maze with every wall closed, the goal at `(1, 1)` and an empty canonical path.
    ///
    /// Fails with [`MazeError::InvalidConfiguration`] if either dimension is zero.
    pub fn new(rows: u16, cols: u16) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidConfiguration(format!(
                "maze dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        Ok(Maze {
            walls: Grid::new(rows, cols, Walls::CLOSED),
            goal: Cell::new(1, 1),
            path: HashMap::new(),
        })
    }

    /// Returns the number of rows in the maze.
    pub fn rows(&self) -> u16 {
        self.walls.rows()
    }

    /// Returns the number of columns in the maze.
    pub fn cols(&self) -> u16 {
        self.walls.cols()
    }

    /// The bottom-right cell, where traversal starts by default.
    pub fn origin(&self) -> Cell {
        Cell::new(self.rows(), self.cols())
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Shortest route baseline from the origin to the goal, as a `cell -> next cell` map.
    pub fn canonical_path(&self) -> &PathMap {
        &self.path
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.walls.contains(cell)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        self.walls.cells()
    }

    pub fn walls(&self, cell: Cell) -> Result<Walls> {
        self.walls.get(cell).copied()
    }

    /// The full wall-state map, row-major.
    pub fn wall_map(&self) -> impl Iterator<Item = (Cell, Walls)> {
        self.walls.iter().map(|(cell, walls)| (cell, *walls))
    }

    pub fn is_open(&self, cell: Cell, direction: Direction) -> Result<bool> {
        Ok(self.walls(cell)?.is_open(direction))
    }

    /// The in-bounds neighbor of `cell` in `direction`.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction).filter(|&next| self.contains(next))
    }

    /// The neighbor reachable from `cell` through an open wall in `direction`.
    ///
    /// A flag open toward the outside of the grid leads nowhere.
    pub fn passage(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        if self.walls.get(cell).ok()?.is_open(direction) {
            self.neighbor(cell, direction)
        } else {
            None
        }
    }

    /// Number of open passages between pairs of in-bounds cells.
    pub fn open_passages(&self) -> usize {
        self.cells()
            .map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&d| self.passage(cell, d).is_some())
                    .count()
            })
            .sum()
    }

    pub(crate) fn set_goal(&mut self, goal: Cell) -> Result<()> {
        self.walls.get(goal)?;
        self.goal = goal;
        Ok(())
    }

    pub(crate) fn set_canonical_path(&mut self, path: PathMap) {
        self.path = path;
    }

    /// Opens the wall of `cell` toward `direction`, together with the mirror wall of the
    /// neighbor when the neighbor is inside the grid.
    pub(crate) fn open_wall(&mut self, cell: Cell, direction: Direction) -> Result<()> {
        self.walls.get_mut(cell)?.open(direction);
        if let Some(next) = self.neighbor(cell, direction) {
            self.walls[next].open(direction.opposite());
        }
        Ok(())
    }

    pub(crate) fn open_east(&mut self, cell: Cell) -> Result<()> {
        self.open_wall(cell, Direction::East)
    }

    pub(crate) fn open_west(&mut self, cell: Cell) -> Result<()> {
        self.open_wall(cell, Direction::West)
    }

    pub(crate) fn open_north(&mut self, cell: Cell) -> Result<()> {
        self.open_wall(cell, Direction::North)
    }

    pub(crate) fn open_south(&mut self, cell: Cell) -> Result<()> {
        self.open_wall(cell, Direction::South)
    }

    /// Removes the wall between two adjacent cells.
    ///
    /// # Panics
    /// If the cells are not adjacent.
    pub(crate) fn remove_wall_between(&mut self, a: Cell, b: Cell) -> Result<()> {
        let Some(direction) = a.direction_to(b) else {
            panic!("cells {} and {} are not adjacent", a, b);
        };
        match direction {
            Direction::East => self.open_east(a),
            Direction::West => self.open_west(a),
            Direction::North => self.open_north(a),
            Direction::South => self.open_south(a),
        }
    }

    /// Replaces the wall state of one cell verbatim, without touching its neighbors.
    ///
    /// Only the storage codec uses this, and it checks symmetry once every cell is in.
    pub(crate) fn set_walls(&mut self, cell: Cell, walls: Walls) -> Result<()> {
        *self.walls.get_mut(cell)? = walls;
        Ok(())
    }

    /// The first in-bounds boundary whose two sides disagree, if any.
    pub fn asymmetric_wall(&self) -> Option<(Cell, Direction)> {
        self.cells().find_map(|cell| {
            [Direction::East, Direction::South]
                .into_iter()
                .find(|&d| match self.neighbor(cell, d) {
                    Some(next) => {
                        self.walls[cell].is_open(d) != self.walls[next].is_open(d.opposite())
                    }
                    None => false,
                })
                .map(|d| (cell, d))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maze_is_closed() {
        let maze = Maze::new(4, 5).unwrap();
        assert_eq!(maze.rows(), 4);
        assert_eq!(maze.cols(), 5);
        assert_eq!(maze.origin(), Cell::new(4, 5));
        assert_eq!(maze.goal(), Cell::new(1, 1));
        assert_eq!(maze.cells().count(), 20);
        assert!(maze.wall_map().all(|(_, walls)| walls == Walls::CLOSED));
        assert!(maze.canonical_path().is_empty());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Maze::new(0, 3),
            Err(MazeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Maze::new(3, 0),
            Err(MazeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_open_wall_is_symmetric() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.open_east(Cell::new(2, 2)).unwrap();
        assert!(maze.is_open(Cell::new(2, 2), Direction::East).unwrap());
        assert!(maze.is_open(Cell::new(2, 3), Direction::West).unwrap());

        maze.open_north(Cell::new(2, 2)).unwrap();
        assert!(maze.is_open(Cell::new(1, 2), Direction::South).unwrap());

        maze.remove_wall_between(Cell::new(3, 1), Cell::new(2, 1)).unwrap();
        assert!(maze.is_open(Cell::new(3, 1), Direction::North).unwrap());
        assert!(maze.is_open(Cell::new(2, 1), Direction::South).unwrap());

        assert_eq!(maze.asymmetric_wall(), None);
        assert_eq!(maze.open_passages(), 3);
    }

    #[test]
    fn test_open_wall_on_boundary() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.open_west(Cell::new(1, 1)).unwrap();
        assert!(maze.is_open(Cell::new(1, 1), Direction::West).unwrap());
        // Nothing on the other side to mirror, and nothing to walk into
        assert_eq!(maze.passage(Cell::new(1, 1), Direction::West), None);
        assert_eq!(maze.open_passages(), 0);
        assert_eq!(maze.asymmetric_wall(), None);
    }

    #[test]
    fn test_out_of_range_queries() {
        let mut maze = Maze::new(2, 2).unwrap();
        assert!(matches!(
            maze.walls(Cell::new(3, 1)),
            Err(MazeError::OutOfRange { .. })
        ));
        assert!(matches!(
            maze.open_south(Cell::new(1, 3)),
            Err(MazeError::OutOfRange { .. })
        ));
        assert!(matches!(
            maze.set_goal(Cell::new(0, 1)),
            Err(MazeError::OutOfRange { .. })
        ));
        assert_eq!(maze.goal(), Cell::new(1, 1));
    }

    #[test]
    fn test_asymmetric_wall_detected() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.set_walls(Cell::new(1, 1), Walls::from_ewns(true, false, false, false))
            .unwrap();
        assert_eq!(
            maze.asymmetric_wall(),
            Some((Cell::new(1, 1), Direction::East))
        );
    }
}
