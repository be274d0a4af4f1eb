use std::collections::{HashMap, VecDeque};

use super::{PathMap, forward_path};
use crate::error::Result;
use crate::maze::{Cell, Direction, Maze, grid::Grid};

/// Neighbor expansion order. Only affects which of several equally short routes is kept.
const BFS_ORDER: [Direction; 4] = [
    Direction::West,
    Direction::South,
    Direction::East,
    Direction::North,
];

/// Every cell reachable from a start cell, with the cell it was discovered from.
#[derive(Debug)]
pub struct SearchTree {
    start: Cell,
    parents: HashMap<Cell, Cell>,
}

impl SearchTree {
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Number of reachable cells, the start included.
    pub fn reached_count(&self) -> usize {
        self.parents.len() + 1
    }

    pub fn reached(&self, cell: Cell) -> bool {
        cell == self.start || self.parents.contains_key(&cell)
    }

    /// The cell `cell` was discovered from; `None` for the start and unreached cells.
    pub fn parent(&self, cell: Cell) -> Option<Cell> {
        self.parents.get(&cell).copied()
    }

    /// Forward route from the start to `goal`.
    pub fn path_to(&self, goal: Cell) -> Result<PathMap> {
        forward_path(&self.parents, self.start, goal)
    }
}

/// Breadth-first traversal of the open passages from `start`.
pub fn breadth_first(maze: &Maze, start: Cell) -> Result<SearchTree> {
    maze.walls(start)?;

    let mut visited = Grid::new(maze.rows(), maze.cols(), false);
    visited[start] = true;
    let mut frontier = VecDeque::from([start]);
    let mut parents = HashMap::new();

    while let Some(cell) = frontier.pop_front() {
        for direction in BFS_ORDER {
            let Some(next) = maze.passage(cell, direction) else {
                continue;
            };
            if !visited[next] {
                visited[next] = true;
                parents.insert(next, cell);
                frontier.push_back(next);
            }
        }
    }

    tracing::trace!("[bfs] reached {} cells from {}", parents.len() + 1, start);
    Ok(SearchTree { start, parents })
}

/// Shortest route from `start` to `goal` by breadth-first search.
pub fn shortest_path(maze: &Maze, start: Cell, goal: Cell) -> Result<PathMap> {
    maze.walls(goal)?;
    breadth_first(maze, start)?.path_to(goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    /// 3x3 with a single corridor snaking (1,1) -> (1,3) -> (2,3) -> (2,1) -> (3,1) -> (3,3).
    fn snake() -> Maze {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.open_east(Cell::new(1, 1)).unwrap();
        maze.open_east(Cell::new(1, 2)).unwrap();
        maze.open_south(Cell::new(1, 3)).unwrap();
        maze.open_west(Cell::new(2, 3)).unwrap();
        maze.open_west(Cell::new(2, 2)).unwrap();
        maze.open_south(Cell::new(2, 1)).unwrap();
        maze.open_east(Cell::new(3, 1)).unwrap();
        maze.open_east(Cell::new(3, 2)).unwrap();
        maze
    }

    #[test]
    fn test_breadth_first_reaches_everything() {
        let maze = snake();
        let tree = breadth_first(&maze, Cell::new(3, 3)).unwrap();
        assert_eq!(tree.reached_count(), 9);
        assert!(tree.reached(Cell::new(1, 1)));
        assert_eq!(tree.parent(Cell::new(3, 3)), None);
        assert_eq!(tree.parent(Cell::new(3, 2)), Some(Cell::new(3, 3)));
    }

    #[test]
    fn test_shortest_path_follows_corridor() {
        let maze = snake();
        let path = shortest_path(&maze, Cell::new(3, 3), Cell::new(1, 1)).unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(path[&Cell::new(3, 3)], Cell::new(3, 2));
        assert_eq!(path[&Cell::new(1, 2)], Cell::new(1, 1));
        assert!(!path.contains_key(&Cell::new(1, 1)));
    }

    #[test]
    fn test_start_equals_goal() {
        let maze = snake();
        let path = shortest_path(&maze, Cell::new(2, 2), Cell::new(2, 2)).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_tie_break_prefers_west_then_south() {
        // Open 2x2: both (2,2)->(2,1)->(1,1) and (2,2)->(1,2)->(1,1) are two steps
        let mut maze = Maze::new(2, 2).unwrap();
        maze.open_east(Cell::new(1, 1)).unwrap();
        maze.open_south(Cell::new(1, 1)).unwrap();
        maze.open_south(Cell::new(1, 2)).unwrap();
        maze.open_east(Cell::new(2, 1)).unwrap();
        let path = shortest_path(&maze, Cell::new(2, 2), Cell::new(1, 1)).unwrap();
        assert_eq!(path[&Cell::new(2, 2)], Cell::new(2, 1));
    }

    #[test]
    fn test_unreachable_goal() {
        // Two horizontal corridors with no vertical connection
        let mut maze = Maze::new(2, 2).unwrap();
        maze.open_east(Cell::new(1, 1)).unwrap();
        maze.open_east(Cell::new(2, 1)).unwrap();
        let tree = breadth_first(&maze, Cell::new(1, 1)).unwrap();
        assert_eq!(tree.reached_count(), 2);
        assert!(matches!(
            tree.path_to(Cell::new(2, 2)),
            Err(MazeError::Unreachable { .. })
        ));
    }

    #[test]
    fn test_out_of_range_start() {
        let maze = snake();
        assert!(matches!(
            breadth_first(&maze, Cell::new(4, 1)),
            Err(MazeError::OutOfRange { .. })
        ));
        assert!(matches!(
            shortest_path(&maze, Cell::new(1, 1), Cell::new(1, 4)),
            Err(MazeError::OutOfRange { .. })
        ));
    }
}
