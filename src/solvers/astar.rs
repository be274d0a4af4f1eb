use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use super::{PathMap, forward_path};
use crate::error::{MazeError, Result};
use crate::maze::{Cell, Direction, Maze, grid::Grid};

const ASTAR_ORDER: [Direction; 4] = [
    Direction::East,
    Direction::South,
    Direction::North,
    Direction::West,
];

/// Shortest route from `start` to the maze's goal.
pub fn a_star(maze: &Maze, start: Cell) -> Result<PathMap> {
    a_star_to(maze, start, maze.goal())
}

/// A* search from `start` to `goal` with the Manhattan distance as heuristic.
///
/// The frontier is ordered by `f = g + h`, then by `h` so that among equally promising cells the
/// one closer to the goal is expanded first, then by the cell itself.
pub fn a_star_to(maze: &Maze, start: Cell, goal: Cell) -> Result<PathMap> {
    maze.walls(start)?;
    maze.walls(goal)?;

    // Cost from start and estimated total cost, u32::MAX standing in for infinity
    let mut g_score = Grid::new(maze.rows(), maze.cols(), u32::MAX);
    let mut f_score = Grid::new(maze.rows(), maze.cols(), u32::MAX);
    let start_h = start.manhattan(goal);
    g_score[start] = 0;
    f_score[start] = start_h;

    // Using Reverse to turn the max-heap into a min-heap
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((start_h, start_h, start)));
    let mut parents = HashMap::new();
    let mut expanded = 0usize;

    while let Some(Reverse((_, _, current))) = frontier.pop() {
        if current == goal {
            tracing::trace!("[astar] reached {} after {} expansions", goal, expanded);
            return forward_path(&parents, start, goal);
        }
        expanded += 1;

        let cost = g_score[current] + 1;
        for direction in ASTAR_ORDER {
            let Some(next) = maze.passage(current, direction) else {
                continue;
            };
            let h = next.manhattan(goal);
            let f = cost + h;
            if f < f_score[next] {
                parents.insert(next, current);
                g_score[next] = cost;
                f_score[next] = f;
                frontier.push(Reverse((f, h, next)));
            }
        }
    }

    tracing::debug!("[astar] frontier exhausted after {} expansions", expanded);
    Err(MazeError::Unreachable { start, goal })
}

impl Maze {
    /// Shortest route from `start` to the goal, computed on demand with A*.
    pub fn path_from(&self, start: Cell) -> Result<PathMap> {
        a_star(self, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{GenerationOptions, generate_maze};
    use crate::solvers::bfs;

    fn open_grid(rows: u16, cols: u16) -> Maze {
        let mut maze = Maze::new(rows, cols).unwrap();
        for cell in maze.cells().collect::<Vec<_>>() {
            if cell.col < cols {
                maze.open_east(cell).unwrap();
            }
            if cell.row < rows {
                maze.open_south(cell).unwrap();
            }
        }
        maze
    }

    #[test]
    fn test_manhattan_route_on_open_grid() {
        let maze = open_grid(3, 3);
        let path = maze.path_from(Cell::new(3, 3)).unwrap();
        assert_eq!(path.len(), 4);
        assert!(path.contains_key(&Cell::new(3, 3)));
        assert!(!path.contains_key(&Cell::new(1, 1)));
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        // With all f equal, lower h wins, then the smaller cell
        let maze = open_grid(2, 2);
        let path = a_star(&maze, Cell::new(2, 2)).unwrap();
        assert_eq!(path[&Cell::new(2, 2)], Cell::new(1, 2));
        assert_eq!(path[&Cell::new(1, 2)], Cell::new(1, 1));
    }

    #[test]
    fn test_matches_bfs_length() {
        for seed in 0..6 {
            let options = GenerationOptions {
                seed: Some(seed),
                loop_percent: if seed % 2 == 0 { 0 } else { 60 },
                ..Default::default()
            };
            let maze = generate_maze(14, 17, &options).unwrap();
            for start in [Cell::new(14, 17), Cell::new(7, 3), Cell::new(1, 17)] {
                let astar = a_star(&maze, start).unwrap();
                let breadth = bfs::shortest_path(&maze, start, maze.goal()).unwrap();
                assert_eq!(astar.len(), breadth.len());
                assert!(astar.len() as u32 >= start.manhattan(maze.goal()));
            }
        }
    }

    #[test]
    fn test_start_is_goal() {
        let maze = open_grid(2, 3);
        assert!(maze.path_from(Cell::new(1, 1)).unwrap().is_empty());
    }

    #[test]
    fn test_unreachable_and_out_of_range() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.open_east(Cell::new(1, 1)).unwrap();
        maze.open_east(Cell::new(2, 1)).unwrap();
        assert!(matches!(
            a_star_to(&maze, Cell::new(1, 1), Cell::new(2, 2)),
            Err(MazeError::Unreachable { .. })
        ));
        assert!(matches!(
            maze.path_from(Cell::new(3, 3)),
            Err(MazeError::OutOfRange { .. })
        ));
    }
}
