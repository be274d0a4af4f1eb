use std::collections::HashMap;

pub mod astar;
pub mod bfs;

use crate::error::{MazeError, Result};
use crate::maze::{Cell, Maze};

/// A route through the maze as a `cell -> next cell` map.
///
/// The goal is never a key, so a route of `n` steps has `n` entries.
pub type PathMap = HashMap<Cell, Cell>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Solver {
    Bfs,
    #[default]
    AStar,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Solver::Bfs),
            "astar" | "a*" => Ok(Solver::AStar),
            other => Err(MazeError::InvalidConfiguration(format!(
                "unknown solver `{}`, expected bfs or astar",
                other
            ))),
        }
    }
}

/// Find a shortest route from `start` to the maze's goal with the chosen solver.
pub fn solve_maze(maze: &Maze, start: Cell, solver: Solver) -> Result<PathMap> {
    let path = match solver {
        Solver::Bfs => bfs::shortest_path(maze, start, maze.goal())?,
        Solver::AStar => astar::a_star(maze, start)?,
    };
    tracing::debug!(
        "[solve] {} found {} steps from {} to {}",
        solver,
        path.len(),
        start,
        maze.goal()
    );
    Ok(path)
}

/// Turn a `cell -> parent` map produced by a search from `start` into the forward route from
/// `start` to `goal`.
pub(crate) fn forward_path(
    parents: &HashMap<Cell, Cell>,
    start: Cell,
    goal: Cell,
) -> Result<PathMap> {
    let mut path = PathMap::new();
    let mut cell = goal;
    while cell != start {
        let parent = *parents
            .get(&cell)
            .ok_or(MazeError::Unreachable { start, goal })?;
        path.insert(parent, cell);
        cell = parent;
    }
    Ok(path)
}

/// Cells visited when following `path` from `start` to `goal`, both ends included.
///
/// Fails with [`MazeError::Unreachable`] if the chain breaks or loops before reaching `goal`.
pub fn route(path: &PathMap, start: Cell, goal: Cell) -> Result<Vec<Cell>> {
    let mut cells = vec![start];
    let mut cell = start;
    while cell != goal {
        match path.get(&cell) {
            Some(&next) if cells.len() <= path.len() => {
                cells.push(next);
                cell = next;
            }
            _ => return Err(MazeError::Unreachable { start, goal }),
        }
    }
    Ok(cells)
}
