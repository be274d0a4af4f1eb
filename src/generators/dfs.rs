use rand::Rng;

use crate::{
    error::Result,
    generators::Pattern,
    maze::{Cell, Direction, Maze, grid::Grid},
    solvers::PathMap,
};

/// Order in which unvisited neighbors are collected before the random pick.
const CARVE_ORDER: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::North,
];

/// Number of consecutive biased steps before the bias is lifted for one step.
fn bias_length(maze: &Maze, pattern: Pattern) -> usize {
    let span = match pattern {
        Pattern::Horizontal => maze.cols(),
        Pattern::Vertical => maze.rows(),
        Pattern::None => 0,
    };
    (span as usize / 10).max(2)
}

/// Carve a spanning tree into `maze` with an iterative randomized depth-first search rooted at
/// the maze's goal.
///
/// Returns the tree as a `child -> parent` map, which is the canonical path toward the goal for
/// every other cell.
pub fn randomized_dfs(maze: &mut Maze, pattern: Pattern, rng: &mut impl Rng) -> Result<PathMap> {
    let total_cells = maze.rows() as usize * maze.cols() as usize;
    let bias_length = bias_length(maze, pattern);
    let root = maze.goal();

    let mut visited = Grid::new(maze.rows(), maze.cols(), false);
    visited[root] = true;

    // The stack holds the current branch; its top is the cell being extended
    let mut stack = vec![root];
    let mut pushes = 1;
    let mut tree = PathMap::with_capacity(total_cells.saturating_sub(1));
    let mut bias = 0;

    while let Some(&current) = stack.last() {
        bias += 1;
        let mut candidates = CARVE_ORDER
            .into_iter()
            .filter_map(|d| maze.neighbor(current, d).map(|next| (d, next)))
            .filter(|&(_, next)| !visited[next])
            .collect::<Vec<(Direction, Cell)>>();

        if candidates.is_empty() {
            // Dead end, back up one cell
            stack.pop();
            continue;
        }

        match pattern {
            Pattern::Horizontal if bias <= bias_length => {
                if candidates.iter().any(|(d, _)| d.is_horizontal()) {
                    candidates.retain(|(d, _)| d.is_horizontal());
                }
            }
            Pattern::Vertical if bias <= bias_length => {
                if candidates.iter().any(|(d, _)| !d.is_horizontal()) {
                    candidates.retain(|(d, _)| !d.is_horizontal());
                }
            }
            _ => bias = 0,
        }

        let (direction, next) = candidates[rng.random_range(0..candidates.len())];
        maze.open_wall(current, direction)?;
        tree.insert(next, current);
        visited[next] = true;
        stack.push(next);
        pushes += 1;
        assert!(
            pushes <= total_cells,
            "carving pushed {} cells onto the stack of a {}-cell maze",
            pushes,
            total_cells
        );
    }

    tracing::debug!(
        "[dfs] carved {} passages over {} cells",
        tree.len(),
        total_cells
    );
    Ok(tree)
}
