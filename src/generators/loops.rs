use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::{
    error::Result,
    maze::{Cell, Direction, Maze},
    solvers::route,
};

/// Order in which walled-off neighbors are collected before the random pick.
const BLOCKED_ORDER: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::North,
    Direction::South,
];

/// In-bounds neighbors of `cell` that are still separated from it by a wall.
fn blocked_neighbors(maze: &Maze, cell: Cell) -> Vec<Cell> {
    BLOCKED_ORDER
        .into_iter()
        .filter(|&d| maze.passage(cell, d).is_none())
        .filter_map(|d| maze.neighbor(cell, d))
        .collect()
}

/// Whether opening the wall between adjacent `a` and `b` would complete a 2x2 block whose four
/// inner passages are all open.
fn closes_open_block(maze: &Maze, a: Cell, b: Cell) -> bool {
    let Some(direction) = a.direction_to(b) else {
        return false;
    };
    let sides = if direction.is_horizontal() {
        [Direction::North, Direction::South]
    } else {
        [Direction::East, Direction::West]
    };
    sides
        .into_iter()
        .any(|side| match (maze.passage(a, side), maze.passage(b, side)) {
            (Some(a_side), Some(b_side)) => maze.passage(a_side, direction) == Some(b_side),
            _ => false,
        })
}

/// Walk `cells` once, opening one random blocked wall per cell until the quota of
/// `len / 3 * loop_percent / 100` walls is met or the cells run out.
fn open_walls(maze: &mut Maze, cells: &[Cell], loop_percent: u8, rng: &mut impl Rng) -> Result<usize> {
    let quota = cells.len() as f64 / 3.0 * loop_percent as f64 / 100.0;
    let mut opened = 0;
    for &cell in cells {
        if opened as f64 >= quota {
            break;
        }
        let blocked = blocked_neighbors(maze, cell);
        if blocked.is_empty() {
            continue;
        }
        let next = blocked[rng.random_range(0..blocked.len())];
        if !closes_open_block(maze, cell, next) {
            maze.remove_wall_between(cell, next)?;
            opened += 1;
        }
    }
    Ok(opened)
}

/// Open extra walls in a carved maze so that alternative routes appear.
///
/// Cells on the current origin-to-goal route and the remaining cells are shuffled and treated
/// as two separate pools, each with its own quota. Returns the total number of walls opened.
pub fn inject_loops(maze: &mut Maze, loop_percent: u8, rng: &mut impl Rng) -> Result<usize> {
    let mut on_route = route(maze.canonical_path(), maze.origin(), maze.goal())?;
    let route_set = on_route.iter().copied().collect::<HashSet<_>>();
    let mut off_route = maze
        .cells()
        .filter(|cell| !route_set.contains(cell))
        .collect::<Vec<_>>();

    on_route.shuffle(rng);
    off_route.shuffle(rng);

    let on_route_opened = open_walls(maze, &on_route, loop_percent, rng)?;
    let off_route_opened = open_walls(maze, &off_route, loop_percent, rng)?;
    tracing::debug!(
        "[loops] opened {} walls from {} route cells, {} from {} other cells",
        on_route_opened,
        on_route.len(),
        off_route_opened,
        off_route.len()
    );
    Ok(on_route_opened + off_route_opened)
}
