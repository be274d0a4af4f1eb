use rand::{SeedableRng, rngs::StdRng};

mod dfs;
mod loops;

use crate::{
    error::{MazeError, Result},
    maze::{Cell, Maze},
    solvers::bfs,
};
use dfs::randomized_dfs;
use loops::inject_loops;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Directional bias applied to the first steps of each carving run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pattern {
    #[default]
    None,
    /// Prefer east/west moves, producing long horizontal corridors.
    Horizontal,
    /// Prefer north/south moves, producing long vertical corridors.
    Vertical,
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::None => write!(f, "none"),
            Pattern::Horizontal => write!(f, "horizontal"),
            Pattern::Vertical => write!(f, "vertical"),
        }
    }
}

impl std::str::FromStr for Pattern {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Pattern::None),
            "h" | "horizontal" => Ok(Pattern::Horizontal),
            "v" | "vertical" => Ok(Pattern::Vertical),
            other => Err(MazeError::InvalidConfiguration(format!(
                "unknown pattern `{}`, expected none, horizontal or vertical",
                other
            ))),
        }
    }
}

/// Parameters of a random maze generation run.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Cell the canonical path leads to.
    pub goal: Cell,
    pub pattern: Pattern,
    /// Share of extra walls to open after carving, in percent (0..=100).
    pub loop_percent: u8,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            goal: Cell::new(1, 1),
            pattern: Pattern::None,
            loop_percent: 0,
            seed: None,
        }
    }
}

/// Generate a random `rows x cols` maze.
///
/// Carving produces a spanning tree whose parent links are the canonical path. When
/// `loop_percent > 0`, extra walls are opened afterwards and the canonical path is recomputed
/// with BFS from the origin, since the tree no longer guarantees unique routes.
///
/// Every parameter is validated before the maze is touched; on error no maze is returned.
pub fn generate_maze(rows: u16, cols: u16, options: &GenerationOptions) -> Result<Maze> {
    if options.loop_percent > 100 {
        return Err(MazeError::InvalidConfiguration(format!(
            "loop percent must be within 0..=100, got {}",
            options.loop_percent
        )));
    }
    let mut maze = Maze::new(rows, cols)?;
    maze.set_goal(options.goal)?;

    tracing::info!(
        "[generate] {}x{} maze, goal {}, pattern {}, loops {}%, seed {:?}",
        rows,
        cols,
        options.goal,
        options.pattern,
        options.loop_percent,
        options.seed
    );

    let mut rng = get_rng(options.seed);
    let tree = randomized_dfs(&mut maze, options.pattern, &mut rng)?;
    maze.set_canonical_path(tree);

    if options.loop_percent > 0 {
        let opened = inject_loops(&mut maze, options.loop_percent, &mut rng)?;
        tracing::debug!("[generate] opened {} extra walls", opened);
        let path = bfs::shortest_path(&maze, maze.origin(), maze.goal())?;
        maze.set_canonical_path(path);
    }
    Ok(maze)
}
