//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;

use crate::{
    error::{MazeError, Result},
    generators::{GenerationOptions, Pattern},
    maze::{Cell, Maze},
    solvers::Solver,
};

/// Generate a random maze, or load one, and find the shortest way to its goal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: u16,

    /// Number of columns
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub cols: u16,

    /// Wall line width of graphical front ends. Accepted for compatibility, unused here
    #[arg(long, default_value_t = 2)]
    pub cell_density: u32,

    /// Row of the goal cell
    #[arg(long, default_value_t = 1)]
    pub goal_row: u16,

    /// Column of the goal cell
    #[arg(long, default_value_t = 1)]
    pub goal_col: u16,

    /// Row to solve from. Defaults to the last row
    #[arg(long)]
    pub start_row: Option<u16>,

    /// Column to solve from. Defaults to the last column
    #[arg(long)]
    pub start_col: Option<u16>,

    /// Corridor bias: none, horizontal (h) or vertical (v)
    #[arg(long, default_value_t = Pattern::None, conflicts_with = "load")]
    pub pattern: Pattern,

    /// Percentage of extra walls to open after carving, creating loops
    #[arg(
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=100),
        conflicts_with = "load"
    )]
    pub loop_percent: u8,

    /// Random seed
    #[arg(long, conflicts_with = "load")]
    pub seed: Option<u64>,

    /// Save the maze. Without a path, a timestamped file in the working directory is used
    #[arg(long, value_name = "PATH")]
    pub save: Option<Option<PathBuf>>,

    /// Load the maze from a file instead of generating one
    #[arg(long, value_name = "PATH", conflicts_with_all = ["rows", "cols"])]
    pub load: Option<PathBuf>,

    /// Solver used for the query from the start cell: bfs or astar
    #[arg(long, default_value = "astar")]
    pub solver: Solver,

    /// Draw the maze and the route on the terminal
    #[arg(short, long)]
    pub show: bool,

    /// Draw without colors
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to `mazepath.log` in this directory instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// Checks that clap cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.cell_density == 0 {
            return Err(MazeError::InvalidConfiguration(
                "cell density must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn goal(&self) -> Cell {
        Cell::new(self.goal_row, self.goal_col)
    }

    /// The cell to solve from, defaulting to the maze's origin.
    pub fn start(&self, maze: &Maze) -> Cell {
        Cell::new(
            self.start_row.unwrap_or(maze.rows()),
            self.start_col.unwrap_or(maze.cols()),
        )
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            goal: self.goal(),
            pattern: self.pattern,
            loop_percent: self.loop_percent,
            seed: self.seed,
        }
    }
}
