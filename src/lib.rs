//! Rectangular grid mazes: randomized depth-first carving with optional corridor bias and loop
//! injection, breadth-first and A* shortest paths, and a plain-text save format.
//!
//! # Examples
//! ```
//! use mazepath::{Cell, generators::{GenerationOptions, generate_maze}};
//!
//! let options = GenerationOptions {
//!     seed: Some(7),
//!     loop_percent: 20,
//!     ..Default::default()
//! };
//! let maze = generate_maze(8, 12, &options).unwrap();
//! let path = maze.path_from(Cell::new(8, 12)).unwrap();
//! assert!(path.len() >= 18);
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solvers;
pub mod storage;

pub use error::{MazeError, Result};
pub use maze::{Cell, Direction, Maze, Walls};
