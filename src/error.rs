use thiserror::Error;

use crate::maze::Cell;

pub type Result<T> = std::result::Result<T, MazeError>;

/// Everything that can go wrong while building, loading or solving a maze.
///
/// All operations are deterministic, so none of these are retried internally.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfRange { cell: Cell, rows: u16, cols: u16 },
    #[error("malformed maze file at line {line}: {reason}")]
    Format { line: usize, reason: String },
    #[error("goal {goal} is not reachable from {start}")]
    Unreachable { start: Cell, goal: Cell },
    #[error("maze file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl MazeError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        MazeError::Format {
            line,
            reason: reason.into(),
        }
    }
}
