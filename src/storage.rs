//! Plain-text persistence of the wall-state map.
//!
//! One header row, then one record per cell in row-major order:
//!
//! ```text
//! cell,E,W,N,S
//! "(1, 1)",1,0,0,0
//! "(1, 2)",0,1,0,1
//! ...
//! ```
//!
//! The last record must be the bottom-right cell, since the grid size is read from it. There is
//! no newline after the last record.

use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    error::{MazeError, Result},
    maze::{Cell, Direction, Maze, Walls, grid::Grid},
    solvers::bfs,
};

const HEADER: [&str; 5] = ["cell", "E", "W", "N", "S"];

/// Serialize the wall-state map of `maze`.
pub fn to_csv(maze: &Maze) -> String {
    let mut lines = vec![HEADER.join(",")];
    lines.extend(maze.wall_map().map(|(cell, walls)| {
        let flags = walls.to_ewns().map(|open| if open { "1" } else { "0" });
        format!("\"{}\",{}", cell, flags.join(","))
    }));
    lines.join("\n")
}

/// Write `maze` to `path`, replacing any existing file.
pub fn save(maze: &Maze, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_csv(maze))?;
    tracing::info!(
        "[storage] saved {}x{} maze to {}",
        maze.rows(),
        maze.cols(),
        path.display()
    );
    Ok(())
}

/// File name for a maze saved without an explicit path, e.g. `maze--1760601600.csv`.
pub fn timestamped_file_name() -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    PathBuf::from(format!("maze--{}.csv", secs))
}

/// Read a maze file and rebuild the maze with `goal` as its goal.
pub fn load(path: impl AsRef<Path>, goal: Cell) -> Result<Maze> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let maze = parse_maze(&text, goal)?;
    tracing::info!(
        "[storage] loaded {}x{} maze from {}",
        maze.rows(),
        maze.cols(),
        path.display()
    );
    Ok(maze)
}

/// One data record: the line it came from, its cell and the wall flags.
struct Record {
    line: usize,
    cell: Cell,
    walls: Walls,
}

/// Rebuild a maze from its serialized wall-state map.
///
/// The loaded maze has no generation history, so its canonical path is computed with BFS from
/// the origin; it stays empty if the goal is walled off from the origin. Fails with
/// [`MazeError::Format`] on any malformed, missing, duplicated or asymmetric record.
pub fn parse_maze(text: &str, goal: Cell) -> Result<Maze> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')));

    match lines.next() {
        Some((line, header)) => check_header(line, header)?,
        None => return Err(MazeError::format(1, "file is empty")),
    }
    let records = lines
        .map(|(line, text)| parse_record(line, text))
        .collect::<Result<Vec<_>>>()?;

    let Some(last) = records.last() else {
        return Err(MazeError::format(2, "no cell records after the header"));
    };
    let (rows, cols) = (last.cell.row, last.cell.col);

    // Sizes are checked against the records before any grid is allocated
    if let Some(record) = records
        .iter()
        .find(|r| r.cell.row > rows || r.cell.col > cols)
    {
        return Err(MazeError::format(
            record.line,
            format!(
                "cell {} lies outside the {}x{} grid given by the last record",
                record.cell, rows, cols
            ),
        ));
    }
    let expected = rows as usize * cols as usize;
    if records.len() != expected {
        return Err(MazeError::format(
            last.line,
            format!(
                "a {}x{} grid needs {} records, found {}",
                rows,
                cols,
                expected,
                records.len()
            ),
        ));
    }

    let mut maze = Maze::new(rows, cols)?;
    let mut seen_at = Grid::new(rows, cols, 0usize);
    for record in &records {
        if seen_at[record.cell] != 0 {
            return Err(MazeError::format(
                record.line,
                format!(
                    "cell {} already defined at line {}",
                    record.cell, seen_at[record.cell]
                ),
            ));
        }
        seen_at[record.cell] = record.line;
        maze.set_walls(record.cell, record.walls)?;
    }

    if let Some((cell, direction)) = maze.asymmetric_wall() {
        let (row, col) = (cell.row, cell.col);
        let other = match direction {
            Direction::East => Cell::new(row, col + 1),
            _ => Cell::new(row + 1, col),
        };
        return Err(MazeError::format(
            seen_at[cell],
            format!(
                "wall {} of {} disagrees with wall {} of {}",
                direction,
                cell,
                direction.opposite(),
                other
            ),
        ));
    }

    maze.set_goal(goal)?;
    match bfs::shortest_path(&maze, maze.origin(), goal) {
        Ok(path) => maze.set_canonical_path(path),
        Err(MazeError::Unreachable { start, goal }) => {
            tracing::warn!(
                "[storage] goal {} is walled off from {}, canonical path left empty",
                goal,
                start
            );
        }
        Err(e) => return Err(e),
    }
    tracing::debug!(
        "[storage] parsed {} records, canonical path has {} steps",
        records.len(),
        maze.canonical_path().len()
    );
    Ok(maze)
}

fn check_header(line: usize, header: &str) -> Result<()> {
    let fields = header.split(',').map(str::trim).collect::<Vec<_>>();
    if fields != HEADER {
        return Err(MazeError::format(
            line,
            format!("expected header `{}`, found `{}`", HEADER.join(","), header),
        ));
    }
    Ok(())
}

fn parse_record(line: usize, text: &str) -> Result<Record> {
    let (coordinate, flags) = text
        .strip_prefix('"')
        .and_then(|rest| rest.split_once("\","))
        .ok_or_else(|| MazeError::format(line, "expected a quoted \"(row, col)\" field"))?;

    let cell = parse_coordinate(line, coordinate)?;

    let flags = flags.split(',').collect::<Vec<_>>();
    if flags.len() != 4 {
        return Err(MazeError::format(
            line,
            format!("expected 4 wall flags, found {}", flags.len()),
        ));
    }
    let mut open = [false; 4];
    for (slot, flag) in open.iter_mut().zip(&flags) {
        *slot = match flag.trim() {
            "0" => false,
            "1" => true,
            other => {
                return Err(MazeError::format(
                    line,
                    format!("wall flag must be 0 or 1, found `{}`", other),
                ));
            }
        };
    }
    let [east, west, north, south] = open;
    Ok(Record {
        line,
        cell,
        walls: Walls::from_ewns(east, west, north, south),
    })
}

fn parse_coordinate(line: usize, coordinate: &str) -> Result<Cell> {
    let (row, col) = coordinate
        .trim()
        .strip_prefix('(')
        .and_then(|c| c.strip_suffix(')'))
        .and_then(|c| c.split_once(','))
        .ok_or_else(|| {
            MazeError::format(line, format!("expected `(row, col)`, found `{}`", coordinate))
        })?;
    let parse = |value: &str| {
        value
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|&v| v > 0)
            .ok_or_else(|| {
                MazeError::format(
                    line,
                    format!("coordinate `{}` is not a positive integer", value.trim()),
                )
            })
    };
    Ok(Cell::new(parse(row)?, parse(col)?))
}
