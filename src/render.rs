use std::fmt;

use crossterm::style::{Color, StyledContent, Stylize};

use crate::maze::{Cell, Direction, Maze};

/// One square of the text picture. Each cell and each wall between cells gets a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Tile {
    Wall,
    Open,
    Route,
    Start,
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    const WIDTH: usize = 2;

    fn styled(self) -> StyledContent<&'static str> {
        let styled = match self {
            Tile::Wall => "██".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Route => "··".with(Color::Yellow),
            Tile::Start => "S ".with(Color::Green),
            Tile::Goal => "G ".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled.content().width(),
                Tile::WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }
        styled
    }
}

/// Tile coordinates of a cell in the `(2 * rows + 1) x (2 * cols + 1)` picture.
fn tile_of(cell: Cell) -> (usize, usize) {
    (cell.row as usize * 2 - 1, cell.col as usize * 2 - 1)
}

/// Draw `maze` as text, marking the cells of `route` (start first) and the goal.
///
/// With `colored`, tiles carry ANSI colors for a terminal.
pub fn draw(maze: &Maze, route: &[Cell], colored: bool) -> String {
    let height = maze.rows() as usize * 2 + 1;
    let width = maze.cols() as usize * 2 + 1;
    let mut tiles = vec![vec![Tile::Wall; width]; height];

    for cell in maze.cells() {
        let (y, x) = tile_of(cell);
        tiles[y][x] = Tile::Open;
        if maze.passage(cell, Direction::East).is_some() {
            tiles[y][x + 1] = Tile::Open;
        }
        if maze.passage(cell, Direction::South).is_some() {
            tiles[y + 1][x] = Tile::Open;
        }
    }

    for pair in route.windows(2) {
        let (a, b) = (tile_of(pair[0]), tile_of(pair[1]));
        tiles[a.0][a.1] = Tile::Route;
        tiles[(a.0 + b.0) / 2][(a.1 + b.1) / 2] = Tile::Route;
    }
    if let Some(&start) = route.first() {
        let (y, x) = tile_of(start);
        tiles[y][x] = Tile::Start;
    }
    let (y, x) = tile_of(maze.goal());
    tiles[y][x] = Tile::Goal;

    let mut picture = String::with_capacity(height * (width * Tile::WIDTH + 1));
    for row in tiles {
        for tile in row {
            let styled = tile.styled();
            if colored {
                picture.push_str(&styled.to_string());
            } else {
                picture.push_str(styled.content());
            }
        }
        picture.push('\n');
    }
    picture
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", draw(self, &[], false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_plain() {
        let mut maze = Maze::new(1, 2).unwrap();
        maze.open_east(Cell::new(1, 1)).unwrap();
        let picture = draw(&maze, &[Cell::new(1, 2), Cell::new(1, 1)], false);
        let lines = picture.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "██████████");
        assert_eq!(lines[1], "██G ··S ██");
        assert_eq!(lines[2], "██████████");
    }

    #[test]
    fn test_display_shows_walls() {
        let maze = Maze::new(2, 2).unwrap();
        let picture = maze.to_string();
        assert_eq!(picture.lines().count(), 5);
        assert_eq!(picture.lines().nth(1), Some("██G ██  ██"));
        assert_eq!(picture.lines().nth(2), Some("██████████"));
    }
}
