use super::cell::Cell;
use crate::error::{MazeError, Result};

/// Dense row-major storage with one `T` per cell of a `rows x cols` maze.
pub struct Grid<T> {
    data: Box<[T]>,
    rows: u16,
    cols: u16,
}

impl<T: Clone> Grid<T> {
    pub fn new(rows: u16, cols: u16, value: T) -> Self {
        let data = vec![value; rows as usize * cols as usize].into_boxed_slice();
        Grid { data, rows, cols }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (1..=self.rows).contains(&cell.row) && (1..=self.cols).contains(&cell.col)
    }

    fn ravel_index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| (cell.row as usize - 1) * self.cols as usize + (cell.col as usize - 1))
    }

    fn out_of_range(&self, cell: Cell) -> MazeError {
        MazeError::OutOfRange {
            cell,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn get(&self, cell: Cell) -> Result<&T> {
        match self.ravel_index(cell) {
            Some(idx) => Ok(&self.data[idx]),
            None => Err(self.out_of_range(cell)),
        }
    }

    pub fn get_mut(&mut self, cell: Cell) -> Result<&mut T> {
        match self.ravel_index(cell) {
            Some(idx) => Ok(&mut self.data[idx]),
            None => Err(self.out_of_range(cell)),
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<T> {
        let cols = self.cols;
        (1..=self.rows).flat_map(move |row| (1..=cols).map(move |col| Cell::new(row, col)))
    }

    /// Cells paired with their values, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.cells().zip(self.data.iter())
    }
}

/// Panics on out-of-range cells; use [`Grid::get`] for a checked lookup.
impl<T> std::ops::Index<Cell> for Grid<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &Self::Output {
        match self.ravel_index(cell) {
            Some(idx) => &self.data[idx],
            None => panic!("cell {} is outside the {}x{} grid", cell, self.rows, self.cols),
        }
    }
}

impl<T> std::ops::IndexMut<Cell> for Grid<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        match self.ravel_index(cell) {
            Some(idx) => &mut self.data[idx],
            None => panic!("cell {} is outside the {}x{} grid", cell, self.rows, self.cols),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_order() {
        let grid = Grid::new(2, 3, 0u8);
        let cells = grid.cells().collect::<Vec<_>>();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(1, 1));
        assert_eq!(cells[2], Cell::new(1, 3));
        assert_eq!(cells[3], Cell::new(2, 1));
        assert_eq!(*cells.last().unwrap(), Cell::new(2, 3));
    }

    #[test]
    fn test_indexing() {
        let mut grid = Grid::new(3, 3, 0u32);
        grid[Cell::new(2, 3)] = 7;
        assert_eq!(grid[Cell::new(2, 3)], 7);
        assert_eq!(*grid.get(Cell::new(2, 3)).unwrap(), 7);
        assert_eq!(grid.iter().filter(|(_, v)| **v == 7).count(), 1);
    }

    #[test]
    fn test_out_of_range() {
        let grid = Grid::new(3, 4, 0u8);
        assert!(grid.contains(Cell::new(3, 4)));
        assert!(!grid.contains(Cell::new(0, 1)));
        assert!(!grid.contains(Cell::new(4, 1)));
        assert!(!grid.contains(Cell::new(1, 5)));
        assert!(matches!(
            grid.get(Cell::new(4, 4)),
            Err(MazeError::OutOfRange { rows: 3, cols: 4, .. })
        ));
    }
}
