use serde::{Deserialize, Serialize};

/// A position on the board. Row 0 is the top row, column 0 the leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// The same cell reflected across the vertical axis of a board `width` wide.
    pub fn mirrored(self, width: usize) -> Cell {
        Cell {
            row: self.row,
            col: width - 1 - self.col,
        }
    }
}

/// Fixed-size boolean occupancy matrix, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(height: usize, width: usize) -> Self {
        Grid {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Occupancy at (row, col). Out-of-bounds coordinates read as empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    pub fn set(&mut self, row: usize, col: usize, occupied: bool) {
        self.cells[row * self.width + col] = occupied;
    }

    /// True if every cell is occupied
    pub fn all(&self) -> bool {
        self.cells.iter().all(|&c| c)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Cell-wise OR of two same-shaped grids.
    pub fn union(&self, other: &Grid) -> Grid {
        debug_assert_eq!((self.height, self.width), (other.height, other.width));
        Grid {
            height: self.height,
            width: self.width,
            cells: self
                .cells
                .iter()
                .zip(&other.cells)
                .map(|(&a, &b)| a || b)
                .collect(),
        }
    }

    /// True if any cell is occupied in both grids.
    pub fn overlaps(&self, other: &Grid) -> bool {
        self.cells.iter().zip(&other.cells).any(|(&a, &b)| a && b)
    }

    /// Left-right reflection of the grid.
    pub fn mirrored(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in self.cells.chunks(self.width.max(1)) {
            cells.extend(row.iter().rev());
        }
        Grid {
            height: self.height,
            width: self.width,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(6, 7);
        assert_eq!(grid.count(), 0);
        assert!(!grid.all());
        assert!(!grid.get(5, 6));
    }

    #[test]
    fn test_out_of_bounds_reads_empty() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 1, true);
        assert!(grid.get(1, 1));
        assert!(!grid.get(2, 1));
        assert!(!grid.get(1, 2));
    }

    #[test]
    fn test_union_and_overlap() {
        let mut a = Grid::new(2, 3);
        let mut b = Grid::new(2, 3);
        a.set(0, 0, true);
        b.set(1, 2, true);
        assert!(!a.overlaps(&b));

        let u = a.union(&b);
        assert_eq!(u.count(), 2);
        assert!(u.get(0, 0) && u.get(1, 2));

        b.set(0, 0, true);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_mirrored() {
        let mut grid = Grid::new(2, 3);
        grid.set(0, 0, true);
        grid.set(1, 1, true);
        let m = grid.mirrored();
        assert!(m.get(0, 2));
        assert!(m.get(1, 1));
        assert!(!m.get(0, 0));
        assert_eq!(m.mirrored(), grid);
    }

    #[test]
    fn test_cell_mirrored() {
        assert_eq!(Cell::new(3, 0).mirrored(7), Cell::new(3, 6));
        assert_eq!(Cell::new(3, 3).mirrored(7), Cell::new(3, 3));
    }

    #[test]
    fn test_clear_and_all() {
        let mut grid = Grid::new(1, 2);
        grid.set(0, 0, true);
        grid.set(0, 1, true);
        assert!(grid.all());
        grid.clear();
        assert_eq!(grid.count(), 0);
    }
}
