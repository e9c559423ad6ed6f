use super::grid::{Cell, Grid};
use super::player::Player;
use crate::error::MoveRejected;

/// Physical board state: one occupancy grid per player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    grids: [Grid; 2],
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            grids: [Grid::new(height, width), Grid::new(height, width)],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Occupancy grid of one player
    pub fn grid(&self, player: Player) -> &Grid {
        &self.grids[player.index()]
    }

    /// Occupancy of both players combined
    pub fn union_grid(&self) -> Grid {
        self.grids[0].union(&self.grids[1])
    }

    /// Get the player occupying a cell, if any
    pub fn occupant(&self, cell: Cell) -> Option<Player> {
        Player::BOTH
            .into_iter()
            .find(|&p| self.grid(p).get(cell.row, cell.col))
    }

    fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.grids.iter().any(|g| g.get(row, col))
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.width || self.height == 0 || self.is_occupied(0, col)
    }

    /// Row a piece dropped into `col` would land on
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height).rev().find(|&row| !self.is_occupied(row, col))
    }

    /// Columns that can still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece for `player` in `column`, returning the cell where it landed.
    pub fn apply_move(&mut self, player: Player, column: i64) -> Result<Cell, MoveRejected> {
        let col = match usize::try_from(column) {
            Ok(col) if col < self.width => col,
            _ => {
                return Err(MoveRejected::OutOfRange {
                    column,
                    width: self.width,
                })
            }
        };

        if self.is_column_full(col) {
            return Err(MoveRejected::ColumnFull { column: col });
        }

        // is_column_full guarantees row 0 is free, so a landing row exists
        let row = self
            .landing_row(col)
            .ok_or(MoveRejected::ColumnFull { column: col })?;
        self.grids[player.index()].set(row, col, true);
        Ok(Cell::new(row, col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.union_grid().all()
    }

    /// Number of occupied cells across both players
    pub fn occupied_count(&self) -> usize {
        self.grids.iter().map(Grid::count).sum()
    }

    /// Remove every piece
    pub fn clear(&mut self) {
        for grid in &mut self.grids {
            grid.clear();
        }
    }
}
