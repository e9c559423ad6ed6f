use super::board::Board;
use super::grid::{Cell, Grid};
use super::player::Player;
use crate::error::WinError;

/// Decides whether the piece just played completes a run of `connect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinDetector {
    connect: usize,
}

impl WinDetector {
    pub fn new(connect: usize) -> Self {
        WinDetector { connect }
    }

    pub fn connect(&self) -> usize {
        self.connect
    }

    /// Check if the piece `player` just played at `cell` wins the game
    pub fn check(&self, board: &Board, player: Player, cell: Cell) -> Result<bool, WinError> {
        let grid = board.grid(player);
        if !grid.contains(cell) || !grid.get(cell.row, cell.col) {
            return Err(WinError::InvalidPosition {
                row: cell.row,
                col: cell.col,
                player,
            });
        }

        Ok(self.check_vertical(grid, cell)
            || self.check_horizontal(grid, cell)
            || diagonal_down_right(grid, cell, self.connect)
            || diagonal_down_right(&grid.mirrored(), cell.mirrored(grid.width()), self.connect))
    }

    /// Check vertical win (down from the position, pieces only stack upward)
    fn check_vertical(&self, grid: &Grid, cell: Cell) -> bool {
        if grid.height() - cell.row < self.connect {
            return false;
        }
        (cell.row..cell.row + self.connect).all(|row| grid.get(row, cell.col))
    }

    /// Check every horizontal window of `connect` that contains the column
    fn check_horizontal(&self, grid: &Grid, cell: Cell) -> bool {
        let Some(last_start) = grid.width().checked_sub(self.connect) else {
            return false;
        };
        let first = (cell.col + 1).saturating_sub(self.connect);
        let last = cell.col.min(last_start);

        (first..=last).any(|start| (start..start + self.connect).all(|col| grid.get(cell.row, col)))
    }
}

/// Look for `connect` consecutive owned cells on the top-left to bottom-right
/// diagonal through `cell`, within `connect - 1` steps either side of it.
///
/// The other diagonal is this check on the mirrored grid.
pub fn diagonal_down_right(grid: &Grid, cell: Cell, connect: usize) -> bool {
    if !grid.contains(cell) {
        return false;
    }
    let reach = connect.saturating_sub(1);
    let up_left = cell.row.min(cell.col).min(reach);
    let down_right = (grid.height() - cell.row - 1)
        .min(grid.width() - cell.col - 1)
        .min(reach);

    let span = up_left + down_right + 1;
    if span < connect {
        return false;
    }

    let (top, left) = (cell.row - up_left, cell.col - up_left);
    let mut run = 0;
    for k in 0..span {
        if grid.get(top + k, left + k) {
            run += 1;
            if run >= connect {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
