use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{Board, Cell, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    /// Blue squares for empty cells, yellow and red discs for the players.
    #[default]
    Emoji,
    /// `.` for empty cells, `X` for player 1, `O` for player 2.
    Ascii,
}

impl RenderStyle {
    fn symbol(self, owner: Option<Player>) -> &'static str {
        match (self, owner) {
            (RenderStyle::Emoji, None) => "\u{1f7e6}",
            (RenderStyle::Emoji, Some(Player::One)) => "\u{1f7e1}",
            (RenderStyle::Emoji, Some(Player::Two)) => "\u{1f534}",
            (RenderStyle::Ascii, None) => ".",
            (RenderStyle::Ascii, Some(Player::One)) => "X",
            (RenderStyle::Ascii, Some(Player::Two)) => "O",
        }
    }
}

/// Display adapter that prints one board row per line.
pub struct BoardDisplay<'a> {
    board: &'a Board,
    style: RenderStyle,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board, style: RenderStyle) -> Self {
        BoardDisplay { board, style }
    }
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.board.height() {
            for col in 0..self.board.width() {
                let owner = self.board.occupant(Cell::new(row, col));
                f.write_str(self.style.symbol(owner))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the board as text
pub fn render(board: &Board, style: RenderStyle) -> String {
    BoardDisplay::new(board, style).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_render() {
        let mut board = Board::new(3, 4);
        board.apply_move(Player::One, 0).unwrap();
        board.apply_move(Player::Two, 0).unwrap();
        board.apply_move(Player::One, 3).unwrap();
        assert_eq!(render(&board, RenderStyle::Ascii), "....\nO...\nX..X\n");
    }

    #[test]
    fn test_emoji_render() {
        let mut board = Board::new(1, 3);
        board.apply_move(Player::Two, 1).unwrap();
        assert_eq!(render(&board, RenderStyle::Emoji), "🟦🔴🟦\n");
    }
}
