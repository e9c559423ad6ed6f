//! Core connect-N game logic: occupancy grids, gravity-drop board, win
//! detection, and the turn/termination state machine.

mod board;
mod grid;
mod player;
mod rules;
mod session;
mod win;

pub use board::Board;
pub use grid::{Cell, Grid};
pub use player::Player;
pub use rules::{GameConfig, GameOverPolicy, IllegalMovePolicy};
pub use session::{GameSession, Outcome, SessionState, StepEvent, TerminationReason};
pub use win::{diagonal_down_right, WinDetector};
