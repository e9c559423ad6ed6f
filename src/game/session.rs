use serde::{Deserialize, Serialize};

use super::board::Board;
use super::grid::Cell;
use super::player::Player;
use super::rules::{GameConfig, GameOverPolicy, IllegalMovePolicy};
use super::win::WinDetector;
use crate::error::{ConfigError, MoveRejected, StepError};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    Win(Player),
    Draw,
    IllegalMove(Player),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Terminated(TerminationReason),
}

/// What a single `step` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// The piece landed and the game goes on.
    Placed { cell: Cell },
    /// The piece landed and completed a run.
    Won { cell: Cell },
    /// The board is full. `cell` is the final placement, or `None` when the
    /// player was already facing a full board.
    Drawn { cell: Option<Cell> },
    /// The board refused the move.
    Rejected { reason: MoveRejected },
    /// It was not this player's turn. Nothing changed.
    WrongTurn { expected: Player },
    /// The game had already ended. Nothing changed.
    AlreadyOver,
}

/// Result of one `step` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub player: Player,
    pub column: i64,
    pub event: StepEvent,
    pub state: SessionState,
    pub move_count: usize,
    pub step: usize,
}

impl Outcome {
    pub fn terminated(&self) -> bool {
        matches!(self.state, SessionState::Terminated(_))
    }

    pub fn reason(&self) -> Option<TerminationReason> {
        match self.state {
            SessionState::Terminated(reason) => Some(reason),
            SessionState::InProgress => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.reason() {
            Some(TerminationReason::Win(player)) => Some(player),
            _ => None,
        }
    }

    /// Human-readable description of the step.
    pub fn diagnostic(&self) -> String {
        let player = self.player;
        match self.event {
            StepEvent::Placed { cell } => {
                format!("{player} played column {} at ({}, {})", cell.col, cell.row, cell.col)
            }
            StepEvent::Won { cell } => {
                format!("{player} won by playing ({}, {})", cell.row, cell.col)
            }
            StepEvent::Drawn { cell: Some(cell) } => format!(
                "draw: the board is full after {player} played ({}, {})",
                cell.row, cell.col
            ),
            StepEvent::Drawn { cell: None } => format!("draw: {player} is facing a full board"),
            StepEvent::Rejected { reason } if self.terminated() => {
                format!("{player} made an illegal move and loses: {reason}")
            }
            StepEvent::Rejected { reason } => {
                format!("{player} made an illegal move and must play again: {reason}")
            }
            StepEvent::WrongTurn { expected } => {
                format!("not the turn of {player}, {expected} is to move")
            }
            StepEvent::AlreadyOver => "the game is over".to_string(),
        }
    }
}

/// A single game: owns the board and the turn and termination state.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    detector: WinDetector,
    current_player: Player,
    state: SessionState,
    move_count: usize,
    step_count: usize,
    last_move: Option<Cell>,
}

impl GameSession {
    /// Create a session after validating its configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(GameSession {
            config,
            board: Board::new(config.height, config.width),
            detector: WinDetector::new(config.connect),
            current_player: config.first_player,
            state: SessionState::InProgress,
            move_count: 0,
            step_count: 0,
            last_move: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, SessionState::Terminated(_))
    }

    /// Number of pieces placed since the last reset
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Number of `step` calls since the last reset, rejected ones included
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn last_move(&self) -> Option<Cell> {
        self.last_move
    }

    /// Columns the player to move may choose. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminated() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Return to the initial state with an empty board.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = self.config.first_player;
        self.state = SessionState::InProgress;
        self.move_count = 0;
        self.step_count = 0;
        self.last_move = None;
    }

    /// Submit a move for `player` in `column`.
    ///
    /// Rule violations and wrong-turn attempts come back as an `Outcome`. The
    /// only errors are a step after the game ended under
    /// `GameOverPolicy::Error`, and an engine fault in win detection.
    pub fn step(&mut self, player: Player, column: i64) -> Result<Outcome, StepError> {
        self.step_count += 1;
        let event = self.advance(player, column)?;
        let outcome = Outcome {
            player,
            column,
            event,
            state: self.state,
            move_count: self.move_count,
            step: self.step_count,
        };
        log::trace!("step {}: {}", outcome.step, outcome.diagnostic());
        Ok(outcome)
    }

    fn advance(&mut self, player: Player, column: i64) -> Result<StepEvent, StepError> {
        if self.is_terminated() {
            return match self.config.after_game_over {
                GameOverPolicy::Sentinel => Ok(StepEvent::AlreadyOver),
                GameOverPolicy::Error => Err(StepError::GameOver),
            };
        }

        if player != self.current_player {
            return Ok(StepEvent::WrongTurn {
                expected: self.current_player,
            });
        }

        let cell = match self.board.apply_move(player, column) {
            Ok(cell) => cell,
            Err(reason) => {
                if self.board.is_full() {
                    self.state = SessionState::Terminated(TerminationReason::Draw);
                    return Ok(StepEvent::Drawn { cell: None });
                }
                if self.config.on_illegal_move == IllegalMovePolicy::Terminate {
                    self.state =
                        SessionState::Terminated(TerminationReason::IllegalMove(player));
                }
                return Ok(StepEvent::Rejected { reason });
            }
        };

        self.move_count += 1;
        self.last_move = Some(cell);

        let won = match self.detector.check(&self.board, player, cell) {
            Ok(won) => won,
            Err(err) => {
                debug_assert!(false, "win detector rejected a fresh placement: {err}");
                return Err(err.into());
            }
        };

        if won {
            self.state = SessionState::Terminated(TerminationReason::Win(player));
            Ok(StepEvent::Won { cell })
        } else if self.board.is_full() {
            self.state = SessionState::Terminated(TerminationReason::Draw);
            Ok(StepEvent::Drawn { cell: Some(cell) })
        } else {
            self.current_player = player.other();
            Ok(StepEvent::Placed { cell })
        }
    }
}
