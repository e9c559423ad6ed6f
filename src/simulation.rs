//! Batched random self-play over independent game sessions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SimulationError};
use crate::game::{GameConfig, GameSession, Player, SessionState, StepEvent, TerminationReason};

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub num_games: usize,
    pub num_threads: usize,
    /// Base seed; worker `i` uses `seed + i`. OS entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Probability that a mover picks any column in `[-1, width]` instead of a
    /// legal one.
    pub illegal_move_rate: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_games: 1000,
            num_threads: 4,
            seed: None,
            illegal_move_rate: 0.0,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_games == 0 {
            return Err(ConfigError::Validation(
                "simulation.num_games must be > 0".into(),
            ));
        }
        if self.num_threads == 0 {
            return Err(ConfigError::Validation(
                "simulation.num_threads must be >= 1".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.illegal_move_rate) {
            return Err(ConfigError::Validation(
                "simulation.illegal_move_rate must be in [0, 1)".into(),
            ));
        }
        Ok(())
    }
}

/// Picks uniformly among legal columns, occasionally (per `illegal_move_rate`)
/// among all columns plus one on each side.
pub struct RandomPlayer {
    rng: StdRng,
    illegal_move_rate: f64,
}

impl RandomPlayer {
    pub fn new(rng: StdRng, illegal_move_rate: f64) -> Self {
        RandomPlayer {
            rng,
            illegal_move_rate,
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng, 0.0)
    }

    pub fn with_illegal_move_rate(mut self, rate: f64) -> Self {
        self.illegal_move_rate = rate;
        self
    }

    /// Choose a column for the player to move. `None` once the game is over.
    pub fn select_column(&mut self, session: &GameSession) -> Option<i64> {
        let legal = session.legal_columns();
        if legal.is_empty() {
            return None;
        }
        if self.illegal_move_rate > 0.0 && self.rng.random_bool(self.illegal_move_rate) {
            let width = session.board().width() as i64;
            return Some(self.rng.random_range(-1..=width));
        }
        let idx = self.rng.random_range(0..legal.len());
        Some(legal[idx] as i64)
    }
}

/// Aggregated results of a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    pub illegal_move_losses: usize,
    /// Moves refused under the penalize policy
    pub rejected_moves: usize,
    pub total_moves: usize,
}

impl SimulationReport {
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::One => self.player_one_wins,
            Player::Two => self.player_two_wins,
        }
    }

    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins(player) as f64 / self.games as f64
    }

    pub fn draw_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f64 / self.games as f64
    }

    pub fn average_length(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }

    fn record(&mut self, reason: TerminationReason, moves: usize, rejected: usize) {
        self.games += 1;
        self.total_moves += moves;
        self.rejected_moves += rejected;
        match reason {
            TerminationReason::Win(Player::One) => self.player_one_wins += 1,
            TerminationReason::Win(Player::Two) => self.player_two_wins += 1,
            TerminationReason::Draw => self.draws += 1,
            TerminationReason::IllegalMove(_) => self.illegal_move_losses += 1,
        }
    }

    pub fn merge(&mut self, other: &SimulationReport) {
        self.games += other.games;
        self.player_one_wins += other.player_one_wins;
        self.player_two_wins += other.player_two_wins;
        self.draws += other.draws;
        self.illegal_move_losses += other.illegal_move_losses;
        self.rejected_moves += other.rejected_moves;
        self.total_moves += other.total_moves;
    }
}

/// Play one game to the end with both sides driven by `mover`.
pub fn play_random_game(
    session: &mut GameSession,
    mover: &mut RandomPlayer,
) -> Result<(TerminationReason, usize), SimulationError> {
    session.reset();
    let mut rejected = 0;
    while let Some(column) = mover.select_column(session) {
        let player = session.current_player();
        let outcome = session.step(player, column)?;
        if matches!(outcome.event, StepEvent::Rejected { .. }) && !outcome.terminated() {
            rejected += 1;
        }
        if let Some(reason) = outcome.reason() {
            return Ok((reason, rejected));
        }
    }
    match session.state() {
        SessionState::Terminated(reason) => Ok((reason, rejected)),
        // legal_columns is only empty once the session has terminated
        SessionState::InProgress => Ok((TerminationReason::Draw, rejected)),
    }
}

fn run_worker(
    game: GameConfig,
    games: usize,
    seed: Option<u64>,
    illegal_move_rate: f64,
) -> Result<SimulationReport, SimulationError> {
    let mut session = GameSession::new(game)?;
    let mut mover = RandomPlayer::from_seed(seed).with_illegal_move_rate(illegal_move_rate);

    let mut report = SimulationReport::default();
    for _ in 0..games {
        let (reason, rejected) = play_random_game(&mut session, &mut mover)?;
        report.record(reason, session.move_count(), rejected);
    }
    Ok(report)
}

/// Play `sim.num_games` random games spread over `sim.num_threads` workers.
///
/// Every worker owns its session and RNG; reports are merged after join.
pub fn simulate(game: &GameConfig, sim: &SimulationConfig) -> Result<SimulationReport, SimulationError> {
    game.validate()?;
    sim.validate()?;
    let threads = sim.num_threads.clamp(1, sim.num_games.max(1));
    let per_worker = sim.num_games / threads;
    let remainder = sim.num_games % threads;

    log::info!(
        "simulating {} games of {}x{} connect {} on {} threads",
        sim.num_games,
        game.height,
        game.width,
        game.connect,
        threads
    );

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|worker| {
                let games = per_worker + usize::from(worker < remainder);
                let seed = sim.seed.map(|s| s.wrapping_add(worker as u64));
                let game = *game;
                let rate = sim.illegal_move_rate;
                scope.spawn(move || run_worker(game, games, seed, rate))
            })
            .collect();
        handles.into_iter().map(|h| h.join()).collect()
    });

    let mut report = SimulationReport::default();
    for result in results {
        let worker_report = result.map_err(|_| SimulationError::WorkerPanicked)??;
        report.merge(&worker_report);
    }

    log::debug!("simulation finished: {report:?}");
    Ok(report)
}
