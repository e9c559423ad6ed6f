use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_n::config::AppConfig;
use connect_n::env::{ConnectEnv, RenderStyle};
use connect_n::game::SessionState;
use connect_n::simulation::RandomPlayer;

/// Play a connect-N game from a list of moves, or with random moves.
#[derive(Parser)]
#[command(name = "connect-n", about = "Play or replay a connect-N game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override the run length needed to win
    #[arg(long)]
    connect: Option<usize>,

    /// Columns to play, alternating from the first player (e.g. 3,3,4,2)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    moves: Option<Vec<i64>>,

    /// Seed for random moves when no move list is given
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board with ASCII characters instead of emoji
    #[arg(long)]
    ascii: bool,

    /// Log every step
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        app_config.game.height = height;
    }
    if let Some(width) = cli.width {
        app_config.game.width = width;
    }
    if let Some(connect) = cli.connect {
        app_config.game.connect = connect;
    }
    if cli.ascii {
        app_config.env.render_style = RenderStyle::Ascii;
    }
    if cli.verbose {
        app_config.env.verbose = true;
    }
    app_config.validate().context("invalid configuration")?;

    let mut env = ConnectEnv::from_app_config(&app_config).context("creating game")?;
    env.reset();

    let mut mover = RandomPlayer::from_seed(cli.seed);
    let mut scripted = cli.moves.map(Vec::into_iter);

    while !env.session().is_terminated() {
        let column = match scripted.as_mut() {
            Some(moves) => match moves.next() {
                Some(column) => column,
                None => break,
            },
            None => match mover.select_column(env.session()) {
                Some(column) => column,
                None => break,
            },
        };

        let player = env.session().current_player();
        let step = env
            .step_one(player, column)
            .with_context(|| format!("{player} playing column {column}"))?;

        println!("{}", step.info());
        println!("{}", env.render());
        for (player, reward) in &step.rewards {
            println!("  reward {player}: {reward}");
        }
    }

    match env.session().state() {
        SessionState::Terminated(reason) => {
            println!("Game over after {} moves: {reason:?}", env.session().move_count());
        }
        SessionState::InProgress => {
            if scripted.is_none() {
                bail!("random play stopped before the game ended");
            }
            println!(
                "Move list exhausted after {} moves, {} to play",
                env.session().move_count(),
                env.session().current_player()
            );
        }
    }

    Ok(())
}
