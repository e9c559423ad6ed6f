use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_n::config::AppConfig;
use connect_n::game::Player;
use connect_n::simulation::simulate;

/// Play a batch of random connect-N games and report the results.
#[derive(Parser)]
#[command(name = "simulate", about = "Run batched random connect-N games")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override number of worker threads
    #[arg(long)]
    threads: Option<usize>,

    /// Seed the random movers for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.simulation.num_games = games;
    }
    if let Some(threads) = cli.threads {
        app_config.simulation.num_threads = threads;
    }
    if cli.seed.is_some() {
        app_config.simulation.seed = cli.seed;
    }
    app_config.validate().context("invalid configuration")?;

    let report = simulate(&app_config.game, &app_config.simulation).context("running simulation")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let game = &app_config.game;
    println!(
        "{} games on a {}x{} board, connect {}",
        report.games, game.height, game.width, game.connect
    );
    println!("-------------------------------------------");
    for player in Player::BOTH {
        println!(
            "{player} wins: {} ({:.1}%)",
            report.wins(player),
            report.win_rate(player) * 100.0
        );
    }
    println!("Draws: {} ({:.1}%)", report.draws, report.draw_rate() * 100.0);
    println!("Illegal-move losses: {}", report.illegal_move_losses);
    println!("Penalized moves: {}", report.rejected_moves);
    println!("Average game length: {:.1}", report.average_length());

    Ok(())
}
