//! Wahoo simulator.
//!
//! ## Usage
//!
//! - `wahoo play` - Play one game with the standard strategy chain
//! - `wahoo tournament` - Evolve a strategy order over several sets
//! - `wahoo sweep` - Mean game length across board shapes
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_wahoo::core::{GameConfig, GameRng};
use rust_wahoo::game::{Game, GameOutcome};
use rust_wahoo::sim::{sweep_geometry, tournament, SimulationConfig};
use rust_wahoo::strategy::{Strategy, StrategyChain};

/// Simulate Wahoo games between heuristic strategies
#[derive(Parser)]
#[command(name = "wahoo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a single game and print the final board
    Play {
        #[command(flatten)]
        board: BoardArgs,

        /// Seed for dice and random choices
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Give up after this many turns
        #[arg(long, default_value_t = 10_000)]
        max_turns: u32,
    },
    /// Play sets of games with shuffled strategy orders, carrying the winner forward
    Tournament {
        #[command(flatten)]
        board: BoardArgs,

        #[arg(long, default_value_t = 20)]
        sets: u32,

        /// Games per set
        #[arg(long, default_value_t = 100)]
        games: u32,

        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Report mean game length for every combination of leg count and height
    Sweep {
        #[arg(long, value_delimiter = ',', default_values_t = [3, 4, 5, 6, 7])]
        legs: Vec<u8>,

        #[arg(long, value_delimiter = ',', default_values_t = [3, 4, 5])]
        heights: Vec<u8>,

        /// Games per shape
        #[arg(long, default_value_t = 100)]
        games: u32,

        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Args)]
struct BoardArgs {
    /// Number of legs
    #[arg(long, default_value_t = 6)]
    legs: u8,

    /// Height of each leg
    #[arg(long, default_value_t = 5)]
    height: u8,

    /// Number of players (defaults to one per leg)
    #[arg(long)]
    players: Option<usize>,
}

impl BoardArgs {
    fn config(&self) -> GameConfig {
        let config = GameConfig::full_table(self.legs, self.height);
        match self.players {
            Some(players) => config.with_players(players),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play {
            board,
            seed,
            max_turns,
        } => play(board.config(), seed, max_turns),
        Command::Tournament {
            board,
            sets,
            games,
            seed,
        } => run_tournament(board.config(), sets, games, seed),
        Command::Sweep {
            legs,
            heights,
            games,
            seed,
        } => run_sweep(&legs, &heights, games, seed),
    }
}

fn play(config: GameConfig, seed: u64, max_turns: u32) -> Result<()> {
    let mut game = Game::seeded(config, seed).context("invalid board")?;
    let mut policy = StrategyChain::standard(GameRng::new(seed).fork());
    let outcome = game.run_bounded(&mut policy, max_turns)?;

    println!("{}", game.board());
    match outcome {
        GameOutcome::Finished { winner, turns } => println!("{winner} wins after {turns} turns"),
        GameOutcome::TurnLimit { turns } => println!("no winner after {turns} turns"),
    }
    Ok(())
}

fn run_tournament(config: GameConfig, sets: u32, games: u32, seed: u64) -> Result<()> {
    let sim = SimulationConfig::new()
        .with_game(config)
        .with_games(games)
        .with_seed(seed);
    info!(sets, games, "starting tournament");
    let summaries = tournament(&sim, sets, &mut GameRng::new(seed))?;

    for (set, summary) in summaries.iter().enumerate() {
        let wins: Vec<String> = summary
            .report
            .win_histogram()
            .iter()
            .map(|(_, wins)| wins.to_string())
            .collect();
        println!("set {set}: wins [{}]", wins.join(" "));
        if let Some(order) = summary.best_order() {
            println!("  best order: {}", format_order(order));
        }
    }

    let best = summaries
        .last()
        .and_then(|summary| summary.best_order())
        .context("no set produced a winner")?;
    println!("Best strategy: {}", format_order(best));
    Ok(())
}

fn run_sweep(legs: &[u8], heights: &[u8], games: u32, seed: u64) -> Result<()> {
    let sim = SimulationConfig::new().with_games(games).with_seed(seed);
    for point in sweep_geometry(legs, heights, &sim)? {
        println!(
            "{} legs, leg length {}: {:.1} turns ({} truncated)",
            point.num_legs, point.leg_height, point.mean_turns, point.truncated
        );
    }
    Ok(())
}

fn format_order(order: &[Strategy]) -> String {
    let mut labels: Vec<&str> = order.iter().map(|strategy| strategy.label()).collect();
    labels.push("random");
    labels.join(" ")
}
