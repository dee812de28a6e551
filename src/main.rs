//! Reversi-Rust: a decision engine for the classic disc-flipping game.
//!
//! ## Usage
//!
//! - `reversi-rust` - Show a demo
//! - `reversi-rust demo` - Same
//! - `reversi-rust play --dark minimax --light mcts` - Run a full game

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use reversi_rust::board::BoardState;
use reversi_rust::constants::{DEFAULT_BOARD_SIZE, DEFAULT_MINIMAX_DEPTH, EXPLOIT_PROBABILITY};
use reversi_rust::game::play_game;
use reversi_rust::mcts::{MctsConfig, MonteCarloTreeSearchStrategy};
use reversi_rust::minimax::MinimaxStrategy;
use reversi_rust::strategy::{RandomStrategy, Strategy};

/// Reversi-Rust: minimax and Monte Carlo engines for the disc game
#[derive(Parser)]
#[command(name = "reversi-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full game between two engines and print the result
    Play {
        /// Board side length (clamped to at least 2)
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Engine for the dark (first-moving) side
        #[arg(long, value_enum, default_value = "minimax")]
        dark: EngineKind,
        /// Engine for the light side
        #[arg(long, value_enum, default_value = "mcts")]
        light: EngineKind,
        /// Minimax lookahead in plies
        #[arg(long, default_value_t = DEFAULT_MINIMAX_DEPTH)]
        depth: u32,
        /// Monte Carlo iterations per move
        #[arg(long, default_value_t = 2_000)]
        iterations: usize,
        /// Fraction of Monte Carlo descent steps that exploit the current
        /// best child
        #[arg(long, default_value_t = EXPLOIT_PROBABILITY)]
        exploit: f64,
        /// Seed for every random source, for reproducible games
        #[arg(long)]
        seed: Option<u64>,
        /// Print each position as it is reached
        #[arg(long)]
        show_boards: bool,
    },
    /// Run a short demonstration of both engines
    Demo,
}

#[derive(Copy, Clone, ValueEnum)]
enum EngineKind {
    Minimax,
    Mcts,
    Random,
}

fn build_engine(
    kind: EngineKind,
    depth: u32,
    config: MctsConfig,
    seed: Option<u64>,
) -> Box<dyn Strategy> {
    match kind {
        EngineKind::Minimax => Box::new(MinimaxStrategy::new(depth)),
        EngineKind::Mcts => match seed {
            Some(seed) => Box::new(MonteCarloTreeSearchStrategy::seeded(config, seed)),
            None => Box::new(MonteCarloTreeSearchStrategy::with_config(config)),
        },
        EngineKind::Random => match seed {
            Some(seed) => Box::new(RandomStrategy::with_seed(seed)),
            None => Box::new(RandomStrategy::new()),
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Play {
            size,
            dark,
            light,
            depth,
            iterations,
            exploit,
            seed,
            show_boards,
        }) => {
            let config = MctsConfig {
                iterations,
                exploit_probability: exploit,
            };
            let mut dark_engine = build_engine(dark, depth, config, seed);
            let mut light_engine = build_engine(light, depth, config, seed.map(|s| s + 1));
            run_match(size, dark_engine.as_mut(), light_engine.as_mut(), show_boards);
        }
        Some(Commands::Demo) | None => run_demo(),
    }
    Ok(())
}

fn run_match(size: usize, dark: &mut dyn Strategy, light: &mut dyn Strategy, show_boards: bool) {
    let state = BoardState::new(size);
    println!(
        "{} (X) vs {} (O) on a {}x{} board\n",
        dark.name(),
        light.name(),
        state.size,
        state.size
    );
    println!("{state}");
    let result = play_game(state, dark, light, show_boards);
    println!("{}", result.final_state);
    println!(
        "Finished after {} discs and {} passes; final differential {}",
        result.plies, result.passes, result.score
    );
    match result.winner {
        Some(winner) => println!("Winner: {winner}"),
        None => println!("Draw"),
    }
}

fn run_demo() {
    println!("Reversi-Rust: minimax and Monte Carlo engines\n");

    let state = BoardState::new(DEFAULT_BOARD_SIZE);
    println!("Opening position:\n{state}");

    let mut minimax = MinimaxStrategy::new(DEFAULT_MINIMAX_DEPTH);
    match minimax.choose_move(&state) {
        Some(mv) => println!("minimax (depth {DEFAULT_MINIMAX_DEPTH}) plays {mv}"),
        None => println!("minimax passes"),
    }

    let config = MctsConfig {
        iterations: 1_000,
        ..Default::default()
    };
    let mut mcts = MonteCarloTreeSearchStrategy::with_config(config);
    match mcts.choose_move(&state) {
        Some(mv) => println!("mcts ({} iterations) plays {mv}", config.iterations),
        None => println!("mcts passes"),
    }
}
