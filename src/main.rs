//! Chain-Reaction-Rust: a chain reaction game with adversarial agents.
//!
//! ## Usage
//!
//! - `chain-reaction-rust` - Run the engine demo
//! - `chain-reaction-rust play` - Play against the minimax agent
//! - `chain-reaction-rust play --enemy mcts` - Play against the MCTS agent

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use chain_reaction::console::{self, AgentKind, AgentOptions};
use chain_reaction::constants::{
    DEFAULT_C_PARAM, DEFAULT_DEPTH, DEFAULT_RANDOMNESS, DEFAULT_TIME_LIMIT,
};

/// Chain reaction on a 9x6 grid, with minimax and MCTS opponents
#[derive(Parser)]
#[command(name = "chain-reaction-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play {
        /// Opponent controlling the second player
        #[arg(long, value_enum, default_value = "minimax")]
        enemy: AgentKind,

        /// Minimax search depth
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,

        /// Number of top-scored moves the minimax agent picks among
        #[arg(long, default_value_t = DEFAULT_RANDOMNESS)]
        randomness: usize,

        /// MCTS time budget per move, in seconds
        #[arg(long, default_value_t = DEFAULT_TIME_LIMIT)]
        time_limit: f64,

        /// MCTS exploration constant
        #[arg(long, default_value_t = DEFAULT_C_PARAM)]
        c_param: f64,
    },
    /// Run a scripted demo of the engine and agents
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            enemy,
            depth,
            randomness,
            time_limit,
            c_param,
        }) => {
            let opts = AgentOptions {
                depth,
                randomness,
                time_limit: Duration::from_secs_f64(time_limit),
                c_param,
            };
            console::run_game(enemy, &opts)
        }
        Some(Commands::Demo) | None => console::run_demo(),
    }
}
