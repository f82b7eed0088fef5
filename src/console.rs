//! Terminal front end: argument-driven agents and an interactive game
//! loop over stdin/stdout.
//!
//! The human plays as player 0 (`a`); the configured enemy controls
//! player 1 (`b`). Moves are entered as `row col` or as a flat cell
//! index; `quit` abandons the game.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::constants::{
    COLS, DEFAULT_C_PARAM, DEFAULT_DEPTH, DEFAULT_RANDOMNESS, DEFAULT_TIME_LIMIT, ROWS,
};
use crate::engine::{Board, cell_index, is_valid_move, valid_moves};
use crate::game::ChainReaction;
use crate::{mcts, minimax};

/// Who controls a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AgentKind {
    /// Moves read from stdin
    Human,
    /// Uniformly random legal moves
    Random,
    /// Depth-limited alpha-beta search
    Minimax,
    /// Time-limited Monte Carlo tree search
    Mcts,
}

/// Tuning knobs for the computer agents.
pub struct AgentOptions {
    pub depth: u32,
    pub randomness: usize,
    pub time_limit: Duration,
    pub c_param: f64,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            randomness: DEFAULT_RANDOMNESS,
            time_limit: Duration::from_secs_f64(DEFAULT_TIME_LIMIT),
            c_param: DEFAULT_C_PARAM,
        }
    }
}

/// Parse a move typed as `row col` or as a flat cell index.
pub fn parse_move(line: &str) -> Option<usize> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [index] => {
            let index: usize = index.parse().ok()?;
            (index < ROWS * COLS).then_some(index)
        }
        [row, col] => {
            let row: usize = row.parse().ok()?;
            let col: usize = col.parse().ok()?;
            (row < ROWS && col < COLS).then_some(cell_index(row, col))
        }
        _ => None,
    }
}

/// Ask a computer agent for a move. `None` means no playable cell.
fn agent_move(kind: AgentKind, board: &Board, player: usize, opts: &AgentOptions) -> Option<usize> {
    match kind {
        AgentKind::Human => unreachable!("human moves come from the prompt"),
        AgentKind::Random => {
            let moves = valid_moves(board, player);
            if moves.is_empty() {
                None
            } else {
                Some(moves[fastrand::usize(..moves.len())])
            }
        }
        AgentKind::Minimax => minimax::best_move(board, player, opts.depth, opts.randomness),
        AgentKind::Mcts => mcts::best_move(board, player, opts.time_limit, opts.c_param),
    }
}

/// Prompt the side to move until a playable move or an abort comes in.
/// `Ok(None)` means the human quit or stdin closed.
fn prompt_move(game: &ChainReaction) -> Result<Option<usize>> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("player {} move (row col, index, or quit): ", game.player);
        io::stdout().flush().context("flushing prompt")?;

        line.clear();
        if stdin
            .lock()
            .read_line(&mut line)
            .context("reading move")?
            == 0
        {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match parse_move(line) {
            Some(mv) if is_valid_move(&game.board, mv, game.player) => return Ok(Some(mv)),
            Some(_) => println!("that cell belongs to the opponent"),
            None => println!("could not read a move from {line:?}"),
        }
    }
}

/// Play one interactive game against `enemy`.
pub fn run_game(enemy: AgentKind, opts: &AgentOptions) -> Result<()> {
    let mut game = ChainReaction::new();
    println!("{game}");

    while !game.game_over {
        let kind = if game.player == 0 { AgentKind::Human } else { enemy };
        let mv = if kind == AgentKind::Human {
            match prompt_move(&game)? {
                Some(mv) => mv,
                None => {
                    println!("game abandoned");
                    return Ok(());
                }
            }
        } else {
            match agent_move(kind, &game.board, game.player, opts) {
                Some(mv) => {
                    println!("player {} ({kind:?}) plays {} {}", game.player, mv / COLS, mv % COLS);
                    mv
                }
                None => break,
            }
        };
        game.fast_play(mv).context("applying move")?;
        println!("{game}");
    }

    match game.winner {
        Some(winner) => println!("player {winner} wins after {} moves", game.moves),
        None => println!("no moves left"),
    }
    Ok(())
}

/// Scripted tour of the engine and both agents.
pub fn run_demo() -> Result<()> {
    println!("Chain Reaction: engine and agent demo\n");

    println!("=== Chain propagation ===");
    let mut game = ChainReaction::new();
    for mv in [0, 53, 0, 53] {
        game.fast_play(mv)?;
    }
    println!("corner explosions after four moves:");
    println!("{game}");

    println!("=== Root move scores ===");
    let scores = minimax::load_scores(&game.board, game.player, DEFAULT_DEPTH);
    let mut ranked: Vec<(usize, i32)> = scores
        .iter()
        .enumerate()
        .filter_map(|(mv, s)| s.map(|s| (mv, s)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    for &(mv, score) in ranked.iter().take(3) {
        println!("cell {:>2} ({} {}): {score}", mv, mv / COLS, mv % COLS);
    }
    println!();

    println!("=== Self-play: minimax vs random ===");
    let mut game = ChainReaction::new();
    let opts = AgentOptions::default();
    // generous cap in case both sides keep trading territory
    while !game.game_over && game.moves < 500 {
        let kind = if game.player == 0 { AgentKind::Minimax } else { AgentKind::Random };
        let Some(mv) = agent_move(kind, &game.board, game.player, &opts) else {
            break;
        };
        game.fast_play(mv)?;
    }
    println!("{game}");
    match game.winner {
        Some(winner) => println!("player {winner} wins after {} moves", game.moves),
        None => println!("no result"),
    }
    Ok(())
}
