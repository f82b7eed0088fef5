//! Game state wrapper: canonical board, alternating players, outcome.

use std::fmt;

use crate::constants::{CELLS, COLS, ROWS};
use crate::engine::{Board, EngineError, cell_index, interact_inplace, valid_moves};

/// A running game of chain reaction.
///
/// Player 0 renders as `a`, player 1 as `b`. The winner is the player
/// whose move eliminated the opponent.
pub struct ChainReaction {
    pub board: Board,
    /// Side to move.
    pub player: usize,
    pub game_over: bool,
    pub winner: Option<usize>,
    /// Number of moves played so far.
    pub moves: u32,
}

impl Default for ChainReaction {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainReaction {
    pub fn new() -> Self {
        Self {
            board: [0; CELLS],
            player: 0,
            game_over: false,
            winner: None,
            moves: 0,
        }
    }

    /// Apply a move for the side to move and hand the turn over.
    pub fn fast_play(&mut self, mv: usize) -> Result<(), EngineError> {
        if self.game_over {
            return Err(EngineError::GameAlreadyOver);
        }
        let game_over = interact_inplace(&mut self.board, mv, self.player)?;
        self.game_over = game_over;
        if game_over {
            self.winner = Some(self.player);
        }
        self.moves += 1;
        self.player = 1 - self.player;
        Ok(())
    }

    /// Playable cells for the side to move.
    pub fn valid_moves(&self) -> Vec<usize> {
        valid_moves(&self.board, self.player)
    }
}

impl fmt::Display for ChainReaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..COLS {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in 0..ROWS {
            write!(f, "{row:>3}")?;
            for col in 0..COLS {
                let cell = self.board[cell_index(row, col)];
                if cell > 0 {
                    write!(f, " {}a", cell)?;
                } else if cell < 0 {
                    write!(f, " {}b", -cell)?;
                } else {
                    write!(f, "  .")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_alternate() {
        let mut game = ChainReaction::new();
        assert_eq!(game.player, 0);
        game.fast_play(0).unwrap();
        assert_eq!(game.player, 1);
        assert_eq!(game.board[0], 1);
        game.fast_play(53).unwrap();
        assert_eq!(game.player, 0);
        assert_eq!(game.board[53], -1);
        assert_eq!(game.moves, 2);
        assert!(!game.game_over);
        assert_eq!(game.winner, None);
    }

    #[test]
    fn test_rejects_enemy_cell() {
        let mut game = ChainReaction::new();
        game.fast_play(10).unwrap();
        // player 1 cannot reinforce player 0's cell
        assert_eq!(game.fast_play(10), Err(EngineError::IllegalMove));
        // the failed attempt changed nothing
        assert_eq!(game.player, 1);
        assert_eq!(game.moves, 1);
    }

    #[test]
    fn test_winner_recorded() {
        let mut game = ChainReaction::new();
        game.board[0] = 1;
        game.board[1] = -1;
        game.board[7] = 1;
        game.fast_play(0).unwrap();
        assert!(game.game_over);
        assert_eq!(game.winner, Some(0));
        // no moves once the game is decided
        assert_eq!(game.fast_play(2), Err(EngineError::GameAlreadyOver));
    }

    #[test]
    fn test_render_marks_owners() {
        let mut game = ChainReaction::new();
        game.fast_play(0).unwrap();
        game.fast_play(53).unwrap();
        let shown = game.to_string();
        assert!(shown.contains("1a"));
        assert!(shown.contains("1b"));
    }
}
