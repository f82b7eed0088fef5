//! Minimax tree search with alpha-beta pruning and a hand-tuned
//! board heuristic.
//!
//! The static score of a board, in favor of one player, is built from
//! these rules:
//! 1. a won branch is worth 10000, a lost branch -10000
//! 2. each friendly orb adds 1
//! 3. each friendly cell loses `5 - critical mass` per adjacent enemy
//!    cell that is one orb short of exploding
//! 4. a friendly safe cell (no such enemy neighbor) adds 3 in a corner
//!    and 2 on an edge
//! 5. a friendly safe cell one orb short of exploding adds 2
//! 6. a friendly cell one orb short of exploding adds 2 more when a
//!    friendly neighbor is also one orb short
//!
//! "critical" means one orb short of the cell's critical mass; "safe"
//! means no adjacent critical enemy cell.
//!
//! The search alternates a maximizing level over the player's moves and
//! a minimizing level over the opponent's, pruning with a fail-hard
//! alpha-beta window. The minimizer bottoms out at depth 0 by taking the
//! worst static score over the opponent's replies instead of recursing.

use crate::constants::{
    CELLS, CRITICAL_MASS, LOSS_SCORE, MAX_RANDOMNESS, RANDOM_WEIGHTS, WIN_SCORE,
};
use crate::engine::{Board, interact, neighbors, player_sign};

/// Static score of `board` in favor of `player`. Higher is better.
pub fn board_score(board: &Board, player: usize) -> i32 {
    let psign = player_sign(player);

    // per-cell critical friend and critical enemy tables
    let mut crit_friend = [false; CELLS];
    let mut crit_enemy = [false; CELLS];
    for i in 0..CELLS {
        let orbs = board[i] * psign;
        crit_friend[i] = orbs == CRITICAL_MASS[i] - 1;
        crit_enemy[i] = orbs == 1 - CRITICAL_MASS[i];
    }

    let mut score = 0;
    for i in 0..CELLS {
        // normalizing by the player sign makes friendly counts positive
        let plr_orbs = board[i] * psign;
        if plr_orbs <= 0 {
            continue;
        }

        let mut crit_friends = 0;
        let mut crit_enemies = 0;
        for n in neighbors(i) {
            if crit_friend[n] {
                crit_friends += 1;
            }
            if crit_enemy[n] {
                crit_enemies += 1;
            }
        }

        let mass = CRITICAL_MASS[i];
        score += plr_orbs;
        score -= crit_enemies * (5 - mass);

        if crit_enemies == 0 {
            if mass == 2 {
                score += 3;
            }
            if mass == 3 {
                score += 2;
            }
            if mass == plr_orbs + 1 {
                score += 2;
            }
        }

        if mass == plr_orbs + 1 && crit_friends > 0 {
            score += 2;
        }
    }

    score
}

/// Minimizing level at the search horizon: the worst static score over
/// all opponent replies, with the usual game-over and pruning exits.
pub fn score_minimizer(board: &Board, player: usize, alpha: i32, mut beta: i32) -> i32 {
    let enemy = 1 - player;
    let esign = player_sign(enemy);
    let mut score = WIN_SCORE;

    for mv in 0..CELLS {
        if board[mv] * esign < 0 {
            continue;
        }
        let Ok((child, game_over)) = interact(board, mv, enemy) else {
            continue;
        };
        if game_over {
            return LOSS_SCORE;
        }

        score = score.min(board_score(&child, player));
        beta = beta.min(score);
        if alpha >= beta {
            return score;
        }
    }

    score
}

/// Minimizing level: the opponent picks the reply that is worst for
/// `player`. At depth 0 the recursion bottoms out in [`score_minimizer`].
pub fn pruned_minimizer(board: &Board, player: usize, alpha: i32, mut beta: i32, depth: u32) -> i32 {
    if depth == 0 {
        return score_minimizer(board, player, alpha, beta);
    }

    let enemy = 1 - player;
    let esign = player_sign(enemy);
    let mut score = WIN_SCORE;

    for mv in 0..CELLS {
        if board[mv] * esign < 0 {
            continue;
        }
        let Ok((child, game_over)) = interact(board, mv, enemy) else {
            continue;
        };
        if game_over {
            return LOSS_SCORE;
        }

        score = score.min(pruned_maximizer(&child, player, alpha, beta, depth));
        beta = beta.min(score);
        if alpha >= beta {
            return score;
        }
    }

    score
}

/// Maximizing level: `player` picks the strongest move. A move that ends
/// the game wins the branch outright. Note that the maximizer does not
/// test the depth itself; it always descends one minimizing level, so a
/// search at depth `d` looks `2d + 1` plies ahead.
pub fn pruned_maximizer(board: &Board, player: usize, mut alpha: i32, beta: i32, depth: u32) -> i32 {
    let psign = player_sign(player);
    let mut score = LOSS_SCORE;

    for mv in 0..CELLS {
        if board[mv] * psign < 0 {
            continue;
        }
        let Ok((child, game_over)) = interact(board, mv, player) else {
            continue;
        };
        if game_over {
            return WIN_SCORE;
        }

        let child_score = pruned_minimizer(&child, player, alpha, beta, depth.saturating_sub(1));
        score = score.max(child_score);
        alpha = alpha.max(score);
        if alpha >= beta {
            return score;
        }
    }

    score
}

/// Score every cell as a root move for `player`.
///
/// Playable cells get the minimax value of the move; cells the player
/// cannot play stay `None`. An immediately winning move scores
/// [`WIN_SCORE`] without any deeper search. The shared root alpha rises
/// as scores come in, so later entries are fail-hard bounds rather than
/// exact values; the maximum of the array is exact.
pub fn load_scores(board: &Board, player: usize, depth: u32) -> [Option<i32>; CELLS] {
    let psign = player_sign(player);
    let mut scores = [None; CELLS];
    let mut alpha = LOSS_SCORE;

    for mv in 0..CELLS {
        if board[mv] * psign < 0 {
            continue;
        }
        let Ok((child, game_over)) = interact(board, mv, player) else {
            continue;
        };
        if game_over {
            scores[mv] = Some(WIN_SCORE);
            continue;
        }

        let score = pruned_minimizer(&child, player, alpha, WIN_SCORE, depth.saturating_sub(1));
        alpha = alpha.max(score);
        scores[mv] = Some(score);
    }

    scores
}

/// Pick a move for `player` from the root scores.
///
/// The scored moves are ranked best first. An immediately winning move
/// is always returned, as is the top move when at most one move scores
/// positive. Otherwise one of the top `randomness` positive-scored moves
/// is chosen at random with decreasing weights, which keeps the agent
/// strong but not fully predictable. Returns `None` when the player has
/// no playable cell.
pub fn best_move(board: &Board, player: usize, depth: u32, randomness: usize) -> Option<usize> {
    let scores = load_scores(board, player, depth);
    let mut heatmap: Vec<(usize, i32)> = scores
        .iter()
        .enumerate()
        .filter_map(|(mv, s)| s.map(|s| (mv, s)))
        .collect();
    if heatmap.is_empty() {
        return None;
    }
    // stable sort: equal scores keep cell order, first seen wins
    heatmap.sort_by(|a, b| b.1.cmp(&a.1));

    let n = randomness.clamp(1, MAX_RANDOMNESS);
    let top: Vec<(usize, i32)> = heatmap.iter().take(n).filter(|t| t.1 > 0).copied().collect();

    if heatmap[0].1 == WIN_SCORE || top.len() <= 1 {
        return Some(heatmap[0].0);
    }
    Some(weighted_pick(&top))
}

/// Weighted random choice among ranked moves, best first.
fn weighted_pick(ranked: &[(usize, i32)]) -> usize {
    let weights = &RANDOM_WEIGHTS[..ranked.len()];
    let total: u32 = weights.iter().sum();
    let mut roll = fastrand::u32(..total);
    for (&(mv, _), &weight) in ranked.iter().zip(weights) {
        if roll < weight {
            return mv;
        }
        roll -= weight;
    }
    ranked[0].0
}
