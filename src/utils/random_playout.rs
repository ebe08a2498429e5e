//! Random alternating playouts.
//!
//! A playout of `plies` moves from a start board yields a goal that is known
//! to be reachable under the same alternation, which makes it a convenient
//! fixture for tests, benchmarks and the baseline runner.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::board_state::board_types::*;

#[derive(Debug, Clone)]
pub struct Playout {
    pub goal: BoardState,
    pub moves: Vec<Move>,
}

/// Play up to `plies` random legal moves, alternating from `first`.
///
/// Stops early when the side to move has no legal placement; no pass is
/// played. The returned goal carries no undo history.
pub fn random_playout<R: Rng + ?Sized>(
    start: &BoardState,
    first: Player,
    plies: usize,
    rng: &mut R,
) -> Playout {
    let mut board = start.clone();
    let mut moves = Vec::with_capacity(plies);
    let mut player = first;

    for _ in 0..plies {
        let legal = board.legal_moves(player);
        let Some(&mv) = legal.choose(rng) else {
            break;
        };
        board.apply_move(mv.row as usize, mv.col as usize, player);
        moves.push(mv);
        player = player.opposite();
    }

    Playout {
        goal: board.snapshot(),
        moves,
    }
}
