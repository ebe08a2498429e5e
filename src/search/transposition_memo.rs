//! Negative-result transposition memo keyed by (board, side to move).
//!
//! Only "unreachable" verdicts are stored. For a fixed goal, reachability
//! from a (board, player) pair does not depend on how the board was reached,
//! so a stored `false` stays valid for the whole search. Positive results
//! unwind the search immediately and are never cached.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::board_state::board_state::CanonicalKey;
use crate::board_state::board_types::*;

const KEY_LEN: usize = CELL_COUNT + 1;

/// Flattened grid followed by a player tag, hashed as one value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoKey([u8; KEY_LEN]);

impl MemoKey {
    pub fn new(board: &BoardState, to_move: Player) -> Self {
        Self::from_parts(board.canonical_key(), to_move)
    }

    pub fn from_parts(board: CanonicalKey, to_move: Player) -> Self {
        let mut bytes = [0u8; KEY_LEN];
        bytes[..CELL_COUNT].copy_from_slice(board.as_bytes());
        bytes[CELL_COUNT] = to_move.symbol() as u8;
        Self(bytes)
    }

    pub fn to_move(&self) -> Player {
        if self.0[CELL_COUNT] == Cell::BLACK_SYMBOL as u8 {
            Player::Black
        } else {
            Player::White
        }
    }
}

impl fmt::Debug for MemoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = std::str::from_utf8(&self.0).map_err(|_| fmt::Error)?;
        write!(f, "MemoKey({}/{})", &text[..CELL_COUNT], &text[CELL_COUNT..])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TranspositionMemo {
    entries: FxHashMap<MemoKey, bool>,
    stats: MemoStats,
}

impl TranspositionMemo {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = MemoStats::default();
    }

    pub fn lookup(&mut self, key: &MemoKey) -> Option<bool> {
        self.stats.probes += 1;
        let hit = self.entries.get(key).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store_unreachable(&mut self, key: MemoKey) {
        self.stats.stores += 1;
        self.entries.insert(key, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_lookup() {
        let mut memo = TranspositionMemo::new();
        let board = BoardState::new_game();
        let key = MemoKey::new(&board, Player::Black);

        assert_eq!(memo.lookup(&key), None);
        memo.store_unreachable(key);
        assert_eq!(memo.lookup(&key), Some(false));
        assert_eq!(memo.len(), 1);
        assert_eq!(
            memo.stats(),
            MemoStats {
                probes: 2,
                hits: 1,
                stores: 1
            }
        );
    }

    #[test]
    fn player_is_part_of_the_key() {
        let mut memo = TranspositionMemo::new();
        let board = BoardState::new_game();
        memo.store_unreachable(MemoKey::new(&board, Player::Black));

        let white = MemoKey::new(&board, Player::White);
        assert_eq!(memo.lookup(&white), None);
        assert_eq!(white.to_move(), Player::White);
        assert_ne!(white, MemoKey::new(&board, Player::Black));
    }

    #[test]
    fn transposed_boards_share_a_key() {
        // Same position reached with and without history.
        let mut played = BoardState::new_game();
        assert!(played.apply_move(2, 3, Player::Black));
        let literal = BoardState::from_literal(&[
            "........", "........", "...x....", "...xx...", "...xo...", "........", "........",
            "........",
        ])
        .expect("parse");

        let mut memo = TranspositionMemo::new();
        memo.store_unreachable(MemoKey::new(&played, Player::White));
        assert_eq!(memo.lookup(&MemoKey::new(&literal, Player::White)), Some(false));
    }

    #[test]
    fn clear_resets_entries_and_stats() {
        let mut memo = TranspositionMemo::new();
        memo.store_unreachable(MemoKey::new(&BoardState::new_game(), Player::Black));
        memo.clear();
        assert!(memo.is_empty());
        assert_eq!(memo.stats(), MemoStats::default());
    }

    #[test]
    fn debug_output_shows_grid_and_player() {
        let key = MemoKey::new(&BoardState::new_game(), Player::White);
        let text = format!("{key:?}");
        assert!(text.ends_with("/o)"));
        assert!(text.contains("...ox......xo..."));
    }
}
