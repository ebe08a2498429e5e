//! Depth-first reachability search with negative-result memoization.
//!
//! Each frame answers "can `player`, moving now from `now`, reach the goal?"
//! The board is mutated in place; every explored move is held by an
//! `AppliedMove` guard so it is undone on every exit path except success,
//! where it is committed and the board is left in the goal state.
//!
//! Pass moves are not modelled: a side with no legal placement is a dead
//! end, even where the game itself would hand the turn to the opponent.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;

use crate::board_state::board_types::*;
use crate::errors::SearchError;
use crate::search::progress::{ProgressReporter, SearchStats};
use crate::search::transposition_memo::{MemoKey, TranspositionMemo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Nodes between progress lines; 0 disables progress reporting.
    pub progress_interval: u64,
    /// Memo size past which the search gives up with `ResourceExhausted`.
    pub max_memo_entries: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            progress_interval: 100_000,
            max_memo_entries: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub reachable: bool,
    /// Moves from the start board to the goal, in application order.
    pub path: Vec<Move>,
    pub stats: SearchStats,
}

/// A search against one fixed goal. The memo lives as long as the search,
/// so repeated runs against the same goal reuse earlier dead ends.
#[derive(Debug)]
pub struct ReachabilitySearch<'g> {
    goal: &'g BoardState,
    goal_total: u8,
    // Goal-occupied cells, row-major.
    candidates: Vec<(usize, usize)>,
    memo: TranspositionMemo,
    config: SearchConfig,
    reporter: ProgressReporter,
    stop_flag: Option<Arc<AtomicBool>>,
    stats: SearchStats,
}

impl<'g> ReachabilitySearch<'g> {
    pub fn new(goal: &'g BoardState, config: SearchConfig) -> Self {
        let mut candidates = Vec::with_capacity(goal.total_piece_count() as usize);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if goal.cell_at(row, col).is_ok_and(|cell| cell != Cell::Empty) {
                    candidates.push((row, col));
                }
            }
        }

        Self {
            goal,
            goal_total: goal.total_piece_count(),
            candidates,
            memo: TranspositionMemo::new(),
            config,
            reporter: ProgressReporter::new(config.progress_interval),
            stop_flag: None,
            stats: SearchStats::starting_now(),
        }
    }

    /// Check `flag` before every candidate; once set, the run returns `Cancelled`.
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }

    #[inline]
    pub fn memo(&self) -> &TranspositionMemo {
        &self.memo
    }

    /// Search from `now` with `first` to move.
    ///
    /// On success `now` is left in the goal state with the path's moves on
    /// its undo stack. On failure or error `now` is restored to its entry
    /// state.
    pub fn run(&mut self, now: &mut BoardState, first: Player) -> Result<SearchOutcome, SearchError> {
        self.stats = SearchStats::starting_now();
        let memo_hits_before = self.memo.stats().hits;

        debug!(
            "reachability search: start_pieces={} goal_pieces={} first={:?} candidates={}",
            now.total_piece_count(),
            self.goal_total,
            first,
            self.candidates.len()
        );

        let mut path = Vec::new();
        let reachable = self.search(now, first, &mut path)?;
        path.reverse();

        self.stats.memo_hits = self.memo.stats().hits - memo_hits_before;
        self.stats.memo_entries = self.memo.len();
        self.stats.refresh_elapsed();

        debug!(
            "reachability search finished: reachable={} path_len={} {}",
            reachable,
            path.len(),
            self.stats.report()
        );

        Ok(SearchOutcome {
            reachable,
            path,
            stats: self.stats,
        })
    }

    // `path` is filled on unwind, so it holds the winning line goal-first.
    fn search(
        &mut self,
        now: &mut BoardState,
        player: Player,
        path: &mut Vec<Move>,
    ) -> Result<bool, SearchError> {
        self.stats.nodes += 1;
        self.reporter.tick(&mut self.stats, now);

        if *now == *self.goal {
            return Ok(true);
        }

        // Placements only ever add pieces.
        if now.total_piece_count() >= self.goal_total {
            self.stats.count_prunes += 1;
            return Ok(false);
        }

        let key = MemoKey::new(now, player);
        if self.memo.lookup(&key) == Some(false) {
            return Ok(false);
        }

        for idx in 0..self.candidates.len() {
            self.check_stop()?;

            let (row, col) = self.candidates[idx];
            let Some(mut applied) = now.apply_scoped(row, col, player) else {
                continue;
            };

            if self.search(&mut applied, player.opposite(), path)? {
                path.push(applied.mv());
                applied.commit();
                return Ok(true);
            }
        }

        self.memo.store_unreachable(key);
        if let Some(limit) = self.config.max_memo_entries {
            if self.memo.len() > limit {
                return Err(SearchError::ResourceExhausted {
                    memo_entries: self.memo.len(),
                });
            }
        }

        Ok(false)
    }

    #[inline]
    fn check_stop(&self) -> Result<(), SearchError> {
        match &self.stop_flag {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(SearchError::Cancelled {
                nodes: self.stats.nodes,
            }),
            _ => Ok(()),
        }
    }
}

/// One-shot search from a copy of `start` with a fresh memo and the default
/// configuration, which never returns an error.
pub fn reachable(
    start: &BoardState,
    goal: &BoardState,
    first: Player,
) -> Result<SearchOutcome, SearchError> {
    let mut now = start.snapshot();
    ReachabilitySearch::new(goal, SearchConfig::default()).run(&mut now, first)
}
