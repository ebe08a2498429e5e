//! Search statistics and periodic progress reporting.
//!
//! Reporting is cosmetic: it only reads the board and never influences the
//! search. Progress lines go through the `log` facade at `info` level, the
//! board snapshot that accompanies them at `debug` level.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::board_state::board_types::*;
use crate::utils::render_board_state::render_board_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: i64,
    /// Number of `search` frames entered, the root included.
    pub nodes: u64,
    /// Frames cut by the piece-count bound.
    pub count_prunes: u64,
    pub memo_hits: u64,
    pub memo_entries: usize,
}

impl SearchStats {
    pub fn starting_now() -> Self {
        Self {
            started_at: Utc::now(),
            elapsed_ms: 0,
            nodes: 0,
            count_prunes: 0,
            memo_hits: 0,
            memo_entries: 0,
        }
    }

    #[inline]
    pub fn refresh_elapsed(&mut self) {
        self.elapsed_ms = (Utc::now() - self.started_at).num_milliseconds();
    }

    pub fn nodes_per_second(&self) -> u64 {
        if self.elapsed_ms <= 0 {
            return self.nodes;
        }
        self.nodes.saturating_mul(1000) / self.elapsed_ms as u64
    }

    pub fn report(&self) -> String {
        format!(
            "nodes={} count_prunes={} memo_hits={} memo_entries={} elapsed_ms={} nps={}",
            self.nodes,
            self.count_prunes,
            self.memo_hits,
            self.memo_entries,
            self.elapsed_ms,
            self.nodes_per_second()
        )
    }
}

/// Emits a progress line every `interval` nodes. An interval of 0 disables it.
#[derive(Debug, Clone, Copy)]
pub struct ProgressReporter {
    interval: u64,
}

impl ProgressReporter {
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }

    #[inline]
    pub fn is_due(&self, nodes: u64) -> bool {
        self.interval != 0 && nodes % self.interval == 0
    }

    pub fn tick(&self, stats: &mut SearchStats, board: &BoardState) {
        if !self.is_due(stats.nodes) {
            return;
        }
        stats.refresh_elapsed();
        info!("search progress: {}", stats.report());
        debug!("current board:\n{}", render_board_state(board));
    }
}
