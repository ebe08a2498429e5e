use crate::board_state::board_types::*;

/// One cell touched by a move, with the value it held before the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub row: u8,
    pub col: u8,
    pub previous: Cell,
}

/// Single undo record for `apply_move` / `undo_last_move`.
///
/// The placed cell is always the first change (previous value `Empty`),
/// followed by every flipped cell in scan order.
#[derive(Debug, Clone, Default)]
pub struct UndoState {
    pub changes: Vec<CellChange>,
}

impl UndoState {
    #[inline]
    pub fn with_placement(row: u8, col: u8) -> Self {
        let mut changes = Vec::with_capacity(8);
        changes.push(CellChange {
            row,
            col,
            previous: Cell::Empty,
        });
        Self { changes }
    }

    #[inline]
    pub fn record_flip(&mut self, row: u8, col: u8, previous: Cell) {
        self.changes.push(CellChange { row, col, previous });
    }

    /// Number of opponent cells the move captured.
    #[inline]
    pub fn flipped(&self) -> usize {
        self.changes.len().saturating_sub(1)
    }
}
