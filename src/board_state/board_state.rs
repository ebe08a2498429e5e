//! Core in-place board representation.
//!
//! `BoardState` stores the 8x8 grid, incrementally maintained piece
//! counters, and the undo stack used by apply/undo style search. Identity is
//! the grid alone: two boards with different histories but the same cells
//! compare and hash equal.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board_state::board_types::*;
use crate::board_state::flip_rules::{capture_run_length, captures_any, DIRECTIONS, STARTING_POSITION};
use crate::board_state::move_guard::AppliedMove;
use crate::errors::BoardError;
use crate::utils::board_literal::{
    generate_board_literal, parse_board_literal, parse_board_text, ParsedLiteral,
};

/// Incremental board state optimized for fast apply/undo.
#[derive(Debug, Clone)]
pub struct BoardState {
    // Row-major grid.
    cells: [Cell; CELL_COUNT],

    // Derived counters, kept in step with `cells`.
    black_count: u8,
    white_count: u8,

    // Apply/undo stack.
    undo_stack: Vec<UndoState>,
}

/// Fixed-length serialization of a grid, one symbol per cell, row-major.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey([u8; CELL_COUNT]);

impl Default for BoardState {
    fn default() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            black_count: 0,
            white_count: 0,
            undo_stack: Vec::new(),
        }
    }
}

impl BoardState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard four-piece opening position.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for (row, line) in STARTING_POSITION.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                if let Some(cell) = Cell::from_symbol(symbol) {
                    board.put(row, col, cell);
                }
            }
        }
        board
    }

    pub fn from_literal<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let mut board = Self::new_empty();
        board.set_from_literal(rows)?;
        Ok(board)
    }

    /// Parse a literal written one row per line; blank lines are ignored.
    pub fn from_text(text: &str) -> Result<Self, BoardError> {
        let ParsedLiteral {
            cells,
            black_count,
            white_count,
        } = parse_board_text(text)?;
        Ok(Self {
            cells,
            black_count,
            white_count,
            undo_stack: Vec::new(),
        })
    }

    /// Replace the grid with a literal. On error the board is left untouched;
    /// on success the undo history is cleared.
    pub fn set_from_literal<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), BoardError> {
        let ParsedLiteral {
            cells,
            black_count,
            white_count,
        } = parse_board_literal(rows)?;

        self.cells = cells;
        self.black_count = black_count;
        self.white_count = white_count;
        self.undo_stack.clear();
        Ok(())
    }

    /// Copy of the grid and counters without the undo history.
    pub fn snapshot(&self) -> Self {
        Self {
            cells: self.cells,
            black_count: self.black_count,
            white_count: self.white_count,
            undo_stack: Vec::new(),
        }
    }

    pub fn to_literal(&self) -> Vec<String> {
        generate_board_literal(&self.cells)
    }

    #[inline]
    pub fn black_count(&self) -> u8 {
        self.black_count
    }

    #[inline]
    pub fn white_count(&self) -> u8 {
        self.white_count
    }

    #[inline]
    pub fn empty_count(&self) -> u8 {
        CELL_COUNT as u8 - self.total_piece_count()
    }

    #[inline]
    pub fn total_piece_count(&self) -> u8 {
        self.black_count + self.white_count
    }

    #[inline]
    pub fn count(&self, player: Player) -> u8 {
        match player {
            Player::Black => self.black_count,
            Player::White => self.white_count,
        }
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(self.cells[square_of(row, col)])
    }

    /// Number of moves that can still be undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_legal_move(&self, row: usize, col: usize, player: Player) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        if self.cells[square_of(row, col)] != Cell::Empty {
            return false;
        }
        captures_any(&self.cells, row, col, player)
    }

    /// Place `player` at (`row`, `col`) and flip every captured run.
    ///
    /// Returns false and leaves the board untouched when the move is illegal.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> bool {
        if !self.is_legal_move(row, col, player) {
            return false;
        }

        let own = player.cell();
        let mut undo = UndoState::with_placement(row as u8, col as u8);

        // Measure every ray before the first write.
        let runs =
            DIRECTIONS.map(|direction| capture_run_length(&self.cells, row, col, direction, player));

        self.put(row, col, own);

        for (&(d_row, d_col), &run) in DIRECTIONS.iter().zip(runs.iter()) {
            let mut r = row as isize;
            let mut c = col as isize;
            for _ in 0..run {
                r += d_row;
                c += d_col;
                let (r, c) = (r as usize, c as usize);
                undo.record_flip(r as u8, c as u8, self.cells[square_of(r, c)]);
                self.put(r, c, own);
            }
        }

        self.undo_stack.push(undo);
        true
    }

    /// Revert the most recent successful `apply_move`. No-op on an empty history.
    pub fn undo_last_move(&mut self) {
        let Some(undo) = self.undo_stack.pop() else {
            return;
        };

        for change in undo.changes.iter().rev() {
            self.put(change.row as usize, change.col as usize, change.previous);
        }
    }

    /// Apply a move behind a guard that undoes it on drop unless committed.
    pub fn apply_scoped(&mut self, row: usize, col: usize, player: Player) -> Option<AppliedMove<'_>> {
        if !self.apply_move(row, col, player) {
            return None;
        }
        Some(AppliedMove::new(self, Move::new(row as u8, col as u8, player)))
    }

    /// Every legal placement for `player`, row-major.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.is_legal_move(row, col, player) {
                    moves.push(Move::new(row as u8, col as u8, player));
                }
            }
        }
        moves
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        (0..CELL_COUNT).any(|sq| self.is_legal_move(sq / BOARD_SIZE, sq % BOARD_SIZE, player))
    }

    pub fn canonical_key(&self) -> CanonicalKey {
        CanonicalKey(self.cells.map(|cell| cell.symbol() as u8))
    }

    pub fn to_flat_string(&self) -> String {
        self.cells.iter().map(|cell| cell.symbol()).collect()
    }

    /// Write one cell and move the counters from the old owner to the new one.
    #[inline]
    fn put(&mut self, row: usize, col: usize, cell: Cell) {
        let slot = &mut self.cells[square_of(row, col)];
        match *slot {
            Cell::Black => self.black_count -= 1,
            Cell::White => self.white_count -= 1,
            Cell::Empty => {}
        }
        match cell {
            Cell::Black => self.black_count += 1,
            Cell::White => self.white_count += 1,
            Cell::Empty => {}
        }
        *slot = cell;
    }
}

impl PartialEq for BoardState {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for BoardState {}

impl Hash for BoardState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl CanonicalKey {
    #[inline]
    pub fn as_bytes(&self) -> &[u8; CELL_COUNT] {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = std::str::from_utf8(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl fmt::Debug for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalKey({self})")
    }
}
