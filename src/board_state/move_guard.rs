//! Scoped apply/undo.
//!
//! `AppliedMove` holds the board mutably for as long as the move is being
//! explored. Dropping it undoes the move; `commit` keeps it. Every exit path
//! of a search frame therefore pairs exactly one undo with each apply.

use std::ops::{Deref, DerefMut};

use crate::board_state::board_types::*;

#[derive(Debug)]
pub struct AppliedMove<'a> {
    board: &'a mut BoardState,
    mv: Move,
    committed: bool,
}

impl<'a> AppliedMove<'a> {
    /// Wrap a board whose most recent undo record belongs to `mv`.
    pub(crate) fn new(board: &'a mut BoardState, mv: Move) -> Self {
        Self {
            board,
            mv,
            committed: false,
        }
    }

    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Keep the move on the board and release the guard.
    #[inline]
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Deref for AppliedMove<'_> {
    type Target = BoardState;

    fn deref(&self) -> &BoardState {
        &*self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut BoardState {
        &mut *self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.board.undo_last_move();
        }
    }
}
