//! Core value types for the flipping-board model: cell contents, the side
//! to move, and the move triple reported in search paths.

pub use crate::board_state::board_state::BoardState;
pub use crate::board_state::undo_state::{CellChange, UndoState};

pub const BOARD_SIZE: usize = 8;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    pub const EMPTY_SYMBOL: char = '.';
    pub const BLACK_SYMBOL: char = 'x';
    pub const WHITE_SYMBOL: char = 'o';

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => Self::EMPTY_SYMBOL,
            Cell::Black => Self::BLACK_SYMBOL,
            Cell::White => Self::WHITE_SYMBOL,
        }
    }

    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            Self::EMPTY_SYMBOL => Some(Cell::Empty),
            Self::BLACK_SYMBOL => Some(Cell::Black),
            Self::WHITE_SYMBOL => Some(Cell::White),
            _ => None,
        }
    }

    /// Owner of the cell, `None` when empty.
    #[inline]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    #[inline]
    pub const fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        self.cell().symbol()
    }
}

/// A placement by `player` at (`row`, `col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
    pub player: Player,
}

impl Move {
    #[inline]
    pub const fn new(row: u8, col: u8, player: Player) -> Self {
        Self { row, col, player }
    }
}

#[inline]
pub const fn square_of(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

#[inline]
pub const fn in_bounds(row: isize, col: isize) -> bool {
    row >= 0 && row < BOARD_SIZE as isize && col >= 0 && col < BOARD_SIZE as isize
}
