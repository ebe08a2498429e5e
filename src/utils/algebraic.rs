//! Move notation: a column letter `A`-`H` followed by the 0-based row digit.
//!
//! `D2` is row 2, column 3. Lowercase letters are accepted on input.

use std::fmt;

use crate::board_state::board_types::*;
use crate::errors::BoardError;

/// Convert a (row, col) pair to notation such as `D2`.
#[inline]
pub fn cell_to_algebraic(row: u8, col: u8) -> Result<String, BoardError> {
    if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
        return Err(BoardError::OutOfRange {
            row: row as usize,
            col: col as usize,
        });
    }
    let file_char = char::from(b'A' + col);
    let rank_char = char::from(b'0' + row);
    Ok(format!("{file_char}{rank_char}"))
}

/// Convert notation such as `D2` to a (row, col) pair.
pub fn algebraic_to_cell(text: &str) -> Result<(u8, u8), BoardError> {
    let bytes = text.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(BoardError::InvalidNotation(text.to_owned()));
    }

    let file = bytes[0].to_ascii_uppercase();
    let rank = bytes[1];

    if !(b'A'..=b'H').contains(&file) || !(b'0'..=b'7').contains(&rank) {
        return Err(BoardError::InvalidNotation(text.to_owned()));
    }

    Ok((rank - b'0', file - b'A'))
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let square = cell_to_algebraic(self.row, self.col).map_err(|_| fmt::Error)?;
        write!(f, "{} {}", self.player.symbol(), square)
    }
}

/// One line per move, numbered from 1, as printed by the driver.
pub fn format_path(path: &[Move]) -> String {
    path.iter()
        .enumerate()
        .map(|(idx, mv)| {
            let square = cell_to_algebraic(mv.row, mv.col)
                .unwrap_or_else(|_| format!("({}, {})", mv.row, mv.col));
            format!("Move {}: Player {} to {}", idx + 1, mv.player.symbol(), square)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
