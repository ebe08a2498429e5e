//! Board-literal parser and generator.
//!
//! A literal is exactly eight rows of exactly eight symbols, each one of
//! `.` (empty), `x` (black) or `o` (white), listed top row first.

use crate::board_state::board_types::*;
use crate::errors::BoardError;

/// The "flat rose" opening shape used as the driver's default goal.
pub const FLAT_ROSE_GOAL: [&str; BOARD_SIZE] = [
    "........",
    "........",
    "...xx...",
    "...xxxx.",
    "..xoxo..",
    "..oooo..",
    "...o....",
    "........",
];

/// Fully validated literal contents, ready to be swapped into a board.
#[derive(Debug, Clone)]
pub struct ParsedLiteral {
    pub cells: [Cell; CELL_COUNT],
    pub black_count: u8,
    pub white_count: u8,
}

pub fn parse_board_literal<S: AsRef<str>>(rows: &[S]) -> Result<ParsedLiteral, BoardError> {
    if rows.len() != BOARD_SIZE {
        return Err(BoardError::invalid(format!(
            "expected {BOARD_SIZE} rows, got {}",
            rows.len()
        )));
    }

    let mut parsed = ParsedLiteral {
        cells: [Cell::Empty; CELL_COUNT],
        black_count: 0,
        white_count: 0,
    };

    for (row, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let width = line.chars().count();
        if width != BOARD_SIZE {
            return Err(BoardError::invalid(format!(
                "row {row} has {width} cells, expected {BOARD_SIZE}"
            )));
        }

        for (col, symbol) in line.chars().enumerate() {
            let cell = Cell::from_symbol(symbol).ok_or_else(|| {
                BoardError::invalid(format!("unknown cell symbol '{symbol}' at ({row}, {col})"))
            })?;
            match cell {
                Cell::Black => parsed.black_count += 1,
                Cell::White => parsed.white_count += 1,
                Cell::Empty => {}
            }
            parsed.cells[square_of(row, col)] = cell;
        }
    }

    Ok(parsed)
}

/// Parse a literal from text, one row per non-blank line.
///
/// Looser than `parse_board_literal`: each line is trimmed and blank lines
/// are skipped before the eight rows are checked.
pub fn parse_board_text(text: &str) -> Result<ParsedLiteral, BoardError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    parse_board_literal(&rows)
}

/// Generate the eight literal rows for a grid.
pub fn generate_board_literal(cells: &[Cell; CELL_COUNT]) -> Vec<String> {
    cells
        .chunks(BOARD_SIZE)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
