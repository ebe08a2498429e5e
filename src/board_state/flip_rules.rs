//! Canonical flipping-board rule constants and the shared capture scan.
//!
//! Legality testing and move application both go through
//! [`capture_run_length`], so the two can never disagree about which rays
//! capture.

use crate::board_state::board_types::*;

/// Standard opening layout: White on (3,3) and (4,4), Black on (3,4) and (4,3).
pub const STARTING_POSITION: [&str; BOARD_SIZE] = [
    "........",
    "........",
    "........",
    "...ox...",
    "...xo...",
    "........",
    "........",
    "........",
];

/// The eight compass offsets as `(d_row, d_col)`.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Scan outward from (`row`, `col`) along one direction and return how many
/// opponent cells `player` would capture on that ray.
///
/// Returns 0 when the ray runs off the grid or reaches an empty cell before
/// a `player` cell, and also when the first neighbour already belongs to
/// `player`. The origin cell itself is not inspected.
#[inline]
pub fn capture_run_length(
    cells: &[Cell; CELL_COUNT],
    row: usize,
    col: usize,
    direction: (isize, isize),
    player: Player,
) -> usize {
    let own = player.cell();
    let opponent = player.opposite().cell();
    let (d_row, d_col) = direction;

    let mut r = row as isize + d_row;
    let mut c = col as isize + d_col;
    let mut run = 0usize;

    while in_bounds(r, c) {
        let cell = cells[square_of(r as usize, c as usize)];
        if cell == opponent {
            run += 1;
        } else if cell == own {
            return run;
        } else {
            return 0;
        }
        r += d_row;
        c += d_col;
    }

    0
}

/// True when at least one direction captures.
#[inline]
pub fn captures_any(cells: &[Cell; CELL_COUNT], row: usize, col: usize, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&direction| capture_run_length(cells, row, col, direction, player) > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_state::board_state::BoardState;

    fn grid(board: &BoardState) -> [Cell; CELL_COUNT] {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (idx, cell) in cells.iter_mut().enumerate() {
            *cell = board
                .cell_at(idx / BOARD_SIZE, idx % BOARD_SIZE)
                .expect("index is on the board");
        }
        cells
    }

    #[test]
    fn opening_capture_runs_one_cell_south() {
        let cells = grid(&BoardState::new_game());
        assert_eq!(capture_run_length(&cells, 2, 3, (1, 0), Player::Black), 1);
        assert_eq!(capture_run_length(&cells, 2, 3, (1, 1), Player::Black), 0);
        assert_eq!(capture_run_length(&cells, 2, 3, (1, 0), Player::White), 0);
    }

    #[test]
    fn ray_that_leaves_the_board_does_not_capture() {
        let board = BoardState::from_literal(&[
            "xoooooo.", "........", "........", "........", "........", "........", "........",
            "........",
        ])
        .expect("literal should parse");
        let cells = grid(&board);
        assert_eq!(capture_run_length(&cells, 0, 7, (0, -1), Player::Black), 6);
        assert_eq!(capture_run_length(&cells, 0, 7, (0, -1), Player::White), 0);
        assert!(!captures_any(&cells, 1, 0, Player::Black));
    }

    #[test]
    fn long_diagonal_run_is_counted() {
        let board = BoardState::from_literal(&[
            "........", ".o......", "..o.....", "...o....", "....o...", ".....o..", "......o.",
            ".......x",
        ])
        .expect("literal should parse");
        let cells = grid(&board);
        assert_eq!(capture_run_length(&cells, 0, 0, (1, 1), Player::Black), 6);
        assert!(captures_any(&cells, 0, 0, Player::Black));
    }
}
