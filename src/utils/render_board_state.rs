//! Terminal-oriented board renderer.
//!
//! Columns are labelled `A`-`H`, rows by their 0-based index, matching the
//! move notation in `utils::algebraic`.

use crate::board_state::board_types::*;

/// Render the board followed by a piece-count line.
pub fn render_board_state(board: &BoardState) -> String {
    let mut out = String::new();

    out.push(' ');
    for col in 0..BOARD_SIZE {
        out.push(' ');
        out.push(char::from(b'A' + col as u8));
    }
    out.push('\n');

    for (row, line) in board.to_literal().iter().enumerate() {
        out.push(char::from(b'0' + row as u8));
        for symbol in line.chars() {
            out.push(' ');
            out.push(symbol);
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Black ({}): {}  White ({}): {}",
        Cell::BLACK_SYMBOL,
        board.black_count(),
        Cell::WHITE_SYMBOL,
        board.white_count()
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::render_board_state;
    use crate::board_state::board_state::BoardState;

    #[test]
    fn render_starting_board() {
        let text = render_board_state(&BoardState::new_game());
        let lines: Vec<&str> = text.lines().collect();

        println!("\n{text}");

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  A B C D E F G H");
        assert_eq!(lines[4], "3 . . . o x . . .");
        assert_eq!(lines[9], "Black (x): 2  White (o): 2");
    }
}
