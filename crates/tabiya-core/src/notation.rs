use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::types::{Cell, Occupant, Team};
use thiserror::Error;

/// The classical starting layout as rendered by `encode_board`.
pub const START_BOARD: &str = "   abcdefgh
 8 ♜♞♝♛♚♝♞♜ 8
 7 ♟♟♟♟♟♟♟♟ 7
 6 ........ 6
 5 ........ 5
 4 ........ 4
 3 ........ 3
 2 ♙♙♙♙♙♙♙♙ 2
 1 ♖♘♗♕♔♗♘♖ 1
   abcdefgh
";

const HEADER: &str = "   abcdefgh";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("unknown piece symbol '{0}'")]
    UnknownSymbol(char),
    #[error("malformed board text: {0}")]
    Malformed(String),
}

/// Renders the board in the wire format: file letters above and below,
/// ranks printed 8 down to 1, each row prefixed and suffixed by its rank
/// number. The active team is not part of the board text.
pub fn encode_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for rank in (0..BOARD_SIZE).rev() {
        out.push(' ');
        out.push(char::from_digit(rank as u32 + 1, 10).unwrap_or('?'));
        out.push(' ');
        for file in 0..BOARD_SIZE {
            let occupant = board
                .occupant(Cell::new(file, rank))
                .expect("rank and file iterate in bounds");
            out.push(occupant.symbol());
        }
        out.push(' ');
        out.push(char::from_digit(rank as u32 + 1, 10).unwrap_or('?'));
        out.push('\n');
    }
    out.push_str(HEADER);
    out.push('\n');
    out
}

/// Parses a board rendered by `encode_board` back into an occupant grid.
/// The caller supplies the active team; the board text does not carry it.
pub fn parse_board(text: &str, turn: Team) -> Result<Board, NotationError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 10 {
        return Err(NotationError::Malformed(format!(
            "expected 10 lines, received {}",
            lines.len()
        )));
    }

    if lines[0].trim_end() != HEADER {
        return Err(NotationError::Malformed(
            "first line does not match the file-letter header".to_string(),
        ));
    }
    if lines[9].trim_end() != HEADER {
        return Err(NotationError::Malformed(
            "last line does not match the file-letter footer".to_string(),
        ));
    }

    let mut board = Board::empty();
    board.set_turn(turn);

    for (i, line) in lines[1..9].iter().enumerate() {
        let rank = BOARD_SIZE - 1 - i as i8;
        let rank_digit = char::from_digit(rank as u32 + 1, 10).unwrap_or('?');
        let chars: Vec<char> = line.trim_end().chars().collect();

        if chars.len() != 13
            || chars[0] != ' '
            || chars[1] != rank_digit
            || chars[2] != ' '
            || chars[11] != ' '
            || chars[12] != rank_digit
        {
            return Err(NotationError::Malformed(format!(
                "rank {} row is not '<rank> <8 glyphs> <rank>'",
                rank + 1
            )));
        }

        for (file, &symbol) in chars[3..11].iter().enumerate() {
            let occupant =
                Occupant::from_symbol(symbol).ok_or(NotationError::UnknownSymbol(symbol))?;
            if let Occupant::Piece(piece) = occupant {
                board
                    .put(piece, Cell::new(file as i8, rank))
                    .expect("row and file iterate in bounds");
            }
        }
    }

    Ok(board)
}
