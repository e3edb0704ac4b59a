pub mod board;
pub mod constants;
pub mod movegen;
pub mod notation;
pub mod types;

pub use board::{Board, BoardError};
pub use constants::CELLS;
pub use movegen::moves_from;
pub use notation::{encode_board, parse_board, NotationError, START_BOARD};
pub use types::{Cell, Move, MoveList, Occupant, Piece, PieceKind, Team};
