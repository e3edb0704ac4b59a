use crate::types::{Cell, PieceKind};

pub const BOARD_SIZE: i8 = 8;

/// Direction offsets are (file, rank) pairs.
pub const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (-1, 0), (1, 0), (0, -1)];

pub const DIAGONAL: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (-2, 1),
    (2, 1),
    (-2, -1),
    (2, -1),
    (-1, -2),
    (1, -2),
];

/// Maximum ray length of the ranger's queen-style moves.
pub const RANGER_RAY_RANGE: u8 = 4;

/// White's back rank from file a to h; Black mirrors it on rank 8.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Every cell in board scan order: rank-major from rank 1, file a to h.
/// `Board::legal_moves` iterates in exactly this order, and the ordering is
/// observable behavior downstream consumers may rely on.
pub const CELLS: [Cell; 64] = cells_in_scan_order();

const fn cells_in_scan_order() -> [Cell; 64] {
    let mut cells = [Cell::new(0, 0); 64];
    let mut rank: i8 = 0;
    while rank < BOARD_SIZE {
        let mut file: i8 = 0;
        while file < BOARD_SIZE {
            cells[(rank * BOARD_SIZE + file) as usize] = Cell::new(file, rank);
            file += 1;
        }
        rank += 1;
    }
    cells
}
