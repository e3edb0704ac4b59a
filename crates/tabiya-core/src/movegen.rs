use crate::board::Board;
use crate::constants::{ALL_DIRECTIONS, DIAGONAL, KNIGHT_JUMPS, ORTHOGONAL, RANGER_RAY_RANGE};
use crate::types::{Cell, Move, MoveList, Occupant, Piece, PieceKind, Team};

/// Candidate moves for the piece standing on `from`, regardless of whose
/// turn it is. Returns an empty list for empty or off-board cells.
pub fn moves_from(board: &Board, from: Cell) -> MoveList {
    let mut moves = MoveList::new();
    if !board.contains(from) {
        return moves;
    }
    if let Occupant::Piece(piece) = board.at(from) {
        candidate_moves(board, from, piece, &mut moves);
    }
    moves
}

/// Appends the candidate moves of `piece` standing on `from`. Every kind is
/// candidate-then-filter: a destination must be on the board and either
/// empty or held by the opposing team.
pub(crate) fn candidate_moves(board: &Board, from: Cell, piece: Piece, moves: &mut MoveList) {
    match piece.kind {
        PieceKind::King => king_moves(board, from, piece.team, moves),
        PieceKind::Queen => ray_moves(board, from, piece.team, &ALL_DIRECTIONS, None, moves),
        PieceKind::Bishop => ray_moves(board, from, piece.team, &DIAGONAL, None, moves),
        PieceKind::Knight => jump_moves(board, from, piece.team, moves),
        PieceKind::Rook => ray_moves(board, from, piece.team, &ORTHOGONAL, None, moves),
        PieceKind::Pawn => pawn_moves(board, from, piece.team, moves),
        PieceKind::Guard => guard_moves(board, from, piece.team, moves),
        PieceKind::Ranger => ranger_moves(board, from, piece.team, moves),
    }
}

/// Realizes `mv` on the board. Every current kind shares the uniform
/// relocate/clear/flip-turn effect; the exhaustive match is the seam where a
/// future kind would implement a non-classical effect (promotion and the
/// like) without touching `Board`.
pub(crate) fn apply_move(board: &mut Board, piece: Piece, mv: Move) {
    match piece.kind {
        PieceKind::King
        | PieceKind::Queen
        | PieceKind::Bishop
        | PieceKind::Knight
        | PieceKind::Rook
        | PieceKind::Pawn
        | PieceKind::Guard
        | PieceKind::Ranger => board.relocate(mv),
    }
}

fn occupant_at(board: &Board, cell: Cell) -> Option<Occupant> {
    if board.contains(cell) {
        Some(board.at(cell))
    } else {
        None
    }
}

fn can_land(occupant: Occupant, team: Team) -> bool {
    match occupant {
        Occupant::Empty => true,
        Occupant::Piece(piece) => piece.team != team,
    }
}

fn king_moves(board: &Board, from: Cell, team: Team, moves: &mut MoveList) {
    for df in -1..=1 {
        for dr in -1..=1 {
            if df == 0 && dr == 0 {
                continue;
            }
            let to = from.offset(df, dr);
            if let Some(occupant) = occupant_at(board, to) {
                if can_land(occupant, team) {
                    let _ = moves.try_push(Move::new(from, to));
                }
            }
        }
    }
}

/// Walks each direction outward from `from`. A ray stops at the first
/// occupied cell, which is included iff it holds the opposing team.
fn ray_moves(
    board: &Board,
    from: Cell,
    team: Team,
    directions: &[(i8, i8)],
    range: Option<u8>,
    moves: &mut MoveList,
) {
    for &(df, dr) in directions {
        let mut to = from;
        let mut steps = 0u8;
        loop {
            to = to.offset(df, dr);
            let Some(occupant) = occupant_at(board, to) else {
                break;
            };
            match occupant {
                Occupant::Empty => {
                    let _ = moves.try_push(Move::new(from, to));
                }
                Occupant::Piece(piece) => {
                    if piece.team != team {
                        let _ = moves.try_push(Move::new(from, to));
                    }
                    break;
                }
            }
            steps += 1;
            if matches!(range, Some(max) if steps >= max) {
                break;
            }
        }
    }
}

fn jump_moves(board: &Board, from: Cell, team: Team, moves: &mut MoveList) {
    for &(df, dr) in &KNIGHT_JUMPS {
        let to = from.offset(df, dr);
        if let Some(occupant) = occupant_at(board, to) {
            if can_land(occupant, team) {
                let _ = moves.try_push(Move::new(from, to));
            }
        }
    }
}

fn pawn_moves(board: &Board, from: Cell, team: Team, moves: &mut MoveList) {
    let dir = team.advance_dir();

    // Forward step only onto an empty cell; there is no straight capture
    // and no double step in this rule set.
    let forward = from.offset(0, dir);
    if occupant_at(board, forward) == Some(Occupant::Empty) {
        let _ = moves.try_push(Move::new(from, forward));
    }

    // Diagonal steps only when capturing.
    for df in [-1, 1] {
        let to = from.offset(df, dir);
        if let Some(Occupant::Piece(piece)) = occupant_at(board, to) {
            if piece.team != team {
                let _ = moves.try_push(Move::new(from, to));
            }
        }
    }
}

/// Pawn rules plus a retreat: every empty cell straight behind the guard is
/// a destination, at any distance. Occupied cells along the retreat never
/// stop the ray and are never landed on; the guard flies over them.
fn guard_moves(board: &Board, from: Cell, team: Team, moves: &mut MoveList) {
    pawn_moves(board, from, team, moves);

    let dir = -team.advance_dir();
    let mut to = from;
    loop {
        to = to.offset(0, dir);
        let Some(occupant) = occupant_at(board, to) else {
            break;
        };
        if occupant == Occupant::Empty {
            let _ = moves.try_push(Move::new(from, to));
        }
    }
}

/// Union of three independent rule sets, appended without deduplication:
/// queen-style rays capped at `RANGER_RAY_RANGE`, a teleport next to any
/// rook visible along a ray direction, and knight jumps.
fn ranger_moves(board: &Board, from: Cell, team: Team, moves: &mut MoveList) {
    ray_moves(
        board,
        from,
        team,
        &ALL_DIRECTIONS,
        Some(RANGER_RAY_RANGE),
        moves,
    );
    rook_teleport_moves(board, from, team, moves);
    jump_moves(board, from, team, moves);
}

/// Scans each of the 8 directions to the board edge, ignoring blockers and
/// any range limit; the scan only detects rooks. Every on-board neighbor of
/// a detected rook (either team's) that is empty or enemy-held becomes a
/// destination.
fn rook_teleport_moves(board: &Board, from: Cell, team: Team, moves: &mut MoveList) {
    for &(df, dr) in &ALL_DIRECTIONS {
        let mut cell = from;
        loop {
            cell = cell.offset(df, dr);
            let Some(occupant) = occupant_at(board, cell) else {
                break;
            };
            if occupant.piece().map(|p| p.kind) == Some(PieceKind::Rook) {
                for &(nf, nr) in &ALL_DIRECTIONS {
                    let to = cell.offset(nf, nr);
                    if let Some(neighbor) = occupant_at(board, to) {
                        if can_land(neighbor, team) {
                            let _ = moves.try_push(Move::new(from, to));
                        }
                    }
                }
            }
        }
    }
}
