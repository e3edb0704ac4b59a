use crate::constants::{BACK_RANK, BOARD_SIZE, CELLS};
use crate::movegen::{apply_move, candidate_moves};
use crate::types::{Cell, Move, MoveList, Occupant, Piece, PieceKind, Team};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0} is not on the board")]
    CellOutOfBounds(Cell),
    #[error("move {0} moves to or from a cell that is not on the board")]
    MoveOutOfBounds(Move),
}

/// The 8×8 grid of occupants plus the active team. Rank-major, rank 0 is
/// rank "1" of the printed board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Occupant; 8]; 8],
    turn: Team,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The classical starting layout, White to move.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// A cleared grid, White to move. Custom setups are built with `put`.
    pub fn empty() -> Self {
        Self {
            grid: [[Occupant::Empty; 8]; 8],
            turn: Team::White,
        }
    }

    /// Restores the classical starting layout in place.
    pub fn reset(&mut self) {
        self.grid = [[Occupant::Empty; 8]; 8];
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            self.grid[0][file] = Occupant::Piece(Piece::new(kind, Team::White));
            self.grid[7][file] = Occupant::Piece(Piece::new(kind, Team::Black));
            self.grid[1][file] = Occupant::Piece(Piece::new(PieceKind::Pawn, Team::White));
            self.grid[6][file] = Occupant::Piece(Piece::new(PieceKind::Pawn, Team::Black));
        }
        self.turn = Team::White;
    }

    pub const fn turn(&self) -> Team {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Team) {
        self.turn = turn;
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.file >= 0 && cell.file < BOARD_SIZE && cell.rank >= 0 && cell.rank < BOARD_SIZE
    }

    pub fn occupant(&self, cell: Cell) -> Result<Occupant, BoardError> {
        if !self.contains(cell) {
            return Err(BoardError::CellOutOfBounds(cell));
        }
        Ok(self.at(cell))
    }

    pub fn put(&mut self, piece: Piece, cell: Cell) -> Result<(), BoardError> {
        if !self.contains(cell) {
            return Err(BoardError::CellOutOfBounds(cell));
        }
        self.set(cell, Occupant::Piece(piece));
        Ok(())
    }

    pub fn clear(&mut self, cell: Cell) -> Result<(), BoardError> {
        if !self.contains(cell) {
            return Err(BoardError::CellOutOfBounds(cell));
        }
        self.set(cell, Occupant::Empty);
        Ok(())
    }

    /// All candidate moves for the active team, in board scan order.
    ///
    /// Panics if a piece kind emits a move with an off-board endpoint; that
    /// is an engine defect, not caller misuse.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for cell in CELLS {
            if let Occupant::Piece(piece) = self.at(cell) {
                if piece.team == self.turn {
                    candidate_moves(self, cell, piece, &mut moves);
                }
            }
        }
        for mv in &moves {
            assert!(
                self.contains(mv.from) && self.contains(mv.to),
                "move generator produced an off-board move: {mv}"
            );
        }
        moves
    }

    /// Applies `mv` by delegating to the moving piece's kind. Only bounds are
    /// checked here; membership in `legal_moves()` is the caller's job.
    /// Applying a move whose origin is empty is a no-op.
    pub fn apply(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.contains(mv.from) || !self.contains(mv.to) {
            return Err(BoardError::MoveOutOfBounds(mv));
        }
        match self.at(mv.from) {
            Occupant::Empty => Ok(()),
            Occupant::Piece(piece) => {
                apply_move(self, piece, mv);
                Ok(())
            }
        }
    }

    /// The opposing team of a missing king, or `None` while both kings stand.
    ///
    /// Panics if neither king is on the board; `apply` removes at most one
    /// piece per turn, so that state cannot arise through play.
    pub fn winner(&self) -> Option<Team> {
        let mut white_king = false;
        let mut black_king = false;
        for cell in CELLS {
            if let Occupant::Piece(piece) = self.at(cell) {
                if piece.kind == PieceKind::King {
                    match piece.team {
                        Team::White => white_king = true,
                        Team::Black => black_king = true,
                    }
                }
            }
        }
        match (white_king, black_king) {
            (true, true) => None,
            (true, false) => Some(Team::White),
            (false, true) => Some(Team::Black),
            (false, false) => panic!("board has no king of either team"),
        }
    }

    /// Read access for cells already known to be on the board.
    pub(crate) fn at(&self, cell: Cell) -> Occupant {
        self.grid[cell.rank as usize][cell.file as usize]
    }

    pub(crate) fn set(&mut self, cell: Cell, occupant: Occupant) {
        self.grid[cell.rank as usize][cell.file as usize] = occupant;
    }

    /// The uniform move effect shared by every current piece kind: relocate
    /// the occupant, clear the origin, pass the turn.
    pub(crate) fn relocate(&mut self, mv: Move) {
        let occupant = self.at(mv.from);
        self.set(mv.to, occupant);
        self.set(mv.from, Occupant::Empty);
        self.turn = self.turn.opponent();
    }
}
