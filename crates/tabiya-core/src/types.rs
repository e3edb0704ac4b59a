use std::fmt;

use arrayvec::ArrayVec;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White = 0,
    Black = 1,
}

impl Team {
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The rank direction this team's pawns (and pawn-like pieces) advance in.
    pub const fn advance_dir(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    pub const fn to_code(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'w' => Some(Self::White),
            'b' => Some(Self::Black),
            _ => None,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King = 0,
    Queen = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Pawn = 5,
    /// Custom kind: moves like a pawn, but may also retreat any distance in a
    /// straight line, flying over occupied cells.
    Guard = 6,
    /// Custom kind: 4-step queen rays, knight jumps, and a teleport to the
    /// neighborhood of any rook it can see along a ray direction.
    Ranger = 7,
}

impl PieceKind {
    pub const ALL: [Self; 8] = [
        Self::King,
        Self::Queen,
        Self::Bishop,
        Self::Knight,
        Self::Rook,
        Self::Pawn,
        Self::Guard,
        Self::Ranger,
    ];

    pub const fn symbol(self, team: Team) -> char {
        match (self, team) {
            (Self::King, Team::White) => '♔',
            (Self::Queen, Team::White) => '♕',
            (Self::Bishop, Team::White) => '♗',
            (Self::Knight, Team::White) => '♘',
            (Self::Rook, Team::White) => '♖',
            (Self::Pawn, Team::White) => '♙',
            (Self::Guard, Team::White) => 'G',
            (Self::Ranger, Team::White) => 'R',
            (Self::King, Team::Black) => '♚',
            (Self::Queen, Team::Black) => '♛',
            (Self::Bishop, Team::Black) => '♝',
            (Self::Knight, Team::Black) => '♞',
            (Self::Rook, Team::Black) => '♜',
            (Self::Pawn, Team::Black) => '♟',
            (Self::Guard, Team::Black) => 'g',
            (Self::Ranger, Team::Black) => 'r',
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub team: Team,
}

impl Piece {
    pub const fn new(kind: PieceKind, team: Team) -> Self {
        Self { kind, team }
    }

    pub const fn symbol(self) -> char {
        self.kind.symbol(self.team)
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        for kind in PieceKind::ALL {
            for team in [Team::White, Team::Black] {
                if kind.symbol(team) == symbol {
                    return Some(Self::new(kind, team));
                }
            }
        }
        None
    }
}

/// The value held by one board cell. Every cell holds exactly one occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Piece(Piece),
}

pub const EMPTY_SYMBOL: char = '.';

impl Occupant {
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => EMPTY_SYMBOL,
            Self::Piece(piece) => piece.symbol(),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        if symbol == EMPTY_SYMBOL {
            return Some(Self::Empty);
        }
        Piece::from_symbol(symbol).map(Self::Piece)
    }

    pub const fn piece(self) -> Option<Piece> {
        match self {
            Self::Empty => None,
            Self::Piece(piece) => Some(piece),
        }
    }
}

/// A board coordinate: file 0..8 maps to `a`..`h`, rank 0..8 maps to `1`..`8`.
/// Carries no bounds guarantee of its own; `Board::contains` decides validity.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub file: i8,
    pub rank: i8,
}

impl Cell {
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Unchecked translation. The result may lie off the board.
    pub const fn offset(self, df: i8, dr: i8) -> Self {
        Self {
            file: self.file + df,
            rank: self.rank + dr,
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('a'..='h').contains(&file_char) || !('1'..='8').contains(&rank_char) {
            return None;
        }
        Some(Self {
            file: (file_char as i8) - ('a' as i8),
            rank: (rank_char as i8) - ('1' as i8),
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Off-board cells still render (e.g. "i9") so error messages can
        // show the offending coordinate.
        let file = char::from_u32(('a' as i32 + i32::from(self.file)) as u32).unwrap_or('?');
        write!(f, "{}{}", file, i32::from(self.rank) + 1)
    }
}

/// An ordered (from, to) pair. Which piece moves and what gets captured is
/// derived from board state when the move is applied.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
}

impl Move {
    pub const fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let chars: Vec<char> = input.chars().collect();
        if chars.len() != 4 {
            return None;
        }
        let from: String = chars[..2].iter().collect();
        let to: String = chars[2..].iter().collect();
        Some(Self {
            from: Cell::parse(&from)?,
            to: Cell::parse(&to)?,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

pub type MoveList = ArrayVec<Move, 1024>;
