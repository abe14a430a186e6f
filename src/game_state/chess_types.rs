//! Core value types shared by every rules subsystem.
//!
//! Squares use `(row, col)` coordinates where row 0 is Black's back rank
//! (rank 8) and row 7 is White's back rank (rank 1). The linear index
//! `row * 8 + col` addresses the precomputed attack tables.

use std::fmt;

use crate::errors::{MoveError, MoveResult};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Piece kind (color is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may turn into on the last row.
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A board coordinate that is always on the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i16, col: i16) -> MoveResult<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(MoveError::OutOfBounds { row, col })
        }
    }

    /// Build from a linear index in `0..64`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: ((index / 8) % 8) as u8,
            col: (index % 8) as u8,
        }
    }

    /// Const constructor for coordinates known to be on the board.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.index()
    }

    /// Square shifted by `(d_row, d_col)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::new(self.row as i16 + d_row as i16, self.col as i16 + d_col as i16).ok()
    }

    /// Square colour parity; equal values mean same-coloured squares.
    #[inline]
    pub const fn parity(self) -> u8 {
        (self.row + self.col) % 2
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

/// A requested move. Whether it captures, castles or promotes is derived by
/// the validator, never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            let ch = match kind {
                PieceKind::Queen => 'q',
                PieceKind::Rook => 'r',
                PieceKind::Bishop => 'b',
                PieceKind::Knight => 'n',
                PieceKind::Pawn => 'p',
                PieceKind::King => 'k',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Special-move classification computed once per validated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    Capture,
    DoublePawnPush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    Promotion { capture: bool },
}

impl MoveKind {
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

/// Classification of the current position, recomputed after each half-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    DrawByRepetition,
    DrawByFiftyMove,
    DrawByInsufficientMaterial,
}

impl Phase {
    #[inline]
    pub const fn is_game_over(self) -> bool {
        !matches!(self, Phase::Ongoing | Phase::Check)
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            Phase::Stalemate
                | Phase::DrawByRepetition
                | Phase::DrawByFiftyMove
                | Phase::DrawByInsufficientMaterial
        )
    }

    /// Winner given the side that is on move in the evaluated position.
    #[inline]
    pub const fn winner(self, side_to_move: Color) -> Option<Color> {
        match self {
            Phase::Checkmate => Some(side_to_move.opposite()),
            _ => None,
        }
    }
}
