//! Rejection reasons reported by the rules core.
//!
//! Every failure in this crate is a local, recoverable rejection: the board and
//! game state are left exactly as they were before the call. Callers match on
//! `MoveError` to produce user-facing text and re-prompt.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

/// Why a castling attempt was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingFailure {
    #[error("the king has already moved")]
    KingMoved,

    #[error("the rook has already moved")]
    RookMoved,

    #[error("no rook stands on its home square")]
    RookMissing,

    #[error("the king is in check")]
    KingInCheck,

    #[error("square {0} between king and rook is occupied")]
    PathOccupied(Square),

    #[error("square {0} is attacked")]
    SquareAttacked(Square),
}

/// Unified rejection type for move validation, execution and notation parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate outside the 8x8 grid.
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: i16, col: i16 },

    #[error("no piece on source square {0}")]
    NoPieceAtSource(Square),

    /// The source piece belongs to the side that is not on move.
    #[error("piece on {0} does not belong to the side to move")]
    NotYourTurn(Square),

    #[error("destination {0} holds a piece of the moving side")]
    CannotCaptureOwnPiece(Square),

    #[error("{kind:?} cannot move from {from} to {to}")]
    InvalidPatternForPiece {
        kind: PieceKind,
        from: Square,
        to: Square,
    },

    /// An intervening square (or a pawn's destination) is occupied.
    #[error("path from {from} to {to} is blocked")]
    PathBlocked { from: Square, to: Square },

    #[error("castling not allowed: {0}")]
    CastlingPreconditionFailed(CastlingFailure),

    #[error("move would leave the king in check")]
    LeavesOwnKingInCheck,

    /// Missing choice on a promoting move, a non-{Q,R,B,N} choice, or a choice
    /// attached to a move that does not promote.
    #[error("invalid promotion choice: {requested:?}")]
    InvalidPromotionChoice { requested: Option<PieceKind> },

    #[error("invalid notation: {0}")]
    InvalidNotation(String),
}

pub type MoveResult<T> = Result<T, MoveError>;
