//! Square and move conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`, `e7e8q`) and the
//! internal row/column squares. File `a`..`h` maps to column 0..7 and rank
//! `8`..`1` maps to row 0..7.

use crate::errors::{MoveError, MoveResult};
use crate::game_state::chess_types::{Move, PieceKind, Square};

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> MoveResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(MoveError::InvalidNotation(format!(
            "invalid algebraic square: {square}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(MoveError::InvalidNotation(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(MoveError::InvalidNotation(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    Square::new((b'8' - rank) as i16, (file - b'a') as i16)
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Parse long algebraic move text such as `e2e4` or `e7e8q`.
pub fn long_algebraic_to_move(text: &str) -> MoveResult<Move> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(MoveError::InvalidNotation(format!(
            "invalid long algebraic move: {text}"
        )));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    match text[4..].chars().next() {
        None => Ok(Move::new(from, to)),
        Some(ch) => Ok(Move::with_promotion(from, to, char_to_promotion(ch)?)),
    }
}

fn char_to_promotion(ch: char) -> MoveResult<PieceKind> {
    match ch.to_ascii_lowercase() {
        'q' => Ok(PieceKind::Queen),
        'r' => Ok(PieceKind::Rook),
        'b' => Ok(PieceKind::Bishop),
        'n' => Ok(PieceKind::Knight),
        other => Err(MoveError::InvalidNotation(format!(
            "invalid promotion piece: {other}"
        ))),
    }
}
