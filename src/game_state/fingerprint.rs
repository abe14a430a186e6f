//! Exact position identity for repetition tracking.
//!
//! A fingerprint captures the full board, the side to move and the four
//! castling availabilities. The en-passant target and the half-move clock are
//! left out unless `RulesConfig::strict_repetition` is set, in which case the
//! en-passant target is included.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionFingerprint {
    squares: [Option<Piece>; 64],
    side_to_move: Color,
    castling: [bool; 4],
    en_passant: Option<Square>,
}

impl PositionFingerprint {
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
}

/// Fingerprint of the position described by `board` and `game_state`.
pub fn fingerprint(board: &Board, game_state: &GameState) -> PositionFingerprint {
    let mut squares = [None; 64];
    for (square, piece) in board.pieces() {
        squares[square.index()] = Some(piece);
    }

    PositionFingerprint {
        squares,
        side_to_move: game_state.side_to_move,
        castling: game_state.castling.availability(),
        en_passant: if game_state.config.strict_repetition {
            game_state.en_passant_target
        } else {
            None
        },
    }
}
