//! Canonical chess-rule constants.
//!
//! Static layout and threshold literals used to set up the standard starting
//! position and to drive the automatic draw rules.

use crate::game_state::chess_types::PieceKind;

/// Back-row arrangement from the a-file to the h-file, shared by both colors.
pub const STARTING_BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_COL: u8 = 4;

/// Half-moves without a capture or pawn move before the fifty-move draw.
pub const DEFAULT_FIFTY_MOVE_LIMIT: u16 = 100;

/// Total occurrences of a position that trigger the repetition draw.
pub const DEFAULT_REPETITION_LIMIT: u32 = 3;

/// Standard material values (pawn, knight, bishop, rook, queen).
pub const MATERIAL_VALUES: [u32; 5] = [1, 3, 3, 5, 9];
