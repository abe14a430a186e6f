//! Monotonic castling bookkeeping.
//!
//! Six "has moved" flags are tracked: one per king and one per home rook.
//! Availability of a castle is derived from them. A flag never reverts to
//! `false` within a game.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::chess_types::{Color, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }

    /// Side implied by the king's destination column on a two-column move.
    #[inline]
    pub const fn from_king_destination(col: u8) -> Option<Self> {
        match col {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    #[inline]
    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the rook lands on, adjacent to the king's destination.
    #[inline]
    pub const fn rook_destination_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    #[inline]
    pub const fn king_destination_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Square the king passes over.
    #[inline]
    pub const fn transit_col(self) -> u8 {
        self.rook_destination_col()
    }

    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        Square::at(color.back_row(), self.rook_home_col())
    }

    /// Squares strictly between the king and this rook.
    pub fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        }
    }

    /// Home-rook side for a square, if it is one of the four rook homes.
    pub fn of_rook_home(color: Color, square: Square) -> Option<Self> {
        Self::BOTH
            .into_iter()
            .find(|side| side.rook_home(color) == square)
    }
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::at(color.back_row(), KING_START_COL)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingRights {
    king_moved: [bool; 2],
    // [color][side]
    rook_moved: [[bool; 2]; 2],
}

impl CastlingRights {
    /// Every castle still available.
    #[inline]
    pub fn all() -> Self {
        Self::default()
    }

    /// Derive flags from piece placement: a king or rook away from its home
    /// square counts as moved.
    pub fn from_board(board: &Board) -> Self {
        let mut rights = Self::default();
        for color in [Color::White, Color::Black] {
            if board.king_square(color) != king_home(color) {
                rights.mark_king_moved(color);
            }
            for side in CastleSide::BOTH {
                let home = side.rook_home(color);
                let rook_home = board
                    .piece_at(home)
                    .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color);
                if !rook_home {
                    rights.mark_rook_moved(color, side);
                }
            }
        }
        rights
    }

    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    #[inline]
    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        self.rook_moved[color.index()][side.index()]
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.king_moved[color.index()] = true;
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.rook_moved[color.index()][side.index()] = true;
    }

    /// Whether the flags still allow this castle (board conditions aside).
    #[inline]
    pub fn is_available(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    /// Availability as `[white K, white Q, black K, black Q]`.
    pub fn availability(&self) -> [bool; 4] {
        [
            self.is_available(Color::White, CastleSide::Kingside),
            self.is_available(Color::White, CastleSide::Queenside),
            self.is_available(Color::Black, CastleSide::Kingside),
            self.is_available(Color::Black, CastleSide::Queenside),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_only_ever_get_set() {
        let mut rights = CastlingRights::all();
        assert!(rights.is_available(Color::White, CastleSide::Kingside));

        rights.mark_rook_moved(Color::White, CastleSide::Kingside);
        rights.mark_rook_moved(Color::White, CastleSide::Kingside);
        assert!(!rights.is_available(Color::White, CastleSide::Kingside));
        assert!(rights.is_available(Color::White, CastleSide::Queenside));

        rights.mark_king_moved(Color::Black);
        assert_eq!(rights.availability(), [false, true, false, false]);
    }

    #[test]
    fn rook_homes_follow_the_back_row() {
        assert_eq!(CastleSide::Kingside.rook_home(Color::White).to_string(), "h1");
        assert_eq!(CastleSide::Queenside.rook_home(Color::Black).to_string(), "a8");
        assert_eq!(king_home(Color::Black).to_string(), "e8");
        assert_eq!(
            CastleSide::of_rook_home(Color::White, Square::at(7, 0)),
            Some(CastleSide::Queenside)
        );
        assert_eq!(CastleSide::of_rook_home(Color::Black, Square::at(7, 0)), None);
    }
}
