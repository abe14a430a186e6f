//! Turn, rights, clocks and repetition history.
//!
//! `GameState` carries everything about a game that is not piece placement.
//! The fingerprint history is append-only; an occurrence index beside it keeps
//! repetition lookups O(1).

use std::collections::HashMap;

use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::*;
use crate::game_state::fingerprint::PositionFingerprint;
use crate::game_state::rules_config::RulesConfig;

#[derive(Debug, Clone)]
pub struct GameState {
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant_target: Option<Square>,

    // --- Clocks / move counters ---
    pub half_move_clock: u16,
    pub ply_count: u32,

    pub config: RulesConfig,

    // --- Repetition support ---
    history: Vec<PositionFingerprint>,
    occurrences: HashMap<PositionFingerprint, u32>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_config(RulesConfig::default())
    }
}

impl GameState {
    /// State for the standard starting position under `config`.
    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant_target: None,
            half_move_clock: 0,
            ply_count: 0,
            config,
            history: Vec::new(),
            occurrences: HashMap::new(),
        }
    }

    /// State for an arbitrary set-up `board`, with castling flags derived from
    /// where the kings and rooks stand.
    pub fn for_position(board: &Board, side_to_move: Color) -> Self {
        Self {
            side_to_move,
            castling: CastlingRights::from_board(board),
            ..Self::default()
        }
    }

    /// Full-move number as printed in game records, starting at 1.
    #[inline]
    pub fn full_move_number(&self) -> u32 {
        self.ply_count / 2 + 1
    }

    /// Positions reached before each half-move played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[PositionFingerprint] {
        &self.history
    }

    /// How many times `fingerprint` appears in the history.
    #[inline]
    pub fn prior_occurrences(&self, fingerprint: &PositionFingerprint) -> u32 {
        self.occurrences.get(fingerprint).copied().unwrap_or(0)
    }

    pub(crate) fn record_position(&mut self, fingerprint: PositionFingerprint) {
        *self.occurrences.entry(fingerprint.clone()).or_insert(0) += 1;
        self.history.push(fingerprint);
    }
}

/// Standard starting arrangement, White to move, all rights, empty history.
pub fn initial_position() -> (Board, GameState) {
    (Board::starting_position(), GameState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::castling_rights::CastleSide;
    use crate::game_state::fingerprint::fingerprint;

    #[test]
    fn initial_state_is_fresh() {
        let (_, state) = initial_position();
        assert_eq!(state.side_to_move, Color::White);
        assert_eq!(state.castling.availability(), [true; 4]);
        assert_eq!(state.en_passant_target, None);
        assert_eq!(state.half_move_clock, 0);
        assert_eq!(state.full_move_number(), 1);
        assert!(state.history().is_empty());
    }

    #[test]
    fn occurrence_index_tracks_history() {
        let (board, mut state) = initial_position();
        let start = fingerprint(&board, &state);
        assert_eq!(state.prior_occurrences(&start), 0);

        state.record_position(start.clone());
        state.record_position(start.clone());
        assert_eq!(state.prior_occurrences(&start), 2);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn set_up_positions_derive_castling_flags() {
        let mut board = Board::empty_with_kings(Square::at(7, 4), Square::at(1, 4));
        board.set_piece(
            Square::at(7, 7),
            Some(Piece::new(PieceKind::Rook, Color::White)),
        );
        let state = GameState::for_position(&board, Color::Black);

        assert_eq!(state.side_to_move, Color::Black);
        assert!(state.castling.is_available(Color::White, CastleSide::Kingside));
        assert!(!state.castling.is_available(Color::White, CastleSide::Queenside));
        assert!(state.castling.king_moved(Color::Black));
    }
}
