//! Position classification.
//!
//! `evaluate_terminal_condition` is a pure query over the board and the
//! tracker. Draw rules are checked before mate and stalemate; the first rule
//! that matches decides the phase.

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Phase;
use crate::game_state::fingerprint::fingerprint;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_validator::has_legal_moves;
use crate::outcome::insufficient_material::is_insufficient_material;

pub fn evaluate_terminal_condition(board: &Board, game_state: &GameState) -> Phase {
    let phase = classify(board, game_state);
    if phase.is_game_over() {
        debug!(
            ?phase,
            side_to_move = ?game_state.side_to_move,
            ply = game_state.ply_count,
            "terminal position"
        );
    }
    phase
}

/// Whether the current position has now occurred `repetition_limit` times.
pub fn is_repetition(board: &Board, game_state: &GameState) -> bool {
    let current = fingerprint(board, game_state);
    game_state.prior_occurrences(&current) + 1 >= game_state.config.repetition_limit
}

#[inline]
pub fn is_fifty_move_draw(game_state: &GameState) -> bool {
    game_state.half_move_clock >= game_state.config.fifty_move_limit
}

fn classify(board: &Board, game_state: &GameState) -> Phase {
    if is_repetition(board, game_state) {
        return Phase::DrawByRepetition;
    }
    if is_fifty_move_draw(game_state) {
        return Phase::DrawByFiftyMove;
    }
    if is_insufficient_material(board) {
        return Phase::DrawByInsufficientMaterial;
    }

    let side = game_state.side_to_move;
    let in_check = is_in_check(board, side);
    let can_move = has_legal_moves(board, game_state, side);

    match (in_check, can_move) {
        (true, false) => Phase::Checkmate,
        (true, true) => Phase::Check,
        (false, false) => Phase::Stalemate,
        (false, true) => Phase::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::initial_position;

    fn place(board: &mut Board, row: u8, col: u8, kind: PieceKind, color: Color) {
        board.set_piece(Square::at(row, col), Some(Piece::new(kind, color)));
    }

    #[test]
    fn start_position_is_ongoing() {
        let (board, state) = initial_position();
        assert_eq!(evaluate_terminal_condition(&board, &state), Phase::Ongoing);
    }

    #[test]
    fn back_rank_mate_and_plain_check() {
        // Black Kg8 boxed in by its own pawns, White rook delivers from a8.
        let mut board = Board::empty_with_kings(Square::at(7, 6), Square::at(0, 6));
        for col in 5..8 {
            place(&mut board, 1, col, PieceKind::Pawn, Color::Black);
        }
        place(&mut board, 0, 0, PieceKind::Rook, Color::White);
        let state = GameState::for_position(&board, Color::Black);
        assert_eq!(evaluate_terminal_condition(&board, &state), Phase::Checkmate);
        assert_eq!(Phase::Checkmate.winner(state.side_to_move), Some(Color::White));

        board.set_piece(Square::at(1, 7), None);
        assert_eq!(evaluate_terminal_condition(&board, &state), Phase::Check);
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        // Black Ka8, White Qc7 and Kc6 (rows: 8 -> 0).
        let mut board = Board::empty_with_kings(Square::at(2, 2), Square::at(0, 0));
        place(&mut board, 1, 2, PieceKind::Queen, Color::White);
        let state = GameState::for_position(&board, Color::Black);
        assert_eq!(evaluate_terminal_condition(&board, &state), Phase::Stalemate);
        assert!(Phase::Stalemate.is_draw());
    }

    #[test]
    fn fifty_move_rule_beats_checkmate() {
        let mut board = Board::empty_with_kings(Square::at(7, 6), Square::at(0, 6));
        for col in 5..8 {
            place(&mut board, 1, col, PieceKind::Pawn, Color::Black);
        }
        place(&mut board, 0, 0, PieceKind::Rook, Color::White);
        let mut state = GameState::for_position(&board, Color::Black);
        state.half_move_clock = 100;
        assert_eq!(
            evaluate_terminal_condition(&board, &state),
            Phase::DrawByFiftyMove
        );

        state.half_move_clock = 99;
        assert_eq!(evaluate_terminal_condition(&board, &state), Phase::Checkmate);
    }

    #[test]
    fn bare_kings_draw_before_move_search() {
        let board = Board::empty_with_kings(Square::at(7, 4), Square::at(0, 4));
        let state = GameState::for_position(&board, Color::White);
        assert_eq!(
            evaluate_terminal_condition(&board, &state),
            Phase::DrawByInsufficientMaterial
        );
    }

    #[test]
    fn repetition_limit_comes_from_config() {
        let (board, mut state) = initial_position();
        let current = fingerprint(&board, &state);
        state.record_position(current.clone());
        assert_eq!(evaluate_terminal_condition(&board, &state), Phase::Ongoing);

        state.config.repetition_limit = 2;
        assert_eq!(
            evaluate_terminal_condition(&board, &state),
            Phase::DrawByRepetition
        );
    }
}
