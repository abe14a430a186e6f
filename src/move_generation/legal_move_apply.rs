//! Move execution.
//!
//! `apply_move` validates, then commits the move to the board and advances the
//! game state: repetition history, en-passant window, half-move clock,
//! castling flags, promotion and turn. Nothing is mutated when validation or
//! the promotion choice is rejected.

use tracing::debug;

use crate::errors::{MoveError, MoveResult};
use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastleSide;
use crate::game_state::chess_types::*;
use crate::game_state::fingerprint::fingerprint;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_validator::{en_passant_victim, validate_move};

pub fn apply_move<'s>(
    board: &mut Board,
    game_state: &'s mut GameState,
    mv: Move,
) -> MoveResult<&'s GameState> {
    let kind = validate_move(board, game_state, mv)?;
    let promotion = promotion_choice(kind, mv)?;

    let Move { from, to, .. } = mv;
    let mover = game_state.side_to_move;
    let piece = board
        .piece_at(from)
        .ok_or(MoveError::NoPieceAtSource(from))?;

    let before = fingerprint(board, game_state);
    game_state.record_position(before);

    if kind == MoveKind::EnPassant {
        board.set_piece(en_passant_victim(to, mover), None);
        game_state.half_move_clock = 0;
    }

    let captured = board.piece_at(to);
    if piece.kind == PieceKind::Pawn || captured.is_some() {
        game_state.half_move_clock = 0;
    } else {
        game_state.half_move_clock = game_state.half_move_clock.saturating_add(1);
    }

    game_state.en_passant_target = None;
    if kind == MoveKind::DoublePawnPush {
        game_state.en_passant_target = Some(Square::at(
            (from.row() + to.row()) / 2,
            from.col(),
        ));
    }

    let castle_side = match kind {
        MoveKind::CastleKingside => Some(CastleSide::Kingside),
        MoveKind::CastleQueenside => Some(CastleSide::Queenside),
        _ => None,
    };
    if let Some(side) = castle_side {
        let rook_to = Square::at(from.row(), side.rook_destination_col());
        board.move_piece(side.rook_home(mover), rook_to);
        game_state.castling.mark_rook_moved(mover, side);
    }

    board.move_piece(from, to);

    match piece.kind {
        PieceKind::King => game_state.castling.mark_king_moved(mover),
        PieceKind::Rook => {
            if let Some(side) = CastleSide::of_rook_home(mover, from) {
                game_state.castling.mark_rook_moved(mover, side);
            }
        }
        _ => {}
    }

    if let Some(Piece {
        kind: PieceKind::Rook,
        color,
    }) = captured
    {
        if let Some(side) = CastleSide::of_rook_home(color, to) {
            game_state.castling.mark_rook_moved(color, side);
        }
    }

    if let Some(choice) = promotion {
        board.set_piece(to, Some(Piece::new(choice, mover)));
    }

    game_state.side_to_move = mover.opposite();
    game_state.ply_count = game_state.ply_count.saturating_add(1);

    debug!(
        %mv,
        ?kind,
        ply = game_state.ply_count,
        half_move_clock = game_state.half_move_clock,
        "move applied"
    );

    Ok(game_state)
}

/// The piece a promoting move turns into. Non-promoting moves must not carry
/// a choice.
fn promotion_choice(kind: MoveKind, mv: Move) -> MoveResult<Option<PieceKind>> {
    match (kind, mv.promotion) {
        (MoveKind::Promotion { .. }, Some(choice)) if choice.is_promotion_choice() => {
            Ok(Some(choice))
        }
        (MoveKind::Promotion { .. }, requested) => {
            Err(MoveError::InvalidPromotionChoice { requested })
        }
        (_, None) => Ok(None),
        (_, requested) => Err(MoveError::InvalidPromotionChoice { requested }),
    }
}
