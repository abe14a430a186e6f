//! Full move legality.
//!
//! A candidate move is first matched against its piece's movement pattern
//! (geometry, path, capture target, castling preconditions), which also
//! classifies it into a `MoveKind`. Every non-castling move is then played on
//! a scratch board through `SimulatedMove` and rejected if it leaves the
//! mover's king attacked. The caller's board is never touched.

use tracing::trace;

use crate::errors::{CastlingFailure, MoveError, MoveResult};
use crate::game_state::board::Board;
use crate::game_state::castling_rights::{king_home, CastleSide};
use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::SimulatedMove;
use crate::move_generation::legal_move_checks::{is_in_check, is_square_attacked};
use crate::moves::bishop_moves::is_bishop_pattern;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::queen_moves::is_queen_pattern;
use crate::moves::rays::between;
use crate::moves::rook_moves::is_rook_pattern;

/// Classify `mv` for the side to move, or report why it is illegal. The
/// promotion field of `mv` is not inspected here.
pub fn validate_move(board: &Board, game_state: &GameState, mv: Move) -> MoveResult<MoveKind> {
    let mut scratch = board.clone();
    validate_for(&mut scratch, game_state, mv, game_state.side_to_move)
}

pub fn is_legal_move(board: &Board, game_state: &GameState, mv: Move) -> bool {
    match validate_move(board, game_state, mv) {
        Ok(_) => true,
        Err(reason) => {
            trace!(%mv, %reason, "move rejected");
            false
        }
    }
}

/// Whether `color` would have any legal move if it were on move.
pub fn has_legal_moves(board: &Board, game_state: &GameState, color: Color) -> bool {
    let mut scratch = board.clone();
    let sources = own_squares(board, color);

    for from in sources {
        for to in Square::all() {
            if validate_for(&mut scratch, game_state, Move::new(from, to), color).is_ok() {
                return true;
            }
        }
    }
    false
}

/// Every legal move for the side to move. Promoting moves appear once per
/// promotion choice.
pub fn legal_moves(board: &Board, game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move;
    let mut scratch = board.clone();
    let mut out = Vec::<Move>::with_capacity(64);

    for from in own_squares(board, side) {
        for to in Square::all() {
            match validate_for(&mut scratch, game_state, Move::new(from, to), side) {
                Ok(MoveKind::Promotion { .. }) => {
                    out.extend(
                        PROMOTION_CHOICES
                            .iter()
                            .map(|kind| Move::with_promotion(from, to, *kind)),
                    );
                }
                Ok(_) => out.push(Move::new(from, to)),
                Err(_) => {}
            }
        }
    }
    out
}

/// Square the en-passant victim stands on when `mover` captures onto `to`.
#[inline]
pub(crate) fn en_passant_victim(to: Square, mover: Color) -> Square {
    Square::at((to.row() as i8 - mover.pawn_direction()) as u8, to.col())
}

fn own_squares(board: &Board, color: Color) -> Vec<Square> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .map(|(square, _)| square)
        .collect()
}

fn validate_for(
    board: &mut Board,
    game_state: &GameState,
    mv: Move,
    mover: Color,
) -> MoveResult<MoveKind> {
    let Move { from, to, .. } = mv;

    let piece = board
        .piece_at(from)
        .ok_or(MoveError::NoPieceAtSource(from))?;
    if piece.color != mover {
        return Err(MoveError::NotYourTurn(from));
    }
    if from == to {
        return Err(invalid_pattern(piece.kind, from, to));
    }
    let target = board.piece_at(to);
    if target.is_some_and(|t| t.color == mover) {
        return Err(MoveError::CannotCaptureOwnPiece(to));
    }

    let kind = match piece.kind {
        PieceKind::Pawn => pawn_pattern(board, game_state, from, to, mover)?,
        PieceKind::Knight => {
            if knight_attacks(from) & to.mask() == 0 {
                return Err(invalid_pattern(PieceKind::Knight, from, to));
            }
            capture_or_normal(target)
        }
        PieceKind::Bishop => slider_pattern(board, piece.kind, from, to, is_bishop_pattern)?,
        PieceKind::Rook => slider_pattern(board, piece.kind, from, to, is_rook_pattern)?,
        PieceKind::Queen => slider_pattern(board, piece.kind, from, to, is_queen_pattern)?,
        PieceKind::King => king_pattern(board, game_state, from, to, mover)?,
    };

    // Castling was fully checked against attacked squares already.
    if kind.is_castle() {
        return Ok(kind);
    }

    let victim = (kind == MoveKind::EnPassant).then(|| en_passant_victim(to, mover));
    let simulated = SimulatedMove::new(board, from, to, victim);
    if is_in_check(simulated.board(), mover) {
        return Err(MoveError::LeavesOwnKingInCheck);
    }
    Ok(kind)
}

#[inline]
fn invalid_pattern(kind: PieceKind, from: Square, to: Square) -> MoveError {
    MoveError::InvalidPatternForPiece { kind, from, to }
}

#[inline]
fn capture_or_normal(target: Option<Piece>) -> MoveKind {
    if target.is_some() {
        MoveKind::Capture
    } else {
        MoveKind::Normal
    }
}

fn pawn_pattern(
    board: &Board,
    game_state: &GameState,
    from: Square,
    to: Square,
    color: Color,
) -> MoveResult<MoveKind> {
    let dir = color.pawn_direction() as i16;
    let d_row = to.row() as i16 - from.row() as i16;
    let d_col = to.col() as i16 - from.col() as i16;
    let promotes = to.row() == color.promotion_row();
    let target = board.piece_at(to);

    if d_col == 0 && d_row == dir {
        if target.is_some() {
            return Err(MoveError::PathBlocked { from, to });
        }
        return Ok(if promotes {
            MoveKind::Promotion { capture: false }
        } else {
            MoveKind::Normal
        });
    }

    if d_col == 0 && d_row == 2 * dir && from.row() == color.pawn_start_row() {
        let middle = Square::at((from.row() as i16 + dir) as u8, from.col());
        if !board.is_empty(middle) || target.is_some() {
            return Err(MoveError::PathBlocked { from, to });
        }
        return Ok(MoveKind::DoublePawnPush);
    }

    if d_col.abs() == 1 && d_row == dir {
        if target.is_some() {
            return Ok(if promotes {
                MoveKind::Promotion { capture: true }
            } else {
                MoveKind::Capture
            });
        }
        if game_state.en_passant_target == Some(to) {
            let victim = board.piece_at(en_passant_victim(to, color));
            if victim == Some(Piece::new(PieceKind::Pawn, color.opposite())) {
                return Ok(MoveKind::EnPassant);
            }
        }
    }

    Err(invalid_pattern(PieceKind::Pawn, from, to))
}

fn slider_pattern(
    board: &Board,
    kind: PieceKind,
    from: Square,
    to: Square,
    pattern: fn(Square, Square) -> bool,
) -> MoveResult<MoveKind> {
    if !pattern(from, to) {
        return Err(invalid_pattern(kind, from, to));
    }
    if between(from, to) & board.occupancy() != 0 {
        return Err(MoveError::PathBlocked { from, to });
    }
    Ok(capture_or_normal(board.piece_at(to)))
}

fn king_pattern(
    board: &Board,
    game_state: &GameState,
    from: Square,
    to: Square,
    color: Color,
) -> MoveResult<MoveKind> {
    if king_attacks(from) & to.mask() != 0 {
        return Ok(capture_or_normal(board.piece_at(to)));
    }

    let two_columns = from.row() == to.row() && from.col().abs_diff(to.col()) == 2;
    match CastleSide::from_king_destination(to.col()) {
        Some(side) if two_columns && from == king_home(color) => {
            castling_pattern(board, game_state, color, side)
        }
        _ => Err(invalid_pattern(PieceKind::King, from, to)),
    }
}

fn castling_pattern(
    board: &Board,
    game_state: &GameState,
    color: Color,
    side: CastleSide,
) -> MoveResult<MoveKind> {
    let refuse = |reason: CastlingFailure| -> MoveResult<MoveKind> {
        Err(MoveError::CastlingPreconditionFailed(reason))
    };
    let row = color.back_row();
    let enemy = color.opposite();

    if game_state.castling.king_moved(color) {
        return refuse(CastlingFailure::KingMoved);
    }
    if is_in_check(board, color) {
        return refuse(CastlingFailure::KingInCheck);
    }
    if game_state.castling.rook_moved(color, side) {
        return refuse(CastlingFailure::RookMoved);
    }
    if board.piece_at(side.rook_home(color)) != Some(Piece::new(PieceKind::Rook, color)) {
        return refuse(CastlingFailure::RookMissing);
    }
    for &col in side.between_cols() {
        let square = Square::at(row, col);
        if !board.is_empty(square) {
            return refuse(CastlingFailure::PathOccupied(square));
        }
    }
    for col in [KING_START_COL, side.transit_col(), side.king_destination_col()] {
        let square = Square::at(row, col);
        if is_square_attacked(board, square, enemy) {
            return refuse(CastlingFailure::SquareAttacked(square));
        }
    }

    Ok(match side {
        CastleSide::Kingside => MoveKind::CastleKingside,
        CastleSide::Queenside => MoveKind::CastleQueenside,
    })
}
