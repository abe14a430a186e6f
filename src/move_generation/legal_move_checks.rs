//! Attack and check detection.
//!
//! Works purely from the board it is given, so it answers equally for the
//! live board and for a board carrying a simulated move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Squares `piece` standing on `from` attacks, given `occupancy`.
#[inline]
pub fn piece_attacks(piece: Piece, from: Square, occupancy: u64) -> u64 {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => queen_attacks(from, occupancy),
        PieceKind::King => king_attacks(from),
    }
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let target_mask = square.mask();
    let occupancy = board.occupancy();

    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker_color)
        .any(|(from, piece)| piece_attacks(piece, from, occupancy) & target_mask != 0)
}

/// Whether `color`'s king stands on a square attacked by the opponent.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, board.king_square(color), color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, row: u8, col: u8, kind: PieceKind, color: Color) {
        board.set_piece(Square::at(row, col), Some(Piece::new(kind, color)));
    }

    #[test]
    fn nothing_attacks_across_the_start_position_gap() {
        let board = Board::starting_position();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
        // e3 is covered by the d2 and f2 pawns.
        assert!(is_square_attacked(&board, Square::at(5, 4), Color::White));
        assert!(!is_square_attacked(&board, Square::at(4, 4), Color::White));
    }

    #[test]
    fn sliders_stop_at_the_first_blocker_inclusive() {
        let mut board = Board::empty_with_kings(Square::at(7, 7), Square::at(0, 7));
        place(&mut board, 7, 0, PieceKind::Rook, Color::Black);
        place(&mut board, 7, 3, PieceKind::Knight, Color::White);

        // The knight on d1 is attacked, the squares behind it are not.
        assert!(is_square_attacked(&board, Square::at(7, 3), Color::Black));
        assert!(!is_square_attacked(&board, Square::at(7, 5), Color::Black));
        assert!(!is_in_check(&board, Color::White));

        board.set_piece(Square::at(7, 3), None);
        assert!(is_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_attacks_depend_on_color() {
        let mut board = Board::empty_with_kings(Square::at(7, 0), Square::at(0, 0));
        place(&mut board, 4, 4, PieceKind::Pawn, Color::White);
        place(&mut board, 3, 2, PieceKind::Pawn, Color::Black);

        // White pawn on e4 hits d5/f5, Black pawn on c5 hits b4/d4.
        assert!(is_square_attacked(&board, Square::at(3, 3), Color::White));
        assert!(!is_square_attacked(&board, Square::at(5, 3), Color::White));
        assert!(is_square_attacked(&board, Square::at(4, 3), Color::Black));
        assert!(!is_square_attacked(&board, Square::at(2, 3), Color::Black));
    }
}
