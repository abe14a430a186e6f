//! Dead-position detection by material.
//!
//! Recognises the material sets with which neither side can ever deliver
//! mate: bare kings, a lone minor piece against a bare king, and one bishop
//! each on same-coloured squares. Any queen, rook or pawn keeps the game alive.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn is_insufficient_material(board: &Board) -> bool {
    let white = board.material(Color::White);
    let black = board.material(Color::Black);

    for side in [&white, &black] {
        if side.queens > 0 || side.rooks > 0 || side.pawns > 0 {
            return false;
        }
    }

    match (white.minor_pieces(), black.minor_pieces()) {
        (0, 0) => true,
        (1, 0) | (0, 1) => true,
        (1, 1) if white.bishops == 1 && black.bishops == 1 => bishops_share_square_color(board),
        _ => false,
    }
}

fn bishops_share_square_color(board: &Board) -> bool {
    let mut parities = board
        .pieces()
        .filter(|(_, piece)| piece.kind == PieceKind::Bishop)
        .map(|(square, _)| square.parity());

    match (parities.next(), parities.next()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_insufficient_material;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    fn kings() -> Board {
        Board::empty_with_kings(Square::at(7, 4), Square::at(0, 4))
    }

    fn place(board: &mut Board, row: u8, col: u8, kind: PieceKind, color: Color) {
        board.set_piece(Square::at(row, col), Some(Piece::new(kind, color)));
    }

    #[test]
    fn bare_kings_and_lone_minors_are_dead() {
        let mut board = kings();
        assert!(is_insufficient_material(&board));

        place(&mut board, 5, 2, PieceKind::Knight, Color::Black);
        assert!(is_insufficient_material(&board));

        board.set_piece(Square::at(5, 2), None);
        place(&mut board, 5, 2, PieceKind::Bishop, Color::White);
        assert!(is_insufficient_material(&board));
    }

    #[test]
    fn any_pawn_rook_or_queen_is_sufficient() {
        for kind in [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen] {
            let mut board = kings();
            place(&mut board, 4, 4, kind, Color::Black);
            assert!(!is_insufficient_material(&board), "{kind:?}");
        }
    }

    #[test]
    fn opposing_bishops_depend_on_square_color() {
        let mut board = kings();
        // c1 and f8 are both dark squares.
        place(&mut board, 7, 2, PieceKind::Bishop, Color::White);
        place(&mut board, 0, 5, PieceKind::Bishop, Color::Black);
        assert!(is_insufficient_material(&board));

        board.set_piece(Square::at(0, 5), None);
        place(&mut board, 0, 2, PieceKind::Bishop, Color::Black);
        assert!(!is_insufficient_material(&board));
    }

    #[test]
    fn two_minors_on_one_side_are_sufficient() {
        let mut board = kings();
        place(&mut board, 7, 1, PieceKind::Knight, Color::White);
        place(&mut board, 7, 6, PieceKind::Knight, Color::White);
        assert!(!is_insufficient_material(&board));

        let mut board = kings();
        place(&mut board, 7, 1, PieceKind::Knight, Color::White);
        place(&mut board, 0, 1, PieceKind::Knight, Color::Black);
        assert!(!is_insufficient_material(&board));
    }
}
