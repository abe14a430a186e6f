//! Scoped undo record for hypothetical moves.
//!
//! `SimulatedMove` plays a move on a board and restores every touched square
//! and the cached king square when it is dropped, on every exit path.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    moved: Option<Piece>,
    captured: Option<Piece>,
    // En-passant victim square and the pawn removed from it.
    removed: Option<(Square, Piece)>,
    prior_king_squares: [Square; 2],
}

impl<'a> SimulatedMove<'a> {
    /// Move `from` -> `to` on `board`, additionally clearing `remove` (the
    /// en-passant victim) when given.
    pub fn new(board: &'a mut Board, from: Square, to: Square, remove: Option<Square>) -> Self {
        let prior_king_squares = [
            board.king_square(Color::White),
            board.king_square(Color::Black),
        ];
        let moved = board.piece_at(from);
        let removed = remove.and_then(|sq| {
            let piece = board.piece_at(sq)?;
            board.set_piece(sq, None);
            Some((sq, piece))
        });
        let captured = board.move_piece(from, to);

        Self {
            board,
            from,
            to,
            moved,
            captured,
            removed,
            prior_king_squares,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.set_piece(self.from, self.moved);
        self.board.set_piece(self.to, self.captured);
        if let Some((square, piece)) = self.removed {
            self.board.set_piece(square, Some(piece));
        }
        for color in [Color::White, Color::Black] {
            self.board
                .restore_king_square(color, self.prior_king_squares[color.index()]);
        }
    }
}
