//! 8x8 mailbox board with cached king locations.
//!
//! The board owns exactly one king per color. Writing a king through
//! `set_piece` moves the cached king square along with it, so the cache can
//! never drift from the grid.

use crate::game_state::chess_rules::{KING_START_COL, MATERIAL_VALUES, STARTING_BACK_ROW};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    king_squares: [Square; 2],
}

/// Non-king piece counts for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialCount {
    pub pawns: u32,
    pub knights: u32,
    pub bishops: u32,
    pub rooks: u32,
    pub queens: u32,
}

impl MaterialCount {
    #[inline]
    pub fn minor_pieces(&self) -> u32 {
        self.knights + self.bishops
    }

    /// Material in pawn units (1/3/3/5/9).
    pub fn value(&self) -> u32 {
        let counts = [
            self.pawns,
            self.knights,
            self.bishops,
            self.rooks,
            self.queens,
        ];
        counts
            .iter()
            .zip(MATERIAL_VALUES)
            .map(|(count, value)| count * value)
            .sum()
    }
}

impl Board {
    /// Board holding only the two kings.
    pub fn empty_with_kings(white_king: Square, black_king: Square) -> Self {
        let mut board = Self {
            squares: [[None; 8]; 8],
            king_squares: [white_king, black_king],
        };
        board.squares[white_king.row() as usize][white_king.col() as usize] =
            Some(Piece::new(PieceKind::King, Color::White));
        board.squares[black_king.row() as usize][black_king.col() as usize] =
            Some(Piece::new(PieceKind::King, Color::Black));
        board
    }

    pub fn starting_position() -> Self {
        let mut squares = [[None; 8]; 8];
        for color in [Color::White, Color::Black] {
            let back = color.back_row() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, kind) in STARTING_BACK_ROW.iter().enumerate() {
                squares[back][col] = Some(Piece::new(*kind, color));
                squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }

        Self {
            squares,
            king_squares: [
                Square::at(Color::White.back_row(), KING_START_COL),
                Square::at(Color::Black.back_row(), KING_START_COL),
            ],
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Write one square. Writing a king also relocates that color's cached
    /// king square.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(Piece {
            kind: PieceKind::King,
            color,
        }) = piece
        {
            self.king_squares[color.index()] = square;
        }
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Move whatever stands on `from` to `to`, returning the displaced piece.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.piece_at(from);
        let captured = self.piece_at(to);
        self.set_piece(to, moving);
        self.set_piece(from, None);
        captured
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Overwrite the cached king square without touching the grid. Only the
    /// simulation guard uses this to restore its snapshot.
    #[inline]
    pub(crate) fn restore_king_square(&mut self, color: Color, square: Square) {
        self.king_squares[color.index()] = square;
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// One bit per occupied square, indexed by `Square::index`.
    pub fn occupancy(&self) -> u64 {
        self.pieces().fold(0u64, |acc, (sq, _)| acc | sq.mask())
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces()
            .filter(|(_, p)| p.color == color && p.kind == kind)
            .count()
    }

    pub fn material(&self, color: Color) -> MaterialCount {
        let mut out = MaterialCount::default();
        for (_, piece) in self.pieces().filter(|(_, p)| p.color == color) {
            match piece.kind {
                PieceKind::Pawn => out.pawns += 1,
                PieceKind::Knight => out.knights += 1,
                PieceKind::Bishop => out.bishops += 1,
                PieceKind::Rook => out.rooks += 1,
                PieceKind::Queen => out.queens += 1,
                PieceKind::King => {}
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_full_material() {
        let board = Board::starting_position();
        for color in [Color::White, Color::Black] {
            let material = board.material(color);
            assert_eq!(material.pawns, 8);
            assert_eq!(material.minor_pieces(), 4);
            assert_eq!(material.value(), 39);
            assert_eq!(board.count(color, PieceKind::King), 1);
        }
        assert_eq!(board.occupancy().count_ones(), 32);
    }

    #[test]
    fn king_cache_matches_grid() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White).to_string(), "e1");
        assert_eq!(board.king_square(Color::Black).to_string(), "e8");
        assert_eq!(
            board.piece_at(board.king_square(Color::White)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
    }

    #[test]
    fn moving_a_king_updates_the_cache() {
        let mut board = Board::empty_with_kings(Square::at(7, 4), Square::at(0, 4));
        let captured = board.move_piece(Square::at(7, 4), Square::at(6, 4));
        assert_eq!(captured, None);
        assert_eq!(board.king_square(Color::White), Square::at(6, 4));
        assert!(board.is_empty(Square::at(7, 4)));
    }
}
