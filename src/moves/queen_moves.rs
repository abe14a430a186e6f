use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::{bishop_attacks, BISHOP_RAYS};
use crate::moves::rook_moves::{rook_attacks, ROOK_RAYS};

pub const QUEEN_RAYS: [u64; 64] = generate_queen_rays();

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

#[inline]
pub fn is_queen_pattern(from: Square, to: Square) -> bool {
    QUEEN_RAYS[from.index()] & to.mask() != 0
}

const fn generate_queen_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = BISHOP_RAYS[sq] | ROOK_RAYS[sq];
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{queen_attacks, QUEEN_RAYS};
    use crate::game_state::chess_types::Square;

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        assert_eq!(QUEEN_RAYS[Square::at(4, 3).index()].count_ones(), 27);
    }

    #[test]
    fn queen_attacks_stop_at_blockers_in_both_families() {
        let d4 = Square::at(4, 3);
        let d6 = Square::at(2, 3);
        let f6 = Square::at(2, 5);
        let attacks = queen_attacks(d4, d6.mask() | f6.mask());

        assert_ne!(attacks & d6.mask(), 0);
        assert_ne!(attacks & f6.mask(), 0);
        assert_eq!(attacks & Square::at(1, 3).mask(), 0);
        assert_eq!(attacks & Square::at(1, 6).mask(), 0);
    }
}
