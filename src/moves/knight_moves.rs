use crate::game_state::chess_types::Square;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;

        table[sq] = set_if_valid(row + 2, col + 1)
            | set_if_valid(row + 1, col + 2)
            | set_if_valid(row - 1, col + 2)
            | set_if_valid(row - 2, col + 1)
            | set_if_valid(row - 2, col - 1)
            | set_if_valid(row - 1, col - 2)
            | set_if_valid(row + 1, col - 2)
            | set_if_valid(row + 2, col - 1);
        sq += 1;
    }

    table
}

pub(crate) const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    1u64 << ((row as usize) * 8 + (col as usize))
}
