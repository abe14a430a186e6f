//! Rook reach: orthogonal rays, empty-board and occupancy-aware.

use crate::game_state::chess_types::Square;
use crate::moves::rays::{trace_ray, trace_ray_const, ORTHOGONAL_STEPS};

pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ORTHOGONAL_STEPS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| {
            acc | trace_ray(square, d_row, d_col, occupancy)
        })
}

#[inline]
pub fn is_rook_pattern(from: Square, to: Square) -> bool {
    ROOK_RAYS[from.index()] & to.mask() != 0
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = trace_ray_const(sq, 0, 1)
            | trace_ray_const(sq, 0, -1)
            | trace_ray_const(sq, 1, 0)
            | trace_ray_const(sq, -1, 0);
        sq += 1;
    }

    table
}
