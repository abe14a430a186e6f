//! Bishop reach: diagonal rays, empty-board and occupancy-aware.

use crate::game_state::chess_types::Square;
use crate::moves::rays::{trace_ray, trace_ray_const, DIAGONAL_STEPS};

pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    DIAGONAL_STEPS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| {
            acc | trace_ray(square, d_row, d_col, occupancy)
        })
}

/// Diagonal geometry only; says nothing about blockers.
#[inline]
pub fn is_bishop_pattern(from: Square, to: Square) -> bool {
    BISHOP_RAYS[from.index()] & to.mask() != 0
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = trace_ray_const(sq, 1, 1)
            | trace_ray_const(sq, -1, 1)
            | trace_ray_const(sq, 1, -1)
            | trace_ray_const(sq, -1, -1);
        sq += 1;
    }

    table
}
