//! Ray walking shared by the sliding pieces.
//!
//! A ray includes every empty square it crosses and stops on (and includes)
//! the first occupied square.

use crate::game_state::chess_types::Square;

pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn trace_ray(square: Square, d_row: i8, d_col: i8, occupancy: u64) -> u64 {
    let mut row = square.row() as i8 + d_row;
    let mut col = square.col() as i8 + d_col;
    let mut attacks = 0u64;

    while (0..8).contains(&row) && (0..8).contains(&col) {
        let bit = 1u64 << (row as usize * 8 + col as usize);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        row += d_row;
        col += d_col;
    }

    attacks
}

/// Empty-board ray, usable in const table generation.
pub const fn trace_ray_const(index: usize, d_row: i32, d_col: i32) -> u64 {
    let mut row = (index / 8) as i32 + d_row;
    let mut col = (index % 8) as i32 + d_col;
    let mut attacks = 0u64;

    while row >= 0 && row < 8 && col >= 0 && col < 8 {
        attacks |= 1u64 << (row * 8 + col) as usize;
        row += d_row;
        col += d_col;
    }

    attacks
}

/// Squares strictly between two squares on a shared row, column or diagonal;
/// zero when they are not aligned or adjacent.
pub fn between(from: Square, to: Square) -> u64 {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned || (d_row == 0 && d_col == 0) {
        return 0;
    }

    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut mask = 0u64;
    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            break;
        }
        mask |= square.mask();
        current = square.offset(step_row, step_col);
    }
    mask
}
