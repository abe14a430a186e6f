//! Leaf-node counting over the legal move tree.
//!
//! Each child is played on a cloned board and state with `apply_move`, so
//! perft exercises the validator and the executor together.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_validator::legal_moves;

pub fn perft(board: &Board, game_state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| child_count(board, game_state, mv, depth - 1))
        .sum()
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(board: &Board, game_state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    legal_moves(board, game_state)
        .into_iter()
        .map(|mv| (mv, child_count(board, game_state, mv, depth - 1)))
        .collect()
}

fn child_count(board: &Board, game_state: &GameState, mv: Move, depth: u8) -> u64 {
    let mut child_board = board.clone();
    let mut child_state = game_state.clone();
    match apply_move(&mut child_board, &mut child_state, mv) {
        Ok(_) => perft(&child_board, &child_state, depth),
        Err(_) => 0,
    }
}
