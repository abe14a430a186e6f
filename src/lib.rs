//! Crate root module declarations for the chess rules core.
//!
//! This file exposes the rules subsystems (board and game state, attack
//! tables, move legality and execution, terminal-condition evaluation, and
//! notation helpers) so shells, tests, and benchmarks can import stable module
//! paths. The most common entry points are re-exported at the crate root.

pub mod errors;
pub mod game;

pub mod game_state {
    pub mod board;
    pub mod castling_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod fingerprint;
    pub mod game_state;
    pub mod rules_config;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_validator;
    pub mod perft;
}

pub mod outcome {
    pub mod insufficient_material;
    pub mod terminal_conditions;
}

pub mod utils {
    pub mod algebraic;
}

pub use errors::{CastlingFailure, MoveError, MoveResult};
pub use game::ChessGame;
pub use game_state::board::{Board, MaterialCount};
pub use game_state::castling_rights::{CastleSide, CastlingRights};
pub use game_state::chess_types::{Color, Move, MoveKind, Phase, Piece, PieceKind, Square};
pub use game_state::fingerprint::{fingerprint, PositionFingerprint};
pub use game_state::game_state::{initial_position, GameState};
pub use game_state::rules_config::RulesConfig;
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::{is_in_check, is_square_attacked};
pub use move_generation::legal_move_validator::{
    has_legal_moves, is_legal_move, legal_moves, validate_move,
};
pub use outcome::terminal_conditions::evaluate_terminal_condition;
