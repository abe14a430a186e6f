//! Owned game wrapper for shells.
//!
//! `ChessGame` bundles a `Board` and its `GameState` and forwards to the free
//! functions of the rules core, so a text or network shell can hold one value
//! per game.

use tracing::debug;

use crate::errors::MoveResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::fingerprint::{fingerprint, PositionFingerprint};
use crate::game_state::game_state::{initial_position, GameState};
use crate::game_state::rules_config::RulesConfig;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_validator::{
    has_legal_moves, is_legal_move, legal_moves, validate_move,
};
use crate::outcome::terminal_conditions::evaluate_terminal_condition;
use crate::utils::algebraic::long_algebraic_to_move;

#[derive(Debug, Clone)]
pub struct ChessGame {
    board: Board,
    state: GameState,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// Standard starting position with default rules.
    pub fn new() -> Self {
        let (board, state) = initial_position();
        Self { board, state }
    }

    /// Standard starting position with custom draw thresholds.
    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            board: Board::starting_position(),
            state: GameState::with_config(config),
        }
    }

    /// Standard starting position with draw thresholds read from the
    /// environment.
    pub fn from_env() -> Self {
        Self::with_config(RulesConfig::from_env())
    }

    /// Wrap an existing position.
    pub fn from_parts(board: Board, state: GameState) -> Self {
        Self { board, state }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    pub fn into_parts(self) -> (Board, GameState) {
        (self.board, self.state)
    }

    pub fn validate(&self, mv: Move) -> MoveResult<MoveKind> {
        validate_move(&self.board, &self.state, mv)
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        is_legal_move(&self.board, &self.state, mv)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, &self.state)
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        has_legal_moves(&self.board, &self.state, color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Apply `mv` and return the phase of the resulting position.
    pub fn play(&mut self, mv: Move) -> MoveResult<Phase> {
        apply_move(&mut self.board, &mut self.state, mv)?;
        Ok(self.phase())
    }

    /// Parse long algebraic text (`e2e4`, `e7e8q`) and play it.
    pub fn play_long_algebraic(&mut self, text: &str) -> MoveResult<Phase> {
        let mv = long_algebraic_to_move(text)?;
        debug!(text, "parsed move");
        self.play(mv)
    }

    pub fn phase(&self) -> Phase {
        evaluate_terminal_condition(&self.board, &self.state)
    }

    pub fn fingerprint(&self) -> PositionFingerprint {
        fingerprint(&self.board, &self.state)
    }
}
