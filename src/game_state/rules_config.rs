//! Tunable thresholds for the automatic draw rules.
//!
//! Defaults are the standard rules. `RulesConfig::from_env` lets a shell or a
//! benchmark run override them without recompiling:
//!
//! - `CHESS_RULES_FIFTY_MOVE_LIMIT`: half-moves before the fifty-move draw.
//! - `CHESS_RULES_REPETITION_LIMIT`: total occurrences for the repetition draw.
//! - `CHESS_RULES_STRICT_REPETITION`: `1`/`true` to include the en-passant
//!   target in position fingerprints.

use std::str::FromStr;

use tracing::warn;

use crate::game_state::chess_rules::{DEFAULT_FIFTY_MOVE_LIMIT, DEFAULT_REPETITION_LIMIT};

pub const FIFTY_MOVE_LIMIT_VAR: &str = "CHESS_RULES_FIFTY_MOVE_LIMIT";
pub const REPETITION_LIMIT_VAR: &str = "CHESS_RULES_REPETITION_LIMIT";
pub const STRICT_REPETITION_VAR: &str = "CHESS_RULES_STRICT_REPETITION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    pub fifty_move_limit: u16,
    pub repetition_limit: u32,
    /// When set, two positions only repeat if their en-passant targets match too.
    pub strict_repetition: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            fifty_move_limit: DEFAULT_FIFTY_MOVE_LIMIT,
            repetition_limit: DEFAULT_REPETITION_LIMIT,
            strict_repetition: false,
        }
    }
}

impl RulesConfig {
    /// Defaults overridden by any well-formed environment values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            fifty_move_limit: parse_or(&lookup, FIFTY_MOVE_LIMIT_VAR, defaults.fifty_move_limit),
            repetition_limit: parse_or(&lookup, REPETITION_LIMIT_VAR, defaults.repetition_limit)
                .max(1),
            strict_repetition: match lookup(STRICT_REPETITION_VAR) {
                Some(value) => parse_flag(&value).unwrap_or_else(|| {
                    warn!(var = STRICT_REPETITION_VAR, %value, "ignoring unparsable flag");
                    defaults.strict_repetition
                }),
                None => defaults.strict_repetition,
            },
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(var = key, %value, "ignoring unparsable value");
            default
        }),
        None => default,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
