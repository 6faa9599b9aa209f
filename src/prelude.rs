//! Commonly used types and utilities for ease of import.

pub use crate::{
    builtin_words, Action, GameConfig, Phase, PuzzleError, RoundEngine, RoundOutcome, RoundPolicy,
    SessionController, SessionEvent, WordEntry,
};

#[cfg(feature = "std")]
pub use crate::{AiPlayer, CliListener, CliPlayer, Player, SessionListener, SessionRunner};
