//! Common types for the puzzle: errors, round phases and outcomes.

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum RoundOutcome {
    /// The slots spelled the target word.
    Success,
    /// The wrong-attempt budget ran out and the word was revealed.
    Failed,
    /// The player gave up on the round.
    Skipped,
}

/// Lifecycle phase of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting placements, removals, hints, resets and skips.
    Active,
    /// All slots are occupied and the attempt is being checked.
    Evaluating,
    /// Solved; the celebration dwell window is open.
    Success,
    /// Out of attempts; the answer is shown for the dwell window.
    LockedReveal,
    /// Terminal.
    Closed,
}

impl Phase {
    /// Returns `true` while the round accepts player mutations.
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Active)
    }
}

/// Errors returned by board, round and session operations.
///
/// All of them are recoverable; callers are expected to surface them as a
/// no-op. A wrong word is a normal outcome and never shows up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    /// Unknown letter, letter already placed, empty or missing slot.
    InvalidOperation,
    /// Mutation attempted outside the `Active` phase.
    RoundLocked,
    /// Hint budget spent or no empty slot left to fill.
    HintExhausted,
    /// A session was started without any words.
    InsufficientContent,
    /// Dataset entry is empty or not made of A-Z letters.
    InvalidWord,
    /// A policy value is out of range.
    InvalidConfig(&'static str),
}

impl core::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PuzzleError::InvalidOperation => write!(f, "Operation does not apply to this letter or slot"),
            PuzzleError::RoundLocked => write!(f, "Round is not accepting moves"),
            PuzzleError::HintExhausted => write!(f, "No hint available"),
            PuzzleError::InsufficientContent => write!(f, "Word list is empty"),
            PuzzleError::InvalidWord => write!(f, "Words must be non-empty and use only letters A-Z"),
            PuzzleError::InvalidConfig(what) => write!(f, "Invalid configuration: {}", what),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PuzzleError {}
