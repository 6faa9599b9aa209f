use core::time::Duration;

use crate::common::PuzzleError;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUCCESS_AWARD: u32 = 10;
pub const DEFAULT_SAMPLE_SIZE: usize = 5;
pub const DEFAULT_MAX_WRONG_ATTEMPTS: u32 = 2;
pub const DEFAULT_MAX_HINTS: usize = 2;
pub const DEFAULT_SUCCESS_DWELL_MS: u64 = 1500;
pub const DEFAULT_FAILURE_DWELL_MS: u64 = 1200;
pub const DEFAULT_SKIP_DELAY_MS: u64 = 300;

/// Highest rating shown on the result screen.
pub const MAX_STARS: u32 = 5;

/// Per-round policy: retry budget, hint budget and dwell windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct RoundPolicy {
    /// Mismatches allowed before the round locks and reveals the answer.
    pub max_wrong_attempts: u32,
    /// Hints per round, clamped to the word length.
    pub max_hints: usize,
    pub success_dwell_ms: u64,
    pub failure_dwell_ms: u64,
    /// Delay between a skip and the next round appearing.
    pub skip_delay_ms: u64,
}

impl RoundPolicy {
    pub fn success_dwell(&self) -> Duration {
        Duration::from_millis(self.success_dwell_ms)
    }

    pub fn failure_dwell(&self) -> Duration {
        Duration::from_millis(self.failure_dwell_ms)
    }

    pub fn skip_delay(&self) -> Duration {
        Duration::from_millis(self.skip_delay_ms)
    }

    /// Number of hints available for a word of `word_len` letters.
    pub fn hint_budget(&self, word_len: usize) -> usize {
        self.max_hints.min(word_len)
    }

    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.max_wrong_attempts == 0 {
            return Err(PuzzleError::InvalidConfig("max_wrong_attempts must be at least 1"));
        }
        Ok(())
    }
}

impl Default for RoundPolicy {
    fn default() -> Self {
        Self {
            max_wrong_attempts: DEFAULT_MAX_WRONG_ATTEMPTS,
            max_hints: DEFAULT_MAX_HINTS,
            success_dwell_ms: DEFAULT_SUCCESS_DWELL_MS,
            failure_dwell_ms: DEFAULT_FAILURE_DWELL_MS,
            skip_delay_ms: DEFAULT_SKIP_DELAY_MS,
        }
    }
}

/// Session-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    /// Points for each solved round.
    pub success_award: u32,
    /// Rounds drawn per session.
    pub sample_size: usize,
    /// Draw words in random order instead of dataset order.
    pub shuffle_words: bool,
    pub round: RoundPolicy,
}

impl GameConfig {
    /// Same settings with every dwell window and delay set to zero.
    pub fn without_delays(mut self) -> Self {
        self.round.success_dwell_ms = 0;
        self.round.failure_dwell_ms = 0;
        self.round.skip_delay_ms = 0;
        self
    }

    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.sample_size == 0 {
            return Err(PuzzleError::InvalidConfig("sample_size must be at least 1"));
        }
        self.round.validate()
    }

    /// Load settings from a JSON file. Missing fields keep their defaults.
    #[cfg(feature = "std")]
    pub fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            success_award: DEFAULT_SUCCESS_AWARD,
            sample_size: DEFAULT_SAMPLE_SIZE,
            shuffle_words: true,
            round: RoundPolicy::default(),
        }
    }
}
