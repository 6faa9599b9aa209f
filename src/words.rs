//! Word/hint dataset entries and the built-in word list.

use alloc::{string::String, vec::Vec};

use crate::common::PuzzleError;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// A target word together with the clue shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize))]
pub struct WordEntry {
    word: String,
    hint: String,
}

impl WordEntry {
    /// Normalize and validate an entry. The word is trimmed and upper-cased
    /// and must then consist of A-Z only.
    pub fn new(word: &str, hint: &str) -> Result<Self, PuzzleError> {
        let word: String = word.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(PuzzleError::InvalidWord);
        }
        Ok(Self {
            word,
            hint: String::from(hint.trim()),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

const BUILTIN: [(&str, &str); 5] = [
    ("INSURANCE", "Financial protection against loss"),
    ("PREMIUM", "Amount paid for an insurance policy"),
    ("SAVINGS", "Money set aside for future use"),
    ("INVESTMENT", "Asset purchased to generate income"),
    ("RETIREMENT", "Period of life after stopping work"),
];

/// The five-word financial literacy list the quiz ships with.
pub fn builtin_words() -> Vec<WordEntry> {
    BUILTIN
        .iter()
        .filter_map(|(w, h)| WordEntry::new(w, h).ok())
        .collect()
}

/// Validate raw pairs into entries, failing on the first bad word.
pub fn parse_entries<'a, I>(pairs: I) -> Result<Vec<WordEntry>, PuzzleError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs.into_iter().map(|(w, h)| WordEntry::new(w, h)).collect()
}

/// Read a JSON array of `{"word": .., "hint": ..}` objects.
#[cfg(feature = "std")]
pub fn load_word_list(path: &std::path::Path) -> anyhow::Result<Vec<WordEntry>> {
    #[derive(Deserialize)]
    struct RawEntry {
        word: String,
        hint: String,
    }

    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
    let raw: Vec<RawEntry> = serde_json::from_str(&text)?;
    let entries = parse_entries(raw.iter().map(|r| (r.word.as_str(), r.hint.as_str())))
        .map_err(|e| anyhow::anyhow!(e))?;
    log::debug!("loaded {} words from {}", entries.len(), path.display());
    Ok(entries)
}
