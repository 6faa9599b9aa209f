//! Letter tiles: one identifiable instance per character of the target word.

use core::fmt;

/// Opaque handle of a letter tile, unique within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterId(u32);

impl LetterId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LetterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single tile. Two tiles may carry the same character but never the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterInstance {
    id: LetterId,
    character: char,
}

impl LetterInstance {
    pub const fn new(id: LetterId, character: char) -> Self {
        Self { id, character }
    }

    pub fn id(&self) -> LetterId {
        self.id
    }

    pub fn character(&self) -> char {
        self.character
    }
}
