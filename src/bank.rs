//! The pool of letters not yet placed in a slot.
//!
//! Every tile of the round keeps a fixed spot in the tray layout; placing a
//! tile leaves a gap and removing it from its slot fills the same gap again.
//! Only a reset re-shuffles the layout.

use alloc::vec::Vec;
use rand::{seq::SliceRandom, Rng};

use crate::letter::{LetterId, LetterInstance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TraySpot {
    letter: LetterInstance,
    present: bool,
}

/// Unplaced tiles in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterBank {
    tray: Vec<TraySpot>,
}

impl LetterBank {
    /// Build a shuffled bank for `word`. Ids are handed out after shuffling
    /// so they carry no information about the target position.
    pub fn for_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Self {
        let mut chars: Vec<char> = word.chars().collect();
        chars.shuffle(rng);
        let tray = chars
            .into_iter()
            .enumerate()
            .map(|(i, c)| TraySpot {
                letter: LetterInstance::new(LetterId::new(i as u32), c),
                present: true,
            })
            .collect();
        Self { tray }
    }

    /// Tiles currently in the bank, in tray order.
    pub fn letters(&self) -> Vec<LetterInstance> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterInstance> + '_ {
        self.tray.iter().filter(|s| s.present).map(|s| s.letter)
    }

    pub fn len(&self) -> usize {
        self.tray.iter().filter(|s| s.present).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total tiles in the round, placed or not.
    pub fn capacity(&self) -> usize {
        self.tray.len()
    }

    pub fn contains(&self, id: LetterId) -> bool {
        self.tray.iter().any(|s| s.present && s.letter.id() == id)
    }

    /// First unplaced tile showing `character`.
    pub fn find_char(&self, character: char) -> Option<LetterId> {
        self.iter()
            .find(|l| l.character() == character)
            .map(|l| l.id())
    }

    /// Remove a tile from the bank, handing ownership to the caller.
    pub fn take(&mut self, id: LetterId) -> Option<LetterInstance> {
        let spot = self
            .tray
            .iter_mut()
            .find(|s| s.present && s.letter.id() == id)?;
        spot.present = false;
        Some(spot.letter)
    }

    /// Return a tile to its spot in the tray. Tiles that were never dealt
    /// into this bank are ignored.
    pub fn put_back(&mut self, letter: LetterInstance) {
        let spot = self.tray.iter_mut().find(|s| s.letter == letter);
        debug_assert!(spot.is_some(), "{} was not dealt into this bank", letter.id());
        if let Some(spot) = spot {
            spot.present = true;
        }
    }

    /// Re-randomize the tray layout.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tray.shuffle(rng);
    }
}
