//! Letter bank and slot array together: the placement primitive every
//! player action goes through.

use alloc::{string::String, vec::Vec};
use rand::Rng;

use crate::bank::LetterBank;
use crate::common::PuzzleError;
use crate::letter::{LetterId, LetterInstance};
use crate::slots::SlotArray;

/// Owns every tile of a round. A tile is always either in the bank or in
/// exactly one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    target: Vec<char>,
    bank: LetterBank,
    slots: SlotArray,
}

impl Board {
    /// Fresh board for `word`: all tiles shuffled into the bank, slots empty.
    pub fn new<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Self {
        let target: Vec<char> = word.chars().collect();
        let slots = SlotArray::new(target.len());
        Board {
            bank: LetterBank::for_word(word, rng),
            slots,
            target,
        }
    }

    pub fn bank(&self) -> &LetterBank {
        &self.bank
    }

    pub fn slots(&self) -> &SlotArray {
        &self.slots
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn word_len(&self) -> usize {
        self.target.len()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Move `id` from the bank into `target_slot`, or the lowest empty slot
    /// when none is given. An occupant of the target slot goes back to the
    /// bank first. Returns the slot index used.
    pub fn place(&mut self, id: LetterId, target_slot: Option<usize>) -> Result<usize, PuzzleError> {
        if !self.bank.contains(id) {
            return Err(PuzzleError::InvalidOperation);
        }
        let index = match target_slot {
            Some(i) if i < self.slots.len() => i,
            Some(_) => return Err(PuzzleError::InvalidOperation),
            None => self.slots.first_empty().ok_or(PuzzleError::InvalidOperation)?,
        };
        let letter = self.bank.take(id).ok_or(PuzzleError::InvalidOperation)?;
        if let Some(displaced) = self.slots.vacate(index) {
            self.bank.put_back(displaced);
        }
        self.slots.occupy(index, letter);
        Ok(index)
    }

    /// Send the occupant of `index` back to the bank.
    pub fn remove(&mut self, index: usize) -> Result<LetterId, PuzzleError> {
        let letter = self
            .slots
            .vacate(index)
            .ok_or(PuzzleError::InvalidOperation)?;
        self.bank.put_back(letter);
        Ok(letter.id())
    }

    /// Return every placed tile to the bank and re-shuffle it.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.clear();
        self.bank.shuffle(rng);
    }

    /// Return every placed tile to its spot in the bank.
    pub fn clear(&mut self) {
        for letter in self.slots.drain() {
            self.bank.put_back(letter);
        }
    }

    /// The joined slot characters once every slot is filled.
    pub fn attempt(&self) -> Option<String> {
        if self.slots.is_full() {
            Some(self.slots.spelled())
        } else {
            None
        }
    }

    pub fn is_solved(&self) -> bool {
        self.slots
            .slots()
            .iter()
            .zip(self.target.iter())
            .all(|(slot, &c)| slot.occupant().map(|l| l.character()) == Some(c))
    }

    /// Rearrange the existing tiles so the slots spell the target word.
    pub fn arrange_solution(&mut self) {
        let mut pool: Vec<LetterInstance> = self.slots.drain();
        for letter in self.bank.letters() {
            if let Some(l) = self.bank.take(letter.id()) {
                pool.push(l);
            }
        }
        for (index, &c) in self.target.iter().enumerate() {
            if let Some(pos) = pool.iter().position(|l| l.character() == c) {
                let letter = pool.swap_remove(pos);
                self.slots.occupy(index, letter);
            }
        }
        for leftover in pool {
            self.bank.put_back(leftover);
        }
    }

    /// Fill slot `index` with a tile showing the target character there.
    /// When no such tile is left in the bank, one is pulled back from a slot
    /// where it does not belong.
    pub fn place_correct(&mut self, index: usize) -> Result<LetterId, PuzzleError> {
        let needed = *self.target.get(index).ok_or(PuzzleError::InvalidOperation)?;
        let id = match self.bank.find_char(needed) {
            Some(id) => id,
            None => {
                let misplaced = self
                    .slots
                    .slots()
                    .iter()
                    .find(|s| {
                        s.occupant().map(|l| l.character()) == Some(needed)
                            && self.target[s.index()] != needed
                    })
                    .map(|s| s.index())
                    .ok_or(PuzzleError::InvalidOperation)?;
                self.remove(misplaced)?
            }
        };
        self.place(id, Some(index))?;
        Ok(id)
    }

    /// Checks tile conservation: bank and slots together hold exactly the
    /// target's characters and every tile is in one place only.
    pub fn is_consistent(&self) -> bool {
        let placed = self.slots.slots().iter().filter_map(|s| s.occupant());
        let mut ids: Vec<LetterId> = self.bank.iter().chain(placed.clone()).map(|l| l.id()).collect();
        let mut chars: Vec<char> = self.bank.iter().chain(placed).map(|l| l.character()).collect();
        let mut expected = self.target.clone();
        chars.sort_unstable();
        expected.sort_unstable();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        total == self.target.len() && ids.len() == total && chars == expected
    }
}
