//! Ordered placement slots, one per character of the target word.

use alloc::{string::String, vec::Vec};

use crate::letter::LetterInstance;

/// One position of the target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    index: usize,
    occupant: Option<LetterInstance>,
}

impl Slot {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn occupant(&self) -> Option<LetterInstance> {
        self.occupant
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotArray {
    slots: Vec<Slot>,
}

impl SlotArray {
    /// `len` empty slots.
    pub fn new(len: usize) -> Self {
        let slots = (0..len)
            .map(|index| Slot {
                index,
                occupant: None,
            })
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Lowest-index empty slot.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Slot::is_empty)
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| !s.is_empty())
    }

    /// Put `letter` into slot `index`, returning whatever was there before.
    /// Callers check the index is in range.
    pub(crate) fn occupy(&mut self, index: usize, letter: LetterInstance) -> Option<LetterInstance> {
        self.slots[index].occupant.replace(letter)
    }

    /// Empty slot `index`, returning its occupant.
    pub(crate) fn vacate(&mut self, index: usize) -> Option<LetterInstance> {
        self.slots.get_mut(index).and_then(|s| s.occupant.take())
    }

    /// Empty every slot, yielding occupants in slot order.
    pub(crate) fn drain(&mut self) -> Vec<LetterInstance> {
        self.slots
            .iter_mut()
            .filter_map(|s| s.occupant.take())
            .collect()
    }

    /// Characters of the occupied slots joined in order; `_` marks a gap.
    pub fn spelled(&self) -> String {
        self.slots
            .iter()
            .map(|s| s.occupant.map(|l| l.character()).unwrap_or('_'))
            .collect()
    }
}
