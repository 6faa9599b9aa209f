// Anagram-based move selection for computer players.
// no_std: works on the round snapshot only.

use alloc::{string::String, vec::Vec};
use rand::{seq::IndexedRandom, Rng};

use crate::{letter::LetterInstance, player::Action, round::RoundView};

fn sorted_chars<I: IntoIterator<Item = char>>(chars: I) -> Vec<char> {
    let mut v: Vec<char> = chars.into_iter().collect();
    v.sort_unstable();
    v
}

/// Lexicon words spelled by exactly the given tiles.
pub fn anagram_candidates<'a>(lexicon: &'a [String], tiles: &[char]) -> Vec<&'a str> {
    let wanted = sorted_chars(tiles.iter().copied());
    lexicon
        .iter()
        .filter(|w| w.len() == tiles.len() && sorted_chars(w.chars()) == wanted)
        .map(String::as_str)
        .collect()
}

/// First candidate that agrees with every occupied slot.
pub fn consistent_candidate<'a>(candidates: &[&'a str], slots: &[Option<LetterInstance>]) -> Option<&'a str> {
    candidates.iter().copied().find(|word| {
        word.chars()
            .zip(slots.iter())
            .all(|(c, slot)| slot.map_or(true, |l| l.character() == c))
    })
}

/// Pick the next move. With probability `skill` the correct tile for the
/// lowest empty slot is played when the word is known; otherwise a random
/// bank tile goes there. After a miss, spare hints are spent first.
pub fn choose_action<R: Rng + ?Sized>(lexicon: &[String], view: &RoundView, skill: f64, rng: &mut R) -> Action {
    let Some(slot) = view.first_empty() else {
        return Action::Reset;
    };
    let tiles: Vec<char> = view.all_letters().map(|l| l.character()).collect();
    let candidates = anagram_candidates(lexicon, &tiles);
    let known = consistent_candidate(&candidates, &view.slots);

    if view.hints_remaining() > 0 && (view.wrong_attempts > 0 || candidates.is_empty()) {
        return Action::Hint;
    }

    if let Some(word) = known {
        if rng.random_bool(skill.clamp(0.0, 1.0)) {
            let wanted = word.chars().nth(slot);
            if let Some(tile) = view.bank.iter().find(|l| Some(l.character()) == wanted) {
                return Action::Place {
                    letter: tile.id(),
                    slot: Some(slot),
                };
            }
        }
    }

    match view.bank.choose(rng) {
        Some(tile) => Action::Place {
            letter: tile.id(),
            slot: Some(slot),
        },
        None => Action::Skip,
    }
}
