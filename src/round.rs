//! One puzzle round: placement, validation, hints, retries and the dwell
//! windows that follow an outcome.

use alloc::{string::String, vec::Vec};
use core::time::Duration;
use rand::Rng;

use crate::{
    board::Board,
    common::{Phase, PuzzleError, RoundOutcome},
    config::RoundPolicy,
    letter::{LetterId, LetterInstance},
    words::WordEntry,
};

/// What a player action did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStep {
    /// Still active, nothing was validated.
    Continue,
    /// The filled word was wrong; slots were cleared and the round goes on.
    Retry { wrong_attempts: u32, remaining: u32 },
    /// The round locked on an outcome and must dwell for `duration` before
    /// it closes.
    Dwell {
        outcome: RoundOutcome,
        duration: Duration,
    },
    /// The round closed right away.
    Completed(RoundOutcome),
}

/// Read-only snapshot handed to players and renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub hint: String,
    pub phase: Phase,
    pub slots: Vec<Option<LetterInstance>>,
    pub bank: Vec<LetterInstance>,
    pub hints_used: usize,
    pub hint_budget: usize,
    pub wrong_attempts: u32,
    pub max_wrong_attempts: u32,
    /// The answer, only once the round has locked on an outcome.
    pub revealed: Option<String>,
}

impl RoundView {
    pub fn word_len(&self) -> usize {
        self.slots.len()
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn hints_remaining(&self) -> usize {
        self.hint_budget.saturating_sub(self.hints_used)
    }

    /// Every tile of the round, placed or not.
    pub fn all_letters(&self) -> impl Iterator<Item = &LetterInstance> {
        self.bank.iter().chain(self.slots.iter().flatten())
    }
}

/// State machine for a single word.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    entry: WordEntry,
    board: Board,
    policy: RoundPolicy,
    phase: Phase,
    hints_used: usize,
    wrong_attempts: u32,
    evaluations: u32,
    outcome: Option<RoundOutcome>,
}

impl RoundEngine {
    /// Start a round on `entry` with a freshly shuffled bank.
    pub fn new<R: Rng + ?Sized>(entry: WordEntry, policy: RoundPolicy, rng: &mut R) -> Self {
        let board = Board::new(entry.word(), rng);
        log::debug!("round opened: {} letters", entry.len());
        Self {
            entry,
            board,
            policy,
            phase: Phase::Active,
            hints_used: 0,
            wrong_attempts: 0,
            evaluations: 0,
            outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn entry(&self) -> &WordEntry {
        &self.entry
    }

    pub fn hint(&self) -> &str {
        self.entry.hint()
    }

    pub fn policy(&self) -> &RoundPolicy {
        &self.policy
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    pub fn hint_budget(&self) -> usize {
        self.policy.hint_budget(self.entry.len())
    }

    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    /// Times a fully occupied slot array has been checked.
    pub fn evaluations(&self) -> u32 {
        self.evaluations
    }

    /// How the round ended, once it has closed through a skip or a dwell.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    fn ensure_active(&self) -> Result<(), PuzzleError> {
        if self.phase.is_active() {
            Ok(())
        } else {
            Err(PuzzleError::RoundLocked)
        }
    }

    /// Place a bank tile, validating the word when it fills the last slot.
    pub fn place(&mut self, id: LetterId, slot: Option<usize>) -> Result<RoundStep, PuzzleError> {
        self.ensure_active()?;
        self.board.place(id, slot)?;
        Ok(self.after_placement())
    }

    /// Return the tile in `slot` to the bank.
    pub fn remove(&mut self, slot: usize) -> Result<LetterId, PuzzleError> {
        self.ensure_active()?;
        self.board.remove(slot)
    }

    /// Return every placed tile to the bank and re-shuffle it.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PuzzleError> {
        self.ensure_active()?;
        self.board.reset(rng);
        Ok(())
    }

    /// Put the right tile into the lowest empty slot.
    pub fn use_hint(&mut self) -> Result<RoundStep, PuzzleError> {
        self.ensure_active()?;
        if self.hints_used >= self.hint_budget() {
            return Err(PuzzleError::HintExhausted);
        }
        let index = self
            .board
            .slots()
            .first_empty()
            .ok_or(PuzzleError::HintExhausted)?;
        self.board.place_correct(index)?;
        self.hints_used += 1;
        log::debug!("hint {}/{} filled slot {}", self.hints_used, self.hint_budget(), index);
        Ok(self.after_placement())
    }

    /// Give up on the round. Closes immediately, no reveal.
    pub fn skip(&mut self) -> Result<RoundStep, PuzzleError> {
        self.ensure_active()?;
        self.phase = Phase::Closed;
        self.outcome = Some(RoundOutcome::Skipped);
        log::debug!("round skipped");
        Ok(RoundStep::Completed(RoundOutcome::Skipped))
    }

    /// End the dwell window of a locked round and close it.
    pub fn finish_dwell(&mut self) -> Result<RoundOutcome, PuzzleError> {
        let outcome = match self.phase {
            Phase::Success => RoundOutcome::Success,
            Phase::LockedReveal => RoundOutcome::Failed,
            _ => return Err(PuzzleError::InvalidOperation),
        };
        self.phase = Phase::Closed;
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    /// Tear the round down regardless of phase.
    pub fn close(&mut self) {
        self.phase = Phase::Closed;
    }

    fn after_placement(&mut self) -> RoundStep {
        if !self.board.is_full() {
            return RoundStep::Continue;
        }
        self.phase = Phase::Evaluating;
        self.evaluate()
    }

    fn evaluate(&mut self) -> RoundStep {
        self.evaluations += 1;
        if self.board.is_solved() {
            self.phase = Phase::Success;
            log::debug!("word solved after {} wrong attempts", self.wrong_attempts);
            return RoundStep::Dwell {
                outcome: RoundOutcome::Success,
                duration: self.policy.success_dwell(),
            };
        }

        self.wrong_attempts += 1;
        if self.wrong_attempts >= self.policy.max_wrong_attempts {
            self.board.arrange_solution();
            self.phase = Phase::LockedReveal;
            log::debug!("attempt budget spent, revealing answer");
            RoundStep::Dwell {
                outcome: RoundOutcome::Failed,
                duration: self.policy.failure_dwell(),
            }
        } else {
            self.board.clear();
            self.phase = Phase::Active;
            RoundStep::Retry {
                wrong_attempts: self.wrong_attempts,
                remaining: self.policy.max_wrong_attempts - self.wrong_attempts,
            }
        }
    }

    pub fn view(&self) -> RoundView {
        let revealed = match self.phase {
            Phase::Success | Phase::LockedReveal => Some(String::from(self.entry.word())),
            _ => None,
        };
        RoundView {
            hint: String::from(self.entry.hint()),
            phase: self.phase,
            slots: self.board.slots().slots().iter().map(|s| s.occupant()).collect(),
            bank: self.board.bank().letters(),
            hints_used: self.hints_used,
            hint_budget: self.hint_budget(),
            wrong_attempts: self.wrong_attempts,
            max_wrong_attempts: self.policy.max_wrong_attempts,
            revealed,
        }
    }
}
