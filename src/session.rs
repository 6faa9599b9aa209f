//! A play-through: word draw, round sequencing, scoring and the timers
//! between rounds.

use alloc::{
    collections::{BTreeMap, BTreeSet},
    string::String,
    vec::Vec,
};
use rand::{seq::SliceRandom, Rng};

use crate::{
    common::{Phase, PuzzleError, RoundOutcome},
    config::GameConfig,
    letter::LetterId,
    rating::Rating,
    round::{RoundEngine, RoundStep, RoundView},
    timer::{ScheduledTimer, TimerKind, TimerToken},
    words::WordEntry,
};

#[cfg(feature = "std")]
use serde::Serialize;

/// Notifications produced by session operations, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    RoundStarted { index: usize, total: usize },
    /// Wrong word; the slots were cleared and the player may try again.
    Retry {
        index: usize,
        wrong_attempts: u32,
        remaining: u32,
    },
    /// The round locked on an outcome and its dwell window started.
    Locked {
        index: usize,
        outcome: RoundOutcome,
        answer: String,
    },
    TimerScheduled(ScheduledTimer),
    RoundComplete {
        index: usize,
        outcome: RoundOutcome,
        score_delta: u32,
    },
    SessionComplete { final_score: u32 },
}

/// Scoreboard of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    words: Vec<WordEntry>,
    round_index: usize,
    score: u32,
    solved: BTreeSet<usize>,
    skipped_or_failed: BTreeSet<usize>,
    outcomes: BTreeMap<usize, RoundOutcome>,
}

impl SessionState {
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self {
            words,
            ..Self::default()
        }
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn solved(&self) -> &BTreeSet<usize> {
        &self.solved
    }

    pub fn skipped_or_failed(&self) -> &BTreeSet<usize> {
        &self.skipped_or_failed
    }

    pub fn outcome(&self, index: usize) -> Option<RoundOutcome> {
        self.outcomes.get(&index).copied()
    }

    /// Apply the scoring policy for round `index` and return the points
    /// added. A round index earns `award` at most once; a later solve
    /// supersedes an earlier skip or failure, never the other way round.
    pub fn record_outcome(&mut self, index: usize, outcome: RoundOutcome, award: u32) -> u32 {
        if self.solved.contains(&index) {
            return 0;
        }
        self.outcomes.insert(index, outcome);
        match outcome {
            RoundOutcome::Success => {
                self.solved.insert(index);
                self.skipped_or_failed.remove(&index);
                self.score += award;
                award
            }
            RoundOutcome::Failed | RoundOutcome::Skipped => {
                self.skipped_or_failed.insert(index);
                0
            }
        }
    }

    pub fn summary(&self, award: u32) -> SessionSummary {
        let count = |o: RoundOutcome| self.outcomes.values().filter(|&&v| v == o).count();
        SessionSummary {
            final_score: self.score,
            rounds: self.words.len(),
            shown: self.outcomes.len(),
            solved: count(RoundOutcome::Success),
            failed: count(RoundOutcome::Failed),
            skipped: count(RoundOutcome::Skipped),
            rating: Rating::from_score(self.score, award),
        }
    }
}

/// Final tally reported to the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize))]
pub struct SessionSummary {
    pub final_score: u32,
    /// Rounds drawn for the session.
    pub rounds: usize,
    /// Rounds that reached an outcome.
    pub shown: usize,
    pub solved: usize,
    pub failed: usize,
    pub skipped: usize,
    pub rating: Rating,
}

/// Owns the session state, the single live round and at most one pending
/// timer.
#[derive(Debug)]
pub struct SessionController<R: Rng> {
    dataset: Vec<WordEntry>,
    config: GameConfig,
    rng: R,
    state: SessionState,
    round: Option<RoundEngine>,
    pending: Option<ScheduledTimer>,
    next_token: u64,
    finished: bool,
    /// The live round's outcome has reached the scoreboard.
    recorded: bool,
}

fn draw_words<R: Rng + ?Sized>(dataset: &[WordEntry], config: &GameConfig, rng: &mut R) -> Vec<WordEntry> {
    let mut words = dataset.to_vec();
    if config.shuffle_words {
        words.shuffle(rng);
    }
    words.truncate(config.sample_size);
    words
}

impl<R: Rng> SessionController<R> {
    /// Draw the session's words and open the first round.
    pub fn start(
        words: &[WordEntry],
        config: GameConfig,
        mut rng: R,
    ) -> Result<(Self, Vec<SessionEvent>), PuzzleError> {
        if words.is_empty() {
            return Err(PuzzleError::InsufficientContent);
        }
        config.validate()?;
        let drawn = draw_words(words, &config, &mut rng);
        let mut controller = Self {
            dataset: words.to_vec(),
            config,
            rng,
            state: SessionState::new(drawn),
            round: None,
            pending: None,
            next_token: 0,
            finished: false,
            recorded: false,
        };
        let mut events = Vec::new();
        controller.open_round(0, &mut events);
        log::info!("session started with {} rounds", controller.state.words.len());
        Ok((controller, events))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> Option<&RoundEngine> {
        self.round.as_ref()
    }

    pub fn view(&self) -> Option<RoundView> {
        self.round.as_ref().map(RoundEngine::view)
    }

    pub fn pending_timer(&self) -> Option<ScheduledTimer> {
        self.pending
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn round_index(&self) -> usize {
        self.state.round_index
    }

    pub fn total_rounds(&self) -> usize {
        self.state.words.len()
    }

    pub fn is_complete(&self) -> bool {
        self.finished
    }

    pub fn summary(&self) -> SessionSummary {
        self.state.summary(self.config.success_award)
    }

    fn live_round_and_rng(&mut self) -> Result<(&mut RoundEngine, &mut R), PuzzleError> {
        if self.finished {
            return Err(PuzzleError::InvalidOperation);
        }
        let round = self.round.as_mut().ok_or(PuzzleError::InvalidOperation)?;
        Ok((round, &mut self.rng))
    }

    fn live_round(&mut self) -> Result<&mut RoundEngine, PuzzleError> {
        self.live_round_and_rng().map(|(round, _)| round)
    }

    pub fn place(&mut self, id: LetterId, slot: Option<usize>) -> Result<Vec<SessionEvent>, PuzzleError> {
        let step = self.live_round()?.place(id, slot)?;
        Ok(self.apply_step(step))
    }

    pub fn remove(&mut self, slot: usize) -> Result<Vec<SessionEvent>, PuzzleError> {
        self.live_round()?.remove(slot)?;
        Ok(Vec::new())
    }

    pub fn reset(&mut self) -> Result<Vec<SessionEvent>, PuzzleError> {
        let (round, rng) = self.live_round_and_rng()?;
        round.reset(rng)?;
        Ok(Vec::new())
    }

    pub fn use_hint(&mut self) -> Result<Vec<SessionEvent>, PuzzleError> {
        let step = self.live_round()?.use_hint()?;
        Ok(self.apply_step(step))
    }

    pub fn skip(&mut self) -> Result<Vec<SessionEvent>, PuzzleError> {
        let step = self.live_round()?.skip()?;
        Ok(self.apply_step(step))
    }

    /// Re-open the previous round with a fresh bank. Not allowed once the
    /// current round has been solved. A round left during its reveal is
    /// recorded as failed first.
    pub fn previous(&mut self) -> Result<Vec<SessionEvent>, PuzzleError> {
        let index = self.state.round_index;
        let round = self.live_round()?;
        if round.phase() == Phase::Success || index == 0 {
            return Err(PuzzleError::InvalidOperation);
        }
        let revealed = if round.phase() == Phase::LockedReveal {
            Some(round.finish_dwell()?)
        } else {
            None
        };
        round.close();
        self.cancel_pending();
        let mut events = Vec::new();
        if let Some(outcome) = revealed {
            self.complete_round(outcome, &mut events);
        }
        self.open_round(index - 1, &mut events);
        Ok(events)
    }

    /// Move past the current round once it has an outcome, cutting any
    /// dwell or skip delay short. The outcome is the round's own and is
    /// recorded at most once.
    pub fn advance(&mut self) -> Result<Vec<SessionEvent>, PuzzleError> {
        let round = self.live_round()?;
        let outcome = match round.phase() {
            Phase::Success | Phase::LockedReveal => round.finish_dwell()?,
            Phase::Closed => round.outcome().ok_or(PuzzleError::InvalidOperation)?,
            _ => return Err(PuzzleError::InvalidOperation),
        };
        self.cancel_pending();
        let mut events = Vec::new();
        if !self.recorded {
            self.complete_round(outcome, &mut events);
        }
        self.move_next(&mut events);
        Ok(events)
    }

    /// Deliver an expired timer. Tokens that are not the pending one were
    /// cancelled and are ignored.
    pub fn timer_elapsed(&mut self, token: TimerToken) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let timer = match self.pending {
            Some(t) if t.token == token => t,
            _ => {
                log::warn!("ignoring stale {}", token);
                return events;
            }
        };
        self.pending = None;
        match timer.kind {
            TimerKind::Dwell => {
                let finished = self.round.as_mut().map(RoundEngine::finish_dwell);
                if let Some(Ok(outcome)) = finished {
                    self.complete_round(outcome, &mut events);
                    self.move_next(&mut events);
                }
            }
            TimerKind::Advance => self.move_next(&mut events),
        }
        events
    }

    /// Abandon the session. Any pending timer is cancelled and the live
    /// round is dropped.
    pub fn end(&mut self) -> SessionSummary {
        self.cancel_pending();
        if let Some(mut round) = self.round.take() {
            round.close();
        }
        self.finished = true;
        log::info!("session ended with score {}", self.state.score);
        self.summary()
    }

    /// Start over: score and round index back to zero, fresh word draw.
    pub fn restart(&mut self) -> Vec<SessionEvent> {
        self.cancel_pending();
        let drawn = draw_words(&self.dataset, &self.config, &mut self.rng);
        self.state = SessionState::new(drawn);
        self.finished = false;
        let mut events = Vec::new();
        self.open_round(0, &mut events);
        events
    }

    fn open_round(&mut self, index: usize, events: &mut Vec<SessionEvent>) {
        self.state.round_index = index;
        self.recorded = false;
        let entry = self.state.words[index].clone();
        self.round = Some(RoundEngine::new(entry, self.config.round, &mut self.rng));
        events.push(SessionEvent::RoundStarted {
            index,
            total: self.state.words.len(),
        });
    }

    fn apply_step(&mut self, step: RoundStep) -> Vec<SessionEvent> {
        let index = self.state.round_index;
        let mut events = Vec::new();
        match step {
            RoundStep::Continue => {}
            RoundStep::Retry {
                wrong_attempts,
                remaining,
            } => events.push(SessionEvent::Retry {
                index,
                wrong_attempts,
                remaining,
            }),
            RoundStep::Dwell { outcome, duration } => {
                let answer = self
                    .round
                    .as_ref()
                    .map(|r| String::from(r.entry().word()))
                    .unwrap_or_default();
                events.push(SessionEvent::Locked {
                    index,
                    outcome,
                    answer,
                });
                if duration.is_zero() {
                    if let Some(Ok(outcome)) = self.round.as_mut().map(RoundEngine::finish_dwell) {
                        self.complete_round(outcome, &mut events);
                        self.move_next(&mut events);
                    }
                } else {
                    self.schedule(TimerKind::Dwell, duration, &mut events);
                }
            }
            RoundStep::Completed(outcome) => {
                self.complete_round(outcome, &mut events);
                let delay = self.config.round.skip_delay();
                if delay.is_zero() {
                    self.move_next(&mut events);
                } else {
                    self.schedule(TimerKind::Advance, delay, &mut events);
                }
            }
        }
        events
    }

    fn complete_round(&mut self, outcome: RoundOutcome, events: &mut Vec<SessionEvent>) {
        let index = self.state.round_index;
        self.recorded = true;
        let score_delta = self
            .state
            .record_outcome(index, outcome, self.config.success_award);
        log::info!(
            "round {} complete: {:?}, +{} (score {})",
            index + 1,
            outcome,
            score_delta,
            self.state.score
        );
        events.push(SessionEvent::RoundComplete {
            index,
            outcome,
            score_delta,
        });
    }

    fn move_next(&mut self, events: &mut Vec<SessionEvent>) {
        let next = self.state.round_index + 1;
        if next >= self.state.words.len() {
            self.round = None;
            self.finished = true;
            log::info!("session complete, final score {}", self.state.score);
            events.push(SessionEvent::SessionComplete {
                final_score: self.state.score,
            });
        } else {
            self.open_round(next, events);
        }
    }

    fn schedule(&mut self, kind: TimerKind, delay: core::time::Duration, events: &mut Vec<SessionEvent>) {
        self.next_token += 1;
        let timer = ScheduledTimer {
            token: TimerToken::new(self.next_token),
            delay,
            kind,
        };
        log::debug!("scheduled {} ({:?}) in {:?}", timer.token, kind, delay);
        self.pending = Some(timer);
        events.push(SessionEvent::TimerScheduled(timer));
    }

    fn cancel_pending(&mut self) {
        if let Some(timer) = self.pending.take() {
            log::debug!("cancelled {}", timer.token);
        }
    }
}
