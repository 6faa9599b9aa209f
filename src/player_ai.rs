#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::{
    player::{Action, Player},
    round::RoundView,
    solver,
    words::WordEntry,
};

/// Computer player that solves anagrams against a known lexicon and slips
/// up at a configurable rate.
pub struct AiPlayer {
    lexicon: Vec<String>,
    skill: f64,
}

impl AiPlayer {
    /// `skill` is the chance of playing the right tile on each move.
    pub fn new(lexicon: Vec<String>, skill: f64) -> Self {
        Self { lexicon, skill }
    }

    pub fn from_entries(entries: &[WordEntry], skill: f64) -> Self {
        Self::new(entries.iter().map(|e| e.word().to_string()).collect(), skill)
    }

    pub fn skill(&self) -> f64 {
        self.skill
    }
}

#[async_trait::async_trait]
impl Player for AiPlayer {
    async fn next_action(&mut self, rng: &mut SmallRng, view: &RoundView) -> anyhow::Result<Action> {
        Ok(solver::choose_action(&self.lexicon, view, self.skill, rng))
    }
}
