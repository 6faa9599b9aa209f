use crate::letter::LetterId;

#[cfg(feature = "std")]
use crate::{common::PuzzleError, round::RoundView};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;

/// A single player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move a bank tile into `slot`, or the lowest empty slot.
    Place { letter: LetterId, slot: Option<usize> },
    /// Send the tile in `slot` back to the bank.
    Remove { slot: usize },
    Reset,
    Hint,
    Skip,
    /// Go back to the previous round.
    Previous,
    /// Abandon the session.
    Quit,
}

/// Interface implemented by different player types.
#[cfg(feature = "std")]
#[async_trait::async_trait]
pub trait Player: Send {
    /// Choose the next action for an active round.
    async fn next_action(&mut self, rng: &mut SmallRng, view: &RoundView) -> anyhow::Result<Action>;

    /// Inform the player that an action was refused.
    fn handle_rejection(&mut self, _action: Action, _error: PuzzleError) {}
}
