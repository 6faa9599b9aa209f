#![cfg(feature = "std")]

use std::sync::Arc;

use rand::rngs::SmallRng;
use tokio::sync::watch;
use tokio::time::{sleep_until, Instant};

use crate::{
    common::{PuzzleError, RoundOutcome},
    player::{Action, Player},
    round::RoundView,
    session::{SessionController, SessionEvent, SessionSummary},
    timer::TimerToken,
};

/// Upper bound on player actions per session, so a confused player cannot
/// spin forever.
pub const DEFAULT_ACTION_LIMIT: usize = 10_000;

/// Callbacks for the surrounding application. All methods default to no-ops.
pub trait SessionListener: Send {
    fn on_round_started(&mut self, _index: usize, _total: usize, _view: &RoundView) {}

    /// Called before the player is asked for each action.
    fn on_turn(&mut self, _index: usize, _total: usize, _view: &RoundView) {}

    fn on_retry(&mut self, _wrong_attempts: u32, _remaining: u32) {}

    /// The round locked on `outcome`; `answer` is the target word.
    fn on_locked(&mut self, _outcome: RoundOutcome, _answer: &str) {}

    fn on_round_complete(&mut self, _outcome: RoundOutcome, _score_delta: u32) {}

    fn on_session_complete(&mut self, _summary: &SessionSummary) {}

    fn on_rejected(&mut self, _action: Action, _error: PuzzleError) {}
}

/// Listener that ignores everything.
pub struct NullListener;

impl SessionListener for NullListener {}

/// Tears a running session down from another task.
#[derive(Clone)]
pub struct ShutdownHandle(Arc<watch::Sender<bool>>);

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.0.send_replace(true);
    }
}

enum Wake {
    Timer(TimerToken),
    Action(Action),
    Shutdown,
}

/// Drives a session: asks the player for actions, waits out dwell windows
/// and reports everything to the listener.
pub struct SessionRunner {
    player: Box<dyn Player>,
    controller: SessionController<SmallRng>,
    listener: Box<dyn SessionListener>,
    shutdown_tx: Arc<watch::Sender<bool>>,
    shutdown_rx: watch::Receiver<bool>,
    action_limit: usize,
    actions: usize,
}

impl SessionRunner {
    pub fn new(
        player: Box<dyn Player>,
        controller: SessionController<SmallRng>,
        listener: Box<dyn SessionListener>,
    ) -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            player,
            controller,
            listener,
            shutdown_tx: Arc::new(tx),
            shutdown_rx: rx,
            action_limit: DEFAULT_ACTION_LIMIT,
            actions: 0,
        }
    }

    pub fn with_action_limit(mut self, limit: usize) -> Self {
        self.action_limit = limit;
        self
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(self.shutdown_tx.clone())
    }

    pub fn controller(&self) -> &SessionController<SmallRng> {
        &self.controller
    }

    /// Number of actions the player has taken.
    pub fn action_count(&self) -> usize {
        self.actions
    }

    /// Announce the rounds opened by `start` before running.
    pub fn dispatch_initial(&mut self, events: Vec<SessionEvent>) {
        self.dispatch(events);
    }

    /// Play until the session completes, the player quits or shutdown is
    /// requested.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<SessionSummary> {
        let mut deadline: Option<(TimerToken, Instant)> = None;

        while !self.controller.is_complete() {
            if *self.shutdown_rx.borrow() {
                return Ok(self.abandon());
            }

            let wake = if let Some(timer) = self.controller.pending_timer() {
                let at = match deadline {
                    Some((token, at)) if token == timer.token => at,
                    _ => {
                        let at = Instant::now() + timer.delay;
                        deadline = Some((timer.token, at));
                        at
                    }
                };
                tokio::select! {
                    _ = sleep_until(at) => Wake::Timer(timer.token),
                    _ = self.shutdown_rx.changed() => Wake::Shutdown,
                }
            } else {
                let view = self
                    .controller
                    .view()
                    .ok_or_else(|| anyhow::anyhow!("session has no live round"))?;
                if !view.phase.is_active() {
                    return Err(anyhow::anyhow!(
                        "round {} is {:?} with no pending timer",
                        self.controller.round_index() + 1,
                        view.phase
                    ));
                }
                self.listener
                    .on_turn(self.controller.round_index(), self.controller.total_rounds(), &view);
                tokio::select! {
                    action = self.player.next_action(rng, &view) => Wake::Action(action?),
                    _ = self.shutdown_rx.changed() => Wake::Shutdown,
                }
            };

            match wake {
                Wake::Timer(token) => {
                    deadline = None;
                    let events = self.controller.timer_elapsed(token);
                    self.dispatch(events);
                }
                Wake::Action(Action::Quit) => return Ok(self.abandon()),
                Wake::Action(action) => {
                    self.actions += 1;
                    if self.actions > self.action_limit {
                        self.abandon();
                        return Err(anyhow::anyhow!(
                            "player exceeded {} actions without finishing",
                            self.action_limit
                        ));
                    }
                    self.perform(action);
                }
                Wake::Shutdown => return Ok(self.abandon()),
            }
        }
        Ok(self.controller.summary())
    }

    fn perform(&mut self, action: Action) {
        let result = match action {
            Action::Place { letter, slot } => self.controller.place(letter, slot),
            Action::Remove { slot } => self.controller.remove(slot),
            Action::Reset => self.controller.reset(),
            Action::Hint => self.controller.use_hint(),
            Action::Skip => self.controller.skip(),
            Action::Previous => self.controller.previous(),
            Action::Quit => return,
        };
        match result {
            Ok(events) => self.dispatch(events),
            Err(e) => {
                log::debug!("rejected {:?}: {}", action, e);
                self.listener.on_rejected(action, e);
                self.player.handle_rejection(action, e);
            }
        }
    }

    fn abandon(&mut self) -> SessionSummary {
        let summary = self.controller.end();
        self.listener.on_session_complete(&summary);
        summary
    }

    fn dispatch(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::RoundStarted { index, total } => {
                    if let Some(view) = self.controller.view() {
                        self.listener.on_round_started(index, total, &view);
                    }
                }
                SessionEvent::Retry {
                    wrong_attempts,
                    remaining,
                    ..
                } => self.listener.on_retry(wrong_attempts, remaining),
                SessionEvent::Locked {
                    outcome, answer, ..
                } => self.listener.on_locked(outcome, &answer),
                SessionEvent::TimerScheduled(_) => {}
                SessionEvent::RoundComplete {
                    outcome,
                    score_delta,
                    ..
                } => self.listener.on_round_complete(outcome, score_delta),
                SessionEvent::SessionComplete { .. } => {
                    let summary = self.controller.summary();
                    self.listener.on_session_complete(&summary);
                }
            }
        }
    }
}
