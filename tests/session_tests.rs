use rand::rngs::SmallRng;
use rand::SeedableRng;
use unscramble::prelude::*;
use unscramble::{parse_entries, SessionState, TimerKind, TimerToken};

fn words(list: &[&str]) -> Vec<WordEntry> {
    parse_entries(list.iter().map(|w| (*w, "clue"))).unwrap()
}

fn ordered() -> GameConfig {
    GameConfig {
        shuffle_words: false,
        ..GameConfig::default()
    }
}

fn start(list: &[&str], config: GameConfig) -> SessionController<SmallRng> {
    let (controller, events) =
        SessionController::start(&words(list), config, SmallRng::seed_from_u64(11)).unwrap();
    let total = list.len().min(config.sample_size);
    assert_eq!(events, vec![SessionEvent::RoundStarted { index: 0, total }]);
    controller
}

/// Spell the current word correctly, returning the events of the last move.
fn solve(controller: &mut SessionController<SmallRng>) -> Vec<SessionEvent> {
    let word = controller.state().words()[controller.round_index()].word().to_string();
    let mut events = Vec::new();
    for (i, c) in word.chars().enumerate() {
        let id = controller.round().unwrap().board().bank().find_char(c).unwrap();
        events = controller.place(id, Some(i)).unwrap();
    }
    events
}

/// Fill the slots with a wrong arrangement (the word's letters rotated).
fn miss(controller: &mut SessionController<SmallRng>) -> Vec<SessionEvent> {
    let word = controller.state().words()[controller.round_index()].word().to_string();
    let mut rotated: Vec<char> = word.chars().collect();
    rotated.rotate_left(1);
    let mut events = Vec::new();
    for (i, c) in rotated.into_iter().enumerate() {
        let id = controller.round().unwrap().board().bank().find_char(c).unwrap();
        events = controller.place(id, Some(i)).unwrap();
    }
    events
}

fn pending_token(controller: &SessionController<SmallRng>) -> TimerToken {
    controller.pending_timer().expect("timer pending").token
}

#[test]
fn test_empty_dataset_is_rejected() {
    let result = SessionController::start(&[], GameConfig::default(), SmallRng::seed_from_u64(1));
    assert!(matches!(result, Err(PuzzleError::InsufficientContent)));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig {
        sample_size: 0,
        ..GameConfig::default()
    };
    let result = SessionController::start(&builtin_words(), config, SmallRng::seed_from_u64(1));
    assert!(matches!(result, Err(PuzzleError::InvalidConfig(_))));
}

#[test]
fn test_draw_is_a_sample_without_replacement() {
    let config = GameConfig {
        sample_size: 3,
        ..GameConfig::default()
    };
    let (controller, _) =
        SessionController::start(&builtin_words(), config, SmallRng::seed_from_u64(5)).unwrap();
    let drawn: Vec<&str> = controller.state().words().iter().map(|w| w.word()).collect();
    assert_eq!(drawn.len(), 3);
    let mut unique = drawn.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 3);
}

#[test]
fn test_small_dataset_uses_every_word() {
    let config = GameConfig {
        sample_size: 10,
        ..GameConfig::default()
    };
    let (controller, _) =
        SessionController::start(&builtin_words(), config, SmallRng::seed_from_u64(5)).unwrap();
    assert_eq!(controller.total_rounds(), 5);
}

#[test]
fn test_solve_awards_once_after_dwell() {
    let mut controller = start(&["CAT", "DOG"], ordered());
    let events = solve(&mut controller);

    assert_eq!(
        events[0],
        SessionEvent::Locked {
            index: 0,
            outcome: RoundOutcome::Success,
            answer: "CAT".to_string()
        }
    );
    assert!(matches!(
        events[1],
        SessionEvent::TimerScheduled(t) if t.kind == TimerKind::Dwell
    ));
    assert_eq!(controller.score(), 0, "points land when the dwell ends");
    assert_eq!(controller.round().unwrap().phase(), Phase::Success);

    let token = pending_token(&controller);
    let events = controller.timer_elapsed(token);
    assert_eq!(
        events,
        vec![
            SessionEvent::RoundComplete {
                index: 0,
                outcome: RoundOutcome::Success,
                score_delta: 10
            },
            SessionEvent::RoundStarted { index: 1, total: 2 },
        ]
    );
    assert_eq!(controller.score(), 10);

    // Delivering the same token again changes nothing.
    assert!(controller.timer_elapsed(token).is_empty());
    assert_eq!(controller.score(), 10);
    assert_eq!(controller.round_index(), 1);
}

#[test]
fn test_failed_round_reveals_and_advances_without_points() {
    let mut controller = start(&["CAT", "DOG"], ordered());
    let events = miss(&mut controller);
    assert_eq!(
        events,
        vec![SessionEvent::Retry {
            index: 0,
            wrong_attempts: 1,
            remaining: 1
        }]
    );

    let events = miss(&mut controller);
    assert_eq!(
        events[0],
        SessionEvent::Locked {
            index: 0,
            outcome: RoundOutcome::Failed,
            answer: "CAT".to_string()
        }
    );
    assert_eq!(controller.round().unwrap().phase(), Phase::LockedReveal);

    let id = controller.round().unwrap().board().slots().get(0).unwrap().occupant().unwrap().id();
    assert_eq!(controller.place(id, Some(1)), Err(PuzzleError::RoundLocked));

    let events = controller.timer_elapsed(pending_token(&controller));
    assert_eq!(
        events[0],
        SessionEvent::RoundComplete {
            index: 0,
            outcome: RoundOutcome::Failed,
            score_delta: 0
        }
    );
    assert_eq!(controller.score(), 0);
    assert!(controller.state().skipped_or_failed().contains(&0));
}

#[test]
fn test_zero_dwell_resolves_immediately() {
    let mut controller = start(&["CAT"], ordered().without_delays());
    let events = solve(&mut controller);
    assert_eq!(
        events,
        vec![
            SessionEvent::Locked {
                index: 0,
                outcome: RoundOutcome::Success,
                answer: "CAT".to_string()
            },
            SessionEvent::RoundComplete {
                index: 0,
                outcome: RoundOutcome::Success,
                score_delta: 10
            },
            SessionEvent::SessionComplete { final_score: 10 },
        ]
    );
    assert!(controller.is_complete());
    assert!(controller.pending_timer().is_none());
    assert!(controller.round().is_none());
}

#[test]
fn test_skip_waits_before_next_round() {
    let mut controller = start(&["CAT", "DOG"], ordered());
    let events = controller.skip().unwrap();
    assert_eq!(
        events[0],
        SessionEvent::RoundComplete {
            index: 0,
            outcome: RoundOutcome::Skipped,
            score_delta: 0
        }
    );
    let timer = controller.pending_timer().unwrap();
    assert_eq!(timer.kind, TimerKind::Advance);
    assert_eq!(timer.delay, ordered().round.skip_delay());
    assert_eq!(controller.skip(), Err(PuzzleError::RoundLocked));

    let events = controller.timer_elapsed(timer.token);
    assert_eq!(events, vec![SessionEvent::RoundStarted { index: 1, total: 2 }]);
    assert_eq!(controller.summary().skipped, 1);
}

#[test]
fn test_advance_after_skip_cancels_pending_timer() {
    let mut controller = start(&["CAT", "DOG"], ordered());
    controller.skip().unwrap();
    let token = pending_token(&controller);

    let events = controller.advance().unwrap();
    assert_eq!(events, vec![SessionEvent::RoundStarted { index: 1, total: 2 }]);
    assert!(controller.pending_timer().is_none());
    assert!(controller.timer_elapsed(token).is_empty());
    assert_eq!(controller.round_index(), 1);
}

#[test]
fn test_advance_after_skip_keeps_round_skipped() {
    let mut controller = start(&["CAT", "DOG"], ordered());
    let mut events = controller.skip().unwrap();
    events.extend(controller.advance().unwrap());

    let completions: Vec<&SessionEvent> = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::RoundComplete { index: 0, .. }))
        .collect();
    assert_eq!(
        completions,
        vec![&SessionEvent::RoundComplete {
            index: 0,
            outcome: RoundOutcome::Skipped,
            score_delta: 0
        }]
    );
    assert_eq!(controller.score(), 0);
    assert!(controller.state().solved().is_empty());
    assert!(controller.state().skipped_or_failed().contains(&0));
}

#[test]
fn test_advance_cuts_dwell_short_and_scores_once() {
    let mut controller = start(&["CAT", "DOG"], ordered());
    solve(&mut controller);
    let token = pending_token(&controller);

    let events = controller.advance().unwrap();
    assert_eq!(
        events,
        vec![
            SessionEvent::RoundComplete {
                index: 0,
                outcome: RoundOutcome::Success,
                score_delta: 10
            },
            SessionEvent::RoundStarted { index: 1, total: 2 },
        ]
    );
    assert!(controller.timer_elapsed(token).is_empty());
    assert_eq!(controller.score(), 10);
}

#[test]
fn test_advance_requires_an_outcome() {
    let mut controller = start(&["CAT", "DOG"], ordered());
    assert_eq!(controller.advance(), Err(PuzzleError::InvalidOperation));
    assert_eq!(controller.round_index(), 0);
}

#[test]
fn test_previous_rules() {
    let mut controller = start(&["CAT", "DOG", "OWL"], ordered());
    assert_eq!(controller.previous(), Err(PuzzleError::InvalidOperation), "already on the first round");

    solve(&mut controller);
    assert_eq!(controller.previous(), Err(PuzzleError::InvalidOperation), "solved round cannot go back");
    controller.timer_elapsed(pending_token(&controller));

    // Round 1 locks on a failure; going back cancels its dwell.
    miss(&mut controller);
    miss(&mut controller);
    let stale = pending_token(&controller);
    let events = controller.previous().unwrap();
    assert_eq!(
        events,
        vec![
            SessionEvent::RoundComplete {
                index: 1,
                outcome: RoundOutcome::Failed,
                score_delta: 0
            },
            SessionEvent::RoundStarted { index: 0, total: 3 },
        ]
    );
    assert!(controller.state().skipped_or_failed().contains(&1));
    assert!(controller.pending_timer().is_none());
    assert!(controller.timer_elapsed(stale).is_empty());
    assert_eq!(controller.round().unwrap().phase(), Phase::Active);
    assert_eq!(controller.round().unwrap().board().slots().occupied(), 0);
}

#[test]
fn test_revisited_solved_round_scores_nothing() {
    let mut controller = start(&["CAT", "DOG"], ordered().without_delays());
    solve(&mut controller);
    assert_eq!(controller.score(), 10);

    controller.previous().unwrap();
    let events = solve(&mut controller);
    assert!(events.contains(&SessionEvent::RoundComplete {
        index: 0,
        outcome: RoundOutcome::Success,
        score_delta: 0
    }));
    assert_eq!(controller.score(), 10);
    assert_eq!(controller.round_index(), 1);
}

#[test]
fn test_later_success_supersedes_skip() {
    let mut state = SessionState::new(words(&["CAT", "DOG"]));
    assert_eq!(state.record_outcome(0, RoundOutcome::Skipped, 10), 0);
    assert_eq!(state.record_outcome(0, RoundOutcome::Success, 10), 10);
    assert_eq!(state.record_outcome(0, RoundOutcome::Failed, 10), 0);
    assert_eq!(state.outcome(0), Some(RoundOutcome::Success));
    assert!(state.skipped_or_failed().is_empty());
    assert_eq!(state.score(), 10);
}

#[test]
fn test_end_cancels_timer_and_blocks_play() {
    let mut controller = start(&["CAT", "DOG"], ordered());
    solve(&mut controller);
    let token = pending_token(&controller);

    let summary = controller.end();
    assert_eq!(summary.final_score, 0);
    assert_eq!(summary.shown, 0);
    assert!(controller.is_complete());
    assert!(controller.pending_timer().is_none());
    assert!(controller.timer_elapsed(token).is_empty());
    assert_eq!(controller.use_hint(), Err(PuzzleError::InvalidOperation));
    assert_eq!(controller.reset(), Err(PuzzleError::InvalidOperation));
}

#[test]
fn test_reset_follows_round_lock() {
    let mut controller = start(&["CAT", "DOG"], ordered());
    controller.skip().unwrap();
    assert_eq!(controller.reset(), Err(PuzzleError::RoundLocked));

    let mut controller = start(&["CAT", "DOG"], ordered());
    let id = controller.round().unwrap().board().bank().find_char('A').unwrap();
    controller.place(id, Some(0)).unwrap();
    assert_eq!(controller.reset(), Ok(Vec::new()));
    assert_eq!(controller.round().unwrap().board().slots().occupied(), 0);
}

#[test]
fn test_restart_clears_score_and_index() {
    let mut controller = start(&["CAT", "DOG"], ordered().without_delays());
    solve(&mut controller);
    solve(&mut controller);
    assert!(controller.is_complete());
    assert_eq!(controller.summary().final_score, 20);

    let events = controller.restart();
    assert_eq!(events, vec![SessionEvent::RoundStarted { index: 0, total: 2 }]);
    assert_eq!(controller.score(), 0);
    assert_eq!(controller.round_index(), 0);
    assert!(!controller.is_complete());
    assert!(controller.state().solved().is_empty());
}

#[test]
fn test_summary_counts_outcomes() {
    let mut controller = start(&["CAT", "DOG", "OWL"], ordered().without_delays());
    solve(&mut controller);
    controller.skip().unwrap();
    miss(&mut controller);
    miss(&mut controller);

    let summary = controller.summary();
    assert!(controller.is_complete());
    assert_eq!(summary.final_score, 10);
    assert_eq!(summary.rounds, 3);
    assert_eq!(summary.shown, 3);
    assert_eq!((summary.solved, summary.failed, summary.skipped), (1, 1, 1));
    assert_eq!(summary.rating.stars, 1);
}
