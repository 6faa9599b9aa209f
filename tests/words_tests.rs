use unscramble::{
    builtin_words, parse_entries, GameConfig, PuzzleError, Rating, RoundPolicy, Tier, WordEntry,
};

#[test]
fn test_word_entry_normalizes() {
    let entry = WordEntry::new("  savings ", " Money set aside ").unwrap();
    assert_eq!(entry.word(), "SAVINGS");
    assert_eq!(entry.hint(), "Money set aside");
    assert_eq!(entry.len(), 7);
}

#[test]
fn test_word_entry_rejects_non_letters() {
    assert_eq!(WordEntry::new("", "x"), Err(PuzzleError::InvalidWord));
    assert_eq!(WordEntry::new("two words", "x"), Err(PuzzleError::InvalidWord));
    assert_eq!(WordEntry::new("R2D2", "x"), Err(PuzzleError::InvalidWord));
    assert_eq!(WordEntry::new("CAFÉ", "x"), Err(PuzzleError::InvalidWord));
}

#[test]
fn test_builtin_list() {
    let words = builtin_words();
    let names: Vec<&str> = words.iter().map(WordEntry::word).collect();
    assert_eq!(names, ["INSURANCE", "PREMIUM", "SAVINGS", "INVESTMENT", "RETIREMENT"]);
    assert!(words.iter().all(|w| !w.hint().is_empty()));
}

#[test]
fn test_parse_entries_fails_on_first_bad_word() {
    assert!(parse_entries([("cat", "a"), ("dog", "b")]).is_ok());
    assert_eq!(parse_entries([("cat", "a"), ("d0g", "b")]), Err(PuzzleError::InvalidWord));
}

#[cfg(feature = "std")]
#[test]
fn test_load_word_list_from_json() {
    let path = std::env::temp_dir().join(format!("unscramble-words-{}.json", std::process::id()));
    std::fs::write(&path, r#"[{"word": "owl", "hint": "Night bird"}, {"word": "Fox", "hint": "Sly"}]"#).unwrap();
    let words = unscramble::load_word_list(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(words.len(), 2);
    assert_eq!(words[1].word(), "FOX");
}

#[cfg(feature = "std")]
#[test]
fn test_config_from_json_keeps_defaults() {
    let path = std::env::temp_dir().join(format!("unscramble-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"success_award": 25, "round": {"max_hints": 1}}"#).unwrap();
    let config = GameConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(config.success_award, 25);
    assert_eq!(config.round.max_hints, 1);
    assert_eq!(config.round.max_wrong_attempts, RoundPolicy::default().max_wrong_attempts);
    assert_eq!(config.sample_size, GameConfig::default().sample_size);
}

#[test]
fn test_config_validation() {
    let bad = GameConfig {
        round: RoundPolicy {
            max_wrong_attempts: 0,
            ..RoundPolicy::default()
        },
        ..GameConfig::default()
    };
    assert!(matches!(bad.validate(), Err(PuzzleError::InvalidConfig(_))));
    assert!(GameConfig::default().validate().is_ok());

    let fast = GameConfig::default().without_delays();
    assert!(fast.round.success_dwell().is_zero());
    assert!(fast.round.skip_delay().is_zero());
}

#[test]
fn test_rating_scale() {
    assert_eq!(Rating::from_score(0, 10), Rating { stars: 1, tier: Tier::NeedsWork });
    assert_eq!(Rating::from_score(30, 10).tier, Tier::Good);
    assert_eq!(Rating::from_score(35, 10).stars, 4, "half rounds up");
    assert_eq!(Rating::from_score(40, 10).tier, Tier::GoodJob);
    assert_eq!(Rating::from_score(50, 10), Rating { stars: 5, tier: Tier::Excellent });
    assert_eq!(Rating::from_score(500, 10).stars, 5);
    assert_eq!(Rating::from_score(4, 0).stars, 4, "small scores are stars already");
    assert_eq!(Tier::Excellent.headline(), "Excellent");
}
