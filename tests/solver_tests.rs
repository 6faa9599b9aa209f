use rand::rngs::SmallRng;
use rand::SeedableRng;
use unscramble::solver::{anagram_candidates, choose_action};
use unscramble::{Action, RoundEngine, RoundPolicy, RoundStep, WordEntry};

fn lexicon(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_anagram_candidates_match_multiset() {
    let lex = lexicon(&["LISTEN", "SILENT", "ENLIST", "TINSEL", "LIST"]);
    let tiles: Vec<char> = "TENSIL".chars().collect();
    assert_eq!(anagram_candidates(&lex, &tiles), ["LISTEN", "SILENT", "ENLIST", "TINSEL"]);
    assert!(anagram_candidates(&lex, &['Q']).is_empty());
}

#[test]
fn test_skilled_choice_spells_the_word() {
    let lex = lexicon(&["SAVINGS"]);
    let mut rng = SmallRng::seed_from_u64(21);
    let mut round = RoundEngine::new(WordEntry::new("SAVINGS", "").unwrap(), RoundPolicy::default(), &mut rng);

    let mut last = RoundStep::Continue;
    for _ in 0..7 {
        let action = choose_action(&lex, &round.view(), 1.0, &mut rng);
        let Action::Place { letter, slot } = action else {
            panic!("expected a placement, got {:?}", action);
        };
        last = round.place(letter, slot).unwrap();
    }
    assert!(matches!(last, RoundStep::Dwell { .. }));
    assert!(round.board().is_solved());
}

#[test]
fn test_unknown_word_spends_hint() {
    let mut rng = SmallRng::seed_from_u64(1);
    let round = RoundEngine::new(WordEntry::new("OWL", "").unwrap(), RoundPolicy::default(), &mut rng);
    assert_eq!(choose_action(&[], &round.view(), 1.0, &mut rng), Action::Hint);
}
