//! Property-style tests for letter classification.
//!
//! Checks the classifier against:
//! - Output length and order
//! - Exact matches
//! - Set membership for words without repeated letters
//! - Duplicate-letter multiplicity caps

use letters_in_squares::wordle::{classify, score, ClassifyError, LetterState};
use LetterState::*;

const WORDS: &[&str] = &[
    "crane", "slate", "abbey", "llama", "alarm", "eerie", "there", "speed", "abide", "sassy",
    "mummy", "geese", "robot", "fuzzy", "kayak",
];

fn states(guess: &str, target: &str) -> Vec<LetterState> {
    classify(guess, target)
        .unwrap()
        .into_iter()
        .map(|s| s.state)
        .collect()
}

fn count(s: &str, c: char) -> usize {
    s.chars().filter(|&x| x == c).count()
}

// ==================== General Properties ====================

#[test]
fn test_output_matches_guess_length_and_order() {
    for guess in WORDS {
        for target in WORDS {
            let result = classify(guess, target).unwrap();
            assert_eq!(result.len(), guess.len());
            let chars: String = result.iter().map(|s| s.ch).collect();
            assert_eq!(&chars, guess);
        }
    }
}

#[test]
fn test_word_against_itself_is_all_correct() {
    for word in WORDS {
        assert!(states(word, word).iter().all(|&s| s == Correct), "{}", word);
    }
}

#[test]
fn test_marks_never_exceed_target_multiplicity() {
    for guess in WORDS {
        for target in WORDS {
            let result = classify(guess, target).unwrap();
            for c in guess.chars() {
                let marked = result
                    .iter()
                    .filter(|s| s.ch == c && s.state != Wrong)
                    .count();
                assert!(
                    marked <= count(target, c),
                    "{} vs {}: {} marked {} times",
                    guess,
                    target,
                    c,
                    marked
                );
            }
        }
    }
}

#[test]
fn test_correct_iff_same_position() {
    for guess in WORDS {
        for target in WORDS {
            let result = classify(guess, target).unwrap();
            for ((s, g), t) in result.iter().zip(guess.chars()).zip(target.chars()) {
                assert_eq!(s.state == Correct, g == t, "{} vs {}", guess, target);
            }
        }
    }
}

#[test]
fn test_no_repeats_is_set_membership() {
    let distinct = ["crane", "slate", "robot", "abide", "pluck"];
    for guess in distinct.iter().filter(|w| w.chars().all(|c| count(w, c) == 1)) {
        for target in distinct.iter().filter(|w| w.chars().all(|c| count(w, c) == 1)) {
            let result = classify(guess, target).unwrap();
            for ((s, g), t) in result.iter().zip(guess.chars()).zip(target.chars()) {
                let expected = if g == t {
                    Correct
                } else if target.contains(g) {
                    Almost
                } else {
                    Wrong
                };
                assert_eq!(s.state, expected, "{} vs {} at {}", guess, target, g);
            }
        }
    }
}

// ==================== Duplicate Letter Fixtures ====================

#[test]
fn test_aabb_against_abab() {
    assert_eq!(states("AABB", "ABAB"), vec![Correct, Almost, Almost, Correct]);
}

#[test]
fn test_llama_against_alarm() {
    assert_eq!(
        states("LLAMA", "ALARM"),
        vec![Wrong, Correct, Correct, Almost, Almost]
    );
}

#[test]
fn test_speed_against_abide() {
    // One E in the target: only the first misplaced E gets it
    assert_eq!(
        states("SPEED", "ABIDE"),
        vec![Wrong, Wrong, Almost, Wrong, Almost]
    );
}

#[test]
fn test_geese_against_there() {
    // Both Es of THERE are matched exactly, so the misplaced E gets nothing
    assert_eq!(
        states("GEESE", "THERE"),
        vec![Wrong, Wrong, Correct, Wrong, Correct]
    );
}

// ==================== Errors ====================

#[test]
fn test_length_mismatch() {
    assert!(matches!(
        classify("abc", "ab"),
        Err(ClassifyError::LengthMismatch {
            guess_len: 3,
            target_len: 2,
            ..
        })
    ));
}

#[test]
fn test_score_stops_at_first_bad_guess() {
    let result = score("crane", &["slate", "toolong", "crane"]);
    assert!(result.is_err());
}
