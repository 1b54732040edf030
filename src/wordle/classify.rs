//! Duplicate-aware letter classification for a guess against a secret word.

use serde::Serialize;
use std::collections::HashMap;

/// Correctness of a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    /// Same letter at the same position.
    Correct,
    /// Letter occurs elsewhere in the word and its multiplicity isn't used up.
    Almost,
    Wrong,
}

/// One classified letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterState {
    #[serde(rename = "char")]
    pub ch: char,
    pub state: LetterState,
}

/// Errors returned by [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("guess '{guess}' has {guess_len} letters but the word has {target_len}")]
    LengthMismatch {
        guess: String,
        guess_len: usize,
        target_len: usize,
    },
}

/// Classify every letter of `guess` against `target`.
///
/// A letter is `Correct` when it matches the target at the same position.
/// Otherwise it is `Almost` while
/// `exact(c) + almost_so_far(c) < total(c)`, where `exact(c)` counts the
/// exact matches of `c` over the whole word and `almost_so_far(c)` counts the
/// `Almost` marks already emitted to the left. Anything else is `Wrong`.
///
/// Because exact matches are counted over the whole word, a correct letter to
/// the right of a misplaced duplicate still consumes one occurrence.
///
/// # Example
/// ```
/// use letters_in_squares::wordle::{classify, LetterState::*};
///
/// let states: Vec<_> = classify("AABB", "ABAB")
///     .unwrap()
///     .into_iter()
///     .map(|s| s.state)
///     .collect();
/// assert_eq!(states, vec![Correct, Almost, Almost, Correct]);
/// ```
pub fn classify(guess: &str, target: &str) -> Result<Vec<CharacterState>, ClassifyError> {
    let guess_chars: Vec<char> = guess.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    if guess_chars.len() != target_chars.len() {
        return Err(ClassifyError::LengthMismatch {
            guess: guess.to_string(),
            guess_len: guess_chars.len(),
            target_len: target_chars.len(),
        });
    }

    let mut totals: HashMap<char, usize> = HashMap::new();
    let mut exact: HashMap<char, usize> = HashMap::new();
    for (&g, &t) in guess_chars.iter().zip(&target_chars) {
        *totals.entry(t).or_default() += 1;
        if g == t {
            *exact.entry(t).or_default() += 1;
        }
    }

    let (states, _) = guess_chars.iter().zip(&target_chars).fold(
        (Vec::with_capacity(guess_chars.len()), HashMap::<char, usize>::new()),
        |(mut states, mut almost), (&g, &t)| {
            let state = if g == t {
                LetterState::Correct
            } else {
                let seen = almost.entry(g).or_default();
                let used = exact.get(&g).copied().unwrap_or(0) + *seen;
                if used < totals.get(&g).copied().unwrap_or(0) {
                    *seen += 1;
                    LetterState::Almost
                } else {
                    LetterState::Wrong
                }
            };
            states.push(CharacterState { ch: g, state });
            (states, almost)
        },
    );

    Ok(states)
}
