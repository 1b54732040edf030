//! Word-guessing board: letter classification and board rendering.
//!
//! Each guess becomes one row of the grid, each letter one square filled
//! with the color of its [`LetterState`].

mod classify;
mod palette;

pub use classify::{classify, CharacterState, ClassifyError, LetterState};
pub use palette::Palette;

use crate::render::{Grid, RenderError, RenderOptions, Renderer, Transcoder};
use std::path::PathBuf;

/// Errors that can occur while rendering a board.
#[derive(Debug, thiserror::Error)]
pub enum WordleError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Classify every guess against `word`, one result per guess.
pub fn score<S: AsRef<str>>(
    word: &str,
    guesses: &[S],
) -> Result<Vec<Vec<CharacterState>>, ClassifyError> {
    guesses.iter().map(|g| classify(g.as_ref(), word)).collect()
}

/// Build the board grid for `guesses` against `word`.
pub fn board<S: AsRef<str>>(
    word: &str,
    guesses: &[S],
    palette: &Palette,
) -> Result<Grid, ClassifyError> {
    let rows = score(word, guesses)?
        .iter()
        .map(|row| row.iter().map(|s| palette.cell(s)).collect())
        .collect();
    Ok(Grid::new(rows))
}

/// Classify the guesses and render the board.
///
/// Classification happens before anything is drawn, so a guess of the wrong
/// length never leaves a file behind.
pub async fn render<S: AsRef<str>, T: Transcoder>(
    renderer: &Renderer<T>,
    word: &str,
    guesses: &[S],
    palette: &Palette,
    options: &RenderOptions,
) -> Result<PathBuf, WordleError> {
    let grid = board(word, guesses, palette)?;
    log::debug!(
        "Rendering board for {} guess(es) of a {}-letter word",
        guesses.len(),
        word.chars().count()
    );
    Ok(renderer.render(&grid, options).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Cell;

    #[test]
    fn test_board_has_one_row_per_guess() {
        let grid = board("crane", &["slate", "crane"], &Palette::default()).unwrap();
        assert_eq!(grid.rows().len(), 2);
        assert_eq!(grid.width(), 5);
    }

    #[test]
    fn test_board_colors_follow_states() {
        let palette = Palette::default();
        let grid = board("ab", &["ba", "ab"], &palette).unwrap();
        let fills: Vec<_> = grid
            .rows()
            .iter()
            .flatten()
            .map(|cell| match cell {
                Cell::Styled(s) => s.square_color,
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![
                Some(palette.almost),
                Some(palette.almost),
                Some(palette.correct),
                Some(palette.correct)
            ]
        );
    }

    #[test]
    fn test_board_rejects_length_mismatch() {
        let err = board("crane", &["cranes"], &Palette::default()).unwrap_err();
        assert!(matches!(err, ClassifyError::LengthMismatch { .. }));
    }

    #[test]
    fn test_score_empty_guess_list() {
        let empty: [&str; 0] = [];
        assert!(score("crane", &empty).unwrap().is_empty());
    }
}
