//! Mapping from letter states to board styling.

use super::classify::{CharacterState, LetterState};
use crate::color::Color;
use crate::render::{Cell, RenderOptions, StyledCell};

/// Fill colors for each letter state plus the letter color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub correct: Color,
    pub almost: Color,
    pub wrong: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            correct: Color::rgb(0x6c, 0xa9, 0x65),
            almost: Color::rgb(0xc8, 0xb6, 0x53),
            wrong: Color::rgb(0x78, 0x7c, 0x7f),
            text: Color::WHITE,
        }
    }
}

impl Palette {
    pub fn fill(&self, state: LetterState) -> Color {
        match state {
            LetterState::Correct => self.correct,
            LetterState::Almost => self.almost,
            LetterState::Wrong => self.wrong,
        }
    }

    /// Styled square for one classified letter. Only the fill is overridden;
    /// everything else comes from the render options.
    ///
    /// Letters are shown uppercase when that is a single character; ones
    /// like `ß` that expand are kept as typed.
    pub fn cell(&self, state: &CharacterState) -> Cell {
        let letter = single_uppercase(state.ch).unwrap_or(state.ch);
        Cell::Styled(StyledCell::new(letter).with_square_color(self.fill(state.state)))
    }

    /// Render options for a board: light letters and no borders.
    pub fn board_options(&self) -> RenderOptions {
        RenderOptions {
            text_color: self.text,
            border_color: None,
            ..RenderOptions::default()
        }
    }
}

fn single_uppercase(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}
