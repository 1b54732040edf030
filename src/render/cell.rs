//! Grid cells and the grid itself.

use crate::color::Color;

/// One grid position.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Square with no letter. Still filled and bordered.
    #[default]
    Empty,
    /// Letter drawn with the grid defaults.
    Char(char),
    /// Letter with per-square overrides.
    Styled(StyledCell),
}

impl Cell {
    /// The letter to draw, if any.
    pub fn letter(&self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Char(c) => Some(*c),
            Cell::Styled(s) => Some(s.letter),
        }
    }
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        Cell::Char(c)
    }
}

impl From<StyledCell> for Cell {
    fn from(s: StyledCell) -> Self {
        Cell::Styled(s)
    }
}

/// A letter with optional style overrides. `None` inherits the grid default.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledCell {
    pub letter: char,
    pub square_color: Option<Color>,
    pub text_color: Option<Color>,
    /// `Some(None)` turns the border off for this square only.
    pub border_color: Option<Option<Color>>,
    pub border_width: Option<u32>,
}

impl StyledCell {
    pub fn new(letter: char) -> Self {
        Self {
            letter,
            square_color: None,
            text_color: None,
            border_color: None,
            border_width: None,
        }
    }

    pub fn with_square_color(mut self, color: Color) -> Self {
        self.square_color = Some(color);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_border_color(mut self, color: Option<Color>) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn with_border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }
}

/// Rows of cells. Rows may have different lengths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Build a grid from lines of text. A space becomes an empty square.
    pub fn from_rows<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .map(|line| {
                line.as_ref()
                    .chars()
                    .map(|c| if c == ' ' { Cell::Empty } else { Cell::Char(c) })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Longest row length, 0 for an empty grid.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Every cell with its `(row, col)` position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, cell))
        })
    }
}
