//! Per-cell style resolution: a cell override wins, otherwise the grid default.

use super::cell::Cell;
use super::options::RenderOptions;
use crate::color::Color;

pub fn square_color(cell: &Cell, options: &RenderOptions) -> Color {
    match cell {
        Cell::Styled(s) => s.square_color.unwrap_or(options.square_color),
        Cell::Empty | Cell::Char(_) => options.square_color,
    }
}

pub fn text_color(cell: &Cell, options: &RenderOptions) -> Color {
    match cell {
        Cell::Styled(s) => s.text_color.unwrap_or(options.text_color),
        Cell::Empty | Cell::Char(_) => options.text_color,
    }
}

/// `None` means the square gets no border.
pub fn border_color(cell: &Cell, options: &RenderOptions) -> Option<Color> {
    match cell {
        Cell::Styled(s) => s.border_color.unwrap_or(options.border_color),
        Cell::Empty | Cell::Char(_) => options.border_color,
    }
}

pub fn border_width(cell: &Cell, options: &RenderOptions) -> u32 {
    match cell {
        Cell::Styled(s) => s.border_width.unwrap_or(options.border_width),
        Cell::Empty | Cell::Char(_) => options.border_width,
    }
}

/// All four attributes of a cell after resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub square_color: Color,
    pub text_color: Color,
    pub border_color: Option<Color>,
    pub border_width: u32,
}

impl ResolvedStyle {
    pub fn resolve(cell: &Cell, options: &RenderOptions) -> Self {
        Self {
            square_color: square_color(cell, options),
            text_color: text_color(cell, options),
            border_color: border_color(cell, options),
            border_width: border_width(cell, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::StyledCell;

    fn defaults() -> RenderOptions {
        RenderOptions {
            square_color: Color::WHITE,
            text_color: Color::BLACK,
            border_color: Some(Color::rgb(1, 2, 3)),
            border_width: 2,
            ..RenderOptions::default()
        }
    }

    fn default_style(o: &RenderOptions) -> ResolvedStyle {
        ResolvedStyle {
            square_color: o.square_color,
            text_color: o.text_color,
            border_color: o.border_color,
            border_width: o.border_width,
        }
    }

    #[test]
    fn test_empty_and_bare_cells_use_defaults() {
        let o = defaults();
        assert_eq!(ResolvedStyle::resolve(&Cell::Empty, &o), default_style(&o));
        assert_eq!(ResolvedStyle::resolve(&Cell::Char('a'), &o), default_style(&o));
    }

    #[test]
    fn test_styled_cell_without_overrides_uses_defaults() {
        let o = defaults();
        let cell = Cell::Styled(StyledCell::new('a'));
        assert_eq!(ResolvedStyle::resolve(&cell, &o), default_style(&o));
    }

    #[test]
    fn test_single_override_leaves_others_alone() {
        let o = defaults();
        let red = Color::rgb(255, 0, 0);
        let cell = Cell::Styled(StyledCell::new('a').with_square_color(red));
        assert_eq!(
            ResolvedStyle::resolve(&cell, &o),
            ResolvedStyle {
                square_color: red,
                ..default_style(&o)
            }
        );
    }

    #[test]
    fn test_all_overrides_win() {
        let o = defaults();
        let cell = Cell::Styled(
            StyledCell::new('a')
                .with_square_color(Color::BLACK)
                .with_text_color(Color::WHITE)
                .with_border_color(Some(Color::rgb(9, 9, 9)))
                .with_border_width(7),
        );
        assert_eq!(
            ResolvedStyle::resolve(&cell, &o),
            ResolvedStyle {
                square_color: Color::BLACK,
                text_color: Color::WHITE,
                border_color: Some(Color::rgb(9, 9, 9)),
                border_width: 7,
            }
        );
    }

    #[test]
    fn test_cell_can_switch_border_off() {
        let o = defaults();
        let cell = Cell::Styled(StyledCell::new('a').with_border_color(None));
        assert_eq!(border_color(&cell, &o), None);
        assert_eq!(border_width(&cell, &o), 2);
    }

    #[test]
    fn test_cell_border_override_beats_null_default() {
        let o = RenderOptions {
            border_color: None,
            ..defaults()
        };
        let cell = Cell::Styled(StyledCell::new('a').with_border_color(Some(Color::BLACK)));
        assert_eq!(border_color(&cell, &o), Some(Color::BLACK));
        assert_eq!(border_color(&Cell::Char('a'), &o), None);
    }
}
