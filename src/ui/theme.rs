//! Terminal color palettes for the light and dark themes.

use crate::theme::Theme;
use ansi_term::{Colour, Style};

/// Styles used by the renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub title: Style,
    pub muted: Style,
    pub display: Style,
    pub error: Style,
    pub operator: Style,
    pub button: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                title: Colour::White.bold(),
                muted: Colour::Fixed(245).normal(),
                display: Colour::White.bold(),
                error: Colour::Red.bold(),
                operator: Colour::Fixed(208).normal(),
                button: Colour::Fixed(252).normal(),
            },
            Theme::Light => Self {
                title: Colour::Fixed(236).bold(),
                muted: Colour::Fixed(242).normal(),
                display: Colour::Black.bold(),
                error: Colour::Red.bold(),
                operator: Colour::Fixed(172).normal(),
                button: Colour::Fixed(238).normal(),
            },
        }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self {
            title: Style::new(),
            muted: Style::new(),
            display: Style::new(),
            error: Style::new(),
            operator: Style::new(),
            button: Style::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_has_no_escapes() {
        let palette = Palette::plain();
        assert_eq!(palette.display.paint("42").to_string(), "42");
    }

    #[test]
    fn test_themes_differ() {
        assert_ne!(
            Palette::for_theme(Theme::Dark),
            Palette::for_theme(Theme::Light)
        );
    }
}
