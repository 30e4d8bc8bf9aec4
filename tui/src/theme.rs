//! Color theme and glyphs for Guess TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use guess_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Accent Colors ===
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed

    // === Table rows ===
    pub const ROW_ODD: Color = Color::Rgb(138, 138, 138); // xterm 245
    pub const ROW_EVEN: Color = Color::Rgb(98, 98, 98); // xterm 241
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub peach: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub blue: Color,
    pub row_odd: Color,
    pub row_even: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            peach: colors::ORANGE,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
            blue: colors::BLUE,
            row_odd: colors::ROW_ODD,
            row_even: colors::ROW_EVEN,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_muted: Color::Gray,
            primary: Color::White,
            peach: Color::Yellow,
            green: Color::Green,
            yellow: Color::Yellow,
            red: Color::Red,
            blue: Color::Cyan,
            row_odd: Color::White,
            row_even: Color::Gray,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for hints and the prompt.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub prompt: &'static str,
    pub higher: &'static str,
    pub lower: &'static str,
    pub correct: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            prompt: ">",
            higher: "^",
            lower: "v",
            correct: "ok",
            separator: "|",
        }
    } else {
        Glyphs {
            prompt: "❯",
            higher: "↑",
            lower: "↓",
            correct: "✓",
            separator: "│",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn higher(palette: &Palette) -> Style {
        Style::default().fg(palette.green)
    }

    #[must_use]
    pub fn lower(palette: &Palette) -> Style {
        Style::default().fg(palette.red)
    }

    #[must_use]
    pub fn correct(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.blue)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn lost(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.red)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn warning(palette: &Palette) -> Style {
        Style::default().fg(palette.yellow)
    }

    #[must_use]
    pub fn table_header(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Alternating shade for history rows; `index` is 0-based.
    #[must_use]
    pub fn table_row(palette: &Palette, index: usize) -> Style {
        if index % 2 == 0 {
            Style::default().fg(palette.row_odd)
        } else {
            Style::default().fg(palette.row_even)
        }
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}
