//! Color definitions for the terminal frontend

use ratatui::style::{Color, Modifier, Style};

use crate::catalog::RunStyle;
use crate::settings::{Settings, DEFAULT_PRIMARY};

/// Secondary text (welcome blurb)
pub const TEXT_MUTED: Color = Color::Gray;
/// Button label on the primary color
pub const ON_PRIMARY: Color = Color::White;
/// Key hint footer
pub const HINT: Color = Color::DarkGray;

/// Convert an RGB tuple to a ratatui color
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Colors derived from user settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Buttons, headers and the selection highlight
    pub primary: Color,
    /// Category card background, the primary color at roughly 30% over black
    pub card: Color,
}

impl Theme {
    pub fn from_primary(primary: (u8, u8, u8)) -> Self {
        let (r, g, b) = primary;
        let dim = |c: u8| (c as u16 * 3 / 10) as u8;
        Self {
            primary: rgb(primary),
            card: Color::Rgb(dim(r), dim(g), dim(b)),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let primary = settings.primary_rgb().unwrap_or_else(|e| {
            log::warn!("{}, using default primary color", e);
            DEFAULT_PRIMARY
        });
        Self::from_primary(primary)
    }

    /// Bold text in the primary color
    pub fn heading(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Highlight for the selected list entry
    pub fn selected(&self) -> Style {
        Style::default().fg(ON_PRIMARY).bg(self.primary).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_primary(DEFAULT_PRIMARY)
    }
}

/// Map a sample text run style to a ratatui style
pub fn run_style(style: &RunStyle) -> Style {
    let mut out = Style::default();
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.strikethrough {
        out = out.add_modifier(Modifier::CROSSED_OUT);
    }
    if let Some(color) = style.color {
        out = out.fg(rgb(color));
    }
    out
}
