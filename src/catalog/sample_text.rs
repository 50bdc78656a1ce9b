//! Styled sample sentence
//!
//! Run boundaries matter: each run carries its own style and the runs are
//! drawn in order without separators.

/// 24-bit color of the "Brown " run
pub const ACCENT_BROWN: (u8, u8, u8) = (0xAA, 0x66, 0x00);

/// Style flags for a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub color: Option<(u8, u8, u8)>,
}

impl RunStyle {
    pub const PLAIN: RunStyle = RunStyle {
        bold: false,
        italic: false,
        strikethrough: false,
        color: None,
    };

    /// True when no decoration is applied
    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

/// A piece of text with one style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun {
    pub text: &'static str,
    pub style: RunStyle,
}

pub static SAMPLE_RUNS: [TextRun; 7] = [
    TextRun { text: "The ", style: RunStyle::PLAIN },
    TextRun {
        text: "quick ",
        style: RunStyle { strikethrough: true, ..RunStyle::PLAIN },
    },
    TextRun {
        text: "Brown ",
        style: RunStyle { bold: true, color: Some(ACCENT_BROWN), ..RunStyle::PLAIN },
    },
    TextRun { text: "fox jumps ", style: RunStyle::PLAIN },
    TextRun {
        text: "over ",
        style: RunStyle { bold: true, ..RunStyle::PLAIN },
    },
    TextRun {
        text: "the lazy ",
        style: RunStyle { italic: true, ..RunStyle::PLAIN },
    },
    TextRun { text: "dog.", style: RunStyle::PLAIN },
];

/// Concatenate the characters of a run sequence, dropping styles
pub fn plain_text(runs: &[TextRun]) -> String {
    runs.iter().map(|r| r.text).collect()
}
