//! Compiled-in content
//!
//! The component catalog and the styled sample text shown on the detail screen.

pub mod components;
pub mod sample_text;

pub use components::{Category, ComponentEntry, CATALOG, entry_count, entry_at};
pub use sample_text::{RunStyle, TextRun, SAMPLE_RUNS, ACCENT_BROWN, plain_text};
