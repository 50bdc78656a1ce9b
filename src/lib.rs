//! Component Tour - a terminal tour of UI components
//!
//! Three screens (welcome, component catalog, styled text detail) driven
//! by a stack-based navigator.

pub mod catalog;
pub mod nav;
pub mod settings;
pub mod ui;

// Re-export commonly used types
pub use nav::{Navigator, Route};
pub use settings::{Settings, SettingsError};
pub use ui::App;
