//! User Interface module
//!
//! Terminal UI using ratatui. Navigation state is turned into a
//! [`ScreenView`] description, which the screens then draw.

pub mod app;
pub mod screens;
pub mod theme;
pub mod view;

pub use app::App;
pub use theme::Theme;
pub use view::{Action, ScreenView};
