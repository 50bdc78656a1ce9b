//! Screen navigation
//!
//! A stack of routes with forward/back transitions.

pub mod route;
pub mod navigator;

pub use route::Route;
pub use navigator::Navigator;
