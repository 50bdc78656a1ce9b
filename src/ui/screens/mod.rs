//! Screen renderers, one per route

pub mod welcome;
pub mod component_list;
pub mod detail;
