//! Route definitions

use std::fmt;

/// Every screen the application can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Branding screen shown at startup
    Welcome,
    /// Catalog of component categories
    ComponentList,
    /// Styled text sample for a component.
    ///
    /// The name is copied verbatim from the list entry and is never checked
    /// against the catalog.
    Detail(String),
}

impl Route {
    /// Canonical route path (`welcome`, `components`, `details/{component}`)
    pub fn path(&self) -> String {
        match self {
            Route::Welcome => "welcome".to_string(),
            Route::ComponentList => "components".to_string(),
            Route::Detail(component) => format!("details/{}", component),
        }
    }

    /// Component name carried by a detail route
    pub fn component(&self) -> Option<&str> {
        match self {
            Route::Detail(component) => Some(component.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
