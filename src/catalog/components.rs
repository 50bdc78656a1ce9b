//! Component catalog
//!
//! Sections are listed in display order: Display, Input, Layout.

/// A component that can be opened on the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentEntry {
    /// Name passed to the detail route
    pub name: &'static str,
    /// One-line description shown under the name
    pub summary: &'static str,
}

/// A labelled group of components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub items: &'static [ComponentEntry],
}

pub static CATALOG: &[Category] = &[
    Category {
        label: "Display",
        items: &[
            ComponentEntry { name: "Text", summary: "Displays text" },
            ComponentEntry { name: "Image", summary: "Displays an image" },
        ],
    },
    Category {
        label: "Input",
        items: &[
            ComponentEntry { name: "TextField", summary: "Input field for text" },
            ComponentEntry { name: "PasswordField", summary: "Input field for password" },
        ],
    },
    Category {
        label: "Layout",
        items: &[
            ComponentEntry { name: "Column", summary: "Arranges elements vertically" },
            ComponentEntry { name: "Row", summary: "Arranges elements horizontally" },
        ],
    },
];

/// Total number of selectable entries across all categories
pub fn entry_count() -> usize {
    CATALOG.iter().map(|c| c.items.len()).sum()
}

/// Entry at a flat index (categories concatenated in order)
pub fn entry_at(index: usize) -> Option<&'static ComponentEntry> {
    CATALOG.iter().flat_map(|c| c.items.iter()).nth(index)
}
