//! Screen view descriptions
//!
//! `describe` is a pure function from navigation state to what should be on
//! screen. Drawing happens separately in [`crate::ui::screens`].

use crate::catalog::{self, Category, TextRun, CATALOG, SAMPLE_RUNS};
use crate::nav::{Navigator, Route};

pub const WELCOME_TITLE: &str = "Jetpack Compose";
pub const WELCOME_BLURB: &str = "Jetpack Compose is a modern UI toolkit for building native Android \
applications using a declarative programming approach.";
pub const WELCOME_ACTION: &str = "I'm ready";
pub const LIST_HEADER: &str = "UI Components List";
pub const DETAIL_TITLE: &str = "Text Detail";
pub const BACK_LABEL: &str = "< Back";

/// Something the user can trigger from a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    Back,
}

impl Action {
    /// Apply the action to the navigator
    pub fn apply(self, nav: &mut Navigator) {
        match self {
            Action::Navigate(route) => nav.navigate_to(route),
            Action::Back => {
                nav.go_back();
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeView {
    pub title: &'static str,
    pub blurb: &'static str,
    pub action_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentListView {
    pub header: &'static str,
    pub categories: &'static [Category],
    /// Flat index of the highlighted entry
    pub selected: usize,
}

impl ComponentListView {
    /// Name of the highlighted entry
    pub fn selected_name(&self) -> Option<&'static str> {
        catalog::entry_at(self.selected).map(|e| e.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: &'static str,
    pub back_label: &'static str,
    pub runs: &'static [TextRun],
    /// Name the screen was opened with. Carried along but not rendered.
    pub component: String,
}

/// Everything needed to draw one screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Welcome(WelcomeView),
    ComponentList(ComponentListView),
    Detail(DetailView),
}

impl ScreenView {
    /// Action bound to the primary key (Enter) on this screen
    pub fn primary_action(&self) -> Option<Action> {
        match self {
            ScreenView::Welcome(_) => Some(Action::Navigate(Route::ComponentList)),
            ScreenView::ComponentList(list) => list
                .selected_name()
                .map(|name| Action::Navigate(Route::Detail(name.to_string()))),
            ScreenView::Detail(_) => Some(Action::Back),
        }
    }
}

/// Describe the screen for the current route
pub fn describe(nav: &Navigator, list_cursor: usize) -> ScreenView {
    match nav.current_route() {
        Route::Welcome => ScreenView::Welcome(WelcomeView {
            title: WELCOME_TITLE,
            blurb: WELCOME_BLURB,
            action_label: WELCOME_ACTION,
        }),
        Route::ComponentList => ScreenView::ComponentList(ComponentListView {
            header: LIST_HEADER,
            categories: CATALOG,
            selected: list_cursor.min(catalog::entry_count().saturating_sub(1)),
        }),
        Route::Detail(component) => ScreenView::Detail(DetailView {
            title: DETAIL_TITLE,
            back_label: BACK_LABEL,
            runs: &SAMPLE_RUNS,
            component: component.clone(),
        }),
    }
}
