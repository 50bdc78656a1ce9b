//! Navigation stack
//!
//! The stack always holds at least the initial `Welcome` route. Going back
//! from that root entry is a silent no-op: there is no screen behind it.

use super::Route;

/// Stack-based router. The top entry is the route being rendered.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
    /// Bumped on every effective change so the frontend knows when to redraw
    revision: u64,
}

impl Navigator {
    /// Create a navigator rooted at `Welcome`
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Welcome],
            revision: 0,
        }
    }

    /// Push a route on top of the current one.
    ///
    /// Pushing the route that is already on top is allowed and stacks a
    /// second copy.
    pub fn navigate_to(&mut self, route: Route) {
        log::info!("Navigate: {} -> {}", self.current_route(), route);
        self.stack.push(route);
        self.revision += 1;
    }

    /// Pop the top route. Returns false (and changes nothing) at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            log::debug!("Back ignored at root route {}", self.current_route());
            return false;
        }

        if let Some(left) = self.stack.pop() {
            log::info!("Back: {} -> {}", left, self.current_route());
        }
        self.revision += 1;
        true
    }

    /// The route on top of the stack
    pub fn current_route(&self) -> &Route {
        // never empty: new() seeds the root and go_back() keeps it
        &self.stack[self.stack.len() - 1]
    }

    /// Route directly beneath the top, if any
    pub fn previous_route(&self) -> Option<&Route> {
        self.stack.len().checked_sub(2).map(|i| &self.stack[i])
    }

    /// Number of routes on the stack (at least 1)
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether `go_back()` would change anything
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Change counter, increases on every push or effective pop
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_welcome() {
        let nav = Navigator::new();
        assert_eq!(nav.current_route(), &Route::Welcome);
        assert_eq!(nav.depth(), 1);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_list_and_back() {
        let mut nav = Navigator::new();
        nav.navigate_to(Route::ComponentList);
        assert_eq!(nav.current_route(), &Route::ComponentList);
        assert!(nav.go_back());
        assert_eq!(nav.current_route(), &Route::Welcome);
    }

    #[test]
    fn test_detail_and_back() {
        let mut nav = Navigator::new();
        nav.navigate_to(Route::ComponentList);
        nav.navigate_to(Route::Detail("TextField".into()));
        assert_eq!(nav.current_route(), &Route::Detail("TextField".into()));
        assert_eq!(nav.previous_route(), Some(&Route::ComponentList));

        nav.go_back();
        assert_eq!(nav.current_route(), &Route::ComponentList);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = Navigator::new();
        for _ in 0..5 {
            assert!(!nav.go_back());
            assert_eq!(nav.current_route(), &Route::Welcome);
            assert_eq!(nav.depth(), 1);
        }
        assert_eq!(nav.revision(), 0);
    }

    #[test]
    fn test_back_past_root_after_pushes() {
        let mut nav = Navigator::new();
        nav.navigate_to(Route::ComponentList);
        assert!(nav.go_back());
        assert!(!nav.go_back());
        assert_eq!(nav.current_route(), &Route::Welcome);
    }

    #[test]
    fn test_duplicate_push_stacks() {
        let mut nav = Navigator::new();
        nav.navigate_to(Route::ComponentList);
        nav.navigate_to(Route::ComponentList);
        assert_eq!(nav.depth(), 3);
        nav.go_back();
        assert_eq!(nav.current_route(), &Route::ComponentList);
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut nav = Navigator::new();
        nav.navigate_to(Route::ComponentList);
        assert_eq!(nav.revision(), 1);
        nav.go_back();
        assert_eq!(nav.revision(), 2);
        nav.go_back();
        assert_eq!(nav.revision(), 2);
    }
}
