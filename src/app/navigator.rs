// SPDX-License-Identifier: MPL-2.0
//! Routes and the navigation state the bottom bar drives.

use crate::ui::icons;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Search,
    Notifications,
    Messages,
}

impl Route {
    /// Every route, in bottom bar order.
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Search,
        Route::Notifications,
        Route::Messages,
    ];

    /// Stable route name, used for matching and logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Search => "search",
            Route::Notifications => "notifications",
            Route::Messages => "messages",
        }
    }

    /// Title shown in the top bar off Home.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Search => "Search",
            Route::Notifications => "Notifications",
            Route::Messages => "Messages",
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Route::Home => icons::HOME,
            Route::Search => icons::SEARCH,
            Route::Notifications => icons::NOTIFICATIONS,
            Route::Messages => icons::MESSAGES,
        }
    }
}

/// Tracks the current route. Screen state lives on the app and survives
/// navigation, which gives the restore-on-return behavior for free.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Route::Home,
        }
    }

    #[must_use]
    pub fn current(&self) -> Route {
        self.current
    }

    /// Switches to `route`. Returns `false` without side effects when the
    /// route is already current (single-top semantics).
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current == route {
            return false;
        }
        self.current = route;
        true
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
    fn starts_at_home() {
        assert_eq!(Navigator::new().current(), Route::Home);
    }

    #[test]
    fn navigate_switches_route() {
        let mut nav = Navigator::new();
        assert!(nav.navigate(Route::Search));
        assert_eq!(nav.current(), Route::Search);
    }

    #[test]
    fn navigating_to_current_route_is_a_no_op() {
        let mut nav = Navigator::new();
        assert!(!nav.navigate(Route::Home));
        assert_eq!(nav.current(), Route::Home);

        nav.navigate(Route::Messages);
        assert!(!nav.navigate(Route::Messages));
    }

    #[test]
    fn route_names_are_unique() {
        let mut names: Vec<_> = Route::ALL.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Route::ALL.len());
    }

    #[test]
    fn selection_matches_route_equality() {
        // The bottom bar marks an item selected iff route == current
        let nav = Navigator::new();
        for route in Route::ALL {
            assert_eq!(route == nav.current(), route == Route::Home);
        }
    }
}
