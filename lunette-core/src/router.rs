//! Route state and navigation targets.

/// A requested destination: a page path plus an optional in-page anchor.
///
/// An anchor is only meaningful relative to the page that contains it; the
/// orchestrator resolves it after that page's content is mounted, never
/// before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget {
    pub path: String,
    pub anchor: Option<String>,
}

impl NavTarget {
    /// Target a page with no anchor.
    pub fn page(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            anchor: None,
        }
    }

    /// Target a named anchor within a page.
    pub fn anchor(path: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            anchor: Some(anchor.into()),
        }
    }
}

/// Current route plus history for back navigation.
#[derive(Debug, Clone)]
pub struct Router<R: Clone + PartialEq> {
    current: R,
    history: Vec<R>,
}

impl<R: Clone + PartialEq> Router<R> {
    pub fn new(initial: R) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &R {
        &self.current
    }

    /// Navigate to `route`, pushing the current route onto the history.
    /// Navigating to the current route is a no-op.
    pub fn navigate(&mut self, route: R) {
        if self.current != route {
            self.history.push(self.current.clone());
            self.current = route;
        }
    }

    /// Return to the previous route. Returns false when there is none.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Page {
        Home,
        Collection,
        Contact,
    }

    #[test]
    fn navigation_and_back() {
        let mut router = Router::new(Page::Home);
        assert!(!router.can_go_back());

        router.navigate(Page::Collection);
        router.navigate(Page::Contact);
        assert_eq!(router.current(), &Page::Contact);

        assert!(router.go_back());
        assert_eq!(router.current(), &Page::Collection);
        assert!(router.go_back());
        assert_eq!(router.current(), &Page::Home);
        assert!(!router.go_back());
    }

    #[test]
    fn navigating_to_the_current_route_adds_no_history() {
        let mut router = Router::new(Page::Home);
        router.navigate(Page::Home);
        assert!(!router.can_go_back());
    }

    #[test]
    fn nav_target_constructors() {
        let t = NavTarget::anchor("/", "showcase");
        assert_eq!(t.path, "/");
        assert_eq!(t.anchor.as_deref(), Some("showcase"));
        assert_eq!(NavTarget::page("/about").anchor, None);
    }
}
