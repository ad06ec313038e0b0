//! Root component: navbar, router, page dispatch, and the navigation /
//! scroll orchestration that ties them together.

use crate::components::Navbar;
use crate::config::MotionOptions;
use crate::model::SiteRoute;
use crate::pages::{AboutPage, CollectionPage, ContactPage, HomePage};
use lunette_core::{
    Action, AppContext, Component, Context, Entity, Event, EventContext, NavTarget, Router,
    ScrollOrchestrator, Viewport,
};
use ratatui::layout::Rect;
use tracing::warn;

const NAVBAR_ROWS: u16 = 2;

pub struct Root {
    router: Router<SiteRoute>,
    orchestrator: ScrollOrchestrator,
    navbar: Navbar,
    options: MotionOptions,
    home: HomePage,
    collection: CollectionPage,
    about: AboutPage,
    contact: ContactPage,
}

impl Root {
    pub fn new(cx: &AppContext, options: MotionOptions) -> Self {
        Self {
            router: Router::new(SiteRoute::Home),
            orchestrator: ScrollOrchestrator::new(),
            navbar: Navbar::new(),
            home: HomePage::new(cx, &options),
            collection: CollectionPage::new(cx),
            about: AboutPage::new(cx),
            contact: ContactPage::new(),
            options,
        }
    }

    fn viewport_of(&self, route: SiteRoute) -> Option<Entity<Viewport>> {
        match route {
            SiteRoute::Home => Some(self.home.viewport()),
            SiteRoute::Collection => Some(self.collection.viewport()),
            SiteRoute::About => Some(self.about.viewport()),
            SiteRoute::Contact => None,
        }
    }

    fn page_mut(&mut self, route: SiteRoute) -> &mut dyn Component {
        match route {
            SiteRoute::Home => &mut self.home,
            SiteRoute::Collection => &mut self.collection,
            SiteRoute::About => &mut self.about,
            SiteRoute::Contact => &mut self.contact,
        }
    }

    fn content_area(area: Rect) -> Rect {
        Rect::new(
            area.x,
            area.y + NAVBAR_ROWS.min(area.height),
            area.width,
            area.height.saturating_sub(NAVBAR_ROWS),
        )
    }

    fn content_cx(cx: &Context) -> Context {
        Context::new(cx.app.clone(), Self::content_area(cx.area))
    }

    /// Resolve a navigation target. The later call always wins: any
    /// pending deferred anchor scroll is superseded before anything else
    /// happens.
    fn navigate_to(&mut self, target: NavTarget, cx: &mut EventContext) {
        self.orchestrator.supersede();

        let route: SiteRoute = match target.path.parse() {
            Ok(route) => route,
            Err(err) => {
                warn!(%err, "navigation ignored");
                return;
            }
        };
        let current = *self.router.current();

        if route == current {
            // Already on the page; an anchor scrolls, no anchor means
            // nothing further to do.
            if let Some(anchor) = target.anchor.as_deref() {
                if let Some(viewport) = self.viewport_of(current) {
                    ScrollOrchestrator::scroll_to_anchor(&viewport, anchor);
                    cx.notify();
                }
            }
            return;
        }

        let mut page_cx = Self::content_cx(cx);
        self.page_mut(current).on_exit(&mut page_cx);
        self.router.navigate(route);

        // A route change always starts at the top of the destination.
        let viewport = self.viewport_of(route);
        if let Some(viewport) = &viewport {
            let _ = viewport.update(Viewport::jump_to_top);
        }
        self.page_mut(route).on_enter(&mut page_cx);

        if let (Some(anchor), Some(viewport)) = (target.anchor, viewport) {
            self.orchestrator
                .defer_anchor_scroll(cx.app(), viewport, anchor, self.options.anchor_wait());
        }
    }

    fn go_back(&mut self, cx: &mut EventContext) {
        if !self.router.can_go_back() {
            return;
        }
        self.orchestrator.supersede();

        let current = *self.router.current();
        let mut page_cx = Self::content_cx(cx);
        self.page_mut(current).on_exit(&mut page_cx);
        self.router.go_back();

        let route = *self.router.current();
        if let Some(viewport) = self.viewport_of(route) {
            let _ = viewport.update(Viewport::jump_to_top);
        }
        self.page_mut(route).on_enter(&mut page_cx);
    }

    fn handle_global_key(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        use crossterm::event::KeyCode;

        let Event::Key(key) = event else { return None };
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc => {
                self.go_back(cx);
                None
            }
            KeyCode::Tab => {
                self.navbar.select_next();
                None
            }
            KeyCode::BackTab => {
                self.navbar.select_prev();
                None
            }
            KeyCode::Enter => {
                let target = self.navbar.target();
                self.navigate_to(target, cx);
                None
            }
            _ => None,
        }
    }
}

impl Component for Root {
    fn on_mount(&mut self, cx: &mut Context) {
        let mut page_cx = Self::content_cx(cx);
        self.home.on_mount(&mut page_cx);
        self.collection.on_mount(&mut page_cx);
        self.about.on_mount(&mut page_cx);
        self.contact.on_mount(&mut page_cx);

        let initial = *self.router.current();
        self.page_mut(initial).on_enter(&mut page_cx);
    }

    fn on_shutdown(&mut self, cx: &mut Context) {
        self.orchestrator.supersede();
        let mut page_cx = Self::content_cx(cx);
        let current = *self.router.current();
        self.page_mut(current).on_exit(&mut page_cx);
        self.home.on_shutdown(&mut page_cx);
        self.collection.on_shutdown(&mut page_cx);
        self.about.on_shutdown(&mut page_cx);
        self.contact.on_shutdown(&mut page_cx);
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let route = *self.router.current();
        let scrolled = self
            .viewport_of(route)
            .and_then(|v| v.read(|v| v.last_offset() > 2.0).ok())
            .unwrap_or(false);

        let bar_area = Rect {
            height: NAVBAR_ROWS.min(cx.area.height),
            ..cx.area
        };
        self.navbar.render(frame, bar_area, scrolled, route);

        let mut page_cx = Self::content_cx(cx);
        self.page_mut(route).render(frame, &mut page_cx);
    }

    fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        use crossterm::event::{KeyCode, KeyModifiers};

        // Ctrl+C quits regardless of what has focus.
        if let Event::Key(key) = &event {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(Action::Quit);
            }
        }

        let route = *self.router.current();
        let mut page_cx = Self::content_cx(cx);
        let action = self.page_mut(route).handle_event(event.clone(), &mut page_cx);

        match action {
            Some(Action::Navigate(target)) => {
                self.navigate_to(target, cx);
                None
            }
            Some(Action::Back) => {
                self.go_back(cx);
                None
            }
            Some(Action::Quit) => Some(Action::Quit),
            Some(Action::Noop) => None,
            None => self.handle_global_key(event, cx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunette_core::Carousel;
    use std::time::Duration;

    fn root_and_cx() -> (Root, EventContext) {
        let app = AppContext::detached();
        let root = Root::new(&app, MotionOptions::default());
        let cx = EventContext::new(app, Rect::new(0, 0, 80, 24));
        (root, cx)
    }

    fn mount_home(root: &Root) {
        root.home
            .viewport()
            .update(|v| {
                v.set_layout(22, 66);
                v.register_anchor("home", 0.0);
                v.register_anchor("showcase", 22.0);
            })
            .unwrap();
    }

    #[tokio::test]
    async fn route_change_without_anchor_resets_scroll_to_top() {
        let (mut root, mut cx) = root_and_cx();
        mount_home(&root);
        root.home.viewport().update(|v| v.scroll_by(30.0)).unwrap();

        root.navigate_to(NavTarget::page("/collection"), &mut cx);
        assert_eq!(*root.router.current(), SiteRoute::Collection);
        assert!(!root.orchestrator.has_pending());

        root.navigate_to(NavTarget::page("/"), &mut cx);
        assert_eq!(root.home.viewport().read(Viewport::last_offset).unwrap(), 0.0);
    }

    #[tokio::test]
    async fn same_page_anchor_scrolls_immediately() {
        let (mut root, mut cx) = root_and_cx();
        mount_home(&root);

        root.navigate_to(NavTarget::anchor("/", "showcase"), &mut cx);
        assert_eq!(*root.router.current(), SiteRoute::Home);
        assert_eq!(
            root.home.viewport().read(Viewport::glide_target).unwrap(),
            Some(22.0)
        );
        assert!(!root.orchestrator.has_pending());
    }

    #[tokio::test]
    async fn same_page_without_anchor_does_nothing() {
        let (mut root, mut cx) = root_and_cx();
        mount_home(&root);

        root.navigate_to(NavTarget::page("/"), &mut cx);
        assert!(root.home.viewport().read(Viewport::glide_target).unwrap().is_none());
        assert_eq!(root.home.viewport().read(Viewport::last_offset).unwrap(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn cross_page_anchor_waits_for_the_destination_to_mount() {
        let (mut root, mut cx) = root_and_cx();

        // Start somewhere else so home is not yet mounted.
        root.navigate_to(NavTarget::page("/collection"), &mut cx);
        root.navigate_to(NavTarget::anchor("/", "showcase"), &mut cx);
        assert_eq!(*root.router.current(), SiteRoute::Home);
        assert!(root.orchestrator.has_pending());

        // Home's first layout pass lands shortly afterwards.
        tokio::time::sleep(Duration::from_millis(50)).await;
        mount_home(&root);
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(
            root.home.viewport().read(Viewport::glide_target).unwrap(),
            Some(22.0)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn navigating_away_cancels_a_pending_anchor_scroll() {
        let (mut root, mut cx) = root_and_cx();

        root.navigate_to(NavTarget::page("/collection"), &mut cx);
        root.navigate_to(NavTarget::anchor("/", "showcase"), &mut cx);
        assert!(root.orchestrator.has_pending());

        // The user moves on before home mounts; the stale scroll must die.
        root.navigate_to(NavTarget::page("/about"), &mut cx);
        mount_home(&root);
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(*root.router.current(), SiteRoute::About);
        assert!(root.home.viewport().read(Viewport::glide_target).unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_routes_are_ignored() {
        let (mut root, mut cx) = root_and_cx();
        root.navigate_to(NavTarget::page("/careers"), &mut cx);
        assert_eq!(*root.router.current(), SiteRoute::Home);
    }

    #[tokio::test]
    async fn back_returns_to_the_previous_page() {
        let (mut root, mut cx) = root_and_cx();

        root.navigate_to(NavTarget::page("/about"), &mut cx);
        root.navigate_to(NavTarget::page("/contact"), &mut cx);
        root.go_back(&mut cx);
        assert_eq!(*root.router.current(), SiteRoute::About);

        root.go_back(&mut cx);
        root.go_back(&mut cx); // nothing left; stays put
        assert_eq!(*root.router.current(), SiteRoute::Home);
    }

    #[tokio::test]
    async fn page_keys_win_over_global_keys() {
        use crossterm::event::{KeyCode, KeyEvent};

        let (mut root, mut cx) = root_and_cx();
        root.navigate_to(NavTarget::page("/contact"), &mut cx);

        // 'q' is typed into the form, not treated as quit.
        let action = root.handle_event(Event::Key(KeyEvent::from(KeyCode::Char('q'))), &mut cx);
        assert_eq!(action, None);

        // Back on home, 'q' quits.
        root.navigate_to(NavTarget::page("/"), &mut cx);
        let action = root.handle_event(Event::Key(KeyEvent::from(KeyCode::Char('q'))), &mut cx);
        assert_eq!(action, Some(Action::Quit));
    }

    #[tokio::test]
    async fn carousel_keys_reach_the_testimonials_on_home() {
        use crossterm::event::{KeyCode, KeyEvent};

        let (mut root, mut cx) = root_and_cx();
        let carousel = root.home.testimonials_carousel();

        let action = root.handle_event(Event::Key(KeyEvent::from(KeyCode::Right)), &mut cx);
        assert_eq!(action, None);
        assert_eq!(carousel.read(Carousel::current).unwrap(), 1);
    }
}
