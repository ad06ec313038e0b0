//! Component lifecycle and event types.

use crate::application::{Context, EventContext};
use crate::router::NavTarget;

/// Input events delivered to components.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
}

/// What a component wants the application to do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Switch pages and/or scroll to an in-page anchor.
    Navigate(NavTarget),
    /// Return to the previous route.
    Back,
    Quit,
    /// The event was consumed; nothing further should happen. Returning
    /// this stops a parent from also reacting to the same key.
    Noop,
}

/// The core component trait. Pages and sections implement this; the root
/// component dispatches to whichever page the router says is active.
pub trait Component: Send + Sync + 'static {
    /// Called once when the component first becomes part of the tree.
    fn on_mount(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Called each time navigation makes this component the active page.
    /// Acquire timers and listeners here.
    fn on_enter(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Called each time navigation moves away. Release timers and
    /// listeners here; [`crate::TaskTracker::abort_all`] is idempotent, so
    /// rapid enter/exit cycles are safe.
    fn on_exit(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Called when the application is about to shut down.
    fn on_shutdown(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Render the component into `cx.area`.
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context);

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        let _ = (event, cx);
        None
    }
}
