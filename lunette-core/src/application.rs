//! Application runtime: terminal setup, the event loop, and the contexts
//! handed to components.

use crate::component::{Action, Component, Event};
use crate::state::Entity;
use crate::task::TaskHandle;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::debug;

type SharedRoot = Arc<Mutex<Option<Arc<Mutex<dyn Component>>>>>;

/// Handle to global application services, cloneable into tasks.
#[derive(Clone)]
pub struct AppContext {
    root: SharedRoot,
    re_render_tx: mpsc::UnboundedSender<()>,
}

impl AppContext {
    fn new(root: SharedRoot, re_render_tx: mpsc::UnboundedSender<()>) -> Self {
        Self { root, re_render_tx }
    }

    /// A context not attached to a running terminal loop. Refresh requests
    /// go nowhere; useful for headless tests of navigation logic.
    pub fn detached() -> Self {
        let (tx, _rx) = mpsc::unbounded_channel();
        Self::new(Arc::new(Mutex::new(None)), tx)
    }

    /// Create a new reactive state entity.
    pub fn new_entity<T>(&self, value: T) -> Entity<T>
    where
        T: Send + Sync + 'static,
    {
        Entity::new(value)
    }

    /// Spawn a background task bound to this application. The returned
    /// handle aborts the task; track it so it is released with its owner.
    pub fn spawn_task<F, Fut>(&self, f: F) -> TaskHandle
    where
        F: FnOnce(AppContext) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let cx = self.clone();
        TaskHandle::spawn(f(cx))
    }

    /// Install the root component.
    pub fn set_root(&self, root: impl Component) -> crate::Result<()> {
        let mut guard = self.root.lock().map_err(|_| crate::Error::LockPoisoned)?;
        *guard = Some(Arc::new(Mutex::new(root)) as Arc<Mutex<dyn Component>>);
        drop(guard);
        self.refresh();
        Ok(())
    }

    /// Request a re-render.
    pub fn refresh(&self) {
        let _ = self.re_render_tx.send(());
    }
}

/// Context passed to component methods. `area` is the region the component
/// should draw into.
pub struct Context {
    pub app: AppContext,
    pub area: Rect,
}

impl Context {
    pub fn new(app: AppContext, area: Rect) -> Self {
        Self { app, area }
    }

    pub fn app(&self) -> &AppContext {
        &self.app
    }

    /// Re-render whenever `entity` changes. Spawns a forwarding task, so
    /// call it once per entity, from `on_mount`.
    pub fn subscribe<T>(&self, entity: &Entity<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let mut rx = entity.subscribe();
        let tx = self.app.re_render_tx.clone();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let _ = tx.send(());
            }
        });
    }

    /// Spawn a task; see [`AppContext::spawn_task`].
    pub fn spawn_task<F, Fut>(&self, f: F) -> TaskHandle
    where
        F: FnOnce(AppContext) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        self.app.spawn_task(f)
    }

    /// Request a re-render.
    pub fn notify(&self) {
        self.app.refresh();
    }
}

/// Alias used in event-handling signatures.
pub type EventContext = Context;

/// Main application handle.
pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    /// Run the application. `setup` receives the context and must install
    /// a root component via [`AppContext::set_root`].
    pub fn run<F>(self, setup: F) -> anyhow::Result<()>
    where
        F: FnOnce(&AppContext) -> anyhow::Result<()>,
    {
        let rt = Runtime::new()?;

        let (re_render_tx, re_render_rx) = mpsc::unbounded_channel();
        let shared_root = Arc::new(Mutex::new(None));
        let app = AppContext::new(Arc::clone(&shared_root), re_render_tx);

        let guard = rt.enter();
        setup(&app)?;
        drop(guard);

        let root = {
            let guard = shared_root
                .lock()
                .map_err(|_| anyhow::anyhow!("root mutex poisoned"))?;
            guard
                .clone()
                .ok_or_else(|| anyhow::anyhow!("setup did not install a root component"))?
        };

        rt.block_on(self.run_loop(app, root, re_render_rx))
    }

    async fn run_loop(
        &self,
        app: AppContext,
        root: Arc<Mutex<dyn Component>>,
        re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(out);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(app, &mut terminal, root, re_render_rx).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &self,
        app: AppContext,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        root: Arc<Mutex<dyn Component>>,
        mut re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            let mut cx = Context::new(app.clone(), area);
            let mut guard = root
                .lock()
                .map_err(|_| anyhow::anyhow!("root mutex poisoned during mount"))?;
            guard.on_mount(&mut cx);
        }
        app.refresh();

        loop {
            tokio::select! {
                _ = re_render_rx.recv() => {
                    terminal.draw(|frame| {
                        let area = frame.area();
                        let mut cx = Context::new(app.clone(), area);
                        let mut guard = root.lock().expect("root mutex poisoned during render");
                        guard.render(frame, &mut cx);
                    })?;
                }
                ready = async { event::poll(Duration::from_millis(50)) } => {
                    if let Ok(true) = ready {
                        let raw = event::read()?;
                        let translated = match raw {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                Some(Event::Key(key))
                            }
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };

                        if let Some(event) = translated {
                            let size = terminal.size()?;
                            let area = Rect::new(0, 0, size.width, size.height);
                            let mut cx = Context::new(app.clone(), area);
                            let mut guard = root
                                .lock()
                                .map_err(|_| anyhow::anyhow!("root mutex poisoned during event"))?;
                            let action = guard.handle_event(event, &mut cx);
                            app.refresh();

                            if let Some(Action::Quit) = action {
                                debug!("quit requested; shutting down");
                                guard.on_shutdown(&mut cx);
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
