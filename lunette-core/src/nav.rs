//! Navigation and anchor-scroll orchestration.
//!
//! Scrolling to an anchor on the current page happens immediately. An
//! anchor on a different page can only be resolved after that page's
//! content has mounted, so the orchestrator spawns a bounded wait that
//! polls the destination viewport and fires the scroll once the anchor
//! resolves. A newer navigation supersedes any pending wait: the stale task
//! is aborted, and a generation check keeps a wait that already woke from
//! scrolling late. Anchors that never resolve are dropped silently; a
//! missed scroll has no functional consequence.

use crate::application::AppContext;
use crate::scroll::Viewport;
use crate::state::Entity;
use crate::task::TaskHandle;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Default bound on how long a deferred anchor scroll waits for the
/// destination page to mount before giving up.
pub const DEFAULT_MOUNT_WAIT: Duration = Duration::from_millis(400);

const MOUNT_POLL: Duration = Duration::from_millis(25);

/// Coordinates deferred anchor scrolls across navigations.
///
/// At most one deferred scroll is pending at a time; every new navigation
/// goes through [`ScrollOrchestrator::supersede`] first, so the later
/// call's intent always wins.
#[derive(Debug, Default)]
pub struct ScrollOrchestrator {
    generation: Arc<AtomicU64>,
    pending: Option<TaskHandle>,
}

impl ScrollOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any pending deferred scroll. The generation bump covers the
    /// window where an aborted task has already woken but not yet scrolled.
    pub fn supersede(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a deferred scroll is still waiting to fire.
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Scroll an already-mounted viewport to `anchor` now. Returns false,
    /// silently, when the anchor is unknown on that page.
    pub fn scroll_to_anchor(viewport: &Entity<Viewport>, anchor: &str) -> bool {
        let row = viewport.read(|v| v.anchor_row(anchor)).ok().flatten();
        match row {
            Some(row) => {
                let _ = viewport.update(|v| v.glide_to(row));
                true
            }
            None => {
                debug!(anchor, "anchor not found; scroll skipped");
                false
            }
        }
    }

    /// Defer an anchor scroll until `viewport`'s page mounts, waiting at
    /// most `mount_wait`. Fire and forget: if the page never mounts in
    /// time or the anchor never appears, nothing happens.
    pub fn defer_anchor_scroll(
        &mut self,
        app: &AppContext,
        viewport: Entity<Viewport>,
        anchor: String,
        mount_wait: Duration,
    ) {
        self.supersede();
        let issued = self.generation.load(Ordering::SeqCst);
        let generation = Arc::clone(&self.generation);
        let app = app.clone();

        let handle = TaskHandle::spawn(async move {
            let deadline = tokio::time::Instant::now() + mount_wait;
            loop {
                if generation.load(Ordering::SeqCst) != issued {
                    return;
                }
                let row = viewport
                    .read(|v| {
                        if v.is_mounted() {
                            v.anchor_row(&anchor)
                        } else {
                            None
                        }
                    })
                    .ok()
                    .flatten();

                if let Some(row) = row {
                    // Re-check: a supersede may have landed while we slept.
                    if generation.load(Ordering::SeqCst) != issued {
                        return;
                    }
                    trace!(anchor, row, "deferred anchor scroll firing");
                    let _ = viewport.update(|v| v.glide_to(row));
                    app.refresh();
                    return;
                }

                if tokio::time::Instant::now() >= deadline {
                    trace!(anchor, "destination never mounted in time; anchor scroll dropped");
                    return;
                }
                tokio::time::sleep(MOUNT_POLL).await;
            }
        });
        self.pending = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unmounted() -> Entity<Viewport> {
        Entity::new(Viewport::new())
    }

    fn mount_with_showcase(viewport: &Entity<Viewport>) {
        viewport
            .update(|v| {
                v.set_layout(24, 80);
                v.register_anchor("home", 0.0);
                v.register_anchor("showcase", 30.0);
            })
            .unwrap();
    }

    #[test]
    fn same_page_anchor_scroll_is_immediate() {
        let vp = unmounted();
        mount_with_showcase(&vp);

        assert!(ScrollOrchestrator::scroll_to_anchor(&vp, "showcase"));
        assert_eq!(vp.read(Viewport::glide_target).unwrap(), Some(30.0));
    }

    #[test]
    fn unknown_anchor_is_a_silent_no_op() {
        let vp = unmounted();
        mount_with_showcase(&vp);

        assert!(!ScrollOrchestrator::scroll_to_anchor(&vp, "careers"));
        assert!(vp.read(Viewport::glide_target).unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn deferred_scroll_fires_once_the_page_mounts() {
        let app = AppContext::detached();
        let vp = unmounted();
        let mut orch = ScrollOrchestrator::new();

        orch.defer_anchor_scroll(&app, vp.clone(), "showcase".into(), DEFAULT_MOUNT_WAIT);
        assert!(orch.has_pending());

        // The page mounts 100 ms in, well inside the bound.
        tokio::time::sleep(Duration::from_millis(100)).await;
        mount_with_showcase(&vp);
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(vp.read(Viewport::glide_target).unwrap(), Some(30.0));
        assert!(!orch.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_wait_never_scrolls() {
        let app = AppContext::detached();
        let vp = unmounted();
        let mut orch = ScrollOrchestrator::new();

        orch.defer_anchor_scroll(&app, vp.clone(), "showcase".into(), DEFAULT_MOUNT_WAIT);
        tokio::time::sleep(Duration::from_millis(50)).await;

        // A later navigation wins; the stale wait must not fire even though
        // the page mounts afterwards.
        orch.supersede();
        mount_with_showcase(&vp);
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(vp.read(Viewport::glide_target).unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn a_second_navigation_replaces_the_first_wait() {
        let app = AppContext::detached();
        let vp = unmounted();
        let mut orch = ScrollOrchestrator::new();

        orch.defer_anchor_scroll(&app, vp.clone(), "showcase".into(), DEFAULT_MOUNT_WAIT);
        tokio::time::sleep(Duration::from_millis(50)).await;
        orch.defer_anchor_scroll(&app, vp.clone(), "home".into(), DEFAULT_MOUNT_WAIT);

        mount_with_showcase(&vp);
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Only the later target fired.
        assert_eq!(vp.read(Viewport::glide_target).unwrap(), Some(0.0));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_gives_up_after_the_mount_bound() {
        let app = AppContext::detached();
        let vp = unmounted();
        let mut orch = ScrollOrchestrator::new();

        orch.defer_anchor_scroll(&app, vp.clone(), "showcase".into(), DEFAULT_MOUNT_WAIT);
        tokio::time::sleep(DEFAULT_MOUNT_WAIT + Duration::from_millis(100)).await;

        assert!(!orch.has_pending());
        assert!(vp.read(Viewport::glide_target).unwrap().is_none());

        // Mounting later changes nothing; the wait is gone.
        mount_with_showcase(&vp);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(vp.read(Viewport::glide_target).unwrap().is_none());
    }
}
