//! Scoped handles for background tasks.
//!
//! Timers and deferred scrolls are persistent background activity tied to a
//! component's lifetime: registered when the component becomes active,
//! released when it goes away. [`TaskHandle`] is the owned handle for one
//! such task; [`TaskTracker`] releases a group of them together and again on
//! drop, so no timer can keep firing after teardown.

use tokio::task::AbortHandle;

/// An owned handle to a spawned task.
#[derive(Debug)]
pub struct TaskHandle {
    abort_handle: AbortHandle,
}

impl TaskHandle {
    /// Spawn `future` on the runtime and return a handle to it.
    pub fn spawn<F>(future: F) -> Self
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(future);
        Self {
            abort_handle: handle.abort_handle(),
        }
    }

    /// Cancel the task at its next await point. Idempotent.
    pub fn abort(&self) {
        self.abort_handle.abort();
    }

    /// Whether the task has completed or been aborted.
    pub fn is_finished(&self) -> bool {
        self.abort_handle.is_finished()
    }
}

/// A set of task handles released together.
///
/// # Example
/// ```ignore
/// impl Component for Testimonials {
///     fn on_enter(&mut self, cx: &mut Context) {
///         let handle = cx.spawn_task(|app| async move { /* tick loop */ });
///         self.tasks.track(handle);
///     }
///
///     fn on_exit(&mut self, _cx: &mut Context) {
///         self.tasks.abort_all();
///     }
/// }
/// ```
#[derive(Debug, Default)]
pub struct TaskTracker {
    handles: Vec<TaskHandle>,
}

impl TaskTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a handle for later release. Finished tasks are dropped on the
    /// way in so rapid enter/exit cycles do not accumulate garbage.
    pub fn track(&mut self, handle: TaskHandle) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    /// Abort every tracked task. Safe to call more than once.
    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    /// Number of tracked tasks that are still running.
    pub fn active_count(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for TaskTracker {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn idle_forever() {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }

    #[tokio::test]
    async fn abort_stops_a_running_task() {
        let handle = TaskHandle::spawn(idle_forever());
        assert!(!handle.is_finished());

        handle.abort();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(handle.is_finished());
    }

    #[tokio::test]
    async fn tracker_releases_everything_once() {
        let mut tracker = TaskTracker::new();
        tracker.track(TaskHandle::spawn(idle_forever()));
        tracker.track(TaskHandle::spawn(idle_forever()));
        assert_eq!(tracker.active_count(), 2);

        tracker.abort_all();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(tracker.active_count(), 0);

        // Second release is a no-op, not a double-free.
        tracker.abort_all();
        assert_eq!(tracker.active_count(), 0);
    }
}
