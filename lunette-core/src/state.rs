//! Reactive shared state handles.
//!
//! A page owns its state as an [`Entity<T>`]; the render path subscribes to
//! the entity and re-renders when it changes, while background tasks (the
//! carousel timer, a pending anchor wait) hold clones or weak handles and
//! mutate the same value.

use std::sync::{Arc, RwLock, Weak};
use tokio::sync::watch;

/// A shared, observable value.
pub struct Entity<T: ?Sized + Send + Sync> {
    inner: Arc<RwLock<T>>,
    tx: watch::Sender<()>,
}

/// A non-owning handle to an [`Entity`].
pub struct WeakEntity<T: ?Sized + Send + Sync> {
    inner: Weak<RwLock<T>>,
    tx: watch::Sender<()>,
}

impl<T: Send + Sync> Entity<T> {
    /// Create an entity holding `value`.
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(());
        Self {
            inner: Arc::new(RwLock::new(value)),
            tx,
        }
    }
}

impl<T: ?Sized + Send + Sync> Entity<T> {
    /// Read the value through a closure.
    pub fn read<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.inner.read().map_err(|_| crate::Error::LockPoisoned)?;
        Ok(f(&guard))
    }

    /// Mutate the value through a closure and notify subscribers.
    pub fn update<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.write().map_err(|_| crate::Error::LockPoisoned)?;
        let out = f(&mut guard);
        drop(guard);
        let _ = self.tx.send(());
        Ok(out)
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> watch::Receiver<()> {
        self.tx.subscribe()
    }

    /// Downgrade to a handle that does not keep the entity alive.
    pub fn downgrade(&self) -> WeakEntity<T> {
        WeakEntity {
            inner: Arc::downgrade(&self.inner),
            tx: self.tx.clone(),
        }
    }
}

impl<T: ?Sized + Send + Sync> WeakEntity<T> {
    /// Upgrade to a strong handle if the entity is still alive.
    pub fn upgrade(&self) -> Option<Entity<T>> {
        self.inner.upgrade().map(|inner| Entity {
            inner,
            tx: self.tx.clone(),
        })
    }

    /// Mutate the entity if it is still alive.
    pub fn update<F, R>(&self, f: F) -> Option<crate::Result<R>>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.upgrade().map(|entity| entity.update(f))
    }
}

impl<T: ?Sized + Send + Sync> Clone for Entity<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            tx: self.tx.clone(),
        }
    }
}

impl<T: ?Sized + Send + Sync> Clone for WeakEntity<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
            tx: self.tx.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_notifies_subscribers() {
        let entity = Entity::new(0u32);
        let mut rx = entity.subscribe();
        assert!(!rx.has_changed().unwrap());

        entity.update(|v| *v += 1).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(entity.read(|v| *v).unwrap(), 1);
    }

    #[test]
    fn weak_handle_does_not_keep_entity_alive() {
        let entity = Entity::new(String::from("hello"));
        let weak = entity.downgrade();
        assert!(weak.upgrade().is_some());

        drop(entity);
        assert!(weak.upgrade().is_none());
        assert!(weak.update(|s| s.clear()).is_none());
    }
}
