//! Listeners for events that move the caret on screen.
//!
//! A subscription is a guard: the handler stays registered exactly as long
//! as the [`ViewportSubscription`] is alive.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    CaretMoved,
    Resized,
    Scrolled,
}

type Handler = Box<dyn Fn(ViewportEvent) + Send>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: BTreeMap<u64, Handler>,
}

#[derive(Clone, Default)]
pub struct ViewportListeners {
    inner: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for ViewportListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportListeners")
            .field("active", &self.len())
            .finish()
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ViewportListeners {
    /// Registers `handler` until the returned guard is dropped.
    ///
    /// Handlers run while the registry is locked and must not subscribe or
    /// emit themselves.
    #[must_use = "dropping the subscription unregisters the handler immediately"]
    pub fn subscribe(
        &self,
        handler: impl Fn(ViewportEvent) + Send + 'static,
    ) -> ViewportSubscription {
        let mut registry = lock(&self.inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.insert(id, Box::new(handler));
        tracing::trace!(id, "viewport listener registered");
        ViewportSubscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Runs every live handler. Returns how many ran.
    pub fn emit(&self, event: ViewportEvent) -> usize {
        let registry = lock(&self.inner);
        for handler in registry.handlers.values() {
            handler(event);
        }
        registry.handlers.len()
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct ViewportSubscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl std::fmt::Debug for ViewportSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportSubscription")
            .field("id", &self.id)
            .finish()
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).handlers.remove(&self.id);
            tracing::trace!(id = self.id, "viewport listener released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_handler_runs_until_guard_dropped() {
        let listeners = ViewportListeners::default();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let guard = listeners.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(listeners.emit(ViewportEvent::Resized), 1);
        assert_eq!(listeners.emit(ViewportEvent::Scrolled), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        drop(guard);
        assert_eq!(listeners.emit(ViewportEvent::CaretMoved), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_guards_are_independent() {
        let listeners = ViewportListeners::default();
        let a = listeners.subscribe(|_| {});
        let b = listeners.subscribe(|_| {});
        assert_eq!(listeners.len(), 2);
        drop(a);
        assert_eq!(listeners.emit(ViewportEvent::Resized), 1);
        drop(b);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_guard_outliving_registry_is_harmless() {
        let listeners = ViewportListeners::default();
        let guard = listeners.subscribe(|_| {});
        drop(listeners);
        drop(guard);
    }
}
