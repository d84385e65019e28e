use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use log::trace;

type Listener = dyn Fn() + Send + Sync;

#[derive(Default)]
struct Inner {
    next_id: u64,
    listeners: HashMap<String, Vec<(u64, Arc<Listener>)>>,
}

/// Named-signal fan out from point updates to interested entities.
#[derive(Clone, Default)]
pub struct Dispatcher {
    inner: Arc<Mutex<Inner>>,
}

impl Dispatcher {
    pub fn new() -> Dispatcher {
        Dispatcher::default()
    }

    /// Registers `listener` on `signal` until the returned handle is dropped.
    pub fn connect<F>(&self, signal: &str, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut inner = lock(&self.inner);

        let id = inner.next_id;
        inner.next_id += 1;
        inner
            .listeners
            .entry(signal.to_string())
            .or_default()
            .push((id, Arc::new(listener)));

        Subscription {
            inner: Arc::downgrade(&self.inner),
            signal: signal.to_string(),
            id,
        }
    }

    /// Invokes every listener on `signal`, returns how many were called.
    pub fn send(&self, signal: &str) -> usize {
        let listeners: Vec<Arc<Listener>> = match lock(&self.inner).listeners.get(signal) {
            Some(listeners) => listeners.iter().map(|(_, l)| l.clone()).collect(),
            None => return 0,
        };

        trace!("{signal} -> {} listener(s)", listeners.len());

        for listener in &listeners {
            listener();
        }

        listeners.len()
    }

    pub fn listener_count(&self, signal: &str) -> usize {
        lock(&self.inner)
            .listeners
            .get(signal)
            .map_or(0, Vec::len)
    }
}

#[must_use = "the listener is removed when the subscription is dropped"]
pub struct Subscription {
    inner: Weak<Mutex<Inner>>,
    signal: String,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let mut inner = lock(&inner);

        if let Some(listeners) = inner.listeners.get_mut(&self.signal) {
            listeners.retain(|(id, _)| *id != self.id);
            if listeners.is_empty() {
                inner.listeners.remove(&self.signal);
            }
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_send_reaches_connected_listeners() {
        let dispatcher = Dispatcher::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let first = calls.clone();
        let _a = dispatcher.connect("signal", move || {
            first.fetch_add(1, Ordering::SeqCst);
        });
        let second = calls.clone();
        let _b = dispatcher.connect("signal", move || {
            second.fetch_add(10, Ordering::SeqCst);
        });

        assert_eq!(dispatcher.send("signal"), 2);
        assert_eq!(dispatcher.send("other"), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 11);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let dispatcher = Dispatcher::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let subscription = dispatcher.connect("signal", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let _other = dispatcher.connect("signal", || {});
        assert_eq!(dispatcher.listener_count("signal"), 2);

        drop(subscription);

        assert_eq!(dispatcher.listener_count("signal"), 1);
        dispatcher.send("signal");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_subscription_outlives_dispatcher() {
        let dispatcher = Dispatcher::new();
        let subscription = dispatcher.connect("signal", || {});

        drop(dispatcher);
        drop(subscription);
    }

    #[test]
    fn test_listener_may_connect_while_sending() {
        let dispatcher = Dispatcher::new();
        let nested = dispatcher.clone();
        let held = Arc::new(Mutex::new(Vec::new()));

        let store = held.clone();
        let _subscription = dispatcher.connect("signal", move || {
            let subscription = nested.connect("late", || {});
            store.lock().unwrap().push(subscription);
        });

        dispatcher.send("signal");
        assert_eq!(dispatcher.listener_count("late"), 1);
    }
}
