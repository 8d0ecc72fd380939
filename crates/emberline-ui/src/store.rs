//! Snapshot store plumbing shared by every surface.

use tokio::sync::watch;

/// Holder of one surface's authoritative state.
///
/// The store keeps the current snapshot in a `watch` channel: reducers
/// replace it wholesale, subscribers observe the latest value. Snapshots
/// are never mutated in place — `update` clones the current one, applies
/// the closure, and publishes the result as a fresh snapshot.
pub struct Store<S> {
    tx: watch::Sender<S>,
}

impl<S: Clone> Store<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Replace the snapshot wholesale and publish to all subscribers.
    pub fn replace(&self, next: S) {
        self.tx.send_replace(next);
    }

    /// Clone the current snapshot, apply `f`, publish the result.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        let mut next = self.tx.borrow().clone();
        f(&mut next);
        self.tx.send_replace(next);
    }

    /// Subscribe to snapshot replacements. The receiver always yields the
    /// latest snapshot; intermediate ones may be skipped.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }
}

impl<S: Clone + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter {
        value: u32,
        label: String,
    }

    #[test]
    fn snapshot_returns_initial_state() {
        let store = Store::new(Counter {
            value: 7,
            label: "seven".into(),
        });
        assert_eq!(store.snapshot().value, 7);
    }

    #[test]
    fn replace_publishes_to_subscribers() {
        let store = Store::new(Counter::default());
        let rx = store.subscribe();

        store.replace(Counter {
            value: 1,
            label: "one".into(),
        });

        assert_eq!(rx.borrow().value, 1);
        assert_eq!(rx.borrow().label, "one");
    }

    #[test]
    fn update_produces_fresh_snapshot() {
        let store = Store::new(Counter::default());
        let before = store.snapshot();

        store.update(|s| s.value += 1);

        // The earlier clone is untouched; the store holds a new snapshot.
        assert_eq!(before.value, 0);
        assert_eq!(store.snapshot().value, 1);
    }

    #[test]
    fn subscriber_sees_latest_snapshot_only() {
        let store = Store::new(Counter::default());
        let mut rx = store.subscribe();

        store.update(|s| s.value = 1);
        store.update(|s| s.value = 2);
        store.update(|s| s.value = 3);

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().value, 3);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn subscriber_wakes_on_replace() {
        let store = Store::new(Counter::default());
        let mut rx = store.subscribe();

        store.replace(Counter {
            value: 42,
            label: "answer".into(),
        });

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().value, 42);
    }
}
