//! Shared record of network notification activity.
//!
//! Tracks when the user was last alerted about network activity and which
//! peers have already triggered an alert. The tracker stores facts only;
//! whether to suppress the next alert is decided by whoever holds it
//! (see the alert policy in the app crate).

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use crate::peer::PeerId;

#[derive(Debug, Default)]
struct Inner {
    /// `None` until the first network alert fires.
    last_network_notification: Option<DateTime<Utc>>,
    seen_peers: HashSet<PeerId>,
}

/// Process-wide notification bookkeeping, shared as `Arc<NotificationTracker>`
/// from the composition point.
///
/// All access goes through locking methods; no field is reachable for direct
/// mutation. Timestamps are caller-supplied, so the tracker itself never
/// reads the clock and does not enforce monotonicity.
#[derive(Debug, Default)]
pub struct NotificationTracker {
    inner: Mutex<Inner>,
}

impl NotificationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the last network alert fired, or `None` if none has yet.
    pub fn last_network_notification(&self) -> Option<DateTime<Utc>> {
        self.lock().last_network_notification
    }

    /// Unconditionally replace the last-alert timestamp.
    pub fn set_last_network_notification(&self, at: DateTime<Utc>) {
        self.lock().last_network_notification = Some(at);
    }

    /// Record that a peer has triggered an alert. Returns `true` if the
    /// peer was not already recorded.
    pub fn mark_peer_seen(&self, peer: PeerId) -> bool {
        self.lock().seen_peers.insert(peer)
    }

    pub fn has_seen_peer(&self, peer: &PeerId) -> bool {
        self.lock().seen_peers.contains(peer)
    }

    /// Drop a peer from the seen set. Returns `true` if it was present.
    pub fn forget_peer(&self, peer: &PeerId) -> bool {
        self.lock().seen_peers.remove(peer)
    }

    pub fn seen_peer_count(&self) -> usize {
        self.lock().seen_peers.len()
    }

    pub fn clear_seen_peers(&self) {
        self.lock().seen_peers.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Every critical section leaves Inner valid, so a poisoned lock
        // still holds usable state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
