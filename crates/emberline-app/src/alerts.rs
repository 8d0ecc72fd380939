//! Network-activity alert policy.
//!
//! The tracker in `emberline-common` records facts; this policy decides
//! whether the next alert fires. Two suppression rules: a peer that has
//! already triggered an alert never triggers another, and two alerts must
//! be at least `min_interval` apart.

use chrono::{DateTime, Duration, Utc};
use emberline_common::{NotificationTracker, PeerId};
use std::sync::Arc;
use tracing::debug;

pub struct NetworkAlertPolicy {
    enabled: bool,
    min_interval: Duration,
    tracker: Arc<NotificationTracker>,
}

impl NetworkAlertPolicy {
    pub fn new(enabled: bool, min_interval: Duration, tracker: Arc<NotificationTracker>) -> Self {
        Self {
            enabled,
            min_interval,
            tracker,
        }
    }

    /// Should an alert fire for this peer at time `now`?
    ///
    /// The caller supplies `now` so the decision is reproducible; nothing
    /// here reads the clock.
    pub fn should_alert(&self, peer: &PeerId, now: DateTime<Utc>) -> bool {
        if !self.enabled {
            return false;
        }
        if self.tracker.has_seen_peer(peer) {
            debug!("suppressing alert for already-seen peer {peer}");
            return false;
        }
        match self.tracker.last_network_notification() {
            // Never alerted before: always pass the interval check.
            None => true,
            Some(last) => {
                let passed = now - last >= self.min_interval;
                if !passed {
                    debug!("suppressing alert for {peer}: inside throttle window");
                }
                passed
            }
        }
    }

    /// Record that an alert fired for this peer at time `now`.
    pub fn record_alert(&self, peer: PeerId, now: DateTime<Utc>) {
        self.tracker.mark_peer_seen(peer);
        self.tracker.set_last_network_notification(now);
    }
}
