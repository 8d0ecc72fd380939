//! Application composition point.
//!
//! Builds every store and the notification tracker in one place and hands
//! out shared references, so nothing in the app reaches for globals.

use std::sync::Arc;

use chrono::Duration;
use emberline_common::NotificationTracker;
use emberline_config::EmberlineConfig;
use emberline_ui::{
    AboutState, AboutStore, LocationNotesState, LocationNotesStore, ThemePreference, TorStatus,
    UserSheetState, UserSheetStore,
};

use crate::alerts::NetworkAlertPolicy;

pub struct AppContext {
    pub config: EmberlineConfig,
    pub about: AboutStore,
    pub location_notes: LocationNotesStore,
    pub user_sheet: UserSheetStore,
    pub tracker: Arc<NotificationTracker>,
    pub alerts: NetworkAlertPolicy,
}

impl AppContext {
    /// Seed all stores from config and wire the notification plumbing.
    pub fn new(config: EmberlineConfig) -> Self {
        let about = AboutStore::new(AboutState {
            version_name: env!("CARGO_PKG_VERSION").to_string(),
            theme_preference: ThemePreference::from(config.appearance.theme.as_str()),
            pow_enabled: config.privacy.pow_enabled,
            pow_difficulty: config.privacy.pow_difficulty,
            tor_status: TorStatus::Disconnected,
        });

        let location_notes = LocationNotesStore::new(LocationNotesState {
            nickname: config.profile.nickname.clone(),
            ..LocationNotesState::default()
        });

        let user_sheet = UserSheetStore::new(UserSheetState {
            my_nickname: config.profile.nickname.clone(),
            ..UserSheetState::default()
        });

        let tracker = Arc::new(NotificationTracker::new());
        // Saturate rather than panic on intervals beyond chrono's range;
        // an absurdly large interval just means "alert once".
        let secs = i64::try_from(config.notifications.min_interval_secs).unwrap_or(i64::MAX);
        let min_interval = Duration::try_seconds(secs).unwrap_or(Duration::MAX);
        let alerts = NetworkAlertPolicy::new(
            config.notifications.network_alerts_enabled,
            min_interval,
            Arc::clone(&tracker),
        );

        Self {
            config,
            about,
            location_notes,
            user_sheet,
            tracker,
            alerts,
        }
    }
}
