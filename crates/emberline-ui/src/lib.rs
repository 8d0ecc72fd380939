//! Unidirectional UI state for Emberline.
//!
//! Each surface owns a [`Store`](store::Store) that holds its current
//! immutable state snapshot and publishes replacements to subscribers.
//! A pure `project` function per surface maps a snapshot into the view
//! model the rendering layer consumes; rendering code never reaches back
//! into store state.

pub mod about;
pub mod location_notes;
pub mod store;
pub mod user_sheet;

pub use about::{AboutState, AboutViewModel, ThemePreference, TorStatus};
pub use location_notes::{LoadState, LocationNotesState, LocationNotesViewModel};
pub use store::Store;
pub use user_sheet::{PeerEntry, UserSheetState, UserSheetViewModel};

/// Store for the About settings surface.
pub type AboutStore = Store<AboutState>;
/// Store for the location-channel notes surface.
pub type LocationNotesStore = Store<LocationNotesState>;
/// Store for the peer list sheet.
pub type UserSheetStore = Store<UserSheetState>;
