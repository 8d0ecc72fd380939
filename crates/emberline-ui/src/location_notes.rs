//! State and view model for the location-channel notes surface.
//!
//! Notes are short messages pinned to a geohash channel. The store tracks
//! the active geohash, the notes fetched for it, and the lookup table that
//! turns neighboring geohashes into human-readable place names.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fetch lifecycle for the active channel's notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LocationNotesState {
    pub notes: Vec<String>,
    /// Geohash of the channel currently in view.
    pub geohash: String,
    pub load_state: LoadState,
    pub error_message: Option<String>,
    /// Set once the first fetch for this channel completes, success or not.
    pub initial_load_complete: bool,
    /// Geohash -> display name (e.g. "9q8yy" -> "San Francisco").
    pub location_names: HashMap<String, String>,
    /// Nearby geohash channels the user may switch to.
    pub available_channels: Vec<String>,
    pub nickname: String,
    /// Whether the store currently holds a live subscription for updates.
    /// Operational detail; the view never renders it.
    pub subscription_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationNotesViewModel {
    pub notes: Vec<String>,
    pub geohash: String,
    pub load_state: LoadState,
    pub error_message: Option<String>,
    pub initial_load_complete: bool,
    pub location_names: HashMap<String, String>,
    pub available_channels: Vec<String>,
    pub nickname: String,
}

/// Project a notes snapshot into its view model.
///
/// Drops the subscription flag; everything else is copied unchanged.
pub fn project(state: &LocationNotesState) -> LocationNotesViewModel {
    LocationNotesViewModel {
        notes: state.notes.clone(),
        geohash: state.geohash.clone(),
        load_state: state.load_state,
        error_message: state.error_message.clone(),
        initial_load_complete: state.initial_load_complete,
        location_names: state.location_names.clone(),
        available_channels: state.available_channels.clone(),
        nickname: state.nickname.clone(),
    }
}
