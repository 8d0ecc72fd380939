//! State and view model for the peer list sheet.

use emberline_common::PeerId;
use serde::{Deserialize, Serialize};

/// One row in the peer sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerEntry {
    pub peer_id: PeerId,
    pub nickname: String,
    pub is_favorite: bool,
    pub is_blocked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserSheetState {
    pub peers: Vec<PeerEntry>,
    pub my_nickname: String,
    /// Whether the mesh transport currently has at least one live link.
    pub is_connected: bool,
    /// Geohash channel the sheet is scoped to, if any.
    pub geohash_channel: Option<String>,
    /// Favorite toggles written but not yet acknowledged by persistence.
    /// Operational detail; the sheet never renders it.
    pub pending_favorite_writes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSheetViewModel {
    pub peers: Vec<PeerEntry>,
    pub my_nickname: String,
    pub is_connected: bool,
    pub geohash_channel: Option<String>,
}

/// Project a peer sheet snapshot into its view model.
pub fn project(state: &UserSheetState) -> UserSheetViewModel {
    UserSheetViewModel {
        peers: state.peers.clone(),
        my_nickname: state.my_nickname.clone(),
        is_connected: state.is_connected,
        geohash_channel: state.geohash_channel.clone(),
    }
}
