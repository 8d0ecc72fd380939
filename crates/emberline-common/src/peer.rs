use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a peer on the mesh.
///
/// Opaque string handed to us by the transport layer; we never parse it,
/// only compare and hash it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerId(String);

impl PeerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PeerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PeerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_as_str() {
        let id = PeerId::new("abc123");
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn from_str_and_string() {
        let a = PeerId::from("peer-1");
        let b = PeerId::from("peer-1".to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_transparent() {
        let id = PeerId::new("abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");
        let back: PeerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn hashes_into_set() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PeerId::new("a"));
        set.insert(PeerId::new("a"));
        assert_eq!(set.len(), 1);
    }
}
