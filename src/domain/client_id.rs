//! Type-safe connection identifier.
//!
//! [`ClientId`] is a newtype wrapper around [`uuid::Uuid`] (v4) providing
//! type safety so that connection identifiers cannot be confused with other
//! UUIDs. Client ids are internal: they key the registry and appear in logs
//! but are never sent over the wire.

use std::fmt;

/// Unique identifier for one live WebSocket connection.
///
/// Wraps a UUID v4. Generated once when the connection registers and
/// immutable thereafter. Used as the dictionary key in
/// [`super::ClientRegistry`] and as the exclusion marker in broadcasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(uuid::Uuid);

impl ClientId {
    /// Creates a new random `ClientId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
