//! The two storage domains backing a session.
//!
//! The *edge-visible* domain holds string key/values with a bounded lifetime
//! and site-wide scope; the request-interception layer reads it before any
//! client code runs. The *client-only* domain holds structured values with no
//! expiry. Both are synchronous local stores — no network I/O, no blocking.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// Lifetime of every edge-visible session key.
pub const EDGE_TTL: Duration = Duration::from_secs(8 * 60 * 60);

/// Storage keys written by the session store.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER_TYPE: &str = "userType";
    pub const DEPARTMENT: &str = "department";
    pub const DISPLAY_NAME: &str = "displayName";
    /// Client-only: serialized identity object.
    pub const IDENTITY: &str = "identity";

    /// Every key the edge domain may hold.
    pub const EDGE: [&str; 4] = [TOKEN, USER_TYPE, DEPARTMENT, DISPLAY_NAME];

    /// Every key the client domain may hold.
    pub const CLIENT: [&str; 3] = [TOKEN, USER_TYPE, IDENTITY];
}

/// Write side of the edge-visible domain (string-only key/values).
///
/// Reads happen at the interception layer, one round trip later — the store
/// itself only ever writes. The gateway adapts this onto `Set-Cookie`.
pub trait EdgeStore {
    fn put(&mut self, key: &'static str, value: &str, ttl: Duration);
    fn delete(&mut self, key: &'static str);
}

/// The client-only domain: structured values, explicit-clear lifetime.
pub trait ClientStore {
    fn put(&mut self, key: &'static str, value: &str);
    fn delete(&mut self, key: &'static str);
    fn get(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EdgeEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-memory edge domain for tests and non-HTTP embeddings.
#[derive(Debug, Default)]
pub struct MemoryEdgeStore {
    entries: HashMap<&'static str, EdgeEntry>,
}

impl MemoryEdgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a key as the interception layer would, honoring expiry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_at(key, Utc::now())
    }

    pub fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<&str> {
        let entry = self.entries.get(key)?;
        (now < entry.expires_at).then_some(entry.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EdgeStore for MemoryEdgeStore {
    fn put(&mut self, key: &'static str, value: &str, ttl: Duration) {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        self.entries.insert(
            key,
            EdgeEntry {
                value: value.to_string(),
                expires_at: Utc::now() + ttl,
            },
        );
    }

    fn delete(&mut self, key: &'static str) {
        self.entries.remove(key);
    }
}

/// In-memory client domain for tests and non-HTTP embeddings.
#[derive(Debug, Default)]
pub struct MemoryClientStore {
    entries: HashMap<&'static str, String>,
}

impl MemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrite a raw value, bypassing the session store. Test hook for
    /// simulating corrupted storage.
    pub fn put_raw(&mut self, key: &'static str, value: &str) {
        self.entries.insert(key, value.to_string());
    }
}

impl ClientStore for MemoryClientStore {
    fn put(&mut self, key: &'static str, value: &str) {
        self.entries.insert(key, value.to_string());
    }

    fn delete(&mut self, key: &'static str) {
        self.entries.remove(key);
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_entries_expire() {
        let mut edge = MemoryEdgeStore::new();
        edge.put(keys::TOKEN, "t-1", EDGE_TTL);

        assert_eq!(edge.get(keys::TOKEN), Some("t-1"));

        let later = Utc::now() + TimeDelta::hours(9);
        assert_eq!(edge.get_at(keys::TOKEN, later), None);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut edge = MemoryEdgeStore::new();
        edge.delete(keys::TOKEN);
        edge.put(keys::TOKEN, "t-1", EDGE_TTL);
        edge.delete(keys::TOKEN);
        edge.delete(keys::TOKEN);
        assert!(edge.is_empty());
    }
}
