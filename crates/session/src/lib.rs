//! `milldesk-session` — the authenticated session and its two storage domains.
//!
//! This crate is intentionally decoupled from HTTP: the gateway adapts the
//! [`EdgeStore`] trait onto cookies, tests use the in-memory stores. The only
//! write path for session state is [`SessionStore::persist`] /
//! [`SessionStore::clear`] — individual fields are never patched.

pub mod domains;
pub mod model;
pub mod store;

pub use domains::{ClientStore, EdgeStore, MemoryClientStore, MemoryEdgeStore, EDGE_TTL, keys};
pub use model::{IdentityPayload, Session, SessionError, Token};
pub use store::SessionStore;
