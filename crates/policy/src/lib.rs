//! `milldesk-policy` — pure access rules and the route-guard decision.
//!
//! Everything here is total and side-effect free: no IO, no panics, no
//! storage. Both the edge guard and the gateway's in-handler re-check call
//! into this crate, so there is exactly one source of truth for who may see
//! which module.

pub mod access;
pub mod acl;
pub mod guard;

pub use access::{is_allowed, is_protected};
pub use acl::{matching_rule, ModuleAccessRule, RULES};
pub use guard::{decide, EdgeSession, RouteDecision};
