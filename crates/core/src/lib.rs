//! `milldesk-core` — shared vocabulary for the session/navigation layer.
//!
//! This crate contains **pure** value types (no storage or HTTP concerns).

pub mod department;
pub mod error;
pub mod paths;
pub mod principal;

pub use department::Department;
pub use error::{CoreError, CoreResult};
pub use principal::PrincipalType;
