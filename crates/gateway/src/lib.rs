//! HTTP gateway: the edge where sessions are established, guarded, and
//! turned into navigation.

pub mod app;
pub mod backend;
pub mod context;
pub mod cookies;
pub mod middleware;
