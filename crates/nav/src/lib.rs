//! `milldesk-nav` — role-scoped navigation resolution and shell interaction.
//!
//! The resolver is a pure function over a declarative module registry; trees
//! are recomputed and discarded on every resolution, never mutated in place.
//! The shell module owns the presentation-side logic a layout needs: mobile
//! bucketing, active-item matching, and sidebar expansion state.

pub mod item;
pub mod registry;
pub mod resolver;
pub mod shell;

pub use item::NavItem;
pub use resolver::resolve;
pub use shell::{bucket_for_mobile, is_active, MobileBuckets, SidebarState};
