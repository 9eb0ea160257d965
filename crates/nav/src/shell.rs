//! Shell interaction logic: the non-visual part of the responsive layout.
//!
//! Mobile gets a bounded bottom bar plus an overflow menu; desktop gets a
//! sidebar whose sub-trees expand per parent and auto-expand under the
//! current path.

use std::collections::BTreeSet;

use serde::Serialize;

use milldesk_core::paths;

use crate::item::NavItem;
use crate::registry::MOBILE_OVERRIDES;

/// Top-level items shown directly in the mobile bottom bar outside a
/// curated module context.
pub const MOBILE_VISIBLE_LIMIT: usize = 4;

/// Mobile presentation split of a resolved tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileBuckets {
    pub visible: Vec<NavItem>,
    pub overflow: Vec<NavItem>,
}

/// Bucket resolved items for mobile given the current path.
///
/// Inside a module with a curated override (Store, PPC), the bottom bar
/// shows that module's hand-picked children and demotes its remaining
/// children to overflow. Everywhere else the first
/// [`MOBILE_VISIBLE_LIMIT`] top-level items are visible and the rest
/// overflow.
pub fn bucket_for_mobile(items: &[NavItem], current_path: &str) -> MobileBuckets {
    for over in MOBILE_OVERRIDES {
        if !paths::under_prefix(current_path, over.prefix) {
            continue;
        }
        let Some(module) = items
            .iter()
            .find(|item| item.path == over.prefix && !item.children.is_empty())
        else {
            continue;
        };

        let (visible, overflow) = module.children.iter().cloned().partition(|child| {
            paths::split_view(child.path)
                .1
                .is_some_and(|view| over.visible_views.contains(&view))
        });
        return MobileBuckets { visible, overflow };
    }

    let visible_len = items.len().min(MOBILE_VISIBLE_LIMIT);
    MobileBuckets {
        visible: items[..visible_len].to_vec(),
        overflow: items[visible_len..].to_vec(),
    }
}

/// Is the item at `item_path` active for `current_path`?
///
/// Plain paths match exactly or by path-prefix; view-selector paths match
/// when the bases agree and the item's `tab` equals the current one,
/// defaulting the current tab to the canonical default view.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    let (item_base, item_view) = paths::split_view(item_path);
    let (current_base, current_view) = paths::split_view(current_path);

    match item_view {
        Some(view) => {
            item_base == current_base && view == current_view.unwrap_or(paths::DEFAULT_VIEW)
        }
        None => paths::under_prefix(current_base, item_base),
    }
}

/// Desktop sidebar expansion state.
///
/// Each parent toggles independently; navigating under a parent's prefix
/// auto-expands it, one-way — route changes never collapse a sub-tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    expanded: BTreeSet<String>,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, parent_path: &str) -> bool {
        self.expanded.contains(parent_path)
    }

    /// User clicked a parent: flip its sub-tree.
    pub fn toggle(&mut self, parent_path: &str) {
        if !self.expanded.remove(parent_path) {
            self.expanded.insert(parent_path.to_string());
        }
    }

    /// Route changed: expand every parent whose prefix covers the current
    /// path. Expansion only — collapsing stays a user decision.
    pub fn sync_with_path(&mut self, items: &[NavItem], current_path: &str) {
        for item in items {
            if !item.children.is_empty() && paths::under_prefix(current_path, item.path) {
                self.expanded.insert(item.path.to_string());
            }
        }
    }
}
