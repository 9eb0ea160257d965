use serde::Serialize;

/// A node in the resolved menu tree.
///
/// Registry entries are static; resolution clones them into a fresh tree.
/// Nesting is never more than one level deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Canonical address, optionally carrying a `?tab=` view selector.
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Ascending sort key among siblings; absent sorts last.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub const fn new(path: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self {
            path,
            label,
            icon,
            priority: None,
            children: Vec::new(),
        }
    }

    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }
}
