use milldesk_core::{Department, PrincipalType};
use milldesk_policy::EdgeSession;

/// Session context for a request, derived from the edge-visible domain by
/// the route guard and attached as a request extension on `Allow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    token: String,
    principal_type: PrincipalType,
    department: Option<Department>,
    display_name: Option<String>,
}

impl SessionContext {
    /// Build from the guard's edge snapshot; `None` when the snapshot has no
    /// usable session (unprotected paths are served without one).
    pub fn from_edge(edge: &EdgeSession, display_name: Option<String>) -> Option<Self> {
        Some(Self {
            token: edge.token.clone()?,
            principal_type: edge.principal_type?,
            department: edge.department,
            display_name,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn principal_type(&self) -> PrincipalType {
        self.principal_type
    }

    pub fn department(&self) -> Option<Department> {
        self.department
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}
