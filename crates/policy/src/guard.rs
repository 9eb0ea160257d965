//! Route-guard decision, evaluated once per incoming request at the edge.
//!
//! The guard reads only the edge-visible session fields and never mutates
//! them; a very recent client-side login or logout may therefore lag by one
//! round trip, which is accepted because the guard re-evaluates on every
//! navigation.

use serde::Serialize;

use milldesk_core::{paths, Department, PrincipalType};

use crate::access::is_allowed;
use crate::acl::matching_rule;

/// Edge-visible session fields as the interception layer sees them.
///
/// Built from raw string key/values; anything missing or malformed reads as
/// absent — the guard itself never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSession {
    pub token: Option<String>,
    pub principal_type: Option<PrincipalType>,
    pub department: Option<Department>,
}

impl EdgeSession {
    /// Lenient construction from raw stored strings.
    pub fn from_raw(
        token: Option<&str>,
        user_type: Option<&str>,
        department: Option<&str>,
    ) -> Self {
        Self {
            token: token
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            principal_type: user_type.and_then(PrincipalType::parse),
            department: department.and_then(Department::parse),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Terminal outcome of the guard. Redirect outcomes are soft control flow,
/// not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    /// Request proceeds to the requested path unmodified.
    Allow,
    /// Protected path with no usable session.
    RedirectToLogin,
    /// Valid session, wrong department; sent to the default landing path.
    RedirectToHome,
}

impl RouteDecision {
    /// Redirect target, if this decision is a redirect.
    pub fn target(&self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(paths::LOGIN),
            Self::RedirectToHome => Some(paths::HOME),
        }
    }
}

/// Decide the fate of a request for `path` given the edge-visible session.
///
/// Rules, in order:
/// 1. `/login` with a token already present → home (no re-authentication).
/// 2. Unprotected path → allow.
/// 3. Protected path without a token → login.
/// 4. Token but no readable principal type → login (fail closed).
/// 5. Company → allow; User → allow or home per the access policy.
pub fn decide(path: &str, edge: &EdgeSession) -> RouteDecision {
    if paths::under_prefix(path, paths::LOGIN) {
        return if edge.has_token() {
            RouteDecision::RedirectToHome
        } else {
            RouteDecision::Allow
        };
    }

    if matching_rule(path).is_none() {
        return RouteDecision::Allow;
    }

    if !edge.has_token() {
        return RouteDecision::RedirectToLogin;
    }

    match edge.principal_type {
        None => RouteDecision::RedirectToLogin,
        Some(PrincipalType::Company) => RouteDecision::Allow,
        Some(PrincipalType::User) => {
            if is_allowed(Some(PrincipalType::User), edge.department, path) {
                RouteDecision::Allow
            } else {
                RouteDecision::RedirectToHome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn user(dept: Option<Department>) -> EdgeSession {
        EdgeSession {
            token: Some("t-1".to_string()),
            principal_type: Some(PrincipalType::User),
            department: dept,
        }
    }

    #[test]
    fn no_token_on_protected_path_redirects_to_login() {
        let decision = decide(paths::HOME, &EdgeSession::default());
        assert_eq!(decision, RouteDecision::RedirectToLogin);
        assert_eq!(decision.target(), Some(paths::LOGIN));
    }

    #[test]
    fn hr_user_requesting_store_is_sent_home() {
        let decision = decide(paths::STORE, &user(Some(Department::Hr)));
        assert_eq!(decision, RouteDecision::RedirectToHome);
        assert_eq!(decision.target(), Some(paths::HOME));
    }

    #[test]
    fn token_on_login_path_is_sent_home() {
        let edge = EdgeSession::from_raw(Some("t-1"), None, None);
        assert_eq!(decide(paths::LOGIN, &edge), RouteDecision::RedirectToHome);
    }

    #[test]
    fn login_path_without_token_is_allowed() {
        assert_eq!(decide(paths::LOGIN, &EdgeSession::default()), RouteDecision::Allow);
    }

    #[test]
    fn unprotected_path_is_allowed_without_a_session() {
        assert_eq!(decide("/health", &EdgeSession::default()), RouteDecision::Allow);
    }

    #[test]
    fn company_token_is_allowed_everywhere_protected() {
        let edge = EdgeSession::from_raw(Some("t-1"), Some("company"), None);
        for rule in crate::acl::RULES {
            assert_eq!(decide(rule.prefix, &edge), RouteDecision::Allow);
        }
    }

    #[test]
    fn token_with_unreadable_principal_type_fails_closed() {
        let edge = EdgeSession::from_raw(Some("t-1"), Some("owner"), Some("hr"));
        assert_eq!(decide(paths::HR, &edge), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn user_in_department_proceeds() {
        let decision = decide("/dashboard/store?tab=bills", &user(Some(Department::Store)));
        assert_eq!(decision, RouteDecision::Allow);
    }

    #[test]
    fn blank_token_reads_as_absent() {
        let edge = EdgeSession::from_raw(Some("   "), Some("user"), Some("hr"));
        assert!(!edge.has_token());
        assert_eq!(decide(paths::HR, &edge), RouteDecision::RedirectToLogin);
    }

    proptest! {
        /// Property: the guard is total — any path and any raw field combo
        /// terminates in one of the three outcomes without panicking.
        #[test]
        fn guard_is_total(
            path in "\\PC{0,80}",
            token in proptest::option::of("\\PC{0,20}"),
            user_type in proptest::option::of("\\PC{0,10}"),
            dept in proptest::option::of("\\PC{0,10}"),
        ) {
            let edge = EdgeSession::from_raw(
                token.as_deref(),
                user_type.as_deref(),
                dept.as_deref(),
            );
            let _ = decide(&path, &edge);
        }
    }
}
