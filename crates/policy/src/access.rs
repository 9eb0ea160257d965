//! Pure access policy.
//!
//! - No IO
//! - No panics
//! - No business logic beyond the ACL lookup

use milldesk_core::{Department, PrincipalType};

use crate::acl::matching_rule;

/// True when `path` requires an active session.
pub fn is_protected(path: &str) -> bool {
    matching_rule(path).is_some()
}

/// May this principal render the module at `path`?
///
/// - `Company` → always, on every protected path.
/// - `User` → when the governing rule is unrestricted, or the user's
///   department is in the rule's set. Absent/unrecognized department is
///   denied on every restricted prefix.
/// - No principal (no session) → denied on every protected path.
///
/// Unprotected paths are always allowed; the guard never consults this
/// function for them, but totality keeps the contract simple.
pub fn is_allowed(
    principal: Option<PrincipalType>,
    department: Option<Department>,
    path: &str,
) -> bool {
    let Some(rule) = matching_rule(path) else {
        return true;
    };

    match principal {
        None => false,
        Some(PrincipalType::Company) => true,
        Some(PrincipalType::User) => match rule.departments {
            None => true,
            Some(allowed) => department.is_some_and(|dept| allowed.contains(&dept)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acl::RULES;
    use milldesk_core::paths;
    use proptest::prelude::*;

    #[test]
    fn company_is_allowed_on_every_protected_prefix() {
        for rule in RULES {
            assert!(is_allowed(Some(PrincipalType::Company), None, rule.prefix));
        }
    }

    #[test]
    fn user_outside_the_department_set_is_denied() {
        assert!(!is_allowed(
            Some(PrincipalType::User),
            Some(Department::Hr),
            paths::STORE
        ));
        assert!(!is_allowed(
            Some(PrincipalType::User),
            Some(Department::Store),
            paths::ACCOUNTS
        ));
    }

    #[test]
    fn user_in_the_department_set_is_allowed() {
        assert!(is_allowed(
            Some(PrincipalType::User),
            Some(Department::Store),
            "/dashboard/store?tab=bills"
        ));
        assert!(is_allowed(
            Some(PrincipalType::User),
            Some(Department::Reports),
            paths::REPORTS
        ));
        assert!(is_allowed(
            Some(PrincipalType::User),
            Some(Department::Accounts),
            paths::REPORTS
        ));
    }

    #[test]
    fn user_without_department_is_denied_on_restricted_prefixes_only() {
        assert!(!is_allowed(Some(PrincipalType::User), None, paths::HR));
        assert!(is_allowed(Some(PrincipalType::User), None, paths::HOME));
    }

    #[test]
    fn company_only_prefix_denies_every_user() {
        for dept in Department::ALL {
            assert!(!is_allowed(
                Some(PrincipalType::User),
                Some(dept),
                paths::SETTINGS
            ));
        }
        assert!(is_allowed(Some(PrincipalType::Company), None, paths::SETTINGS));
    }

    #[test]
    fn no_session_is_denied_on_protected_paths() {
        for rule in RULES {
            assert!(!is_allowed(None, None, rule.prefix));
        }
    }

    proptest! {
        /// Property: the policy is total — any path string yields a decision
        /// without panicking, and companies are never denied.
        #[test]
        fn total_and_company_never_denied(path in "\\PC{0,80}") {
            let _ = is_protected(&path);
            prop_assert!(
                !is_protected(&path)
                    || is_allowed(Some(PrincipalType::Company), None, &path)
            );
        }

        /// Property: a user is never allowed where their department is
        /// outside a restricted rule's set.
        #[test]
        fn restricted_rules_bind_users(idx in 0usize..RULES.len(), dept_idx in 0usize..5) {
            let rule = &RULES[idx];
            let dept = Department::ALL[dept_idx];
            if let Some(allowed) = rule.departments {
                let granted = is_allowed(Some(PrincipalType::User), Some(dept), rule.prefix);
                prop_assert_eq!(granted, allowed.contains(&dept));
            }
        }
    }
}
