//! Role-scoped navigation resolution.

use milldesk_core::{Department, PrincipalType};

use crate::item::NavItem;
use crate::registry;

/// Resolve the ordered navigation tree for a principal.
///
/// Deterministic and total: companies get the full registry, users get
/// their department's list, anyone else gets the one-item fallback — the
/// result is never empty. Siblings sort ascending by priority, absent
/// priority last, stable on ties. Children keep their declared order.
pub fn resolve(principal_type: PrincipalType, department: Option<Department>) -> Vec<NavItem> {
    let mut items = match principal_type {
        PrincipalType::Company => registry::company_modules(),
        PrincipalType::User => department
            .map(registry::department_modules)
            .unwrap_or_else(registry::fallback),
    };

    items.sort_by_key(|item| item.priority.unwrap_or(u32::MAX));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use milldesk_core::paths;
    use proptest::prelude::*;

    #[test]
    fn company_sees_all_seven_modules_in_priority_order() {
        let items = resolve(PrincipalType::Company, None);
        assert_eq!(items.len(), 7);

        let priorities: Vec<u32> = items.iter().map(|i| i.priority.unwrap()).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(items[0].path, paths::HOME);
        assert_eq!(items[6].path, paths::SETTINGS);
    }

    #[test]
    fn department_user_sees_dashboard_plus_own_module() {
        let items = resolve(PrincipalType::User, Some(Department::Store));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].path, paths::HOME);
        assert_eq!(items[1].path, paths::STORE);
        assert_eq!(items[1].children.len(), 4);
    }

    #[test]
    fn unknown_department_resolves_to_the_fallback_item() {
        let items = resolve(PrincipalType::User, None);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].path, paths::HOME);
    }

    #[test]
    fn nesting_is_at_most_one_level_deep() {
        for item in resolve(PrincipalType::Company, None) {
            for child in &item.children {
                assert!(child.children.is_empty());
            }
        }
    }

    proptest! {
        /// Property: resolution is deterministic and never empty, for every
        /// principal/department combination.
        #[test]
        fn deterministic_and_never_empty(
            company in proptest::bool::ANY,
            dept in proptest::option::of(0usize..5),
        ) {
            let principal = if company { PrincipalType::Company } else { PrincipalType::User };
            let dept = dept.map(|i| Department::ALL[i]);

            let first = resolve(principal, dept);
            let second = resolve(principal, dept);

            prop_assert!(!first.is_empty());
            prop_assert_eq!(first, second);
        }
    }
}
