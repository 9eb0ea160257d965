//! The department ACL: the static table operators edit to add a module.

use milldesk_core::{paths, Department};

/// Access rule for one protected path prefix.
///
/// `departments` semantics for `User` principals:
/// - `None` — protected but unrestricted (any session).
/// - `Some([..])` — allowed only when the user's department is a member.
/// - `Some([])` — company-only.
///
/// Company principals bypass department checks on every protected prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleAccessRule {
    pub prefix: &'static str,
    pub departments: Option<&'static [Department]>,
}

const fn rule(prefix: &'static str, departments: Option<&'static [Department]>) -> ModuleAccessRule {
    ModuleAccessRule { prefix, departments }
}

/// Protected prefix → allowed-department set.
pub const RULES: &[ModuleAccessRule] = &[
    rule(paths::HOME, None),
    rule(paths::HR, Some(&[Department::Hr])),
    rule(paths::STORE, Some(&[Department::Store])),
    rule(paths::PPC, Some(&[Department::Ppc])),
    rule(paths::ACCOUNTS, Some(&[Department::Accounts])),
    rule(paths::REPORTS, Some(&[Department::Accounts, Department::Reports])),
    rule(paths::SETTINGS, Some(&[])),
];

/// The rule governing `path`, if any. Longest matching prefix wins, so
/// `/dashboard/store` is governed by the Store rule, not the Dashboard one.
pub fn matching_rule(path: &str) -> Option<&'static ModuleAccessRule> {
    RULES
        .iter()
        .filter(|rule| paths::under_prefix(path, rule.prefix))
        .max_by_key(|rule| rule.prefix.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_specific_prefix_wins() {
        let rule = matching_rule("/dashboard/store/issues").unwrap();
        assert_eq!(rule.prefix, paths::STORE);

        let rule = matching_rule("/dashboard").unwrap();
        assert_eq!(rule.prefix, paths::HOME);
    }

    #[test]
    fn unprotected_paths_have_no_rule() {
        assert!(matching_rule("/login").is_none());
        assert!(matching_rule("/").is_none());
        assert!(matching_rule("/health").is_none());
    }
}
