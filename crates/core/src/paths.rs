//! Canonical route paths and path-matching helpers.
//!
//! Every other crate matches against these constants; nothing re-derives a
//! path string locally.

/// Login page / re-authentication target.
pub const LOGIN: &str = "/login";

/// Default authenticated landing path; soft-denials redirect here.
pub const HOME: &str = "/dashboard";

pub const HR: &str = "/dashboard/hr";
pub const STORE: &str = "/dashboard/store";
pub const PPC: &str = "/dashboard/ppc";
pub const ACCOUNTS: &str = "/dashboard/accounts";
pub const REPORTS: &str = "/dashboard/reports";
pub const SETTINGS: &str = "/dashboard/settings";

/// Query parameter distinguishing sibling views under one module.
pub const VIEW_PARAM: &str = "tab";

/// View selected when a module path carries no `tab` parameter.
pub const DEFAULT_VIEW: &str = "home";

/// True when `path` is `prefix` itself or lies under it (`prefix` + `/`).
///
/// Matching is segment-aware: `/dashboard/store` is not a prefix of
/// `/dashboard/storefront`.
pub fn under_prefix(path: &str, prefix: &str) -> bool {
    let path = strip_query(path);
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

/// Split a path into its base and optional view-selector value.
///
/// `/dashboard/store?tab=bills` → `("/dashboard/store", Some("bills"))`.
pub fn split_view(path: &str) -> (&str, Option<&str>) {
    match path.split_once('?') {
        None => (path, None),
        Some((base, query)) => {
            let view = query
                .split('&')
                .find_map(|pair| pair.strip_prefix(VIEW_PARAM)?.strip_prefix('='));
            (base, view.filter(|v| !v.is_empty()))
        }
    }
}

fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(base, _)| base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_is_segment_aware() {
        assert!(under_prefix("/dashboard/store", STORE));
        assert!(under_prefix("/dashboard/store/issues/42", STORE));
        assert!(!under_prefix("/dashboard/storefront", STORE));
        assert!(!under_prefix("/dashboard", STORE));
    }

    #[test]
    fn prefix_match_ignores_query() {
        assert!(under_prefix("/dashboard/store?tab=bills", STORE));
    }

    #[test]
    fn split_view_extracts_tab() {
        assert_eq!(split_view("/dashboard/store?tab=bills"), (STORE, Some("bills")));
        assert_eq!(split_view("/dashboard/store"), (STORE, None));
        assert_eq!(split_view("/dashboard/store?tab="), (STORE, None));
        assert_eq!(
            split_view("/dashboard/ppc?page=2&tab=schedule"),
            (PPC, Some("schedule"))
        );
    }
}
