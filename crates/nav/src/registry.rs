//! Declarative module registry.
//!
//! These tables are the only place modules, priorities, and curated mobile
//! subsets are declared; the resolver and shell consume them, conditionals
//! stay out of the call sites.

use milldesk_core::{paths, Department};

use crate::item::NavItem;

fn dashboard() -> NavItem {
    NavItem::new(paths::HOME, "Dashboard", "home").priority(1)
}

fn hr() -> NavItem {
    NavItem::new(paths::HR, "HR", "users").priority(2)
}

fn store() -> NavItem {
    NavItem::new(paths::STORE, "Store", "package")
        .priority(3)
        .children(vec![
            NavItem::new("/dashboard/store?tab=home", "Home", "home"),
            NavItem::new(
                "/dashboard/store?tab=material-issue",
                "Material Issue",
                "clipboard",
            ),
            NavItem::new("/dashboard/store?tab=bills", "Bills", "receipt"),
            NavItem::new("/dashboard/store?tab=masters", "Masters", "database"),
        ])
}

fn ppc() -> NavItem {
    NavItem::new(paths::PPC, "PPC", "calendar")
        .priority(4)
        .children(vec![
            NavItem::new("/dashboard/ppc?tab=home", "Home", "home"),
            NavItem::new("/dashboard/ppc?tab=schedule", "Schedule", "clock"),
            NavItem::new("/dashboard/ppc?tab=machines", "Machines", "cpu"),
            NavItem::new("/dashboard/ppc?tab=masters", "Masters", "database"),
        ])
}

fn accounts() -> NavItem {
    NavItem::new(paths::ACCOUNTS, "Accounts", "credit-card").priority(5)
}

fn reports() -> NavItem {
    NavItem::new(paths::REPORTS, "Reports", "bar-chart").priority(6)
}

fn settings() -> NavItem {
    NavItem::new(paths::SETTINGS, "Settings", "settings").priority(7)
}

/// Full module list a company principal sees.
pub fn company_modules() -> Vec<NavItem> {
    vec![
        dashboard(),
        hr(),
        store(),
        ppc(),
        accounts(),
        reports(),
        settings(),
    ]
}

/// Module list for a user of the given department.
pub fn department_modules(department: Department) -> Vec<NavItem> {
    let own = match department {
        Department::Hr => hr(),
        Department::Store => store(),
        Department::Ppc => ppc(),
        Department::Accounts => accounts(),
        Department::Reports => reports(),
    };
    vec![dashboard(), own]
}

/// One-item list pointing at the default landing path, used when the
/// department is absent or unrecognized. The shell never renders an empty
/// menu.
pub fn fallback() -> Vec<NavItem> {
    vec![dashboard()]
}

/// Hand-curated mobile subset for a module that carries sub-items: the
/// listed views go straight into the bottom bar, the rest overflow.
#[derive(Debug, Clone, Copy)]
pub struct MobileOverride {
    pub prefix: &'static str,
    pub visible_views: &'static [&'static str],
}

pub const MOBILE_OVERRIDES: &[MobileOverride] = &[
    MobileOverride {
        prefix: paths::STORE,
        visible_views: &["home", "material-issue", "bills"],
    },
    MobileOverride {
        prefix: paths::PPC,
        visible_views: &["home", "schedule", "machines"],
    },
];
