use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Functional department a `User` principal belongs to.
///
/// The set is fixed; identity payloads carrying anything else are treated as
/// having no department (and fall back to the default navigation).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Hr,
    Store,
    Ppc,
    Accounts,
    Reports,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Hr,
        Department::Store,
        Department::Ppc,
        Department::Accounts,
        Department::Reports,
    ];

    /// Canonical wire value, as persisted in the edge-visible domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::Store => "store",
            Self::Ppc => "ppc",
            Self::Accounts => "accounts",
            Self::Reports => "reports",
        }
    }

    /// Lenient parse: unrecognized or empty values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hr" => Some(Self::Hr),
            "store" => Some(Self::Store),
            "ppc" => Some(Self::Ppc),
            "accounts" => Some(Self::Accounts),
            "reports" => Some(Self::Reports),
            _ => None,
        }
    }
}

impl FromStr for Department {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::unrecognized(s.to_string()))
    }
}

impl core::fmt::Display for Department {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
