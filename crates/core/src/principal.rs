use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Kind of authenticated principal.
///
/// A `Company` is the tenant owner/admin; a `User` is an employee belonging
/// to exactly one department. Department checks never apply to companies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalType {
    Company,
    User,
}

impl PrincipalType {
    /// Canonical wire value (`company` | `user`), as persisted in the
    /// edge-visible session domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::User => "user",
        }
    }

    /// Lenient parse used when reading stored session fields: unrecognized
    /// values yield `None` rather than an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "company" => Some(Self::Company),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

impl FromStr for PrincipalType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::unrecognized(s.to_string()))
    }
}

impl core::fmt::Display for PrincipalType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
