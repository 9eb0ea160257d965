use serde::{Deserialize, Serialize};
use thiserror::Error;

use milldesk_core::{Department, PrincipalType};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("bearer token must not be empty")]
    EmptyToken,
}

/// Opaque bearer credential.
///
/// The client never inspects the token; expiry is enforced by the backend.
/// Non-emptiness is the only validation this layer performs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Result<Self, SessionError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Credentials stay out of logs.
impl core::fmt::Debug for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Token(***)")
    }
}

/// The authenticated identity for the current browser context.
///
/// Created atomically on login via [`Session::from_login`], destroyed
/// atomically on logout; there is no field-level update path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Token,
    pub principal_type: PrincipalType,
    /// Present only for `User` principals with a recognized department.
    pub department: Option<Department>,
    pub display_name: String,
}

/// Loosely-typed identity payload as returned by the login collaborator.
///
/// This shape exists only at the boundary: it is coerced into the strict
/// [`Session`] before anything is persisted, and never reaches the
/// navigation resolver. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityPayload {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub department: Option<String>,
}

impl Session {
    /// Validate and coerce a login response into the strict session shape.
    ///
    /// Department strings the fixed set does not contain coerce to `None`;
    /// a `Company` principal never carries a department.
    pub fn from_login(
        token: impl Into<String>,
        principal_type: PrincipalType,
        identity: &IdentityPayload,
    ) -> Result<Self, SessionError> {
        let token = Token::new(token)?;

        let department = match principal_type {
            PrincipalType::Company => None,
            PrincipalType::User => identity
                .department
                .as_deref()
                .and_then(Department::parse),
        };

        let display_name = identity
            .name
            .clone()
            .or_else(|| identity.company_name.clone())
            .unwrap_or_default();

        Ok(Self {
            token,
            principal_type,
            department,
            display_name,
        })
    }
}
