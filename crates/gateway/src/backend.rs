//! External collaborators: the login service and the token check every
//! authorized resource call performs.
//!
//! The gateway treats both as opaque — it consumes `token`/`identity` from a
//! successful login and forwards the bearer token on resource calls. A
//! seeded in-memory directory stands in for dev and tests.

use std::collections::HashSet;
use std::sync::Mutex;

use thiserror::Error;

use milldesk_core::PrincipalType;
use milldesk_session::IdentityPayload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub principal_type: PrincipalType,
    pub user_id: String,
    pub password: String,
}

/// Successful login response: an opaque bearer token plus the loosely-typed
/// identity payload (coerced into a `Session` before persistence).
#[derive(Debug, Clone)]
pub struct LoginSuccess {
    pub token: String,
    pub identity: IdentityPayload,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthBackendError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

/// The authentication/resource backend boundary.
pub trait AuthBackend: Send + Sync {
    fn authenticate(&self, request: &LoginRequest) -> Result<LoginSuccess, AuthBackendError>;

    /// Is this bearer token still honored by the backend? Resource handlers
    /// call this per request; a `false` becomes a 401 and tears the session
    /// down.
    fn check_token(&self, token: &str) -> bool;
}

/// One credential the in-memory directory accepts.
#[derive(Debug, Clone)]
pub struct DirectoryAccount {
    pub principal_type: PrincipalType,
    pub user_id: String,
    pub password: String,
    pub identity: IdentityPayload,
}

/// In-memory directory for dev and tests. Tokens are minted as UUIDv7
/// strings and honored until revoked.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    accounts: Vec<DirectoryAccount>,
    issued: Mutex<HashSet<String>>,
}

impl StaticDirectory {
    pub fn new(accounts: Vec<DirectoryAccount>) -> Self {
        Self {
            accounts,
            issued: Mutex::new(HashSet::new()),
        }
    }

    /// Directory with one company account and one user per department.
    /// Dev convenience only; the gateway logs a warning when it is used.
    pub fn seeded_dev() -> Self {
        fn user(user_id: &str, name: &str, department: &str) -> DirectoryAccount {
            DirectoryAccount {
                principal_type: PrincipalType::User,
                user_id: user_id.to_string(),
                password: "mill".to_string(),
                identity: IdentityPayload {
                    name: Some(name.to_string()),
                    company_name: None,
                    department: Some(department.to_string()),
                },
            }
        }

        Self::new(vec![
            DirectoryAccount {
                principal_type: PrincipalType::Company,
                user_id: "acme".to_string(),
                password: "mill".to_string(),
                identity: IdentityPayload {
                    name: None,
                    company_name: Some("Acme Forgings".to_string()),
                    department: None,
                },
            },
            user("asha", "Asha", "hr"),
            user("ravi", "Ravi", "store"),
            user("meera", "Meera", "ppc"),
            user("vikram", "Vikram", "accounts"),
            user("sana", "Sana", "reports"),
        ])
    }

    /// Stop honoring a token, as the real backend does when it expires.
    pub fn revoke(&self, token: &str) {
        self.issued.lock().expect("directory lock").remove(token);
    }
}

impl AuthBackend for StaticDirectory {
    fn authenticate(&self, request: &LoginRequest) -> Result<LoginSuccess, AuthBackendError> {
        let account = self
            .accounts
            .iter()
            .find(|a| {
                a.principal_type == request.principal_type
                    && a.user_id == request.user_id
                    && a.password == request.password
            })
            .ok_or(AuthBackendError::InvalidCredentials)?;

        let token = uuid::Uuid::now_v7().to_string();
        self.issued
            .lock()
            .expect("directory lock")
            .insert(token.clone());

        Ok(LoginSuccess {
            token,
            identity: account.identity.clone(),
        })
    }

    fn check_token(&self, token: &str) -> bool {
        self.issued.lock().expect("directory lock").contains(token)
    }
}
