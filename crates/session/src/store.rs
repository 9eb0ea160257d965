use serde::{Deserialize, Serialize};

use milldesk_core::{Department, PrincipalType};

use crate::domains::{keys, ClientStore, EdgeStore, EDGE_TTL};
use crate::model::{Session, Token};

/// Identity object serialized into the client-only domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredIdentity {
    display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    department: Option<Department>,
}

/// The one authoritative write path for session state.
///
/// `persist` and `clear` each touch both domains in a single call so that no
/// partial-session state is observable. Concurrent tabs are not coordinated;
/// last writer wins.
#[derive(Debug)]
pub struct SessionStore<E: EdgeStore, C: ClientStore> {
    edge: E,
    client: C,
}

impl<E: EdgeStore, C: ClientStore> SessionStore<E, C> {
    pub fn new(edge: E, client: C) -> Self {
        Self { edge, client }
    }

    /// Write the session to both domains.
    ///
    /// Token non-emptiness is already enforced by [`Token`]; every edge key
    /// gets the same bounded lifetime. A stale `department` key from an
    /// earlier login is removed rather than left behind.
    pub fn persist(&mut self, session: &Session) {
        self.edge.put(keys::TOKEN, session.token.as_str(), EDGE_TTL);
        self.edge
            .put(keys::USER_TYPE, session.principal_type.as_str(), EDGE_TTL);
        match session.department {
            Some(dept) => self.edge.put(keys::DEPARTMENT, dept.as_str(), EDGE_TTL),
            None => self.edge.delete(keys::DEPARTMENT),
        }
        self.edge
            .put(keys::DISPLAY_NAME, &session.display_name, EDGE_TTL);

        let identity = StoredIdentity {
            display_name: session.display_name.clone(),
            department: session.department,
        };
        // StoredIdentity has no failing serialization states.
        let identity = serde_json::to_string(&identity).unwrap_or_default();

        self.client.put(keys::TOKEN, session.token.as_str());
        self.client
            .put(keys::USER_TYPE, session.principal_type.as_str());
        self.client.put(keys::IDENTITY, &identity);
    }

    /// Remove every session key from both domains. Idempotent.
    pub fn clear(&mut self) {
        for key in keys::EDGE {
            self.edge.delete(key);
        }
        for key in keys::CLIENT {
            self.client.delete(key);
        }
    }

    /// Read the session back from the client-only domain.
    ///
    /// Any malformed stored field (empty token, unknown principal type,
    /// corrupt identity JSON) reads as an absent session; corruption is
    /// logged, never surfaced.
    pub fn read(&self) -> Option<Session> {
        let token = Token::new(self.client.get(keys::TOKEN)?).ok()?;

        let user_type = self.client.get(keys::USER_TYPE)?;
        let principal_type = PrincipalType::parse(&user_type)?;

        let raw_identity = self.client.get(keys::IDENTITY)?;
        let identity: StoredIdentity = match serde_json::from_str(&raw_identity) {
            Ok(identity) => identity,
            Err(err) => {
                tracing::warn!(error = %err, "stored identity is malformed; treating session as absent");
                return None;
            }
        };

        Some(Session {
            token,
            principal_type,
            department: identity.department,
            display_name: identity.display_name,
        })
    }

    pub fn edge(&self) -> &E {
        &self.edge
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn into_parts(self) -> (E, C) {
        (self.edge, self.client)
    }
}
