//! Cookie adapters for the two session storage domains.
//!
//! The edge-visible domain maps onto `Set-Cookie` response headers; the
//! client-only domain maps onto the login response body, which the client
//! persists locally. Request-side parsing is plain header splitting — no
//! cookie crate, matching the rest of the stack.

use std::collections::HashMap;

use axum::http::{header, HeaderMap, HeaderValue};
use serde_json::{Map, Value};

use milldesk_session::{keys, ClientStore, EdgeStore};

/// Upper bound on the `Cookie` request header (16 KiB).
const MAX_COOKIE_HEADER: usize = 16 * 1024;

/// Parse the request `Cookie` header into key/value pairs.
///
/// Oversized or non-UTF-8 headers read as no cookies at all; the guard
/// fails closed from there.
pub fn parse_request_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    let Some(raw) = headers.get(header::COOKIE) else {
        return cookies;
    };
    if raw.as_bytes().len() > MAX_COOKIE_HEADER {
        tracing::warn!("cookie header exceeds {MAX_COOKIE_HEADER} bytes; ignoring");
        return cookies;
    }
    let Ok(raw) = raw.to_str() else {
        return cookies;
    };

    for pair in raw.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=') {
            let value = value.trim();
            // Values are percent-encoded on write; undecodable ones read raw.
            let value = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            cookies.insert(key.trim().to_string(), value);
        }
    }
    cookies
}

/// Edge-visible domain as outgoing `Set-Cookie` headers.
///
/// Every key is site-wide (`Path=/`), `SameSite=Lax`, `Secure`, and bounded
/// by the ttl the session store passes in; the bearer token is additionally
/// `HttpOnly`. Deletion emits `Max-Age=0`.
#[derive(Debug, Default)]
pub struct CookieEdgeStore {
    cookies: Vec<String>,
}

impl CookieEdgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the accumulated `Set-Cookie` headers to a response.
    pub fn apply_to(self, headers: &mut HeaderMap) {
        for cookie in self.cookies {
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    headers.append(header::SET_COOKIE, value);
                }
                Err(_) => {
                    tracing::warn!("session cookie value is not header-safe; dropping");
                }
            }
        }
    }

    fn attributes(key: &str) -> &'static str {
        if key == keys::TOKEN {
            "; Path=/; SameSite=Lax; Secure; HttpOnly"
        } else {
            "; Path=/; SameSite=Lax; Secure"
        }
    }
}

impl EdgeStore for CookieEdgeStore {
    fn put(&mut self, key: &'static str, value: &str, ttl: std::time::Duration) {
        // Percent-encode so a non-ASCII or `;`-bearing value can neither split
        // the header nor fail `HeaderValue` and drop a key mid-persist —
        // every key of one persist reaches the edge together.
        self.cookies.push(format!(
            "{key}={}; Max-Age={}{}",
            urlencoding::encode(value),
            ttl.as_secs(),
            Self::attributes(key)
        ));
    }

    fn delete(&mut self, key: &'static str) {
        self.cookies
            .push(format!("{key}=; Max-Age=0{}", Self::attributes(key)));
    }
}

/// Client-only domain as a JSON payload the browser persists after login.
#[derive(Debug, Default)]
pub struct JsonClientStore {
    entries: Map<String, Value>,
}

impl JsonClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the stored keys as the login response's `session` object. The
    /// identity entry is itself JSON and is inlined as an object.
    pub fn into_json(self) -> Value {
        let mut out = Map::new();
        for (key, value) in self.entries {
            if key == keys::IDENTITY {
                let parsed = value
                    .as_str()
                    .and_then(|raw| serde_json::from_str(raw).ok())
                    .unwrap_or(value);
                out.insert(key, parsed);
            } else {
                out.insert(key, value);
            }
        }
        Value::Object(out)
    }
}

impl ClientStore for JsonClientStore {
    fn put(&mut self, key: &'static str, value: &str) {
        self.entries.insert(key.to_string(), Value::String(value.to_string()));
    }

    fn delete(&mut self, key: &'static str) {
        self.entries.remove(key);
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key)?.as_str().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milldesk_session::EDGE_TTL;

    #[test]
    fn request_cookies_parse_by_splitting() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("token=t-1; userType=user; department=hr"),
        );

        let cookies = parse_request_cookies(&headers);
        assert_eq!(cookies.get("token").map(String::as_str), Some("t-1"));
        assert_eq!(cookies.get("userType").map(String::as_str), Some("user"));
        assert_eq!(cookies.get("department").map(String::as_str), Some("hr"));
    }

    #[test]
    fn oversized_cookie_header_reads_as_empty() {
        let mut headers = HeaderMap::new();
        let huge = format!("token={}", "x".repeat(MAX_COOKIE_HEADER + 1));
        headers.insert(header::COOKIE, HeaderValue::from_str(&huge).unwrap());

        assert!(parse_request_cookies(&headers).is_empty());
    }

    #[test]
    fn token_cookie_is_http_only_and_bounded() {
        let mut edge = CookieEdgeStore::new();
        edge.put(keys::TOKEN, "t-1", EDGE_TTL);
        edge.put(keys::USER_TYPE, "user", EDGE_TTL);

        let mut headers = HeaderMap::new();
        edge.apply_to(&mut headers);

        let cookies: Vec<&str> = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(cookies.len(), 2);
        assert!(cookies[0].starts_with("token=t-1; Max-Age=28800"));
        assert!(cookies[0].contains("HttpOnly"));
        assert!(cookies[1].starts_with("userType=user"));
        assert!(!cookies[1].contains("HttpOnly"));
        assert!(cookies.iter().all(|c| c.contains("SameSite=Lax")));
    }

    #[test]
    fn non_ascii_value_is_encoded_and_no_key_is_dropped() {
        let mut edge = CookieEdgeStore::new();
        edge.put(keys::TOKEN, "t-1", EDGE_TTL);
        edge.put(keys::USER_TYPE, "company", EDGE_TTL);
        edge.put(keys::DISPLAY_NAME, "Müller GmbH", EDGE_TTL);

        let mut headers = HeaderMap::new();
        edge.apply_to(&mut headers);

        let cookies: Vec<&str> = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(cookies.len(), 3, "a non-header-safe value must not drop a key");
        assert!(cookies[2].starts_with("displayName=M%C3%BCller%20GmbH"));
    }

    #[test]
    fn encoded_values_round_trip_through_request_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("displayName=M%C3%BCller%20GmbH; token=t-1"),
        );

        let cookies = parse_request_cookies(&headers);
        assert_eq!(
            cookies.get("displayName").map(String::as_str),
            Some("Müller GmbH")
        );
        assert_eq!(cookies.get("token").map(String::as_str), Some("t-1"));
    }

    #[test]
    fn semicolon_in_a_value_cannot_reach_cookie_attributes() {
        let mut edge = CookieEdgeStore::new();
        edge.put(keys::DISPLAY_NAME, "x; Path=/evil", EDGE_TTL);

        let mut headers = HeaderMap::new();
        edge.apply_to(&mut headers);

        let cookie = headers.get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("displayName=x%3B%20Path%3D%2Fevil"));
        assert!(!cookie.contains("Path=/evil"));
    }

    #[test]
    fn delete_emits_expired_cookie() {
        let mut edge = CookieEdgeStore::new();
        edge.delete(keys::TOKEN);

        let mut headers = HeaderMap::new();
        edge.apply_to(&mut headers);

        let cookie = headers.get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("token=; Max-Age=0"));
    }
}
