//! Edge middleware: the route guard and the 401 session teardown.

use axum::{
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use milldesk_core::paths;
use milldesk_policy::{decide, is_protected, EdgeSession, RouteDecision};
use milldesk_session::{keys, SessionStore};

use crate::context::SessionContext;
use crate::cookies::{parse_request_cookies, CookieEdgeStore};

/// Route guard, evaluated once per request before any handler.
///
/// Reads only the edge-visible cookies, never mutates them. `Allow` attaches
/// a [`SessionContext`] extension when a usable session exists; redirects are
/// soft (307), never errors.
pub async fn route_guard(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    let cookies = parse_request_cookies(req.headers());
    let edge = EdgeSession::from_raw(
        cookies.get(keys::TOKEN).map(String::as_str),
        cookies.get(keys::USER_TYPE).map(String::as_str),
        cookies.get(keys::DEPARTMENT).map(String::as_str),
    );

    match decide(&path, &edge) {
        RouteDecision::Allow => {
            let display_name = cookies.get(keys::DISPLAY_NAME).cloned();
            if let Some(ctx) = SessionContext::from_edge(&edge, display_name) {
                req.extensions_mut().insert(ctx);
            }
            next.run(req).await
        }
        decision => {
            // target() is Some for both redirect outcomes.
            let target = decision.target().unwrap_or(paths::LOGIN);
            tracing::debug!(%path, ?decision, redirect = target, "route guard redirect");
            Redirect::temporary(target).into_response()
        }
    }
}

/// Stale-token teardown.
///
/// A 401 from any authorized call on a protected path clears both session
/// domains and redirects to login; the token is never silently retried.
/// Clearing is idempotent, so concurrent 401s are harmless.
pub async fn catch_unauthorized(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let protected = is_protected(req.uri().path());
    let response = next.run(req).await;

    if !(protected && response.status() == StatusCode::UNAUTHORIZED) {
        return response;
    }

    tracing::debug!("authorized call returned 401; clearing session");
    let mut store = SessionStore::new(CookieEdgeStore::new(), DiscardClient);
    store.clear();
    let (edge, _) = store.into_parts();

    let mut redirect = Redirect::temporary(paths::LOGIN).into_response();
    edge.apply_to(redirect.headers_mut());
    redirect
}

/// Client-domain stand-in for the teardown path: the redirect to login is
/// what makes the browser drop its local copy, so there is nothing to write.
struct DiscardClient;

impl milldesk_session::ClientStore for DiscardClient {
    fn put(&mut self, _key: &'static str, _value: &str) {}
    fn delete(&mut self, _key: &'static str) {}
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}
