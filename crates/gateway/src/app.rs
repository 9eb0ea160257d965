use std::sync::Arc;

use axum::{
    extract::{Extension, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower::ServiceBuilder;

use milldesk_core::{paths, PrincipalType};
use milldesk_nav::{bucket_for_mobile, resolve};
use milldesk_policy::is_allowed;
use milldesk_session::{Session, SessionStore};

use crate::backend::{AuthBackend, AuthBackendError, LoginRequest};
use crate::context::SessionContext;
use crate::cookies::{CookieEdgeStore, JsonClientStore};

#[derive(Clone)]
pub struct GatewayState {
    pub backend: Arc<dyn AuthBackend>,
}

pub fn build_app(backend: Arc<dyn AuthBackend>) -> Router {
    let state = GatewayState { backend };

    Router::new()
        .route("/health", get(health))
        .route(paths::LOGIN, post(login))
        .route("/logout", post(logout))
        .route("/whoami", get(whoami))
        .route("/navigation", get(navigation))
        .route(paths::HOME, get(module_view))
        .route(paths::HR, get(module_view))
        .route(paths::STORE, get(module_view))
        .route(paths::PPC, get(module_view))
        .route(paths::ACCOUNTS, get(module_view))
        .route(paths::REPORTS, get(module_view))
        .route(paths::SETTINGS, get(module_view))
        // Outermost first: 401 teardown wraps the guard, which wraps routes.
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(
                    crate::middleware::catch_unauthorized,
                ))
                .layer(axum::middleware::from_fn(crate::middleware::route_guard)),
        )
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody {
    principal_type: PrincipalType,
    user_id: String,
    password: String,
}

/// Establish a session: authenticate, coerce the loose identity into the
/// strict session shape, then persist to both domains in one operation —
/// cookies for the edge, the response's `session` object for the client.
async fn login(State(state): State<GatewayState>, Json(body): Json<LoginBody>) -> Response {
    let request = LoginRequest {
        principal_type: body.principal_type,
        user_id: body.user_id,
        password: body.password,
    };

    let success = match state.backend.authenticate(&request) {
        Ok(success) => success,
        Err(AuthBackendError::InvalidCredentials) => {
            return json_error(
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "invalid credentials",
            );
        }
        Err(AuthBackendError::Unavailable(msg)) => {
            tracing::warn!(error = %msg, "authentication service unavailable");
            return json_error(
                StatusCode::BAD_GATEWAY,
                "auth_unavailable",
                "authentication service unavailable",
            );
        }
    };

    let session = match Session::from_login(success.token, request.principal_type, &success.identity)
    {
        Ok(session) => session,
        Err(err) => {
            tracing::warn!(error = %err, "login collaborator returned an unusable payload");
            return json_error(
                StatusCode::BAD_GATEWAY,
                "invalid_login_payload",
                err.to_string(),
            );
        }
    };

    let mut store = SessionStore::new(CookieEdgeStore::new(), JsonClientStore::new());
    store.persist(&session);
    let (edge, client) = store.into_parts();

    let mut response = (
        StatusCode::OK,
        Json(serde_json::json!({
            "redirect": paths::HOME,
            "session": client.into_json(),
        })),
    )
        .into_response();
    edge.apply_to(response.headers_mut());
    response
}

/// Destroy the session: expire every edge cookie and send the client to
/// login, where it drops its local copy. Idempotent by construction.
async fn logout() -> Response {
    let mut store = SessionStore::new(CookieEdgeStore::new(), JsonClientStore::new());
    store.clear();
    let (edge, _) = store.into_parts();

    let mut response = Redirect::to(paths::LOGIN).into_response();
    edge.apply_to(response.headers_mut());
    response
}

async fn whoami(ctx: Option<Extension<SessionContext>>) -> Response {
    let Some(Extension(ctx)) = ctx else {
        return json_error(StatusCode::UNAUTHORIZED, "no_session", "no active session");
    };

    Json(serde_json::json!({
        "userType": ctx.principal_type().as_str(),
        "department": ctx.department().map(|d| d.as_str()),
        "displayName": ctx.display_name(),
    }))
    .into_response()
}

#[derive(Debug, Deserialize)]
struct NavQuery {
    /// Current path, used for mobile bucketing. Defaults to the landing path.
    path: Option<String>,
}

/// Resolve the role-scoped navigation tree plus its mobile buckets.
async fn navigation(
    ctx: Option<Extension<SessionContext>>,
    Query(query): Query<NavQuery>,
) -> Response {
    let Some(Extension(ctx)) = ctx else {
        return json_error(StatusCode::UNAUTHORIZED, "no_session", "no active session");
    };

    let items = resolve(ctx.principal_type(), ctx.department());
    let current_path = query.path.as_deref().unwrap_or(paths::HOME);
    let mobile = bucket_for_mobile(&items, current_path);

    Json(serde_json::json!({
        "items": items,
        "mobile": mobile,
    }))
    .into_response()
}

/// A protected module page.
///
/// Re-verifies department access before rendering — client-side transitions
/// can bypass the edge, and this calls the same policy function the guard
/// does — then forwards the bearer token on the resource call. A stale token
/// surfaces as 401 and is torn down by the middleware above.
async fn module_view(
    State(state): State<GatewayState>,
    ctx: Option<Extension<SessionContext>>,
    uri: Uri,
) -> Response {
    let Some(Extension(ctx)) = ctx else {
        return json_error(StatusCode::UNAUTHORIZED, "no_session", "no active session");
    };

    if !is_allowed(Some(ctx.principal_type()), ctx.department(), uri.path()) {
        return Redirect::temporary(paths::HOME).into_response();
    }

    if !state.backend.check_token(ctx.token()) {
        return json_error(StatusCode::UNAUTHORIZED, "stale_token", "token no longer valid");
    }

    Json(serde_json::json!({
        "module": uri.path(),
        "userType": ctx.principal_type().as_str(),
        "department": ctx.department().map(|d| d.as_str()),
    }))
    .into_response()
}

fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
