//! HTTP API handlers and router assembly.
//!
//! The router is the composition root: session actions are bound to their
//! endpoints here, and every page handler pulls the per-request state
//! slice (current user, selected genre) before projecting the header.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::browse;
use crate::session::{CurrentUser, SessionStore, SESSION_COOKIE};
use crate::ui;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Display name for sessions opened without an explicit name.
    pub default_session_name: String,
    started_at: Instant,
}

impl AppState {
    pub fn new(sessions: SessionStore, default_session_name: String) -> Self {
        Self {
            sessions,
            default_session_name,
            started_at: Instant::now(),
        }
    }

    /// Resolve the signed-in user for a request, if any.
    pub fn request_user(&self, headers: &HeaderMap) -> Option<CurrentUser> {
        let token = session_token(headers)?;
        self.sessions.current_user(&token)
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Extract the session token from the Cookie header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/status", get(status_handler))
        // Session actions
        .route("/session/login", get(login_handler))
        .route("/session/logout", get(logout_handler))
        // Pages
        .route("/", get(ui::home_page))
        .route("/browse/{genre}", get(ui::browse_page))
        .route("/dashboard", get(ui::dashboard_page))
        // Legacy redirect
        .route("/browse", get(ui::browse_redirect))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub active_sessions: usize,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "wavescout",
        version: env!("WAVESCOUT_VERSION"),
        git_sha: env!("WAVESCOUT_GIT_SHA"),
        uptime_secs: state.uptime_secs(),
        active_sessions: state.sessions.active_sessions(),
    })
}

#[derive(Deserialize)]
pub struct LoginQuery {
    pub name: Option<String>,
}

/// GET /session/login - open a session, then land on the dashboard.
///
/// The login control and the dashboard control share a destination: a
/// fresh session is dropped straight onto its dashboard.
pub async fn login_handler(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> impl IntoResponse {
    let name = query
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| state.default_session_name.clone());
    let (token, user) = state.sessions.login(&name);
    tracing::info!("Session opened for {}", user.username);

    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    (
        [(header::SET_COOKIE, cookie)],
        Redirect::to(browse::DASHBOARD),
    )
}

/// GET /session/logout - end the session, back to default browsing.
pub async fn logout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        match state.sessions.logout(&token) {
            Ok(user) => tracing::info!("Session closed for {}", user.username),
            Err(e) => tracing::debug!("Logout without live session: {}", e),
        }
    }

    let expired = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0");
    (
        [(header::SET_COOKIE, expired)],
        Redirect::to(&browse::genre_link(None)),
    )
}
