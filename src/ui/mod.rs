//! Web UI handlers - server-rendered pages built from Dioxus components.
//!
//! The navigation header carries the interesting state (genre menu,
//! session controls) and is projected per request from the session store
//! and the route; pages themselves stay small. Pico CSS keeps the document
//! shell free of custom styling beyond the header classes.

pub mod components;
pub mod pages;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::browse;
use crate::header;
use pages::{BrowsePage, DashboardPage};

/// HTML document wrapper with Pico CSS and the header styles.
fn html_doc(title: &str, body: &str) -> String {
    let version = env!("WAVESCOUT_VERSION");
    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - Wavescout</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css">
    <style>
        .header-content {{ display: flex; align-items: center; justify-content: space-between; gap: 1rem; flex-wrap: wrap; }}
        .logo h1 {{ margin: 0; font-size: 1.5rem; }}
        .menu {{ display: flex; flex-wrap: wrap; gap: 0.25rem; }}
        .menu-item {{ padding: 0.25rem 0.5rem; border-radius: 0.25rem; text-decoration: none; }}
        .menu-item-selected {{ background: var(--pico-primary-background); color: var(--pico-primary-inverse); }}
        .dashboard-link, .session-link {{ display: inline-block; margin-left: 0.5rem; }}
        small {{ color: var(--pico-muted-color); }}
    </style>
</head>
<body>
    {body}
    <footer class="container">
        <small>Wavescout v{version}</small>
    </footer>
</body>
</html>"#,
        version = version
    )
}

/// GET / - browse landing. No genre is selected here, so the header
/// renders without the menu.
pub async fn home_page(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let user = state.request_user(&headers);
    let model = header::project(user.as_ref(), None);
    let body = dioxus::ssr::render_element(rsx! {
        BrowsePage { model, genre: None }
    });
    Html(html_doc("Browse", &body))
}

/// GET /browse/{genre} - genre browsing with the full menu.
pub async fn browse_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(genre): Path<String>,
) -> impl IntoResponse {
    let user = state.request_user(&headers);
    let model = header::project(user.as_ref(), Some(&genre));
    let title = format!("Browse {genre}");
    let body = dioxus::ssr::render_element(rsx! {
        BrowsePage { model, genre: Some(genre.clone()) }
    });
    Html(html_doc(&title, &body))
}

/// GET /dashboard - personal dashboard; signed-out visitors go home.
pub async fn dashboard_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(user) = state.request_user(&headers) else {
        return Redirect::to("/").into_response();
    };
    let model = header::project(Some(&user), None);
    let body = dioxus::ssr::render_element(rsx! {
        DashboardPage { model, user: user.clone() }
    });
    Html(html_doc("Dashboard", &body)).into_response()
}

/// GET /browse - legacy entry point, forward to the default genre.
pub async fn browse_redirect() -> impl IntoResponse {
    Redirect::to(&browse::genre_link(None))
}
