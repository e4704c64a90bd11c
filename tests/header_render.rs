//! Header rendering tests
//!
//! Render the header component against projected models and check the
//! emitted markup for the contract: the menu appears only with a
//! selection, exactly one entry is marked selected, and the session
//! controls are mutually exclusive.

use chrono::Utc;
use dioxus::prelude::*;

use wavescout::browse::GENRES;
use wavescout::header::{project, HeaderModel, LOGIN_ACTION, LOGOUT_ACTION};
use wavescout::session::CurrentUser;
use wavescout::ui::components::Header;

fn render(model: HeaderModel) -> String {
    dioxus::ssr::render_element(rsx! {
        Header { model }
    })
}

fn visitor() -> CurrentUser {
    CurrentUser {
        id: "u-1".into(),
        username: "ada".into(),
        signed_in_at: Utc::now(),
    }
}

#[test]
fn branding_always_renders() {
    let html = render(project(None, None));
    assert!(html.contains("Wavescout"));
    assert!(html.contains("Fork me on GitHub"));
}

#[test]
fn menu_is_suppressed_without_selection() {
    let html = render(project(None, None));
    assert!(!html.contains("menu-item"));
}

#[test]
fn menu_marks_exactly_one_entry_selected() {
    let html = render(project(None, Some("jazz")));

    assert_eq!(html.matches("menu-item menu-item-selected").count(), 1);
    assert_eq!(html.matches("aria-current").count(), 1);
    assert_eq!(
        html.matches("href=\"/browse/").count(),
        GENRES.len(),
        "every catalog genre should get a menu link"
    );
    assert!(html.contains(">jazz<") || html.contains("jazz</strong>"));
}

#[test]
fn unknown_selection_renders_menu_with_nothing_active() {
    let html = render(project(None, Some("vaporwave")));

    assert_eq!(html.matches("href=\"/browse/").count(), GENRES.len());
    assert_eq!(html.matches("menu-item menu-item-selected").count(), 0);
}

#[test]
fn signed_out_header_offers_login_only() {
    let html = render(project(None, None));

    assert!(html.contains(LOGIN_ACTION));
    assert!(html.contains("Login"));
    assert!(!html.contains(LOGOUT_ACTION));
    assert!(!html.contains("Dashboard"));
}

#[test]
fn signed_in_header_offers_dashboard_and_logout() {
    let user = visitor();
    let html = render(project(Some(&user), None));

    assert!(html.contains("href=\"/dashboard\""));
    assert!(html.contains("Dashboard"));
    assert!(html.contains(LOGOUT_ACTION));
    assert!(html.contains("Logout"));
    assert!(!html.contains(LOGIN_ACTION));
}
