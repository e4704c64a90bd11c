//! Header view-model projection.
//!
//! Pure derivation of the navigation header from the per-request state
//! slice (current user, selected genre). No I/O, no retained state: every
//! call allocates a fresh model, so concurrent renders are independent and
//! equal inputs always produce equal output.

use crate::browse::{self, DASHBOARD, GENRES};
use crate::session::CurrentUser;

/// Endpoint that opens a session before redirecting to the dashboard.
pub const LOGIN_ACTION: &str = "/session/login";

/// Endpoint that ends the session before redirecting to default browsing.
pub const LOGOUT_ACTION: &str = "/session/logout";

/// Style variants for a genre menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItemStyle {
    Normal,
    Selected,
}

impl MenuItemStyle {
    /// Classify a menu entry against the selected genre. Exact,
    /// case-sensitive identifier equality, no normalization.
    pub fn classify(genre: &str, selected: &str) -> Self {
        if genre == selected {
            MenuItemStyle::Selected
        } else {
            MenuItemStyle::Normal
        }
    }

    pub fn is_selected(self) -> bool {
        matches!(self, MenuItemStyle::Selected)
    }

    /// CSS class list for the entry.
    pub fn css_class(self) -> &'static str {
        match self {
            MenuItemStyle::Normal => "menu-item",
            MenuItemStyle::Selected => "menu-item menu-item-selected",
        }
    }
}

/// A genre menu entry.
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub genre: String,
    pub href: String,
    pub style: MenuItemStyle,
}

/// An actionable session control. `href` is what the control links to;
/// `destination` is where the visitor lands once the action completed.
/// The two differ for controls whose endpoint redirects.
#[derive(Clone, Debug, PartialEq)]
pub struct NavAction {
    pub label: &'static str,
    pub href: String,
    pub destination: String,
}

/// Session controls. Exactly one variant is produced per render, chosen
/// solely by the presence of a signed-in user.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionControls {
    /// Signed out: a single login control. The control pairs the login
    /// action with a dashboard destination - a fresh session lands
    /// straight on its dashboard.
    SignedOut { login: NavAction },
    /// Signed in: dashboard navigation plus logout.
    SignedIn {
        dashboard: NavAction,
        logout: NavAction,
    },
}

/// Static branding block.
#[derive(Clone, Debug, PartialEq)]
pub struct Branding {
    pub title: &'static str,
    pub home_href: &'static str,
    pub source_label: &'static str,
    pub source_url: &'static str,
}

/// Render-ready header model.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderModel {
    pub branding: Branding,
    pub menu: Vec<NavLink>,
    pub session: SessionControls,
}

pub fn branding() -> Branding {
    Branding {
        title: "Wavescout",
        home_href: "/",
        source_label: "Fork me on GitHub",
        source_url: "https://github.com/wavescout/wavescout",
    }
}

/// Project the full header model from the per-request state slice.
///
/// With no selected genre the menu is suppressed entirely rather than
/// rendered empty; with one, every catalog genre gets an entry in catalog
/// order and the matching entry is marked selected. A selected genre
/// outside the catalog is not an error: the menu renders with no entry
/// active.
pub fn project(user: Option<&CurrentUser>, selected_genre: Option<&str>) -> HeaderModel {
    HeaderModel {
        branding: branding(),
        menu: menu(selected_genre),
        session: session_controls(user),
    }
}

fn menu(selected_genre: Option<&str>) -> Vec<NavLink> {
    let Some(selected) = selected_genre else {
        return Vec::new();
    };
    GENRES
        .iter()
        .map(|genre| NavLink {
            genre: (*genre).to_string(),
            href: browse::genre_link(Some(genre)),
            style: MenuItemStyle::classify(genre, selected),
        })
        .collect()
}

/// Pick the control set for the current session state.
pub fn session_controls(user: Option<&CurrentUser>) -> SessionControls {
    match user {
        None => SessionControls::SignedOut {
            login: NavAction {
                label: "Login",
                href: LOGIN_ACTION.to_string(),
                destination: DASHBOARD.to_string(),
            },
        },
        Some(_) => SessionControls::SignedIn {
            dashboard: NavAction {
                label: "Dashboard",
                href: DASHBOARD.to_string(),
                destination: DASHBOARD.to_string(),
            },
            logout: NavAction {
                label: "Logout",
                href: LOGOUT_ACTION.to_string(),
                destination: browse::genre_link(None),
            },
        },
    }
}
