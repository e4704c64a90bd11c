//! Navigation header component.
//!
//! Renders a projected header model - branding, the genre menu, and
//! session controls. All state decisions happen in the projection; this
//! component only lays out what it is handed.

use dioxus::prelude::*;

use crate::header::{Branding, HeaderModel, NavAction, NavLink, SessionControls};

#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    pub model: HeaderModel,
}

/// Navigation header: branding, genre menu, session controls.
#[component]
pub fn Header(props: HeaderProps) -> Element {
    rsx! {
        header { class: "container",
            div { class: "header-content",
                Logo { branding: props.model.branding.clone() }
                MenuList { links: props.model.menu.clone() }
                SessionAction { controls: props.model.session.clone() }
            }
        }
    }
}

/// Static branding block.
#[component]
fn Logo(branding: Branding) -> Element {
    rsx! {
        div {
            div { class: "logo",
                a { href: "{branding.home_href}",
                    h1 { "{branding.title}" }
                }
            }
            div { class: "github-link",
                a { href: "{branding.source_url}", target: "_blank",
                    small { "{branding.source_label}" }
                }
            }
        }
    }
}

/// Genre menu; hidden entirely while no genre is selected.
#[component]
fn MenuList(links: Vec<NavLink>) -> Element {
    rsx! {
        if !links.is_empty() {
            div { class: "menu",
                for link in links.iter() {
                    MenuItem { key: "{link.genre}", link: link.clone() }
                }
            }
        }
    }
}

#[component]
fn MenuItem(link: NavLink) -> Element {
    rsx! {
        if link.style.is_selected() {
            a {
                class: link.style.css_class(),
                href: "{link.href}",
                "aria-current": "page",
                strong { "{link.genre}" }
            }
        } else {
            a { class: link.style.css_class(), href: "{link.href}", "{link.genre}" }
        }
    }
}

/// Session controls: exactly one variant is ever rendered.
#[component]
fn SessionAction(controls: SessionControls) -> Element {
    match controls {
        SessionControls::SignedOut { login } => rsx! {
            div { class: "session-link",
                ActionLink { action: login }
            }
        },
        SessionControls::SignedIn { dashboard, logout } => rsx! {
            div {
                div { class: "dashboard-link",
                    ActionLink { action: dashboard }
                }
                div { class: "session-link",
                    ActionLink { action: logout }
                }
            }
        },
    }
}

#[component]
fn ActionLink(action: NavAction) -> Element {
    rsx! {
        a { href: "{action.href}", "{action.label}" }
    }
}
