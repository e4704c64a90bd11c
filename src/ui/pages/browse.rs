//! Genre browsing page.

use dioxus::prelude::*;

use crate::header::HeaderModel;
use crate::ui::components::Header;

#[derive(Props, Clone, PartialEq)]
pub struct BrowsePageProps {
    pub model: HeaderModel,
    /// Genre picked via the route; `None` on the landing page.
    #[props(!optional)]
    pub genre: Option<String>,
}

/// Browse page: header plus the listing area for the picked genre.
#[component]
pub fn BrowsePage(props: BrowsePageProps) -> Element {
    rsx! {
        Header { model: props.model.clone() }
        main { class: "container",
            if let Some(genre) = &props.genre {
                h2 { "Browsing {genre}" }
                p { small { "Fresh tracks tagged #{genre}." } }
            } else {
                h2 { "Discover music" }
                p { small { "Open a genre to light up the menu, or log in for your dashboard." } }
            }
        }
    }
}
