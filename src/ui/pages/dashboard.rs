//! Dashboard page for signed-in visitors.

use dioxus::prelude::*;

use crate::header::HeaderModel;
use crate::session::CurrentUser;
use crate::ui::components::Header;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardPageProps {
    pub model: HeaderModel,
    pub user: CurrentUser,
}

/// Dashboard page: greets the signed-in visitor.
#[component]
pub fn DashboardPage(props: DashboardPageProps) -> Element {
    let signed_in = props
        .user
        .signed_in_at
        .format("%Y-%m-%d %H:%M UTC")
        .to_string();
    rsx! {
        Header { model: props.model.clone() }
        main { class: "container",
            h2 { "Welcome back, {props.user.username}" }
            p { small { "Signed in since {signed_in}" } }
        }
    }
}
