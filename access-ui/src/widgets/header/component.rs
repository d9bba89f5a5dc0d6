use crate::config::Config;
use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    let config = use_context::<Config>();

    rsx! {
        header { class: "app-header",
            h1 { class: "header-title", "Client Access" }
            div { class: "header-actions",
                span { class: "current-user", "{config.requester_name}" }
            }
        }
    }
}
