use std::sync::Arc;

use application::Application;
use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

mod api;
mod config;
mod pages;
mod widgets;

use crate::api::ApiClient;
use crate::config::Config;
use pages::RequestClientAccess;
use widgets::header::Header;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    RequestClientAccess {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(Config::from_env);
    use_context_provider(|| {
        let api_client = ApiClient::new(config);
        Application::new(Arc::new(api_client.clone()), Arc::new(api_client))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider { Router::<Route> {} }
    }
}

/// Shared page shell.
#[component]
fn Shell() -> Element {
    rsx! {
        Header {}
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
