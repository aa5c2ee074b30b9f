use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::use_store;

#[derive(Clone, Copy, Debug, PartialEq)]
enum BackendStatus {
    Online,
    Offline,
    Checking,
}

impl BackendStatus {
    fn display_text(&self) -> &'static str {
        match self {
            BackendStatus::Online => "Backend: online",
            BackendStatus::Offline => "Backend: offline",
            BackendStatus::Checking => "Backend: checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            BackendStatus::Online => "status-online",
            BackendStatus::Offline => "status-offline",
            BackendStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let store = use_store();
    let status = RwSignal::new(BackendStatus::Checking);

    // checked once, when the shell mounts
    Effect::new(move |_| {
        let url = store.client().base_url().to_string();
        spawn_local(async move {
            let reachable = match Request::get(&url).send().await {
                Ok(response) => response.ok(),
                Err(_) => false,
            };
            status.set(if reachable {
                BackendStatus::Online
            } else {
                BackendStatus::Offline
            });
        });
    });

    view! {
        <footer data-zone="footer" class="footer">
            <span>"PetStar, the social network for pets and their people"</span>
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}
