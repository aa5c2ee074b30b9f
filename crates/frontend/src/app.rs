use leptos::prelude::*;
use log::warn;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::layout::backend_url::BackendUrlSetup;
use crate::routes::routes::AppRoutes;
use crate::shared::notification::{NotificationHost, NotificationService};
use crate::store::AppStore;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();

    let Some(backend_url) = config.backend_url().map(str::to_string) else {
        warn!("BACKEND_URL was not set at build time");
        return view! { <BackendUrlSetup /> }.into_any();
    };

    let basename = config.basename.clone();
    provide_context(config);

    // Session store, shared by every page.
    let store = AppStore::new(ApiClient::new(backend_url));
    store.restore();
    provide_context(store);

    provide_context(NotificationService::new());

    view! {
        <thaw::ConfigProvider>
            <AppRoutes basename=basename />
            <NotificationHost />
        </thaw::ConfigProvider>
    }
    .into_any()
}
