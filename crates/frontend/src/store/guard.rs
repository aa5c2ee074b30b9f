use leptos::prelude::*;
use leptos_router::components::A;

use super::use_store;
use crate::routes::AppRoute;

/// Renders `children` only while a session token is present.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let store = use_store();

    view! {
        <Show
            when=move || store.session.with(|s| s.is_authenticated())
            fallback=|| view! {
                <div class="require-auth">
                    <p>"You need to be logged in to see this page."</p>
                    <A href=AppRoute::Login.href()>"Log in"</A>
                    " or "
                    <A href=AppRoute::Signup.href()>"create an account"</A>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
