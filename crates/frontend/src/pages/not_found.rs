use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Not found!"</h1>
            <A href=AppRoute::Home.href()>"Back to the home page"</A>
        </div>
    }
}
