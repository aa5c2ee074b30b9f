use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Card;

use crate::routes::AppRoute;
use crate::store::use_store;

struct Highlight {
    title: &'static str,
    text: &'static str,
    route: AppRoute,
}

fn highlights() -> [Highlight; 3] {
    [
        Highlight {
            title: "Share your pet's journey",
            text: "Post photos and stories of your pet's adventures.",
            route: AppRoute::General,
        },
        Highlight {
            title: "Find new friends",
            text: "Browse profiles of fellow pet owners.",
            route: AppRoute::Profiles,
        },
        Highlight {
            title: "Ask the community",
            text: "Open a forum topic and get tips from other pet lovers.",
            route: AppRoute::Forum,
        },
    ]
}

#[component]
pub fn Home() -> impl IntoView {
    let store = use_store();
    let logged_in = move || store.session.with(|s| s.is_authenticated());

    view! {
        <section class="hero">
            <h1>"Welcome to PetStar"</h1>
            <p>"The social network for pet owners and enthusiasts."</p>
            <Show when=move || !logged_in()>
                <div class="hero__actions">
                    <A href=AppRoute::Signup.href() attr:class="button button--primary">"Join now"</A>
                    <A href=AppRoute::Login.href() attr:class="button button--ghost">"I already have an account"</A>
                </div>
            </Show>
        </section>

        <section class="community">
            {highlights()
                .into_iter()
                .map(|h| view! {
                    <Card>
                        <h3>{h.title}</h3>
                        <p>{h.text}</p>
                        <A href=h.route.href()>"Go"</A>
                    </Card>
                })
                .collect_view()}
        </section>
    }
}
