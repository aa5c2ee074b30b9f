use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::shared::notification::{use_notifications, Notice};
use crate::store::use_store;

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_store();
    let notifications = use_notifications();

    let logged_in = move || store.session.with(|s| s.is_authenticated());
    let greeting = move || {
        store
            .session
            .with(|s| s.display_name())
            .map(|name| format!("Hi, {}", name))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        store.logout();
        notifications.show(Notice::info("You are logged out").with_text("See you soon!"));
    };

    view! {
        <header data-zone="header" class="navbar">
            <A href=AppRoute::Home.href() attr:class="navbar__brand">"PetStar"</A>
            <nav class="navbar__links">
                <A href=AppRoute::General.href()>"General"</A>
                <A href=AppRoute::Forum.href()>"Forum"</A>
                <A href=AppRoute::Profiles.href()>"Profiles"</A>
                <A href=AppRoute::Cloudinary.href()>"Gallery"</A>
            </nav>
            <div class="navbar__session">
                <Show
                    when=logged_in
                    fallback=|| view! {
                        <A href=AppRoute::Login.href()>"Log in"</A>
                        <A href=AppRoute::Signup.href() attr:class="button button--primary">"Sign up"</A>
                    }
                >
                    <span class="navbar__greeting">{greeting}</span>
                    <A href=AppRoute::YourProfile.href()>"Your profile"</A>
                    <button class="button button--ghost" on:click=on_logout>"Log out"</button>
                </Show>
            </div>
        </header>
    }
}
