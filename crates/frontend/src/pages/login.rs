use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use log::warn;

use crate::api;
use crate::forms::login::{LoginForm, RestoreLinkForm};
use crate::routes::AppRoute;
use crate::shared::components::form_field::{Field, TermsCheckbox};
use crate::shared::notification::{use_notifications, Notice};
use crate::store::use_store;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_store();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let registered = store.session.with_untracked(|s| s.registered_email.clone());
    let form = RwSignal::new(LoginForm::for_email(registered));
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match form.with_untracked(LoginForm::validate) {
            Ok(request) => request,
            Err(rejection) => {
                notifications.show(rejection.notice());
                return;
            }
        };

        is_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match store.login(request).await {
                Ok(user) => {
                    notifications.success(format!("Welcome back, {}!", user.pet_star));
                    navigate(&AppRoute::YourProfile.href(), NavigateOptions::default());
                }
                Err(e) => {
                    warn!("login failed: {}", e);
                    notifications.error("Login failed", e.to_string());
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Log In"</h2>
                <p class="muted">"Access your account to unlock exclusive features."</p>

                <form on:submit=on_submit>
                    <Field
                        id="email"
                        label="Email"
                        kind="email"
                        placeholder="Enter your Email"
                        required=true
                        disabled=is_loading.into()
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=move |v: String| form.update(|f| f.email = v)
                    />
                    <Field
                        id="password"
                        label="Password"
                        kind="password"
                        placeholder="Enter your Password"
                        required=true
                        disabled=is_loading.into()
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=move |v: String| form.update(|f| f.password = v)
                    />
                    <TermsCheckbox
                        checked=Signal::derive(move || form.with(|f| f.terms_accepted))
                        on_change=move |checked: bool| form.update(|f| f.terms_accepted = checked)
                    />
                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>

                <ForgotPassword />

                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href=AppRoute::Signup.href()>"Sign up now"</A>
                </p>
            </div>
        </div>
    }
}

/// Collapsible "send me a restore link" form.
#[component]
fn ForgotPassword() -> impl IntoView {
    let store = use_store();
    let notifications = use_notifications();

    let open = RwSignal::new(false);
    let form = RwSignal::new(RestoreLinkForm::default());
    let is_sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match form.with_untracked(RestoreLinkForm::validate) {
            Ok(request) => request,
            Err(rejection) => {
                notifications.show(rejection.notice());
                return;
            }
        };

        is_sending.set(true);
        spawn_local(async move {
            let client = store.client();
            match api::auth::request_restore_link(&client, &request).await {
                Ok(_) => {
                    notifications.show(
                        Notice::info("Check your inbox").with_text("We sent you a link to reset your password."),
                    );
                    form.set(RestoreLinkForm::default());
                    open.set(false);
                }
                Err(e) => notifications.error("Could not send the link", e.to_string()),
            }
            is_sending.set(false);
        });
    };

    view! {
        <div class="forgot-password">
            <button type="button" class="button button--link" on:click=move |_| open.update(|o| *o = !*o)>
                "Forgot your password?"
            </button>
            <Show when=move || open.get()>
                <form on:submit=on_submit>
                    <Field
                        id="restoreEmail"
                        label="Email of your account"
                        kind="email"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=move |v: String| form.update(|f| f.email = v)
                    />
                    <button type="submit" class="button" disabled=move || is_sending.get()>
                        "Send restore link"
                    </button>
                </form>
            </Show>
        </div>
    }
}
