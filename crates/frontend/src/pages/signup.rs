use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use log::warn;

use crate::forms::signup::{outcome_notice, SignupForm};
use crate::routes::AppRoute;
use crate::shared::components::form_field::{Field, TermsCheckbox};
use crate::shared::notification::use_notifications;
use crate::store::use_store;

#[component]
pub fn SignupPage() -> impl IntoView {
    let store = use_store();
    let notifications = use_notifications();

    let form = RwSignal::new(SignupForm::default());
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match form.with_untracked(SignupForm::submit) {
            Ok(request) => request,
            Err(notice) => {
                notifications.show(notice);
                return;
            }
        };

        is_loading.set(true);
        spawn_local(async move {
            let result = store.register(request).await;
            match &result {
                Ok(()) => form.set(SignupForm::default()),
                Err(e) => warn!("registration failed: {}", e),
            }
            notifications.show(outcome_notice(&result));
            is_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Sign Up"</h2>
                <p class="muted">"Create an account to unlock exclusive features."</p>

                <form on:submit=on_submit>
                    <Field
                        id="petstarName"
                        label="PetStar Name"
                        placeholder="Enter your Name"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.petstar_name.clone()))
                        on_input=move |v: String| form.update(|f| f.petstar_name = v)
                    />
                    <Field
                        id="email"
                        label="Email"
                        kind="email"
                        placeholder="Enter your Email"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=move |v: String| form.update(|f| f.email = v)
                    />
                    <Field
                        id="password"
                        label="Password"
                        kind="password"
                        placeholder="Enter your Password"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=move |v: String| form.update(|f| f.password = v)
                    />
                    <Field
                        id="confirmPassword"
                        label="Confirm Password"
                        kind="password"
                        placeholder="Confirm your Password"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                        on_input=move |v: String| form.update(|f| f.confirm_password = v)
                    />
                    <TermsCheckbox
                        checked=Signal::derive(move || form.with(|f| f.terms_accepted))
                        on_change=move |checked: bool| form.update(|f| f.terms_accepted = checked)
                    />
                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href=AppRoute::Login.href()>"Log in"</A>
                </p>
            </div>
        </div>
    }
}
