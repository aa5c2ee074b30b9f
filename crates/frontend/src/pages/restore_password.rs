use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::api;
use crate::forms::password::{parse_restore_token, RestorePasswordForm};
use crate::routes::AppRoute;
use crate::shared::components::form_field::Field;
use crate::shared::notification::use_notifications;
use crate::store::use_store;

#[component]
pub fn RestorePassword() -> impl IntoView {
    let store = use_store();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let params = use_params_map();

    let token = move || params.with(|p| p.get("uuid"));
    let link_is_valid = move || parse_restore_token(token().as_deref()).is_ok();

    let form = RwSignal::new(RestorePasswordForm::default());
    let is_saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let uuid = params.with_untracked(|p| p.get("uuid"));
        let request = match form.with_untracked(|f| f.validate(uuid.as_deref())) {
            Ok(request) => request,
            Err(rejection) => {
                notifications.show(rejection.notice());
                return;
            }
        };

        is_saving.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let client = store.client();
            match api::auth::restore_password(&client, &request).await {
                Ok(_) => {
                    notifications.success("Password changed successfully");
                    navigate(&AppRoute::Login.href(), NavigateOptions::default());
                }
                Err(e) => notifications.error("Could not change the password", e.to_string()),
            }
            is_saving.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Choose a new password"</h2>
                {move || {
                    if link_is_valid() {
                        None
                    } else {
                        Some(view! {
                            <p class="load-state load-state--error">
                                "This restore link is invalid. Request a new one from the "
                                <A href=AppRoute::Login.href()>"login page"</A>"."
                            </p>
                        })
                    }
                }}
                <form on:submit=on_submit>
                    <Field
                        id="newPassword"
                        label="New password"
                        kind="password"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=move |v: String| form.update(|f| f.password = v)
                    />
                    <Field
                        id="confirmNewPassword"
                        label="Confirm new password"
                        kind="password"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                        on_input=move |v: String| form.update(|f| f.confirm_password = v)
                    />
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_saving.get() || !link_is_valid()
                    >
                        "Save password"
                    </button>
                </form>
            </div>
        </div>
    }
}
