use leptos::prelude::*;

/// Labelled `<input>` bound to one field of a form draft.
#[component]
pub fn Field(
    /// Element id, also used by the label
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    /// "text" (default), "email", "password", "url", "date"
    #[prop(optional)]
    kind: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                id=id
                class="form__input"
                type=kind.unwrap_or("text")
                placeholder=placeholder
                required=required
                disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Multi-line variant of [`Field`].
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <textarea
                id=id
                class="form__input"
                rows="3"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// "I agree with the terms" checkbox shared by login and signup.
#[component]
pub fn TermsCheckbox(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form__checkbox-wrapper">
            <input
                id="terms"
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for="terms">
                "I agree with the Terms of Use and Privacy Policy"
            </label>
        </div>
    }
}
