//! The signed-in user's own profile: details, edits, password, activity.

use chrono::Local;
use contracts::forum::TopicDto;
use contracts::posts::OwnPostDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::api::{forum as forum_api, posts as posts_api};
use crate::forms::password::ChangePasswordForm;
use crate::forms::profile::{pet_age, ProfileForm};
use crate::shared::components::form_field::{Field, TextAreaField};
use crate::shared::components::post_card::PostCard;
use crate::shared::load_state::{load_view, LoadState};
use crate::shared::notification::use_notifications;
use crate::store::guard::RequireAuth;
use crate::store::use_store;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <OwnProfile />
        </RequireAuth>
    }
}

#[component]
fn OwnProfile() -> impl IntoView {
    let store = use_store();

    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(e) = store.refresh_user().await {
                warn!("could not refresh profile: {}", e);
            }
        });
    });

    let user = move || store.session.with(|s| s.user.clone());

    view! {
        <section class="own-profile">
            {move || user().map(|u| {
                let age = u
                    .birth_date
                    .as_deref()
                    .and_then(|d| pet_age(d, Local::now().date_naive()));
                view! {
                    <header class="profile__header">
                        {u.user_photo.clone().map(|src| view! { <img class="avatar avatar--large" src=src alt="" /> })}
                        <h1>{u.pet_star.clone()}</h1>
                        <span class="muted">{u.email.clone()}</span>
                        {u.breed.clone().map(|b| view! { <p>"Breed: "{b}</p> })}
                        {age.map(|a| view! { <p>"Age: "{a}</p> })}
                        {u.hobbies.clone().map(|h| view! { <p>"Hobbies: "{h}</p> })}
                    </header>
                }
            })}
            <ProfileEditor />
            <ChangePassword />
            <OwnPosts />
            <OwnTopics />
        </section>
    }
}

#[component]
fn ProfileEditor() -> impl IntoView {
    let store = use_store();
    let notifications = use_notifications();
    let form = RwSignal::new(ProfileForm::default());
    let is_saving = RwSignal::new(false);

    // refill the draft whenever the stored profile changes
    Effect::new(move |_| {
        if let Some(user) = store.session.with(|s| s.user.clone()) {
            form.set(ProfileForm::from(&user));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(ProfileForm::validate) {
            Ok(request) => request,
            Err(rejection) => {
                notifications.show(rejection.notice());
                return;
            }
        };

        is_saving.set(true);
        spawn_local(async move {
            match store.update_profile(request).await {
                Ok(_) => notifications.success("Information updated successfully"),
                Err(e) => notifications.error("Could not update your profile", e.to_string()),
            }
            is_saving.set(false);
        });
    };

    view! {
        <form class="profile-editor" on:submit=on_submit>
            <h2>"Edit profile"</h2>
            <Field
                id="petStar"
                label="PetStar Name"
                required=true
                value=Signal::derive(move || form.with(|f| f.pet_star.clone()))
                on_input=move |v: String| form.update(|f| f.pet_star = v)
            />
            <Field
                id="userPhoto"
                label="Photo URL"
                kind="url"
                value=Signal::derive(move || form.with(|f| f.user_photo.clone()))
                on_input=move |v: String| form.update(|f| f.user_photo = v)
            />
            <Field
                id="breed"
                label="Breed"
                value=Signal::derive(move || form.with(|f| f.breed.clone()))
                on_input=move |v: String| form.update(|f| f.breed = v)
            />
            <Field
                id="birthDate"
                label="Birth date"
                kind="date"
                value=Signal::derive(move || form.with(|f| f.birth_date.clone()))
                on_input=move |v: String| form.update(|f| f.birth_date = v)
            />
            <TextAreaField
                id="hobbies"
                label="Hobbies"
                value=Signal::derive(move || form.with(|f| f.hobbies.clone()))
                on_input=move |v: String| form.update(|f| f.hobbies = v)
            />
            <button type="submit" class="button button--primary" disabled=move || is_saving.get()>
                "Save"
            </button>
        </form>
    }
}

#[component]
fn ChangePassword() -> impl IntoView {
    let store = use_store();
    let notifications = use_notifications();
    let form = RwSignal::new(ChangePasswordForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(ChangePasswordForm::validate) {
            Ok(request) => request,
            Err(rejection) => {
                notifications.show(rejection.notice());
                return;
            }
        };

        spawn_local(async move {
            match store.change_password(request).await {
                Ok(msg) => {
                    notifications.success(msg);
                    form.set(ChangePasswordForm::default());
                }
                Err(e) => notifications.error("Could not change the password", e.to_string()),
            }
        });
    };

    view! {
        <form class="change-password" on:submit=on_submit>
            <h2>"Change password"</h2>
            <Field
                id="oldPassword"
                label="Current password"
                kind="password"
                required=true
                value=Signal::derive(move || form.with(|f| f.old_password.clone()))
                on_input=move |v: String| form.update(|f| f.old_password = v)
            />
            <Field
                id="newPassword"
                label="New password"
                kind="password"
                required=true
                value=Signal::derive(move || form.with(|f| f.new_password.clone()))
                on_input=move |v: String| form.update(|f| f.new_password = v)
            />
            <Field
                id="confirmNewPassword"
                label="Confirm new password"
                kind="password"
                required=true
                value=Signal::derive(move || form.with(|f| f.confirm_new_password.clone()))
                on_input=move |v: String| form.update(|f| f.confirm_new_password = v)
            />
            <button type="submit" class="button">"Change password"</button>
        </form>
    }
}

#[component]
fn OwnPosts() -> impl IntoView {
    let store = use_store();
    let posts = RwSignal::new(LoadState::<Vec<OwnPostDto>>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = store
                .authed(|client, token| async move { posts_api::own_posts(&client, &token).await })
                .await
                .map(|r| r.posts);
            posts.set(LoadState::from_result(result));
        });
    });

    view! {
        <section class="own-posts">
            <h2>"Your posts"</h2>
            {move || load_view(posts.get(), |posts| {
                if posts.is_empty() {
                    return view! { <p class="muted">"You have not posted anything yet."</p> }.into_any();
                }
                view! {
                    <div class="post-grid">
                        {posts
                            .into_iter()
                            .rev()
                            .map(|p| view! { <PostCard id=p.id photo=p.post_photo text=p.post_text /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            })}
        </section>
    }
}

#[component]
fn OwnTopics() -> impl IntoView {
    let store = use_store();
    let topics = RwSignal::new(LoadState::<Vec<TopicDto>>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = store
                .authed(|client, token| async move { forum_api::own_topics(&client, &token).await })
                .await
                .map(|r| r.forum_topics);
            topics.set(LoadState::from_result(result));
        });
    });

    view! {
        <section class="own-topics">
            <h2>"Your forum topics"</h2>
            {move || load_view(topics.get(), |topics| {
                view! {
                    <ul>
                        {topics
                            .into_iter()
                            .map(|t| view! { <li><strong>{t.title}</strong>" "{t.text}</li> })
                            .collect_view()}
                    </ul>
                }
            })}
        </section>
    }
}
