use contracts::posts::PostDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::posts as posts_api;
use crate::forms::content::PostForm;
use crate::shared::components::form_field::{Field, TextAreaField};
use crate::shared::components::post_card::PostCard;
use crate::shared::load_state::{load_view, LoadState};
use crate::shared::notification::use_notifications;
use crate::store::guard::RequireAuth;
use crate::store::use_store;

#[component]
pub fn General() -> impl IntoView {
    view! {
        <RequireAuth>
            <Feed />
        </RequireAuth>
    }
}

#[component]
fn Feed() -> impl IntoView {
    let store = use_store();
    let feed = RwSignal::new(LoadState::<Vec<PostDto>>::Loading);

    let reload = move || {
        spawn_local(async move {
            let result = store
                .authed(|client, token| async move { posts_api::all_posts(&client, &token).await })
                .await
                .map(|r| r.posts);
            feed.set(LoadState::from_result(result));
        });
    };

    Effect::new(move |_| reload());

    view! {
        <section class="feed">
            <h1>"What's new"</h1>
            <NewPostForm on_created=move |_: ()| reload() />
            {move || load_view(feed.get(), |posts| {
                if posts.is_empty() {
                    return view! { <p class="muted">"No posts yet. Be the first!"</p> }.into_any();
                }
                view! {
                    <div class="post-grid">
                        {posts
                            .into_iter()
                            .rev()
                            .map(|p| view! {
                                <PostCard id=p.id photo=p.post_photo text=p.post_text author=p.author />
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            })}
        </section>
    }
}

/// Publishes a post. `photo` prefills the photo URL, e.g. after an upload.
#[component]
pub fn NewPostForm(
    #[prop(into)] on_created: Callback<()>,
    #[prop(optional)] photo: Option<String>,
) -> impl IntoView {
    let store = use_store();
    let notifications = use_notifications();

    let form = RwSignal::new(PostForm {
        photo_url: photo.unwrap_or_default(),
        text: String::new(),
    });
    let is_posting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match form.with_untracked(PostForm::validate) {
            Ok(request) => request,
            Err(rejection) => {
                notifications.show(rejection.notice());
                return;
            }
        };

        is_posting.set(true);
        spawn_local(async move {
            let result = store
                .authed(|client, token| async move {
                    posts_api::create_post(&client, &token, &request).await
                })
                .await;
            match result {
                Ok(_) => {
                    notifications.success("Post published!");
                    form.set(PostForm::default());
                    on_created.run(());
                }
                Err(e) => notifications.error("Could not publish the post", e.to_string()),
            }
            is_posting.set(false);
        });
    };

    view! {
        <form class="new-post" on:submit=on_submit>
            <Field
                id="postPhoto"
                label="Photo URL"
                kind="url"
                placeholder="https://..."
                value=Signal::derive(move || form.with(|f| f.photo_url.clone()))
                on_input=move |v: String| form.update(|f| f.photo_url = v)
            />
            <TextAreaField
                id="postText"
                label="Say something about it"
                value=Signal::derive(move || form.with(|f| f.text.clone()))
                on_input=move |v: String| form.update(|f| f.text = v)
            />
            <button type="submit" class="button button--primary" disabled=move || is_posting.get()>
                "Publish"
            </button>
        </form>
    }
}
