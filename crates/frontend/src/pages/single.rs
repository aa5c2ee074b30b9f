use contracts::posts::PostCommentsResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api::posts as posts_api;
use crate::forms::content::CommentForm;
use crate::routes::AppRoute;
use crate::shared::components::form_field::TextAreaField;
use crate::shared::components::post_card::PostCard;
use crate::shared::load_state::{load_view, LoadState};
use crate::shared::notification::use_notifications;
use crate::store::guard::RequireAuth;
use crate::store::use_store;

/// Post ids are numeric; anything else is a broken link.
pub(crate) fn parse_post_id(theid: Option<&str>) -> Option<i64> {
    theid.and_then(|id| id.trim().parse::<i64>().ok()).filter(|id| *id > 0)
}

#[component]
pub fn Single() -> impl IntoView {
    let params = use_params_map();
    let post_id = Memo::new(move |_| params.with(|p| parse_post_id(p.get("theid").as_deref())));

    view! {
        <RequireAuth>
            {move || match post_id.get() {
                Some(id) => view! { <PostThread post_id=id /> }.into_any(),
                None => view! {
                    <section class="single single--invalid">
                        <h1>"This post link is not valid"</h1>
                        <A href=AppRoute::General.href()>"Back to the feed"</A>
                    </section>
                }
                .into_any(),
            }}
        </RequireAuth>
    }
}

#[component]
fn PostThread(post_id: i64) -> impl IntoView {
    let store = use_store();
    let notifications = use_notifications();
    let thread = RwSignal::new(LoadState::<PostCommentsResponse>::Loading);
    let form = RwSignal::new(CommentForm::default());
    let is_sending = RwSignal::new(false);

    let reload = move || {
        spawn_local(async move {
            let result = store
                .authed(move |client, token| async move {
                    posts_api::post_comments(&client, &token, post_id).await
                })
                .await;
            thread.set(LoadState::from_result(result));
        });
    };

    Effect::new(move |_| reload());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(CommentForm::validate) {
            Ok(request) => request,
            Err(rejection) => {
                notifications.show(rejection.notice());
                return;
            }
        };

        is_sending.set(true);
        spawn_local(async move {
            let result = store
                .authed(move |client, token| async move {
                    posts_api::add_comment(&client, &token, post_id, &request).await
                })
                .await;
            match result {
                Ok(_) => {
                    form.set(CommentForm::default());
                    reload();
                }
                Err(e) => notifications.error("Could not add the comment", e.to_string()),
            }
            is_sending.set(false);
        });
    };

    view! {
        <section class="single">
            {move || load_view(thread.get(), |thread| {
                let post = thread.post;
                view! {
                    <PostCard id=post.id photo=post.post_photo text=post.post_text author=post.author />
                    <h2>"Comments"</h2>
                    {if thread.comment_post.is_empty() {
                        view! { <p class="muted">"No comments yet."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="comments">
                                {thread
                                    .comment_post
                                    .into_iter()
                                    .map(|c| {
                                        let profile = AppRoute::profile_of(&c.author.email);
                                        view! {
                                            <li class="comment">
                                                <A href=profile attr:class="comment__author">
                                                    {c.author.pet_star}
                                                </A>
                                                <p>{c.comment_post}</p>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                }
            })}
            <form class="comment-form" on:submit=on_submit>
                <TextAreaField
                    id="commentPostText"
                    label="Leave a comment"
                    value=Signal::derive(move || form.with(|f| f.text.clone()))
                    on_input=move |v: String| form.update(|f| f.text = v)
                />
                <button type="submit" class="button" disabled=move || is_sending.get()>
                    "Comment"
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_id_must_be_positive_number() {
        assert_eq!(parse_post_id(Some("42")), Some(42));
        assert_eq!(parse_post_id(Some("abc")), None);
        assert_eq!(parse_post_id(Some("0")), None);
        assert_eq!(parse_post_id(None), None);
    }
}
