use contracts::forum::{TopicDto, TopicResponsesResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::forum as forum_api;
use crate::forms::content::{ReplyForm, TopicForm};
use crate::routes::AppRoute;
use crate::shared::components::form_field::{Field, TextAreaField};
use crate::shared::load_state::{load_view, LoadState};
use crate::shared::notification::use_notifications;
use crate::store::guard::RequireAuth;
use crate::store::use_store;

#[component]
pub fn Forum() -> impl IntoView {
    view! {
        <RequireAuth>
            <TopicBoard />
        </RequireAuth>
    }
}

#[component]
fn TopicBoard() -> impl IntoView {
    let store = use_store();
    let notifications = use_notifications();
    let topics = RwSignal::new(LoadState::<Vec<TopicDto>>::Loading);

    let reload = move || {
        spawn_local(async move {
            let result = store
                .authed(|client, token| async move { forum_api::all_topics(&client, &token).await })
                .await
                .map(|r| r.forum_topics);
            topics.set(LoadState::from_result(result));
        });
    };
    Effect::new(move |_| reload());

    let form = RwSignal::new(TopicForm::default());
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(TopicForm::validate) {
            Ok(request) => request,
            Err(rejection) => {
                notifications.show(rejection.notice());
                return;
            }
        };
        spawn_local(async move {
            let result = store
                .authed(|client, token| async move {
                    forum_api::create_topic(&client, &token, &request).await
                })
                .await;
            match result {
                Ok(_) => {
                    notifications.success("Topic created");
                    form.set(TopicForm::default());
                    reload();
                }
                Err(e) => notifications.error("Could not create the topic", e.to_string()),
            }
        });
    };

    view! {
        <section class="forum">
            <h1>"Forum"</h1>
            <form class="forum__new-topic" on:submit=on_submit>
                <Field
                    id="forumTopicTitle"
                    label="Title"
                    value=Signal::derive(move || form.with(|f| f.title.clone()))
                    on_input=move |v: String| form.update(|f| f.title = v)
                />
                <TextAreaField
                    id="forumTopicText"
                    label="Message"
                    value=Signal::derive(move || form.with(|f| f.text.clone()))
                    on_input=move |v: String| form.update(|f| f.text = v)
                />
                <button type="submit" class="button button--primary">"Open topic"</button>
            </form>

            {move || load_view(topics.get(), |topics| {
                view! {
                    <ul class="forum__topics">
                        {topics
                            .into_iter()
                            .rev()
                            .map(|topic| view! { <TopicItem topic=topic /> })
                            .collect_view()}
                    </ul>
                }
            })}
        </section>
    }
}

#[component]
fn TopicItem(topic: TopicDto) -> impl IntoView {
    let store = use_store();
    let notifications = use_notifications();

    let topic_id = topic.id;
    let expanded = RwSignal::new(false);
    let thread = RwSignal::new(LoadState::<TopicResponsesResponse>::Loading);

    let load_thread = move || {
        spawn_local(async move {
            let result = store
                .authed(|client, token| async move {
                    forum_api::topic_responses(&client, &token, topic_id).await
                })
                .await;
            thread.set(LoadState::from_result(result));
        });
    };

    let toggle = move |_| {
        let open = !expanded.get_untracked();
        expanded.set(open);
        if open {
            load_thread();
        }
    };

    let reply = RwSignal::new(ReplyForm::default());
    let on_reply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match reply.with_untracked(ReplyForm::validate) {
            Ok(request) => request,
            Err(rejection) => {
                notifications.show(rejection.notice());
                return;
            }
        };
        spawn_local(async move {
            let result = store
                .authed(|client, token| async move {
                    forum_api::add_response(&client, &token, topic_id, &request).await
                })
                .await;
            match result {
                Ok(_) => {
                    reply.set(ReplyForm::default());
                    load_thread();
                }
                Err(e) => notifications.error("Could not post the reply", e.to_string()),
            }
        });
    };

    let author = topic.author.clone();

    view! {
        <li class="forum__topic">
            <button class="forum__topic-title" on:click=toggle>{topic.title}</button>
            {author.map(|a| {
                let href = AppRoute::profile_of(&a.email);
                view! { <A href=href attr:class="forum__author">{a.pet_star}</A> }
            })}
            <p>{topic.text}</p>

            <Show when=move || expanded.get()>
                {move || load_view(thread.get(), |thread| {
                    view! {
                        <ul class="forum__responses">
                            {thread
                                .topic_response
                                .into_iter()
                                .map(|r| view! {
                                    <li>
                                        <strong>{r.author.pet_star}</strong>
                                        " "
                                        {r.topic_response_text}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    }
                })}
                <form class="forum__reply" on:submit=on_reply>
                    <Field
                        id="topicResponseText"
                        label="Reply"
                        value=Signal::derive(move || reply.with(|f| f.text.clone()))
                        on_input=move |v: String| reply.update(|f| f.text = v)
                    />
                    <button type="submit" class="button">"Reply"</button>
                </form>
            </Show>
        </li>
    }
}
