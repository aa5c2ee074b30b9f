use std::collections::BTreeMap;

use contracts::common::Author;
use contracts::forum::TopicDto;
use contracts::posts::PostDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::{forum as forum_api, posts as posts_api, ApiError};
use crate::routes::AppRoute;
use crate::shared::load_state::{load_view, LoadState};
use crate::store::guard::RequireAuth;
use crate::store::{use_store, AppStore};

/// One community member as seen through their public activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorSummary {
    pub author: Author,
    pub posts: usize,
    pub topics: usize,
}

/// Distinct authors of `posts` and `topics`, ordered by PetStar name.
pub fn collect_authors(posts: &[PostDto], topics: &[TopicDto]) -> Vec<AuthorSummary> {
    let mut by_email: BTreeMap<String, AuthorSummary> = BTreeMap::new();

    for post in posts {
        let summary = summary_for(&mut by_email, &post.author);
        summary.posts += 1;
        if summary.author.user_photo.is_none() {
            summary.author.user_photo = post.author.user_photo.clone();
        }
    }
    for topic in topics {
        if let Some(author) = &topic.author {
            summary_for(&mut by_email, author).topics += 1;
        }
    }

    let mut authors: Vec<AuthorSummary> = by_email.into_values().collect();
    authors.sort_by_key(|a| a.author.pet_star.to_lowercase());
    authors
}

fn summary_for<'a>(
    by_email: &'a mut BTreeMap<String, AuthorSummary>,
    author: &Author,
) -> &'a mut AuthorSummary {
    by_email
        .entry(author.email.clone())
        .or_insert_with(|| AuthorSummary {
            author: author.clone(),
            posts: 0,
            topics: 0,
        })
}

/// Posts and topics feeding the profile pages.
pub(crate) async fn load_activity(store: AppStore) -> Result<(Vec<PostDto>, Vec<TopicDto>), ApiError> {
    let posts = store
        .authed(|client, token| async move { posts_api::all_posts(&client, &token).await })
        .await?
        .posts;
    let topics = store
        .authed(|client, token| async move { forum_api::all_topics(&client, &token).await })
        .await?
        .forum_topics;
    Ok((posts, topics))
}

#[component]
pub fn Profiles() -> impl IntoView {
    view! {
        <RequireAuth>
            <ProfileDirectory />
        </RequireAuth>
    }
}

#[component]
fn ProfileDirectory() -> impl IntoView {
    let store = use_store();
    let authors = RwSignal::new(LoadState::<Vec<AuthorSummary>>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = load_activity(store)
                .await
                .map(|(posts, topics)| collect_authors(&posts, &topics));
            authors.set(LoadState::from_result(result));
        });
    });

    view! {
        <section class="profiles">
            <h1>"Pet lovers"</h1>
            {move || load_view(authors.get(), |authors| {
                view! {
                    <ul class="profiles__list">
                        {authors
                            .into_iter()
                            .map(|s| {
                                let href = AppRoute::profile_of(&s.author.email);
                                view! {
                                    <li class="profiles__item">
                                        {s.author.user_photo.map(|src| view! { <img class="avatar" src=src alt="" /> })}
                                        <A href=href>{s.author.pet_star}</A>
                                        <span class="muted">
                                            {format!("{} posts, {} topics", s.posts, s.topics)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str, email: &str, photo: Option<&str>) -> Author {
        Author {
            pet_star: name.into(),
            email: email.into(),
            user_photo: photo.map(str::to_string),
        }
    }

    fn post(id: i64, by: Author) -> PostDto {
        PostDto {
            id,
            post_photo: format!("https://img/{}.png", id),
            post_text: None,
            author: by,
        }
    }

    fn topic(id: i64, by: Option<Author>) -> TopicDto {
        TopicDto {
            id,
            title: "t".into(),
            text: "x".into(),
            author: by,
        }
    }

    #[test]
    fn authors_are_deduplicated_by_email_and_counted() {
        let rex = author("Rex", "rex@pets.com", None);
        let mia = author("mia", "mia@pets.com", Some("https://img/mia.png"));
        let posts = vec![post(1, rex.clone()), post(2, mia.clone()), post(3, rex.clone())];
        let topics = vec![topic(1, Some(mia.clone())), topic(2, None)];

        let authors = collect_authors(&posts, &topics);

        assert_eq!(
            authors,
            vec![
                AuthorSummary { author: mia, posts: 1, topics: 1 },
                AuthorSummary { author: rex, posts: 2, topics: 0 },
            ]
        );
    }

    #[test]
    fn later_post_fills_missing_photo() {
        let posts = vec![
            post(1, author("Rex", "rex@pets.com", None)),
            post(2, author("Rex", "rex@pets.com", Some("https://img/rex.png"))),
        ];
        let authors = collect_authors(&posts, &[]);
        assert_eq!(authors.len(), 1);
        assert_eq!(
            authors[0].author.user_photo.as_deref(),
            Some("https://img/rex.png")
        );
    }

    #[test]
    fn no_activity_no_authors() {
        assert!(collect_authors(&[], &[]).is_empty());
    }
}
