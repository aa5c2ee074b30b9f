use contracts::posts::PostDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use super::profiles::{collect_authors, load_activity, AuthorSummary};
use crate::routes::AppRoute;
use crate::shared::components::post_card::PostCard;
use crate::shared::load_state::{load_view, LoadState};
use crate::store::guard::RequireAuth;
use crate::store::use_store;

/// Posts written by the author with `email`, newest first.
pub fn posts_by(posts: &[PostDto], email: &str) -> Vec<PostDto> {
    posts
        .iter()
        .rev()
        .filter(|p| p.author.email.eq_ignore_ascii_case(email))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
struct PublicProfile {
    summary: Option<AuthorSummary>,
    posts: Vec<PostDto>,
}

#[component]
pub fn Profile() -> impl IntoView {
    let query = use_query_map();
    let email = move || query.with(|q| q.get("email")).filter(|e| !e.trim().is_empty());

    view! {
        <RequireAuth>
            {move || match email() {
                Some(email) => view! { <AuthorProfile email=email /> }.into_any(),
                None => view! {
                    <section class="profile">
                        <p>"No profile selected. "<A href=AppRoute::Profiles.href()>"Browse profiles"</A></p>
                    </section>
                }
                .into_any(),
            }}
        </RequireAuth>
    }
}

#[component]
fn AuthorProfile(email: String) -> impl IntoView {
    let store = use_store();
    let profile = RwSignal::new(LoadState::<PublicProfile>::Loading);

    let target = email.clone();
    Effect::new(move |_| {
        let target = target.clone();
        spawn_local(async move {
            let result = load_activity(store).await.map(|(posts, topics)| {
                let summary = collect_authors(&posts, &topics)
                    .into_iter()
                    .find(|s| s.author.email.eq_ignore_ascii_case(&target));
                PublicProfile {
                    summary,
                    posts: posts_by(&posts, &target),
                }
            });
            profile.set(LoadState::from_result(result));
        });
    });

    view! {
        <section class="profile">
            {move || {
                let email = email.clone();
                load_view(profile.get(), move |profile| {
                    let Some(summary) = profile.summary else {
                        return view! { <p class="muted">{format!("{} has not shared anything yet.", email)}</p> }.into_any();
                    };
                    view! {
                        <header class="profile__header">
                            {summary.author.user_photo.clone().map(|src| view! { <img class="avatar avatar--large" src=src alt="" /> })}
                            <h1>{summary.author.pet_star.clone()}</h1>
                            <span class="muted">
                                {format!("{} posts, {} forum topics", summary.posts, summary.topics)}
                            </span>
                        </header>
                        <div class="post-grid">
                            {profile
                                .posts
                                .into_iter()
                                .map(|p| view! { <PostCard id=p.id photo=p.post_photo text=p.post_text /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                })
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::common::Author;

    fn post(id: i64, email: &str) -> PostDto {
        PostDto {
            id,
            post_photo: format!("https://img/{}.png", id),
            post_text: None,
            author: Author {
                pet_star: "x".into(),
                email: email.into(),
                user_photo: None,
            },
        }
    }

    #[test]
    fn posts_by_filters_and_orders_newest_first() {
        let posts = vec![post(1, "rex@pets.com"), post(2, "mia@pets.com"), post(3, "Rex@Pets.com")];
        let ids: Vec<i64> = posts_by(&posts, "rex@pets.com").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(posts_by(&posts, "nobody@pets.com").is_empty());
    }
}
