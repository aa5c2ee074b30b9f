use contracts::common::Author;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

#[component]
pub fn PostCard(
    id: i64,
    photo: String,
    text: Option<String>,
    /// `None` when every card on the page has the same author
    #[prop(optional)]
    author: Option<Author>,
) -> impl IntoView {
    let href = AppRoute::Single {
        theid: id.to_string(),
    }
    .href();

    view! {
        <div class="post-card">
            <thaw::Card>
                <A href=href>
                    <img class="post-card__photo" src=photo alt="pet photo" loading="lazy" />
                </A>
                {text.map(|t| view! { <p class="post-card__text">{t}</p> })}
                {author.map(|a| {
                    let profile = AppRoute::profile_of(&a.email);
                    view! {
                        <A href=profile attr:class="post-card__author">
                            {a.user_photo.map(|src| view! { <img class="avatar" src=src alt="" /> })}
                            <span>{a.pet_star}</span>
                        </A>
                    }
                })}
            </thaw::Card>
        </div>
    }
}
