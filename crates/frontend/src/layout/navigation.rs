use leptos::prelude::*;
use leptos_router::hooks::use_location;
use log::debug;

use crate::config::AppConfig;
use crate::routes::AppRoute;

/// Identifies a visited location. Query-only changes, such as moving
/// between two profiles, count as navigations.
fn location_key(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, search)
    }
}

/// Scrolls back to the top and retitles the document on every navigation.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();
    let basename = use_context::<AppConfig>()
        .map(|c| c.basename)
        .unwrap_or_default();

    let visited =
        Memo::new(move |_| location_key(&location.pathname.get(), &location.search.get()));

    Effect::new(move |_| {
        let key = visited.get();
        let path = location.pathname.get_untracked();
        let route = AppRoute::resolve_under(&basename, &path);
        debug!("navigated to {} ({:?})", key, route);

        let Some(window) = web_sys::window() else {
            return;
        };
        window.scroll_to_with_x_and_y(0.0, 0.0);
        if let Some(document) = window.document() {
            document.set_title(&format!("PetStar | {}", route.title()));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_change_is_a_new_location() {
        let a = location_key("/profile", "?email=a%40b.com");
        let b = location_key("/profile", "email=c%40d.com");
        assert_ne!(a, b);
        assert_eq!(a, "/profile?email=a%40b.com");
        assert_eq!(location_key("/forum", ""), "/forum");
        assert_eq!(location_key("/forum", "?"), "/forum");
    }
}
