use leptos::prelude::*;

use crate::api::ApiError;

/// Data a page fetches on mount.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }
}

/// Renders the spinner, the error, or `render` applied to the loaded value.
pub fn load_view<T, V, F>(state: LoadState<T>, render: F) -> AnyView
where
    V: IntoView + 'static,
    F: FnOnce(T) -> V,
{
    match state {
        LoadState::Loading => view! {
            <div class="load-state load-state--loading">
                <thaw::Spinner />
            </div>
        }
        .into_any(),
        LoadState::Failed(message) => view! {
            <div class="load-state load-state--error">{message}</div>
        }
        .into_any(),
        LoadState::Loaded(value) => render(value).into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_result_keeps_error_message() {
        let state: LoadState<()> = LoadState::from_result(Err(ApiError::Rejected {
            status: 404,
            message: "Post not found".into(),
        }));
        assert_eq!(state, LoadState::Failed("Post not found".into()));

        let state = LoadState::from_result(Ok(3));
        assert_eq!(state, LoadState::Loaded(3));
    }
}
