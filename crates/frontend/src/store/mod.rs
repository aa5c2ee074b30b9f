//! Application-wide session store.
//!
//! `AppStore` is a `Copy` handle provided through Leptos context. Its
//! actions perform the network call, update the session once the call
//! settles, and hand the outcome back as a `Result`.

pub mod guard;
mod storage;

use std::future::Future;

use contracts::auth::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateUserRequest, UserData,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use crate::api::{self, ApiClient, ApiError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserData>,
    /// Email of the last account created from this browser tab.
    pub registered_email: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.pet_star.clone())
    }
}

#[derive(Clone, Copy)]
pub struct AppStore {
    pub session: RwSignal<SessionState>,
    client: StoredValue<ApiClient>,
}

impl AppStore {
    /// Creates the store, seeded with whatever session `localStorage` holds.
    pub fn new(client: ApiClient) -> Self {
        let session = match storage::load_session() {
            Some((token, user)) => SessionState {
                token: Some(token),
                user,
                registered_email: None,
            },
            None => SessionState::default(),
        };

        Self {
            session: RwSignal::new(session),
            client: StoredValue::new(client),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token.clone())
    }

    /// Revalidates a token restored from `localStorage`. Any failure other
    /// than an unreachable backend ends the session.
    pub fn restore(&self) {
        if self.token().is_none() {
            return;
        }
        let store = *self;
        spawn_local(async move {
            match store.refresh_user().await {
                Ok(user) => info!("restored session for {}", user.email),
                Err(e) if e.discards_stored_session() => {
                    warn!("stored session rejected: {}", e);
                    store.logout();
                }
                Err(e) => warn!("could not revalidate stored session: {}", e),
            }
        });
    }

    /// Creates an account. Callers validate the form first.
    pub async fn register(self, request: RegisterRequest) -> Result<(), ApiError> {
        let client = self.client();
        api::auth::register(&client, &request).await?;

        info!("registered {}", request.email);
        self.session
            .update(|s| s.registered_email = Some(request.email));
        Ok(())
    }

    pub async fn login(self, request: LoginRequest) -> Result<UserData, ApiError> {
        let client = self.client();
        let response = api::auth::login(&client, &request).await?;

        storage::save_session(&response.jwt_token, &response.user_data);
        info!("logged in as {}", response.user_data.email);

        let user = response.user_data.clone();
        self.session.update(|s| {
            s.token = Some(response.jwt_token);
            s.user = Some(response.user_data);
        });
        Ok(user)
    }

    pub fn logout(&self) {
        storage::clear_session();
        self.session.update(|s| {
            s.token = None;
            s.user = None;
        });
        info!("logged out");
    }

    pub async fn refresh_user(self) -> Result<UserData, ApiError> {
        let response = self
            .authed(|client, token| async move { api::auth::current_user(&client, &token).await })
            .await?;

        let user = response.user_data;
        storage::save_user(&user);
        self.session.update(|s| s.user = Some(user.clone()));
        Ok(user)
    }

    pub async fn update_profile(self, request: UpdateUserRequest) -> Result<UserData, ApiError> {
        self.authed(|client, token| async move {
            api::auth::update_user(&client, &token, &request).await
        })
        .await?;
        self.refresh_user().await
    }

    /// A 401 here means a wrong current password, so the session is kept.
    pub async fn change_password(self, request: ChangePasswordRequest) -> Result<String, ApiError> {
        let token = self.token().ok_or_else(ApiError::not_logged_in)?;
        let client = self.client();
        let response = api::auth::change_password(&client, &token, &request).await?;
        Ok(response.msg)
    }

    /// Runs an authenticated call. A token rejected by the backend ends the session.
    pub async fn authed<T, F, Fut>(self, call: F) -> Result<T, ApiError>
    where
        F: FnOnce(ApiClient, String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let token = self.token().ok_or_else(ApiError::not_logged_in)?;
        let result = call(self.client(), token).await;
        if let Err(e) = &result {
            self.expire_on_unauthorized(e);
        }
        result
    }

    pub fn expire_on_unauthorized(&self, error: &ApiError) {
        if error.is_unauthorized() && self.token().is_some() {
            warn!("session expired: {}", error);
            self.logout();
        }
    }
}

pub fn use_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_without_token_is_anonymous() {
        let mut session = SessionState::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.display_name(), None);

        session.token = Some("jwt".into());
        session.user = Some(UserData {
            email: "a@b.com".into(),
            pet_star: "Rex".into(),
            ..UserData::default()
        });
        assert!(session.is_authenticated());
        assert_eq!(session.display_name().as_deref(), Some("Rex"));
    }
}
