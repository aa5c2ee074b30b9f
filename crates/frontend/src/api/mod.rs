//! HTTP access to the PetStar backend and to Cloudinary.
//!
//! Every call returns `Result<_, ApiError>`; error bodies of the form
//! `{"msg": "..."}` are surfaced as the error message.

pub mod auth;
pub mod cloudinary;
pub mod forum;
pub mod posts;

use contracts::common::MessageResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("Could not encode the request: {0}")]
    Serialize(String),
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
    /// Missing, expired or malformed token.
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl ApiError {
    /// Builds the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<MessageResponse>(body)
            .ok()
            .map(|m| m.msg)
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        // flask-jwt-extended answers 401 for expired tokens and 422 for malformed ones
        match status {
            401 | 422 => ApiError::Unauthorized { message },
            _ => ApiError::Rejected { status, message },
        }
    }

    pub fn not_logged_in() -> Self {
        ApiError::Unauthorized {
            message: "Please log in first".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Whether a failed revalidation means the saved token is useless.
    /// Only an unreachable backend leaves it in place.
    pub fn discards_stored_session(&self) -> bool {
        !matches!(self, ApiError::Network(_))
    }
}

/// Client bound to one backend root URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the backend root with an absolute API path such as `/api/login`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get<T>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = authorize(Request::get(&self.url(path)), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        send_json(authorize(Request::post(&self.url(path)), token), body).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        send_json(authorize(Request::put(&self.url(path)), token), body).await
    }
}

fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = builder
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub(crate) async fn read_json<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !ok {
        let error = ApiError::from_response(status, &body);
        warn!("{} {}: {}", response.url(), status, error);
        return Err(error);
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_paths() {
        let client = ApiClient::new("https://api.petstar.dev/");
        assert_eq!(client.base_url(), "https://api.petstar.dev");
        assert_eq!(client.url("/api/login"), "https://api.petstar.dev/api/login");
        assert_eq!(client.url("api/user"), "https://api.petstar.dev/api/user");
    }

    #[test]
    fn backend_message_becomes_error_text() {
        let error = ApiError::from_response(400, r#"{"msg": "The email used is already in use"}"#);
        assert_eq!(
            error,
            ApiError::Rejected {
                status: 400,
                message: "The email used is already in use".to_string()
            }
        );
        assert_eq!(error.to_string(), "The email used is already in use");
    }

    #[test]
    fn body_without_message_falls_back_to_status() {
        let error = ApiError::from_response(500, "<html>Internal Server Error</html>");
        assert_eq!(error.to_string(), "Request failed with status 500");

        let error = ApiError::from_response(404, r#"{"msg": "  "}"#);
        assert_eq!(error.to_string(), "Request failed with status 404");
    }

    #[test]
    fn only_network_failures_keep_a_stored_session() {
        assert!(!ApiError::Network("offline".into()).discards_stored_session());
        assert!(ApiError::from_response(401, r#"{"msg": "Token has expired"}"#).discards_stored_session());
        assert!(ApiError::from_response(500, r#"{"msg": "User not found"}"#).discards_stored_session());
        assert!(ApiError::Decode("missing field `userData`".into()).discards_stored_session());
    }

    #[test]
    fn token_failures_are_unauthorized() {
        assert!(ApiError::from_response(401, r#"{"msg": "Token has expired"}"#).is_unauthorized());
        assert!(ApiError::from_response(422, r#"{"msg": "Not enough segments"}"#).is_unauthorized());
        assert!(!ApiError::from_response(400, "{}").is_unauthorized());
    }
}
