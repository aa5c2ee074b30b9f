use contracts::auth::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, RestoreLinkRequest,
    RestorePasswordRequest, UpdateUserRequest, UserResponse,
};
use contracts::common::MessageResponse;

use super::{ApiClient, ApiError};

/// Create an account
pub async fn register(
    client: &ApiClient,
    request: &RegisterRequest,
) -> Result<MessageResponse, ApiError> {
    client.post("/api/register", request, None).await
}

/// Exchange credentials for a JWT and the user's profile
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    client.post("/api/login", request, None).await
}

/// Get current user info
pub async fn current_user(client: &ApiClient, token: &str) -> Result<UserResponse, ApiError> {
    client.get("/api/user", Some(token)).await
}

pub async fn update_user(
    client: &ApiClient,
    token: &str,
    request: &UpdateUserRequest,
) -> Result<MessageResponse, ApiError> {
    client.put("/api/user", request, Some(token)).await
}

pub async fn change_password(
    client: &ApiClient,
    token: &str,
    request: &ChangePasswordRequest,
) -> Result<MessageResponse, ApiError> {
    client.put("/api/changePassword", request, Some(token)).await
}

/// Ask the backend to mail a password restore link
pub async fn request_restore_link(
    client: &ApiClient,
    request: &RestoreLinkRequest,
) -> Result<MessageResponse, ApiError> {
    client.post("/api/restorePassword", request, None).await
}

/// Set a new password with the token from the restore link
pub async fn restore_password(
    client: &ApiClient,
    request: &RestorePasswordRequest,
) -> Result<MessageResponse, ApiError> {
    client.put("/api/restorePassword", request, None).await
}
