use contracts::common::MessageResponse;
use contracts::posts::{
    AllPostsResponse, NewCommentRequest, NewPostRequest, PostCommentsResponse,
    SinglePostsResponse,
};

use super::{ApiClient, ApiError};

pub async fn all_posts(client: &ApiClient, token: &str) -> Result<AllPostsResponse, ApiError> {
    client.get("/api/allPosts", Some(token)).await
}

/// Posts written by the token's owner
pub async fn own_posts(client: &ApiClient, token: &str) -> Result<SinglePostsResponse, ApiError> {
    client.get("/api/singlePosts", Some(token)).await
}

pub async fn create_post(
    client: &ApiClient,
    token: &str,
    request: &NewPostRequest,
) -> Result<MessageResponse, ApiError> {
    client.post("/api/post", request, Some(token)).await
}

/// A post together with its comments
pub async fn post_comments(
    client: &ApiClient,
    token: &str,
    post_id: i64,
) -> Result<PostCommentsResponse, ApiError> {
    client
        .get(&format!("/api/commentPost/{}", post_id), Some(token))
        .await
}

pub async fn add_comment(
    client: &ApiClient,
    token: &str,
    post_id: i64,
    request: &NewCommentRequest,
) -> Result<MessageResponse, ApiError> {
    client
        .post(&format!("/api/commentPost/{}", post_id), request, Some(token))
        .await
}
