use serde::{Deserialize, Serialize};

use crate::common::Author;

/// `POST /api/post`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPostRequest {
    pub post_photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_text: Option<String>,
}

/// A post as listed by `GET /api/allPosts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub post_photo: String,
    #[serde(default)]
    pub post_text: Option<String>,
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllPostsResponse {
    pub msg: String,
    pub posts: Vec<PostDto>,
}

/// A post owned by the current user; the author is reported once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnPostDto {
    pub id: i64,
    pub post_photo: String,
    #[serde(default)]
    pub post_text: Option<String>,
}

/// `GET /api/singlePosts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinglePostsResponse {
    pub msg: String,
    pub author: Author,
    pub posts: Vec<OwnPostDto>,
}

/// `POST /api/commentPost/<post_id>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentRequest {
    pub comment_post_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub comment_post: String,
    pub author: Author,
}

/// `GET /api/commentPost/<post_id>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentsResponse {
    pub msg: String,
    pub post: PostDto,
    pub comment_post: Vec<CommentDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_comments_response_parses() {
        let body = json!({
            "msg": "ok",
            "post": {
                "id": 3,
                "postPhoto": "https://img/3.png",
                "postText": null,
                "author": { "petStar": "Rex", "email": "a@b.com" }
            },
            "commentPost": [
                {
                    "id": 1,
                    "commentPost": "cute!",
                    "author": { "petStar": "Mia", "email": "m@b.com" }
                }
            ]
        });
        let response: PostCommentsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.post.id, 3);
        assert_eq!(response.post.author.user_photo, None);
        assert_eq!(response.comment_post.len(), 1);
        assert_eq!(response.comment_post[0].comment_post, "cute!");
    }

    #[test]
    fn new_post_without_text_omits_field() {
        let request = NewPostRequest {
            post_photo: "https://img/1.png".into(),
            post_text: None,
        };
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({ "postPhoto": "https://img/1.png" })
        );
    }
}
