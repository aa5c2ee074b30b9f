use serde::{Deserialize, Serialize};

/// Body of every plain acknowledgement and every error response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

/// Author block embedded in posts, comments, topics and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub pet_star: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_photo: Option<String>,
}
