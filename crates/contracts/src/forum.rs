use serde::{Deserialize, Serialize};

use crate::common::Author;

/// `POST /api/forumTopic`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTopicRequest {
    #[serde(rename = "forumTopicTittle")]
    pub title: String,
    #[serde(rename = "forumTopicText")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDto {
    pub id: i64,
    #[serde(rename = "forumTopicTittle")]
    pub title: String,
    #[serde(rename = "forumTopicText")]
    pub text: String,
    /// Absent in `GET /api/singleForumTopics`, where the author is the caller.
    #[serde(default)]
    pub author: Option<Author>,
}

/// `GET /api/allForumTopics`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllTopicsResponse {
    pub msg: String,
    pub forum_topics: Vec<TopicDto>,
}

/// `GET /api/singleForumTopics`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnTopicsResponse {
    pub msg: String,
    pub author: Author,
    pub forum_topics: Vec<TopicDto>,
}

/// `POST /api/topicResponse/<topic_id>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTopicResponseRequest {
    pub topic_response_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponseDto {
    pub id: i64,
    pub topic_response_text: String,
    pub author: Author,
}

/// `GET /api/topicResponse/<topic_id>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponsesResponse {
    pub msg: String,
    pub forum_topic: TopicDto,
    pub topic_response: Vec<TopicResponseDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn topic_keeps_backend_spelling() {
        let request = NewTopicRequest {
            title: "Best toys?".into(),
            text: "Looking for ideas".into(),
        };
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({ "forumTopicTittle": "Best toys?", "forumTopicText": "Looking for ideas" })
        );
    }

    #[test]
    fn own_topics_have_no_author() {
        let body = json!({
            "msg": "ok",
            "author": { "email": "a@b.com", "petStar": "Rex" },
            "forumTopics": [
                { "id": 1, "forumTopicTittle": "t", "forumTopicText": "x" }
            ]
        });
        let response: OwnTopicsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.forum_topics[0].author, None);
        assert_eq!(response.author.pet_star, "Rex");
    }
}
