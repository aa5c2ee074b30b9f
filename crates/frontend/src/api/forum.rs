use contracts::common::MessageResponse;
use contracts::forum::{
    AllTopicsResponse, NewTopicRequest, NewTopicResponseRequest, OwnTopicsResponse,
    TopicResponsesResponse,
};

use super::{ApiClient, ApiError};

pub async fn all_topics(client: &ApiClient, token: &str) -> Result<AllTopicsResponse, ApiError> {
    client.get("/api/allForumTopics", Some(token)).await
}

/// Topics opened by the token's owner
pub async fn own_topics(client: &ApiClient, token: &str) -> Result<OwnTopicsResponse, ApiError> {
    client.get("/api/singleForumTopics", Some(token)).await
}

pub async fn create_topic(
    client: &ApiClient,
    token: &str,
    request: &NewTopicRequest,
) -> Result<MessageResponse, ApiError> {
    client.post("/api/forumTopic", request, Some(token)).await
}

pub async fn topic_responses(
    client: &ApiClient,
    token: &str,
    topic_id: i64,
) -> Result<TopicResponsesResponse, ApiError> {
    client
        .get(&format!("/api/topicResponse/{}", topic_id), Some(token))
        .await
}

pub async fn add_response(
    client: &ApiClient,
    token: &str,
    topic_id: i64,
    request: &NewTopicResponseRequest,
) -> Result<MessageResponse, ApiError> {
    client
        .post(&format!("/api/topicResponse/{}", topic_id), request, Some(token))
        .await
}
