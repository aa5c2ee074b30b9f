//! Drafts for user-generated content: posts, comments, topics, replies.

use contracts::forum::{NewTopicRequest, NewTopicResponseRequest};
use contracts::posts::{NewCommentRequest, NewPostRequest};

use super::{optional, require, Rejection};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    pub photo_url: String,
    pub text: String,
}

impl PostForm {
    pub fn validate(&self) -> Result<NewPostRequest, Rejection> {
        Ok(NewPostRequest {
            post_photo: require(&self.photo_url, "A photo")?,
            post_text: optional(&self.text),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub text: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<NewCommentRequest, Rejection> {
        Ok(NewCommentRequest {
            comment_post_text: require(&self.text, "A comment")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicForm {
    pub title: String,
    pub text: String,
}

impl TopicForm {
    pub fn validate(&self) -> Result<NewTopicRequest, Rejection> {
        Ok(NewTopicRequest {
            title: require(&self.title, "A title")?,
            text: require(&self.text, "A message")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplyForm {
    pub text: String,
}

impl ReplyForm {
    pub fn validate(&self) -> Result<NewTopicResponseRequest, Rejection> {
        Ok(NewTopicResponseRequest {
            topic_response_text: require(&self.text, "A reply")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_needs_photo_text_is_optional() {
        assert_eq!(
            PostForm::default().validate(),
            Err(Rejection::Missing("A photo"))
        );
        let request = PostForm {
            photo_url: "https://res.cloudinary.com/demo/image/upload/dog.jpg".into(),
            text: "  ".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(request.post_text, None);
    }

    #[test]
    fn topic_needs_title_and_text() {
        let form = TopicForm {
            title: "Leash training".into(),
            text: String::new(),
        };
        assert_eq!(form.validate(), Err(Rejection::Missing("A message")));
    }

    #[test]
    fn blank_comment_and_reply_are_rejected() {
        assert!(CommentForm { text: " ".into() }.validate().is_err());
        assert_eq!(
            ReplyForm { text: "Same here".into() }
                .validate()
                .map(|r| r.topic_response_text),
            Ok("Same here".to_string())
        );
    }
}
