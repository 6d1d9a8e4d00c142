use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::application::domain::entities::MemberId;

pub const MAX_TITLE_LENGTH: usize = 255;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateTopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title is too long")]
    TitleTooLong,
    #[error("Content cannot be empty")]
    EmptyContent,
}

/// Validated topic creation: a title plus the body of what becomes
/// the topic's first post.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTopicCommand {
    pub forum_id: Uuid,
    pub author: Option<MemberId>,
    pub title: String,
    pub content: String,
}

impl CreateTopicCommand {
    pub fn new(
        forum_id: Uuid,
        author: Option<MemberId>,
        title: &str,
        content: &str,
    ) -> Result<Self, CreateTopicCommandError> {
        let title = title.trim();

        if title.is_empty() {
            return Err(CreateTopicCommandError::EmptyTitle);
        }

        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(CreateTopicCommandError::TitleTooLong);
        }

        let content = content.trim();

        if content.is_empty() {
            return Err(CreateTopicCommandError::EmptyContent);
        }

        Ok(Self {
            forum_id,
            author,
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedTopic {
    pub slug: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateTopicError {
    #[error("Forum not found")]
    ForumNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTopicUseCase {
    async fn execute(&self, command: CreateTopicCommand) -> Result<CreatedTopic, CreateTopicError>;
}
