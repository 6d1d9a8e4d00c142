use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::create_topic::MAX_TITLE_LENGTH;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EditPostCommandError {
    #[error("Content cannot be empty")]
    EmptyContent,
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title is too long")]
    TitleTooLong,
}

/// Validated edit submission. `title` only matters when the edited
/// post turns out to be the topic's first post; it renames the topic.
#[derive(Debug, Clone, PartialEq)]
pub struct EditPostCommand {
    pub content: String,
    pub title: Option<String>,
}

impl EditPostCommand {
    pub fn new(content: &str, title: Option<&str>) -> Result<Self, EditPostCommandError> {
        let content = content.trim();

        if content.is_empty() {
            return Err(EditPostCommandError::EmptyContent);
        }

        let title = match title {
            Some(title) => {
                let title = title.trim();
                if title.is_empty() {
                    return Err(EditPostCommandError::EmptyTitle);
                }
                if title.chars().count() > MAX_TITLE_LENGTH {
                    return Err(EditPostCommandError::TitleTooLong);
                }
                Some(title.to_string())
            }
            None => None,
        };

        Ok(Self {
            content: content.to_string(),
            title,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditedPost {
    pub slug: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitEditError {
    #[error("Post not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitEditUseCase {
    async fn execute(
        &self,
        slug: &str,
        post_id: Uuid,
        command: EditPostCommand,
    ) -> Result<EditedPost, SubmitEditError>;
}
