use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::application::domain::entities::MemberId;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReplyCommandError {
    #[error("Content cannot be empty")]
    EmptyContent,
}

/// Validated reply submission. The author doubles as the viewer whose
/// posts-per-page setting decides the redirect page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyCommand {
    pub author: Option<MemberId>,
    pub content: String,
}

impl ReplyCommand {
    pub fn new(author: Option<MemberId>, content: &str) -> Result<Self, ReplyCommandError> {
        let content = content.trim();

        if content.is_empty() {
            return Err(ReplyCommandError::EmptyContent);
        }

        Ok(Self {
            author,
            content: content.to_string(),
        })
    }
}

/// Redirect data for a posted reply: the page it landed on and its
/// anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedReply {
    pub slug: String,
    pub page: u64,
    pub post_id: Uuid,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitReplyError {
    #[error("Topic not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitReplyUseCase {
    async fn execute(
        &self,
        slug: &str,
        command: ReplyCommand,
    ) -> Result<PostedReply, SubmitReplyError>;
}
