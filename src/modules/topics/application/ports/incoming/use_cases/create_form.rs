use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::forums::application::ports::outgoing::ForumRecord;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateFormError {
    #[error("Forum not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Fetch the forum a new topic is being composed in.
#[async_trait]
pub trait CreateFormUseCase {
    async fn execute(&self, forum_id: Uuid) -> Result<ForumRecord, CreateFormError>;
}
