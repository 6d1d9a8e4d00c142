use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct RestoredPost {
    pub slug: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestorePostError {
    #[error("Post not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Bring a soft-deleted post back. Only posts that are currently
/// deleted qualify; anything else is NotFound.
#[async_trait]
pub trait RestorePostUseCase {
    async fn execute(&self, slug: &str, post_id: Uuid) -> Result<RestoredPost, RestorePostError>;
}
