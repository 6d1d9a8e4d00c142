use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// What deleting a post did, which decides where to send the client.
///
/// Deleting a topic's first post takes the whole topic down with it.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    TopicDeleted { forum_slug: String },
    PostDeleted { topic_slug: String },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeletePostError {
    #[error("Post not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePostUseCase {
    async fn execute(&self, slug: &str, post_id: Uuid) -> Result<DeleteOutcome, DeletePostError>;
}
