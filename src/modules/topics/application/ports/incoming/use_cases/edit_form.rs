use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::topics::application::ports::outgoing::{PostRecord, TopicRecord};

/// Data behind the edit composer. `is_first_post` tells the form to
/// offer the topic title for editing too.
#[derive(Debug, Clone, PartialEq)]
pub struct EditFormData {
    pub topic: TopicRecord,
    pub post: PostRecord,
    pub is_first_post: bool,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EditFormError {
    #[error("Post not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditFormUseCase {
    async fn execute(&self, slug: &str, post_id: Uuid) -> Result<EditFormData, EditFormError>;
}
