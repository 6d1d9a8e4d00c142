use async_trait::async_trait;
use thiserror::Error;

use crate::topics::application::ports::outgoing::TopicRecord;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReplyFormError {
    #[error("Topic not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Fetch the topic a reply composer is being opened for.
#[async_trait]
pub trait ReplyFormUseCase {
    async fn execute(&self, slug: &str) -> Result<TopicRecord, ReplyFormError>;
}
