use async_trait::async_trait;
use thiserror::Error;

use crate::topics::application::ports::outgoing::{PostRecord, TopicRecord};

/// Topic page data: the topic and every post in reply order,
/// soft-deleted ones included so the thread keeps its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicPage {
    pub topic: TopicRecord,
    pub posts: Vec<PostRecord>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShowTopicError {
    #[error("Topic not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// View a topic. Counts the view as a side effect.
#[async_trait]
pub trait ShowTopicUseCase {
    async fn execute(&self, slug: &str) -> Result<TopicPage, ShowTopicError>;
}
