use async_trait::async_trait;
use thiserror::Error;

use crate::forums::application::ports::outgoing::ForumRecord;
use crate::topics::application::ports::outgoing::TopicSummary;

/// Everything the forum page shows: the forum itself plus its topic
/// listing, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ForumPage {
    pub forum: ForumRecord,
    pub topics: Vec<TopicSummary>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ViewForumError {
    #[error("Forum not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ViewForumUseCase {
    async fn execute(&self, slug: &str) -> Result<ForumPage, ViewForumError>;
}
