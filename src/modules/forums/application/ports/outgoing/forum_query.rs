use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ForumRecord {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ForumQueryError {
    #[error("Forum not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ForumQuery {
    async fn find(&self, forum_id: Uuid) -> Result<ForumRecord, ForumQueryError>;
    async fn find_by_slug(&self, slug: &str) -> Result<ForumRecord, ForumQueryError>;
}
