use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::application::domain::entities::MemberId;

/// A topic as the application reads it. Soft-deleted topics never
/// come back through this port.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicRecord {
    pub id: Uuid,
    pub forum_id: Uuid,
    /// `None` for topics started by guests.
    pub author: Option<MemberId>,
    pub title: String,
    pub slug: String,
    pub views: i64,
    /// Count of non-deleted posts, maintained by the repository.
    pub num_posts: i64,
    pub first_post_id: Option<Uuid>,
    pub last_post_id: Option<Uuid>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// Listing row for a forum page.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub views: i64,
    pub num_posts: i64,
    pub last_post_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TopicQueryError {
    #[error("Topic not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery {
    async fn find(&self, topic_id: Uuid) -> Result<TopicRecord, TopicQueryError>;
    async fn find_by_slug(&self, slug: &str) -> Result<TopicRecord, TopicQueryError>;
    /// Live topics in a forum, most recently active first.
    async fn list_for_forum(&self, forum_id: Uuid) -> Result<Vec<TopicSummary>, TopicQueryError>;
    async fn slug_exists(&self, slug: &str) -> Result<bool, TopicQueryError>;
}
