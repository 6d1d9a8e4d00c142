use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::application::domain::entities::MemberId;

#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub id: Uuid,
    pub topic_id: Uuid,
    /// `None` for guest posts.
    pub author: Option<MemberId>,
    /// Display name resolved at read time; "Guest" when anonymous.
    pub author_name: String,
    pub content: String,
    /// Set while the post is soft-deleted.
    pub deleted_at: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl PostRecord {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PostQueryError {
    #[error("Post not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostQuery {
    /// Look up one post, soft-deleted or not.
    async fn find(&self, post_id: Uuid) -> Result<PostRecord, PostQueryError>;

    /// Posts of a topic in reply order (oldest first).
    /// `include_deleted` keeps soft-deleted posts in place.
    async fn all_for_topic(
        &self,
        topic_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<PostRecord>, PostQueryError>;
}
