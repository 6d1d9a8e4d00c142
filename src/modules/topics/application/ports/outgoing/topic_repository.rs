use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::application::domain::entities::MemberId;

use super::topic_query::TopicRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct NewTopic {
    pub forum_id: Uuid,
    pub author: Option<MemberId>,
    pub title: String,
    pub slug: String,
}

/// Partial update. `None` fields stay untouched; the inner option of
/// `last_post_id` is the column's nullable value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicChanges {
    pub title: Option<String>,
    pub last_post_id: Option<Option<Uuid>>,
}

impl TopicChanges {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn last_post(last_post_id: Option<Uuid>) -> Self {
        Self {
            last_post_id: Some(last_post_id),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.last_post_id.is_none()
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TopicRepositoryError {
    #[error("Topic not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicRepository {
    /// Insert a topic shell: counters at zero, no first/last post yet.
    /// Those fill in as posts are added through the post repository.
    async fn create(&self, data: NewTopic) -> Result<TopicRecord, TopicRepositoryError>;

    async fn edit(
        &self,
        topic_id: Uuid,
        changes: TopicChanges,
    ) -> Result<(), TopicRepositoryError>;

    /// Atomic `views = views + 1`; concurrent viewers must not lose
    /// increments.
    async fn increment_views(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;

    /// Soft-delete the topic row. Its posts are left as they are;
    /// they become unreachable along with the topic.
    async fn soft_delete(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
