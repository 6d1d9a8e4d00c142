use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::application::domain::entities::MemberId;

#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub topic_id: Uuid,
    pub author: Option<MemberId>,
    pub content: String,
}

/// Insert outcome, with the topic's post count as it stood right
/// after the insert. Callers compute redirect pagination from this
/// instead of a stale pre-insert read.
#[derive(Debug, Clone, PartialEq)]
pub struct PostAdded {
    pub post_id: Uuid,
    pub topic_num_posts: i64,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,
    #[error("Post is already deleted")]
    AlreadyDeleted,
    #[error("Post is not deleted")]
    NotDeleted,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository {
    /// Append a post to a live topic. In the same transaction the
    /// topic's `num_posts` and `last_post_id` advance, and
    /// `first_post_id` is claimed if the topic had none yet.
    async fn add_to_topic(&self, data: NewPost) -> Result<PostAdded, PostRepositoryError>;

    async fn edit_content(&self, post_id: Uuid, content: &str)
        -> Result<(), PostRepositoryError>;

    /// Soft-delete an active post and drop the topic's `num_posts` by
    /// one. Deleting an already-deleted post fails with
    /// `AlreadyDeleted` and leaves the counter alone.
    async fn soft_delete(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;

    /// Bring a soft-deleted post back and raise `num_posts` by one.
    /// Restoring an active post fails with `NotDeleted`.
    async fn restore(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;
}
