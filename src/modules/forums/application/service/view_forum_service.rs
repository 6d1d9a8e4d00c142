use async_trait::async_trait;

use crate::forums::application::ports::incoming::use_cases::{
    ForumPage, ViewForumError, ViewForumUseCase,
};
use crate::forums::application::ports::outgoing::{ForumQuery, ForumQueryError};
use crate::topics::application::ports::outgoing::{TopicQuery, TopicQueryError};

pub struct ViewForumService<F, T>
where
    F: ForumQuery,
    T: TopicQuery,
{
    forums: F,
    topics: T,
}

impl<F, T> ViewForumService<F, T>
where
    F: ForumQuery,
    T: TopicQuery,
{
    pub fn new(forums: F, topics: T) -> Self {
        Self { forums, topics }
    }
}

#[async_trait]
impl<F, T> ViewForumUseCase for ViewForumService<F, T>
where
    F: ForumQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ForumPage, ViewForumError> {
        let forum = self.forums.find_by_slug(slug).await.map_err(|e| match e {
            ForumQueryError::NotFound => ViewForumError::NotFound,
            ForumQueryError::DatabaseError(msg) => ViewForumError::RepositoryError(msg),
        })?;

        let topics = self
            .topics
            .list_for_forum(forum.id)
            .await
            .map_err(|e| match e {
                TopicQueryError::NotFound => ViewForumError::RepositoryError(e.to_string()),
                TopicQueryError::DatabaseError(msg) => ViewForumError::RepositoryError(msg),
            })?;

        Ok(ForumPage { forum, topics })
    }
}
