use async_trait::async_trait;

use crate::topics::application::ports::incoming::use_cases::{
    ShowTopicError, ShowTopicUseCase, TopicPage,
};
use crate::topics::application::ports::outgoing::{
    PostQuery, PostQueryError, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
};

pub struct ShowTopicService<TQ, TR, PQ>
where
    TQ: TopicQuery,
    TR: TopicRepository,
    PQ: PostQuery,
{
    topics: TQ,
    topic_repository: TR,
    posts: PQ,
}

impl<TQ, TR, PQ> ShowTopicService<TQ, TR, PQ>
where
    TQ: TopicQuery,
    TR: TopicRepository,
    PQ: PostQuery,
{
    pub fn new(topics: TQ, topic_repository: TR, posts: PQ) -> Self {
        Self {
            topics,
            topic_repository,
            posts,
        }
    }
}

#[async_trait]
impl<TQ, TR, PQ> ShowTopicUseCase for ShowTopicService<TQ, TR, PQ>
where
    TQ: TopicQuery + Send + Sync,
    TR: TopicRepository + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<TopicPage, ShowTopicError> {
        let topic = self.topics.find_by_slug(slug).await.map_err(|e| match e {
            TopicQueryError::NotFound => ShowTopicError::NotFound,
            TopicQueryError::DatabaseError(msg) => ShowTopicError::RepositoryError(msg),
        })?;

        self.topic_repository
            .increment_views(topic.id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => ShowTopicError::NotFound,
                TopicRepositoryError::DatabaseError(msg) => ShowTopicError::RepositoryError(msg),
            })?;

        // Deleted posts stay in the listing so the thread keeps its
        // shape; the view greys them out and offers restore.
        let posts = self
            .posts
            .all_for_topic(topic.id, true)
            .await
            .map_err(|e| match e {
                PostQueryError::NotFound => ShowTopicError::RepositoryError(e.to_string()),
                PostQueryError::DatabaseError(msg) => ShowTopicError::RepositoryError(msg),
            })?;

        Ok(TopicPage { topic, posts })
    }
}
