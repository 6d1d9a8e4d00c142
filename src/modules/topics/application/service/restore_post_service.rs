use async_trait::async_trait;
use uuid::Uuid;

use crate::topics::application::ports::incoming::use_cases::{
    RestorePostError, RestorePostUseCase, RestoredPost,
};
use crate::topics::application::ports::outgoing::{
    PostQuery, PostQueryError, PostRepository, PostRepositoryError, TopicChanges, TopicQuery,
    TopicQueryError, TopicRepository, TopicRepositoryError,
};

pub struct RestorePostService<TQ, PQ, PR, TR>
where
    TQ: TopicQuery,
    PQ: PostQuery,
    PR: PostRepository,
    TR: TopicRepository,
{
    topics: TQ,
    posts: PQ,
    post_repository: PR,
    topic_repository: TR,
}

impl<TQ, PQ, PR, TR> RestorePostService<TQ, PQ, PR, TR>
where
    TQ: TopicQuery,
    PQ: PostQuery,
    PR: PostRepository,
    TR: TopicRepository,
{
    pub fn new(topics: TQ, posts: PQ, post_repository: PR, topic_repository: TR) -> Self {
        Self {
            topics,
            posts,
            post_repository,
            topic_repository,
        }
    }
}

#[async_trait]
impl<TQ, PQ, PR, TR> RestorePostUseCase for RestorePostService<TQ, PQ, PR, TR>
where
    TQ: TopicQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
    PR: PostRepository + Send + Sync,
    TR: TopicRepository + Send + Sync,
{
    async fn execute(&self, slug: &str, post_id: Uuid) -> Result<RestoredPost, RestorePostError> {
        let topic = self.topics.find_by_slug(slug).await.map_err(|e| match e {
            TopicQueryError::NotFound => RestorePostError::NotFound,
            TopicQueryError::DatabaseError(msg) => RestorePostError::RepositoryError(msg),
        })?;

        let post = self.posts.find(post_id).await.map_err(|e| match e {
            PostQueryError::NotFound => RestorePostError::NotFound,
            PostQueryError::DatabaseError(msg) => RestorePostError::RepositoryError(msg),
        })?;

        // Only a deleted post under this topic can come back.
        if post.topic_id != topic.id || !post.is_deleted() {
            return Err(RestorePostError::NotFound);
        }

        self.post_repository
            .restore(post.id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound | PostRepositoryError::NotDeleted => {
                    RestorePostError::NotFound
                }
                other => RestorePostError::RepositoryError(other.to_string()),
            })?;

        // The restored post may now be the newest active one; point
        // the topic's last-post marker at whatever actually is.
        let active = self
            .posts
            .all_for_topic(topic.id, false)
            .await
            .map_err(|e| RestorePostError::RepositoryError(e.to_string()))?;
        let last_post_id = active.last().map(|p| p.id);

        self.topic_repository
            .edit(topic.id, TopicChanges::last_post(last_post_id))
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => RestorePostError::NotFound,
                TopicRepositoryError::DatabaseError(msg) => RestorePostError::RepositoryError(msg),
            })?;

        Ok(RestoredPost { slug: topic.slug })
    }
}
