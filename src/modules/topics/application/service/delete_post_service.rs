use async_trait::async_trait;
use uuid::Uuid;

use crate::forums::application::ports::outgoing::{ForumQuery, ForumQueryError};
use crate::topics::application::ports::incoming::use_cases::{
    DeleteOutcome, DeletePostError, DeletePostUseCase,
};
use crate::topics::application::ports::outgoing::{
    PostQuery, PostQueryError, PostRepository, PostRepositoryError, TopicChanges, TopicQuery,
    TopicQueryError, TopicRepository, TopicRepositoryError,
};

pub struct DeletePostService<TQ, PQ, PR, TR, FQ>
where
    TQ: TopicQuery,
    PQ: PostQuery,
    PR: PostRepository,
    TR: TopicRepository,
    FQ: ForumQuery,
{
    topics: TQ,
    posts: PQ,
    post_repository: PR,
    topic_repository: TR,
    forums: FQ,
}

impl<TQ, PQ, PR, TR, FQ> DeletePostService<TQ, PQ, PR, TR, FQ>
where
    TQ: TopicQuery,
    PQ: PostQuery,
    PR: PostRepository,
    TR: TopicRepository,
    FQ: ForumQuery,
{
    pub fn new(
        topics: TQ,
        posts: PQ,
        post_repository: PR,
        topic_repository: TR,
        forums: FQ,
    ) -> Self {
        Self {
            topics,
            posts,
            post_repository,
            topic_repository,
            forums,
        }
    }
}

#[async_trait]
impl<TQ, PQ, PR, TR, FQ> DeletePostUseCase for DeletePostService<TQ, PQ, PR, TR, FQ>
where
    TQ: TopicQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
    PR: PostRepository + Send + Sync,
    TR: TopicRepository + Send + Sync,
    FQ: ForumQuery + Send + Sync,
{
    async fn execute(&self, slug: &str, post_id: Uuid) -> Result<DeleteOutcome, DeletePostError> {
        let topic = self.topics.find_by_slug(slug).await.map_err(|e| match e {
            TopicQueryError::NotFound => DeletePostError::NotFound,
            TopicQueryError::DatabaseError(msg) => DeletePostError::RepositoryError(msg),
        })?;

        let post = self.posts.find(post_id).await.map_err(|e| match e {
            PostQueryError::NotFound => DeletePostError::NotFound,
            PostQueryError::DatabaseError(msg) => DeletePostError::RepositoryError(msg),
        })?;

        if post.topic_id != topic.id {
            return Err(DeletePostError::NotFound);
        }

        // Deleting the opening post takes the whole topic down. The
        // post row itself stays active under the deleted topic, ready
        // for the topic's own restore.
        if topic.first_post_id == Some(post.id) {
            let forum = self
                .forums
                .find(topic.forum_id)
                .await
                .map_err(|e| match e {
                    ForumQueryError::NotFound => DeletePostError::RepositoryError(format!(
                        "forum {} missing for topic {}",
                        topic.forum_id, topic.id
                    )),
                    ForumQueryError::DatabaseError(msg) => DeletePostError::RepositoryError(msg),
                })?;

            self.topic_repository
                .soft_delete(topic.id)
                .await
                .map_err(|e| match e {
                    TopicRepositoryError::NotFound => DeletePostError::NotFound,
                    TopicRepositoryError::DatabaseError(msg) => {
                        DeletePostError::RepositoryError(msg)
                    }
                })?;

            return Ok(DeleteOutcome::TopicDeleted {
                forum_slug: forum.slug,
            });
        }

        // When the newest active post goes away, the marker falls back
        // to the one before it.
        if topic.last_post_id == Some(post.id) && !post.is_deleted() {
            let active = self
                .posts
                .all_for_topic(topic.id, false)
                .await
                .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?;

            let predecessor = if active.len() >= 2 {
                Some(active[active.len() - 2].id)
            } else {
                None
            };

            self.topic_repository
                .edit(topic.id, TopicChanges::last_post(predecessor))
                .await
                .map_err(|e| match e {
                    TopicRepositoryError::NotFound => DeletePostError::NotFound,
                    TopicRepositoryError::DatabaseError(msg) => {
                        DeletePostError::RepositoryError(msg)
                    }
                })?;
        }

        match self.post_repository.soft_delete(post.id).await {
            // Deleting twice lands in the same place.
            Ok(()) | Err(PostRepositoryError::AlreadyDeleted) => {}
            Err(PostRepositoryError::NotFound) => return Err(DeletePostError::NotFound),
            Err(other) => return Err(DeletePostError::RepositoryError(other.to_string())),
        }

        Ok(DeleteOutcome::PostDeleted {
            topic_slug: topic.slug,
        })
    }
}
