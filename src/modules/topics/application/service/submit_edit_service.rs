use async_trait::async_trait;
use uuid::Uuid;

use crate::topics::application::ports::incoming::use_cases::{
    EditPostCommand, EditedPost, SubmitEditError, SubmitEditUseCase,
};
use crate::topics::application::ports::outgoing::{
    PostQuery, PostQueryError, PostRepository, PostRepositoryError, TopicChanges, TopicQuery,
    TopicQueryError, TopicRepository, TopicRepositoryError,
};

pub struct SubmitEditService<TQ, PQ, PR, TR>
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

impl<TQ, PQ, PR, TR> SubmitEditService<TQ, PQ, PR, TR>
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
impl<TQ, PQ, PR, TR> SubmitEditUseCase for SubmitEditService<TQ, PQ, PR, TR>
where
    TQ: TopicQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
    PR: PostRepository + Send + Sync,
    TR: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        slug: &str,
        post_id: Uuid,
        command: EditPostCommand,
    ) -> Result<EditedPost, SubmitEditError> {
        let topic = self.topics.find_by_slug(slug).await.map_err(|e| match e {
            TopicQueryError::NotFound => SubmitEditError::NotFound,
            TopicQueryError::DatabaseError(msg) => SubmitEditError::RepositoryError(msg),
        })?;

        let post = self.posts.find(post_id).await.map_err(|e| match e {
            PostQueryError::NotFound => SubmitEditError::NotFound,
            PostQueryError::DatabaseError(msg) => SubmitEditError::RepositoryError(msg),
        })?;

        if post.topic_id != topic.id {
            return Err(SubmitEditError::NotFound);
        }

        self.post_repository
            .edit_content(post.id, &command.content)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => SubmitEditError::NotFound,
                other => SubmitEditError::RepositoryError(other.to_string()),
            })?;

        // Editing the opening post is how a topic gets renamed.
        if topic.first_post_id == Some(post.id) {
            if let Some(title) = command.title {
                self.topic_repository
                    .edit(topic.id, TopicChanges::title(title))
                    .await
                    .map_err(|e| match e {
                        TopicRepositoryError::NotFound => SubmitEditError::NotFound,
                        TopicRepositoryError::DatabaseError(msg) => {
                            SubmitEditError::RepositoryError(msg)
                        }
                    })?;
            }
        }

        Ok(EditedPost { slug: topic.slug })
    }
}
