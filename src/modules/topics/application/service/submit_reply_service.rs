use async_trait::async_trait;

use crate::auth::application::ports::outgoing::MemberQuery;
use crate::topics::application::domain::pagination;
use crate::topics::application::ports::incoming::use_cases::{
    PostedReply, ReplyCommand, SubmitReplyError, SubmitReplyUseCase,
};
use crate::topics::application::ports::outgoing::{
    NewPost, PostRepository, PostRepositoryError, TopicQuery, TopicQueryError,
};

pub struct SubmitReplyService<TQ, PR, MQ>
where
    TQ: TopicQuery,
    PR: PostRepository,
    MQ: MemberQuery,
{
    topics: TQ,
    post_repository: PR,
    members: MQ,
}

impl<TQ, PR, MQ> SubmitReplyService<TQ, PR, MQ>
where
    TQ: TopicQuery,
    PR: PostRepository,
    MQ: MemberQuery,
{
    pub fn new(topics: TQ, post_repository: PR, members: MQ) -> Self {
        Self {
            topics,
            post_repository,
            members,
        }
    }
}

#[async_trait]
impl<TQ, PR, MQ> SubmitReplyUseCase for SubmitReplyService<TQ, PR, MQ>
where
    TQ: TopicQuery + Send + Sync,
    PR: PostRepository + Send + Sync,
    MQ: MemberQuery + Send + Sync,
{
    async fn execute(
        &self,
        slug: &str,
        command: ReplyCommand,
    ) -> Result<PostedReply, SubmitReplyError> {
        let topic = self.topics.find_by_slug(slug).await.map_err(|e| match e {
            TopicQueryError::NotFound => SubmitReplyError::NotFound,
            TopicQueryError::DatabaseError(msg) => SubmitReplyError::RepositoryError(msg),
        })?;

        let added = self
            .post_repository
            .add_to_topic(NewPost {
                topic_id: topic.id,
                author: command.author,
                content: command.content,
            })
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => SubmitReplyError::NotFound,
                other => SubmitReplyError::RepositoryError(other.to_string()),
            })?;

        // The landing page comes from the count as of this insert, so
        // a reply that opens a fresh page redirects to that page.
        let posts_per_page = pagination::effective_posts_per_page(&self.members, command.author)
            .await
            .map_err(|e| SubmitReplyError::RepositoryError(e.to_string()))?;
        let page = pagination::last_page(added.topic_num_posts, posts_per_page);

        Ok(PostedReply {
            slug: topic.slug,
            page,
            post_id: added.post_id,
        })
    }
}
